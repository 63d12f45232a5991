//! High-level runtime engine settings
//!
//! Selects which force kernel evaluates the direct sums

use crate::configuration::config::KernelConfig;
use crate::simulation::forces::{DirectSum, ForceKernel, ParallelDirectSum};

#[derive(Debug, Clone)]
pub struct Engine {
    pub kernel: KernelConfig, // reference or parallel
}

impl Engine {
    /// Kernel object matching the configured choice
    pub fn kernel(&self) -> &'static dyn ForceKernel {
        match self.kernel {
            KernelConfig::Reference => &DirectSum,
            KernelConfig::Parallel => &ParallelDirectSum,
        }
    }
}
