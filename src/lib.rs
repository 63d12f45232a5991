pub mod simulation;
pub mod configuration;
pub mod output;
pub mod benchmark;
pub mod error;

pub use error::{SimError, SimResult};

pub use simulation::states::{NVec3, Population, RestrictedSystem, Trajectory, RestrictedTrajectories};
pub use simulation::forces::{ForceKernel, DirectSum, ParallelDirectSum, force_on_massless, force_direct};
pub use simulation::integrator::{integrate, integrate_with, leapfrog_step, run_leapfrog, Accels};
pub use simulation::initial::{mice, ring_disk, MiceParameters};
pub use simulation::diagnostics::{energy_history, relative_energy_drift, total_momentum, EnergyRecord};
pub use simulation::scenario::Scenario;

pub use configuration::config::{EngineConfig, KernelConfig, ParametersConfig, InitialConfig, ScenarioConfig};

pub use output::csv::write_trajectories;

pub use benchmark::benchmark::{bench_kernels, bench_leapfrog};
