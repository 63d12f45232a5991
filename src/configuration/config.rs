//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! restricted N-body scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – which force kernel evaluates the sums
//! - [`ParametersConfig`] – step count, step size and softening
//! - [`InitialConfig`]    – a generated galaxy pair and/or explicit bodies
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario matching these types:
//!
//! ```yaml
//! engine:
//!   kernel: "parallel"      # or "reference"
//!
//! parameters:
//!   steps: 2000             # number of fixed leapfrog steps
//!   dt: 0.01                # step size, negative runs backward
//!   epsilon: 0.1            # softening
//!
//! initial:
//!   mice:
//!     r_min: 25.0
//!     mass: 1.0
//!     eccentricity: 0.6
//!     inclination_a: 0.25
//!     inclination_b: 0.25
//!     jitter: 0.0
//!     seed: 42
//!   massive:
//!     - x: [ 0.0, 0.0, 50.0 ]
//!       v: [ 0.0, 0.0, 0.0 ]
//!       m: 0.1
//!   massless:
//!     - x: [ 1.0, 0.0, 0.0 ]
//!       v: [ 0.0, 1.0, 0.0 ]
//! ```
//!
//! Explicit bodies are appended after any generated ones.

use serde::Deserialize;

/// Which force kernel the engine uses
/// `kernel: "reference"` or `kernel: "parallel"`
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KernelConfig {
    #[serde(rename = "reference")] // Single-threaded double loop
    Reference,

    #[default]
    #[serde(rename = "parallel")] // Targets spread over the rayon pool, same result bit for bit
    Parallel,
}

/// High-level engine configuration
#[derive(Deserialize, Debug, Clone, Default)]
pub struct EngineConfig {
    #[serde(default)]
    pub kernel: KernelConfig,
}

/// Numerical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub steps: i64,   // signed so a negative count is reported, not misparsed
    pub dt: f64,      // time step size
    pub epsilon: f64, // softening - prevent singular forces at very small separations
}

/// Generated galaxy pair, see [`crate::simulation::initial::mice`]
#[derive(Deserialize, Debug, Clone)]
pub struct MiceConfig {
    pub r_min: f64,
    pub mass: f64,
    pub eccentricity: f64,
    #[serde(default)]
    pub inclination_a: f64,
    #[serde(default)]
    pub inclination_b: f64,
    #[serde(default)]
    pub jitter: f64, // tracer position noise amplitude
    #[serde(default)]
    pub seed: u64, // seed for the jitter generator
}

/// Initial state of a massive body
#[derive(Deserialize, Debug, Clone)]
pub struct MassiveBodyConfig {
    pub x: [f64; 3], // position
    pub v: [f64; 3], // velocity
    pub m: f64,      // mass, G folded in
}

/// Initial state of a tracer
#[derive(Deserialize, Debug, Clone)]
pub struct TracerConfig {
    pub x: [f64; 3],
    pub v: [f64; 3],
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct InitialConfig {
    #[serde(default)]
    pub mice: Option<MiceConfig>,
    #[serde(default)]
    pub massive: Vec<MassiveBodyConfig>,
    #[serde(default)]
    pub massless: Vec<TracerConfig>,
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub engine: EngineConfig, // kernel choice
    pub parameters: ParametersConfig, // step count, step size, softening
    #[serde(default)]
    pub initial: InitialConfig, // bodies at t = 0
}
