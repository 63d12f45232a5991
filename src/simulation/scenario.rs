//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a runtime
//! `Scenario` containing:
//! - engine settings (`Engine`)
//! - numerical parameters (`Parameters`)
//! - system state at t = 0 (`RestrictedSystem`)

use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::configuration::config::{MassiveBodyConfig, ScenarioConfig, TracerConfig};
use crate::error::{SimError, SimResult};
use crate::simulation::engine::Engine;
use crate::simulation::initial::{mice, MiceParameters};
use crate::simulation::integrator::run_leapfrog;
use crate::simulation::params::Parameters;
use crate::simulation::states::{NVec3, Population, RestrictedSystem, RestrictedTrajectories};

/// Runtime bundle constructed from a [`ScenarioConfig`]
#[derive(Debug, Clone)]
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub system: RestrictedSystem,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> SimResult<Self> {
        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        let steps = usize::try_from(p_cfg.steps).map_err(|_| SimError::NegativeSteps(p_cfg.steps))?;
        if !p_cfg.epsilon.is_finite() || p_cfg.epsilon < 0.0 {
            return Err(SimError::InvalidSoftening(p_cfg.epsilon));
        }
        let parameters = Parameters {
            steps,
            dt: p_cfg.dt,
            epsilon: p_cfg.epsilon,
        };

        // Engine (runtime) from EngineConfig
        let engine = Engine {
            kernel: cfg.engine.kernel,
        };

        // Generated galaxies first, explicit bodies after
        let init = cfg.initial;
        let mut system = match &init.mice {
            Some(m) => {
                let params = MiceParameters {
                    r_min: m.r_min,
                    mass: m.mass,
                    eccentricity: m.eccentricity,
                    inclination_a: m.inclination_a,
                    inclination_b: m.inclination_b,
                    epsilon: parameters.epsilon,
                };
                let mut rng = StdRng::seed_from_u64(m.seed);
                mice(&params, m.jitter, &mut rng)?
            }
            None => RestrictedSystem::new(Population::default(), Population::default(), Vec::new())?,
        };

        system.massive.extend(massive_population(&init.massive));
        system.masses.extend(init.massive.iter().map(|b| b.m));
        system.massless.extend(tracer_population(&init.massless));

        debug!(
            "scenario: {} massless, {} massive, kernel {:?}",
            system.massless.len(),
            system.massive.len(),
            engine.kernel
        );

        Ok(Self {
            engine,
            parameters,
            system,
        })
    }

    /// Integrate the scenario with its configured kernel
    pub fn run(&self) -> SimResult<RestrictedTrajectories> {
        let p = &self.parameters;
        info!(
            "running {} steps of dt = {} ({} massless, {} massive)",
            p.steps,
            p.dt,
            self.system.massless.len(),
            self.system.massive.len()
        );
        run_leapfrog(self.engine.kernel(), self.system.clone(), p.steps, p.dt, p.epsilon)
    }
}

fn massive_population(bodies: &[MassiveBodyConfig]) -> Population {
    Population {
        x: bodies.iter().map(|b| NVec3::from(b.x)).collect(),
        v: bodies.iter().map(|b| NVec3::from(b.v)).collect(),
    }
}

fn tracer_population(bodies: &[TracerConfig]) -> Population {
    Population {
        x: bodies.iter().map(|b| NVec3::from(b.x)).collect(),
        v: bodies.iter().map(|b| NVec3::from(b.v)).collect(),
    }
}
