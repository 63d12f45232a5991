//! Fixed-step kick-drift-kick leapfrog for the restricted N-body system
//!
//! Massive bodies are driven by each other through the direct kernel,
//! tracers by the massive bodies through the restricted kernel. Both
//! populations are kicked, drifted and kicked again in lockstep so the
//! tracers always see the massive bodies where they actually were.

use log::debug;

use super::forces::{DirectSum, ForceKernel};
use super::states::{NVec3, Population, RestrictedSystem, RestrictedTrajectories, Trajectory};
use crate::error::{SimError, SimResult};

/// Accelerations of both populations at the current positions
#[derive(Debug, Clone)]
pub struct Accels {
    pub massless: Vec<NVec3>,
    pub massive: Vec<NVec3>,
}

impl Accels {
    /// Evaluate both kernels at the current state of `sys`
    pub fn evaluate<K: ForceKernel + ?Sized>(kernel: &K, sys: &RestrictedSystem, eps: f64) -> Self {
        let mut a = Self {
            massless: vec![NVec3::zeros(); sys.massless.len()],
            massive: vec![NVec3::zeros(); sys.massive.len()],
        };
        a.refresh(kernel, sys, eps);
        a
    }

    fn refresh<K: ForceKernel + ?Sized>(&mut self, kernel: &K, sys: &RestrictedSystem, eps: f64) {
        let m = &sys.massive.x;
        kernel.accelerations(&sys.massless.x, m, &sys.masses, eps, &mut self.massless);
        kernel.accelerations(m, m, &sys.masses, eps, &mut self.massive);
    }
}

/// v += (dt/2) * a
fn kick(pop: &mut Population, a: &[NVec3], half_dt: f64) {
    for (v, a) in pop.v.iter_mut().zip(a.iter()) {
        *v += half_dt * *a;
    }
}

/// x += dt * v
fn drift(pop: &mut Population, dt: f64) {
    for (x, v) in pop.x.iter_mut().zip(pop.v.iter()) {
        *x += dt * *v;
    }
}

/// Advance `sys` by one step.
/// `accels` must hold the accelerations at the current positions on entry;
/// on return it holds the accelerations at the new positions, ready for
/// the next step.
pub fn leapfrog_step<K: ForceKernel + ?Sized>(
    kernel: &K,
    sys: &mut RestrictedSystem,
    accels: &mut Accels,
    dt: f64,
    eps: f64,
) {
    let half_dt = 0.5 * dt;

    // Kick: v_n+1/2 = v_n + (dt/2) a(x_n)
    kick(&mut sys.massless, &accels.massless, half_dt);
    kick(&mut sys.massive, &accels.massive, half_dt);

    // Drift: x_n+1 = x_n + dt v_n+1/2
    drift(&mut sys.massless, dt);
    drift(&mut sys.massive, dt);

    sys.t += dt;

    // a(x_n+1), tracers against the post-drift massive positions
    accels.refresh(kernel, sys, eps);

    // Kick: v_n+1 = v_n+1/2 + (dt/2) a(x_n+1)
    kick(&mut sys.massless, &accels.massless, half_dt);
    kick(&mut sys.massive, &accels.massive, half_dt);
}

/// Run `steps` leapfrog steps from `sys`, returning every frame.
/// Frame 0 is `sys` itself. With `steps == 0` no kernel is called.
pub fn run_leapfrog<K: ForceKernel + ?Sized>(
    kernel: &K,
    mut sys: RestrictedSystem,
    steps: usize,
    dt: f64,
    eps: f64,
) -> SimResult<RestrictedTrajectories> {
    if !eps.is_finite() || eps < 0.0 {
        return Err(SimError::InvalidSoftening(eps));
    }

    let frames = steps + 1;
    let mut massless = Trajectory::zeros(frames, sys.massless.len());
    let mut massive = Trajectory::zeros(frames, sys.massive.len());
    massless.record(0, &sys.massless);
    massive.record(0, &sys.massive);

    if steps > 0 {
        debug!(
            "leapfrog: {} massless, {} massive, {} steps, dt = {}, eps = {}",
            sys.massless.len(),
            sys.massive.len(),
            steps,
            dt,
            eps
        );

        let mut accels = Accels::evaluate(kernel, &sys, eps);
        for k in 1..frames {
            leapfrog_step(kernel, &mut sys, &mut accels, dt, eps);
            massless.record(k, &sys.massless);
            massive.record(k, &sys.massive);
        }
    }

    Ok(RestrictedTrajectories { massless, massive })
}

/// Integrate with an explicit kernel.
/// Returns `(steps + 1)`-frame trajectories for tracers and massive bodies.
#[allow(clippy::too_many_arguments)]
pub fn integrate_with<K: ForceKernel + ?Sized>(
    kernel: &K,
    pos0: &[NVec3],
    vel0: &[NVec3],
    pos0_m: &[NVec3],
    vel0_m: &[NVec3],
    steps: usize,
    dt: f64,
    masses: &[f64],
    eps: f64,
) -> SimResult<RestrictedTrajectories> {
    let massless = Population::new(pos0.to_vec(), vel0.to_vec())?;
    let massive = Population::new(pos0_m.to_vec(), vel0_m.to_vec())?;
    let sys = RestrictedSystem::new(massless, massive, masses.to_vec())?;
    run_leapfrog(kernel, sys, steps, dt, eps)
}

/// Integrate with the reference kernel
#[allow(clippy::too_many_arguments)]
pub fn integrate(
    pos0: &[NVec3],
    vel0: &[NVec3],
    pos0_m: &[NVec3],
    vel0_m: &[NVec3],
    steps: usize,
    dt: f64,
    masses: &[f64],
    eps: f64,
) -> SimResult<RestrictedTrajectories> {
    integrate_with(&DirectSum, pos0, vel0, pos0_m, vel0_m, steps, dt, masses, eps)
}
