//! Initial conditions for a "Mice"-style galaxy encounter
//!
//! Each galaxy is a point mass carrying a flat disk of massless tracers
//! on circular orbits. The two hosts start at apocentre of a bound
//! Keplerian orbit and each disk is tilted about the x axis.

use std::f64::consts::PI;

use nalgebra::Rotation3;
use rand::Rng;

use super::states::{NVec3, Population, RestrictedSystem};
use crate::error::{SimError, SimResult};

/// Number of rings in a disk
pub const RINGS: usize = 11;

/// Tracers in ring `i`
pub fn ring_count(i: usize) -> usize {
    12 + 3 * i
}

/// Radius of ring `i` in units of `r_min`
pub fn ring_radius(i: usize, r_min: f64) -> f64 {
    (0.2 + 0.05 * i as f64) * r_min
}

/// Circular speed at radius `r` around a point mass, for the softened
/// law `a = m r / (r + eps)^3`
pub fn circular_speed(r: f64, mass: f64, eps: f64) -> f64 {
    let d = r + eps;
    r * (mass / (d * d * d)).sqrt()
}

/// Flat disk of tracers in the xy plane centred on a point mass at the
/// origin, orbiting counter-clockwise seen from +z
pub fn ring_disk(r_min: f64, mass: f64, eps: f64) -> Population {
    let total: usize = (0..RINGS).map(ring_count).sum();
    let mut pop = Population {
        x: Vec::with_capacity(total),
        v: Vec::with_capacity(total),
    };

    for i in 0..RINGS {
        let count = ring_count(i);
        let radius = ring_radius(i, r_min);
        let speed = circular_speed(radius, mass, eps);

        for j in 0..count {
            let angle = 2.0 * PI * j as f64 / count as f64;
            let (s, c) = angle.sin_cos();
            pop.x.push(NVec3::new(radius * c, radius * s, 0.0));
            pop.v.push(NVec3::new(-speed * s, speed * c, 0.0));
        }
    }
    pop
}

/// Rotate positions and velocities by `angle` radians about +x
pub fn rotate_about_x(pop: &mut Population, angle: f64) {
    let rot = Rotation3::from_axis_angle(&NVec3::x_axis(), angle);
    for x in pop.x.iter_mut() {
        *x = rot * *x;
    }
    for v in pop.v.iter_mut() {
        *v = rot * *v;
    }
}

/// Shift every body by `dx` and boost it by `dv`
pub fn translate(pop: &mut Population, dx: &NVec3, dv: &NVec3) {
    for x in pop.x.iter_mut() {
        *x += dx;
    }
    for v in pop.v.iter_mut() {
        *v += dv;
    }
}

/// Random displacement of each tracer, uniform in a cube of half-width
/// `amplitude`. The generator is owned by the caller. Non-finite or
/// non-positive amplitudes leave the population untouched.
pub fn jitter_positions(pop: &mut Population, amplitude: f64, rng: &mut impl Rng) {
    if !(amplitude.is_finite() && amplitude > 0.0) {
        return;
    }
    for x in pop.x.iter_mut() {
        *x += NVec3::new(
            rng.random_range(-amplitude..amplitude),
            rng.random_range(-amplitude..amplitude),
            rng.random_range(-amplitude..amplitude),
        );
    }
}

fn invalid<T>(field: &'static str, value: f64, reason: &'static str) -> SimResult<T> {
    Err(SimError::InvalidGalaxy { field, value, reason })
}

/// Encounter setup shared by both galaxies
#[derive(Debug, Clone, PartialEq)]
pub struct MiceParameters {
    pub r_min: f64,         // pericentre distance of each host from the centre of mass
    pub mass: f64,          // mass of each host
    pub eccentricity: f64,  // of the relative orbit, 0 <= e < 1
    pub inclination_a: f64, // disk tilt of galaxy A (radians)
    pub inclination_b: f64, // disk tilt of galaxy B (radians)
    pub epsilon: f64,       // softening used for the disk rotation curve
}

impl MiceParameters {
    /// Reject setups that would place the hosts at infinity or produce
    /// a degenerate disk
    pub fn validate(&self) -> SimResult<()> {
        if !(self.r_min.is_finite() && self.r_min > 0.0) {
            return invalid("r_min", self.r_min, "must be finite and positive");
        }
        if !(self.eccentricity >= 0.0 && self.eccentricity < 1.0) {
            return invalid("eccentricity", self.eccentricity, "must lie in [0, 1)");
        }
        Ok(())
    }

    /// Distance of each host from the centre of mass at apocentre
    pub fn apocentre(&self) -> f64 {
        self.r_min * (1.0 + self.eccentricity) / (1.0 - self.eccentricity)
    }

    /// Speed of each host at apocentre, half the relative orbital speed
    pub fn apocentre_speed(&self) -> f64 {
        // relative orbit: total mass 2M, separation 2 R_apo
        let v_rel = (self.mass * (1.0 - self.eccentricity) / self.apocentre()).sqrt();
        0.5 * v_rel
    }
}

/// Two tilted disk galaxies at apocentre.
/// Galaxy A sits at `(0, -R_apo, 0)`, galaxy B at `(0, R_apo, 0)`;
/// tracers of A come first in the massless population.
pub fn mice(p: &MiceParameters, jitter: f64, rng: &mut impl Rng) -> SimResult<RestrictedSystem> {
    p.validate()?;
    if !(jitter.is_finite() && jitter >= 0.0) {
        return invalid("jitter", jitter, "must be finite and non-negative");
    }

    let r_apo = p.apocentre();
    let speed = p.apocentre_speed();

    let host_x = [NVec3::new(0.0, -r_apo, 0.0), NVec3::new(0.0, r_apo, 0.0)];
    let host_v = [NVec3::new(speed, 0.0, 0.0), NVec3::new(-speed, 0.0, 0.0)];
    let tilts = [p.inclination_a, -p.inclination_b];

    let mut tracers = Population::default();
    for k in 0..2 {
        let mut disk = ring_disk(p.r_min, p.mass, p.epsilon);
        rotate_about_x(&mut disk, tilts[k]);
        jitter_positions(&mut disk, jitter, rng);
        translate(&mut disk, &host_x[k], &host_v[k]);
        tracers.extend(disk);
    }

    let hosts = Population::new(host_x.to_vec(), host_v.to_vec())?;
    RestrictedSystem::new(tracers, hosts, vec![p.mass, p.mass])
}
