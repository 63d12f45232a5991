//! Core state types for the restricted N-body simulation.
//!
//! Everything is stored structure-of-arrays: a point set is a `Vec<NVec3>`
//! and index `i` refers to the same body in positions, velocities and
//! (for massive bodies) the parallel `masses` vector.
//!
//! - `Population`        positions + velocities of one kind of body
//! - `RestrictedSystem`  massless tracers, massive bodies, masses and time `t`
//! - `Trajectory`        one frame per step, frame 0 is the initial condition

use nalgebra::Vector3;
pub type NVec3 = Vector3<f64>;

use crate::error::{check_len, SimResult};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Population {
    pub x: Vec<NVec3>, // positions
    pub v: Vec<NVec3>, // velocities
}

impl Population {
    /// Pair a point set with its velocity set, checking they line up
    pub fn new(x: Vec<NVec3>, v: Vec<NVec3>) -> SimResult<Self> {
        check_len("velocity set", x.len(), v.len())?;
        Ok(Self { x, v })
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Append another population (index order: self first, then `other`)
    pub fn extend(&mut self, other: Population) {
        self.x.extend(other.x);
        self.v.extend(other.v);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RestrictedSystem {
    pub massless: Population, // tracers, feel gravity but never source it
    pub massive: Population,  // bodies that pull on everything
    pub masses: Vec<f64>,     // one entry per massive body
    pub t: f64,               // time
}

impl RestrictedSystem {
    /// Build a system, rejecting a mass vector that does not match the
    /// massive point count
    pub fn new(massless: Population, massive: Population, masses: Vec<f64>) -> SimResult<Self> {
        check_len("velocity set (massless)", massless.x.len(), massless.v.len())?;
        check_len("velocity set (massive)", massive.x.len(), massive.v.len())?;
        check_len("mass vector", massive.x.len(), masses.len())?;
        Ok(Self {
            massless,
            massive,
            masses,
            t: 0.0,
        })
    }
}

/// Time series of one population. Frames past the last written step are
/// zero filler.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    pub x: Vec<Vec<NVec3>>, // x[k][i] position of body i after k steps
    pub v: Vec<Vec<NVec3>>, // v[k][i] velocity of body i after k steps
}

impl Trajectory {
    /// Zeroed buffers for `frames` frames of `n` bodies
    pub fn zeros(frames: usize, n: usize) -> Self {
        Self {
            x: vec![vec![NVec3::zeros(); n]; frames],
            v: vec![vec![NVec3::zeros(); n]; frames],
        }
    }

    /// Number of frames (steps + 1)
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Copy the state of `pop` into frame `k`
    pub fn record(&mut self, k: usize, pop: &Population) {
        self.x[k].copy_from_slice(&pop.x);
        self.v[k].copy_from_slice(&pop.v);
    }

    /// Last written frame as a population
    pub fn last(&self) -> Option<Population> {
        Some(Population {
            x: self.x.last()?.clone(),
            v: self.v.last()?.clone(),
        })
    }
}

/// The four arrays returned by a leapfrog run
#[derive(Debug, Clone, PartialEq)]
pub struct RestrictedTrajectories {
    pub massless: Trajectory,
    pub massive: Trajectory,
}

impl RestrictedTrajectories {
    pub fn frames(&self) -> usize {
        self.massive.len()
    }
}
