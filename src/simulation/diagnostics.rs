//! Conservation diagnostics for the massive subsystem
//!
//! Tracers carry no mass, so only the massive bodies contribute to the
//! energy and momentum checked here. The potential is the one whose
//! gradient reproduces the softened pair law `m r / (r + eps)^3`.

use super::states::{NVec3, Population, Trajectory};
use crate::error::{check_len, SimResult};

/// Energy of one trajectory frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyRecord {
    pub step: usize,
    pub t: f64,
    pub kinetic: f64,
    pub potential: f64,
    pub total: f64,
}

/// Pair potential for separation `r`:
///   phi(r) = -m_i m_j (1/(r+eps) - eps / (2 (r+eps)^2))
pub fn pair_potential(r: f64, mi: f64, mj: f64, eps: f64) -> f64 {
    let d = r + eps;
    -mi * mj * (1.0 / d - eps / (2.0 * d * d))
}

pub fn kinetic_energy(v: &[NVec3], masses: &[f64]) -> f64 {
    v.iter()
        .zip(masses.iter())
        .map(|(v, &m)| 0.5 * m * v.norm_squared())
        .sum()
}

/// Sum over unordered pairs i < j
pub fn potential_energy(x: &[NVec3], masses: &[f64], eps: f64) -> f64 {
    let n = x.len();
    let mut u = 0.0;
    for i in 0..n {
        for j in (i + 1)..n {
            let r = (x[j] - x[i]).norm();
            u += pair_potential(r, masses[i], masses[j], eps);
        }
    }
    u
}

/// Total linear momentum of a massive population
pub fn total_momentum(pop: &Population, masses: &[f64]) -> NVec3 {
    pop.v
        .iter()
        .zip(masses.iter())
        .fold(NVec3::zeros(), |p, (v, &m)| p + m * *v)
}

/// One record per frame of a massive trajectory.
/// Every frame must carry one position and one velocity per mass.
pub fn energy_history(traj: &Trajectory, masses: &[f64], dt: f64, eps: f64) -> SimResult<Vec<EnergyRecord>> {
    for (x, v) in traj.x.iter().zip(traj.v.iter()) {
        check_len("mass vector", x.len(), masses.len())?;
        check_len("velocity set", x.len(), v.len())?;
    }

    let history = traj
        .x
        .iter()
        .zip(traj.v.iter())
        .enumerate()
        .map(|(step, (x, v))| {
            let kinetic = kinetic_energy(v, masses);
            let potential = potential_energy(x, masses, eps);
            EnergyRecord {
                step,
                t: step as f64 * dt,
                kinetic,
                potential,
                total: kinetic + potential,
            }
        })
        .collect();
    Ok(history)
}

/// (E_last - E_first) / |E_first|, or 0 when there is nothing to compare
pub fn relative_energy_drift(history: &[EnergyRecord]) -> f64 {
    match (history.first(), history.last()) {
        (Some(first), Some(last)) if first.total != 0.0 => {
            (last.total - first.total) / first.total.abs()
        }
        _ => 0.0,
    }
}
