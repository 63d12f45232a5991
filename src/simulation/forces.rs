//! Softened Newtonian force kernels
//!
//! The restricted kernel pulls a set of target points toward a set of
//! massive source points. The direct (mutual) kernel is the restricted
//! kernel with the massive set as both targets and sources, so the two
//! can never disagree. Self-terms vanish because the displacement sits
//! in the numerator: `0 / eps^3 = 0`.
//!
//! The gravitational constant is folded into the masses.

use rayon::prelude::*;

use crate::error::{check_len, SimResult};
use crate::simulation::states::NVec3;

/// Acceleration on a target at `q` from a source of mass `m` at `p`:
///   a = m * (p - q) / (|p - q| + eps)^3
///
/// With `eps == 0` and `p == q` this is `0 * inf = NaN`, which is left
/// to propagate.
#[inline]
pub fn pair_acceleration(q: &NVec3, p: &NVec3, m: f64, eps: f64) -> NVec3 {
    let r = p - q;
    let d = softened_norm(&r, eps);
    (m / (d * d * d)) * r
}

/// `|r| + eps`, the softened separation used by every kernel
#[inline]
pub fn softened_norm(r: &NVec3, eps: f64) -> f64 {
    r.norm() + eps
}

/// Sum of pulls from every source on a single target.
/// Sources are visited in index order, the same order for every kernel.
#[inline]
fn summed_acceleration(q: &NVec3, sources: &[NVec3], masses: &[f64], eps: f64) -> NVec3 {
    let mut a = NVec3::zeros();
    for (p, &m) in sources.iter().zip(masses.iter()) {
        a += pair_acceleration(q, p, m, eps);
    }
    a
}

/// A way of evaluating the restricted force sum.
/// Implementations overwrite `out[i]` with the acceleration on `targets[i]`.
pub trait ForceKernel {
    /// Fill `out` without checking shapes; callers have already done so
    fn accelerations(
        &self,
        targets: &[NVec3],
        sources: &[NVec3],
        masses: &[f64],
        eps: f64,
        out: &mut [NVec3],
    );

    /// Acceleration on each massless point from all massive points
    fn force_on_massless(
        &self,
        massless: &[NVec3],
        massive: &[NVec3],
        masses: &[f64],
        eps: f64,
    ) -> SimResult<Vec<NVec3>> {
        check_len("mass vector", massive.len(), masses.len())?;
        let mut out = vec![NVec3::zeros(); massless.len()];
        self.accelerations(massless, massive, masses, eps, &mut out);
        Ok(out)
    }

    /// Mutual acceleration among massive points
    fn force_direct(&self, points: &[NVec3], masses: &[f64], eps: f64) -> SimResult<Vec<NVec3>> {
        self.force_on_massless(points, points, masses, eps)
    }
}

/// Reference kernel: plain double loop, outer over targets
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectSum;

impl ForceKernel for DirectSum {
    fn accelerations(
        &self,
        targets: &[NVec3],
        sources: &[NVec3],
        masses: &[f64],
        eps: f64,
        out: &mut [NVec3],
    ) {
        debug_assert_eq!(targets.len(), out.len());
        debug_assert_eq!(sources.len(), masses.len());

        for (q, a) in targets.iter().zip(out.iter_mut()) {
            *a = summed_acceleration(q, sources, masses, eps);
        }
    }
}

/// Same sum as [`DirectSum`] with targets split across the rayon pool.
/// Each target still sums its sources in index order, so the output is
/// bit-identical to the reference kernel.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParallelDirectSum;

impl ForceKernel for ParallelDirectSum {
    fn accelerations(
        &self,
        targets: &[NVec3],
        sources: &[NVec3],
        masses: &[f64],
        eps: f64,
        out: &mut [NVec3],
    ) {
        debug_assert_eq!(targets.len(), out.len());
        debug_assert_eq!(sources.len(), masses.len());

        out.par_iter_mut()
            .zip(targets.par_iter())
            .for_each(|(a, q)| *a = summed_acceleration(q, sources, masses, eps));
    }
}

/// Restricted kernel with the reference implementation
pub fn force_on_massless(
    massless: &[NVec3],
    massive: &[NVec3],
    masses: &[f64],
    eps: f64,
) -> SimResult<Vec<NVec3>> {
    DirectSum.force_on_massless(massless, massive, masses, eps)
}

/// Direct kernel with the reference implementation
pub fn force_direct(points: &[NVec3], masses: &[f64], eps: f64) -> SimResult<Vec<NVec3>> {
    DirectSum.force_direct(points, masses, eps)
}
