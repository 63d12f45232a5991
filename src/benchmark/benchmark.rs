use std::time::Instant;

use crate::simulation::forces::{DirectSum, ForceKernel, ParallelDirectSum};
use crate::simulation::integrator::run_leapfrog;
use crate::simulation::states::{NVec3, Population, RestrictedSystem};

/// Deterministic point cloud of size `n`, no rand needed
fn make_points(n: usize, scale: f64) -> Vec<NVec3> {
    (0..n)
        .map(|i| {
            let i_f = i as f64;
            NVec3::new(
                (i_f * 0.37).sin() * scale,
                (i_f * 0.13).cos() * scale,
                (i_f * 0.07).sin() * scale,
            )
        })
        .collect()
}

/// Helper to build a restricted system with `m` tracers and `n` massive bodies
fn make_system(m: usize, n: usize) -> RestrictedSystem {
    RestrictedSystem {
        massless: Population {
            x: make_points(m, 10.0),
            v: vec![NVec3::zeros(); m],
        },
        massive: Population {
            x: make_points(n, 5.0),
            v: vec![NVec3::zeros(); n],
        },
        masses: vec![1.0; n],
        t: 0.0,
    }
}

/// Time the restricted kernel, reference vs parallel, for a range of
/// tracer counts against a fixed handful of massive bodies.
/// Paste output directly into a spreadsheet to graph.
pub fn bench_kernels() {
    let n = 8;
    let eps = 0.1;

    println!("m,reference_ms,parallel_ms,max_abs_diff");

    for m in [1_000, 4_000, 16_000, 64_000, 256_000] {
        let sys = make_system(m, n);
        let mut out_ref = vec![NVec3::zeros(); m];
        let mut out_par = vec![NVec3::zeros(); m];

        // Warm up
        ParallelDirectSum.accelerations(&sys.massless.x, &sys.massive.x, &sys.masses, eps, &mut out_par);

        let t0 = Instant::now();
        DirectSum.accelerations(&sys.massless.x, &sys.massive.x, &sys.masses, eps, &mut out_ref);
        let ms_ref = t0.elapsed().as_secs_f64() * 1000.0;

        let t1 = Instant::now();
        ParallelDirectSum.accelerations(&sys.massless.x, &sys.massive.x, &sys.masses, eps, &mut out_par);
        let ms_par = t1.elapsed().as_secs_f64() * 1000.0;

        let diff = out_ref
            .iter()
            .zip(out_par.iter())
            .map(|(a, b)| (a - b).amax())
            .fold(0.0, f64::max);

        println!("{},{:.6},{:.6},{:e}", m, ms_ref, ms_par, diff);
    }
}

/// Time whole leapfrog steps for a range of tracer counts
pub fn bench_leapfrog() {
    let n = 2;
    let steps = 10;
    let (dt, eps) = (0.01, 0.1);

    println!("m,reference_step_ms,parallel_step_ms");

    for m in [1_000, 10_000, 100_000] {
        let sys = make_system(m, n);

        let t0 = Instant::now();
        let ok_ref = run_leapfrog(&DirectSum, sys.clone(), steps, dt, eps).is_ok();
        let ms_ref = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        let t1 = Instant::now();
        let ok_par = run_leapfrog(&ParallelDirectSum, sys, steps, dt, eps).is_ok();
        let ms_par = t1.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        if ok_ref && ok_par {
            println!("{},{:.6},{:.6}", m, ms_ref, ms_par);
        }
    }
}
