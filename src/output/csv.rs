//! Plain CSV dump of a finished run
//!
//! One row per body per frame:
//! `frame,t,population,index,x,y,z,vx,vy,vz`
//! where `population` is `massive` or `massless`.

use std::io::{self, Write};

use crate::simulation::states::{RestrictedTrajectories, Trajectory};

pub const HEADER: &str = "frame,t,population,index,x,y,z,vx,vy,vz";

/// Write every `every`-th frame (the last frame is always written)
pub fn write_trajectories<W: Write>(
    mut w: W,
    traj: &RestrictedTrajectories,
    dt: f64,
    every: usize,
) -> io::Result<()> {
    writeln!(w, "{HEADER}")?;

    let frames = traj.frames();
    let every = every.max(1);
    for k in (0..frames).filter(|k| k % every == 0 || k + 1 == frames) {
        let t = k as f64 * dt;
        write_frame(&mut w, k, t, "massive", &traj.massive)?;
        write_frame(&mut w, k, t, "massless", &traj.massless)?;
    }
    w.flush()
}

fn write_frame<W: Write>(w: &mut W, k: usize, t: f64, label: &str, traj: &Trajectory) -> io::Result<()> {
    for (i, (x, v)) in traj.x[k].iter().zip(traj.v[k].iter()).enumerate() {
        writeln!(
            w,
            "{k},{t},{label},{i},{},{},{},{},{},{}",
            x.x, x.y, x.z, v.x, v.y, v.z
        )?;
    }
    Ok(())
}
