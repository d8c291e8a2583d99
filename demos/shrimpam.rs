//! # Shrimpam
//!
//! A curled plume trailing drops below the center, leaning harder on the
//! angle term than the other demos so the gradient sweeps around the
//! plume instead of radiating out of it.
//!
//! Run with: `cargo run --example shrimpam --release`

use std::f64::consts::PI;

use murmuration::prelude::*;

fn main() -> Result<(), RenderError> {
    println!("Rendering animation...");
    Animation::new(Shrimpam)
        .with_frames(240)
        .with_dt(PI / 240.0)
        .with_fps(30)
        .with_visuals(|v| {
            v.point_radius(1.5);
            v.alpha(0.4);
            v.palette(
                Palette::Ultraviolet,
                ColorMapping::Radial { distance: 0.6, angle: 0.4 },
            );
        })
        .render("shrimpam.gif")?;
    println!("Animation saved as 'shrimpam.gif'");
    Ok(())
}
