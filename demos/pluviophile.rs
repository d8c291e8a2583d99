//! # Pluviophile
//!
//! A rain-streaked spiral shell. The gradient drifts with time, so the
//! whole shell cycles from blue through violet to pink as it turns.
//!
//! Run with: `cargo run --example pluviophile --release`

use std::f64::consts::PI;

use murmuration::prelude::*;

fn main() -> Result<(), RenderError> {
    println!("Rendering animation...");
    Animation::new(Pluviophile)
        .with_frames(120)
        .with_dt(PI / 20.0)
        .with_fps(30)
        .with_visuals(|v| {
            v.point_radius(1.0);
            v.alpha(0.4);
            v.palette(
                Palette::Twilight,
                ColorMapping::Drift { distance: 0.7, angle: 0.3, rate: 0.05 },
            );
        })
        .render("pluviophile.gif")?;
    println!("Animation saved as 'pluviophile.gif'");
    Ok(())
}
