//! # Leafaproxus
//!
//! A folded leaf blade of twenty thousand particles, colored by where each
//! point sits relative to the canvas center: blue in the middle, red at
//! the rim.
//!
//! Run with: `cargo run --example leafaproxus --release`

use std::f64::consts::PI;

use murmuration::prelude::*;

fn main() -> Result<(), RenderError> {
    println!("Rendering position-colored animation...");
    Animation::new(Leafaproxus)
        .with_frames(180)
        .with_dt(PI / 90.0)
        .with_fps(30)
        .with_visuals(|v| {
            v.point_radius(1.5);
            v.alpha(0.4);
            v.palette(
                Palette::Thermal,
                ColorMapping::Radial { distance: 0.7, angle: 0.3 },
            );
        })
        .render("position_colored_swarm.gif")?;
    println!("Saved as 'position_colored_swarm.gif'");
    Ok(())
}
