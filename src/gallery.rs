//! Built-in choreographies.
//!
//! Three swarms, each a handful of trigonometric lines. The formulas are
//! the artwork: there is no deeper algorithm, only constants tuned until
//! the motion looked right. Each demo in `demos/` renders one of these
//! with its matching palette.
//!
//! | Choreography | Particles | Character |
//! |--------------|-----------|-----------|
//! | [`Leafaproxus`] | 20001 | Folded leaf blade, slow pulse |
//! | [`Pluviophile`] | 10001 | Rain-streaked spiral shell |
//! | [`Shrimpam`] | 10001 | Curled plume trailing drops |

use glam::DVec2;

use crate::Choreography;

/// A folded leaf blade of 20001 grid-indexed particles.
///
/// Particles sit on a 100-wide grid; a tangent term bends each column and
/// a slow phase sweep rocks the blade around the canvas center. The 200
/// particles on the grid column where `k` is exactly zero evaluate to a
/// non-finite position every frame and never appear - the blade keeps a
/// hairline slit down the middle.
pub struct Leafaproxus;

/// Constant fields for one [`Leafaproxus`] particle.
#[derive(Debug, Clone)]
pub struct LeafSeed {
    x: f64,
    y: f64,
    k: f64,
    e: f64,
    o: f64,
}

impl Choreography for Leafaproxus {
    type Seed = LeafSeed;

    fn particle_count(&self) -> u32 {
        20001
    }

    fn seed(&self, index: u32) -> LeafSeed {
        let x = f64::from(index % 100);
        let y = f64::from(index / 100);
        let k = x / 4.0 - 12.5;
        let e = y / 9.0 + 5.0;
        let o = (k * k + e * e).sqrt() / 9.0;
        LeafSeed { x, y, k, e, o }
    }

    fn position(&self, s: &LeafSeed, t: f64) -> DVec2 {
        // 1/k is infinite on the zero column; tan carries it to NaN.
        let q = s.x
            + 99.0
            + (1.0 / s.k).tan()
            + s.o * s.k * ((s.e * 9.0).cos() / 4.0 + (s.y / 2.0).cos()) * (s.o * 4.0 - t).sin();
        let c = s.o * s.e / 30.0 - t / 8.0;
        DVec2::new(
            q * 0.7 * c.sin() + 9.0 * (s.y / 19.0 + t).cos() + 200.0,
            200.0 + q / 2.0 * c.cos(),
        )
    }
}

/// A rain-streaked spiral shell of 10001 particles.
///
/// Positions wind around the center on slowly detuned polar arms; the
/// radial arm length breathes with `sin(d^2 - 2t)`, which is what gives
/// the shell its shudder.
pub struct Pluviophile;

/// Constant fields for one [`Pluviophile`] particle.
#[derive(Debug, Clone)]
pub struct RainSeed {
    k: f64,
    e: f64,
    d: f64,
    a: f64,
}

impl Choreography for Pluviophile {
    type Seed = RainSeed;

    fn particle_count(&self) -> u32 {
        10001
    }

    fn seed(&self, index: u32) -> RainSeed {
        let x = f64::from(index % 200);
        let y = f64::from(index) / 43.0;
        let k = 5.0 * (x / 14.0).cos() * (y / 30.0).cos();
        let e = y / 8.0 - 13.0;
        let d = (k * k + e * e) / 59.0 + 4.0;
        let a = k.atan2(e);
        RainSeed { k, e, d, a }
    }

    fn position(&self, s: &RainSeed, t: f64) -> DVec2 {
        let q = 60.0 - 3.0 * (s.a * s.e).sin()
            + s.k * (3.0 + 4.0 / s.d * (s.d * s.d - t * 2.0).sin());
        let c = s.d / 2.0 + s.e / 99.0 - t / 18.0;
        DVec2::new(q * c.sin() + 200.0, (q + s.d * 9.0) * c.cos() + 200.0)
    }
}

/// A curled plume of 10001 particles trailing drops below the center.
///
/// Unlike the other two, most of the field here is recomputed every frame:
/// only `x`, `y` and `e` are constant, while the wave amplitude `k` and
/// the norm `d` ride the time value. The `0.3/k` term spikes where
/// `cos(x/29)` passes near zero, throwing isolated particles far off
/// canvas - finite, clipped, and part of the texture.
pub struct Shrimpam;

/// Constant fields for one [`Shrimpam`] particle.
#[derive(Debug, Clone)]
pub struct ShrimpSeed {
    x: f64,
    y: f64,
    e: f64,
}

impl Choreography for Shrimpam {
    type Seed = ShrimpSeed;

    fn particle_count(&self) -> u32 {
        10001
    }

    fn seed(&self, index: u32) -> ShrimpSeed {
        let x = f64::from(index);
        let y = x / 235.0;
        let e = y / 8.0 - 13.0;
        ShrimpSeed { x, y, e }
    }

    fn position(&self, s: &ShrimpSeed, t: f64) -> DVec2 {
        let k = (4.0 + (s.y * 2.0 - t).sin() * 3.0) * (s.x / 29.0).cos();
        let d = (k * k + s.e * s.e).sqrt();
        let q = 3.0 * (k * 2.0).sin()
            + 0.3 / k
            + (s.y / 25.0).sin() * k * (9.0 + 4.0 * (s.e * 9.0 - d * 3.0 + t * 2.0).sin());
        DVec2::new(
            q + 30.0 * (d - t).cos() + 200.0,
            620.0 - q * (d - t).sin() - d * 39.0,
        )
    }
}
