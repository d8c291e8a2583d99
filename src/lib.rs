//! # Murmuration
//!
//! Particle murmurations from closed-form trigonometry, rendered as looping GIFs.
//!
//! A murmuration is a fixed flock of particles whose positions are not
//! integrated step by step but *evaluated*: every frame, each particle's
//! position is recomputed from scratch as a pure function of its constant
//! per-particle fields and a single advancing time value. The result is a
//! swarm that folds, breathes and rotates without any physics state.
//!
//! ## Quick Start
//!
//! ```ignore
//! use murmuration::prelude::*;
//!
//! fn main() -> Result<(), RenderError> {
//!     Animation::new(Pluviophile)
//!         .with_frames(120)
//!         .with_dt(std::f64::consts::PI / 20.0)
//!         .with_visuals(|v| {
//!             v.point_radius(1.0);
//!             v.alpha(0.4);
//!             v.palette(
//!                 Palette::Twilight,
//!                 ColorMapping::Drift { distance: 0.7, angle: 0.3, rate: 0.05 },
//!             );
//!         })
//!         .render("pluviophile.gif")
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### Choreographies
//!
//! A [`Choreography`] defines a swarm: how many particles it has, the
//! constant fields derived once per particle, and the closed-form position
//! formula evaluated every frame. Three choreographies ship in
//! [`gallery`]; implement the trait to add your own.
//!
//! ### Frames
//!
//! A [`Swarm`] caches the per-particle constants and evaluates one
//! [`Frame`] per tick: a full set of canvas positions plus a color value in
//! `[0, 1)` per particle. Evaluation is pure - the same `t` always yields
//! the same frame.
//!
//! ### Rendering
//!
//! The [`Animation`] builder drives the loop: advance the [`Clock`],
//! evaluate the frame, rasterize it onto the [`Canvas`], and append it to
//! the output GIF. Colors come from a [`Palette`] sampled with the
//! per-particle color value.
//!
//! | Concern | Type |
//! |---------|------|
//! | Swarm definition | [`Choreography`], [`gallery`] |
//! | Per-frame evaluation | [`Swarm`], [`Frame`] |
//! | Time | [`Clock`] |
//! | Color | [`Palette`], [`ColorMapping`] |
//! | Rasterization | [`Canvas`], [`CanvasSpec`], [`VisualConfig`] |
//! | Output | [`Animation`], [`GifSink`] |

mod animation;
pub mod canvas;
mod encoder;
pub mod error;
pub mod gallery;
mod swarm;
pub mod time;
pub mod visuals;

pub use animation::Animation;
pub use canvas::{Canvas, CanvasSpec};
pub use encoder::GifSink;
pub use error::{EncodeError, RenderError};
pub use gallery::{Leafaproxus, Pluviophile, Shrimpam};
pub use glam::{DVec2, Vec2, Vec3};
pub use swarm::{Frame, Swarm};
pub use time::Clock;
pub use visuals::{BlendMode, ColorMapping, Palette, PointShape, VisualConfig};

/// A particle swarm defined by closed-form formulas.
///
/// A choreography owns no mutable state. It describes a fixed index set
/// (`0..particle_count`), the constant fields derived once per index, and
/// the position each particle takes at a given time.
///
/// # Contract
///
/// - [`seed`](Choreography::seed) is called exactly once per index when a
///   [`Swarm`] is built; the results are cached and never recomputed.
/// - [`position`](Choreography::position) must be pure: the same seed and
///   `t` always produce the same position.
/// - Positions are in canvas coordinates (the logical square of
///   [`CanvasSpec`], 0-400 by default), y pointing up.
/// - Positions may be non-finite at isolated indices. Formulas are allowed
///   to divide by a constant that is exactly zero for some particles; the
///   rasterizer skips those points and the animation renders without them.
///
/// # Example
///
/// ```ignore
/// struct Ring;
///
/// impl Choreography for Ring {
///     type Seed = f64;
///
///     fn particle_count(&self) -> u32 {
///         360
///     }
///
///     fn seed(&self, index: u32) -> f64 {
///         f64::from(index).to_radians()
///     }
///
///     fn position(&self, angle: &f64, t: f64) -> DVec2 {
///         let r = 120.0 + 40.0 * (3.0 * angle + t).sin();
///         DVec2::new(200.0 + r * angle.cos(), 200.0 + r * angle.sin())
///     }
/// }
/// ```
pub trait Choreography: Send + Sync {
    /// Per-particle constants derived once from the particle index.
    type Seed: Clone + Send + Sync;

    /// Number of particles in the swarm. Constant for the whole animation.
    fn particle_count(&self) -> u32;

    /// Derive the constant fields for the particle at `index`.
    fn seed(&self, index: u32) -> Self::Seed;

    /// Canvas position of a particle at time `t`.
    fn position(&self, seed: &Self::Seed, t: f64) -> DVec2;
}

/// Convenient re-exports for common usage.
///
/// # Usage
///
/// ```ignore
/// use murmuration::prelude::*;
/// ```
pub mod prelude {
    pub use crate::animation::Animation;
    pub use crate::canvas::{Canvas, CanvasSpec};
    pub use crate::error::{EncodeError, RenderError};
    pub use crate::gallery::{Leafaproxus, Pluviophile, Shrimpam};
    pub use crate::swarm::{Frame, Swarm};
    pub use crate::time::Clock;
    pub use crate::visuals::{BlendMode, ColorMapping, Palette, PointShape, VisualConfig};
    pub use crate::Choreography;
    pub use crate::{DVec2, Vec2, Vec3};
}
