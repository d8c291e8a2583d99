//! Visual configuration for swarm rendering.
//!
//! This module controls how evaluated particles appear on the canvas -
//! gradients, color mapping, point shape and compositing - separate from
//! the formulas that control where they are.
//!
//! # Usage
//!
//! ```ignore
//! Animation::new(Shrimpam)
//!     .with_visuals(|v| {
//!         v.point_radius(1.5);
//!         v.alpha(0.4);
//!         v.palette(
//!             Palette::Ultraviolet,
//!             ColorMapping::Radial { distance: 0.6, angle: 0.4 },
//!         );
//!     })
//!     .render("shrimpam.gif");
//! ```

use glam::{DVec2, Vec2, Vec3};

use crate::canvas::CanvasSpec;

/// Color gradients for particle rendering.
///
/// A palette is a piecewise-linear gradient between evenly spaced anchor
/// colors, sampled with a scalar in `[0, 1)` produced by a
/// [`ColorMapping`].
#[derive(Debug, Clone, PartialEq)]
pub enum Palette {
    /// Cold blue into warm red (two stops).
    Thermal,

    /// Blue through violet to pink.
    Twilight,

    /// Blue through magenta to yellow.
    Ultraviolet,

    /// Deep blues and teals.
    Ocean,

    /// Near-black through red and orange to pale yellow.
    Ember,

    /// Black to white.
    Grayscale,

    /// Explicit gradient stops, evenly spaced. Needs at least two stops to
    /// form a gradient; shorter lists sample as a solid color.
    Custom(Vec<Vec3>),
}

impl Default for Palette {
    fn default() -> Self {
        Palette::Grayscale
    }
}

impl Palette {
    /// Get the anchor colors for this palette.
    pub fn stops(&self) -> Vec<Vec3> {
        match self {
            Palette::Thermal => vec![
                Vec3::new(0.2, 0.6, 1.0), // Blue
                Vec3::new(0.9, 0.1, 0.2), // Red
            ],
            Palette::Twilight => vec![
                Vec3::new(0.2, 0.5, 1.0), // Blue
                Vec3::new(0.7, 0.2, 0.8), // Violet
                Vec3::new(1.0, 0.5, 0.8), // Pink
            ],
            Palette::Ultraviolet => vec![
                Vec3::new(0.0, 0.5, 1.0), // Blue
                Vec3::new(0.8, 0.0, 0.8), // Magenta
                Vec3::new(1.0, 1.0, 0.0), // Yellow
            ],
            Palette::Ocean => vec![
                Vec3::new(0.0, 0.05, 0.15), // Deep blue
                Vec3::new(0.0, 0.3, 0.5),   // Dark blue
                Vec3::new(0.2, 0.6, 0.8),   // Light blue
                Vec3::new(0.6, 0.9, 1.0),   // Cyan
            ],
            Palette::Ember => vec![
                Vec3::new(0.1, 0.0, 0.0),  // Near black
                Vec3::new(0.6, 0.05, 0.0), // Red
                Vec3::new(1.0, 0.45, 0.0), // Orange
                Vec3::new(1.0, 0.9, 0.6),  // Pale yellow
            ],
            Palette::Grayscale => vec![Vec3::ZERO, Vec3::ONE],
            Palette::Custom(stops) => stops.clone(),
        }
    }

    /// Sample the gradient at `value`.
    ///
    /// `value` is clamped to `[0, 1]`; non-finite values fall back to the
    /// first stop (non-finite particles never reach the rasterizer anyway).
    pub fn sample(&self, value: f32) -> Vec3 {
        let stops = self.stops();
        if stops.len() < 2 {
            return stops.first().copied().unwrap_or(Vec3::ZERO);
        }
        if !value.is_finite() {
            return stops[0];
        }
        let pos = value.clamp(0.0, 1.0) * (stops.len() - 1) as f32;
        let idx = (pos.floor() as usize).min(stops.len() - 2);
        let frac = pos - idx as f32;
        stops[idx].lerp(stops[idx + 1], frac)
    }
}

/// How to map a particle's canvas position to a palette value.
///
/// Both mappings blend the normalized radial distance from the canvas
/// center with the polar angle around it, then reduce modulo 1.0 so the
/// result always lands in `[0, 1)` for finite positions. Non-finite
/// positions map to NaN.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColorMapping {
    /// Weighted blend of radial distance and angle.
    Radial {
        /// Weight of the normalized distance from the canvas center.
        distance: f32,
        /// Weight of the polar angle, normalized to `[0, 1]`.
        angle: f32,
    },

    /// Radial blend plus a linear time drift, cycling the gradient as the
    /// animation plays.
    Drift {
        /// Weight of the normalized distance from the canvas center.
        distance: f32,
        /// Weight of the polar angle, normalized to `[0, 1]`.
        angle: f32,
        /// Palette cycles per unit of animation time.
        rate: f32,
    },
}

impl Default for ColorMapping {
    fn default() -> Self {
        ColorMapping::Radial { distance: 0.7, angle: 0.3 }
    }
}

impl ColorMapping {
    /// Palette value for a particle at `pos` at time `t`.
    pub fn value(&self, pos: DVec2, spec: CanvasSpec, t: f64) -> f32 {
        let n = (pos - spec.center()) / spec.half_extent();
        let dist = n.length();
        let angle = (n.y.atan2(n.x) + std::f64::consts::PI) / std::f64::consts::TAU;

        let raw = match self {
            ColorMapping::Radial { distance, angle: a } => {
                dist * f64::from(*distance) + angle * f64::from(*a)
            }
            ColorMapping::Drift { distance, angle: a, rate } => {
                dist * f64::from(*distance) + angle * f64::from(*a) + t * f64::from(*rate)
            }
        };

        let v = raw.rem_euclid(1.0) as f32;
        // The f64 -> f32 cast can round up to exactly 1.0.
        if v >= 1.0 {
            0.0
        } else {
            v
        }
    }
}

/// Compositing mode for rasterized points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlendMode {
    /// Standard alpha blending (default). Overlapping points occlude.
    #[default]
    Alpha,

    /// Additive blending. Overlapping points brighten toward white,
    /// giving dense regions of the swarm a glow.
    Additive,
}

impl BlendMode {
    /// Composite `src` over `dst` with the given coverage-scaled alpha.
    pub fn composite(&self, dst: Vec3, src: Vec3, alpha: f32) -> Vec3 {
        match self {
            BlendMode::Alpha => src * alpha + dst * (1.0 - alpha),
            BlendMode::Additive => dst + src * alpha,
        }
    }
}

/// Shape of a rasterized point.
///
/// Coverage is evaluated per pixel over the point's bounding quad, with
/// `uv` in `[-1, 1]` on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointShape {
    /// Soft disc with smooth edge falloff (default).
    #[default]
    Circle,

    /// Hard-edged disc.
    CircleHard,

    /// Filled square covering the whole quad.
    Square,

    /// Single pixel, ignoring the configured radius.
    Point,
}

impl PointShape {
    /// Pixel coverage at quad coordinate `uv`, in `[0, 1]`.
    ///
    /// `Point` is special-cased by the canvas and always reports full
    /// coverage here.
    pub fn coverage(&self, uv: Vec2) -> f32 {
        match self {
            PointShape::Circle => {
                let dist = uv.length();
                if dist > 1.0 {
                    0.0
                } else {
                    1.0 - smoothstep(0.5, 1.0, dist)
                }
            }
            PointShape::CircleHard => {
                if uv.length() > 1.0 {
                    0.0
                } else {
                    1.0
                }
            }
            PointShape::Square => 1.0,
            PointShape::Point => 1.0,
        }
    }
}

fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Configuration for swarm visuals.
///
/// Built using the closure passed to [`Animation::with_visuals`].
///
/// [`Animation::with_visuals`]: crate::Animation::with_visuals
#[derive(Debug, Clone)]
pub struct VisualConfig {
    /// Point radius in output pixels.
    pub point_radius: f32,
    /// Global point opacity, 0.0-1.0.
    pub alpha: f32,
    /// Point shape.
    pub shape: PointShape,
    /// Compositing mode.
    pub blend_mode: BlendMode,
    /// Gradient sampled per particle.
    pub palette: Palette,
    /// How particle positions map into the gradient.
    pub color_mapping: ColorMapping,
    /// Opaque background color.
    pub background: Vec3,
}

impl Default for VisualConfig {
    fn default() -> Self {
        Self {
            point_radius: 1.5,
            alpha: 0.4,
            shape: PointShape::Circle,
            blend_mode: BlendMode::Alpha,
            palette: Palette::default(),
            color_mapping: ColorMapping::default(),
            background: Vec3::ZERO,
        }
    }
}

impl VisualConfig {
    /// Create a new visual config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the point radius in output pixels.
    pub fn point_radius(&mut self, radius: f32) -> &mut Self {
        self.point_radius = radius.max(0.5);
        self
    }

    /// Set the global point opacity (clamped to 0.0-1.0).
    ///
    /// Low alpha is what gives dense swarms their layered, smoky look.
    pub fn alpha(&mut self, alpha: f32) -> &mut Self {
        self.alpha = alpha.clamp(0.0, 1.0);
        self
    }

    /// Set the point shape.
    pub fn shape(&mut self, shape: PointShape) -> &mut Self {
        self.shape = shape;
        self
    }

    /// Set the compositing mode.
    ///
    /// # Example
    ///
    /// ```ignore
    /// .with_visuals(|v| {
    ///     v.blend_mode(BlendMode::Additive); // Glowy particles
    /// })
    /// ```
    pub fn blend_mode(&mut self, mode: BlendMode) -> &mut Self {
        self.blend_mode = mode;
        self
    }

    /// Set the gradient and how particles map into it.
    ///
    /// # Example
    ///
    /// ```ignore
    /// .with_visuals(|v| {
    ///     v.palette(
    ///         Palette::Thermal,
    ///         ColorMapping::Radial { distance: 0.7, angle: 0.3 },
    ///     );
    /// })
    /// ```
    pub fn palette(&mut self, palette: Palette, mapping: ColorMapping) -> &mut Self {
        self.palette = palette;
        self.color_mapping = mapping;
        self
    }

    /// Set the opaque background color.
    pub fn background(&mut self, color: Vec3) -> &mut Self {
        self.background = color;
        self
    }
}
