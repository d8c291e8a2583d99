//! CPU rasterization of evaluated swarms.
//!
//! The canvas is a fixed square surface: a logical coordinate range (0-400
//! by default, y pointing up) rasterized into a square pixel buffer. Points
//! are drawn as small shaped splats with per-point color and a global
//! alpha, composited over an opaque background.
//!
//! Non-finite positions are skipped. Some choreography formulas divide by a
//! per-particle constant that is exactly zero at isolated indices; those
//! particles simply never appear, which is part of the look.

use bytemuck::{Pod, Zeroable};
use glam::{DVec2, Vec2, Vec3};
use image::RgbaImage;

use crate::visuals::{BlendMode, PointShape};

/// Geometry of the drawing surface.
///
/// `extent` is the logical coordinate range covered by both axes;
/// `resolution` is the square pixel size of the output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasSpec {
    /// Output width and height in pixels.
    pub resolution: u32,
    /// Logical coordinate range of both axes.
    pub extent: f64,
}

impl CanvasSpec {
    /// Create a spec with the given pixel resolution and logical extent.
    pub fn new(resolution: u32, extent: f64) -> Self {
        Self { resolution, extent }
    }

    /// Logical center of the canvas.
    #[inline]
    pub fn center(&self) -> DVec2 {
        DVec2::splat(self.extent / 2.0)
    }

    /// Half the logical extent; color mappings normalize against this.
    #[inline]
    pub fn half_extent(&self) -> f64 {
        self.extent / 2.0
    }

    /// Pixels per logical unit.
    #[inline]
    pub fn scale(&self) -> f64 {
        f64::from(self.resolution) / self.extent
    }
}

impl Default for CanvasSpec {
    /// A 400-unit canvas at 900x900 px - nine inches square at 100 dpi.
    fn default() -> Self {
        Self { resolution: 900, extent: 400.0 }
    }
}

/// Quantized output pixel.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
struct Rgba8 {
    r: u8,
    g: u8,
    b: u8,
    a: u8,
}

/// A reusable rasterization target.
///
/// Colors accumulate in `f32` and are quantized when an image is taken, so
/// low-alpha layering does not band.
pub struct Canvas {
    spec: CanvasSpec,
    pixels: Vec<Vec3>,
}

impl Canvas {
    /// Allocate a canvas for the given spec, cleared to black.
    pub fn new(spec: CanvasSpec) -> Self {
        let len = spec.resolution as usize * spec.resolution as usize;
        Self { spec, pixels: vec![Vec3::ZERO; len] }
    }

    /// The spec this canvas was allocated for.
    #[inline]
    pub fn spec(&self) -> CanvasSpec {
        self.spec
    }

    /// Fill the whole surface with an opaque color.
    pub fn clear(&mut self, color: Vec3) {
        self.pixels.fill(color);
    }

    /// Splat one point at a logical position.
    ///
    /// Non-finite positions are skipped; anything falling outside the
    /// surface is clipped.
    pub fn plot(
        &mut self,
        pos: DVec2,
        color: Vec3,
        radius: f32,
        alpha: f32,
        shape: PointShape,
        blend: BlendMode,
    ) {
        if !pos.is_finite() {
            return;
        }
        let res = self.spec.resolution as i64;
        let scale = self.spec.scale();
        // Logical y points up; image rows grow downward.
        let cx = pos.x * scale;
        let cy = (self.spec.extent - pos.y) * scale;

        if let PointShape::Point = shape {
            let px = cx.floor() as i64;
            let py = cy.floor() as i64;
            if (0..res).contains(&px) && (0..res).contains(&py) {
                self.composite(px as usize, py as usize, color, alpha, blend);
            }
            return;
        }

        let r = f64::from(radius.max(0.5));
        let x0 = ((cx - r).floor() as i64).max(0);
        let x1 = ((cx + r).ceil() as i64).min(res - 1);
        let y0 = ((cy - r).floor() as i64).max(0);
        let y1 = ((cy + r).ceil() as i64).min(res - 1);

        for py in y0..=y1 {
            for px in x0..=x1 {
                let uv = Vec2::new(
                    ((px as f64 + 0.5 - cx) / r) as f32,
                    ((py as f64 + 0.5 - cy) / r) as f32,
                );
                let coverage = shape.coverage(uv);
                if coverage <= 0.0 {
                    continue;
                }
                self.composite(px as usize, py as usize, color, alpha * coverage, blend);
            }
        }
    }

    fn composite(&mut self, px: usize, py: usize, color: Vec3, alpha: f32, blend: BlendMode) {
        let idx = py * self.spec.resolution as usize + px;
        self.pixels[idx] = blend.composite(self.pixels[idx], color, alpha);
    }

    /// Quantize the current surface into an opaque RGBA image.
    pub fn to_image(&self) -> RgbaImage {
        let quantized: Vec<Rgba8> = self
            .pixels
            .iter()
            .map(|c| Rgba8 {
                r: channel(c.x),
                g: channel(c.y),
                b: channel(c.z),
                a: 255,
            })
            .collect();
        let bytes: Vec<u8> = bytemuck::cast_vec(quantized);
        RgbaImage::from_raw(self.spec.resolution, self.spec.resolution, bytes)
            .expect("pixel buffer length matches canvas dimensions")
    }
}

#[inline]
fn channel(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small() -> Canvas {
        Canvas::new(CanvasSpec::new(100, 400.0))
    }

    fn pixel(canvas: &Canvas, x: usize, y: usize) -> Vec3 {
        canvas.pixels[y * canvas.spec.resolution as usize + x]
    }

    #[test]
    fn test_plot_lands_at_center() {
        let mut canvas = small();
        canvas.plot(
            DVec2::new(200.0, 200.0),
            Vec3::ONE,
            2.0,
            1.0,
            PointShape::CircleHard,
            BlendMode::Alpha,
        );
        assert_eq!(pixel(&canvas, 50, 50), Vec3::ONE);
        assert_eq!(pixel(&canvas, 10, 10), Vec3::ZERO);
    }

    #[test]
    fn test_y_axis_points_up() {
        let mut canvas = small();
        // A logically low point must land in a high image row.
        canvas.plot(
            DVec2::new(200.0, 40.0),
            Vec3::ONE,
            2.0,
            1.0,
            PointShape::CircleHard,
            BlendMode::Alpha,
        );
        assert_eq!(pixel(&canvas, 50, 90), Vec3::ONE);
        assert_eq!(pixel(&canvas, 50, 10), Vec3::ZERO);
    }

    #[test]
    fn test_non_finite_positions_are_skipped() {
        let mut canvas = small();
        canvas.plot(
            DVec2::new(f64::NAN, 200.0),
            Vec3::ONE,
            3.0,
            1.0,
            PointShape::Circle,
            BlendMode::Alpha,
        );
        canvas.plot(
            DVec2::new(f64::INFINITY, f64::INFINITY),
            Vec3::ONE,
            3.0,
            1.0,
            PointShape::Circle,
            BlendMode::Alpha,
        );
        assert!(canvas.pixels.iter().all(|p| *p == Vec3::ZERO));
    }

    #[test]
    fn test_off_canvas_points_are_clipped() {
        let mut canvas = small();
        canvas.plot(
            DVec2::new(-5000.0, 9000.0),
            Vec3::ONE,
            10.0,
            1.0,
            PointShape::Square,
            BlendMode::Alpha,
        );
        assert!(canvas.pixels.iter().all(|p| *p == Vec3::ZERO));
    }

    #[test]
    fn test_additive_layering_brightens() {
        let mut canvas = small();
        let pos = DVec2::new(200.0, 200.0);
        let dim = Vec3::new(0.3, 0.3, 0.3);
        for _ in 0..3 {
            canvas.plot(pos, dim, 1.0, 1.0, PointShape::Point, BlendMode::Additive);
        }
        let px = pixel(&canvas, 50, 50);
        assert!((px.x - 0.9).abs() < 1e-5);
    }

    #[test]
    fn test_to_image_dimensions_and_opacity() {
        let mut canvas = small();
        canvas.clear(Vec3::new(0.0, 0.0, 0.0));
        let img = canvas.to_image();
        assert_eq!(img.dimensions(), (100, 100));
        assert!(img.pixels().all(|p| p.0[3] == 255));
    }

    #[test]
    fn test_to_image_quantizes_and_clamps() {
        let mut canvas = small();
        canvas.clear(Vec3::new(2.0, 0.5, -1.0));
        let px = canvas.to_image().get_pixel(0, 0).0;
        assert_eq!(px[0], 255);
        assert_eq!(px[1], 128);
        assert_eq!(px[2], 0);
    }
}
