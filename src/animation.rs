//! Animation builder and render loop.

use std::path::Path;

use crate::canvas::{Canvas, CanvasSpec};
use crate::encoder::{write_png, GifSink};
use crate::error::RenderError;
use crate::swarm::Swarm;
use crate::time::Clock;
use crate::visuals::VisualConfig;
use crate::Choreography;

/// A swarm animation builder.
///
/// Use method chaining to configure, then call
/// [`render`](Animation::render) to write the looping GIF.
///
/// # Example
///
/// ```ignore
/// Animation::new(Leafaproxus)
///     .with_frames(180)
///     .with_dt(std::f64::consts::PI / 90.0)
///     .with_visuals(|v| {
///         v.palette(
///             Palette::Thermal,
///             ColorMapping::Radial { distance: 0.7, angle: 0.3 },
///         );
///     })
///     .render("position_colored_swarm.gif")?;
/// ```
pub struct Animation<C: Choreography> {
    choreography: C,
    frames: u32,
    dt: f64,
    fps: u32,
    canvas: CanvasSpec,
    visuals: VisualConfig,
}

impl<C: Choreography> Animation<C> {
    /// Create an animation with default settings: 180 frames at dt = pi/90,
    /// 30 fps output on the default 900x900 px canvas.
    pub fn new(choreography: C) -> Self {
        Self {
            choreography,
            frames: 180,
            dt: std::f64::consts::PI / 90.0,
            fps: 30,
            canvas: CanvasSpec::default(),
            visuals: VisualConfig::default(),
        }
    }

    /// Set the total number of frames to render.
    pub fn with_frames(mut self, frames: u32) -> Self {
        self.frames = frames;
        self
    }

    /// Set the time step applied before each frame is evaluated.
    pub fn with_dt(mut self, dt: f64) -> Self {
        self.dt = dt;
        self
    }

    /// Set the output frame rate (clamped to at least 1 fps).
    pub fn with_fps(mut self, fps: u32) -> Self {
        self.fps = fps.max(1);
        self
    }

    /// Set the canvas geometry.
    pub fn with_canvas(mut self, canvas: CanvasSpec) -> Self {
        self.canvas = canvas;
        self
    }

    /// Configure visuals through a closure.
    ///
    /// # Example
    ///
    /// ```ignore
    /// .with_visuals(|v| {
    ///     v.point_radius(1.0);
    ///     v.alpha(0.4);
    /// })
    /// ```
    pub fn with_visuals<F>(mut self, configure: F) -> Self
    where
        F: FnOnce(&mut VisualConfig),
    {
        configure(&mut self.visuals);
        self
    }

    /// Render the full animation into a looping GIF at `path`.
    ///
    /// Runs the driver loop: advance the clock, evaluate the swarm,
    /// rasterize, encode. Progress is printed every 30 frames.
    pub fn render<P: AsRef<Path>>(self, path: P) -> Result<(), RenderError> {
        if self.frames == 0 {
            return Err(RenderError::NoFrames);
        }
        let Self { choreography, frames, dt, fps, canvas: spec, visuals } = self;

        let swarm = Swarm::new(choreography);
        let mut clock = Clock::new(dt);
        let mut canvas = Canvas::new(spec);
        let mut sink = GifSink::create(path, fps)?;

        for frame in 0..frames {
            let t = clock.advance();
            rasterize(&swarm, t, &visuals, &mut canvas);
            sink.push(canvas.to_image())?;
            if frame % 30 == 0 {
                println!("Frame {}/{}", frame, frames);
            }
        }
        Ok(())
    }

    /// Render a single frame to a PNG still.
    ///
    /// `frame` is the zero-based frame index; the swarm is evaluated at
    /// the same time value the render loop would use for that frame.
    pub fn snapshot<P: AsRef<Path>>(self, path: P, frame: u32) -> Result<(), RenderError> {
        let Self { choreography, dt, canvas: spec, visuals, .. } = self;

        let swarm = Swarm::new(choreography);
        let t = dt * f64::from(frame + 1);
        let mut canvas = Canvas::new(spec);
        rasterize(&swarm, t, &visuals, &mut canvas);
        write_png(path, &canvas.to_image())?;
        Ok(())
    }
}

/// Evaluate the swarm at `t` and splat it onto a cleared canvas.
fn rasterize<C: Choreography>(swarm: &Swarm<C>, t: f64, visuals: &VisualConfig, canvas: &mut Canvas) {
    let field = swarm.evaluate(t, visuals.color_mapping, canvas.spec());
    canvas.clear(visuals.background);
    for (pos, value) in field.positions.iter().zip(&field.values) {
        let color = visuals.palette.sample(*value);
        canvas.plot(
            *pos,
            color,
            visuals.point_radius,
            visuals.alpha,
            visuals.shape,
            visuals.blend_mode,
        );
    }
}
