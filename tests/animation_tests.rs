//! Integration tests for the render pipeline.
//!
//! These exercise the public API end to end: a custom choreography through
//! the builder, out to an encoded GIF, and back in through a decoder.

use std::fs;
use std::io::BufReader;
use std::path::PathBuf;

use image::codecs::gif::GifDecoder;
use image::AnimationDecoder;
use murmuration::prelude::*;

/// A small halo, cheap enough to render repeatedly in tests.
struct Halo;

impl Choreography for Halo {
    type Seed = f64;

    fn particle_count(&self) -> u32 {
        64
    }

    fn seed(&self, index: u32) -> f64 {
        f64::from(index) / 64.0 * std::f64::consts::TAU
    }

    fn position(&self, angle: &f64, t: f64) -> DVec2 {
        let r = 140.0 + 20.0 * (2.0 * angle + t).cos();
        DVec2::new(200.0 + r * angle.cos(), 200.0 + r * angle.sin())
    }
}

fn scratch_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("murmuration_{}_{}", std::process::id(), name))
}

// ============================================================================
// GIF output
// ============================================================================

#[test]
fn test_render_writes_one_gif_frame_per_animation_frame() {
    let path = scratch_path("halo.gif");
    Animation::new(Halo)
        .with_frames(8)
        .with_dt(0.3)
        .with_fps(30)
        .with_canvas(CanvasSpec::new(64, 400.0))
        .render(&path)
        .expect("render failed");

    let file = fs::File::open(&path).expect("output gif missing");
    let frames = GifDecoder::new(BufReader::new(file))
        .expect("not a gif")
        .into_frames()
        .collect_frames()
        .expect("undecodable frame");
    assert_eq!(frames.len(), 8);
    for frame in &frames {
        assert_eq!(frame.buffer().dimensions(), (64, 64));
    }
    fs::remove_file(&path).ok();
}

#[test]
fn test_render_draws_onto_the_background() {
    let path = scratch_path("halo_bg.gif");
    Animation::new(Halo)
        .with_frames(1)
        .with_canvas(CanvasSpec::new(64, 400.0))
        .with_visuals(|v| {
            v.alpha(1.0);
            v.point_radius(2.0);
            v.background(Vec3::new(0.1, 0.0, 0.2));
        })
        .render(&path)
        .expect("render failed");

    let file = fs::File::open(&path).expect("output gif missing");
    let frames = GifDecoder::new(BufReader::new(file))
        .expect("not a gif")
        .into_frames()
        .collect_frames()
        .expect("undecodable frame");
    let buffer = frames[0].buffer();
    // Background at the corner, something brighter where the halo passes.
    let corner = buffer.get_pixel(0, 0).0;
    assert!(corner[0] < 40 && corner[2] > 20);
    let lit = buffer.pixels().filter(|p| p.0[0] > corner[0] + 50).count();
    assert!(lit > 0, "no particles were drawn");
    fs::remove_file(&path).ok();
}

#[test]
fn test_zero_frames_is_rejected() {
    let path = scratch_path("empty.gif");
    let err = Animation::new(Halo).with_frames(0).render(&path).unwrap_err();
    assert!(matches!(err, RenderError::NoFrames));
    assert!(!path.exists());
}

// ============================================================================
// PNG stills
// ============================================================================

#[test]
fn test_snapshot_writes_a_png_still() {
    let path = scratch_path("halo.png");
    Animation::new(Halo)
        .with_canvas(CanvasSpec::new(64, 400.0))
        .snapshot(&path, 3)
        .expect("snapshot failed");

    let img = image::open(&path).expect("output png missing");
    assert_eq!(img.width(), 64);
    assert_eq!(img.height(), 64);
    fs::remove_file(&path).ok();
}

// ============================================================================
// Full-length evaluation of the built-in choreographies
// ============================================================================

#[test]
fn test_full_run_yields_every_frame_with_every_particle() {
    let cases: [(Box<dyn Fn(f64) -> Frame>, u32, usize, f64); 3] = {
        let leaf = Swarm::new(Leafaproxus);
        let rain = Swarm::new(Pluviophile);
        let shrimp = Swarm::new(Shrimpam);
        let spec = CanvasSpec::default();
        [
            (
                Box::new(move |t| {
                    leaf.evaluate(t, ColorMapping::Radial { distance: 0.7, angle: 0.3 }, spec)
                }),
                180,
                20001,
                std::f64::consts::PI / 90.0,
            ),
            (
                Box::new(move |t| {
                    rain.evaluate(
                        t,
                        ColorMapping::Drift { distance: 0.7, angle: 0.3, rate: 0.05 },
                        spec,
                    )
                }),
                120,
                10001,
                std::f64::consts::PI / 20.0,
            ),
            (
                Box::new(move |t| {
                    shrimp.evaluate(t, ColorMapping::Radial { distance: 0.6, angle: 0.4 }, spec)
                }),
                240,
                10001,
                std::f64::consts::PI / 240.0,
            ),
        ]
    };

    for (evaluate, total_frames, particles, dt) in cases {
        let mut clock = Clock::new(dt);
        let mut rendered = 0u32;
        for _ in 0..total_frames {
            let frame = evaluate(clock.advance());
            assert_eq!(frame.len(), particles);
            rendered += 1;
        }
        assert_eq!(rendered, total_frames);
        assert_eq!(clock.frame(), total_frames);
    }
}
