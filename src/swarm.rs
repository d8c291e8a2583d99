//! Swarm construction and per-frame evaluation.

use glam::DVec2;

use crate::canvas::CanvasSpec;
use crate::visuals::ColorMapping;
use crate::Choreography;

/// One evaluated animation frame.
///
/// Both vectors always have exactly one entry per particle, in index
/// order. Positions may be non-finite at isolated indices (the
/// corresponding color value is then NaN); the rasterizer skips those.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Canvas position per particle.
    pub positions: Vec<DVec2>,
    /// Palette value in `[0, 1)` per particle, NaN where the position is
    /// non-finite.
    pub values: Vec<f32>,
}

impl Frame {
    /// Number of particles in the frame.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether the frame holds no particles.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Number of particles with a finite position this frame.
    pub fn finite_len(&self) -> usize {
        self.positions.iter().filter(|p| p.is_finite()).count()
    }
}

/// A choreography with its per-particle constants precomputed.
///
/// Building a swarm walks the index set once and caches every seed; the
/// seeds then stay fixed for the life of the swarm while
/// [`evaluate`](Swarm::evaluate) is called once per frame.
pub struct Swarm<C: Choreography> {
    choreography: C,
    seeds: Vec<C::Seed>,
}

impl<C: Choreography> Swarm<C> {
    /// Derive and cache the constant fields for every particle.
    pub fn new(choreography: C) -> Self {
        let seeds = (0..choreography.particle_count())
            .map(|i| choreography.seed(i))
            .collect();
        Self { choreography, seeds }
    }

    /// Number of particles.
    pub fn len(&self) -> usize {
        self.seeds.len()
    }

    /// Whether the swarm holds no particles.
    pub fn is_empty(&self) -> bool {
        self.seeds.is_empty()
    }

    /// The choreography this swarm was built from.
    pub fn choreography(&self) -> &C {
        &self.choreography
    }

    /// Evaluate the full swarm at time `t`.
    ///
    /// Pure: two calls with the same `t` return identical frames. Each
    /// particle's position comes from the choreography formula and its
    /// color value from `mapping`, normalized against the canvas center.
    pub fn evaluate(&self, t: f64, mapping: ColorMapping, canvas: CanvasSpec) -> Frame {
        let mut positions = Vec::with_capacity(self.seeds.len());
        let mut values = Vec::with_capacity(self.seeds.len());
        for seed in &self.seeds {
            let pos = self.choreography.position(seed, t);
            positions.push(pos);
            values.push(mapping.value(pos, canvas, t));
        }
        Frame { positions, values }
    }
}
