//! Collaborator interfaces the particle core is driven against.
//!
//! The host game supplies implementations; tests supply scripted doubles.
//! All queries are synchronous reads except `emit_particle`, which is a
//! fire-and-forget visual side effect.

use glam::{DVec2, DVec3, IVec3};

use crate::math::Aabb;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FluidKind {
    None,
    Water,
    Lava,
}

/// Fluid classification at a block position.
///
/// `surface_height` is the absolute world-y of the fluid surface, not a
/// height within the block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FluidSample {
    pub kind: FluidKind,
    pub is_still: bool,
    pub surface_height: f64,
    /// Horizontal push velocity of a flowing fluid.
    pub flow: DVec2,
}

impl FluidSample {
    pub fn none() -> Self {
        FluidSample {
            kind: FluidKind::None,
            is_still: true,
            surface_height: 0.0,
            flow: DVec2::ZERO,
        }
    }

    pub fn still_water(surface_height: f64) -> Self {
        FluidSample {
            kind: FluidKind::Water,
            is_still: true,
            surface_height,
            flow: DVec2::ZERO,
        }
    }

    pub fn flowing_water(surface_height: f64, flow: DVec2) -> Self {
        FluidSample {
            kind: FluidKind::Water,
            is_still: false,
            surface_height,
            flow,
        }
    }

    pub fn lava(surface_height: f64) -> Self {
        FluidSample {
            kind: FluidKind::Lava,
            is_still: true,
            surface_height,
            flow: DVec2::ZERO,
        }
    }
}

/// Visual particle kinds this core may ask the world to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleKind {
    Lava,
}

/// World queries the particle depends on: fluid sampling, collision
/// clipping and particle emission.
pub trait WorldOracle {
    fn fluid_state_at(&self, block_pos: IVec3) -> FluidSample;

    /// Clip a requested displacement against solid geometry intersecting
    /// `bounds`, returning the displacement actually possible.
    fn adjust_for_collision(&self, delta: DVec3, bounds: &Aabb) -> DVec3;

    fn emit_particle(&mut self, kind: ParticleKind, pos: DVec3);
}

/// Process-wide horizontal wind, updated by the host between ticks.
pub trait WindSource {
    fn ambient_wind(&self) -> DVec2;
}

/// Optional host integration that redirects wind per-position.
///
/// Presence is resolved by the host once per tick and passed to
/// [`crate::LeafParticle::tick`] as an `Option`.
pub trait DirectionalWindField {
    fn field_at(&self, pos: DVec3) -> DVec3;
}
