//! Per-tick physics for falling-leaf visual particles.
//!
//! The core is [`LeafParticle`]: a value-owning entity whose `tick` integrates
//! gravity, wind drift, rotation, fluid response and collision against an
//! externally supplied [`WorldOracle`]. Rendering, asset handling and particle
//! management live in the host; this crate only simulates.

pub mod math;
pub mod particle;
pub mod wind;
pub mod world;

pub use math::Aabb;
pub use particle::{LeafParticle, LeafSnapshot, Phase, FADE_DURATION};
pub use wind::{ConstantWind, GustingWind};
pub use world::{
    DirectionalWindField, FluidKind, FluidSample, ParticleKind, WindSource, WorldOracle,
};
