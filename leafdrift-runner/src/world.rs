//! A minimal world for headless runs: a flat ground plane with optional
//! fluid pools, each a column of fluid filled up to a surface height.

use glam::{DVec2, DVec3, IVec3};
use leafdrift_core::{Aabb, FluidSample, ParticleKind, WorldOracle};

#[derive(Debug, Clone, Copy)]
pub struct FluidPool {
    pub x_min: i32,
    pub x_max: i32,
    pub z_min: i32,
    pub z_max: i32,
    pub sample: FluidSample,
}

impl FluidPool {
    fn contains(&self, block_pos: IVec3) -> bool {
        (self.x_min..=self.x_max).contains(&block_pos.x)
            && (self.z_min..=self.z_max).contains(&block_pos.z)
    }
}

/// Flat terrain at `ground_y`, plus any number of fluid pools. Counts the
/// particle emissions the leaves request so runs can report them.
pub struct FlatWorld {
    pub ground_y: f64,
    pub pools: Vec<FluidPool>,
    pub emitted: u64,
}

impl FlatWorld {
    pub fn new(ground_y: f64) -> Self {
        FlatWorld {
            ground_y,
            pools: Vec::new(),
            emitted: 0,
        }
    }

    pub fn with_pool(mut self, pool: FluidPool) -> Self {
        self.pools.push(pool);
        self
    }
}

impl WorldOracle for FlatWorld {
    fn fluid_state_at(&self, block_pos: IVec3) -> FluidSample {
        self.pools
            .iter()
            .find(|pool| pool.contains(block_pos))
            .map(|pool| pool.sample)
            .unwrap_or_else(FluidSample::none)
    }

    fn adjust_for_collision(&self, delta: DVec3, bounds: &Aabb) -> DVec3 {
        let mut out = delta;
        // only the ground plane clips; falling below it is impossible
        if delta.y < 0.0 && bounds.min.y + delta.y < self.ground_y {
            out.y = (self.ground_y - bounds.min.y).min(0.0);
        }
        out
    }

    fn emit_particle(&mut self, kind: ParticleKind, pos: DVec3) {
        log::debug!("emit {kind:?} at {pos}");
        self.emitted += 1;
    }
}

/// Horizontal swirl around the world origin, used as the demo stand-in for a
/// host-provided directional wind field.
pub struct VortexField {
    pub strength: f64,
}

impl leafdrift_core::DirectionalWindField for VortexField {
    fn field_at(&self, pos: DVec3) -> DVec3 {
        let radial = DVec2::new(pos.x, pos.z);
        let len = radial.length();
        if len < 1.0e-6 {
            return DVec3::ZERO;
        }
        let tangent = DVec2::new(-radial.y, radial.x) / len;
        DVec3::new(tangent.x * self.strength, 0.0, tangent.y * self.strength)
    }
}
