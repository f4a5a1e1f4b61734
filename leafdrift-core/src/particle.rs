//! The falling-leaf particle: per-tick force integration, fluid response,
//! rotation and collision-aware movement.

use glam::{DVec2, DVec3};
use rand::Rng;
use serde::Serialize;

use crate::math::Aabb;
use crate::world::{DirectionalWindField, FluidKind, ParticleKind, WindSource, WorldOracle};

/// Ticks over which a leaf fades out before expiring.
pub const FADE_DURATION: u32 = 16;

const WATER_FRICTION: f64 = 0.075;
const TAU: f32 = std::f32::consts::TAU;

/// Physical phase of a leaf. `Stuck` and `Dead` are terminal under normal
/// physics: `Stuck` only clears if the ground under the leaf stops clipping
/// its fall (e.g. the supporting block is removed), `Dead` never does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Airborne,
    InWater,
    Grounded,
    Stuck,
    Dead,
}

/// Render-facing state, captured once per tick so a host can interpolate
/// between the previous and current tick.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct LeafSnapshot {
    pub pos: DVec3,
    pub prev_pos: DVec3,
    pub angle: f32,
    pub prev_angle: f32,
    pub alpha: f32,
    pub color: [f32; 3],
    pub scale: f32,
}

/// A single falling-leaf particle. Owns all of its mutable state; the world,
/// wind and optional wind field are injected on every [`tick`](Self::tick).
#[derive(Debug, Clone)]
pub struct LeafParticle {
    pos: DVec3,
    prev_pos: DVec3,
    velocity: DVec3,

    angle: f32,
    prev_angle: f32,
    rotate_time: u32,
    max_rotate_time: u32,
    /// Radians per tick at full spin; signed for direction.
    max_rotate_speed: f32,

    age: u32,
    max_age: u32,
    alpha: f32,

    /// Scales gravity, fixed per leaf in [0.08, 0.12).
    gravity_strength: f64,
    /// Emulates drag/lift: how strongly wind and buoyancy act on this leaf,
    /// fixed per leaf in [0.6, 1.0).
    wind_coefficient: f64,

    phase: Phase,
    color: [f32; 3],
    scale: f32,
}

impl LeafParticle {
    pub fn new<R: Rng + ?Sized>(
        rng: &mut R,
        pos: DVec3,
        color: [f32; 3],
        lifespan: u32,
        size: f32,
    ) -> Self {
        // accelerate over 3-7 seconds to at most 2.5 rotations per second
        let max_rotate_time = (3 + rng.gen_range(0..=4)) * 20;
        let spin_direction = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
        let max_rotate_speed = spin_direction * (0.1 + 2.4 * rng.gen::<f32>()) * TAU / 20.0;
        let angle = rng.gen::<f32>() * TAU;

        LeafParticle {
            pos,
            prev_pos: pos,
            velocity: DVec3::ZERO,
            angle,
            prev_angle: angle,
            rotate_time: 0,
            max_rotate_time,
            max_rotate_speed,
            age: 0,
            max_age: lifespan,
            alpha: 1.0,
            gravity_strength: rng.gen_range(0.08..0.12),
            wind_coefficient: rng.gen_range(0.6..1.0),
            phase: Phase::Airborne,
            color,
            scale: size,
        }
    }

    pub fn pos(&self) -> DVec3 {
        self.pos
    }

    pub fn velocity(&self) -> DVec3 {
        self.velocity
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_dead(&self) -> bool {
        self.phase == Phase::Dead
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    pub fn snapshot(&self) -> LeafSnapshot {
        LeafSnapshot {
            pos: self.pos,
            prev_pos: self.prev_pos,
            angle: self.angle,
            prev_angle: self.prev_angle,
            alpha: self.alpha,
            color: self.color,
            scale: self.scale,
        }
    }

    fn bounding_box(&self) -> Aabb {
        let extent = 0.2 * self.scale as f64;
        Aabb::from_bottom_center(self.pos, extent, extent)
    }

    /// Advance the leaf by one simulation tick.
    pub fn tick<W, S>(&mut self, world: &mut W, wind: &S, wind_field: Option<&dyn DirectionalWindField>)
    where
        W: WorldOracle + ?Sized,
        S: WindSource + ?Sized,
    {
        if self.phase == Phase::Dead {
            return;
        }

        self.prev_pos = self.pos;
        self.prev_angle = self.angle;

        self.age += 1;

        // fade-out animation over the final FADE_DURATION ticks
        if self.age + FADE_DURATION >= self.max_age + 1 {
            self.alpha -= 1.0 / FADE_DURATION as f32;
        }

        if self.age >= self.max_age {
            self.phase = Phase::Dead;
            return;
        }

        let block_pos = self.pos.floor().as_ivec3();
        let fluid = world.fluid_state_at(block_pos);

        if fluid.kind == FluidKind::Lava && fluid.surface_height >= self.pos.y {
            world.emit_particle(ParticleKind::Lava, self.pos);
            self.phase = Phase::Dead;
            return;
        }

        self.velocity.y -= 0.04 * self.gravity_strength;

        let in_qualifying_water =
            fluid.kind == FluidKind::Water && fluid.surface_height >= self.pos.y - 0.1;

        if in_qualifying_water && self.phase != Phase::Stuck {
            if self.phase != Phase::InWater {
                // hit water for the first time
                self.phase = Phase::InWater;

                if (fluid.surface_height - self.pos.y).abs() < 0.2 {
                    self.pos.y = fluid.surface_height;
                }

                self.velocity.y *= 0.1;
                self.velocity.x *= 0.5;
                self.velocity.z *= 0.5;

                self.rotate_time = 0;
            } else {
                // buoyancy - try to stay on top of the water surface
                let depth = (fluid.surface_height + 0.1 - self.pos.y).max(0.0);
                self.velocity.y += depth * self.wind_coefficient / 30.0;
            }

            if !fluid.is_still {
                let push = fluid.flow * 0.4;
                self.velocity.x += (push.x - self.velocity.x) * self.wind_coefficient / 60.0;
                self.velocity.z += (push.y - self.velocity.z) * self.wind_coefficient / 60.0;
            }

            self.velocity *= 1.0 - WATER_FRICTION;
        } else {
            // note: intentionally loose, so leaves near the surface don't
            // oscillate between wind-blown and water-borne every other tick
            if self.phase == Phase::InWater {
                self.phase = Phase::Airborne;
            }

            if self.phase == Phase::Airborne {
                // spin up while in the air
                self.rotate_time = (self.rotate_time + 1).min(self.max_rotate_time);
                self.angle +=
                    (self.rotate_time as f32 / self.max_rotate_time as f32) * self.max_rotate_speed;
            } else {
                // no rotation while resting on the ground
                self.rotate_time = 0;
            }

            // approach the ambient wind via vel += (wind - vel) * f with
            // f = wind_coefficient / 60: an exponential catch-up that closes
            // ~63% of the gap in 60 ticks at coefficient 1.0
            let ambient = wind.ambient_wind();
            let mut ax = (ambient.x - self.velocity.x) * self.wind_coefficient / 60.0;
            let mut az = (ambient.y - self.velocity.z) * self.wind_coefficient / 60.0;

            if let Some(field) = wind_field {
                // redirect the acceleration along the field's horizontal
                // direction, keeping the magnitude computed above
                let field_wind = field.field_at(self.pos);
                let horizontal = DVec2::new(field_wind.x, field_wind.z);
                let field_norm = horizontal.length();

                if field_norm >= 1.0e-4 {
                    let accel_norm = (ax * ax + az * az).sqrt();
                    ax = accel_norm * horizontal.x / field_norm;
                    az = accel_norm * horizontal.y / field_norm;
                } else {
                    ax = 0.0;
                    az = 0.0;
                }
            }

            self.velocity.x += ax;
            self.velocity.z += az;
        }

        self.move_colliding(world, self.velocity);
    }

    /// Resolve one displacement against world collision.
    fn move_colliding<W: WorldOracle + ?Sized>(&mut self, world: &W, delta: DVec3) {
        if delta == DVec3::ZERO {
            return;
        }

        let clipped = world.adjust_for_collision(delta, &self.bounding_box());

        // lose horizontal velocity on collision
        if clipped.x != delta.x {
            self.velocity.x = 0.0;
        }
        if clipped.z != delta.z {
            self.velocity.z = 0.0;
        }

        let on_ground = clipped.y != delta.y && delta.y < 0.0;

        if !on_ground {
            if let Phase::Grounded | Phase::Stuck = self.phase {
                self.phase = Phase::Airborne;
            }
        } else if !matches!(self.phase, Phase::Stuck | Phase::InWater) {
            // get stuck if slow enough; buoyancy wins over ground contact
            // while the leaf is in water
            self.phase = if clipped.y.abs() < 1e-5 {
                Phase::Stuck
            } else {
                Phase::Grounded
            };
        }

        if self.phase == Phase::Stuck {
            // don't accumulate speed or drift while resting
            self.velocity = DVec3::ZERO;
            return;
        }

        if clipped != DVec3::ZERO {
            self.pos += clipped;
        }
    }
}
