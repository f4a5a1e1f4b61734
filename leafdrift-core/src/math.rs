use glam::DVec3;

/// Axis-aligned box used for collision queries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: DVec3,
    pub max: DVec3,
}

impl Aabb {
    /// Box of the given footprint whose bottom face is centered on `pos`.
    pub fn from_bottom_center(pos: DVec3, width: f64, height: f64) -> Self {
        let half = width / 2.0;
        Aabb {
            min: DVec3::new(pos.x - half, pos.y, pos.z - half),
            max: DVec3::new(pos.x + half, pos.y + height, pos.z + half),
        }
    }

    pub fn offset(&self, delta: DVec3) -> Self {
        Aabb {
            min: self.min + delta,
            max: self.max + delta,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bottom_center_box_is_centered_horizontally() {
        let bb = Aabb::from_bottom_center(DVec3::new(1.0, 2.0, 3.0), 0.2, 0.2);
        assert_eq!(bb.min, DVec3::new(0.9, 2.0, 2.9));
        assert_eq!(bb.max, DVec3::new(1.1, 2.2, 3.1));
    }

    #[test]
    fn offset_translates_both_corners() {
        let bb = Aabb::from_bottom_center(DVec3::ZERO, 1.0, 1.0);
        let moved = bb.offset(DVec3::new(0.0, -0.5, 0.0));
        assert_eq!(moved.min.y, -0.5);
        assert_eq!(moved.max.y, 0.5);
    }
}
