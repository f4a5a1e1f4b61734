//! Ambient wind sources.

use glam::DVec2;
use rand::Rng;

use crate::world::WindSource;

/// Fixed wind vector, mainly for tests and scripted scenes.
#[derive(Debug, Clone, Copy)]
pub struct ConstantWind(pub DVec2);

impl WindSource for ConstantWind {
    fn ambient_wind(&self) -> DVec2 {
        self.0
    }
}

/// Slowly drifting gust model: every few seconds a new target direction and
/// strength is rolled, and the wind eases toward it. The host updates this
/// once per tick before particle updates run.
#[derive(Debug, Clone)]
pub struct GustingWind {
    wind: DVec2,
    target: DVec2,
    base_strength: f64,
    gust_strength: f64,
    retarget_in: u32,
}

impl GustingWind {
    pub fn new(base_strength: f64, gust_strength: f64) -> Self {
        GustingWind {
            wind: DVec2::ZERO,
            target: DVec2::ZERO,
            base_strength,
            gust_strength,
            retarget_in: 0,
        }
    }

    pub fn update<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.retarget_in == 0 {
            let angle = rng.gen_range(0.0..std::f64::consts::TAU);
            let strength = self.base_strength + rng.gen::<f64>() * self.gust_strength;
            self.target = DVec2::new(angle.cos(), angle.sin()) * strength;
            // hold each gust target for 3-10 seconds
            self.retarget_in = rng.gen_range(60..200);
        }
        self.retarget_in -= 1;

        self.wind += (self.target - self.wind) / 40.0;
    }
}

impl WindSource for GustingWind {
    fn ambient_wind(&self) -> DVec2 {
        self.wind
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn gusts_stay_within_strength_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut wind = GustingWind::new(0.1, 0.2);
        let max = 0.1 + 0.2;

        for _ in 0..2000 {
            wind.update(&mut rng);
            let strength = wind.ambient_wind().length();
            assert!(
                strength <= max + 1e-9,
                "wind strength {strength} exceeded {max}"
            );
        }
    }

    #[test]
    fn wind_eases_toward_first_gust_target() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut wind = GustingWind::new(0.2, 0.0);

        // the first gust target holds for at least 60 ticks, so 60 updates
        // of easing at 1/40 close ~78% of the distance to strength 0.2
        for _ in 0..60 {
            wind.update(&mut rng);
        }
        assert!(wind.ambient_wind().length() > 0.1);
    }
}
