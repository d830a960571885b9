//! "Digital rain" easter egg: characters falling down a text grid.
//!
//! Only the model lives here. Callers decide how often to call
//! [`Rain::step`] and where to draw [`Rain::render`].
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::error::{ConverterError, Result};

/// Characters a raindrop can show
pub const RAIN_GLYPHS: &str = "0123456789QWERTYUIOPASDFGHJKLZXCVBNMqwertyuiopasdfghjklzxcvbnm";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RainConfig {
    /// Grid width in cells
    pub width: usize,
    /// Grid height in cells
    pub height: usize,
    pub particles: usize,
    /// Smallest fall per step, in rows
    pub min_fall: usize,
    /// Largest fall per step, in rows
    pub max_fall: usize,
    /// Suggested delay between steps
    pub update_rate_ms: u64,
}

impl Default for RainConfig {
    fn default() -> Self {
        Self {
            width: 80,
            height: 24,
            particles: 200,
            min_fall: 1,
            max_fall: 2,
            update_rate_ms: 80,
        }
    }
}

impl RainConfig {
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(ConverterError::InvalidRainConfig(format!(
                "canvas must not be empty, got {}x{}",
                self.width, self.height
            )));
        }
        if self.min_fall == 0 || self.min_fall > self.max_fall {
            return Err(ConverterError::InvalidRainConfig(format!(
                "fall range {}..={} is not usable",
                self.min_fall, self.max_fall
            )));
        }
        Ok(())
    }
}

/// One falling character. `y` is negative while still above the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Raindrop {
    pub x: usize,
    pub y: isize,
    pub glyph: char,
}

#[derive(Debug, Clone)]
pub struct Rain {
    config: RainConfig,
    drops: Vec<Raindrop>,
    rng: ChaCha20Rng,
}

impl Rain {
    /// Scatter the drops above the grid using a random seed
    pub fn new(config: RainConfig) -> Result<Self> {
        Self::with_rng(config, ChaCha20Rng::from_entropy())
    }

    /// Same as [`Rain::new`] but reproducible
    pub fn with_seed(config: RainConfig, seed: u64) -> Result<Self> {
        Self::with_rng(config, ChaCha20Rng::seed_from_u64(seed))
    }

    fn with_rng(config: RainConfig, mut rng: ChaCha20Rng) -> Result<Self> {
        config.validate()?;
        let glyphs: Vec<char> = RAIN_GLYPHS.chars().collect();
        let height = config.height as isize;
        let drops = (0..config.particles)
            .map(|_| Raindrop {
                x: rng.gen_range(0..config.width),
                y: rng.gen_range(-height..0),
                glyph: glyphs[rng.gen_range(0..glyphs.len())],
            })
            .collect();
        tracing::debug!(
            width = config.width,
            height = config.height,
            particles = config.particles,
            "started rain"
        );
        Ok(Self { config, drops, rng })
    }

    pub fn config(&self) -> &RainConfig {
        &self.config
    }

    pub fn drops(&self) -> &[Raindrop] {
        &self.drops
    }

    /// Move every drop down; drops that leave the bottom restart just above the top
    pub fn step(&mut self) {
        let height = self.config.height as isize;
        for drop in &mut self.drops {
            drop.y += self.rng.gen_range(self.config.min_fall..=self.config.max_fall) as isize;
            if drop.y >= height {
                drop.x = self.rng.gen_range(0..self.config.width);
                drop.y = -1;
            }
        }
    }

    /// Draw the visible drops, one line per row
    pub fn render(&self) -> String {
        let mut grid = vec![vec![' '; self.config.width]; self.config.height];
        for drop in &self.drops {
            if drop.y >= 0 {
                grid[drop.y as usize][drop.x] = drop.glyph;
            }
        }
        grid.into_iter()
            .map(|row| row.into_iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small() -> RainConfig {
        RainConfig {
            width: 10,
            height: 5,
            particles: 20,
            ..RainConfig::default()
        }
    }

    #[test]
    fn test_starts_above_grid() {
        let rain = Rain::with_seed(small(), 7).unwrap();
        assert_eq!(rain.drops().len(), 20);
        for drop in rain.drops() {
            assert!(drop.y < 0);
            assert!(drop.x < 10);
            assert!(RAIN_GLYPHS.contains(drop.glyph));
        }
        assert!(rain.render().chars().all(|c| c == ' ' || c == '\n'));
    }

    #[test]
    fn test_drops_stay_in_bounds() {
        let mut rain = Rain::with_seed(small(), 42).unwrap();
        for _ in 0..100 {
            rain.step();
            for drop in rain.drops() {
                assert!(drop.x < 10);
                assert!(drop.y >= -5 && drop.y < 5);
            }
        }
    }

    #[test]
    fn test_render_shape() {
        let mut rain = Rain::with_seed(small(), 1).unwrap();
        for _ in 0..10 {
            rain.step();
        }
        let frame = rain.render();
        let rows: Vec<&str> = frame.split('\n').collect();
        assert_eq!(rows.len(), 5);
        assert!(rows.iter().all(|row| row.chars().count() == 10));
    }

    #[test]
    fn test_seed_is_deterministic() {
        let mut a = Rain::with_seed(small(), 99).unwrap();
        let mut b = Rain::with_seed(small(), 99).unwrap();
        for _ in 0..5 {
            a.step();
            b.step();
        }
        assert_eq!(a.drops(), b.drops());
    }

    #[test]
    fn test_invalid_config() {
        let config = RainConfig { width: 0, ..RainConfig::default() };
        assert!(Rain::with_seed(config, 0).is_err());
        let config = RainConfig { min_fall: 3, max_fall: 2, ..RainConfig::default() };
        assert!(config.validate().is_err());
    }
}
