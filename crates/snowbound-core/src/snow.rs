//! Background snowfall. Purely decorative and independent of game state.

use glam::Vec2;
use rand::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Snowflake {
    pub pos: Vec2,
    pub size: f32,
    pub speed: f32,
    pub wind: f32,
}

pub struct Snowfall {
    flakes: Vec<Snowflake>,
    bounds: Vec2,
    rng: StdRng,
}

impl Snowfall {
    pub fn new(count: usize, width: f32, height: f32, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let bounds = Vec2::new(width.max(0.0), height.max(0.0));
        let flakes = (0..count)
            .map(|_| Snowflake {
                pos: Vec2::new(rng.gen::<f32>() * bounds.x, rng.gen::<f32>() * bounds.y),
                size: rng.gen::<f32>() * 3.0 + 1.0,
                speed: rng.gen::<f32>() + 0.5,
                wind: rng.gen::<f32>() * 0.5 - 0.25,
            })
            .collect();
        Self { flakes, bounds, rng }
    }

    pub fn flakes(&self) -> &[Snowflake] {
        &self.flakes
    }

    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    /// New viewport size; flakes keep their positions.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.bounds = Vec2::new(width.max(0.0), height.max(0.0));
    }

    /// Advance one animation frame.
    pub fn step(&mut self) {
        let (w, h) = (self.bounds.x, self.bounds.y);
        for f in self.flakes.iter_mut() {
            f.pos.y += f.speed;
            f.pos.x += f.wind;
            if f.pos.y > h {
                f.pos.y = -f.size;
                f.pos.x = self.rng.gen::<f32>() * w;
            }
            if f.pos.x > w {
                f.pos.x = 0.0;
            } else if f.pos.x < 0.0 {
                f.pos.x = w;
            }
        }
    }
}
