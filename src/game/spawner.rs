use rand::Rng;
use tracing::debug;

use super::{
    food::{FoodCatalog, FoodEntity},
    grid::Grid,
    vector::Vector2i,
};

/// Timed food generation.
///
/// Elapsed time is accumulated across calls and only the interval is
/// subtracted on each spawn, so the cadence does not drift with irregular
/// frame times and a long stall catches up with several spawns at once.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FoodSpawner {
    elapsed: f64,
}

impl FoodSpawner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time accumulated since the last spawn
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Advance the spawn clock and return every food that came due.
    ///
    /// Cells are drawn uniformly over the whole grid with independent `x`
    /// and `y`; they may land on the snake or on other food.
    pub fn try_spawn<R: Rng + ?Sized>(
        &mut self,
        elapsed: f64,
        interval: f64,
        grid: &Grid,
        catalog: &FoodCatalog,
        rng: &mut R,
    ) -> Vec<FoodEntity> {
        let mut spawned = Vec::new();
        if catalog.is_empty() || interval.is_nan() || interval <= 0.0 {
            return spawned;
        }
        self.elapsed += elapsed;

        while self.elapsed >= interval {
            self.elapsed -= interval;
            let food = Self::random_food(grid, catalog, rng);
            debug!(x = food.position.x, y = food.position.y, kind = food.kind, "food spawned");
            spawned.push(food);
        }
        spawned
    }

    fn random_food<R: Rng + ?Sized>(grid: &Grid, catalog: &FoodCatalog, rng: &mut R) -> FoodEntity {
        let kind = rng.gen_range(0..catalog.len());
        let x = rng.gen_range(0..grid.width()) as i32;
        let y = rng.gen_range(0..grid.height()) as i32;
        FoodEntity {
            position: Vector2i::new(x, y),
            kind,
        }
    }
}
