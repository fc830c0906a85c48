use std::collections::HashSet;

use rand::{Rng, SeedableRng, rngs::StdRng, seq::IteratorRandom};
use tracing::warn;

use super::{
    error::GameError,
    grid::{Cell, Grid},
};

/// Display color of a food item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// The single piece of food on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Food {
    pub cell: Cell,
    pub color: Rgb,
}

/// Picks free cells and colors for food
pub struct FoodPlacer {
    grid: Grid,
    max_attempts: u32,
    rng: StdRng,
}

impl FoodPlacer {
    pub fn new(grid: Grid, max_attempts: u32, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            grid,
            max_attempts,
            rng,
        }
    }

    /// Random free cell.
    ///
    /// Rejection-samples aligned cells first. Once `max_attempts` samples have
    /// all landed on occupied cells, picks uniformly among the remaining free
    /// cells instead, and fails only when there are none.
    pub fn place_food(&mut self, occupied: &HashSet<Cell>) -> Result<Cell, GameError> {
        for _ in 0..self.max_attempts {
            let cell = self.grid.random_aligned_cell(&mut self.rng);
            if !occupied.contains(&cell) {
                return Ok(cell);
            }
        }

        warn!(
            attempts = self.max_attempts,
            occupied = occupied.len(),
            "food sampling exhausted, scanning free cells"
        );

        self.grid
            .cells()
            .filter(|cell| !occupied.contains(cell))
            .choose(&mut self.rng)
            .ok_or(GameError::BoardFull {
                attempts: self.max_attempts,
            })
    }

    pub fn random_color(&mut self) -> Rgb {
        Rgb(
            self.rng.gen_range(0..=255),
            self.rng.gen_range(0..=255),
            self.rng.gen_range(0..=255),
        )
    }

    /// New food on a free cell with a fresh color
    pub fn spawn(&mut self, occupied: &HashSet<Cell>) -> Result<Food, GameError> {
        let cell = self.place_food(occupied)?;
        Ok(Food {
            cell,
            color: self.random_color(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_food_avoids_occupied_cells() {
        let grid = Grid::new(30, 90);
        let mut placer = FoodPlacer::new(grid, 10_000, Some(3));
        let occupied: HashSet<Cell> = grid.cells().take(8).collect();

        for _ in 0..100 {
            let cell = placer.place_food(&occupied).unwrap();
            assert_eq!(cell, Cell::new(60, 60));
        }
    }

    #[test]
    fn test_fallback_finds_last_free_cell() {
        let grid = Grid::new(30, 90);
        // Zero random attempts forces the scan path
        let mut placer = FoodPlacer::new(grid, 0, Some(3));
        let occupied: HashSet<Cell> = grid.cells().skip(1).collect();

        assert_eq!(placer.place_food(&occupied), Ok(Cell::new(0, 0)));
    }

    #[test]
    fn test_full_board_errors() {
        let grid = Grid::new(30, 60);
        let mut placer = FoodPlacer::new(grid, 50, Some(1));
        let occupied: HashSet<Cell> = grid.cells().collect();

        assert_eq!(
            placer.place_food(&occupied),
            Err(GameError::BoardFull { attempts: 50 })
        );
    }

    #[test]
    fn test_seeded_placement_is_reproducible() {
        let grid = Grid::new(30, 600);
        let occupied = HashSet::new();
        let mut a = FoodPlacer::new(grid, 100, Some(99));
        let mut b = FoodPlacer::new(grid, 100, Some(99));

        for _ in 0..20 {
            assert_eq!(a.spawn(&occupied), b.spawn(&occupied));
        }
    }
}
