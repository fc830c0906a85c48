use rand::Rng;
use serde::{Deserialize, Serialize};

use super::action::Direction;

/// A cell on the board, addressed by the pixel-style coordinates of its
/// top-left corner. Both coordinates are multiples of the cell size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move cell by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// The neighbouring cell `step` units away in `direction`
    pub fn stepped(&self, direction: Direction, step: i32) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx * step, dy * step)
    }
}

/// Fixed-size square board split into `cell_size` squares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    cell_size: i32,
    board_size: i32,
}

impl Grid {
    /// Callers validate sizes through `GameConfig::validate` first.
    pub fn new(cell_size: i32, board_size: i32) -> Self {
        debug_assert!(cell_size > 0 && board_size > 0 && board_size % cell_size == 0);
        Self {
            cell_size,
            board_size,
        }
    }

    pub fn cell_size(&self) -> i32 {
        self.cell_size
    }

    pub fn board_size(&self) -> i32 {
        self.board_size
    }

    /// Number of cells along one side
    pub fn columns(&self) -> usize {
        (self.board_size / self.cell_size) as usize
    }

    pub fn cell_count(&self) -> usize {
        self.columns() * self.columns()
    }

    /// Check if a cell lies on the board
    pub fn is_in_bounds(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.x < self.board_size && cell.y >= 0 && cell.y < self.board_size
    }

    pub fn is_aligned(&self, cell: Cell) -> bool {
        cell.x % self.cell_size == 0 && cell.y % self.cell_size == 0
    }

    /// Uniformly random aligned cell within bounds
    pub fn random_aligned_cell<R: Rng + ?Sized>(&self, rng: &mut R) -> Cell {
        let columns = self.columns() as i32;
        Cell::new(
            rng.gen_range(0..columns) * self.cell_size,
            rng.gen_range(0..columns) * self.cell_size,
        )
    }

    /// Every aligned cell, row by row
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let columns = self.columns() as i32;
        (0..columns).flat_map(move |row| {
            (0..columns).map(move |col| Cell::new(col * self.cell_size, row * self.cell_size))
        })
    }

    /// (column, row) of an in-bounds cell
    pub fn to_grid_index(&self, cell: Cell) -> Option<(usize, usize)> {
        if !self.is_in_bounds(cell) {
            return None;
        }
        Some((
            (cell.x / self.cell_size) as usize,
            (cell.y / self.cell_size) as usize,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_cell_movement() {
        let cell = Cell::new(270, 240);
        assert_eq!(cell.stepped(Direction::Right, 30), Cell::new(300, 240));
        assert_eq!(cell.stepped(Direction::Left, 30), Cell::new(240, 240));
        assert_eq!(cell.stepped(Direction::Up, 30), Cell::new(270, 210));
        assert_eq!(cell.stepped(Direction::Down, 30), Cell::new(270, 270));
    }

    #[test]
    fn test_bounds_checking() {
        let grid = Grid::new(30, 600);

        assert!(grid.is_in_bounds(Cell::new(0, 0)));
        assert!(grid.is_in_bounds(Cell::new(570, 570)));
        assert!(!grid.is_in_bounds(Cell::new(-30, 0)));
        assert!(!grid.is_in_bounds(Cell::new(600, 0)));
        assert!(!grid.is_in_bounds(Cell::new(0, 600)));
        assert!(!grid.is_in_bounds(Cell::new(0, -30)));
    }

    #[test]
    fn test_random_cells_are_aligned_and_in_bounds() {
        let grid = Grid::new(30, 600);
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..1_000 {
            let cell = grid.random_aligned_cell(&mut rng);
            assert!(grid.is_in_bounds(cell), "{cell:?} out of bounds");
            assert!(grid.is_aligned(cell), "{cell:?} not aligned");
        }
    }

    #[test]
    fn test_cell_enumeration() {
        let grid = Grid::new(30, 90);
        let cells: Vec<Cell> = grid.cells().collect();

        assert_eq!(grid.columns(), 3);
        assert_eq!(cells.len(), grid.cell_count());
        assert_eq!(cells[0], Cell::new(0, 0));
        assert_eq!(cells[1], Cell::new(30, 0));
        assert_eq!(cells[8], Cell::new(60, 60));
    }

    #[test]
    fn test_grid_index() {
        let grid = Grid::new(30, 600);
        assert_eq!(grid.to_grid_index(Cell::new(270, 240)), Some((9, 8)));
        assert_eq!(grid.to_grid_index(Cell::new(-30, 240)), None);
    }
}
