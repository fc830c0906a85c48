use super::{food::Food, grid::Grid, snake::Snake};

/// Outcome of the collision check after a move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollisionKind {
    #[default]
    None,
    /// Head left the board
    Wall,
    /// Head ran into the body
    SelfCollision,
}

impl CollisionKind {
    /// Whether this collision ends the round
    pub fn is_fatal(&self) -> bool {
        !matches!(self, CollisionKind::None)
    }
}

/// Wall first, then the body behind the neck.
///
/// The neck always sits next to the head and is left out of the self check.
pub fn check_collision(snake: &Snake, grid: &Grid) -> CollisionKind {
    let head = snake.head();

    if !grid.is_in_bounds(head) {
        return CollisionKind::Wall;
    }

    if snake.trailing_body().any(|&cell| cell == head) {
        return CollisionKind::SelfCollision;
    }

    CollisionKind::None
}

pub fn check_eat(snake: &Snake, food: &Food) -> bool {
    snake.head() == food.cell
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{food::Rgb, grid::Cell};

    fn snake(points: &[(i32, i32)]) -> Snake {
        Snake::from_cells(points.iter().map(|&(x, y)| Cell::new(x, y))).unwrap()
    }

    #[test]
    fn test_no_collision() {
        let grid = Grid::new(30, 600);
        assert_eq!(
            check_collision(&snake(&[(240, 240), (270, 240)]), &grid),
            CollisionKind::None
        );
    }

    #[test]
    fn test_wall_collision() {
        let grid = Grid::new(30, 600);
        assert_eq!(
            check_collision(&snake(&[(0, 240), (-30, 240)]), &grid),
            CollisionKind::Wall
        );
        assert_eq!(
            check_collision(&snake(&[(570, 570), (570, 600)]), &grid),
            CollisionKind::Wall
        );
    }

    #[test]
    fn test_head_on_first_cell_is_self_collision() {
        let grid = Grid::new(30, 600);
        let looped = snake(&[(0, 0), (30, 0), (30, 30), (0, 0)]);

        let kind = check_collision(&looped, &grid);
        assert_eq!(kind, CollisionKind::SelfCollision);
        assert!(kind.is_fatal());
    }

    #[test]
    fn test_neck_is_excluded() {
        let grid = Grid::new(30, 600);
        // Head doubled onto the neck is not counted as hitting the body
        let doubled = snake(&[(0, 0), (30, 0), (30, 0)]);
        assert_eq!(check_collision(&doubled, &grid), CollisionKind::None);
    }

    #[test]
    fn test_eat_detection() {
        let s = snake(&[(240, 240), (270, 240)]);
        let on_head = Food {
            cell: Cell::new(270, 240),
            color: Rgb(255, 0, 0),
        };
        let elsewhere = Food {
            cell: Cell::new(0, 0),
            color: Rgb(255, 0, 0),
        };

        assert!(check_eat(&s, &on_head));
        assert!(!check_eat(&s, &elsewhere));
    }
}
