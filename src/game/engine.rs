use tracing::{debug, info};

use super::{
    action::{Direction, is_reversal},
    collision::{CollisionKind, check_collision, check_eat},
    config::GameConfig,
    error::GameError,
    food::FoodPlacer,
    grid::Grid,
    snake::Snake,
    state::{GameState, Phase},
};

/// What happened during one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickOutcome {
    /// Whether the snake took a step
    pub moved: bool,
    /// Whether the snake ate food this tick
    pub ate_food: bool,
    /// Collision found after the move
    pub collision: CollisionKind,
    /// Whether the round ended because no free cell was left for food
    pub board_full: bool,
    /// Whether the round is over
    pub terminated: bool,
}

impl TickOutcome {
    fn idle(terminated: bool) -> Self {
        Self {
            moved: false,
            ate_food: false,
            collision: CollisionKind::None,
            board_full: false,
            terminated,
        }
    }
}

/// The game engine that handles all game logic
pub struct GameEngine {
    config: GameConfig,
    grid: Grid,
    placer: FoodPlacer,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        let grid = config.grid();
        let placer = FoodPlacer::new(grid, config.max_food_attempts, config.seed);

        Ok(Self {
            config,
            grid,
            placer,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Fresh round: one-cell snake, no direction, zero score, new food
    pub fn reset(&mut self) -> Result<GameState, GameError> {
        let snake = Snake::new(self.config.initial_cell);
        let food = self.placer.spawn(&snake.occupied_cells())?;

        info!(
            start_x = self.config.initial_cell.x,
            start_y = self.config.initial_cell.y,
            food_x = food.cell.x,
            food_y = food.cell.y,
            "round started"
        );

        Ok(GameState::new(snake, food, self.grid))
    }

    /// Queue a direction for the next tick.
    ///
    /// Returns false when the request is dropped: the round is over, or the
    /// turn would reverse the snake onto itself.
    pub fn set_direction(&self, state: &mut GameState, direction: Direction) -> bool {
        if !state.is_alive() || is_reversal(direction, state.direction, state.heading) {
            return false;
        }
        state.direction = Some(direction);
        true
    }

    /// Execute one tick: move, eat, then check for collisions.
    ///
    /// A finished round is left untouched. When eating would leave no free
    /// cell for the next food, the round ends before the snake moves.
    pub fn tick(&mut self, state: &mut GameState) -> Result<TickOutcome, GameError> {
        if !state.is_alive() {
            return Ok(TickOutcome::idle(true));
        }

        let Some(direction) = state.direction else {
            return Ok(TickOutcome::idle(false));
        };

        let step = self.grid.cell_size();
        let next_head = state.snake.next_head(direction, step);
        let grows = next_head == state.food.cell;

        // Growing keeps the tail, so the next food must avoid the current
        // body plus the new head
        let next_food = if grows {
            let mut occupied = state.occupied_cells();
            occupied.insert(next_head);
            match self.placer.spawn(&occupied) {
                Ok(food) => Some(food),
                Err(GameError::BoardFull { attempts }) => {
                    state.phase = Phase::GameOver;
                    state.direction = None;
                    info!(
                        score = state.score,
                        length = state.snake.len(),
                        attempts,
                        "board full, game over"
                    );
                    return Ok(TickOutcome {
                        board_full: true,
                        ..TickOutcome::idle(true)
                    });
                }
                Err(err) => return Err(err),
            }
        } else {
            None
        };

        state.snake.advance(Some(direction), step, grows);
        state.heading = Some(direction);
        state.ticks += 1;

        let ate_food = check_eat(&state.snake, &state.food);
        if let Some(food) = next_food {
            state.score += self.config.score_per_food;
            state.food = food;
            debug!(
                score = state.score,
                length = state.snake.len(),
                food_x = state.food.cell.x,
                food_y = state.food.cell.y,
                "food eaten"
            );
        }

        let collision = check_collision(&state.snake, &self.grid);
        if collision.is_fatal() {
            state.phase = Phase::GameOver;
            state.direction = None;
            info!(
                score = state.score,
                ticks = state.ticks,
                ?collision,
                "game over"
            );
        }

        Ok(TickOutcome {
            moved: true,
            ate_food,
            collision,
            board_full: false,
            terminated: collision.is_fatal(),
        })
    }
}
