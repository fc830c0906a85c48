use anyhow::Result;

use crate::game::GameState;

/// Side effects the driver asks of the user interface.
///
/// Called between ticks only, never while the state is being updated.
pub trait Presenter {
    fn render(&mut self, state: &GameState) -> Result<()>;

    fn play_eat_sound(&mut self) -> Result<()>;

    fn show_game_over(&mut self, final_score: u32) -> Result<()>;

    fn show_score(&mut self, score: u32) -> Result<()>;

    fn hide_menu(&mut self) -> Result<()>;

    fn show_menu(&mut self) -> Result<()>;
}
