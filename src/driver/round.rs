use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{debug, info};

use super::{presenter::Presenter, scheduler::TickScheduler};
use crate::game::{Direction, GameConfig, GameEngine, GameState, TickOutcome};

/// Runs rounds: owns the engine, the state and the tick timer.
pub struct Driver<P: Presenter> {
    engine: GameEngine,
    state: GameState,
    presenter: P,
    scheduler: TickScheduler,
    // The state built in `new` is still unplayed
    fresh: bool,
}

impl<P: Presenter> Driver<P> {
    /// Build a driver with a fresh, not yet started round
    pub fn new(config: GameConfig, presenter: P) -> Result<Self> {
        let delay = Duration::from_millis(config.tick_interval_ms);
        let mut engine = GameEngine::new(config).context("Invalid game configuration")?;
        let state = engine.reset().context("Failed to set up round")?;

        Ok(Self {
            engine,
            state,
            presenter,
            scheduler: TickScheduler::new(delay),
            fresh: true,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    pub fn is_ticking(&self) -> bool {
        self.scheduler.is_armed()
    }

    /// Reset the state, hide the menu and arm the first tick.
    ///
    /// The first round plays the state prepared by `new`.
    pub fn start_round(&mut self) -> Result<()> {
        if !self.fresh {
            self.state = self.engine.reset().context("Failed to set up round")?;
        }
        self.fresh = false;

        self.presenter.hide_menu()?;
        self.presenter.show_score(self.state.score)?;
        self.presenter.render(&self.state)?;

        self.scheduler.schedule();
        Ok(())
    }

    /// Throw away the current round, finished or not, and start another
    pub fn restart(&mut self) -> Result<()> {
        info!(score = self.state.score, alive = self.state.is_alive(), "restart requested");
        self.scheduler.cancel();
        self.start_round()
    }

    /// Queue a turn; dropped silently when it would reverse the snake
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        let accepted = self.engine.set_direction(&mut self.state, direction);
        if !accepted {
            debug!(?direction, "direction ignored");
        }
        accepted
    }

    /// Wait for the armed tick deadline
    pub async fn wait_for_tick(&mut self) {
        self.scheduler.wait().await;
    }

    /// Run one tick and publish its effects.
    ///
    /// The next tick is armed only after this one completes; a finished round
    /// leaves the timer disarmed until `restart`.
    pub fn tick(&mut self) -> Result<TickOutcome> {
        let outcome = self
            .engine
            .tick(&mut self.state)
            .context("Failed to advance game state")?;

        self.presenter.render(&self.state)?;

        if outcome.ate_food {
            self.presenter.play_eat_sound()?;
            self.presenter.show_score(self.state.score)?;
        }

        if outcome.collision.is_fatal() || outcome.board_full {
            self.presenter.show_game_over(self.state.score)?;
            self.presenter.show_menu()?;
        }

        if outcome.terminated {
            self.scheduler.cancel();
        } else {
            self.scheduler.schedule();
        }

        Ok(outcome)
    }
}
