use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use std::io::{Stderr, stderr};
use tracing::{error, info};

use crate::driver::Driver;
use crate::game::GameConfig;
use crate::input::{InputHandler, KeyAction};
use crate::render::TerminalPresenter;

/// Keyboard-controlled play in the terminal
pub struct HumanMode {
    config: GameConfig,
    input_handler: InputHandler,
    should_quit: bool,
}

impl HumanMode {
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate().context("Invalid game configuration")?;

        Ok(Self {
            config,
            input_handler: InputHandler::new(),
            should_quit: false,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        let presenter = TerminalPresenter::new(terminal, self.config.sound);
        let result = match Driver::new(self.config.clone(), presenter) {
            Ok(mut driver) => {
                let result = self.run_game_loop(&mut driver).await;
                cleanup_terminal(driver.presenter_mut().terminal_mut());
                result
            }
            Err(err) => {
                restore_terminal();
                Err(err)
            }
        };

        info!("session ended");
        result
    }

    async fn run_game_loop<B: Backend>(
        &mut self,
        driver: &mut Driver<TerminalPresenter<B>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();
        driver.start_round()?;

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_event(driver, event)?,
                        Some(Err(err)) => {
                            return Err(err).context("Failed to read terminal event");
                        }
                        None => self.should_quit = true,
                    }
                }

                // Game tick, armed by the previous tick or by a restart
                _ = driver.wait_for_tick() => {
                    driver.tick()?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event<B: Backend>(
        &mut self,
        driver: &mut Driver<TerminalPresenter<B>>,
        event: Event,
    ) -> Result<()> {
        match event {
            Event::Key(key) => {
                // Only process key press events, not release
                if key.kind != KeyEventKind::Press {
                    return Ok(());
                }

                match self.input_handler.handle_key_event(key) {
                    KeyAction::Turn(direction) => {
                        driver.set_direction(direction);
                    }
                    KeyAction::Restart => driver.restart()?,
                    KeyAction::Quit => self.should_quit = true,
                    KeyAction::None => {}
                }
            }
            Event::Resize(_, _) => {
                driver
                    .presenter_mut()
                    .terminal_mut()
                    .autoresize()
                    .context("Failed to resize terminal")?;
                driver.presenter_mut().redraw()?;
            }
            _ => {}
        }

        Ok(())
    }
}

fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<Stderr>>) {
    restore_terminal();
    if let Err(err) = terminal.show_cursor() {
        error!(?err, "failed to show cursor");
    }
}

fn restore_terminal() {
    if let Err(err) = disable_raw_mode() {
        error!(?err, "failed to disable raw mode");
    }
    if let Err(err) = execute!(stderr(), LeaveAlternateScreen) {
        error!(?err, "failed to leave alternate screen");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Cell, Direction, Phase, Snake};
    use crossterm::event::{KeyCode, KeyEvent, KeyEventState, KeyModifiers};
    use ratatui::backend::TestBackend;

    fn driver() -> Driver<TerminalPresenter<TestBackend>> {
        let terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        let config = GameConfig {
            seed: Some(8),
            sound: false,
            ..Default::default()
        };
        let mut driver = Driver::new(config, TerminalPresenter::new(terminal, false)).unwrap();
        driver.start_round().unwrap();
        driver
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_game_initialization() {
        let mode = HumanMode::new(GameConfig::default()).unwrap();
        assert!(!mode.should_quit);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = GameConfig {
            board_size: 0,
            ..Default::default()
        };
        assert!(HumanMode::new(config).is_err());
    }

    #[test]
    fn test_arrow_key_sets_direction() {
        let mut mode = HumanMode::new(GameConfig::default()).unwrap();
        let mut driver = driver();

        mode.handle_event(&mut driver, key(KeyCode::Right)).unwrap();
        assert_eq!(driver.state().direction, Some(Direction::Right));

        // Reverse is dropped
        mode.handle_event(&mut driver, key(KeyCode::Left)).unwrap();
        assert_eq!(driver.state().direction, Some(Direction::Right));
    }

    #[test]
    fn test_key_release_ignored() {
        let mut mode = HumanMode::new(GameConfig::default()).unwrap();
        let mut driver = driver();
        let release = Event::Key(KeyEvent {
            code: KeyCode::Up,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });

        mode.handle_event(&mut driver, release).unwrap();
        assert_eq!(driver.state().direction, None);
    }

    #[test]
    fn test_restart_after_game_over() {
        let mut mode = HumanMode::new(GameConfig::default()).unwrap();
        let mut driver = driver();
        mode.handle_event(&mut driver, key(KeyCode::Up)).unwrap();
        while driver.state().phase == Phase::Running {
            driver.tick().unwrap();
        }
        assert!(!driver.is_ticking());

        mode.handle_event(&mut driver, key(KeyCode::Enter)).unwrap();

        assert_eq!(driver.state().phase, Phase::Running);
        assert_eq!(driver.state().snake, Snake::new(Cell::new(270, 240)));
        assert!(driver.is_ticking());
    }

    #[test]
    fn test_quit_key() {
        let mut mode = HumanMode::new(GameConfig::default()).unwrap();
        let mut driver = driver();

        mode.handle_event(&mut driver, key(KeyCode::Char('q'))).unwrap();
        assert!(mode.should_quit);
    }
}
