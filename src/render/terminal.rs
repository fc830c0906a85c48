use std::io::{Write, stderr};

use anyhow::{Context, Result};
use ratatui::{Terminal, backend::Backend};
use tracing::trace;

use super::renderer::{Menu, Renderer, View};
use crate::driver::Presenter;
use crate::game::GameState;
use crate::metrics::SessionStats;

/// Presenter that draws to a ratatui terminal and rings the bell on eat
pub struct TerminalPresenter<B: Backend> {
    terminal: Terminal<B>,
    renderer: Renderer,
    score: u32,
    menu: Menu,
    stats: SessionStats,
    sound: bool,
    // Last frame, so menu and score changes can redraw between ticks
    last_state: Option<GameState>,
}

impl<B: Backend> TerminalPresenter<B> {
    pub fn new(terminal: Terminal<B>, sound: bool) -> Self {
        Self {
            terminal,
            renderer: Renderer::new(),
            score: 0,
            menu: Menu::Hidden,
            stats: SessionStats::new(),
            sound,
            last_state: None,
        }
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    pub fn menu(&self) -> Menu {
        self.menu
    }

    /// Draw the last rendered state again, e.g. after a resize
    pub fn redraw(&mut self) -> Result<()> {
        let Some(state) = &self.last_state else {
            return Ok(());
        };

        self.stats.update();
        let view = View {
            score: self.score,
            menu: self.menu,
            stats: &self.stats,
        };
        let renderer = &self.renderer;

        self.terminal
            .draw(|frame| renderer.render(frame, state, &view))
            .context("Failed to draw frame")?;
        Ok(())
    }
}

impl<B: Backend> Presenter for TerminalPresenter<B> {
    fn render(&mut self, state: &GameState) -> Result<()> {
        match &mut self.last_state {
            Some(last) => last.clone_from(state),
            None => self.last_state = Some(state.clone()),
        }
        self.redraw()
    }

    fn play_eat_sound(&mut self) -> Result<()> {
        if !self.sound {
            return Ok(());
        }
        trace!("bell");
        let mut out = stderr();
        out.write_all(b"\x07").context("Failed to ring bell")?;
        out.flush().context("Failed to ring bell")?;
        Ok(())
    }

    fn show_game_over(&mut self, final_score: u32) -> Result<()> {
        self.stats.on_round_over(final_score);
        self.score = final_score;
        self.menu = Menu::GameOver { final_score };
        Ok(())
    }

    fn show_score(&mut self, score: u32) -> Result<()> {
        self.score = score;
        self.redraw()
    }

    fn hide_menu(&mut self) -> Result<()> {
        self.stats.on_round_start();
        self.menu = Menu::Hidden;
        self.redraw()
    }

    fn show_menu(&mut self) -> Result<()> {
        self.redraw()
    }
}
