pub mod renderer;
pub mod terminal;

pub use renderer::{Menu, Renderer, View};
pub use terminal::TerminalPresenter;
