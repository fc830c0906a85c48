//! Fixed-delay game loop driver
//!
//! Owns the single mutable `GameState`, sequences the engine once per tick and
//! reports the results to a `Presenter`.

pub mod presenter;
pub mod round;
pub mod scheduler;

pub use presenter::Presenter;
pub use round::Driver;
pub use scheduler::TickScheduler;
