//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! The grid is a flat sequence of cells; drawing goes through [`Presenter`] and
//! timing through [`Scheduler`], so a whole game can run headless.

pub mod action;
pub mod config;
pub mod controller;
pub mod engine;
pub mod presenter;
pub mod scheduler;
pub mod state;

// Re-export commonly used types
pub use action::{Direction, InputAction};
pub use config::{GameConfig, MAX_GRID_SIZE};
pub use controller::GameController;
pub use engine::{GameEngine, TickOutcome};
pub use presenter::{Presenter, RecordingPresenter};
pub use scheduler::{IntervalScheduler, ManualScheduler, Scheduler};
pub use state::{Cell, CollisionType, GameState, Snake};
