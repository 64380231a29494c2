//! Snake on a flat cell grid
//!
//! This library provides:
//! - Core game logic, a controller and the presenter/scheduler seams (game module)
//! - Keyboard, swipe and button input mapping (input module)
//! - TUI rendering (render module)
//! - Session stats (metrics module)
//! - The interactive terminal mode (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
