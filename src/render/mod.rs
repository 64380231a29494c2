//! Terminal presentation: [`TuiView`] receives presenter calls from the game,
//! [`Renderer`] turns it into ratatui widgets.

pub mod renderer;
pub mod view;

pub use renderer::{Renderer, ScreenLayout};
pub use view::TuiView;
