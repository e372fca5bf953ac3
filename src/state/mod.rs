//! Application state module

mod app_state;
mod draft;
mod focus;
pub mod forms;

pub use app_state::*;
pub use draft::*;
pub use focus::*;
