//! Application state module

mod app_state;
mod forms;
mod lead;

pub use app_state::*;
pub use forms::*;
pub use lead::Lead;
