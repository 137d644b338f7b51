//! Shared terminal utilities.
//!
//! Box drawing, slider and meter rendering, and the alternate-screen guard.

mod output;
mod screen;

pub use output::*;
pub use screen::*;
