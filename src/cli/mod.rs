// Interactive command line layer on top of the processing core
// Author: Gabriel Demetrios Lafis

mod display;
mod prompt;
mod session;

pub use display::*;
pub use prompt::*;
pub use session::*;
