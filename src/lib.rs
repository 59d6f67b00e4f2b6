pub mod cli;
pub mod color;
pub mod errors;
pub mod nearest;
pub mod palette;
pub mod repl;
