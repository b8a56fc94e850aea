//! Public terminal front end: screen rendering and the input loop for the
//! confirmation wizard.

pub mod render;
pub mod repl;
