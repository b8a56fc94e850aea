//! Staff terminal front end: table and stats rendering plus the command
//! loop over the dashboard layer.

pub mod render;
pub mod repl;
