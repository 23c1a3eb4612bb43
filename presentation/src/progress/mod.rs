//! Progress notifiers for the terminal

pub mod reporter;
