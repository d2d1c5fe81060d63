//! Foundation layer: data models, file I/O, and geometry utilities.

pub mod io;
pub mod models;
pub mod utils;
