pub mod detect;
pub mod render;
