//! Renderer module — markdown step reference and its building blocks.

pub mod markdown;
pub mod table;

pub use markdown::render;
