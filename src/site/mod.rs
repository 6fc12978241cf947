// src/site/mod.rs
pub mod content;
mod render;

pub use render::{render_landing, render_setup, status_line};
