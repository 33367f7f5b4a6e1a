//! Form domain layer
//!
//! The draft for the selected form type and the engine that validates and
//! submits it.

mod draft;
mod engine;

pub use engine::FormEngine;
