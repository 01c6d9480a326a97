//! Cross-cutting request middleware.

pub mod observer;
