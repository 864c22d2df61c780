//! HTTP handlers

pub mod health;
pub mod assess;
pub mod resources;
