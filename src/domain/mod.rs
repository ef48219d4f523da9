//! Domain layer - package snapshot types and the classification engine.

pub mod model;
pub mod service;
