//! Application layer - Use cases that coordinate domain services.
//!
//! This layer orchestrates the flow of data between the CLI layer, the
//! external package manager front-ends and the classification engine.

mod check;

pub use check::CheckUseCase;
