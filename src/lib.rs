pub mod application;
pub mod commands;
pub mod config_store;
pub mod domain;
pub mod error;
pub mod provider;
pub mod runtime;
