//! pathway-service: generation and refinement API for learning pathways.
pub mod config;
pub mod dtos;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;
pub mod utils;

pub use startup::AppState;
