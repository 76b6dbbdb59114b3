pub mod animator;
pub mod config;
