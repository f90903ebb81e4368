pub mod algorithms;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod grid;
pub mod harness;
pub mod mazes;
pub mod render;
pub mod statistics;
