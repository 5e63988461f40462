pub mod config;
pub mod input;
pub mod outcome;
pub mod target;
