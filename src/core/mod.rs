//! Core domain models for the bootstrap tool
//!
//! This module defines the step plan and the run configuration read from
//! the process environment.

pub mod config;
pub mod step;

pub use config::*;
pub use step::*;
