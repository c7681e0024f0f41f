//! Common test utilities for Sprout CLI and scenario tests.
//!
//! This module provides:
//! - `TestEnv`: isolated working directory, home and fake toolchain
//! - `TemplateRepo`: a local git repository serving the starter template

#![allow(dead_code)]

pub mod env;

pub use env::*;
pub use template::*;
