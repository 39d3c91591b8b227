//! Common test utilities for playlist store integration tests
//!
//! This module provides shared test infrastructure: database setup,
//! row fixtures and an in-memory collaboration authority.

#![allow(unused_imports)]

pub mod fixtures;
pub mod helpers;
pub mod mocks;

pub use fixtures::*;
pub use helpers::*;
pub use mocks::*;
