//! Controllers layer - orchestration and coordination.
//!
//! This module contains controllers that coordinate between
//! domain models and the UI:
//! - The calculator form (Calculate / Clear)

pub mod calculator;
