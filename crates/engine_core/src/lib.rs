//! Core simulation types for stardash.
//!
//! This crate provides the foundational pieces shared by the simulation
//! crates:
//! - Camera transform with basis-vector accessors
//! - Frame timing derived from driver-supplied timestamps

pub mod time;
pub mod transform;

pub use time::*;
pub use transform::*;

// Re-export commonly used math types
pub use glam::{Mat4, Quat, Vec2, Vec3};
