//! Core types and definitions for the gyrosim kinematics engine.
//!
//! This crate defines the vocabulary shared across the workspace: the cone
//! geometry, the Z-X-Z Euler rotation composition, angular-rate parameters,
//! engine configuration, frame snapshots, and the error taxonomy.
//! It has no dependency on any runtime framework.

pub mod config;
pub mod constants;
pub mod error;
pub mod geometry;
pub mod params;
pub mod rotation;
pub mod state;
pub mod types;
