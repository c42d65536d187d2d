//! Floorplan Core Types and Definitions
//!
//! This crate provides the foundational types for floor-plan export. It
//! includes:
//!
//! - **Scene**: the read-only scene snapshot and typed property access ([`scene`] module)
//! - **Geometry**: export-space points, sizes and bounds ([`geometry`] module)
//! - **Colors**: CSS color handling and the floor-plan palette ([`color`] module)
//! - **Draw**: styled, annotated primitives and layered output ([`draw`] module)

pub mod color;
pub mod draw;
pub mod geometry;
pub mod scene;
