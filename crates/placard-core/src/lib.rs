//! Placard Core Types
//!
//! This crate provides the foundational types for the Placard card-placement
//! engine. It includes:
//!
//! - **Geometry**: Points, sizes, rectangles, and bounding boxes
//!   ([`geometry`] module)
//! - **Items**: Logical card descriptions and their nominal dimensions
//!   ([`item`] module)

pub mod geometry;
pub mod item;
