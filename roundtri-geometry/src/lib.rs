//! Geometry of an isosceles triangle with rounded (filleted) corners.

pub mod error;
pub mod fillet;
pub mod types;
