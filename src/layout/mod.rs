//! Grid layout computation for collage assembly
//!
//! This module contains the pure layout core:
//! - Grid shape selection from the image count
//! - Aspect-preserving tile resize arithmetic with a height cap
//! - Canvas metrics and tile placement positions
//!
//! Nothing here touches the filesystem.

/// Grid shape selection
pub mod grid;
/// Canvas metrics and tile placement
pub mod plan;
/// Tile resize arithmetic and resampling
pub mod resize;

pub use grid::GridShape;
pub use plan::LayoutPlan;
pub use resize::Tile;
