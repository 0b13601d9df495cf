//! Layout constants and runtime configuration defaults

// Layout-specific constants for grid shape and tile sizing
/// Largest image count still laid out as a single row
pub const SIDE_BY_SIDE_LIMIT: usize = 2;

/// Maximum allowed tile height; overrides width-based resizing when exceeded
pub const MAX_TILE_HEIGHT: u32 = 800;

// Prevents degenerate aspect ratios from producing an empty tile
/// Lower bound on resized tile dimensions
pub const MIN_TILE_DIMENSION: u32 = 1;

/// Canvas background color (white)
pub const BACKGROUND_COLOR: [u8; 3] = [255, 255, 255];

// Default values for configurable parameters
/// Default gap between tiles and around the canvas border, in pixels
pub const DEFAULT_MARGIN: u32 = 10;

/// Default nominal tile width, in pixels
pub const DEFAULT_TARGET_WIDTH: u32 = 800;

// Output settings
/// JPEG encoding quality for saved collages
pub const JPEG_QUALITY: u8 = 95;

/// Default output location when none is given
pub const DEFAULT_OUTPUT_PATH: &str = "output/collage.jpg";

/// File extensions accepted when scanning directory targets
pub const SUPPORTED_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "gif", "bmp"];

// CLI bounds on the nominal tile width; the library itself accepts any
// positive value
/// Smallest tile width selectable from the command line
pub const MIN_CLI_WIDTH: u32 = 200;
/// Largest tile width selectable from the command line
pub const MAX_CLI_WIDTH: u32 = 5000;
