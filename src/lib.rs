//! # qrshape
//!
//! A Rust library for masking QR codes into decorative shapes without breaking them.
//! Circles and regular polygons hide the dark modules that fall outside the shape, while
//! every finder, timing and alignment pattern (the regions a scanner needs to locate and
//! sample the code) is always drawn.
//!
//! ## Features
//!
//! - **Shape Masking**: Square, circle and regular polygon outlines with a configurable inset
//! - **Scan Safety**: Finder patterns with a one module margin, timing lines and alignment
//!   blocks are never hidden
//! - **Geometry Output**: Per module pixel rectangles and polygon frame paths for any renderer
//! - **Reference Renderers**: PNG via `image`, SVG documents and plain text
//!
//! ## Quick Start
//!
//! ```rust
//! use qrshape::{Matrix, Shape, ShapedQrBuilder};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Raw modules at the highest error correction level
//! let matrix = Matrix::from_data(b"https://example.com")?;
//!
//! let qr = ShapedQrBuilder::new(&matrix)
//!     .shape(Shape::Circle)  // Square, Circle or Polygon { sides }
//!     .module_size(8)        // Pixels per module
//!     .quiet_zone(4)         // Blank modules around the code
//!     .shape_inset(3)        // Modules the shape is pulled inward by
//!     .build()?;
//!
//! let svg = qr.to_svg();
//! let img = qr.to_image()?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Using the engine directly
//!
//! The building blocks are plain functions, so a custom renderer can ask the same
//! questions the builder does:
//!
//! ```rust
//! use qrshape::{safety::is_protected_qr_cell, shape::is_point_inside_shape, Shape};
//!
//! assert!(is_protected_qr_cell(3, 3, 21));
//! assert!(is_point_inside_shape(Shape::Circle, 50.0, 0.0, 100.0));
//! ```

#![allow(clippy::items_after_test_module)]

pub mod builder;
pub(crate) mod common;
pub mod safety;
pub mod shape;

pub use builder::{Canvas, Frame, ModuleRect, ShapedQr, ShapedQrBuilder};
pub use common::metadata::{
    is_standard_width, version_from_width, width_from_version, ECLevel, Metadata,
};
pub use common::utils::{QRError, QRResult};
pub use common::Matrix;
pub use shape::{PolygonPath, Shape};
