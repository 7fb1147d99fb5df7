#![cfg_attr(not(test), no_std)]

//! USPS POSTNET and FIM barcode encoder.
//!
//! A value goes through the same stages in both symbologies: validation
//! (cleaned value), encoding (framing and check characters), decomposition
//! (one glyph per bar slot), geometry (bar rectangles in points) and finally
//! a [Canvas] that receives filled rectangles.
//!
//! ```
//! use usps::{Barcode, Fim, Options, Postnet, Rect};
//!
//! let zip = Postnet::with_options("12345", Options::POSTNET.human_readable(true));
//! let mut bars: Vec<Rect> = Vec::new();
//! zip.draw(&mut bars).unwrap();
//! assert_eq!(bars.len(), 32);
//!
//! let fim = Fim::new("E");
//! assert!(!fim.is_valid());
//! ```
//!
//! With the `embedded-graphics` feature (default), [Graphic] rasterises a
//! symbol onto any `DrawTarget`.

extern crate alloc;

mod barcode;
mod canvas;
mod error;
pub mod fim;
mod geometry;
#[cfg(feature = "embedded-graphics")]
mod graphics;
mod options;
mod pattern;
pub mod postnet;
pub mod tables;

pub use barcode::{Barcode, Symbol, Symbology, UnknownSymbology, UspsBarcode};
pub use canvas::{render, Canvas, Caption};
pub use error::{DrawError, Error};
pub use fim::Fim;
pub use geometry::{Geometry, Layout, Primitive, Rect, Size};
#[cfg(feature = "embedded-graphics")]
pub use graphics::Graphic;
pub use options::{Options, Overrides};
pub use pattern::{Pattern, Slots};
pub use postnet::Postnet;

/// Points per inch. All lengths are in points.
pub const INCH: f64 = 72.0;
