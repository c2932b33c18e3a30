//! Plasma field generation.
//!
//! A plasma field is a 2D color pattern produced by recursively splitting a
//! pixel rectangle into quadrants and interpolating four corner hue seeds
//! down to single pixels. The interior of every split is nudged by an amount
//! proportional to the rectangle's diagonal, which gives the field its
//! crystalline, snowflake-like seams.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`field`] | `FieldState`, the four corner seeds |
//! | [`rect`] | `Rectangle`, quadrant split arithmetic, `mid` |
//! | [`renderer`] | `PlasmaRenderer`, the recursive subdivision |
//! | [`color`] | HSL to RGB conversion |
//! | [`buffer`] | `PixelBuffer` and the `PixelSink` write target |
//! | [`error`] | `BufferError` |
//!
//! # Quick start
//!
//! ```rust
//! use plasma_field::{FieldState, PlasmaRenderer};
//!
//! let field = FieldState::from_seed(7);
//! let image = PlasmaRenderer::new().render_to_buffer(64, 48, &field);
//!
//! assert_eq!(image.as_bytes().len(), 64 * 48 * 4);
//! assert!(image.as_bytes().chunks_exact(4).all(|px| px[3] == 255));
//! ```

pub mod buffer;
pub mod color;
pub mod error;
pub mod field;
pub mod rect;
pub mod renderer;

pub use buffer::{PixelBuffer, PixelSink};
pub use color::{hsl_to_rgb, hue_to_rgba};
pub use error::BufferError;
pub use field::FieldState;
pub use rect::{mid, Rectangle};
pub use renderer::{PlasmaRenderer, DEFAULT_NOISE_SCALE};
