//! Pixel-level picture manipulation for introductory image-processing
//! exercises.
//!
//! ```no_run
//! use picture_lab::Picture;
//!
//! # fn main() -> picture_lab::Result<()> {
//! let mut beach = Picture::open("beach.jpg")?;
//! println!("{beach}");
//! beach.zero_blue();
//! beach.save("beach-no-blue.png")?;
//! # Ok(())
//! # }
//! ```
pub mod color;
pub mod error;
pub mod picture;
pub mod pixel;

pub use crate::color::Color;
pub use crate::error::{ImageErrorKind, PictureError, Result};
pub use crate::picture::{Picture, UnitSource, COLLAGE_HEIGHT, COLLAGE_SOURCE, COLLAGE_WIDTH};
pub use crate::pixel::Pixel;
