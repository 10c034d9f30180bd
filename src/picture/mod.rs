//! The [`Picture`] raster and its pixel-level operations.
//!
//! Construction, I/O and checked accessors live here; the transformations
//! are split by theme into the submodules.
use std::fmt;
use std::path::Path;

use image::imageops::{self, FilterType};
use image::{DynamicImage, Rgb, RgbImage};

use crate::color::Color;
use crate::error::{PictureError, Result};
use crate::pixel::Pixel;

mod channels;
mod collage;
mod copy;
mod edges;
mod mirror;

pub use channels::UnitSource;
pub use collage::{COLLAGE_HEIGHT, COLLAGE_SOURCE, COLLAGE_WIDTH};

/// An RGB picture made of `height` rows of `width` pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct Picture {
    raster: RgbImage,
    file_name: Option<String>,
}

impl Picture {
    /// Creates a white picture of the given size.
    ///
    /// # Panics
    /// Panics if either dimension exceeds `u32::MAX`; see [`Picture::try_new`].
    pub fn new(height: usize, width: usize) -> Self {
        match Self::try_new(height, width) {
            Ok(picture) => picture,
            Err(e) => panic!("{e}"),
        }
    }

    /// Creates a white picture, rejecting dimensions the raster cannot hold.
    pub fn try_new(height: usize, width: usize) -> Result<Self> {
        let (w, h) = (dimension(width, "width")?, dimension(height, "height")?);
        Ok(Self {
            raster: RgbImage::from_pixel(w, h, Color::WHITE.into()),
            file_name: None,
        })
    }

    /// Loads a picture from an image file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let img = image::open(path).map_err(|e| PictureError::load(path, e))?;
        let mut picture = Self::from_dynamic(img);
        picture.file_name = Some(path.display().to_string());
        log::debug!("Loaded {picture}");
        Ok(picture)
    }

    /// Wraps an already decoded image, converting it to 8-bit RGB.
    pub fn from_dynamic(img: DynamicImage) -> Self {
        Self {
            raster: img.into_rgb8(),
            file_name: None,
        }
    }

    /// Builds a picture from interleaved RGB bytes in row-major order.
    pub fn from_raw(width: usize, height: usize, data: Vec<u8>) -> Result<Self> {
        let (w, h) = (dimension(width, "width")?, dimension(height, "height")?);
        let len = data.len();
        let expected = width.checked_mul(height).and_then(|n| n.checked_mul(3));
        let raster = RgbImage::from_raw(w, h, data)
            .filter(|_| expected == Some(len))
            .ok_or(PictureError::InvalidBuffer { width, height, len })?;
        Ok(Self {
            raster,
            file_name: None,
        })
    }

    /// Encodes the picture to `path`; the format follows the file extension.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        self.raster
            .save(path)
            .map_err(|e| PictureError::save(path, e))?;
        log::debug!("Saved {} to {}", self, path.display());
        Ok(())
    }

    pub fn width(&self) -> usize {
        self.raster.width() as usize
    }

    pub fn height(&self) -> usize {
        self.raster.height() as usize
    }

    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    pub fn as_rgb_image(&self) -> &RgbImage {
        &self.raster
    }

    pub fn into_rgb_image(self) -> RgbImage {
        self.raster
    }

    /// Write-through accessor for the pixel at `(row, col)`.
    pub fn pixel(&mut self, row: usize, col: usize) -> Result<Pixel<'_>> {
        self.check(row, col)?;
        Ok(self.pixel_unchecked(row, col))
    }

    pub fn color_at(&self, row: usize, col: usize) -> Result<Color> {
        self.check(row, col)?;
        Ok(self.get(row, col))
    }

    pub fn set_color_at(&mut self, row: usize, col: usize, color: Color) -> Result<()> {
        self.check(row, col)?;
        self.put(row, col, color);
        Ok(())
    }

    /// Every pixel in row-major order.
    pub fn pixels_mut(&mut self) -> impl Iterator<Item = Pixel<'_>> {
        self.raster
            .enumerate_pixels_mut()
            .map(|(x, y, rgb)| Pixel::new(y as usize, x as usize, rgb))
    }

    /// Snapshot of each row, top to bottom. A picture of width 0 still
    /// yields `height` empty rows.
    pub fn rows(&self) -> impl Iterator<Item = Vec<Color>> + '_ {
        (0..self.height())
            .map(move |row| (0..self.width()).map(|col| self.get(row, col)).collect())
    }

    pub fn set_all_pixels_to_color(&mut self, color: Color) {
        let rgb: Rgb<u8> = color.into();
        for px in self.raster.pixels_mut() {
            *px = rgb;
        }
    }

    /// Returns a copy resized by the given factors with nearest-neighbour
    /// sampling.
    pub fn scale(&self, x_factor: f64, y_factor: f64) -> Result<Picture> {
        for factor in [x_factor, y_factor] {
            if !factor.is_finite() || factor <= 0.0 {
                return Err(PictureError::InvalidArgument(format!(
                    "scale factor {factor} must be positive"
                )));
            }
        }
        let width = (self.width() as f64 * x_factor) as u32;
        let height = (self.height() as f64 * y_factor) as u32;
        if width == 0 || height == 0 {
            return Err(PictureError::InvalidArgument(format!(
                "scaling {}x{} by ({x_factor}, {y_factor}) leaves an empty picture",
                self.height(),
                self.width()
            )));
        }
        Ok(Picture {
            raster: imageops::resize(&self.raster, width, height, FilterType::Nearest),
            file_name: self.file_name.clone(),
        })
    }

    fn check(&self, row: usize, col: usize) -> Result<()> {
        if row < self.height() && col < self.width() {
            Ok(())
        } else {
            Err(PictureError::OutOfBounds {
                row,
                col,
                height: self.height(),
                width: self.width(),
            })
        }
    }

    /// Checks that the half-open region `rows × cols` lies inside the picture.
    fn check_region(
        &self,
        rows: std::ops::Range<usize>,
        cols: std::ops::Range<usize>,
    ) -> Result<()> {
        if rows.is_empty() || cols.is_empty() {
            return Ok(());
        }
        self.check(rows.end - 1, cols.end - 1)
    }

    #[inline]
    fn pixel_unchecked(&mut self, row: usize, col: usize) -> Pixel<'_> {
        Pixel::new(row, col, self.raster.get_pixel_mut(col as u32, row as u32))
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> Color {
        (*self.raster.get_pixel(col as u32, row as u32)).into()
    }

    #[inline]
    fn put(&mut self, row: usize, col: usize, color: Color) {
        self.raster.put_pixel(col as u32, row as u32, color.into());
    }
}

fn dimension(value: usize, axis: &str) -> Result<u32> {
    u32::try_from(value).map_err(|_| {
        PictureError::InvalidArgument(format!("{axis} {value} exceeds {}", u32::MAX))
    })
}

impl fmt::Display for Picture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Picture, filename {} height {} width {}",
            self.file_name().unwrap_or("None"),
            self.height(),
            self.width()
        )
    }
}
