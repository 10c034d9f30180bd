use image::imageops;

use super::Picture;
use crate::color::Color;
use crate::error::{PictureError, Result};

impl Picture {
    /// Copies all of `source` into this picture with its top-left corner at
    /// `(start_row, start_col)`. Whatever falls outside either picture is
    /// skipped.
    pub fn copy(&mut self, source: &Picture, start_row: usize, start_col: usize) {
        let rows = source.height().min(self.height().saturating_sub(start_row));
        let cols = source.width().min(self.width().saturating_sub(start_col));
        for row in 0..rows {
            for col in 0..cols {
                self.put(start_row + row, start_col + col, source.get(row, col));
            }
        }
    }

    /// Moves the region `[src_row_start, src_row_end) × [src_col_start,
    /// src_col_end)` of `source` into this picture at `(dest_row_start,
    /// dest_col_start)`, leaving the source region white.
    #[allow(clippy::too_many_arguments)]
    pub fn crop_and_copy(
        &mut self,
        source: &mut Picture,
        src_row_start: usize,
        src_row_end: usize,
        src_col_start: usize,
        src_col_end: usize,
        dest_row_start: usize,
        dest_col_start: usize,
    ) -> Result<()> {
        let rows = src_row_start..src_row_end;
        let cols = src_col_start..src_col_end;
        if rows.is_empty() || cols.is_empty() {
            return Ok(());
        }
        source.check_region(rows.clone(), cols.clone())?;
        let dest_row_end = dest_row_start.checked_add(rows.len());
        let dest_col_end = dest_col_start.checked_add(cols.len());
        let (Some(dest_row_end), Some(dest_col_end)) = (dest_row_end, dest_col_end) else {
            return Err(PictureError::OutOfBounds {
                row: dest_row_start,
                col: dest_col_start,
                height: self.height(),
                width: self.width(),
            });
        };
        self.check_region(dest_row_start..dest_row_end, dest_col_start..dest_col_end)?;

        for (dr, row) in rows.enumerate() {
            for (dc, col) in cols.clone().enumerate() {
                self.put(dest_row_start + dr, dest_col_start + dc, source.get(row, col));
                source.put(row, col, Color::WHITE);
            }
        }
        Ok(())
    }

    /// Replaces this picture with `other` flipped left to right.
    pub fn reverse_horizontal(&mut self, other: &Picture) -> Result<()> {
        self.ensure_same_size(other)?;
        self.raster = imageops::flip_horizontal(&other.raster);
        Ok(())
    }

    /// Replaces this picture with `other` flipped top to bottom.
    pub fn reverse_vertical(&mut self, other: &Picture) -> Result<()> {
        self.ensure_same_size(other)?;
        self.raster = imageops::flip_vertical(&other.raster);
        Ok(())
    }

    fn ensure_same_size(&self, other: &Picture) -> Result<()> {
        if self.raster.dimensions() == other.raster.dimensions() {
            Ok(())
        } else {
            Err(PictureError::DimensionMismatch {
                expected: (self.height(), self.width()),
                found: (other.height(), other.width()),
            })
        }
    }
}
