// font-probe/src/canvas.rs
//
// Copyright © 2026 The font-probe Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! An in-memory bilevel bitmap surface for glyph probing.

use pathfinder_geometry::rect::RectI;
use pathfinder_geometry::vector::Vector2I;
use std::cmp;

/// Coverage at or above this value rounds to an "on" pixel when a glyph is
/// painted onto the canvas.
pub const BILEVEL_COVERAGE_THRESHOLD: u8 = 128;

/// An in-memory bilevel bitmap surface for glyph probing.
///
/// One byte per pixel, and every pixel is either `0x00` (background) or
/// `0xff` (ink). This mimics the single-bit surface a 1bpp display driver
/// draws on, stored at a byte per pixel for cheap scanning.
pub struct Canvas {
    /// The raw pixel data.
    pub pixels: Vec<u8>,
    /// The size of the buffer, in pixels.
    pub size: Vector2I,
    /// The number of bytes between successive rows.
    pub stride: usize,
}

impl Canvas {
    /// Creates a new blank canvas with the given pixel size.
    ///
    /// The canvas is initialized with background (all values 0).
    #[inline]
    pub fn new(size: Vector2I) -> Canvas {
        Canvas {
            pixels: vec![0; size.x() as usize * size.y() as usize],
            size,
            stride: size.x() as usize,
        }
    }

    /// Paints an antialiased coverage bitmap whose top left corner lands at
    /// `origin` in canvas coordinates, thresholding each coverage value to
    /// full ink or none.
    ///
    /// `coverage` holds `coverage_size.x() * coverage_size.y()` bytes in row
    /// major order. Parts of the bitmap that fall outside the canvas are
    /// clipped away.
    pub fn blit_coverage(
        &mut self,
        coverage: &[u8],
        coverage_size: Vector2I,
        origin: Vector2I,
    ) {
        let src_start_x = cmp::max(0, -origin.x());
        let src_start_y = cmp::max(0, -origin.y());
        let src_end_x = cmp::min(coverage_size.x(), self.size.x() - origin.x());
        let src_end_y = cmp::min(coverage_size.y(), self.size.y() - origin.y());

        for src_y in src_start_y..src_end_y {
            let dest_row_start = (origin.y() + src_y) as usize * self.stride;
            let src_row_start = src_y as usize * coverage_size.x() as usize;
            for src_x in src_start_x..src_end_x {
                if coverage[src_row_start + src_x as usize] >= BILEVEL_COVERAGE_THRESHOLD {
                    self.pixels[dest_row_start + (origin.x() + src_x) as usize] = 0xff
                }
            }
        }
    }

    /// Returns the ink bounding box: the tightest rectangle enclosing every
    /// ink pixel, in canvas coordinates. Returns `None` for a blank canvas.
    ///
    /// The maximum edges of the returned rectangle are exclusive, so its
    /// size counts pixels.
    pub fn ink_bounds(&self) -> Option<RectI> {
        let (mut min_x, mut min_y) = (i32::MAX, i32::MAX);
        let (mut max_x, mut max_y) = (i32::MIN, i32::MIN);

        for y in 0..self.size.y() {
            let row_start = y as usize * self.stride;
            let row = &self.pixels[row_start..row_start + self.size.x() as usize];
            for (x, &pixel) in row.iter().enumerate() {
                if pixel == 0 {
                    continue;
                }
                let x = x as i32;
                min_x = cmp::min(min_x, x);
                min_y = cmp::min(min_y, y);
                max_x = cmp::max(max_x, x + 1);
                max_y = cmp::max(max_y, y + 1);
            }
        }

        if min_x == i32::MAX {
            return None;
        }
        Some(RectI::new(
            Vector2I::new(min_x, min_y),
            Vector2I::new(max_x - min_x, max_y - min_y),
        ))
    }
}
