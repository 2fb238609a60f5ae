// font-probe/src/loader.rs
//
// Copyright © 2026 The font-probe Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Provides a common interface to the rasterization backend that loads,
//! parses, and paints fonts for measurement.

use pathfinder_geometry::vector::{Vector2F, Vector2I};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use crate::canvas::Canvas;
use crate::error::{FontLoadingError, GlyphMeasurementError};

/// Provides a common interface to the rasterization backend that loads,
/// parses, and paints fonts for measurement.
///
/// The analyzer never reads font binary structure itself; everything it
/// learns about a font flows through this trait, so a backend can be swapped
/// without touching the measurement pipeline.
pub trait Loader: Clone + Sized {
    /// Loads a font from raw font data (the contents of a `.ttf`/`.otf` file).
    ///
    /// If the data represents a collection (`.ttc`/`.otc`), `font_index`
    /// specifies the index of the font to load from it. If the data
    /// represents a single font, pass 0 for `font_index`.
    fn from_bytes(font_data: Arc<Vec<u8>>, font_index: u32) -> Result<Self, FontLoadingError>;

    /// Loads a font from a `.ttf`/`.otf` file.
    ///
    /// If the file is a collection (`.ttc`/`.otc`), `font_index` specifies
    /// the index of the font to load from it. If the file represents a single
    /// font, pass 0 for `font_index`.
    fn from_file(file: &mut File, font_index: u32) -> Result<Self, FontLoadingError> {
        let mut font_data = vec![];
        file.read_to_end(&mut font_data)?;
        Self::from_bytes(Arc::new(font_data), font_index)
    }

    /// Loads a font from the path to a `.ttf`/`.otf` file.
    ///
    /// If the file is a collection (`.ttc`/`.otc`), `font_index` specifies
    /// the index of the font to load from it. If the file represents a single
    /// font, pass 0 for `font_index`.
    fn from_path<P>(path: P, font_index: u32) -> Result<Self, FontLoadingError>
    where
        P: AsRef<Path>,
    {
        Loader::from_file(&mut File::open(path)?, font_index)
    }

    /// Returns the usual glyph ID for a Unicode character, or `None` if the
    /// font has no glyph for it.
    ///
    /// This is the simple character map lookup, with no shaping. That is
    /// exactly what ink probing wants: "what does character X look like on
    /// its own".
    fn glyph_for_char(&self, character: char) -> Option<u32>;

    /// Returns the distance from the pen position of the glyph with the
    /// given ID to the next, in pixels, when rendered at `point_size`.
    fn advance(&self, glyph_id: u32, point_size: f32) -> Result<Vector2F, GlyphMeasurementError>;

    /// Paints the glyph with the given ID onto `canvas` at `point_size`.
    ///
    /// `origin` is the pen position on the baseline, in canvas coordinates
    /// (y grows downward). The canvas is bilevel: a backend must write `0xff`
    /// for covered pixels and leave the rest untouched, thresholding its own
    /// antialiased coverage with [`Canvas::blit_coverage`] or equivalent.
    /// Parts of the glyph that fall outside the canvas are clipped away.
    fn rasterize_glyph(
        &self,
        canvas: &mut Canvas,
        glyph_id: u32,
        point_size: f32,
        origin: Vector2I,
    ) -> Result<(), GlyphMeasurementError>;
}
