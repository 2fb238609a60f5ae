// font-probe/src/loaders/fontdue.rs
//
// Copyright © 2026 The font-probe Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A backend that uses the portable `fontdue` rasterizer to load fonts and
//! paint glyphs.

use fontdue::FontSettings;
use pathfinder_geometry::vector::{Vector2F, Vector2I};
use std::fmt::{self, Debug, Formatter};
use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use crate::canvas::Canvas;
use crate::error::{FontLoadingError, GlyphMeasurementError};
use crate::loader::Loader;

/// A font loaded through the `fontdue` rasterizer.
///
/// Cloning is cheap; clones share the parsed font.
#[derive(Clone)]
pub struct Font {
    font: Arc<fontdue::Font>,
}

impl Font {
    /// Loads a font from raw font data (the contents of a `.ttf`/`.otf`
    /// file).
    ///
    /// If the data represents a collection (`.ttc`/`.otc`), `font_index`
    /// specifies the index of the font to load from it. If the data
    /// represents a single font, pass 0 for `font_index`.
    pub fn from_bytes(font_data: Arc<Vec<u8>>, font_index: u32) -> Result<Font, FontLoadingError> {
        let settings = FontSettings {
            collection_index: font_index,
            ..FontSettings::default()
        };
        let font =
            fontdue::Font::from_bytes(&font_data[..], settings).map_err(FontLoadingError::Parse)?;
        Ok(Font {
            font: Arc::new(font),
        })
    }

    /// Loads a font from a `.ttf`/`.otf` file.
    #[inline]
    pub fn from_file(file: &mut File, font_index: u32) -> Result<Font, FontLoadingError> {
        <Font as Loader>::from_file(file, font_index)
    }

    /// Loads a font from the path to a `.ttf`/`.otf` file.
    #[inline]
    pub fn from_path<P>(path: P, font_index: u32) -> Result<Font, FontLoadingError>
    where
        P: AsRef<Path>,
    {
        <Font as Loader>::from_path(path, font_index)
    }

    /// Returns the usual glyph ID for a Unicode character, or `None` if the
    /// font has no glyph for it.
    pub fn glyph_for_char(&self, character: char) -> Option<u32> {
        // fontdue maps unknown characters to glyph 0, the missing glyph.
        match self.font.lookup_glyph_index(character) {
            0 => None,
            glyph_index => Some(u32::from(glyph_index)),
        }
    }

    /// Returns the distance from the pen position of the glyph with the
    /// given ID to the next, in pixels, when rendered at `point_size`.
    pub fn advance(
        &self,
        glyph_id: u32,
        point_size: f32,
    ) -> Result<Vector2F, GlyphMeasurementError> {
        let glyph_index = self.glyph_index(glyph_id)?;
        let metrics = self.font.metrics_indexed(glyph_index, point_size);
        Ok(Vector2F::new(metrics.advance_width, metrics.advance_height))
    }

    /// Paints the glyph with the given ID onto `canvas` at `point_size`,
    /// with the pen at `origin` in canvas coordinates.
    pub fn rasterize_glyph(
        &self,
        canvas: &mut Canvas,
        glyph_id: u32,
        point_size: f32,
        origin: Vector2I,
    ) -> Result<(), GlyphMeasurementError> {
        let glyph_index = self.glyph_index(glyph_id)?;
        let (metrics, coverage) = self.font.rasterize_indexed(glyph_index, point_size);
        if metrics.width == 0 || metrics.height == 0 {
            // Whitespace and other empty glyphs paint nothing.
            return Ok(());
        }

        // fontdue places the bitmap relative to the baseline with y growing
        // upward; the canvas's y grows downward.
        let coverage_size = Vector2I::new(metrics.width as i32, metrics.height as i32);
        let coverage_origin = Vector2I::new(
            origin.x() + metrics.xmin,
            origin.y() - metrics.ymin - metrics.height as i32,
        );
        canvas.blit_coverage(&coverage, coverage_size, coverage_origin);
        Ok(())
    }

    fn glyph_index(&self, glyph_id: u32) -> Result<u16, GlyphMeasurementError> {
        // Glyph 0 is the missing glyph; `glyph_for_char` never hands it out.
        if glyph_id == 0 || glyph_id >= u32::from(self.font.glyph_count()) {
            return Err(GlyphMeasurementError::NoSuchGlyph);
        }
        Ok(glyph_id as u16)
    }
}

impl Loader for Font {
    #[inline]
    fn from_bytes(font_data: Arc<Vec<u8>>, font_index: u32) -> Result<Font, FontLoadingError> {
        Font::from_bytes(font_data, font_index)
    }

    #[inline]
    fn glyph_for_char(&self, character: char) -> Option<u32> {
        self.glyph_for_char(character)
    }

    #[inline]
    fn advance(&self, glyph_id: u32, point_size: f32) -> Result<Vector2F, GlyphMeasurementError> {
        self.advance(glyph_id, point_size)
    }

    #[inline]
    fn rasterize_glyph(
        &self,
        canvas: &mut Canvas,
        glyph_id: u32,
        point_size: f32,
        origin: Vector2I,
    ) -> Result<(), GlyphMeasurementError> {
        self.rasterize_glyph(canvas, glyph_id, point_size, origin)
    }
}

impl Debug for Font {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        fmt.debug_struct("Font")
            .field("glyph_count", &self.font.glyph_count())
            .finish()
    }
}
