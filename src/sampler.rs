// font-probe/src/sampler.rs
//
// Copyright © 2026 The font-probe Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Drives the rasterization backend across one ladder size, collecting raw
//! ink boxes and reference advances.

use log::{debug, warn};
use pathfinder_geometry::rect::RectI;
use pathfinder_geometry::vector::Vector2I;

use crate::canvas::Canvas;
use crate::error::{GlyphMeasurementError, SamplingError};
use crate::ladder::SizeLadder;
use crate::loader::Loader;
use crate::probe::ProbeSet;

/// The raw measurements collected at one ladder size: one ink box per
/// surviving probe character, plus the advance widths of the two reference
/// characters.
#[derive(Clone, Debug)]
pub struct GlyphProbes {
    /// The probed size, in pixels.
    pub point_size: u32,
    /// Ink bounding boxes relative to the pen position, with y growing
    /// downward: `min_y()` is the top edge (negative above the baseline) and
    /// `max_y()` the bottom edge, exclusive.
    pub ink_boxes: Vec<RectI>,
    /// Advance width of the wide reference character, in pixels.
    pub wide_advance: f32,
    /// Advance width of the narrow reference character, in pixels.
    pub narrow_advance: f32,
    /// Probe characters that could not be measured at this size, with the
    /// reason each was skipped.
    pub skipped: Vec<(char, GlyphMeasurementError)>,
}

/// Returns the side length of the square probe canvas for a ladder: four
/// times the largest entry, so even a glyph overshooting its nominal size
/// lands fully inside. Zero for an empty ladder.
#[inline]
pub fn canvas_side(ladder: &SizeLadder) -> i32 {
    ladder.max_size().unwrap_or(0) as i32 * 4
}

/// Probes every character of `probe_set` at one size.
///
/// Characters that cannot be measured are skipped and recorded, never fatal.
/// The size as a whole fails only when a reference character cannot be
/// measured, since without both advances there is no spacing verdict.
pub fn probe_size<L>(
    loader: &L,
    point_size: u32,
    probe_set: &ProbeSet,
    wide_reference: char,
    narrow_reference: char,
    canvas_side: i32,
) -> Result<GlyphProbes, SamplingError>
where
    L: Loader,
{
    let wide_advance = reference_advance(loader, wide_reference, point_size)?;
    let narrow_advance = reference_advance(loader, narrow_reference, point_size)?;

    // Pen position: a quarter in from the left leaves room for advances, and
    // halfway down leaves equal room for ascenders and descenders.
    let origin = Vector2I::new(canvas_side / 4, canvas_side / 2);
    let mut ink_boxes = Vec::with_capacity(probe_set.characters().len());
    let mut skipped = vec![];

    for &character in probe_set.characters() {
        match measure_character(loader, character, point_size, canvas_side, origin) {
            Ok(ink_box) => ink_boxes.push(ink_box),
            Err(error) => {
                warn!("skipping {:?} at {}px: {}", character, point_size, error);
                skipped.push((character, error))
            }
        }
    }

    debug!(
        "probed {}px: {} ink boxes, {} skipped, advances {:.1}/{:.1}",
        point_size,
        ink_boxes.len(),
        skipped.len(),
        wide_advance,
        narrow_advance
    );

    Ok(GlyphProbes {
        point_size,
        ink_boxes,
        wide_advance,
        narrow_advance,
        skipped,
    })
}

fn measure_character<L>(
    loader: &L,
    character: char,
    point_size: u32,
    canvas_side: i32,
    origin: Vector2I,
) -> Result<RectI, GlyphMeasurementError>
where
    L: Loader,
{
    let glyph_id = loader
        .glyph_for_char(character)
        .ok_or(GlyphMeasurementError::NoSuchGlyph)?;
    let mut canvas = Canvas::new(Vector2I::splat(canvas_side));
    loader.rasterize_glyph(&mut canvas, glyph_id, point_size as f32, origin)?;
    let bounds = canvas.ink_bounds().ok_or(GlyphMeasurementError::NoInk)?;
    Ok(RectI::new(bounds.origin() - origin, bounds.size()))
}

fn reference_advance<L>(
    loader: &L,
    character: char,
    point_size: u32,
) -> Result<f32, SamplingError>
where
    L: Loader,
{
    let glyph_id = match loader.glyph_for_char(character) {
        Some(glyph_id) => glyph_id,
        None => return Err(SamplingError::Reference(character)),
    };
    match loader.advance(glyph_id, point_size as f32) {
        Ok(advance) => Ok(advance.x()),
        Err(_) => Err(SamplingError::Reference(character)),
    }
}
