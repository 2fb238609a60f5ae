// font-probe/src/aggregation.rs
//
// Copyright © 2026 The font-probe Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Reduces per-character ink boxes to a single natural height.

use pathfinder_geometry::rect::RectI;

/// Returns the natural height spanned by a set of pen-relative ink boxes:
/// the distance from the topmost ink row of any box to the bottommost ink
/// row of any box, in pixels.
///
/// Returns `None` when no boxes survived sampling. Two min/max folds, so the
/// order of the boxes never affects the result.
pub fn natural_height(ink_boxes: &[RectI]) -> Option<u32> {
    let min_top = ink_boxes.iter().map(|ink_box| ink_box.min_y()).min()?;
    let max_bottom = ink_boxes.iter().map(|ink_box| ink_box.max_y()).max()?;
    // Non-negative: each box's max_y is at least its min_y, so the global
    // max is at least the global min.
    Some((max_bottom - min_top) as u32)
}
