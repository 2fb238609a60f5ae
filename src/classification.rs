// font-probe/src/classification.rs
//
// Copyright © 2026 The font-probe Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Decides whether a font is monospaced or proportional at a given size.

use std::fmt::{self, Display, Formatter};

/// The wide reference character used when none is supplied.
pub const DEFAULT_WIDE_REFERENCE: char = 'M';

/// The narrow reference character used when none is supplied.
pub const DEFAULT_NARROW_REFERENCE: char = 'i';

/// The advance difference below which a font counts as monospaced, in
/// pixels, when no custom epsilon is supplied.
///
/// Hinting and rounding can nudge an advance by a pixel either way, so exact
/// equality would misclassify real monospaced fonts at small sizes.
pub const DEFAULT_MONOSPACE_EPSILON: f32 = 2.0;

/// The spacing class of a font at one size.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Spacing {
    /// Every glyph advances the pen by the same amount.
    Monospaced,
    /// Advance widths vary per glyph.
    Proportional,
}

impl Spacing {
    /// Returns true if and only if this is the monospaced class.
    #[inline]
    pub fn is_monospace(self) -> bool {
        self == Spacing::Monospaced
    }

    /// Returns the short label used in report lines.
    #[inline]
    pub fn label(self) -> &'static str {
        match self {
            Spacing::Monospaced => "MONO",
            Spacing::Proportional => "PROP",
        }
    }
}

impl Display for Spacing {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classifies a font's spacing at one size from the advance widths of a
/// wide and a narrow reference glyph.
///
/// The verdict is monospaced if and only if the two advances differ by
/// strictly less than `epsilon` pixels. The verdict is per size: hinting can
/// legitimately flip it between sizes, so no font-wide verdict is derived.
#[inline]
pub fn classify(wide_advance: f32, narrow_advance: f32, epsilon: f32) -> Spacing {
    if (wide_advance - narrow_advance).abs() < epsilon {
        Spacing::Monospaced
    } else {
        Spacing::Proportional
    }
}
