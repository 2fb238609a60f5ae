// font-probe/src/recommendation.rs
//
// Copyright © 2026 The font-probe Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Maps a requested size and a measured natural height to a render target.

/// The padding steps granted, in order, when a font's natural height
/// overflows the requested size.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PaddingTiers {
    /// Extra pixels granted when the overflow is small.
    pub slight: u32,
    /// Extra pixels granted when the overflow is moderate.
    pub comfortable: u32,
}

impl Default for PaddingTiers {
    #[inline]
    fn default() -> PaddingTiers {
        PaddingTiers {
            slight: 2,
            comfortable: 4,
        }
    }
}

/// How well a measured natural height fits a requested size.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Fit {
    /// The glyphs fit the requested box as is.
    Perfect,
    /// The glyphs overflow slightly; the target adds the slight padding
    /// step.
    SlightPadding,
    /// The glyphs overflow moderately; the target adds the comfortable
    /// padding step.
    Comfortable,
    /// The glyphs exceed every padding step; the target is their natural
    /// height, so nothing clips.
    Tight,
}

impl Fit {
    /// Returns the label used in report lines.
    pub fn label(self) -> &'static str {
        match self {
            Fit::Perfect => "fits perfectly",
            Fit::SlightPadding => "slight padding",
            Fit::Comfortable => "comfortable",
            Fit::Tight => "tight fit",
        }
    }
}

/// A recommended render height for one requested size.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Recommendation {
    /// The recommended render height, in pixels.
    pub target: u32,
    /// Why that height was chosen.
    pub fit: Fit,
}

/// Recommends a render height for `requested_size` given the measured
/// `natural_height`, trying each padding tier in order and falling back to
/// the natural height itself when every tier overflows.
///
/// The target never clips: it is always at least the natural height, and it
/// never shrinks below the requested size either.
pub fn recommend(
    requested_size: u32,
    natural_height: u32,
    tiers: &PaddingTiers,
) -> Recommendation {
    if natural_height <= requested_size {
        Recommendation {
            target: requested_size,
            fit: Fit::Perfect,
        }
    } else if natural_height <= requested_size.saturating_add(tiers.slight) {
        Recommendation {
            target: requested_size.saturating_add(tiers.slight),
            fit: Fit::SlightPadding,
        }
    } else if natural_height <= requested_size.saturating_add(tiers.comfortable) {
        Recommendation {
            target: requested_size.saturating_add(tiers.comfortable),
            fit: Fit::Comfortable,
        }
    } else {
        Recommendation {
            target: natural_height,
            fit: Fit::Tight,
        }
    }
}
