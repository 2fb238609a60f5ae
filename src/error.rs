// font-probe/src/error.rs
//
// Copyright © 2026 The font-probe Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Various types of errors that `font-probe` can return.

use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::io;

/// Reasons why the rasterization backend might fail to load a font.
///
/// These are fatal to a run: without a loaded font there is nothing to probe.
#[derive(Debug)]
pub enum FontLoadingError {
    /// The backend rejected the font data, with its reason.
    Parse(&'static str),

    /// A disk or similar I/O error occurred while attempting to load the font.
    Io(io::Error),
}

impl Error for FontLoadingError {}

impl Display for FontLoadingError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match *self {
            FontLoadingError::Parse(reason) => write!(f, "font parse error: {}", reason),
            FontLoadingError::Io(ref error) => error.fmt(f),
        }
    }
}

impl From<io::Error> for FontLoadingError {
    fn from(error: io::Error) -> FontLoadingError {
        FontLoadingError::Io(error)
    }
}

/// Reasons why one probe character might fail to be measured at one size.
///
/// These are per-character: the sampler records the skip and moves on. They
/// become fatal to a size only by emptying its surviving probe set.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GlyphMeasurementError {
    /// The font has no glyph for the character.
    NoSuchGlyph,

    /// The glyph rasterized to nothing above the bilevel threshold, so it has
    /// no ink bounding box.
    NoInk,
}

impl Error for GlyphMeasurementError {}

impl Display for GlyphMeasurementError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match *self {
            GlyphMeasurementError::NoSuchGlyph => write!(f, "no such glyph"),
            GlyphMeasurementError::NoInk => write!(f, "glyph left no ink"),
        }
    }
}

/// Reasons why a whole ladder size might produce no sample.
///
/// These never abort a run; the failed size is carried in the report's
/// failure list instead of its body.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SamplingError {
    /// Every probe character failed to be measured at this size.
    NoSurvivingGlyphs,

    /// A reference character needed for spacing classification could not be
    /// measured at this size.
    Reference(char),
}

impl Error for SamplingError {}

impl Display for SamplingError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match *self {
            SamplingError::NoSurvivingGlyphs => {
                write!(f, "no probe characters could be measured")
            }
            SamplingError::Reference(character) => {
                write!(f, "reference character {:?} could not be measured", character)
            }
        }
    }
}
