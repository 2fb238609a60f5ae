// font-probe/src/report.rs
//
// Copyright © 2026 The font-probe Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Assembles per-size samples, failures, and usage bands into the printable
//! analysis report.

use std::fmt::{self, Display, Formatter};

use crate::classification::Spacing;
use crate::error::SamplingError;
use crate::recommendation::Recommendation;

/// The aggregate measurements and the recommendation for one ladder size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SizeSample {
    /// The requested size, in pixels.
    pub point_size: u32,
    /// The natural height across the surviving probe characters, in pixels.
    pub natural_height: u32,
    /// Advance width of the wide reference character, in pixels.
    pub wide_advance: f32,
    /// Advance width of the narrow reference character, in pixels.
    pub narrow_advance: f32,
    /// The spacing class at this size.
    pub spacing: Spacing,
    /// The recommended render target for this size.
    pub recommendation: Recommendation,
}

impl SizeSample {
    /// Returns true if and only if the font classified as monospaced at this
    /// size.
    #[inline]
    pub fn is_monospace(&self) -> bool {
        self.spacing.is_monospace()
    }
}

/// A ladder size that produced no sample, and why.
#[derive(Clone, Debug, PartialEq)]
pub struct SizeFailure {
    /// The requested size, in pixels.
    pub point_size: u32,
    /// What went wrong at this size.
    pub error: SamplingError,
}

/// A named inclusive range of sizes suited to one UI role.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct UsageBand {
    /// The role this band serves, as printed in the report.
    pub role: &'static str,
    /// The smallest size in the band, inclusive.
    pub min_size: u32,
    /// The largest size in the band, inclusive.
    pub max_size: u32,
}

impl UsageBand {
    /// Returns true if `size` falls inside the band.
    #[inline]
    pub fn contains(&self, size: u32) -> bool {
        self.min_size <= size && size <= self.max_size
    }
}

/// The fixed usage bands, from small to large. Neighboring bands overlap on
/// purpose: a size can suit more than one role.
pub const USAGE_BANDS: [UsageBand; 3] = [
    UsageBand {
        role: "UI labels (small)",
        min_size: 12,
        max_size: 18,
    },
    UsageBand {
        role: "body text (medium)",
        min_size: 16,
        max_size: 24,
    },
    UsageBand {
        role: "headers (large)",
        min_size: 24,
        max_size: 48,
    },
];

/// The complete result of one analysis run.
///
/// Samples and failures are each in ascending size order and together cover
/// the whole ladder. `Display` renders the operator report.
#[derive(Clone, Debug)]
pub struct AnalysisReport {
    /// One sample per successfully analyzed size.
    pub samples: Vec<SizeSample>,
    /// The sizes that produced no sample.
    pub failures: Vec<SizeFailure>,
}

impl AnalysisReport {
    /// Returns the successfully analyzed sizes that fall inside `band`, in
    /// ascending order. Failed sizes never appear, so every size returned
    /// here is backed by a real measurement.
    pub fn band_sizes(&self, band: &UsageBand) -> Vec<u32> {
        self.samples
            .iter()
            .map(|sample| sample.point_size)
            .filter(|&size| band.contains(size))
            .collect()
    }
}

impl Display for AnalysisReport {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        // Merge the two size-ordered lists back into one ladder-ordered
        // listing.
        let mut samples = self.samples.iter().peekable();
        let mut failures = self.failures.iter().peekable();
        loop {
            let take_sample = match (samples.peek(), failures.peek()) {
                (Some(sample), Some(failure)) => sample.point_size <= failure.point_size,
                (Some(_), None) => true,
                (None, Some(_)) => false,
                (None, None) => break,
            };
            if take_sample {
                if let Some(sample) = samples.next() {
                    writeln!(
                        f,
                        "Size {:2}px: natural_height={:2}px, advance={:5.1}px [{}] -> \
                         target={}px ({})",
                        sample.point_size,
                        sample.natural_height,
                        sample.wide_advance,
                        sample.spacing,
                        sample.recommendation.target,
                        sample.recommendation.fit.label()
                    )?;
                }
            } else if let Some(failure) = failures.next() {
                writeln!(f, "Size {}px: ERROR - {}", failure.point_size, failure.error)?;
            }
        }

        writeln!(f)?;
        writeln!(f, "RECOMMENDATIONS:")?;
        for band in &USAGE_BANDS {
            let sizes: Vec<String> = self
                .band_sizes(band)
                .into_iter()
                .map(|size| size.to_string())
                .collect();
            writeln!(f)?;
            writeln!(f, "For {}:", band.role)?;
            writeln!(f, "  Try sizes: {}", sizes.join(", "))?;
        }

        writeln!(f)?;
        write!(
            f,
            "Monospaced fonts suit UI, code, and tabular rendering; proportional \
             fonts suit prose."
        )
    }
}
