// font-probe/src/analyzer.rs
//
// Copyright © 2026 The font-probe Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The analysis driver: walks a font across the size ladder and assembles
//! the report.

use log::warn;
use std::path::Path;

use crate::aggregation;
use crate::classification::{
    self, DEFAULT_MONOSPACE_EPSILON, DEFAULT_NARROW_REFERENCE, DEFAULT_WIDE_REFERENCE,
};
use crate::error::{FontLoadingError, SamplingError};
use crate::font::Font;
use crate::ladder::SizeLadder;
use crate::loader::Loader;
use crate::probe::ProbeSet;
use crate::recommendation::{self, PaddingTiers};
use crate::report::{AnalysisReport, SizeFailure, SizeSample};
use crate::sampler;

/// Everything an analysis run can be tuned with.
///
/// This object supports a method chaining style for idiomatic
/// initialization; e.g.:
///
/// ```
/// # use font_probe::analyzer::AnalysisOptions;
/// println!("{:?}", AnalysisOptions::new().monospace_epsilon(1.0));
/// ```
#[derive(Clone, Debug)]
pub struct AnalysisOptions {
    /// The sizes to probe.
    pub ladder: SizeLadder,
    /// The characters to probe at each size.
    pub probe_set: ProbeSet,
    /// The wide reference character for spacing classification.
    pub wide_reference: char,
    /// The narrow reference character for spacing classification.
    pub narrow_reference: char,
    /// Reference advances closer than this classify as monospaced, in
    /// pixels.
    pub monospace_epsilon: f32,
    /// The padding steps granted to overflowing natural heights.
    pub padding: PaddingTiers,
}

impl Default for AnalysisOptions {
    fn default() -> AnalysisOptions {
        AnalysisOptions {
            ladder: SizeLadder::default(),
            probe_set: ProbeSet::default(),
            wide_reference: DEFAULT_WIDE_REFERENCE,
            narrow_reference: DEFAULT_NARROW_REFERENCE,
            monospace_epsilon: DEFAULT_MONOSPACE_EPSILON,
            padding: PaddingTiers::default(),
        }
    }
}

impl AnalysisOptions {
    /// Initializes an option set to its default values.
    #[inline]
    pub fn new() -> AnalysisOptions {
        AnalysisOptions::default()
    }

    /// Sets the size ladder.
    #[inline]
    pub fn ladder(&mut self, ladder: SizeLadder) -> &mut AnalysisOptions {
        self.ladder = ladder;
        self
    }

    /// Sets the probe character set.
    #[inline]
    pub fn probe_set(&mut self, probe_set: ProbeSet) -> &mut AnalysisOptions {
        self.probe_set = probe_set;
        self
    }

    /// Sets the wide reference character.
    #[inline]
    pub fn wide_reference(&mut self, wide_reference: char) -> &mut AnalysisOptions {
        self.wide_reference = wide_reference;
        self
    }

    /// Sets the narrow reference character.
    #[inline]
    pub fn narrow_reference(&mut self, narrow_reference: char) -> &mut AnalysisOptions {
        self.narrow_reference = narrow_reference;
        self
    }

    /// Sets the monospace classification epsilon, in pixels.
    #[inline]
    pub fn monospace_epsilon(&mut self, monospace_epsilon: f32) -> &mut AnalysisOptions {
        self.monospace_epsilon = monospace_epsilon;
        self
    }

    /// Sets the padding tiers.
    #[inline]
    pub fn padding(&mut self, padding: PaddingTiers) -> &mut AnalysisOptions {
        self.padding = padding;
        self
    }
}

/// Probes `loader` across the option set's ladder and assembles the report.
///
/// Failures are per size and never abort the walk: every ladder size ends up
/// either in the report's samples or in its failures.
pub fn analyze<L>(loader: &L, options: &AnalysisOptions) -> AnalysisReport
where
    L: Loader,
{
    let canvas_side = sampler::canvas_side(&options.ladder);
    let mut samples = vec![];
    let mut failures = vec![];

    for &point_size in options.ladder.sizes() {
        let probes = match sampler::probe_size(
            loader,
            point_size,
            &options.probe_set,
            options.wide_reference,
            options.narrow_reference,
            canvas_side,
        ) {
            Ok(probes) => probes,
            Err(error) => {
                warn!("size {}px failed: {}", point_size, error);
                failures.push(SizeFailure { point_size, error });
                continue;
            }
        };

        let natural_height = match aggregation::natural_height(&probes.ink_boxes) {
            Some(natural_height) => natural_height,
            None => {
                let error = SamplingError::NoSurvivingGlyphs;
                warn!("size {}px failed: {}", point_size, error);
                failures.push(SizeFailure { point_size, error });
                continue;
            }
        };

        let spacing = classification::classify(
            probes.wide_advance,
            probes.narrow_advance,
            options.monospace_epsilon,
        );
        let recommendation =
            recommendation::recommend(point_size, natural_height, &options.padding);

        samples.push(SizeSample {
            point_size,
            natural_height,
            wide_advance: probes.wide_advance,
            narrow_advance: probes.narrow_advance,
            spacing,
            recommendation,
        })
    }

    AnalysisReport { samples, failures }
}

/// Loads the font at `path` with the default backend and analyzes it.
///
/// Fails only when the font itself cannot be loaded; per-size failures are
/// carried inside the report.
pub fn analyze_path<P>(
    path: P,
    options: &AnalysisOptions,
) -> Result<AnalysisReport, FontLoadingError>
where
    P: AsRef<Path>,
{
    let font = Font::from_path(path, 0)?;
    Ok(analyze(&font, options))
}
