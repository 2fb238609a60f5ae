// font-probe/src/lib.rs
//
// Copyright © 2026 The font-probe Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! `font-probe` measures how much room a font's glyphs really take up and
//! recommends a render height for each size on a ladder of pixel sizes.
//!
//! Fonts routinely paint outside their nominal box: a 16px face whose
//! descenders reach 18px clips on a 16px tall surface. For every size on the
//! ladder, this crate rasterizes a fixed probe alphabet through a pluggable
//! [`loader::Loader`] backend onto a bilevel canvas, measures the combined
//! ink extent, classifies the font as monospaced or proportional from two
//! reference advances, and picks a render target by granting stepped
//! padding allowances. The assembled [`report::AnalysisReport`] prints as an
//! operator-facing text report with per-size lines and usage-band
//! suggestions.
//!
//! ## Synopsis
//!
//! ```no_run
//! use font_probe::analyzer::{self, AnalysisOptions};
//!
//! let report = analyzer::analyze_path("DejaVuSans.ttf", &AnalysisOptions::new()).unwrap();
//! print!("{}", report);
//! ```

pub mod aggregation;
pub mod analyzer;
pub mod canvas;
pub mod classification;
pub mod error;
pub mod font;
pub mod ladder;
pub mod loader;
pub mod loaders;
pub mod probe;
pub mod recommendation;
pub mod report;
pub mod sampler;
