// font-probe/tests/recommendation.rs
//
// Copyright © 2026 The font-probe Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

// Focused tests for the pure decision helpers: padding tiers, spacing
// classification, height aggregation, and usage bands.

use font_probe::aggregation;
use font_probe::classification::{self, Spacing};
use font_probe::ladder::DEFAULT_SIZES;
use font_probe::recommendation::{self, Fit, PaddingTiers, Recommendation};
use font_probe::report::{AnalysisReport, SizeSample, USAGE_BANDS};
use pathfinder_geometry::rect::RectI;
use pathfinder_geometry::vector::Vector2I;

fn recommend(requested_size: u32, natural_height: u32) -> Recommendation {
    recommendation::recommend(requested_size, natural_height, &PaddingTiers::default())
}

fn ink_box(left: i32, top: i32, right: i32, bottom: i32) -> RectI {
    RectI::new(
        Vector2I::new(left, top),
        Vector2I::new(right - left, bottom - top),
    )
}

fn sample_at(point_size: u32) -> SizeSample {
    SizeSample {
        point_size,
        natural_height: point_size,
        wide_advance: 10.0,
        narrow_advance: 5.0,
        spacing: Spacing::Proportional,
        recommendation: recommend(point_size, point_size),
    }
}

#[test]
pub fn perfect_fit_keeps_the_requested_size() {
    for natural_height in 0..=16 {
        let recommendation = recommend(16, natural_height);
        assert_eq!(recommendation.target, 16);
        assert_eq!(recommendation.fit, Fit::Perfect);
    }
}

#[test]
pub fn slight_overflow_gets_the_slight_tier() {
    for natural_height in 17..=18 {
        let recommendation = recommend(16, natural_height);
        assert_eq!(recommendation.target, 18);
        assert_eq!(recommendation.fit, Fit::SlightPadding);
    }
}

#[test]
pub fn moderate_overflow_gets_the_comfortable_tier() {
    for natural_height in 19..=20 {
        let recommendation = recommend(16, natural_height);
        assert_eq!(recommendation.target, 20);
        assert_eq!(recommendation.fit, Fit::Comfortable);
    }
}

#[test]
pub fn heavy_overflow_falls_back_to_the_natural_height() {
    for natural_height in 21..=32 {
        let recommendation = recommend(16, natural_height);
        assert_eq!(recommendation.target, natural_height);
        assert_eq!(recommendation.fit, Fit::Tight);
    }
}

#[test]
pub fn recommended_targets_never_clip_and_never_shrink() {
    let tiers = PaddingTiers::default();
    for requested_size in 1..64 {
        for natural_height in 0..96 {
            let recommendation =
                recommendation::recommend(requested_size, natural_height, &tiers);
            assert!(recommendation.target >= natural_height);
            assert!(recommendation.target >= requested_size);
        }
    }
}

#[test]
pub fn custom_tiers_shift_the_boundaries() {
    let tiers = PaddingTiers {
        slight: 1,
        comfortable: 3,
    };
    assert_eq!(
        recommendation::recommend(10, 11, &tiers),
        Recommendation {
            target: 11,
            fit: Fit::SlightPadding,
        }
    );
    assert_eq!(
        recommendation::recommend(10, 13, &tiers),
        Recommendation {
            target: 13,
            fit: Fit::Comfortable,
        }
    );
    assert_eq!(
        recommendation::recommend(10, 15, &tiers),
        Recommendation {
            target: 15,
            fit: Fit::Tight,
        }
    );
}

#[test]
pub fn fit_labels_match_report_wording() {
    assert_eq!(Fit::Perfect.label(), "fits perfectly");
    assert_eq!(Fit::SlightPadding.label(), "slight padding");
    assert_eq!(Fit::Comfortable.label(), "comfortable");
    assert_eq!(Fit::Tight.label(), "tight fit");
}

#[test]
pub fn equal_advances_classify_as_monospaced() {
    assert_eq!(classification::classify(10.0, 10.0, 2.0), Spacing::Monospaced);
}

#[test]
pub fn near_advances_classify_as_monospaced_either_way_around() {
    assert_eq!(classification::classify(10.0, 11.0, 2.0), Spacing::Monospaced);
    assert_eq!(classification::classify(11.0, 10.0, 2.0), Spacing::Monospaced);
}

#[test]
pub fn distant_advances_classify_as_proportional() {
    assert_eq!(
        classification::classify(10.0, 15.0, 2.0),
        Spacing::Proportional
    );
}

#[test]
pub fn epsilon_boundary_is_strict() {
    // A difference of exactly epsilon is not "less than epsilon".
    assert_eq!(
        classification::classify(10.0, 12.0, 2.0),
        Spacing::Proportional
    );
    // A zero epsilon therefore classifies nothing as monospaced.
    assert_eq!(
        classification::classify(10.0, 10.0, 0.0),
        Spacing::Proportional
    );
}

#[test]
pub fn spacing_labels_match_report_wording() {
    assert_eq!(Spacing::Monospaced.label(), "MONO");
    assert_eq!(Spacing::Proportional.label(), "PROP");
    assert_eq!(Spacing::Monospaced.to_string(), "MONO");
}

#[test]
pub fn natural_height_spans_ascender_and_descender() {
    let boxes = [ink_box(0, -14, 9, 0), ink_box(0, -8, 7, 2)];
    assert_eq!(aggregation::natural_height(&boxes), Some(16));
}

#[test]
pub fn natural_height_ignores_box_order() {
    let boxes = [
        ink_box(0, -14, 9, 0),
        ink_box(0, -8, 7, 2),
        ink_box(1, -11, 8, 1),
    ];
    let orders: [[usize; 3]; 6] = [
        [0, 1, 2],
        [0, 2, 1],
        [1, 0, 2],
        [1, 2, 0],
        [2, 0, 1],
        [2, 1, 0],
    ];
    for order in &orders {
        let permuted: Vec<RectI> = order.iter().map(|&index| boxes[index]).collect();
        assert_eq!(aggregation::natural_height(&permuted), Some(16));
    }
}

#[test]
pub fn natural_height_of_no_boxes_is_none() {
    assert_eq!(aggregation::natural_height(&[]), None);
}

#[test]
pub fn natural_height_of_one_box_is_its_height() {
    assert_eq!(aggregation::natural_height(&[ink_box(2, -7, 5, 1)]), Some(8));
}

#[test]
pub fn default_ladder_fills_the_usage_bands() {
    let report = AnalysisReport {
        samples: DEFAULT_SIZES.iter().map(|&size| sample_at(size)).collect(),
        failures: vec![],
    };

    assert_eq!(report.band_sizes(&USAGE_BANDS[0]), vec![12, 14, 16, 18]);
    assert_eq!(report.band_sizes(&USAGE_BANDS[1]), vec![16, 18, 20, 22, 24]);
    assert_eq!(
        report.band_sizes(&USAGE_BANDS[2]),
        vec![24, 28, 32, 36, 40, 48]
    );
}

#[test]
pub fn neighboring_usage_bands_overlap() {
    assert!(USAGE_BANDS[0].contains(16) && USAGE_BANDS[1].contains(16));
    assert!(USAGE_BANDS[1].contains(24) && USAGE_BANDS[2].contains(24));
    assert!(!USAGE_BANDS[0].contains(11) && !USAGE_BANDS[2].contains(49));
}
