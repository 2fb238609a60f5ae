// font-probe/src/ladder.rs
//
// Copyright © 2026 The font-probe Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The ordered set of pixel sizes a font is probed at.

/// The sizes probed when no custom ladder is supplied, in pixels.
///
/// Dense at small text sizes, where a pixel of slack changes legibility, and
/// sparser toward header sizes.
pub const DEFAULT_SIZES: [u32; 14] = [8, 10, 12, 14, 16, 18, 20, 22, 24, 28, 32, 36, 40, 48];

/// The ordered set of pixel sizes a font is probed at.
///
/// Sizes are kept sorted, deduplicated, and strictly positive, whatever order
/// they were supplied in.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SizeLadder {
    sizes: Vec<u32>,
}

impl SizeLadder {
    /// Creates a ladder from the given sizes, discarding zeroes and
    /// duplicates and sorting the rest ascending.
    pub fn new(mut sizes: Vec<u32>) -> SizeLadder {
        sizes.retain(|&size| size > 0);
        sizes.sort_unstable();
        sizes.dedup();
        SizeLadder { sizes }
    }

    /// Returns the sizes in ascending order.
    #[inline]
    pub fn sizes(&self) -> &[u32] {
        &self.sizes
    }

    /// Returns the largest size, or `None` for an empty ladder.
    #[inline]
    pub fn max_size(&self) -> Option<u32> {
        self.sizes.last().copied()
    }
}

impl Default for SizeLadder {
    #[inline]
    fn default() -> SizeLadder {
        SizeLadder {
            sizes: DEFAULT_SIZES.to_vec(),
        }
    }
}
