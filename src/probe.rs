// font-probe/src/probe.rs
//
// Copyright © 2026 The font-probe Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The set of characters whose ink extents are sampled.

use lazy_static::lazy_static;

/// The characters probed when no custom set is supplied.
///
/// Basic Latin letters, digits, common punctuation, and a descender-heavy
/// tail, so that the set always spans the tallest ascender and the deepest
/// descender of a Latin text face.
pub const DEFAULT_PROBE_CHARACTERS: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*()gjpqy";

lazy_static! {
    static ref DEFAULT_PROBE_SET: ProbeSet = ProbeSet::new(DEFAULT_PROBE_CHARACTERS.chars());
}

/// The set of characters whose ink extents are sampled at each ladder size.
///
/// A useful set contains at least one ascender-heavy character (any capital
/// works) and one descender-heavy character ('g', 'j', 'p', 'q', or 'y'), so
/// that the measured height spans both extremes.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProbeSet {
    characters: Vec<char>,
}

impl ProbeSet {
    /// Creates a probe set from the given characters, keeping the first
    /// occurrence of each.
    pub fn new<I>(characters: I) -> ProbeSet
    where
        I: IntoIterator<Item = char>,
    {
        let mut deduplicated: Vec<char> = vec![];
        for character in characters {
            if !deduplicated.contains(&character) {
                deduplicated.push(character)
            }
        }
        ProbeSet {
            characters: deduplicated,
        }
    }

    /// Returns the probe characters in first-seen order.
    #[inline]
    pub fn characters(&self) -> &[char] {
        &self.characters
    }
}

impl Default for ProbeSet {
    #[inline]
    fn default() -> ProbeSet {
        DEFAULT_PROBE_SET.clone()
    }
}
