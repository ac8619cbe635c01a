// Copyright 2026 the Frieze Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wire layout of packed brush segments.
//!
//! Field order, bit offsets, and bit widths here are a contract with the
//! shader source that unpacks them; a change on either side is a format
//! version bump.

use bytemuck::{Pod, Zeroable};
use static_assertions::const_assert_eq;

/// Shifts `value`, masked to `num_bits`, into position `bit0`.
#[inline]
pub const fn pack_bits(bit0: u32, num_bits: u32, value: u32) -> u32 {
    let mask = if num_bits >= 32 {
        u32::MAX
    } else {
        (1 << num_bits) - 1
    };
    (value & mask) << bit0
}

/// Bit layout of the image segment's packed words.
pub mod image {
    /// Atlas xyz word: x-coordinate of the master index tile.
    pub const ATLAS_X_BIT0: u32 = 0;
    pub const ATLAS_X_NUM_BITS: u32 = 12;
    /// Atlas xyz word: y-coordinate of the master index tile.
    pub const ATLAS_Y_BIT0: u32 = 12;
    pub const ATLAS_Y_NUM_BITS: u32 = 12;
    /// Atlas xyz word: layer of the master index tile.
    pub const ATLAS_Z_BIT0: u32 = 24;
    pub const ATLAS_Z_NUM_BITS: u32 = 8;

    /// Size and start words: x-extent / x-offset.
    pub const SIZE_X_BIT0: u32 = 0;
    pub const SIZE_X_NUM_BITS: u32 = 16;
    /// Size and start words: y-extent / y-offset.
    pub const SIZE_Y_BIT0: u32 = 16;
    pub const SIZE_Y_NUM_BITS: u32 = 16;

    /// Misc word: number of index-tile indirections.
    pub const INDEX_LOOKUPS_BIT0: u32 = 0;
    pub const INDEX_LOOKUPS_NUM_BITS: u32 = 8;
    /// Misc word: slack padding in texels.
    pub const SLACK_BIT0: u32 = 8;
    pub const SLACK_NUM_BITS: u32 = 8;
    /// Misc word: sampling filter enumerant.
    pub const FILTER_BIT0: u32 = 16;
    pub const FILTER_NUM_BITS: u32 = 2;
}

/// Bit layout of the gradient segment's packed words.
pub mod gradient {
    /// Stop-table word: x texel coordinate.
    pub const STOP_X_BIT0: u32 = 0;
    pub const STOP_X_NUM_BITS: u32 = 16;
    /// Stop-table word: y texel coordinate.
    pub const STOP_Y_BIT0: u32 = 16;
    pub const STOP_Y_NUM_BITS: u32 = 16;
}

/// Pen segment: straight RGBA, always the first segment of a brush.
#[derive(Clone, Copy, Debug, Default, Zeroable, Pod)]
#[repr(C)]
pub struct PenSegment {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl PenSegment {
    /// Unrounded size in words.
    pub const WORDS: u32 = 4;
}

/// Image segment: atlas residency plus sampling parameters.
#[derive(Clone, Copy, Debug, Default, Zeroable, Pod)]
#[repr(C)]
pub struct ImageSegment {
    /// Master index tile location, packed per [`image`].
    pub atlas_xyz: u32,
    /// Sub-image extent, packed per [`image`].
    pub size_xy: u32,
    /// Sub-image offset, packed per [`image`].
    pub start_xy: u32,
    /// Index-lookup count, slack, and filter, packed per [`image`].
    pub misc: u32,
}

impl ImageSegment {
    pub const WORDS: u32 = 4;
}

/// Linear gradient segment: stop-table location plus endpoints.
#[derive(Clone, Copy, Debug, Default, Zeroable, Pod)]
#[repr(C)]
pub struct LinearGradientSegment {
    /// Stop-table texel location, packed per [`gradient`].
    pub stop_xy: u32,
    /// Stop-table length in texels.
    pub stop_length: u32,
    /// Start point.
    pub p0: [f32; 2],
    /// End point.
    pub p1: [f32; 2],
}

impl LinearGradientSegment {
    pub const WORDS: u32 = 6;
}

/// Radial gradient segment: the linear layout plus start/end radii.
#[derive(Clone, Copy, Debug, Default, Zeroable, Pod)]
#[repr(C)]
pub struct RadialGradientSegment {
    pub stop_xy: u32,
    pub stop_length: u32,
    pub p0: [f32; 2],
    pub p1: [f32; 2],
    /// Start radius.
    pub r0: f32,
    /// End radius.
    pub r1: f32,
}

impl RadialGradientSegment {
    pub const WORDS: u32 = 8;
}

/// Repeat window segment.
#[derive(Clone, Copy, Debug, Default, Zeroable, Pod)]
#[repr(C)]
pub struct RepeatWindowSegment {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl RepeatWindowSegment {
    pub const WORDS: u32 = 4;
}

/// Brush transformation matrix segment, row major.
#[derive(Clone, Copy, Debug, Default, Zeroable, Pod)]
#[repr(C)]
pub struct MatrixSegment {
    pub m00: f32,
    pub m01: f32,
    pub m10: f32,
    pub m11: f32,
}

impl MatrixSegment {
    pub const WORDS: u32 = 4;
}

/// Brush transformation translation segment.
#[derive(Clone, Copy, Debug, Default, Zeroable, Pod)]
#[repr(C)]
pub struct TranslationSegment {
    pub x: f32,
    pub y: f32,
}

impl TranslationSegment {
    pub const WORDS: u32 = 2;
}

const_assert_eq!(std::mem::size_of::<PenSegment>(), 4 * PenSegment::WORDS as usize);
const_assert_eq!(std::mem::size_of::<ImageSegment>(), 4 * ImageSegment::WORDS as usize);
const_assert_eq!(
    std::mem::size_of::<LinearGradientSegment>(),
    4 * LinearGradientSegment::WORDS as usize
);
const_assert_eq!(
    std::mem::size_of::<RadialGradientSegment>(),
    4 * RadialGradientSegment::WORDS as usize
);
const_assert_eq!(
    std::mem::size_of::<RepeatWindowSegment>(),
    4 * RepeatWindowSegment::WORDS as usize
);
const_assert_eq!(std::mem::size_of::<MatrixSegment>(), 4 * MatrixSegment::WORDS as usize);
const_assert_eq!(
    std::mem::size_of::<TranslationSegment>(),
    4 * TranslationSegment::WORDS as usize
);
