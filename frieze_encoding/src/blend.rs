// Copyright 2026 the Frieze Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Blend state description and the enumerated modes that key the shader
//! tables.

use crate::shader_set::ShaderMode;

/// Blend equation applied to a color channel group.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[repr(u32)]
pub enum BlendEquation {
    #[default]
    Add = 0,
    Subtract = 1,
    ReverseSubtract = 2,
    Min = 3,
    Max = 4,
}

/// Blend factor applied to a source or destination channel group.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum BlendFactor {
    Zero = 0,
    One = 1,
    SrcColor = 2,
    OneMinusSrcColor = 3,
    SrcAlpha = 4,
    OneMinusSrcAlpha = 5,
    DstColor = 6,
    OneMinusDstColor = 7,
    DstAlpha = 8,
    OneMinusDstAlpha = 9,
}

/// Fixed-function blend state, separable between color and alpha.
///
/// This is the auxiliary value a [`crate::ShaderModeSet`] carries next
/// to each blend shader; [`packed`](Self::packed) reduces it to the
/// single word the GPU backend consumes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Blend {
    pub equation_rgb: BlendEquation,
    pub equation_alpha: BlendEquation,
    pub src_rgb: BlendFactor,
    pub dst_rgb: BlendFactor,
    pub src_alpha: BlendFactor,
    pub dst_alpha: BlendFactor,
}

impl Blend {
    /// Creates a blend state with shared color and alpha behavior.
    pub fn new(equation: BlendEquation, src: BlendFactor, dst: BlendFactor) -> Self {
        Self {
            equation_rgb: equation,
            equation_alpha: equation,
            src_rgb: src,
            dst_rgb: dst,
            src_alpha: src,
            dst_alpha: dst,
        }
    }

    /// Packs the six enumerants into disjoint 8-bit lanes.
    ///
    /// Lane order, low to high: equation rgb, equation alpha, src rgb,
    /// dst rgb, src alpha, dst alpha.
    pub const fn packed(self) -> u64 {
        (self.equation_rgb as u64)
            | (self.equation_alpha as u64) << 8
            | (self.src_rgb as u64) << 16
            | (self.dst_rgb as u64) << 24
            | (self.src_alpha as u64) << 32
            | (self.dst_alpha as u64) << 40
    }
}

impl Default for Blend {
    /// Premultiplied src-over.
    fn default() -> Self {
        Self::new(
            BlendEquation::Add,
            BlendFactor::One,
            BlendFactor::OneMinusSrcAlpha,
        )
    }
}

/// Porter-Duff composite modes, the blend shader table key.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum BlendMode {
    SrcOver = 0,
    Clear = 1,
    Src = 2,
    Dst = 3,
    DstOver = 4,
    SrcIn = 5,
    DstIn = 6,
    SrcOut = 7,
    DstOut = 8,
    SrcAtop = 9,
    DstAtop = 10,
    Xor = 11,
    Plus = 12,
}

impl ShaderMode for BlendMode {
    fn index(self) -> usize {
        self as usize
    }
}

/// Path fill rules, the fill shader table key.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum FillRule {
    OddEven = 0,
    ComplementOddEven = 1,
    NonZero = 2,
    ComplementNonZero = 3,
}

impl ShaderMode for FillRule {
    fn index(self) -> usize {
        self as usize
    }
}

#[cfg(test)]
mod tests {
    use super::{Blend, BlendEquation, BlendFactor, BlendMode, FillRule};
    use crate::shader_set::ShaderMode;

    #[test]
    fn packed_lanes_are_disjoint() {
        let blend = Blend {
            equation_rgb: BlendEquation::Max,
            equation_alpha: BlendEquation::Min,
            src_rgb: BlendFactor::DstAlpha,
            dst_rgb: BlendFactor::OneMinusDstAlpha,
            src_alpha: BlendFactor::SrcColor,
            dst_alpha: BlendFactor::OneMinusSrcColor,
        };
        let packed = blend.packed();
        assert_eq!(packed & 0xFF, 4);
        assert_eq!((packed >> 8) & 0xFF, 3);
        assert_eq!((packed >> 16) & 0xFF, 8);
        assert_eq!((packed >> 24) & 0xFF, 9);
        assert_eq!((packed >> 32) & 0xFF, 2);
        assert_eq!((packed >> 40) & 0xFF, 3);
    }

    #[test]
    fn default_is_premultiplied_src_over() {
        let packed = Blend::default().packed();
        assert_eq!(packed & 0xFF, BlendEquation::Add as u64);
        assert_eq!((packed >> 16) & 0xFF, BlendFactor::One as u64);
        assert_eq!((packed >> 24) & 0xFF, BlendFactor::OneMinusSrcAlpha as u64);
    }

    #[test]
    fn mode_indices_are_dense_from_zero() {
        assert_eq!(BlendMode::SrcOver.index(), 0);
        assert_eq!(BlendMode::Plus.index(), 12);
        assert_eq!(FillRule::OddEven.index(), 0);
        assert_eq!(FillRule::ComplementNonZero.index(), 3);
    }
}
