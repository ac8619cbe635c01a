// Copyright 2026 the Frieze Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Paint-state encoding for the Frieze renderer.
//!
//! This crate converts high-level paint state (a [`Brush`]) into the
//! alignment-padded word buffers consumed by shader programs, and provides
//! the [`ShaderModeSet`] tables that resolve an enumerated rendering mode
//! (blend mode, fill rule) to the shader that implements it.

// LINEBENDER LINT SET - lib.rs - v2
// See https://linebender.org/wiki/canonical-lints/
// These lints aren't included in Cargo.toml because they
// shouldn't apply to examples and tests
#![warn(unused_crate_dependencies)]
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

mod blend;
mod brush;
pub mod math;
mod packing;
mod resource;
mod shader_set;

pub use blend::{Blend, BlendEquation, BlendFactor, BlendMode, FillRule};
pub use brush::{Brush, GradientParams, ImageParams, RepeatWindow, DATA_ALIGNMENT};
pub use math::ScaleTranslate;
pub use packing::{
    gradient, image, pack_bits, ImageSegment, LinearGradientSegment, MatrixSegment, PenSegment,
    RadialGradientSegment, RepeatWindowSegment, TranslationSegment,
};
pub use resource::{AtlasImage, ColorStopTable, ImageFilter};
pub use shader_set::{BlendShaderSet, FillShaderSet, ShaderMode, ShaderModeSet};

use thiserror::Error;

/// Errors generated by `frieze_encoding`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The requested sampling filter needs more slack padding than the
    /// image carries in the atlas.
    #[error("filter {filter:?} requires slack {required} but image has {available}")]
    UnsuitableFilter {
        filter: ImageFilter,
        required: u32,
        available: u32,
    },
}
