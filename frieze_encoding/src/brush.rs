// Copyright 2026 the Frieze Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Brush state and its packed wire encoding.

use std::sync::Arc;

use peniko::kurbo;
use peniko::Color;

use crate::math::point_to_f32;
use crate::packing::{
    gradient as gradient_bits, image as image_bits, pack_bits, ImageSegment,
    LinearGradientSegment, MatrixSegment, PenSegment, RadialGradientSegment, RepeatWindowSegment,
    TranslationSegment,
};
use crate::resource::{AtlasImage, ColorStopTable, ImageFilter};
use crate::Error;

/// Suggested segment alignment, in words: one vec4 of u32s.
///
/// The authoritative value comes from the GPU backend; this is the
/// granularity the reference shaders assume.
pub const DATA_ALIGNMENT: u32 = 4;

/// Image feature of a brush.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageParams {
    pub image: Arc<AtlasImage>,
    /// Offset of the sampled sub-image, in texels.
    pub start: [u32; 2],
    /// Extent of the sampled sub-image, in texels.
    pub size: [u32; 2],
    pub filter: ImageFilter,
}

/// Gradient feature of a brush.
#[derive(Clone, Debug, PartialEq)]
pub struct GradientParams {
    pub stops: Arc<ColorStopTable>,
    /// Start point.
    pub p0: [f32; 2],
    /// End point.
    pub p1: [f32; 2],
    /// Start and end radius; present only for radial gradients.
    pub radii: Option<[f32; 2]>,
    /// Whether the gradient repeats past the unit interpolation range.
    pub repeat: bool,
}

/// Repeat window feature of a brush.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RepeatWindow {
    pub position: [f32; 2],
    pub size: [f32; 2],
}

/// How a rendered primitive is colored.
///
/// A brush always carries a pen color; every other feature is optional
/// and contributes one bit to the derived feature mask returned by
/// [`shader`](Self::shader). Setters return `&mut Self` so brushes can
/// be built fluently:
///
/// ```
/// # use frieze_encoding::Brush;
/// let mut brush = Brush::new();
/// brush.pen(1.0, 0.5, 0.0, 1.0).transformation_translation(peniko::kurbo::Point::new(8.0, 8.0));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Brush {
    pen: [f32; 4],
    image: Option<ImageParams>,
    gradient: Option<GradientParams>,
    repeat_window: Option<RepeatWindow>,
    matrix: Option<[f32; 4]>,
    translation: Option<[f32; 2]>,
}

impl Brush {
    /// Feature mask bit: an image is applied.
    pub const IMAGE_MASK: u32 = 1 << 0;
    /// Feature mask bit: a gradient is applied.
    pub const GRADIENT_MASK: u32 = 1 << 1;
    /// Feature mask bit: the gradient is radial. Only ever set together
    /// with [`Self::GRADIENT_MASK`].
    pub const RADIAL_GRADIENT_MASK: u32 = 1 << 2;
    /// Feature mask bit: the gradient repeats. Only ever set together
    /// with [`Self::GRADIENT_MASK`].
    pub const GRADIENT_REPEAT_MASK: u32 = 1 << 3;
    /// Feature mask bit: a repeat window is applied.
    pub const REPEAT_WINDOW_MASK: u32 = 1 << 4;
    /// Feature mask bit: a brush translation is applied.
    pub const TRANSLATION_MASK: u32 = 1 << 5;
    /// Feature mask bit: a brush transformation matrix is applied.
    pub const MATRIX_MASK: u32 = 1 << 6;

    /// Creates a brush with an opaque white pen and no other features.
    pub fn new() -> Self {
        Self {
            pen: [1.0; 4],
            image: None,
            gradient: None,
            repeat_window: None,
            matrix: None,
            translation: None,
        }
    }

    /// Sets the pen color.
    pub fn pen(&mut self, r: f32, g: f32, b: f32, a: f32) -> &mut Self {
        self.pen = [r, g, b, a];
        self
    }

    /// Sets the pen from an 8-bit color.
    pub fn pen_color(&mut self, color: Color) -> &mut Self {
        self.pen(
            f32::from(color.r) / 255.0,
            f32::from(color.g) / 255.0,
            f32::from(color.b) / 255.0,
            f32::from(color.a) / 255.0,
        )
    }

    /// Sets the image feature to a sub-region of `image`.
    ///
    /// An unsuitable filter is packed as given; the shader will sample
    /// texels the atlas does not guarantee. Use
    /// [`try_sub_image`](Self::try_sub_image) to reject that case.
    pub fn sub_image(
        &mut self,
        image: Arc<AtlasImage>,
        start: [u32; 2],
        size: [u32; 2],
        filter: ImageFilter,
    ) -> &mut Self {
        if !filter.suitable_for(&image) {
            log::warn!(
                "filter {filter:?} unsuitable for atlas image with slack {}",
                image.slack
            );
        }
        self.image = Some(ImageParams {
            image,
            start,
            size,
            filter,
        });
        self
    }

    /// Sets the image feature to the full extent of `image`.
    pub fn image(&mut self, image: Arc<AtlasImage>, filter: ImageFilter) -> &mut Self {
        let size = image.dimensions();
        self.sub_image(image, [0, 0], size, filter)
    }

    /// Sets the image feature, rejecting filters the image cannot
    /// support.
    pub fn try_sub_image(
        &mut self,
        image: Arc<AtlasImage>,
        start: [u32; 2],
        size: [u32; 2],
        filter: ImageFilter,
    ) -> Result<&mut Self, Error> {
        if !filter.suitable_for(&image) {
            return Err(Error::UnsuitableFilter {
                filter,
                required: filter.slack_requirement(),
                available: image.slack,
            });
        }
        Ok(self.sub_image(image, start, size, filter))
    }

    /// Removes the image feature.
    pub fn no_image(&mut self) -> &mut Self {
        self.image = None;
        self
    }

    /// Sets a linear gradient from `p0` to `p1`.
    pub fn linear_gradient(
        &mut self,
        stops: Arc<ColorStopTable>,
        p0: kurbo::Point,
        p1: kurbo::Point,
        repeat: bool,
    ) -> &mut Self {
        self.gradient = Some(GradientParams {
            stops,
            p0: point_to_f32(p0),
            p1: point_to_f32(p1),
            radii: None,
            repeat,
        });
        self
    }

    /// Sets a radial gradient between the circles centered at `p0` and
    /// `p1` with radii `r0` and `r1`.
    pub fn radial_gradient(
        &mut self,
        stops: Arc<ColorStopTable>,
        p0: kurbo::Point,
        p1: kurbo::Point,
        r0: f32,
        r1: f32,
        repeat: bool,
    ) -> &mut Self {
        self.gradient = Some(GradientParams {
            stops,
            p0: point_to_f32(p0),
            p1: point_to_f32(p1),
            radii: Some([r0, r1]),
            repeat,
        });
        self
    }

    /// Removes the gradient feature.
    pub fn no_gradient(&mut self) -> &mut Self {
        self.gradient = None;
        self
    }

    /// Sets the repeat window.
    pub fn repeat_window(&mut self, position: kurbo::Point, size: kurbo::Size) -> &mut Self {
        self.repeat_window = Some(RepeatWindow {
            position: point_to_f32(position),
            size: [size.width as f32, size.height as f32],
        });
        self
    }

    /// Removes the repeat window.
    pub fn no_repeat_window(&mut self) -> &mut Self {
        self.repeat_window = None;
        self
    }

    /// Sets the brush transformation matrix, row major.
    pub fn transformation_matrix(&mut self, matrix: [f32; 4]) -> &mut Self {
        self.matrix = Some(matrix);
        self
    }

    /// Removes the brush transformation matrix.
    pub fn no_transformation_matrix(&mut self) -> &mut Self {
        self.matrix = None;
        self
    }

    /// Sets the brush transformation translation.
    pub fn transformation_translation(&mut self, p: kurbo::Point) -> &mut Self {
        self.translation = Some(point_to_f32(p));
        self
    }

    /// Removes the brush transformation translation.
    pub fn no_transformation_translation(&mut self) -> &mut Self {
        self.translation = None;
        self
    }

    /// Sets both parts of the brush transformation.
    pub fn transformation(&mut self, p: kurbo::Point, matrix: [f32; 4]) -> &mut Self {
        self.transformation_translation(p).transformation_matrix(matrix)
    }

    /// Removes both parts of the brush transformation.
    pub fn no_transformation(&mut self) -> &mut Self {
        self.no_transformation_translation().no_transformation_matrix()
    }

    /// Restores the pen to opaque white and clears the image and
    /// gradient references.
    ///
    /// The remaining optional features are left in place but become
    /// inert: without an image or gradient the feature mask collapses to
    /// zero and nothing beyond the pen is packed.
    pub fn reset(&mut self) {
        self.pen(1.0, 1.0, 1.0, 1.0);
        self.image = None;
        self.gradient = None;
    }

    /// Returns the active-feature bitmask.
    ///
    /// A brush with neither an image nor a gradient does nothing, so the
    /// whole mask collapses to zero no matter which other features are
    /// set. The mask is derived from field presence on every call and is
    /// the single source of truth for which segments
    /// [`data_size`](Self::data_size) and [`pack_data`](Self::pack_data)
    /// cover.
    pub fn shader(&self) -> u32 {
        if self.image.is_none() && self.gradient.is_none() {
            return 0;
        }
        let mut mask = 0;
        if self.image.is_some() {
            mask |= Self::IMAGE_MASK;
        }
        if let Some(gradient) = &self.gradient {
            mask |= Self::GRADIENT_MASK;
            if gradient.radii.is_some() {
                mask |= Self::RADIAL_GRADIENT_MASK;
            }
            if gradient.repeat {
                mask |= Self::GRADIENT_REPEAT_MASK;
            }
        }
        if self.repeat_window.is_some() {
            mask |= Self::REPEAT_WINDOW_MASK;
        }
        if self.translation.is_some() {
            mask |= Self::TRANSLATION_MASK;
        }
        if self.matrix.is_some() {
            mask |= Self::MATRIX_MASK;
        }
        mask
    }

    /// Returns the number of words [`pack_data`](Self::pack_data) will
    /// write: each active segment rounded up to `alignment` words, in
    /// canonical order.
    pub fn data_size(&self, alignment: u32) -> u32 {
        assert!(alignment > 0);
        let mask = self.shader();
        let mut size = round_up(PenSegment::WORDS, alignment);
        if mask & Self::IMAGE_MASK != 0 {
            size += round_up(ImageSegment::WORDS, alignment);
        }
        if mask & Self::RADIAL_GRADIENT_MASK != 0 {
            debug_assert!(mask & Self::GRADIENT_MASK != 0);
            size += round_up(RadialGradientSegment::WORDS, alignment);
        } else if mask & Self::GRADIENT_MASK != 0 {
            size += round_up(LinearGradientSegment::WORDS, alignment);
        }
        if mask & Self::REPEAT_WINDOW_MASK != 0 {
            size += round_up(RepeatWindowSegment::WORDS, alignment);
        }
        if mask & Self::MATRIX_MASK != 0 {
            size += round_up(MatrixSegment::WORDS, alignment);
        }
        if mask & Self::TRANSLATION_MASK != 0 {
            size += round_up(TranslationSegment::WORDS, alignment);
        }
        size
    }

    /// Packs the active segments into `dst` in canonical order: pen,
    /// image, gradient, repeat window, matrix, translation. Inactive
    /// segments are omitted with no gap; alignment padding words are
    /// zeroed.
    ///
    /// # Panics
    ///
    /// `dst.len()` must equal `self.data_size(alignment)`; anything else
    /// is a caller bug, not a recoverable condition.
    pub fn pack_data(&self, alignment: u32, dst: &mut [u32]) {
        assert_eq!(dst.len(), self.data_size(alignment) as usize);
        let mask = self.shader();
        let mut cursor = 0;

        let pen = PenSegment {
            r: self.pen[0],
            g: self.pen[1],
            b: self.pen[2],
            a: self.pen[3],
        };
        write_segment(bytemuck::cast_slice(bytemuck::bytes_of(&pen)), alignment, dst, &mut cursor);

        if mask & Self::IMAGE_MASK != 0 {
            let params = self.image.as_ref().unwrap();
            let tile = params.image.master_tile;
            let segment = ImageSegment {
                atlas_xyz: pack_bits(image_bits::ATLAS_X_BIT0, image_bits::ATLAS_X_NUM_BITS, tile[0])
                    | pack_bits(image_bits::ATLAS_Y_BIT0, image_bits::ATLAS_Y_NUM_BITS, tile[1])
                    | pack_bits(image_bits::ATLAS_Z_BIT0, image_bits::ATLAS_Z_NUM_BITS, tile[2]),
                size_xy: pack_xy(params.size),
                start_xy: pack_xy(params.start),
                misc: pack_bits(
                    image_bits::INDEX_LOOKUPS_BIT0,
                    image_bits::INDEX_LOOKUPS_NUM_BITS,
                    params.image.index_lookups,
                ) | pack_bits(image_bits::SLACK_BIT0, image_bits::SLACK_NUM_BITS, params.image.slack)
                    | pack_bits(
                        image_bits::FILTER_BIT0,
                        image_bits::FILTER_NUM_BITS,
                        params.filter as u32,
                    ),
            };
            write_segment(
                bytemuck::cast_slice(bytemuck::bytes_of(&segment)),
                alignment,
                dst,
                &mut cursor,
            );
        }

        if mask & Self::GRADIENT_MASK != 0 {
            let params = self.gradient.as_ref().unwrap();
            let stop_xy = pack_bits(
                gradient_bits::STOP_X_BIT0,
                gradient_bits::STOP_X_NUM_BITS,
                params.stops.texel[0],
            ) | pack_bits(
                gradient_bits::STOP_Y_BIT0,
                gradient_bits::STOP_Y_NUM_BITS,
                params.stops.texel[1],
            );
            if let Some([r0, r1]) = params.radii {
                let segment = RadialGradientSegment {
                    stop_xy,
                    stop_length: params.stops.width,
                    p0: params.p0,
                    p1: params.p1,
                    r0,
                    r1,
                };
                write_segment(
                    bytemuck::cast_slice(bytemuck::bytes_of(&segment)),
                    alignment,
                    dst,
                    &mut cursor,
                );
            } else {
                let segment = LinearGradientSegment {
                    stop_xy,
                    stop_length: params.stops.width,
                    p0: params.p0,
                    p1: params.p1,
                };
                write_segment(
                    bytemuck::cast_slice(bytemuck::bytes_of(&segment)),
                    alignment,
                    dst,
                    &mut cursor,
                );
            }
        }

        if mask & Self::REPEAT_WINDOW_MASK != 0 {
            let window = self.repeat_window.as_ref().unwrap();
            let segment = RepeatWindowSegment {
                x: window.position[0],
                y: window.position[1],
                width: window.size[0],
                height: window.size[1],
            };
            write_segment(
                bytemuck::cast_slice(bytemuck::bytes_of(&segment)),
                alignment,
                dst,
                &mut cursor,
            );
        }

        if mask & Self::MATRIX_MASK != 0 {
            let m = self.matrix.unwrap();
            let segment = MatrixSegment {
                m00: m[0],
                m01: m[1],
                m10: m[2],
                m11: m[3],
            };
            write_segment(
                bytemuck::cast_slice(bytemuck::bytes_of(&segment)),
                alignment,
                dst,
                &mut cursor,
            );
        }

        if mask & Self::TRANSLATION_MASK != 0 {
            let p = self.translation.unwrap();
            let segment = TranslationSegment { x: p[0], y: p[1] };
            write_segment(
                bytemuck::cast_slice(bytemuck::bytes_of(&segment)),
                alignment,
                dst,
                &mut cursor,
            );
        }

        debug_assert_eq!(cursor, dst.len());
    }

    /// Sizes, allocates, and packs in one call.
    pub fn pack(&self, alignment: u32) -> Vec<u32> {
        let mut data = vec![0; self.data_size(alignment) as usize];
        self.pack_data(alignment, &mut data);
        data
    }

    /// The highest-quality filter suitable for `image`.
    pub fn best_filter_for_image(image: Option<&AtlasImage>) -> ImageFilter {
        ImageFilter::best_for(image)
    }

    /// Whether `filter` can be used with `image`.
    pub fn filter_suitable_for_image(image: &AtlasImage, filter: ImageFilter) -> bool {
        filter.suitable_for(image)
    }

    /// Slack padding `filter` requires around an atlas image.
    pub fn slack_requirement(filter: ImageFilter) -> u32 {
        filter.slack_requirement()
    }
}

impl Default for Brush {
    fn default() -> Self {
        Self::new()
    }
}

fn round_up(words: u32, alignment: u32) -> u32 {
    words.div_ceil(alignment) * alignment
}

/// Packs a texel coordinate pair into one word, per the size/start
/// layout in [`crate::packing::image`].
fn pack_xy(v: [u32; 2]) -> u32 {
    pack_bits(image_bits::SIZE_X_BIT0, image_bits::SIZE_X_NUM_BITS, v[0])
        | pack_bits(image_bits::SIZE_Y_BIT0, image_bits::SIZE_Y_NUM_BITS, v[1])
}

/// Copies one segment into `dst` at `cursor`, zeroing the alignment
/// padding, and advances the cursor past the rounded size.
fn write_segment(words: &[u32], alignment: u32, dst: &mut [u32], cursor: &mut usize) {
    let size = round_up(words.len() as u32, alignment) as usize;
    let dst = &mut dst[*cursor..*cursor + size];
    *cursor += size;
    dst[..words.len()].copy_from_slice(words);
    dst[words.len()..].fill(0);
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use peniko::kurbo::{Point, Size};

    use super::{Brush, DATA_ALIGNMENT};
    use crate::resource::{AtlasImage, ColorStopTable, ImageFilter};
    use crate::Error;

    fn test_image() -> Arc<AtlasImage> {
        Arc::new(AtlasImage {
            master_tile: [5, 9, 2],
            width: 96,
            height: 64,
            index_lookups: 3,
            slack: 1,
        })
    }

    fn test_stops() -> Arc<ColorStopTable> {
        Arc::new(ColorStopTable {
            texel: [100, 7],
            width: 256,
        })
    }

    #[test]
    fn pen_only_brush() {
        let brush = Brush::new();
        assert_eq!(brush.shader(), 0);
        assert_eq!(brush.data_size(1), 4);
        assert_eq!(brush.data_size(DATA_ALIGNMENT), 4);
        // Non-dividing alignment rounds the pen segment up.
        assert_eq!(brush.data_size(3), 6);
        let data = brush.pack(1);
        assert_eq!(data, vec![1.0f32.to_bits(); 4]);
    }

    #[test]
    fn pen_words_are_float_bits() {
        let mut brush = Brush::new();
        brush.pen(0.25, 0.5, 0.75, 1.0);
        let data = brush.pack(1);
        assert_eq!(data[0], 0.25f32.to_bits());
        assert_eq!(data[1], 0.5f32.to_bits());
        assert_eq!(data[2], 0.75f32.to_bits());
        assert_eq!(data[3], 1.0f32.to_bits());
    }

    #[test]
    fn optional_features_are_inert_without_image_or_gradient() {
        let mut brush = Brush::new();
        brush
            .repeat_window(Point::new(0.0, 0.0), Size::new(16.0, 16.0))
            .transformation(Point::new(1.0, 2.0), [2.0, 0.0, 0.0, 2.0]);
        assert_eq!(brush.shader(), 0);
        assert_eq!(brush.data_size(1), 4);
        assert_eq!(brush.pack(1).len(), 4);
    }

    #[test]
    fn image_sets_exactly_the_image_bit() {
        let mut brush = Brush::new();
        brush.image(test_image(), ImageFilter::Linear);
        assert_eq!(brush.shader(), Brush::IMAGE_MASK);
        assert_eq!(brush.data_size(1), 4 + 4);
        assert_eq!(brush.data_size(DATA_ALIGNMENT), 4 + 4);
    }

    #[test]
    fn image_defaults_to_full_extent() {
        let mut brush = Brush::new();
        brush.image(test_image(), ImageFilter::Linear);
        let data = brush.pack(1);
        // Words 4..8 are the image segment.
        assert_eq!(data[4], 5 | (9 << 12) | (2 << 24));
        assert_eq!(data[5], 96 | (64 << 16));
        assert_eq!(data[6], 0);
        assert_eq!(data[7], 3 | (1 << 8) | ((ImageFilter::Linear as u32) << 16));
    }

    #[test]
    fn sub_image_packs_start_and_size() {
        let mut brush = Brush::new();
        brush.sub_image(test_image(), [10, 20], [30, 40], ImageFilter::Nearest);
        let data = brush.pack(1);
        assert_eq!(data[5], 30 | (40 << 16));
        assert_eq!(data[6], 10 | (20 << 16));
    }

    #[test]
    fn try_sub_image_rejects_unsuitable_filter() {
        let mut brush = Brush::new();
        let err = brush
            .try_sub_image(test_image(), [0, 0], [8, 8], ImageFilter::Cubic)
            .unwrap_err();
        assert_eq!(
            err,
            Error::UnsuitableFilter {
                filter: ImageFilter::Cubic,
                required: 2,
                available: 1,
            }
        );
        assert_eq!(brush.shader(), 0);
    }

    #[test]
    fn linear_gradient_size_and_mask() {
        let mut brush = Brush::new();
        brush.linear_gradient(test_stops(), Point::new(0.0, 0.0), Point::new(100.0, 0.0), false);
        assert_eq!(brush.shader(), Brush::GRADIENT_MASK);
        assert_eq!(brush.data_size(1), 4 + 6);
        // The six gradient words round up to two vec4s.
        assert_eq!(brush.data_size(DATA_ALIGNMENT), 4 + 8);
    }

    #[test]
    fn radial_gradient_size_and_mask() {
        let mut brush = Brush::new();
        brush.radial_gradient(
            test_stops(),
            Point::new(0.0, 0.0),
            Point::new(0.0, 0.0),
            1.0,
            50.0,
            true,
        );
        assert_eq!(
            brush.shader(),
            Brush::GRADIENT_MASK | Brush::RADIAL_GRADIENT_MASK | Brush::GRADIENT_REPEAT_MASK
        );
        assert_eq!(brush.data_size(1), 4 + 8);
        assert_eq!(brush.data_size(DATA_ALIGNMENT), 4 + 8);
    }

    #[test]
    fn gradient_words() {
        let mut brush = Brush::new();
        brush.linear_gradient(test_stops(), Point::new(1.0, 2.0), Point::new(3.0, 4.0), false);
        let data = brush.pack(1);
        assert_eq!(data[4], 100 | (7 << 16));
        assert_eq!(data[5], 256);
        assert_eq!(data[6], 1.0f32.to_bits());
        assert_eq!(data[7], 2.0f32.to_bits());
        assert_eq!(data[8], 3.0f32.to_bits());
        assert_eq!(data[9], 4.0f32.to_bits());
    }

    #[test]
    fn segments_are_adjacent_in_canonical_order() {
        let mut brush = Brush::new();
        brush
            .image(test_image(), ImageFilter::Linear)
            .radial_gradient(
                test_stops(),
                Point::new(0.0, 0.0),
                Point::new(0.0, 0.0),
                0.0,
                10.0,
                false,
            )
            .repeat_window(Point::new(5.0, 6.0), Size::new(7.0, 8.0))
            .transformation(Point::new(-1.0, -2.0), [2.0, 0.0, 0.0, 2.0]);

        // pen 4 + image 4 + radial 8 + window 4 + matrix 4 + translation 4.
        assert_eq!(brush.data_size(DATA_ALIGNMENT), 28);
        let data = brush.pack(DATA_ALIGNMENT);
        assert_eq!(data.len(), 28);

        // Image segment begins immediately after the pen.
        assert_eq!(data[4], 5 | (9 << 12) | (2 << 24));
        // Gradient follows the image with no gap.
        assert_eq!(data[8], 100 | (7 << 16));
        assert_eq!(data[15], 10.0f32.to_bits());
        // Repeat window, then matrix, then translation.
        assert_eq!(data[16], 5.0f32.to_bits());
        assert_eq!(data[20], 2.0f32.to_bits());
        assert_eq!(data[24], (-1.0f32).to_bits());
        assert_eq!(data[25], (-2.0f32).to_bits());
        // Translation padding words are zeroed.
        assert_eq!(data[26], 0);
        assert_eq!(data[27], 0);
    }

    #[test]
    fn omitted_segment_leaves_no_gap() {
        let mut brush = Brush::new();
        brush
            .image(test_image(), ImageFilter::Nearest)
            .transformation_translation(Point::new(9.0, 10.0));
        let data = brush.pack(1);
        assert_eq!(data.len(), 4 + 4 + 2);
        // With no gradient or window, the translation follows the image.
        assert_eq!(data[8], 9.0f32.to_bits());
        assert_eq!(data[9], 10.0f32.to_bits());
    }

    #[test]
    fn reset_drops_gating_references() {
        let mut brush = Brush::new();
        brush
            .pen(0.0, 0.0, 0.0, 0.5)
            .image(test_image(), ImageFilter::Linear)
            .linear_gradient(test_stops(), Point::new(0.0, 0.0), Point::new(1.0, 0.0), false);
        assert_ne!(brush.shader(), 0);
        brush.reset();
        assert_eq!(brush.shader(), 0);
        assert_eq!(brush.data_size(DATA_ALIGNMENT), 4);
        assert_eq!(brush.pack(1), vec![1.0f32.to_bits(); 4]);
    }

    #[test]
    fn no_gradient_drops_gradient_bits() {
        let mut brush = Brush::new();
        brush
            .image(test_image(), ImageFilter::Nearest)
            .radial_gradient(
                test_stops(),
                Point::new(0.0, 0.0),
                Point::new(0.0, 0.0),
                0.0,
                1.0,
                true,
            );
        brush.no_gradient();
        assert_eq!(brush.shader(), Brush::IMAGE_MASK);
    }

    #[test]
    fn pack_data_matches_data_size_across_feature_sets() {
        let mut brush = Brush::new();
        brush.image(test_image(), ImageFilter::Linear);
        for alignment in [1, 2, 3, 4, 8] {
            let size = brush.data_size(alignment) as usize;
            let mut dst = vec![0xDEAD_BEEF; size];
            brush.pack_data(alignment, &mut dst);
            // Every word was written, including padding.
            assert!(!dst.contains(&0xDEAD_BEEF));
        }
    }

    #[test]
    #[should_panic]
    fn pack_data_rejects_wrong_buffer_size() {
        let brush = Brush::new();
        let mut dst = vec![0; 5];
        brush.pack_data(1, &mut dst);
    }

    #[test]
    fn clone_is_independent() {
        let mut brush = Brush::new();
        brush.image(test_image(), ImageFilter::Linear);
        let mut copy = brush.clone();
        copy.no_image();
        assert_eq!(brush.shader(), Brush::IMAGE_MASK);
        assert_eq!(copy.shader(), 0);
    }

    #[test]
    fn pen_color_converts_from_u8() {
        let mut brush = Brush::new();
        brush.pen_color(peniko::Color::rgba8(255, 0, 51, 255));
        let data = brush.pack(1);
        assert_eq!(data[0], 1.0f32.to_bits());
        assert_eq!(data[1], 0.0f32.to_bits());
        assert_eq!(data[2], (51.0f32 / 255.0).to_bits());
        assert_eq!(data[3], 1.0f32.to_bits());
    }
}
