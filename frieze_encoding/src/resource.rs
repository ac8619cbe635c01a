// Copyright 2026 the Frieze Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolved-resource handles consumed by the brush encoder.
//!
//! Atlas allocation and color-stop rasterization happen elsewhere; by the
//! time a brush is encoded, both have been reduced to locations inside
//! GPU-resident textures. The handles here carry just those locations.

/// An image resident in the texture atlas.
///
/// `master_tile` identifies the root index tile; `index_lookups` is the
/// number of indirection levels a sampler must walk to reach color data;
/// `slack` is the padding in texels kept around the image so filtered
/// sampling never reads a neighboring allocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AtlasImage {
    pub master_tile: [u32; 3],
    pub width: u32,
    pub height: u32,
    pub index_lookups: u32,
    pub slack: u32,
}

impl AtlasImage {
    /// Image dimensions as packed by the encoder.
    pub fn dimensions(&self) -> [u32; 2] {
        [self.width, self.height]
    }
}

/// A color-stop table resident in the gradient ramp texture.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorStopTable {
    /// Texel location of the first stop.
    pub texel: [u32; 2],
    /// Number of texels in the table.
    pub width: u32,
}

/// Image sampling filter.
///
/// Discriminants are the wire values packed into the image segment's
/// misc word.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ImageFilter {
    Nearest = 1,
    Linear = 2,
    Cubic = 3,
}

impl ImageFilter {
    /// Slack padding (in texels) the filter needs around an image.
    pub const fn slack_requirement(self) -> u32 {
        match self {
            Self::Nearest => 0,
            Self::Linear => 1,
            Self::Cubic => 2,
        }
    }

    /// Minimum image extent at which the filter has enough texels to
    /// sample.
    const fn min_extent(self) -> u32 {
        match self {
            Self::Nearest => 1,
            Self::Linear => 2,
            Self::Cubic => 4,
        }
    }

    /// Whether the filter can be used with `image` as resident in the
    /// atlas.
    pub fn suitable_for(self, image: &AtlasImage) -> bool {
        image.slack >= self.slack_requirement()
            && image.width >= self.min_extent()
            && image.height >= self.min_extent()
    }

    /// The highest-quality filter suitable for `image`.
    pub fn best_for(image: Option<&AtlasImage>) -> Self {
        match image {
            Some(image) => [Self::Cubic, Self::Linear]
                .into_iter()
                .find(|f| f.suitable_for(image))
                .unwrap_or(Self::Nearest),
            None => Self::Nearest,
        }
    }
}
