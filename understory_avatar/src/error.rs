// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use crate::ResourceId;

/// How an image is scaled into the avatar circle.
///
/// Avatars always crop to cover the circle; the other modes exist so hosts
/// that forward a generic image-view scale setting get a clear rejection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScaleMode {
    /// Scale uniformly to cover, cropping the overflow. The only supported mode.
    #[default]
    CenterCrop,
    /// Scale uniformly to fit inside, letterboxing.
    FitCenter,
    /// Stretch each axis independently.
    FitXy,
    /// No scaling, centered.
    Center,
}

/// A configuration change the avatar cannot honor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Only [`ScaleMode::CenterCrop`] is supported.
    UnsupportedScaleMode(ScaleMode),
    /// Avatars never resize themselves to the image.
    AdjustViewBoundsUnsupported,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedScaleMode(mode) => write!(f, "scale mode {mode:?} not supported"),
            Self::AdjustViewBoundsUnsupported => f.write_str("adjusting view bounds is not supported"),
        }
    }
}

impl core::error::Error for ConfigError {}

/// Why an image source produced no image.
#[derive(Debug)]
pub enum ImageLoadError {
    /// Encoded bytes could not be decoded.
    Decode(image::ImageError),
    /// No resolver is installed, or it does not know the id.
    UnknownResource(ResourceId),
    /// The image has a zero dimension.
    Empty,
    /// The pixel buffer does not match the declared dimensions.
    PixelCount {
        /// Bytes required by width × height × 4.
        expected: usize,
        /// Bytes supplied.
        actual: usize,
    },
    /// The declared dimensions do not fit in memory.
    TooLarge {
        /// Declared width in pixels.
        width: u32,
        /// Declared height in pixels.
        height: u32,
    },
}

impl fmt::Display for ImageLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decode(err) => write!(f, "could not decode image: {err}"),
            Self::UnknownResource(id) => write!(f, "unknown image resource {}", id.0),
            Self::Empty => f.write_str("image has no pixels"),
            Self::PixelCount { expected, actual } => {
                write!(f, "expected {expected} pixel bytes, got {actual}")
            }
            Self::TooLarge { width, height } => {
                write!(f, "image of {width}x{height} pixels is too large")
            }
        }
    }
}

impl core::error::Error for ImageLoadError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Decode(err) => Some(err),
            _ => None,
        }
    }
}

impl From<image::ImageError> for ImageLoadError {
    fn from(err: image::ImageError) -> Self {
        Self::Decode(err)
    }
}
