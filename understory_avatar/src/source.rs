// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Image sources and their conversion to RGBA pixels.

use std::sync::Arc;

use kurbo::Size;
use peniko::{Color, ImageAlphaType, ImageFormat};

use crate::ImageLoadError;

/// Side length of the bitmap a solid color source becomes.
pub const COLOR_IMAGE_DIMENSION: u32 = 2;

/// Identifier of an image known to an [`ImageResolver`].
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ResourceId(pub u32);

/// Dimensions and pixel layout of an [`AvatarImage`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ImageDesc {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Channel order.
    pub format: ImageFormat,
    /// Whether color channels are premultiplied.
    pub alpha_type: ImageAlphaType,
}

/// A decoded bitmap, four bytes per pixel.
#[derive(Clone, Debug, PartialEq)]
pub struct AvatarImage {
    desc: ImageDesc,
    pixels: Arc<[u8]>,
}

impl AvatarImage {
    /// Wraps `pixels`, checking they match `desc`.
    pub fn new(desc: ImageDesc, pixels: impl Into<Arc<[u8]>>) -> Result<Self, ImageLoadError> {
        if desc.width == 0 || desc.height == 0 {
            return Err(ImageLoadError::Empty);
        }
        let too_large = ImageLoadError::TooLarge {
            width: desc.width,
            height: desc.height,
        };
        let expected = usize::try_from(desc.width)
            .ok()
            .zip(usize::try_from(desc.height).ok())
            .and_then(|(w, h)| w.checked_mul(h))
            .and_then(|n| n.checked_mul(4))
            .ok_or(too_large)?;
        let pixels = pixels.into();
        if pixels.len() != expected {
            return Err(ImageLoadError::PixelCount {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self { desc, pixels })
    }

    /// Straight-alpha RGBA8 pixels.
    pub fn from_rgba8(
        width: u32,
        height: u32,
        pixels: impl Into<Arc<[u8]>>,
    ) -> Result<Self, ImageLoadError> {
        Self::new(
            ImageDesc {
                width,
                height,
                format: ImageFormat::Rgba8,
                alpha_type: ImageAlphaType::Alpha,
            },
            pixels,
        )
    }

    /// A small bitmap filled with `color`.
    #[must_use]
    pub fn solid(color: Color) -> Self {
        let rgba = color.to_rgba8();
        let pixel = [rgba.r, rgba.g, rgba.b, rgba.a];
        let count = (COLOR_IMAGE_DIMENSION * COLOR_IMAGE_DIMENSION) as usize;
        let pixels: Arc<[u8]> = pixel.repeat(count).into();
        Self {
            desc: ImageDesc {
                width: COLOR_IMAGE_DIMENSION,
                height: COLOR_IMAGE_DIMENSION,
                format: ImageFormat::Rgba8,
                alpha_type: ImageAlphaType::Alpha,
            },
            pixels,
        }
    }

    /// Decodes PNG, JPEG, GIF or WebP bytes.
    pub fn decode(bytes: &[u8]) -> Result<Self, ImageLoadError> {
        let rgba = image::load_from_memory(bytes)?.into_rgba8();
        let (width, height) = rgba.dimensions();
        Self::from_rgba8(width, height, rgba.into_raw())
    }

    /// Layout description.
    #[must_use]
    pub fn desc(&self) -> &ImageDesc {
        &self.desc
    }

    /// Raw pixel bytes.
    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Size in pixels as a float size.
    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(f64::from(self.desc.width), f64::from(self.desc.height))
    }
}

/// Where an avatar gets its picture from.
#[derive(Clone, Debug, PartialEq)]
pub enum ImageSource {
    /// An already decoded bitmap.
    Bitmap(Arc<AvatarImage>),
    /// Encoded image bytes, decoded on load.
    Encoded(Arc<[u8]>),
    /// A solid color, turned into a tiny bitmap.
    Color(Color),
    /// An id handed to the view's [`ImageResolver`].
    Resource(ResourceId),
}

impl From<AvatarImage> for ImageSource {
    fn from(image: AvatarImage) -> Self {
        Self::Bitmap(Arc::new(image))
    }
}

impl From<Color> for ImageSource {
    fn from(color: Color) -> Self {
        Self::Color(color)
    }
}

impl From<ResourceId> for ImageSource {
    fn from(id: ResourceId) -> Self {
        Self::Resource(id)
    }
}

/// Host lookup for [`ImageSource::Resource`] ids.
pub trait ImageResolver {
    /// Returns the source registered under `id`, if any.
    ///
    /// Returning another [`ImageSource::Resource`] is treated as unknown.
    fn resolve(&self, id: ResourceId) -> Option<ImageSource>;
}

/// Turns `source` into a bitmap.
pub fn load_image(
    source: &ImageSource,
    resolver: Option<&dyn ImageResolver>,
) -> Result<Arc<AvatarImage>, ImageLoadError> {
    match source {
        ImageSource::Bitmap(image) => Ok(Arc::clone(image)),
        ImageSource::Encoded(bytes) => AvatarImage::decode(bytes).map(Arc::new),
        ImageSource::Color(color) => Ok(Arc::new(AvatarImage::solid(*color))),
        ImageSource::Resource(id) => match resolver.and_then(|r| r.resolve(*id)) {
            None | Some(ImageSource::Resource(_)) => Err(ImageLoadError::UnknownResource(*id)),
            Some(resolved) => load_image(&resolved, None),
        },
    }
}
