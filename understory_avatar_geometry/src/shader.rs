// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cover-fit mapping from image pixels onto the drawable rect.

use kurbo::{Affine, Rect, Size, Vec2};

/// Which image axis was scaled to match the target rect exactly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FitAxis {
    /// Scaled so the image width equals the rect width; height overflows.
    Width,
    /// Scaled so the image height equals the rect height; width overflows.
    Height,
}

/// Uniform scale plus centering offset that makes an image cover a rect.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoverFit {
    /// Uniform scale applied to image pixels.
    pub scale: f64,
    /// Translation applied after scaling, in the rect's coordinate space.
    pub offset: Vec2,
    /// Axis that matches the rect exactly.
    pub axis: FitAxis,
}

impl CoverFit {
    /// Image-to-local transform: scale first, then translate.
    #[must_use]
    pub fn transform(&self) -> Affine {
        Affine::scale(self.scale).then_translate(self.offset)
    }

    /// Size of the image after scaling.
    #[must_use]
    pub fn scaled_size(&self, image: Size) -> Size {
        Size::new(image.width * self.scale, image.height * self.scale)
    }
}

/// Computes the cover-fit of an `image`-sized bitmap onto `rect`.
///
/// The image is scaled uniformly so that it covers `rect` with equality on one
/// axis; the overflow on the other axis is split evenly and snapped to whole
/// pixels to avoid seams. Returns `None` when either image dimension is not
/// positive.
#[must_use]
pub fn cover_fit(image: Size, rect: Rect) -> Option<CoverFit> {
    if !(image.width > 0.0 && image.height > 0.0) {
        return None;
    }

    let (rect_w, rect_h) = (rect.width(), rect.height());
    let (scale, dx, dy, axis) = if image.width * rect_h > rect_w * image.height {
        let scale = rect_h / image.height;
        (scale, (rect_w - image.width * scale) * 0.5, 0.0, FitAxis::Height)
    } else {
        let scale = rect_w / image.width;
        (scale, 0.0, (rect_h - image.height * scale) * 0.5, FitAxis::Width)
    };

    Some(CoverFit {
        scale,
        offset: Vec2::new(snap_to_pixel(dx) + rect.x0, snap_to_pixel(dy) + rect.y0),
        axis,
    })
}

/// Like [`cover_fit`] but returns the transform directly, identity for empty images.
#[must_use]
pub fn shader_transform(image: Size, rect: Rect) -> Affine {
    cover_fit(image, rect).map_or(Affine::IDENTITY, |fit| fit.transform())
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "offsets are bounded by the widget size, far inside i64"
)]
fn snap_to_pixel(d: f64) -> f64 {
    (d + 0.5) as i64 as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Point;

    #[test]
    fn wide_image_takes_the_height_branch() {
        let image = Size::new(400.0, 100.0);
        let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
        let fit = cover_fit(image, rect).unwrap();

        let height_branch = image.width * rect.height() > rect.width() * image.height;
        assert!(height_branch);
        assert_eq!(fit.axis, FitAxis::Height);
        assert_eq!(fit.scale, rect.height() / image.height);
        // Overflow of 300px is centered: -150 snaps to -149 like a truncating cast.
        assert_eq!(fit.offset, Vec2::new(-149.0, 0.0));
    }

    #[test]
    fn tall_image_takes_the_width_branch() {
        let image = Size::new(50.0, 200.0);
        let rect = Rect::new(25.0, 25.0, 175.0, 175.0);
        let fit = cover_fit(image, rect).unwrap();
        assert_eq!(fit.axis, FitAxis::Width);
        assert_eq!(fit.scale, 3.0);
        assert_eq!(fit.offset.x, 25.0);
    }

    #[test]
    fn cover_fit_always_covers_the_rect() {
        let rects = [
            Rect::new(0.0, 0.0, 100.0, 100.0),
            Rect::new(25.0, 25.0, 175.0, 175.0),
            Rect::new(3.5, 7.0, 90.5, 41.0),
        ];
        for rect in rects {
            for w in [1.0, 2.0, 17.0, 100.0, 640.0, 4000.0] {
                for h in [1.0, 3.0, 100.0, 480.0, 3000.0] {
                    let image = Size::new(w, h);
                    let fit = cover_fit(image, rect).unwrap();
                    let scaled = fit.scaled_size(image);
                    let eps = 1e-9 * rect.width().max(rect.height());
                    assert!(scaled.width >= rect.width() - eps, "{image:?} in {rect:?}");
                    assert!(scaled.height >= rect.height() - eps, "{image:?} in {rect:?}");
                    let exact_w = (scaled.width - rect.width()).abs() <= eps;
                    let exact_h = (scaled.height - rect.height()).abs() <= eps;
                    assert!(exact_w || exact_h, "no exact axis for {image:?}");

                    // After snapping, the mapped image still contains the rect.
                    let mapped = fit.transform().transform_rect_bbox(Rect::from_origin_size(
                        Point::ORIGIN,
                        image,
                    ));
                    assert!(mapped.x0 <= rect.x0 + eps && mapped.x1 >= rect.x1 - eps);
                    assert!(mapped.y0 <= rect.y0 + eps && mapped.y1 >= rect.y1 - eps);
                }
            }
        }
    }

    #[test]
    fn empty_images_have_no_fit() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(cover_fit(Size::new(0.0, 10.0), rect).is_none());
        assert!(cover_fit(Size::new(10.0, -1.0), rect).is_none());
        assert_eq!(shader_transform(Size::ZERO, rect), Affine::IDENTITY);
    }
}
