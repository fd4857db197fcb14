// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::fmt;
use std::sync::Arc;

use kurbo::{Affine, Insets, Point, RoundedRect, Size};
use peniko::Color;
use understory_avatar_geometry::{
    AvatarLayout, MeasureSpec, compute_layout, in_touchable_area, outline, resolve_size,
    shader_transform,
};
use understory_progress_animation::AnimationDrawingState;

use crate::{
    AvatarImage, AvatarStyle, ColorFilter, ConfigError, ImageResolver, ImageShader, ImageSource,
    RenderInputs, RenderPlan, ScaleMode, derive, load_image,
};

/// A circular avatar with border and badge cut-out.
///
/// The view keeps its style, size and image, re-derives geometry whenever one
/// of them changes, and raises a "needs paint" flag for the host to act on.
/// Setters ignore values equal to the current ones.
///
/// ```rust
/// use kurbo::Size;
/// use peniko::Color;
/// use understory_avatar::{AvatarStyle, CircleBadgeView, ImageSource};
///
/// let mut view = CircleBadgeView::new(AvatarStyle::default());
/// view.set_size(Size::new(200.0, 200.0));
/// view.set_border_width(10.0);
/// view.set_image(Some(ImageSource::Color(Color::WHITE)));
///
/// assert_eq!(view.layout().border.radius, 95.0);
/// assert!(view.take_paint_request());
/// let plan = view.paint();
/// assert_eq!(plan.draws().count(), 3);
/// ```
pub struct CircleBadgeView {
    style: AvatarStyle,
    size: Size,
    padding: Insets,
    layout: AvatarLayout,
    source: Option<ImageSource>,
    image: Option<Arc<AvatarImage>>,
    image_dirty: bool,
    shader_transform: Affine,
    shader: Option<ImageShader>,
    rebuild_shader: bool,
    shader_builds: u64,
    needs_paint: bool,
    resolver: Option<Box<dyn ImageResolver>>,
}

impl fmt::Debug for CircleBadgeView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CircleBadgeView")
            .field("style", &self.style)
            .field("size", &self.size)
            .field("padding", &self.padding)
            .field("layout", &self.layout)
            .field("has_image", &self.image.is_some())
            .field("needs_paint", &self.needs_paint)
            .field("has_resolver", &self.resolver.is_some())
            .finish_non_exhaustive()
    }
}

impl Default for CircleBadgeView {
    fn default() -> Self {
        Self::new(AvatarStyle::default())
    }
}

impl CircleBadgeView {
    /// A zero-size view with no image.
    #[must_use]
    pub fn new(style: AvatarStyle) -> Self {
        let mut view = Self {
            style,
            size: Size::ZERO,
            padding: Insets::ZERO,
            layout: AvatarLayout::EMPTY,
            source: None,
            image: None,
            image_dirty: false,
            shader_transform: Affine::IDENTITY,
            shader: None,
            rebuild_shader: false,
            shader_builds: 0,
            needs_paint: false,
            resolver: None,
        };
        view.update_dimensions();
        view
    }

    /// Installs the lookup used for [`ImageSource::Resource`].
    #[must_use]
    pub fn with_resolver(mut self, resolver: impl ImageResolver + 'static) -> Self {
        self.resolver = Some(Box::new(resolver));
        self
    }

    /// Current style.
    #[must_use]
    pub fn style(&self) -> &AvatarStyle {
        &self.style
    }

    /// Current geometry.
    #[must_use]
    pub fn layout(&self) -> &AvatarLayout {
        &self.layout
    }

    /// Widget size.
    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Widget padding.
    #[must_use]
    pub fn padding(&self) -> Insets {
        self.padding
    }

    /// The loaded bitmap, if any. Reflects a pending [`invalidate_image`](Self::invalidate_image)
    /// only after the next paint.
    #[must_use]
    pub fn image(&self) -> Option<&Arc<AvatarImage>> {
        self.image.as_ref()
    }

    /// Image-to-widget transform of the current bitmap.
    #[must_use]
    pub fn shader_transform(&self) -> Affine {
        self.shader_transform
    }

    /// Number of times the image shader has been rebuilt.
    #[must_use]
    pub fn shader_builds(&self) -> u64 {
        self.shader_builds
    }

    /// Returns `true` if something changed since the last paint request was taken.
    #[must_use]
    pub fn needs_paint(&self) -> bool {
        self.needs_paint
    }

    /// Returns and clears the "needs paint" flag.
    pub fn take_paint_request(&mut self) -> bool {
        core::mem::take(&mut self.needs_paint)
    }

    /// Raises the "needs paint" flag.
    pub fn request_paint(&mut self) {
        self.needs_paint = true;
    }

    /// Sets the widget size.
    pub fn set_size(&mut self, size: Size) {
        if size == self.size {
            return;
        }
        self.size = size;
        self.update_dimensions();
        self.request_paint();
    }

    /// Sets the widget padding.
    pub fn set_padding(&mut self, padding: Insets) {
        if padding == self.padding {
            return;
        }
        self.padding = padding;
        self.update_dimensions();
        self.request_paint();
    }

    /// Sets the border stroke width.
    pub fn set_border_width(&mut self, width: f64) {
        if width == self.style.border_width {
            return;
        }
        self.style.border_width = width;
        self.update_dimensions();
        self.request_paint();
    }

    /// Sets the border color.
    pub fn set_border_color(&mut self, color: Color) {
        if color == self.style.border_color {
            return;
        }
        self.style.border_color = color;
        self.request_paint();
    }

    /// Sets the fill behind the image.
    pub fn set_background_color(&mut self, color: Color) {
        if color == self.style.background_color {
            return;
        }
        self.style.background_color = color;
        self.request_paint();
    }

    /// Sets the requested badge radius; zero fits the corner.
    pub fn set_badge_width(&mut self, width: f64) {
        if width == self.style.badge_width {
            return;
        }
        self.style.badge_width = width;
        self.update_dimensions();
        self.request_paint();
    }

    /// Sets the image tint.
    pub fn set_color_filter(&mut self, filter: Option<ColorFilter>) {
        if filter == self.style.color_filter {
            return;
        }
        self.style.color_filter = filter;
        self.request_paint();
    }

    /// Sets the image opacity.
    pub fn set_image_alpha(&mut self, alpha: u8) {
        if alpha == self.style.image_alpha {
            return;
        }
        self.style.image_alpha = alpha;
        self.request_paint();
    }

    /// Shows or hides the layout guides.
    pub fn set_debug_guides(&mut self, enabled: bool) {
        if enabled == self.style.debug_guides {
            return;
        }
        self.style.debug_guides = enabled;
        self.request_paint();
    }

    /// Replaces the whole style.
    pub fn set_style(&mut self, style: AvatarStyle) {
        if style == self.style {
            return;
        }
        self.style = style;
        self.update_dimensions();
        self.request_paint();
    }

    /// Sets the image source and loads it right away.
    ///
    /// Load failures are logged and leave the view without an image.
    pub fn set_image(&mut self, source: Option<ImageSource>) {
        if source == self.source && !self.image_dirty {
            return;
        }
        self.source = source;
        self.load_source();
        self.request_paint();
    }

    /// Marks the current source as stale so it is loaded again before the next paint.
    pub fn invalidate_image(&mut self) {
        self.image_dirty = true;
        self.request_paint();
    }

    /// Avatars always center-crop.
    #[must_use]
    pub fn scale_mode(&self) -> ScaleMode {
        ScaleMode::CenterCrop
    }

    /// Accepts only [`ScaleMode::CenterCrop`].
    pub fn set_scale_mode(&mut self, mode: ScaleMode) -> Result<(), ConfigError> {
        if mode == ScaleMode::CenterCrop {
            Ok(())
        } else {
            log::debug!("rejected avatar scale mode {mode:?}");
            Err(ConfigError::UnsupportedScaleMode(mode))
        }
    }

    /// Accepts only `false`.
    pub fn set_adjust_view_bounds(&mut self, adjust: bool) -> Result<(), ConfigError> {
        if adjust {
            log::debug!("rejected adjusting avatar view bounds");
            Err(ConfigError::AdjustViewBoundsUnsupported)
        } else {
            Ok(())
        }
    }

    /// Returns `true` if `point` should count as a touch on the avatar.
    #[must_use]
    pub fn hit_test(&self, point: Point) -> bool {
        in_touchable_area(&self.layout, point)
    }

    /// Outline for shadows and clipping.
    #[must_use]
    pub fn outline(&self) -> RoundedRect {
        outline(&self.layout)
    }

    /// Resolves the size this view wants under the given constraints.
    #[must_use]
    pub fn measure(&self, width: MeasureSpec, height: MeasureSpec, default_size: Size) -> Size {
        Size::new(
            resolve_size(width, default_size.width),
            resolve_size(height, default_size.height),
        )
    }

    /// Builds the op list for the avatar body.
    pub fn paint(&mut self) -> RenderPlan {
        self.paint_with(None)
    }

    pub(crate) fn paint_with(&mut self, progress: Option<&AnimationDrawingState>) -> RenderPlan {
        if self.image_dirty {
            self.load_source();
        }
        if self.rebuild_shader {
            self.shader = self.image.as_ref().map(|image| ImageShader {
                image: Arc::clone(image),
                transform: self.shader_transform,
            });
            self.rebuild_shader = false;
            self.shader_builds += 1;
        }
        derive(&RenderInputs {
            size: self.size,
            style: &self.style,
            layout: &self.layout,
            shader: self.shader.as_ref(),
            progress,
        })
    }

    fn load_source(&mut self) {
        self.image_dirty = false;
        self.image = self.source.as_ref().and_then(|source| {
            load_image(source, self.resolver.as_deref())
                .inspect_err(|err| log::warn!("avatar image unavailable: {err}"))
                .ok()
        });
        self.update_shader_matrix();
    }

    fn update_dimensions(&mut self) {
        self.layout = compute_layout(
            self.size,
            self.padding,
            self.style.border_width,
            self.style.badge_width,
        );
        self.update_shader_matrix();
    }

    fn update_shader_matrix(&mut self) {
        self.shader_transform = self.image.as_ref().map_or(Affine::IDENTITY, |image| {
            shader_transform(image.size(), self.layout.drawable_rect)
        });
        self.rebuild_shader = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DrawOp, ResourceId};
    use kurbo::{Rect, Vec2};

    fn sized(side: f64) -> CircleBadgeView {
        let mut view = CircleBadgeView::default();
        view.set_size(Size::new(side, side));
        view.take_paint_request();
        view
    }

    #[test]
    fn equal_values_do_not_request_paint() {
        let mut view = sized(100.0);
        view.set_size(Size::new(100.0, 100.0));
        view.set_border_width(0.0);
        view.set_border_color(Color::BLACK);
        view.set_background_color(Color::TRANSPARENT);
        view.set_image_alpha(255);
        view.set_color_filter(None);
        view.set_padding(Insets::ZERO);
        view.set_image(None);
        view.set_badge_width(0.0);
        view.set_debug_guides(false);
        let style = view.style().clone();
        view.set_style(style);
        assert!(!view.needs_paint());

        view.set_border_color(Color::WHITE);
        assert!(view.take_paint_request());
    }

    #[test]
    fn geometry_follows_border_and_padding() {
        let mut view = sized(200.0);
        view.set_border_width(10.0);
        assert_eq!(view.layout().border.radius, 95.0);

        view.set_padding(Insets::uniform(20.0));
        assert_eq!(view.layout().bounds, Rect::new(20.0, 20.0, 180.0, 180.0));
        assert_eq!(view.layout().border.radius, 75.0);
    }

    #[test]
    fn shader_is_rebuilt_only_when_dirty() {
        let mut view = sized(200.0);
        let image = AvatarImage::from_rgba8(4, 1, vec![0; 16]).unwrap();
        view.set_image(Some(image.into()));
        let _ = view.paint();
        let _ = view.paint();
        assert_eq!(view.shader_builds(), 1);

        view.set_border_color(Color::WHITE);
        let _ = view.paint();
        assert_eq!(view.shader_builds(), 1, "color changes keep the shader");

        view.set_border_width(5.0);
        let _ = view.paint();
        assert_eq!(view.shader_builds(), 2);
    }

    #[test]
    fn shader_covers_the_drawable_rect() {
        let mut view = sized(200.0);
        view.set_image(Some(AvatarImage::from_rgba8(4, 1, vec![0; 16]).unwrap().into()));
        let plan = view.paint();
        let Some(DrawOp::FillImageCircle { shader, circle, alpha, .. }) =
            plan.draws().find(|op| matches!(op, DrawOp::FillImageCircle { .. }))
        else {
            panic!("no image fill");
        };
        // 170px drawable square, 4x1 image scaled by 170: overflow 510 each side, -255 snaps to -254.
        assert_eq!(*circle, view.layout().drawable);
        assert_eq!(shader.transform.translation(), Vec2::new(15.0 - 254.0, 15.0));
        assert_eq!(*alpha, 255);
    }

    #[test]
    fn broken_sources_paint_without_an_image() {
        let mut view = sized(100.0);
        view.set_image(Some(ImageSource::Encoded(Arc::from(&b"garbage"[..]))));
        assert!(view.image().is_none());
        assert!(view.needs_paint());
        assert!(!view.paint().draws().any(|op| matches!(op, DrawOp::FillImageCircle { .. })));

        view.set_image(Some(ImageSource::Resource(ResourceId(7))));
        assert!(view.image().is_none());
    }

    #[test]
    fn invalidated_image_reloads_on_paint() {
        use std::cell::Cell;
        use std::rc::Rc;

        struct Counting(Rc<Cell<u32>>);
        impl ImageResolver for Counting {
            fn resolve(&self, _id: ResourceId) -> Option<ImageSource> {
                self.0.set(self.0.get() + 1);
                Some(ImageSource::Color(Color::WHITE))
            }
        }

        let calls = Rc::new(Cell::new(0));
        let mut view = CircleBadgeView::default().with_resolver(Counting(Rc::clone(&calls)));
        view.set_size(Size::new(64.0, 64.0));
        view.set_image(Some(ImageSource::Resource(ResourceId(1))));
        assert_eq!(calls.get(), 1);
        let _ = view.paint();
        assert_eq!(calls.get(), 1);

        view.invalidate_image();
        assert_eq!(calls.get(), 1);
        let _ = view.paint();
        assert_eq!(calls.get(), 2);
        assert!(view.image().is_some());
    }

    #[test]
    fn rejected_configuration_leaves_state_alone() {
        let mut view = sized(100.0);
        assert_eq!(
            view.set_scale_mode(ScaleMode::FitCenter),
            Err(ConfigError::UnsupportedScaleMode(ScaleMode::FitCenter))
        );
        assert_eq!(view.set_scale_mode(ScaleMode::CenterCrop), Ok(()));
        assert_eq!(
            view.set_adjust_view_bounds(true),
            Err(ConfigError::AdjustViewBoundsUnsupported)
        );
        assert_eq!(view.set_adjust_view_bounds(false), Ok(()));
        assert_eq!(view.scale_mode(), ScaleMode::CenterCrop);
        assert!(!view.needs_paint());
    }

    #[test]
    fn hit_test_and_outline_use_the_layout() {
        let view = sized(100.0);
        assert!(view.hit_test(Point::new(50.0, 50.0)));
        assert!(!view.hit_test(Point::new(99.0, 1.0)));
        assert!(view.hit_test(Point::new(-1.0, 500.0)));
        assert_eq!(view.outline().rect(), Rect::new(0.0, 0.0, 100.0, 100.0));
    }

    #[test]
    fn measure_honors_constraints() {
        let view = CircleBadgeView::default();
        let size = view.measure(
            MeasureSpec::Exactly(120.0),
            MeasureSpec::Unspecified,
            Size::new(48.0, 48.0),
        );
        assert_eq!(size, Size::new(120.0, 48.0));
    }
}
