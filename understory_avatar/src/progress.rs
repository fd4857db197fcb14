// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use understory_progress_animation::{
    AnimationDrawingState, AnimationDriver, AnimationOrchestrator, AnimatorInterface,
    FrameScheduler, ManualFrames, Phase, default_orchestrator,
};

use crate::{AvatarStyle, CircleBadgeView, RenderPlan};

/// Badge view plus the ring state the orchestrator writes into.
#[derive(Debug)]
struct RingSurface {
    view: CircleBadgeView,
    state: AnimationDrawingState,
}

impl AnimatorInterface for RingSurface {
    fn update_animation_state(
        &mut self,
        reducer: &dyn Fn(AnimationDrawingState) -> AnimationDrawingState,
    ) {
        let next = reducer(self.state);
        if next != self.state {
            self.state = next;
            self.view.request_paint();
        }
    }
}

/// A [`CircleBadgeView`] with an animated progress ring around it.
///
/// Call [`start_progress`](Self::start_progress) to expand the arches and spin
/// the ring, [`stop_progress`](Self::stop_progress) to collapse them, and feed
/// frames with [`on_frame`](Self::on_frame) whenever the scheduler asked for one.
///
/// ```rust
/// use std::time::Duration;
/// use kurbo::Size;
/// use understory_avatar::{AvatarStyle, CircleProgressView};
/// use understory_progress_animation::Phase;
///
/// let mut view = CircleProgressView::new(AvatarStyle::default());
/// view.view_mut().set_size(Size::new(96.0, 96.0));
/// view.start_progress();
///
/// while view.scheduler_mut().take_request() && view.phase() == Phase::SetupRunning {
///     view.on_frame(Duration::from_millis(125));
/// }
/// assert!(view.is_setup_complete());
/// assert_eq!(view.animation_state().arches_expansion_progress, 1.0);
/// ```
#[derive(Debug)]
pub struct CircleProgressView<S = ManualFrames> {
    surface: RingSurface,
    driver: AnimationDriver<S>,
    setup_complete: Rc<Cell<bool>>,
}

impl CircleProgressView<ManualFrames> {
    /// A progress avatar with the default orchestrator and a manual frame flag.
    #[must_use]
    pub fn new(style: AvatarStyle) -> Self {
        Self::with_orchestrator(style, default_orchestrator(), ManualFrames::default())
    }
}

impl<S: FrameScheduler> CircleProgressView<S> {
    /// A progress avatar driven by `orchestrator`, asking `scheduler` for frames.
    #[must_use]
    pub fn with_orchestrator(
        style: AvatarStyle,
        mut orchestrator: AnimationOrchestrator,
        scheduler: S,
    ) -> Self {
        let setup_complete = Rc::new(Cell::new(false));
        let flag = Rc::clone(&setup_complete);
        orchestrator.attach(move || flag.set(true));
        Self {
            surface: RingSurface {
                view: CircleBadgeView::new(style),
                state: AnimationDrawingState::REST,
            },
            driver: AnimationDriver::new(orchestrator, scheduler),
            setup_complete,
        }
    }

    /// The wrapped badge view.
    #[must_use]
    pub fn view(&self) -> &CircleBadgeView {
        &self.surface.view
    }

    /// Mutable access to the wrapped badge view.
    pub fn view_mut(&mut self) -> &mut CircleBadgeView {
        &mut self.surface.view
    }

    /// Current ring state.
    #[must_use]
    pub fn animation_state(&self) -> AnimationDrawingState {
        self.surface.state
    }

    /// Current orchestrator phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.driver.phase()
    }

    /// Returns `true` once the setup group of the current run has finished.
    #[must_use]
    pub fn is_setup_complete(&self) -> bool {
        self.setup_complete.get()
    }

    /// The frame scheduler.
    #[must_use]
    pub fn scheduler(&self) -> &S {
        self.driver.scheduler()
    }

    /// Mutable access to the frame scheduler.
    pub fn scheduler_mut(&mut self) -> &mut S {
        self.driver.scheduler_mut()
    }

    /// Starts the ring from the beginning.
    pub fn start_progress(&mut self) {
        self.setup_complete.set(false);
        self.driver.start();
    }

    /// Collapses the arches; the ring goes idle once they are gone.
    pub fn stop_progress(&mut self) {
        self.driver.reverse();
    }

    /// Stops immediately, keeping the last drawn state.
    pub fn cancel_progress(&mut self) {
        self.driver.cancel();
    }

    /// Advances the animation by one frame. Returns `true` if another frame is needed.
    pub fn on_frame(&mut self, dt: Duration) -> bool {
        self.driver.on_tick(dt, &mut self.surface)
    }

    /// Builds the op list for the avatar and its ring.
    pub fn paint(&mut self) -> RenderPlan {
        let state = self.surface.state;
        self.surface.view.paint_with(Some(&state))
    }
}

impl<S> AnimatorInterface for CircleProgressView<S> {
    fn update_animation_state(
        &mut self,
        reducer: &dyn Fn(AnimationDrawingState) -> AnimationDrawingState,
    ) {
        self.surface.update_animation_state(reducer);
    }
}
