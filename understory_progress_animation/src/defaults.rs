// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use crate::{AnimationOrchestrator, ProgressAnimator};

/// Time for one full turn of the default rotation.
pub const DEFAULT_ROTATION_DURATION: Duration = Duration::from_millis(2000);

/// Time for the default arches to open.
pub const DEFAULT_EXPANSION_DURATION: Duration = Duration::from_millis(250);

/// Expansion as the setup step, endless rotation as the progress step,
/// with default durations.
#[must_use]
pub fn default_orchestrator() -> AnimationOrchestrator {
    default_orchestrator_with(DEFAULT_ROTATION_DURATION, DEFAULT_EXPANSION_DURATION)
}

/// Like [`default_orchestrator`] with explicit durations.
#[must_use]
pub fn default_orchestrator_with(rotation: Duration, expansion: Duration) -> AnimationOrchestrator {
    AnimationOrchestrator::single(
        ProgressAnimator::expansion(expansion),
        ProgressAnimator::rotation(rotation),
    )
}
