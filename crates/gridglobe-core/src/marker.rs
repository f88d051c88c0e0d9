//! Marker visual state machine.
//!
//! Each marker's target size, glow, opacity, and color are a pure function
//! of two booleans: is this race selected, and is the pointer over this
//! marker. Only the approach to the target is frame-dependent: displayed
//! values chase their targets with a fixed-factor exponential step, so a
//! tier change plays out as a smooth transition instead of a pop.

/// Per-frame easing factor. The step `current += (target - current) * f`
/// with `f` in (0, 1) converges monotonically and never overshoots. The step
/// is frame-coupled, not wall-clock-coupled; see DESIGN.md.
pub const SMOOTHING_FACTOR: f32 = 0.2;

/// Discrete visual tier for a marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerTier {
    /// Not selected, not hovered.
    Neutral,
    /// Pointer is over this marker.
    Hovered,
    /// This race holds the selection slot.
    Selected,
}

impl MarkerTier {
    /// Derive the tier from the shared selection state and the marker's own
    /// hover flag. Selection outranks hover.
    #[must_use]
    pub fn from_state(selected: bool, hovered_self: bool) -> Self {
        if selected {
            Self::Selected
        } else if hovered_self {
            Self::Hovered
        } else {
            Self::Neutral
        }
    }

    /// Target marker radius, in globe units.
    #[must_use]
    pub fn size(self) -> f32 {
        match self {
            Self::Neutral => 0.04,
            Self::Hovered => 0.05,
            Self::Selected => 0.06,
        }
    }

    /// Target glow shell radius, in globe units.
    #[must_use]
    pub fn glow_size(self) -> f32 {
        match self {
            Self::Neutral => 0.07,
            Self::Hovered => 0.09,
            Self::Selected => 0.11,
        }
    }

    /// Glow shell opacity. Discrete per tier, never eased.
    #[must_use]
    pub fn glow_opacity(self) -> f32 {
        match self {
            Self::Neutral => 0.25,
            Self::Hovered => 0.4,
            Self::Selected => 0.5,
        }
    }

    /// Categorical marker color (sRGB): blue / amber / red.
    #[must_use]
    pub fn color(self) -> [f32; 3] {
        match self {
            Self::Neutral => [0.231, 0.510, 0.965],
            Self::Hovered => [0.961, 0.620, 0.043],
            Self::Selected => [0.937, 0.267, 0.267],
        }
    }
}

/// Continuously eased display values for one marker.
///
/// Owned by that marker alone and advanced once per rendered frame. Targets
/// are re-derived from the shared state every frame, so the easing always
/// lags a state change by exactly one frame.
#[derive(Debug, Clone)]
pub struct MarkerVisual {
    pub current_size: f32,
    pub current_glow_size: f32,
}

impl Default for MarkerVisual {
    fn default() -> Self {
        Self {
            current_size: MarkerTier::Neutral.size(),
            current_glow_size: MarkerTier::Neutral.glow_size(),
        }
    }
}

impl MarkerVisual {
    /// Advance both displayed values one frame toward the tier's targets.
    pub fn step(&mut self, tier: MarkerTier) {
        self.current_size = ease(self.current_size, tier.size());
        self.current_glow_size = ease(self.current_glow_size, tier.glow_size());
    }
}

fn ease(current: f32, target: f32) -> f32 {
    current + (target - current) * SMOOTHING_FACTOR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_derivation_prefers_selection() {
        assert_eq!(MarkerTier::from_state(false, false), MarkerTier::Neutral);
        assert_eq!(MarkerTier::from_state(false, true), MarkerTier::Hovered);
        assert_eq!(MarkerTier::from_state(true, false), MarkerTier::Selected);
        assert_eq!(MarkerTier::from_state(true, true), MarkerTier::Selected);
    }

    #[test]
    fn easing_converges_without_overshoot() {
        let mut visual = MarkerVisual::default();
        let target = MarkerTier::Selected.size();

        let mut previous = visual.current_size;
        for _ in 0..200 {
            visual.step(MarkerTier::Selected);
            // Monotonic approach from below; never past the target.
            assert!(visual.current_size >= previous);
            assert!(visual.current_size <= target);
            previous = visual.current_size;
        }
        assert!((visual.current_size - target).abs() < 1e-4);
    }

    #[test]
    fn easing_converges_from_above() {
        let mut visual = MarkerVisual {
            current_size: MarkerTier::Selected.size(),
            current_glow_size: MarkerTier::Selected.glow_size(),
        };
        for _ in 0..200 {
            visual.step(MarkerTier::Neutral);
            assert!(visual.current_size >= MarkerTier::Neutral.size());
        }
        assert!((visual.current_size - MarkerTier::Neutral.size()).abs() < 1e-4);
        assert!((visual.current_glow_size - MarkerTier::Neutral.glow_size()).abs() < 1e-4);
    }
}
