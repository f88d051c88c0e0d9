//! Shared hover/selection state machine.
//!
//! One value per globe instance, read by every marker and the scene
//! controller. Markers never hold an "am I selected" flag of their own;
//! they compare their race id against this state each frame, which keeps
//! the single-selection invariant trivially true.

/// Result of dispatching a click to a handler.
///
/// The dispatch layer consumes this instead of relying on a framework's
/// event-bubbling suppression: a `Handled` click must not reach the globe
/// body's clear-selection handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The click was consumed; stop propagation.
    Handled,
    /// The click was not consumed; let it continue.
    Unhandled,
}

/// Process-wide interaction state for one globe.
#[derive(Debug, Clone, Default)]
pub struct InteractionState {
    /// The sole selection slot. At most one race id at any time.
    selected: Option<&'static str>,
    /// Whether some marker is currently hovered. Identity is not tracked;
    /// this flag exists only to suppress idle rotation.
    hovered_any: bool,
}

impl InteractionState {
    /// Currently selected race id, if any.
    #[must_use]
    pub fn selected(&self) -> Option<&'static str> {
        self.selected
    }

    /// Whether the given race holds the selection slot.
    #[must_use]
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected == Some(id)
    }

    /// Whether any marker is hovered.
    #[must_use]
    pub fn hovered_any(&self) -> bool {
        self.hovered_any
    }

    /// Idle rotation stops while something is selected or hovered.
    #[must_use]
    pub fn idle_rotation_suppressed(&self) -> bool {
        self.selected.is_some() || self.hovered_any
    }

    /// Click on a marker: toggle semantics. Clicking the already-selected
    /// race clears the slot; clicking any other race takes it over.
    pub fn click_marker(&mut self, id: &'static str) -> ClickOutcome {
        if self.selected == Some(id) {
            self.selected = None;
        } else {
            self.selected = Some(id);
        }
        ClickOutcome::Handled
    }

    /// Click on the globe body: always clears, never sets.
    pub fn click_globe(&mut self) {
        self.selected = None;
    }

    /// Pointer entered some marker.
    pub fn pointer_enter(&mut self) {
        self.hovered_any = true;
    }

    /// Pointer left the marker it was over.
    pub fn pointer_leave(&mut self) {
        self.hovered_any = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_click_toggles() {
        let mut state = InteractionState::default();

        assert_eq!(state.click_marker("bahrain"), ClickOutcome::Handled);
        assert_eq!(state.selected(), Some("bahrain"));

        assert_eq!(state.click_marker("bahrain"), ClickOutcome::Handled);
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn selecting_another_race_replaces_the_slot() {
        let mut state = InteractionState::default();
        state.click_marker("bahrain");
        state.click_marker("monaco");

        assert_eq!(state.selected(), Some("monaco"));
        assert!(!state.is_selected("bahrain"));
        assert!(state.is_selected("monaco"));
    }

    #[test]
    fn globe_click_only_clears() {
        let mut state = InteractionState::default();
        state.click_globe();
        assert_eq!(state.selected(), None);

        state.click_marker("monza");
        state.click_globe();
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn rotation_suppression_tracks_both_inputs() {
        let mut state = InteractionState::default();
        assert!(!state.idle_rotation_suppressed());

        state.pointer_enter();
        assert!(state.idle_rotation_suppressed());
        state.pointer_leave();
        assert!(!state.idle_rotation_suppressed());

        state.click_marker("spain");
        assert!(state.idle_rotation_suppressed());
        state.click_globe();
        assert!(!state.idle_rotation_suppressed());
    }
}
