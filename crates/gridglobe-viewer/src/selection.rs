//! Shared interaction state and the selection-changed output.
//!
//! The core state machine lives in `gridglobe-core`; this module wraps it in
//! a Bevy resource and pushes a message whenever the selection slot changes.
//! That message is the only data the globe core sends outward.

use bevy::ecs::message::{Message, MessageWriter};
use bevy::prelude::*;

use gridglobe_core::InteractionState;

/// The single interaction state shared by every marker and the globe body.
#[derive(Resource, Default, Deref, DerefMut)]
pub struct GlobeInteraction(pub InteractionState);

/// Emitted when the selection slot changes. Carries the newly selected race
/// id (or `None` when cleared) so the detail panel can key its lookup on it.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionChanged {
    pub selected: Option<&'static str>,
}

/// Plugin for selection state and change notifications.
pub struct SelectionPlugin;

impl Plugin for SelectionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GlobeInteraction>()
            .add_message::<SelectionChanged>()
            .add_systems(Update, emit_selection_changes);
    }
}

/// Emit a `SelectionChanged` message whenever the slot differs from the
/// previous frame.
#[allow(clippy::needless_pass_by_value)]
fn emit_selection_changes(
    interaction: Res<GlobeInteraction>,
    mut previous: Local<Option<&'static str>>,
    mut writer: MessageWriter<SelectionChanged>,
) {
    let selected = interaction.selected();
    if selected != *previous {
        tracing::info!(?selected, "selection changed");
        writer.write(SelectionChanged { selected });
        *previous = selected;
    }
}
