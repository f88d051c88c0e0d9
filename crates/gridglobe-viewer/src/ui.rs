//! Season and race-detail side panels.
//!
//! Left panel shows season-level totals; right panel shows the selected
//! race's emissions breakdown, keyed by the shared selection state.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, EguiPlugin, EguiPrimaryContextPass, egui};

use gridglobe_core::emissions::{BASELINE_2018, TOTAL_2024, emissions_for_race};
use gridglobe_core::season::{SEASON_2024, race_by_id};

use crate::selection::GlobeInteraction;

/// Plugin for the side panels.
pub struct PanelUiPlugin;

impl Plugin for PanelUiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin::default())
            .add_systems(EguiPrimaryContextPass, panels_system);
    }
}

/// Render both side panels.
#[allow(clippy::needless_pass_by_value)]
fn panels_system(mut contexts: EguiContexts, interaction: Res<GlobeInteraction>) -> Result {
    let ctx = contexts.ctx_mut()?;

    // Hover affordance for the marker under the pointer.
    if interaction.hovered_any() {
        ctx.set_cursor_icon(egui::CursorIcon::PointingHand);
    }

    egui::SidePanel::left("season_panel")
        .default_width(220.0)
        .show(ctx, |ui| {
            ui.heading("2024 Season");
            ui.separator();

            ui.label("Season total");
            ui.strong(format!("{} tCO2e", format_tons(TOTAL_2024)));
            ui.add_space(8.0);

            ui.label("Races");
            ui.strong(SEASON_2024.len().to_string());
            ui.add_space(8.0);

            let delta =
                (TOTAL_2024 - BASELINE_2018.total_emissions) / BASELINE_2018.total_emissions;
            ui.label("vs 2018 baseline");
            ui.strong(format!("{:+.0}%", delta * 100.0));
        });

    egui::SidePanel::right("race_panel")
        .default_width(260.0)
        .show(ctx, |ui| {
            ui.heading("Selected Race");
            ui.separator();

            let Some(race) = interaction.selected().and_then(race_by_id) else {
                ui.label("Click a marker to view details");
                return;
            };

            ui.label(race.country);
            ui.strong(race.name);
            ui.label(race.circuit);
            ui.label(race.date);
            ui.add_space(8.0);

            if let Some(emissions) = emissions_for_race(race.id) {
                ui.label("Race weekend emissions");
                ui.strong(format!("{} tCO2e", format_tons(emissions.total())));
                ui.add_space(8.0);

                ui.label("Breakdown");
                let rows = [
                    ("Logistics", emissions.logistics),
                    ("Team travel", emissions.team_travel),
                    ("Event ops", emissions.event_operations),
                    ("Broadcast", emissions.broadcast),
                    ("Cars on track", emissions.car_emissions),
                ];
                for (label, value) in rows {
                    ui.horizontal(|ui| {
                        ui.label(label);
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            ui.label(format!("{} tCO2e", format_tons(value)));
                        });
                    });
                }
            }
        });

    Ok(())
}

/// Format a tonnage with thousands separators, e.g. `168,720`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn format_tons(value: f64) -> String {
    let whole = value.round().max(0.0) as u64;
    let digits = whole.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tons_formatting_groups_thousands() {
        assert_eq!(format_tons(0.0), "0");
        assert_eq!(format_tons(520.0), "520");
        assert_eq!(format_tons(6600.0), "6,600");
        assert_eq!(format_tons(168_720.0), "168,720");
    }
}
