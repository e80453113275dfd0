//! Info panel showing facts about the selected body.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::catalog::{self, BodyFacts};
use crate::scene::{SelectedBody, TourState};
use crate::scene::tour::TOUR_ORDER;
use crate::ui::icons;

/// System that renders the info panel on the right while a body is selected.
pub fn info_panel_system(
    mut contexts: EguiContexts,
    mut selected: ResMut<SelectedBody>,
    tour: Res<TourState>,
) {
    let Some(ctx) = contexts.ctx_mut().ok() else {
        return;
    };

    let Some(id) = selected.id else {
        return;
    };
    let facts = catalog::facts(id);

    let mut close_requested = false;

    egui::SidePanel::right("info_panel")
        .exact_width(260.0)
        .resizable(false)
        .show(ctx, |ui| {
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                let [r, g, b] = facts.rgb;
                ui.colored_label(
                    egui::Color32::from_rgb(r, g, b),
                    egui::RichText::new(facts.name).size(22.0).strong(),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.small_button(icons::CLOSE).clicked() {
                        close_requested = true;
                    }
                });
            });
            ui.weak(facts.category);

            if tour.active {
                ui.add_space(4.0);
                ui.label(
                    egui::RichText::new(format!(
                        "{} Tour stop {} / {}",
                        icons::TOUR,
                        tour.index + 1,
                        TOUR_ORDER.len()
                    ))
                    .color(egui::Color32::from_rgb(100, 181, 246)),
                );
            }

            ui.separator();
            fact_rows(ui, facts);

            ui.separator();
            ui.label(egui::RichText::new("Did you know?").strong());
            ui.label(facts.fact);
        });

    if close_requested {
        selected.id = None;
    }
}

/// Two-column grid of the numeric facts.
fn fact_rows(ui: &mut egui::Ui, facts: &BodyFacts) {
    egui::Grid::new("facts_grid")
        .num_columns(2)
        .spacing([12.0, 6.0])
        .show(ui, |ui| {
            for (label, value) in [
                ("Diameter", facts.diameter),
                ("Mass", facts.mass),
                ("Distance", facts.distance),
                ("Period", facts.period),
                ("Moons", facts.moons),
                ("Temperature", facts.temperature),
                ("Atmosphere", facts.atmosphere),
            ] {
                ui.weak(label);
                ui.label(value);
                ui.end_row();
            }
        });
}
