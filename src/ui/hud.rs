//! Heads-up display: elapsed Earth years, mode badges, loading progress,
//! and the hover label that follows the cursor.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::assets::LoadingProgress;
use crate::catalog;
use crate::scene::HoveredBody;
use crate::types::{SimulationClock, ViewToggles};

/// System rendering the HUD overlay in the top-right corner.
pub fn hud_system(
    mut contexts: EguiContexts,
    clock: Res<SimulationClock>,
    toggles: Res<ViewToggles>,
    progress: Res<LoadingProgress>,
    hovered: Res<HoveredBody>,
) {
    let Some(ctx) = contexts.ctx_mut().ok() else {
        return;
    };

    egui::Area::new(egui::Id::new("hud"))
        .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-12.0, 12.0))
        .show(ctx, |ui| {
            egui::Frame::new()
                .fill(egui::Color32::from_rgba_premultiplied(16, 18, 30, 200))
                .corner_radius(6)
                .inner_margin(egui::Margin::same(8))
                .show(ui, |ui| {
                    ui.label(
                        egui::RichText::new(format!("Year {:.2}", clock.earth_years()))
                            .monospace()
                            .size(14.0),
                    );

                    if clock.paused {
                        ui.colored_label(egui::Color32::from_rgb(221, 170, 85), "Paused");
                    }

                    let mut badges: Vec<&str> = Vec::new();
                    if toggles.gravity {
                        badges.push("Gravity");
                    }
                    if toggles.realistic_scale {
                        badges.push("Realistic scale");
                    }
                    if toggles.comparison {
                        badges.push("Comparison");
                    }
                    for badge in badges {
                        ui.weak(badge);
                    }

                    if !progress.complete() {
                        ui.add(
                            egui::ProgressBar::new(progress.fraction())
                                .desired_width(120.0)
                                .text("loading textures"),
                        );
                    }
                });
        });

    render_hover_label(ctx, &hovered);
}

/// Body name floating next to the cursor while hovering.
fn render_hover_label(ctx: &egui::Context, hovered: &HoveredBody) {
    let Some(id) = hovered.id else {
        return;
    };
    let Some(pointer) = ctx.pointer_latest_pos() else {
        return;
    };

    let facts = catalog::facts(id);
    let [r, g, b] = facts.rgb;
    let name = if id == catalog::BodyId::Pluto {
        format!("{} (Dwarf)", facts.name)
    } else {
        facts.name.to_string()
    };

    egui::Area::new(egui::Id::new("hover_label"))
        .fixed_pos(pointer + egui::vec2(14.0, -6.0))
        .order(egui::Order::Tooltip)
        .show(ctx, |ui| {
            egui::Frame::new()
                .fill(egui::Color32::from_rgba_premultiplied(16, 18, 30, 220))
                .corner_radius(4)
                .inner_margin(egui::Margin::symmetric(6, 3))
                .show(ui, |ui| {
                    ui.colored_label(egui::Color32::from_rgb(r, g, b), name);
                });
        });
}
