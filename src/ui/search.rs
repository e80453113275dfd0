//! Body search panel.
//!
//! A small floating window with a text field and live substring results.
//! Picking a result selects and focuses the body; the `/` shortcut moves
//! keyboard focus into the field from anywhere. The result list stays up
//! for a short grace period after the field loses focus so a click on a
//! result still lands.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::camera::FocusRequest;
use crate::catalog::{self, BodyId};
use crate::scene::SelectedBody;
use crate::ui::icons;

/// Seconds the result list survives after the field loses focus.
const DISMISS_DELAY: f32 = 0.2;

/// Search field state.
#[derive(Resource, Default)]
pub struct SearchState {
    pub query: String,
    /// Set by the keyboard shortcut; consumed when focus is applied.
    pub focus_requested: bool,
    results_open: bool,
    dismiss_timer: Option<f32>,
}

impl SearchState {
    /// Feed per-frame focus state. Focus opens the results immediately;
    /// losing focus starts the dismissal countdown instead of closing
    /// right away, so a click on a result still goes through.
    pub fn update_focus(&mut self, has_focus: bool, lost_focus: bool, dt: f32) {
        if has_focus {
            self.results_open = true;
            self.dismiss_timer = None;
            return;
        }
        if lost_focus {
            self.dismiss_timer = Some(DISMISS_DELAY);
        }
        if let Some(remaining) = self.dismiss_timer {
            let remaining = remaining - dt;
            if remaining <= 0.0 {
                self.results_open = false;
                self.dismiss_timer = None;
            } else {
                self.dismiss_timer = Some(remaining);
            }
        }
    }

    pub fn results_visible(&self) -> bool {
        self.results_open && !self.query.trim().is_empty()
    }
}

/// System rendering the search window in the top-left corner.
pub fn search_panel_system(
    mut contexts: EguiContexts,
    mut search: ResMut<SearchState>,
    mut selected: ResMut<SelectedBody>,
    mut focus: MessageWriter<FocusRequest>,
    time: Res<Time>,
) {
    let Some(ctx) = contexts.ctx_mut().ok() else {
        return;
    };
    let dt = time.delta_secs();

    egui::Window::new("search")
        .title_bar(false)
        .resizable(false)
        .anchor(egui::Align2::LEFT_TOP, egui::vec2(12.0, 12.0))
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(icons::SEARCH).size(16.0));
                let response = ui.add(
                    egui::TextEdit::singleline(&mut search.query)
                        .hint_text("Search bodies (/)")
                        .desired_width(160.0),
                );
                if search.focus_requested {
                    response.request_focus();
                    search.focus_requested = false;
                }
                search.update_focus(response.has_focus(), response.lost_focus(), dt);
                if !search.query.is_empty()
                    && ui.small_button(icons::CLOSE).on_hover_text("Clear").clicked()
                {
                    search.query.clear();
                }
            });

            if !search.results_visible() {
                return;
            }

            let results = catalog::search(&search.query);
            if results.is_empty() {
                ui.weak("No matches");
                return;
            }

            for id in results {
                let facts = catalog::facts(id);
                let icon = if id == BodyId::Sun {
                    icons::SUN
                } else {
                    icons::PLANET
                };
                let label = format!("{icon} {}  ·  {}", facts.name, facts.category);
                if ui.selectable_label(selected.id == Some(id), label).clicked() {
                    selected.id = Some(id);
                    focus.write(FocusRequest { target: id });
                    search.query.clear();
                }
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typing_state() -> SearchState {
        let mut search = SearchState {
            query: "mar".to_string(),
            ..Default::default()
        };
        search.update_focus(true, false, 1.0 / 60.0);
        search
    }

    #[test]
    fn test_results_need_both_focus_and_query() {
        let mut search = SearchState::default();
        assert!(!search.results_visible());

        search.update_focus(true, false, 1.0 / 60.0);
        assert!(!search.results_visible());

        search.query = "mar".to_string();
        assert!(search.results_visible());
    }

    #[test]
    fn test_results_survive_the_grace_period() {
        let mut search = typing_state();

        // Blur frame, then a few frames inside the grace window
        search.update_focus(false, true, 1.0 / 60.0);
        for _ in 0..5 {
            search.update_focus(false, false, 1.0 / 60.0);
        }
        assert!(search.results_visible());
    }

    #[test]
    fn test_results_dismissed_after_the_delay() {
        let mut search = typing_state();

        search.update_focus(false, true, 1.0 / 60.0);
        for _ in 0..30 {
            search.update_focus(false, false, 1.0 / 60.0);
        }
        assert!(!search.results_visible());
        assert!(!search.query.is_empty());
    }

    #[test]
    fn test_refocus_cancels_pending_dismissal() {
        let mut search = typing_state();

        search.update_focus(false, true, 1.0 / 60.0);
        search.update_focus(true, false, 1.0 / 60.0);
        for _ in 0..30 {
            search.update_focus(true, false, 1.0 / 60.0);
        }
        assert!(search.results_visible());
    }
}
