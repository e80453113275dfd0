//! Guided tour across all ten bodies.
//!
//! Starting a tour focuses the Sun, then advances Sun-to-Pluto with a fixed
//! dwell time per stop, wrapping around until stopped. Each stop fires a
//! focus request and selects the body so the info panel follows along.

use bevy::prelude::*;

use crate::camera::{FocusRequest, ResetView};
use crate::catalog::BodyId;
use crate::scene::{SelectedBody, ToggleTour};

/// Seconds spent at each stop.
pub const TOUR_DWELL: f32 = 5.0;

/// Visit order, inner to outer.
pub const TOUR_ORDER: [BodyId; 10] = BodyId::ALL;

/// State of the guided tour.
#[derive(Resource, Default)]
pub struct TourState {
    pub active: bool,
    pub index: usize,
    pub timer: f32,
}

impl TourState {
    pub fn current_stop(&self) -> Option<BodyId> {
        self.active.then(|| TOUR_ORDER[self.index % TOUR_ORDER.len()])
    }

    /// Advance to the next stop, wrapping at the end.
    pub fn advance(&mut self) {
        self.index = (self.index + 1) % TOUR_ORDER.len();
        self.timer = 0.0;
    }
}

/// Plugin running the guided tour.
pub struct TourPlugin;

impl Plugin for TourPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TourState>()
            .add_systems(Update, (handle_tour_toggle, run_tour).chain());
    }
}

/// Start or stop the tour; a view reset also stops it.
fn handle_tour_toggle(
    mut toggle_messages: MessageReader<ToggleTour>,
    mut reset_messages: MessageReader<ResetView>,
    mut tour: ResMut<TourState>,
    mut selected: ResMut<SelectedBody>,
    mut focus: MessageWriter<FocusRequest>,
) {
    for _ in toggle_messages.read() {
        if tour.active {
            tour.active = false;
            info!("Tour stopped at {:?}", TOUR_ORDER[tour.index]);
        } else {
            tour.active = true;
            tour.index = 0;
            tour.timer = 0.0;
            focus.write(FocusRequest {
                target: TOUR_ORDER[0],
            });
            selected.id = Some(TOUR_ORDER[0]);
            info!("Tour started");
        }
    }

    if reset_messages.read().next().is_some() && tour.active {
        tour.active = false;
        info!("Tour stopped by view reset");
    }
}

/// Dwell at the current stop, then focus the next body.
///
/// The timer runs on wall-clock time so the tour keeps moving even while
/// the simulation is paused.
fn run_tour(
    time: Res<Time>,
    mut tour: ResMut<TourState>,
    mut selected: ResMut<SelectedBody>,
    mut focus: MessageWriter<FocusRequest>,
) {
    if !tour.active {
        return;
    }

    tour.timer += time.delta_secs();
    if tour.timer < TOUR_DWELL {
        return;
    }

    tour.advance();
    let stop = TOUR_ORDER[tour.index];
    focus.write(FocusRequest { target: stop });
    selected.id = Some(stop);
}
