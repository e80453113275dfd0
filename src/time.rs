//! Simulation clock advancement.
//!
//! Accumulates speed-scaled simulation time; the Earth-year counter is fed
//! by the orbital motion systems, not here.

use bevy::prelude::*;

use crate::types::SimulationClock;

/// Plugin providing clock advancement.
pub struct TimePlugin;

impl Plugin for TimePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SimulationClock>()
            .add_systems(Update, advance_clock);
    }
}

/// Advance the simulation clock based on speed and pause state.
fn advance_clock(mut clock: ResMut<SimulationClock>, time: Res<Time>) {
    if clock.paused {
        return;
    }

    let dt = time.delta_secs() * clock.speed();
    clock.elapsed_sim += dt as f64;
}
