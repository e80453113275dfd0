//! Core simulation types shared across the visualization.

use bevy::prelude::*;

/// Minimum simulation speed multiplier.
pub const MIN_SPEED: f32 = 0.1;

/// Maximum simulation speed multiplier.
pub const MAX_SPEED: f32 = 5.0;

/// Default simulation speed multiplier.
pub const DEFAULT_SPEED: f32 = 1.0;

/// Simulation clock resource tracking speed, pause state, and elapsed time.
///
/// All orbital motion scales by `speed`; camera animation and the guided
/// tour run on raw frame time and keep moving while paused.
#[derive(Resource, Clone, Debug)]
pub struct SimulationClock {
    /// Speed multiplier, clamped to [`MIN_SPEED`, `MAX_SPEED`].
    speed: f32,
    /// Whether orbital motion is paused.
    pub paused: bool,
    /// Total simulated seconds elapsed (speed-scaled).
    pub elapsed_sim: f64,
    /// Accumulated Earth orbit angle in radians. One full turn = one Earth year
    /// on the HUD readout.
    pub earth_angle_total: f64,
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self {
            speed: DEFAULT_SPEED,
            paused: false,
            elapsed_sim: 0.0,
            earth_angle_total: 0.0,
        }
    }
}

impl SimulationClock {
    /// Current speed multiplier.
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Set the speed multiplier, clamping to the supported range.
    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed.clamp(MIN_SPEED, MAX_SPEED);
    }

    /// Speed-scaled delta for this frame, or zero while paused.
    pub fn scaled_delta(&self, delta_secs: f32) -> f32 {
        if self.paused {
            0.0
        } else {
            self.speed * delta_secs
        }
    }

    /// Elapsed Earth years derived from the accumulated Earth orbit angle.
    pub fn earth_years(&self) -> f64 {
        self.earth_angle_total / std::f64::consts::TAU
    }
}

/// Visibility and mode flags for the scene.
///
/// Simple flags are flipped directly by UI/keyboard; toggles with side
/// effects (trails, comparison, scale, gravity) go through messages so a
/// single handler owns the transition.
#[derive(Resource, Clone, Debug)]
pub struct ViewToggles {
    /// Orbit path overlays visible.
    pub orbits: bool,
    /// Trail recording/rendering enabled.
    pub trails: bool,
    /// Constellation overlay visible.
    pub constellations: bool,
    /// Spacecraft trajectory overlay visible.
    pub spacecraft: bool,
    /// Gravity simulation replaces Keplerian motion.
    pub gravity: bool,
    /// Size-comparison lineup active.
    pub comparison: bool,
    /// Realistic orbit distances instead of the compressed layout.
    pub realistic_scale: bool,
    /// Picture-in-picture viewport active.
    pub pip: bool,
}

impl Default for ViewToggles {
    fn default() -> Self {
        Self {
            orbits: true,
            trails: true,
            constellations: false,
            spacecraft: false,
            gravity: false,
            comparison: false,
            realistic_scale: false,
            pip: false,
        }
    }
}

/// Hermite smooth-step easing, `t² (3 − 2t)` on [0, 1].
pub fn smooth_step(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_speed_clamps_low() {
        let mut clock = SimulationClock::default();
        clock.set_speed(-5.0);
        assert_eq!(clock.speed(), MIN_SPEED);
    }

    #[test]
    fn test_speed_clamps_high() {
        let mut clock = SimulationClock::default();
        clock.set_speed(100.0);
        assert_eq!(clock.speed(), MAX_SPEED);
    }

    #[test]
    fn test_speed_in_range_unchanged() {
        let mut clock = SimulationClock::default();
        clock.set_speed(2.5);
        assert_eq!(clock.speed(), 2.5);
    }

    #[test]
    fn test_scaled_delta_zero_while_paused() {
        let mut clock = SimulationClock::default();
        clock.set_speed(3.0);
        clock.paused = true;
        assert_eq!(clock.scaled_delta(0.016), 0.0);
    }

    #[test]
    fn test_scaled_delta_applies_speed() {
        let mut clock = SimulationClock::default();
        clock.set_speed(2.0);
        assert_relative_eq!(clock.scaled_delta(0.5), 1.0);
    }

    #[test]
    fn test_earth_years_full_turn() {
        let mut clock = SimulationClock::default();
        clock.earth_angle_total = std::f64::consts::TAU;
        assert_relative_eq!(clock.earth_years(), 1.0);
    }

    #[test]
    fn test_smooth_step_endpoints() {
        assert_eq!(smooth_step(0.0), 0.0);
        assert_eq!(smooth_step(1.0), 1.0);
        assert_eq!(smooth_step(0.5), 0.5);
    }

    #[test]
    fn test_smooth_step_clamps() {
        assert_eq!(smooth_step(-1.0), 0.0);
        assert_eq!(smooth_step(2.0), 1.0);
    }

    #[test]
    fn test_default_toggles() {
        let toggles = ViewToggles::default();
        assert!(toggles.orbits);
        assert!(toggles.trails);
        assert!(!toggles.gravity);
        assert!(!toggles.comparison);
    }
}
