//! Moons orbiting their primaries.
//!
//! Nine moons with circular orbits relative to their planet's current
//! position: Earth's Moon, the four Galilean moons, Titan, Phobos, Deimos,
//! and Triton (retrograde). Gravity mode leaves the relative motion alone;
//! moons simply follow wherever their primary ends up.

use bevy::prelude::*;

use crate::catalog::BodyId;
use crate::scene::bodies::{CelestialBody, OrbitState};
use crate::types::{SimulationClock, ViewToggles};

/// Vertical motion of a moon relative to its orbit plane.
#[derive(Clone, Copy, Debug)]
pub enum VerticalMotion {
    /// Sinusoidal bob: `sin(angle * ratio) * amplitude`.
    Bob { ratio: f32, amplitude: f32 },
    /// Constant offset from the primary's plane.
    Fixed(f32),
}

/// Component for a moon following a primary body.
#[derive(Component, Clone, Debug)]
pub struct Moon {
    pub primary: BodyId,
    pub orbit_radius: f32,
    /// Angle advance per scaled second; negative for retrograde orbits.
    pub rate: f32,
    pub angle: f32,
    pub vertical: VerticalMotion,
}

impl Moon {
    /// Offset from the primary at the current angle.
    pub fn offset(&self) -> Vec3 {
        let y = match self.vertical {
            VerticalMotion::Bob { ratio, amplitude } => (self.angle * ratio).sin() * amplitude,
            VerticalMotion::Fixed(offset) => offset,
        };
        Vec3::new(
            self.angle.cos() * self.orbit_radius,
            y,
            self.angle.sin() * self.orbit_radius,
        )
    }
}

struct MoonConfig {
    primary: BodyId,
    radius: f32,
    orbit_radius: f32,
    rate: f32,
    start_angle: f32,
    vertical: VerticalMotion,
    color: Color,
}

const FRAC_PI_2: f32 = std::f32::consts::FRAC_PI_2;
const PI: f32 = std::f32::consts::PI;

fn moon_configs() -> Vec<MoonConfig> {
    vec![
        MoonConfig {
            primary: BodyId::Earth,
            radius: 0.5,
            orbit_radius: 4.0,
            rate: 4.0,
            start_angle: 0.0,
            vertical: VerticalMotion::Bob {
                ratio: 0.5,
                amplitude: 0.5,
            },
            color: Color::srgb(0.67, 0.67, 0.67),
        },
        MoonConfig {
            primary: BodyId::Jupiter,
            radius: 0.4,
            orbit_radius: 7.5,
            rate: 3.0,
            start_angle: 0.0,
            vertical: VerticalMotion::Bob {
                ratio: 0.3,
                amplitude: 0.3,
            },
            color: Color::srgb_u8(204, 187, 68),
        },
        MoonConfig {
            primary: BodyId::Jupiter,
            radius: 0.35,
            orbit_radius: 9.5,
            rate: 2.25,
            start_angle: FRAC_PI_2,
            vertical: VerticalMotion::Bob {
                ratio: 0.3,
                amplitude: 0.3,
            },
            color: Color::srgb_u8(204, 204, 221),
        },
        MoonConfig {
            primary: BodyId::Jupiter,
            radius: 0.5,
            orbit_radius: 12.0,
            rate: 1.5,
            start_angle: PI,
            vertical: VerticalMotion::Bob {
                ratio: 0.3,
                amplitude: 0.3,
            },
            color: Color::srgb_u8(170, 153, 119),
        },
        MoonConfig {
            primary: BodyId::Jupiter,
            radius: 0.45,
            orbit_radius: 15.0,
            rate: 1.0,
            start_angle: PI * 1.5,
            vertical: VerticalMotion::Bob {
                ratio: 0.3,
                amplitude: 0.3,
            },
            color: Color::srgb_u8(136, 119, 102),
        },
        MoonConfig {
            primary: BodyId::Saturn,
            radius: 0.6,
            orbit_radius: 12.0,
            rate: 2.5,
            start_angle: 0.0,
            vertical: VerticalMotion::Bob {
                ratio: 0.4,
                amplitude: 0.5,
            },
            color: Color::srgb_u8(221, 170, 85),
        },
        MoonConfig {
            primary: BodyId::Mars,
            radius: 0.2,
            orbit_radius: 2.5,
            rate: 8.0,
            start_angle: 0.0,
            vertical: VerticalMotion::Fixed(0.1),
            color: Color::srgb_u8(153, 136, 119),
        },
        MoonConfig {
            primary: BodyId::Mars,
            radius: 0.12,
            orbit_radius: 3.5,
            rate: 3.0,
            start_angle: 0.0,
            vertical: VerticalMotion::Fixed(-0.1),
            color: Color::srgb_u8(136, 119, 102),
        },
        // Triton orbits Neptune retrograde
        MoonConfig {
            primary: BodyId::Neptune,
            radius: 0.5,
            orbit_radius: 5.0,
            rate: -2.0,
            start_angle: 0.0,
            vertical: VerticalMotion::Bob {
                ratio: 0.5,
                amplitude: 0.8,
            },
            color: Color::srgb_u8(170, 187, 204),
        },
    ]
}

/// Plugin spawning and updating moons.
pub struct MoonsPlugin;

impl Plugin for MoonsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_moons);
    }
}

fn spawn_moons(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let configs = moon_configs();
    let count = configs.len();

    for cfg in configs {
        commands.spawn((
            Mesh3d(meshes.add(Sphere::new(cfg.radius))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: cfg.color,
                perceptual_roughness: 0.9,
                metallic: 0.0,
                ..default()
            })),
            Transform::default(),
            Moon {
                primary: cfg.primary,
                orbit_radius: cfg.orbit_radius,
                rate: cfg.rate,
                angle: cfg.start_angle,
                vertical: cfg.vertical,
            },
        ));
    }

    info!("Spawned {count} moons");
}

/// Advance moon angles and position them relative to their primary.
pub fn update_moons(
    clock: Res<SimulationClock>,
    toggles: Res<ViewToggles>,
    time: Res<Time>,
    planets: Query<(&CelestialBody, &Transform), (With<OrbitState>, Without<Moon>)>,
    mut moons: Query<(&mut Moon, &mut Transform)>,
) {
    if clock.paused || toggles.comparison {
        return;
    }

    let t = clock.scaled_delta(time.delta_secs());

    for (mut moon, mut transform) in moons.iter_mut() {
        let Some((_, primary_transform)) =
            planets.iter().find(|(body, _)| body.id == moon.primary)
        else {
            continue;
        };

        moon.angle += moon.rate * t;
        transform.translation = primary_transform.translation + moon.offset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_offset_stays_on_orbit_radius() {
        let moon = Moon {
            primary: BodyId::Earth,
            orbit_radius: 4.0,
            rate: 4.0,
            angle: 1.1,
            vertical: VerticalMotion::Fixed(0.0),
        };
        let offset = moon.offset();
        assert_relative_eq!(offset.xz().length(), 4.0, epsilon = 1e-4);
    }

    #[test]
    fn test_fixed_vertical_offset() {
        let moon = Moon {
            primary: BodyId::Mars,
            orbit_radius: 2.5,
            rate: 8.0,
            angle: 0.7,
            vertical: VerticalMotion::Fixed(0.1),
        };
        assert_relative_eq!(moon.offset().y, 0.1);
    }

    #[test]
    fn test_bob_amplitude_bounds_vertical() {
        let mut moon = Moon {
            primary: BodyId::Neptune,
            orbit_radius: 5.0,
            rate: -2.0,
            angle: 0.0,
            vertical: VerticalMotion::Bob {
                ratio: 0.5,
                amplitude: 0.8,
            },
        };
        for i in 0..100 {
            moon.angle = i as f32 * 0.37;
            assert!(moon.offset().y.abs() <= 0.8 + 1e-5);
        }
    }

    #[test]
    fn test_retrograde_rate_reverses_direction() {
        let mut moon = Moon {
            primary: BodyId::Neptune,
            orbit_radius: 5.0,
            rate: -2.0,
            angle: 0.0,
            vertical: VerticalMotion::Fixed(0.0),
        };
        let before = moon.offset();
        moon.angle += moon.rate * 0.1;
        let after = moon.offset();
        // Angle decreased, so z moves negative from the +X starting point
        assert!(moon.angle < 0.0);
        assert!(after.z < before.z);
    }

    #[test]
    fn test_every_moon_has_a_planet_primary() {
        for cfg in moon_configs() {
            assert!(BodyId::PLANETS.contains(&cfg.primary));
        }
    }
}
