//! Celestial body spawning and orbital geometry.
//!
//! Holds the per-planet configuration table (compressed and realistic orbit
//! radii, eccentricity, inclination, rates) and the polar-ellipse position
//! function every motion system goes through.

use bevy::prelude::*;
use rand::Rng;

use crate::assets::{PendingTextures, TextureSlot};
use crate::catalog::{self, BodyId};
use crate::scene::gravity::GravityState;
use crate::scene::trails::TrailBuffer;

/// Visual radius of the Sun.
pub const SUN_RADIUS: f32 = 8.0;

/// Component marking an entity as a clickable celestial body.
#[derive(Component)]
pub struct CelestialBody {
    pub id: BodyId,
    /// Visual radius, used for hit-testing and camera framing.
    pub radius: f32,
}

/// Marker for the Sun entity (pulse animation target).
#[derive(Component)]
pub struct Sun;

/// Orbital state of a planet. Angle advances with simulation time; position
/// derives from the polar ellipse.
#[derive(Component, Clone, Debug)]
pub struct OrbitState {
    /// Current true-anomaly-style angle in radians.
    pub angle: f32,
    /// Semi-major axis in scene units; swapped by the scale toggle.
    pub orbit_radius: f32,
    pub eccentricity: f32,
    pub inclination: f32,
    /// Orbit angle advance per scaled second (halved in the update).
    pub orbital_rate: f32,
    /// Self-rotation in radians per scaled second.
    pub rotation_rate: f32,
}

impl OrbitState {
    /// Position on the orbit ellipse for the current angle.
    pub fn position(&self) -> Vec3 {
        ellipse_position(
            self.angle,
            self.orbit_radius,
            self.eccentricity,
            self.inclination,
        )
    }
}

/// Polar-form ellipse with the Sun at the focus, tipped by `inclination`.
///
/// `r = a (1 − e²) / (1 + e cos θ)`; the vertical component reuses the
/// in-plane sine so the orbit crosses the ecliptic at θ = 0 and π.
pub fn ellipse_position(angle: f32, semi_major: f32, eccentricity: f32, inclination: f32) -> Vec3 {
    let e = eccentricity;
    let r = semi_major * (1.0 - e * e) / (1.0 + e * angle.cos());
    Vec3::new(
        angle.cos() * r,
        angle.sin() * r * inclination.sin(),
        angle.sin() * r,
    )
}

/// Static per-planet configuration.
pub struct PlanetConfig {
    pub id: BodyId,
    /// Visual sphere radius.
    pub radius: f32,
    /// Compressed ("pretty") orbit radius.
    pub orbit: f32,
    /// Realistic-scale orbit radius.
    pub real_orbit: f32,
    /// Orbital angle rate (Earth = 1.0).
    pub rate: f32,
    /// Axial tilt in radians.
    pub tilt: f32,
    /// Self-rotation rate in radians per scaled second.
    pub rotation_rate: f32,
    pub eccentricity: f32,
    pub inclination: f32,
}

/// The nine orbiting bodies, inner to outer.
pub const PLANET_CONFIG: [PlanetConfig; 9] = [
    PlanetConfig {
        id: BodyId::Mercury,
        radius: 1.2,
        orbit: 18.0,
        real_orbit: 7.7,
        rate: 4.15,
        tilt: 0.03,
        rotation_rate: 0.01,
        eccentricity: 0.2056,
        inclination: 0.122,
    },
    PlanetConfig {
        id: BodyId::Venus,
        radius: 1.8,
        orbit: 25.0,
        real_orbit: 14.5,
        rate: 1.62,
        tilt: 3.09,
        rotation_rate: -0.004,
        eccentricity: 0.0068,
        inclination: 0.059,
    },
    PlanetConfig {
        id: BodyId::Earth,
        radius: 2.0,
        orbit: 33.0,
        real_orbit: 20.0,
        rate: 1.0,
        tilt: 0.41,
        rotation_rate: 0.03,
        eccentricity: 0.0167,
        inclination: 0.0,
    },
    PlanetConfig {
        id: BodyId::Mars,
        radius: 1.4,
        orbit: 42.0,
        real_orbit: 30.5,
        rate: 0.53,
        tilt: 0.44,
        rotation_rate: 0.028,
        eccentricity: 0.0934,
        inclination: 0.032,
    },
    PlanetConfig {
        id: BodyId::Jupiter,
        radius: 5.0,
        orbit: 62.0,
        real_orbit: 104.0,
        rate: 0.084,
        tilt: 0.05,
        rotation_rate: 0.07,
        eccentricity: 0.0484,
        inclination: 0.023,
    },
    PlanetConfig {
        id: BodyId::Saturn,
        radius: 4.2,
        orbit: 78.0,
        real_orbit: 191.0,
        rate: 0.034,
        tilt: 0.47,
        rotation_rate: 0.065,
        eccentricity: 0.0539,
        inclination: 0.043,
    },
    PlanetConfig {
        id: BodyId::Uranus,
        radius: 3.0,
        orbit: 95.0,
        real_orbit: 384.0,
        rate: 0.012,
        tilt: 1.71,
        rotation_rate: -0.05,
        eccentricity: 0.0473,
        inclination: 0.013,
    },
    PlanetConfig {
        id: BodyId::Neptune,
        radius: 2.8,
        orbit: 112.0,
        real_orbit: 601.0,
        rate: 0.006,
        tilt: 0.49,
        rotation_rate: 0.054,
        eccentricity: 0.0086,
        inclination: 0.031,
    },
    PlanetConfig {
        id: BodyId::Pluto,
        radius: 0.8,
        orbit: 125.0,
        real_orbit: 790.0,
        rate: 0.004,
        tilt: 2.14,
        rotation_rate: -0.01,
        eccentricity: 0.2488,
        inclination: 0.299,
    },
];

/// Look up the config entry for a planet.
pub fn config_for(id: BodyId) -> Option<&'static PlanetConfig> {
    PLANET_CONFIG.iter().find(|c| c.id == id)
}

/// Planetary ring parameters, drawn as concentric gizmo circles.
struct RingConfig {
    inner: f32,
    outer: f32,
    color: Color,
    /// Tilt of the ring plane about the X axis.
    tilt: f32,
    bands: u32,
}

fn ring_for(id: BodyId) -> Option<RingConfig> {
    match id {
        BodyId::Saturn => Some(RingConfig {
            inner: 5.5,
            outer: 9.0,
            color: Color::srgba(0.82, 0.75, 0.55, 0.45),
            tilt: 0.47,
            bands: 6,
        }),
        BodyId::Uranus => Some(RingConfig {
            inner: 4.0,
            outer: 5.2,
            color: Color::srgba(0.53, 0.6, 0.67, 0.2),
            tilt: 1.71,
            bands: 3,
        }),
        BodyId::Neptune => Some(RingConfig {
            inner: 3.8,
            outer: 4.8,
            color: Color::srgba(0.33, 0.4, 0.53, 0.12),
            tilt: 0.49,
            bands: 2,
        }),
        _ => None,
    }
}

/// Plugin spawning the Sun, planets, starfield, and lighting.
pub struct BodiesPlugin;

impl Plugin for BodiesPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (spawn_bodies, spawn_starfield, spawn_lighting))
            .add_systems(Update, draw_planet_rings);
    }
}

/// Spawn the Sun and all planets with randomized starting angles.
fn spawn_bodies(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut pending: ResMut<PendingTextures>,
    asset_server: Res<AssetServer>,
) {
    // Sun: emissive, no orbit state
    let sun_color = catalog::facts(BodyId::Sun).color();
    let sun_material = materials.add(StandardMaterial {
        base_color: sun_color,
        emissive: sun_color.to_linear() * 2.0,
        ..default()
    });
    commands.spawn((
        Mesh3d(meshes.add(Sphere::new(SUN_RADIUS))),
        MeshMaterial3d(sun_material),
        Transform::default(),
        CelestialBody {
            id: BodyId::Sun,
            radius: SUN_RADIUS,
        },
        Sun,
    ));

    let mut rng = rand::thread_rng();

    for cfg in &PLANET_CONFIG {
        let start_angle = rng.gen_range(0.0..std::f32::consts::TAU);

        let orbit = OrbitState {
            angle: start_angle,
            orbit_radius: cfg.orbit,
            eccentricity: cfg.eccentricity,
            inclination: cfg.inclination,
            orbital_rate: cfg.rate,
            rotation_rate: cfg.rotation_rate,
        };

        // Gray placeholder until the texture arrives
        let material = materials.add(StandardMaterial {
            base_color: Color::srgb(0.67, 0.67, 0.67),
            perceptual_roughness: 0.8,
            metallic: 0.1,
            ..default()
        });

        // Fire-and-forget texture load; one system settles these later
        let texture = asset_server.load(catalog::facts(cfg.id).texture);
        pending.slots.push(TextureSlot {
            handle: texture,
            material: material.clone(),
            fallback: catalog::facts(cfg.id).color(),
            settled: false,
        });

        commands.spawn((
            Mesh3d(meshes.add(Sphere::new(cfg.radius))),
            MeshMaterial3d(material),
            Transform::from_translation(orbit.position())
                .with_rotation(Quat::from_rotation_z(cfg.tilt)),
            CelestialBody {
                id: cfg.id,
                radius: cfg.radius,
            },
            orbit,
            TrailBuffer::default(),
            GravityState::seeded(start_angle, cfg.rate, cfg.radius),
        ));
    }

    info!("Spawned {} celestial bodies", PLANET_CONFIG.len() + 1);
}

/// Draw ring systems as concentric tilted circles around their planet.
fn draw_planet_rings(
    mut gizmos: Gizmos,
    planets: Query<(&CelestialBody, &Transform), With<OrbitState>>,
) {
    for (body, transform) in planets.iter() {
        let Some(ring) = ring_for(body.id) else {
            continue;
        };

        let rotation = Quat::from_rotation_x(ring.tilt);
        for band in 0..ring.bands {
            let t = band as f32 / (ring.bands - 1).max(1) as f32;
            let radius = ring.inner + (ring.outer - ring.inner) * t;
            draw_oriented_circle(
                &mut gizmos,
                transform.translation,
                rotation,
                radius,
                ring.color,
                48,
            );
        }
    }
}

/// Draw a circle in the plane defined by `rotation` using line segments.
pub fn draw_oriented_circle(
    gizmos: &mut Gizmos,
    center: Vec3,
    rotation: Quat,
    radius: f32,
    color: Color,
    segments: usize,
) {
    let angle_step = std::f32::consts::TAU / segments as f32;
    for i in 0..segments {
        let a0 = i as f32 * angle_step;
        let a1 = (i + 1) as f32 * angle_step;
        let p0 = center + rotation * Vec3::new(a0.cos() * radius, 0.0, a0.sin() * radius);
        let p1 = center + rotation * Vec3::new(a1.cos() * radius, 0.0, a1.sin() * radius);
        gizmos.line(p0, p1, color);
    }
}

/// Spawn a starfield shell of small emissive spheres around the scene.
fn spawn_starfield(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let star_material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        emissive: LinearRgba::WHITE * 0.5,
        unlit: true,
        ..default()
    });
    let star_mesh = meshes.add(Sphere::new(0.4));

    let mut rng = rand::thread_rng();

    for _ in 0..500 {
        // Uniform direction on a sphere, radius beyond Pluto's realistic orbit
        let theta = rng.gen_range(0.0..std::f32::consts::TAU);
        let phi = (rng.gen_range(-1.0..1.0f32)).acos();
        let r = rng.gen_range(1300.0..1500.0);
        let pos = Vec3::new(
            r * phi.sin() * theta.cos(),
            r * phi.cos(),
            r * phi.sin() * theta.sin(),
        );
        let scale = rng.gen_range(0.5..1.5);

        commands.spawn((
            Mesh3d(star_mesh.clone()),
            MeshMaterial3d(star_material.clone()),
            Transform::from_translation(pos).with_scale(Vec3::splat(scale)),
        ));
    }

    info!("Spawned 500 background stars");
}

/// Point light at the Sun plus dim ambient fill.
fn spawn_lighting(mut commands: Commands) {
    commands.insert_resource(GlobalAmbientLight {
        color: Color::srgb(0.25, 0.25, 0.38),
        brightness: 80.0,
        ..default()
    });

    commands.spawn((
        PointLight {
            color: Color::srgb(1.0, 0.94, 0.87),
            intensity: 5_000_000.0,
            range: 2000.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::default(),
    ));

    info!("Scene lighting initialized");
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_circular_orbit_radius_constant() {
        for i in 0..16 {
            let angle = i as f32 / 16.0 * std::f32::consts::TAU;
            let pos = ellipse_position(angle, 33.0, 0.0, 0.0);
            assert_relative_eq!(pos.length(), 33.0, epsilon = 1e-3);
        }
    }

    #[test]
    fn test_ellipse_radius_positive() {
        for &e in &[0.0, 0.2, 0.5, 0.85, 0.99] {
            for i in 0..64 {
                let angle = i as f32 / 64.0 * std::f32::consts::TAU;
                let pos = ellipse_position(angle, 50.0, e, 0.1);
                assert!(pos.length() > 0.0, "r must stay positive for e={e}");
            }
        }
    }

    #[test]
    fn test_ellipse_periodic() {
        let p0 = ellipse_position(1.3, 42.0, 0.0934, 0.032);
        let p1 = ellipse_position(1.3 + std::f32::consts::TAU, 42.0, 0.0934, 0.032);
        assert_relative_eq!(p0.x, p1.x, epsilon = 1e-3);
        assert_relative_eq!(p0.y, p1.y, epsilon = 1e-3);
        assert_relative_eq!(p0.z, p1.z, epsilon = 1e-3);
    }

    #[test]
    fn test_perihelion_closer_than_aphelion() {
        let perihelion = ellipse_position(0.0, 125.0, 0.2488, 0.299);
        let aphelion = ellipse_position(std::f32::consts::PI, 125.0, 0.2488, 0.299);
        assert!(perihelion.length() < aphelion.length());
    }

    #[test]
    fn test_zero_inclination_stays_in_plane() {
        for i in 0..32 {
            let angle = i as f32 / 32.0 * std::f32::consts::TAU;
            let pos = ellipse_position(angle, 33.0, 0.0167, 0.0);
            assert_relative_eq!(pos.y, 0.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_config_covers_all_planets() {
        for id in BodyId::PLANETS {
            assert!(config_for(id).is_some(), "missing config for {id:?}");
        }
        assert!(config_for(BodyId::Sun).is_none());
    }

    #[test]
    fn test_orbits_ordered_inner_to_outer() {
        for pair in PLANET_CONFIG.windows(2) {
            assert!(pair[0].orbit < pair[1].orbit);
            assert!(pair[0].real_orbit < pair[1].real_orbit);
        }
    }

    #[test]
    fn test_orbit_state_position_matches_free_function() {
        let state = OrbitState {
            angle: 2.1,
            orbit_radius: 62.0,
            eccentricity: 0.0484,
            inclination: 0.023,
            orbital_rate: 0.084,
            rotation_rate: 0.07,
        };
        assert_eq!(state.position(), ellipse_position(2.1, 62.0, 0.0484, 0.023));
    }
}
