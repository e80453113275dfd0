//! Constellation overlay on the celestial sphere.
//!
//! Eight well-known constellations drawn as line figures on a sphere far
//! outside the planetary orbits, with a small emissive dot at each vertex.
//! Coordinates are right ascension in hours and declination in degrees,
//! simplified for display rather than astrometric accuracy.

use bevy::prelude::*;

use crate::types::ViewToggles;

/// Radius of the celestial sphere the figures sit on.
const CELESTIAL_RADIUS: f32 = 500.0;

/// Line color for constellation figures.
const LINE_COLOR: Color = Color::srgba(0.27, 0.4, 0.67, 0.4);

/// Star dot color.
const DOT_COLOR: Color = Color::srgb(0.53, 0.67, 1.0);

/// Line segments as (ra1, dec1, ra2, dec2) tuples.
type Segments = &'static [(f32, f32, f32, f32)];

/// The constellation set: name plus its line segments.
pub const CONSTELLATIONS: [(&str, Segments); 8] = [
    (
        "Orion",
        &[
            (5.6, -1.2, 5.4, 6.3),
            (5.4, 6.3, 5.9, 7.4),
            (5.9, 7.4, 5.7, -9.7),
            (5.7, -9.7, 5.6, -1.2),
            (5.6, -1.2, 5.2, -8.2),
            (5.6, -1.2, 5.9, -1.9),
            (5.2, -8.2, 5.4, -2.6),
            (5.9, -1.9, 5.7, -2.6),
        ],
    ),
    (
        "Big Dipper",
        &[
            (11.1, 61.8, 11.0, 56.4),
            (11.0, 56.4, 12.3, 57.0),
            (12.3, 57.0, 12.9, 55.9),
            (12.9, 55.9, 13.4, 49.3),
            (13.4, 49.3, 13.8, 49.3),
            (13.8, 49.3, 14.0, 54.9),
        ],
    ),
    (
        "Cassiopeia",
        &[
            (0.2, 59.1, 0.7, 56.5),
            (0.7, 56.5, 0.9, 60.7),
            (0.9, 60.7, 1.4, 60.2),
            (1.4, 60.2, 1.9, 63.7),
        ],
    ),
    (
        "Scorpius",
        &[
            (16.5, -26.4, 16.0, -22.6),
            (16.0, -22.6, 15.9, -26.1),
            (15.9, -26.1, 16.4, -28.2),
            (16.4, -28.2, 16.8, -34.3),
            (16.8, -34.3, 17.2, -37.1),
            (17.2, -37.1, 17.6, -39.0),
            (17.6, -39.0, 17.5, -42.9),
        ],
    ),
    (
        "Leo",
        &[
            (10.1, 12.0, 10.3, 19.8),
            (10.3, 19.8, 11.2, 20.5),
            (11.2, 20.5, 11.8, 14.6),
            (11.8, 14.6, 10.1, 12.0),
            (10.1, 12.0, 9.8, 23.8),
            (9.8, 23.8, 10.3, 19.8),
        ],
    ),
    (
        "Cygnus",
        &[
            (20.7, 45.3, 19.5, 28.0),
            (19.8, 35.1, 20.4, 40.3),
            (20.4, 40.3, 21.0, 43.9),
        ],
    ),
    (
        "Gemini",
        &[
            (7.6, 31.9, 7.1, 30.2),
            (7.1, 30.2, 6.6, 25.1),
            (7.8, 28.0, 7.1, 22.5),
            (7.6, 31.9, 7.8, 28.0),
        ],
    ),
    (
        "Southern Cross",
        &[(12.4, -63.1, 12.8, -59.7), (12.3, -57.1, 12.5, -63.4)],
    ),
];

/// Project right ascension (hours) and declination (degrees) onto the
/// celestial sphere.
pub fn ra_dec_to_point(ra_hours: f32, dec_degrees: f32) -> Vec3 {
    let ra = ra_hours / 24.0 * std::f32::consts::TAU;
    let dec = dec_degrees / 180.0 * std::f32::consts::PI;
    Vec3::new(
        CELESTIAL_RADIUS * dec.cos() * ra.cos(),
        CELESTIAL_RADIUS * dec.sin(),
        CELESTIAL_RADIUS * dec.cos() * ra.sin(),
    )
}

/// Marker for constellation vertex dots.
#[derive(Component)]
struct ConstellationDot;

/// Plugin drawing the constellation overlay when enabled.
pub struct ConstellationPlugin;

impl Plugin for ConstellationPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_constellation_dots).add_systems(
            Update,
            (
                draw_constellation_lines,
                sync_dot_visibility.run_if(resource_changed::<ViewToggles>),
            ),
        );
    }
}

/// One small emissive sphere per figure vertex, hidden until toggled on.
fn spawn_constellation_dots(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let mesh = meshes.add(Sphere::new(1.0));
    let material = materials.add(StandardMaterial {
        base_color: DOT_COLOR,
        emissive: DOT_COLOR.to_linear() * 1.5,
        unlit: true,
        ..default()
    });

    let mut count = 0;
    for (_, segments) in CONSTELLATIONS {
        for &(ra1, dec1, ra2, dec2) in segments {
            for point in [ra_dec_to_point(ra1, dec1), ra_dec_to_point(ra2, dec2)] {
                commands.spawn((
                    Mesh3d(mesh.clone()),
                    MeshMaterial3d(material.clone()),
                    Transform::from_translation(point),
                    Visibility::Hidden,
                    ConstellationDot,
                ));
                count += 1;
            }
        }
    }

    info!("Spawned {count} constellation star dots");
}

fn draw_constellation_lines(mut gizmos: Gizmos, toggles: Res<ViewToggles>) {
    if !toggles.constellations || toggles.comparison {
        return;
    }

    for (_, segments) in CONSTELLATIONS {
        for &(ra1, dec1, ra2, dec2) in segments {
            gizmos.line(
                ra_dec_to_point(ra1, dec1),
                ra_dec_to_point(ra2, dec2),
                LINE_COLOR,
            );
        }
    }
}

fn sync_dot_visibility(
    toggles: Res<ViewToggles>,
    mut dots: Query<&mut Visibility, With<ConstellationDot>>,
) {
    let target = if toggles.constellations && !toggles.comparison {
        Visibility::Inherited
    } else {
        Visibility::Hidden
    };
    for mut visibility in dots.iter_mut() {
        *visibility = target;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_points_lie_on_celestial_sphere() {
        for (_, segments) in CONSTELLATIONS {
            for &(ra1, dec1, ra2, dec2) in segments {
                for point in [ra_dec_to_point(ra1, dec1), ra_dec_to_point(ra2, dec2)] {
                    assert_relative_eq!(point.length(), CELESTIAL_RADIUS, epsilon = 1e-2);
                }
            }
        }
    }

    #[test]
    fn test_north_pole_maps_up() {
        let point = ra_dec_to_point(0.0, 90.0);
        assert_relative_eq!(point.y, CELESTIAL_RADIUS, epsilon = 1e-2);
        assert_relative_eq!(point.x, 0.0, epsilon = 1e-2);
    }

    #[test]
    fn test_southern_cross_below_ecliptic() {
        let (_, segments) = CONSTELLATIONS[7];
        for &(ra1, dec1, ra2, dec2) in segments {
            assert!(ra_dec_to_point(ra1, dec1).y < 0.0);
            assert!(ra_dec_to_point(ra2, dec2).y < 0.0);
        }
    }

    #[test]
    fn test_eight_constellations() {
        assert_eq!(CONSTELLATIONS.len(), 8);
        for (name, segments) in CONSTELLATIONS {
            assert!(!name.is_empty());
            assert!(!segments.is_empty());
        }
    }
}
