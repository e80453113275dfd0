//! Ambient scene effects: sun pulse, corona particles, a long-period comet,
//! and the asteroid belt between Mars and Jupiter.

use bevy::prelude::*;
use rand::Rng;

use crate::scene::bodies::{ellipse_position, Sun, SUN_RADIUS};
use crate::types::{SimulationClock, ViewToggles};

/// Corona particle count.
const CORONA_COUNT: usize = 200;

/// Belt rock count.
const BELT_COUNT: usize = 800;

/// Belt radius range, between Mars and Jupiter.
const BELT_INNER: f32 = 48.0;
const BELT_OUTER: f32 = 56.0;

/// Belt revolution rate in radians per scaled second.
const BELT_RATE: f32 = 0.02;

/// Comet orbit parameters: far aphelion, heavy eccentricity.
const COMET_SEMI_MAJOR: f32 = 160.0;
const COMET_ECCENTRICITY: f32 = 0.85;
const COMET_RATE: f32 = 0.02;
const COMET_TAIL_CAPACITY: usize = 150;

/// Outward-drifting corona particle, recycled at its max radius.
#[derive(Component)]
pub struct CoronaParticle {
    direction: Vec3,
    radius: f32,
    speed: f32,
    max_radius: f32,
}

/// The comet head; the tail is its position history.
#[derive(Component)]
pub struct Comet {
    pub angle: f32,
    tail: Vec<Vec3>,
}

impl Comet {
    /// Position on the comet's eccentric orbit, with a slow vertical weave.
    pub fn position(&self) -> Vec3 {
        let mut pos = ellipse_position(self.angle, COMET_SEMI_MAJOR, COMET_ECCENTRICITY, 0.0);
        pos.y = (self.angle * 0.3).sin() * 8.0;
        pos
    }
}

/// Root entity the belt rocks hang off; rotating it revolves the belt.
#[derive(Component)]
pub struct AsteroidBelt;

/// Uniformly distributed unit vector, for corona particle directions.
fn random_unit_direction(rng: &mut impl Rng) -> Vec3 {
    let theta = rng.gen_range(0.0..std::f32::consts::TAU);
    let phi = (rng.gen_range(-1.0..1.0f32)).acos();
    Vec3::new(
        phi.sin() * theta.cos(),
        phi.cos(),
        phi.sin() * theta.sin(),
    )
}

/// Half-width of the comet tail's particle spread, growing away from the
/// head so the stream widens as it trails off.
pub fn tail_spread(index_from_head: usize) -> f32 {
    0.3 * index_from_head as f32 / COMET_TAIL_CAPACITY as f32
}

/// Plugin spawning and animating the ambient effects.
pub struct EffectsPlugin;

impl Plugin for EffectsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (spawn_corona, spawn_comet, spawn_asteroid_belt))
            .add_systems(
                Update,
                (
                    pulse_sun,
                    update_corona,
                    update_comet,
                    draw_comet_tail,
                    rotate_belt,
                    apply_comparison_visibility.run_if(resource_changed::<ViewToggles>),
                ),
            );
    }
}

/// Gentle breathing animation on the Sun mesh.
fn pulse_sun(clock: Res<SimulationClock>, mut sun: Query<&mut Transform, With<Sun>>) {
    let Ok(mut transform) = sun.single_mut() else {
        return;
    };
    let pulse = 1.0 + (clock.elapsed_sim as f32 * 1.5).sin() * 0.03;
    transform.scale = Vec3::splat(pulse);
}

fn spawn_corona(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let mesh = meshes.add(Sphere::new(0.12));
    let material = materials.add(StandardMaterial {
        base_color: Color::srgba(1.0, 0.73, 0.25, 0.8),
        emissive: LinearRgba::rgb(2.0, 1.2, 0.3),
        unlit: true,
        alpha_mode: AlphaMode::Blend,
        ..default()
    });

    let mut rng = rand::thread_rng();

    for _ in 0..CORONA_COUNT {
        let direction = random_unit_direction(&mut rng);
        let particle = CoronaParticle {
            direction,
            radius: SUN_RADIUS + 0.5 + rng.gen_range(0.0..3.0),
            speed: rng.gen_range(0.2..0.7),
            max_radius: SUN_RADIUS + 0.5 + rng.gen_range(0.0..6.0),
        };

        commands.spawn((
            Mesh3d(mesh.clone()),
            MeshMaterial3d(material.clone()),
            Transform::from_translation(direction * particle.radius),
            particle,
        ));
    }
}

/// Drift corona particles outward and recycle them at the Sun's surface.
fn update_corona(
    clock: Res<SimulationClock>,
    toggles: Res<ViewToggles>,
    time: Res<Time>,
    mut particles: Query<(&mut CoronaParticle, &mut Transform)>,
) {
    if clock.paused || toggles.comparison {
        return;
    }
    let t = clock.scaled_delta(time.delta_secs());
    let mut rng = rand::thread_rng();

    for (mut particle, mut transform) in particles.iter_mut() {
        particle.radius += particle.speed * t;
        if particle.radius > particle.max_radius {
            // Restart at the surface on a fresh random direction
            particle.radius = SUN_RADIUS + 0.5;
            particle.direction = random_unit_direction(&mut rng);
        }
        transform.translation = particle.direction * particle.radius;
    }
}

fn spawn_comet(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let comet = Comet {
        angle: 0.0,
        tail: Vec::with_capacity(COMET_TAIL_CAPACITY),
    };

    commands.spawn((
        Mesh3d(meshes.add(Sphere::new(0.6))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb_u8(136, 204, 255),
            emissive: LinearRgba::rgb(0.5, 0.8, 1.2),
            unlit: true,
            ..default()
        })),
        Transform::from_translation(comet.position()),
        comet,
    ));
}

/// Advance the comet along its orbit and append to the tail history.
fn update_comet(
    clock: Res<SimulationClock>,
    toggles: Res<ViewToggles>,
    time: Res<Time>,
    mut comets: Query<(&mut Comet, &mut Transform)>,
) {
    if clock.paused || toggles.comparison {
        return;
    }
    let t = clock.scaled_delta(time.delta_secs());

    let Ok((mut comet, mut transform)) = comets.single_mut() else {
        return;
    };

    comet.angle += COMET_RATE * t;
    transform.translation = comet.position();

    let head = transform.translation;
    comet.tail.push(head);
    if comet.tail.len() > COMET_TAIL_CAPACITY {
        comet.tail.remove(0);
    }
}

fn draw_comet_tail(mut gizmos: Gizmos, toggles: Res<ViewToggles>, comets: Query<&Comet>) {
    if toggles.comparison {
        return;
    }
    let Ok(comet) = comets.single() else {
        return;
    };

    let mut rng = rand::thread_rng();
    let count = comet.tail.len();

    // Oldest sample first, head last; spread and fade both grow with
    // distance from the head to read as a widening particle stream.
    let jitter = |rng: &mut rand::rngs::ThreadRng, index_from_head: usize| {
        let spread = tail_spread(index_from_head);
        Vec3::new(
            rng.gen_range(-0.5..0.5),
            rng.gen_range(-0.5..0.5),
            rng.gen_range(-0.5..0.5),
        ) * spread
    };

    for (i, pair) in comet.tail.windows(2).enumerate() {
        let fade = i as f32 / count as f32 * 0.6;
        let from = pair[0] + jitter(&mut rng, count - 1 - i);
        let to = pair[1] + jitter(&mut rng, count.saturating_sub(2 + i));
        gizmos.line(from, to, Color::srgba(0.53, 0.8, 1.0, fade));
    }
}

fn spawn_asteroid_belt(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let rock_mesh = meshes.add(Sphere::new(0.15));
    let rock_material = materials.add(StandardMaterial {
        base_color: Color::srgb_u8(180, 168, 150),
        perceptual_roughness: 1.0,
        ..default()
    });

    let mut rng = rand::thread_rng();

    commands
        .spawn((AsteroidBelt, Transform::default(), Visibility::default()))
        .with_children(|belt| {
            for _ in 0..BELT_COUNT {
                let angle = rng.gen_range(0.0..std::f32::consts::TAU);
                let radius = rng.gen_range(BELT_INNER..BELT_OUTER);
                let y = rng.gen_range(-1.5..1.5);
                let scale = rng.gen_range(0.5..1.8);

                belt.spawn((
                    Mesh3d(rock_mesh.clone()),
                    MeshMaterial3d(rock_material.clone()),
                    Transform::from_xyz(angle.cos() * radius, y, angle.sin() * radius)
                        .with_scale(Vec3::splat(scale)),
                ));
            }
        });

    info!("Spawned asteroid belt with {BELT_COUNT} rocks");
}

/// Revolve the whole belt slowly about the Sun.
fn rotate_belt(
    clock: Res<SimulationClock>,
    toggles: Res<ViewToggles>,
    time: Res<Time>,
    mut belt: Query<&mut Transform, With<AsteroidBelt>>,
) {
    if clock.paused || toggles.comparison {
        return;
    }
    let t = clock.scaled_delta(time.delta_secs());

    let Ok(mut transform) = belt.single_mut() else {
        return;
    };
    transform.rotate_y(BELT_RATE * t);
}

/// Hide distracting effects while the comparison lineup is on screen.
fn apply_comparison_visibility(
    toggles: Res<ViewToggles>,
    mut effects: Query<
        &mut Visibility,
        Or<(
            With<AsteroidBelt>,
            With<Comet>,
            With<CoronaParticle>,
        )>,
    >,
) {
    let target = if toggles.comparison {
        Visibility::Hidden
    } else {
        Visibility::Inherited
    };
    for mut visibility in effects.iter_mut() {
        *visibility = target;
    }
}
