use bevy::prelude::*;
use bevy::math::primitives::Circle;

use crate::simulation::scenario::Scenario;
use crate::simulation::integrator::euler_step;
use crate::simulation::params::{Parameters, OPTIONS};
use crate::simulation::states::{System, NVec2};

#[derive(Component)]
struct BodyIndex(pub usize);

#[derive(Component)]
struct HudText;

/// Currently selected entry of the settings table
#[derive(Resource, Default)]
struct ControlsState {
    selected: usize,
}

const SCALE: f32 = 1.0; // simulation units are already pixels
const WINDOW_SIZE: u32 = 1000;
const BODY_RADIUS: f32 = 25.0;

const WAVE_COUNT: usize = 5; // sine waves per spring
const WAVE_AMPLITUDE: f32 = 10.0;
const LEAD_LENGTH: f32 = 50.0; // straight segment at each spring end
const SPRING_SEGMENTS: usize = 50;

// Fraction of an option's range swept per second while a key is held
const ADJUST_RATE: f64 = 0.5;

pub fn run_2d(scenario: Scenario) {
    println!("run_2d: starting Bevy 2D viewer");
    println!("controls:");
    println!("  Up/Down     select setting");
    println!("  Left/Right  adjust selected setting");
    println!("  R           restart bodies at their rest positions");
    println!("  D           restore default settings");
    println!("  Esc/Q       quit");

    App::new()
        .insert_resource(ClearColor(Color::BLACK))
        .insert_resource(scenario)
        .init_resource::<ControlsState>()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Spring Chain Simulation".to_string(),
                resolution: (WINDOW_SIZE, WINDOW_SIZE).into(),
                ..default()
            }),
            ..default()
        }))
        .add_systems(Startup, setup_scene_system)
        .add_systems(
            Update,
            (
                controls_system,
                physics_step_system,
                sync_transforms_system,
                draw_springs_system,
                update_hud_system,
                exit_on_esc_or_q,
            )
                .chain(),
        )
        .run();
}

/// Map a simulation position to Bevy world space. The simulation uses +y
/// down with the anchor at the window center; Bevy 2D uses +y up
fn to_screen(p: NVec2) -> Vec2 {
    Vec2::new(p.x as f32 * SCALE, -(p.y as f32) * SCALE)
}

fn setup_scene_system(
    mut commands: Commands,
    scenario: Res<Scenario>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    // 2D camera
    commands.spawn(Camera2d);

    let circle = meshes.add(Circle::new(BODY_RADIUS));
    let white = materials.add(Color::WHITE);

    // Fixed anchor at the origin, never moves
    commands.spawn((
        Mesh2d(circle.clone()),
        MeshMaterial2d(white.clone()),
        Transform::from_xyz(0.0, 0.0, 0.0),
    ));

    for (i, body) in [&scenario.system.body1, &scenario.system.body2]
        .into_iter()
        .enumerate()
    {
        let screen = to_screen(body.position);
        commands.spawn((
            Mesh2d(circle.clone()),
            MeshMaterial2d(white.clone()),
            Transform::from_xyz(screen.x, screen.y, 0.0),
            BodyIndex(i),
        ));
    }

    // Settings readout, filled in by update_hud_system every frame
    commands.spawn((
        HudText,
        Text::new(""),
        TextFont {
            font_size: 20.0,
            ..default()
        },
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(30.0),
            left: Val::Px(30.0),
            ..default()
        },
    ));
}

/// Keyboard stand-in for the settings sliders, plus the restart and
/// default-settings buttons
fn controls_system(
    keys: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    mut scenario: ResMut<Scenario>,
    mut controls: ResMut<ControlsState>,
) {
    // Split &mut Scenario into &mut fields in one destructuring step
    let Scenario { parameters, system } = &mut *scenario;

    // Selection wraps around the table
    if keys.just_pressed(KeyCode::ArrowUp) {
        controls.selected = (controls.selected + OPTIONS.len() - 1) % OPTIONS.len();
    }
    if keys.just_pressed(KeyCode::ArrowDown) {
        controls.selected = (controls.selected + 1) % OPTIONS.len();
    }

    // Left/Right sweep the selected value across its range while held
    let mut direction = 0.0;
    if keys.pressed(KeyCode::ArrowLeft) {
        direction -= 1.0;
    }
    if keys.pressed(KeyCode::ArrowRight) {
        direction += 1.0;
    }
    if direction != 0.0 {
        let spec = OPTIONS[controls.selected];
        let step = (spec.max - spec.min) * ADJUST_RATE * time.delta_secs() as f64 * direction;
        let value = parameters.get(spec.param) + step;
        parameters.set(spec.param, value);
    }

    // Put the chain back at its rest geometry, keeping the current settings
    if keys.just_pressed(KeyCode::KeyR) {
        *system = System::initialize(parameters.length1, parameters.length2);
        info!("restart: bodies back at rest positions");
    }

    // Restore every setting's default, keeping the current body state
    if keys.just_pressed(KeyCode::KeyD) {
        *parameters = Parameters::default();
        info!("default settings restored");
    }
}

fn physics_step_system(mut scenario: ResMut<Scenario>) {
    // One integration step per render frame, like the draw loop it mirrors
    let Scenario { parameters, system } = &mut *scenario;
    euler_step(system, parameters);
}

fn sync_transforms_system(scenario: Res<Scenario>, mut query: Query<(&BodyIndex, &mut Transform)>) {
    let positions = [
        scenario.system.body1.position,
        scenario.system.body2.position,
    ];
    for (BodyIndex(i), mut transform) in &mut query {
        if let Some(p) = positions.get(*i) {
            let screen = to_screen(*p);
            transform.translation.x = screen.x;
            transform.translation.y = screen.y;
        }
    }
}

fn draw_springs_system(scenario: Res<Scenario>, mut gizmos: Gizmos) {
    let origin = Vec2::ZERO;
    let p1 = to_screen(scenario.system.body1.position);
    let p2 = to_screen(scenario.system.body2.position);

    draw_spring(&mut gizmos, origin, p1);
    draw_spring(&mut gizmos, p1, p2);
}

/// Draw a spring between two positions: a line of constant length at each
/// end and a sine-wave polyline inbetween that stretches with the spring
fn draw_spring(gizmos: &mut Gizmos, from: Vec2, to: Vec2) {
    let direction = (to - from).normalize_or_zero();
    if direction == Vec2::ZERO {
        return;
    }

    let start = from + direction * LEAD_LENGTH;
    let end = to - direction * LEAD_LENGTH;

    // Lines with constant length
    gizmos.line_2d(from, start, Color::WHITE);
    gizmos.line_2d(to, end, Color::WHITE);

    let perpendicular = Vec2::new(-direction.y, direction.x);

    let mut previous = start;
    for i in 0..=SPRING_SEGMENTS {
        let t = i as f32 / SPRING_SEGMENTS as f32;

        let sine_offset = (t * WAVE_COUNT as f32 * std::f32::consts::TAU).sin();
        let position = start.lerp(end, t) + perpendicular * (sine_offset * WAVE_AMPLITUDE);

        gizmos.line_2d(previous, position, Color::WHITE);
        previous = position;
    }
}

/// Rebuild the settings readout: one `label (value)` row per option with the
/// selected row marked
fn update_hud_system(
    scenario: Res<Scenario>,
    controls: Res<ControlsState>,
    mut query: Query<&mut Text, With<HudText>>,
) {
    let Ok(mut text) = query.single_mut() else {
        return;
    };

    let mut hud = String::new();
    for (i, option) in OPTIONS.iter().enumerate() {
        let marker = if i == controls.selected { '>' } else { ' ' };
        let value = scenario.parameters.get(option.param);
        hud.push_str(&format!("{marker} {} ({:.3})\n", option.label, value));
    }
    text.0 = hud;
}

/// Quit with Esc or Q
fn exit_on_esc_or_q(keys: Res<ButtonInput<KeyCode>>, mut exit: MessageWriter<AppExit>) {
    if keys.any_just_pressed([KeyCode::Escape, KeyCode::KeyQ]) {
        exit.write(AppExit::Success);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::assert_is_system;
    use bevy::window::WindowResolution;

    #[test]
    fn window_resolution_accepts_the_configured_size() {
        let resolution = WindowResolution::from((WINDOW_SIZE, WINDOW_SIZE));
        assert_eq!(resolution.physical_width(), WINDOW_SIZE);
        assert_eq!(resolution.physical_height(), WINDOW_SIZE);
    }

    // Initializes every scheduled system against an empty world, so a
    // parameter type that the runtime no longer provides fails here
    #[test]
    fn viewer_systems_have_valid_signatures() {
        assert_is_system(setup_scene_system);
        assert_is_system(controls_system);
        assert_is_system(physics_step_system);
        assert_is_system(sync_transforms_system);
        assert_is_system(draw_springs_system);
        assert_is_system(update_hud_system);
        assert_is_system(exit_on_esc_or_q);
    }
}
