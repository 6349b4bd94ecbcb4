use bevy::prelude::*;
use rand::Rng;

use constants::animation::{
    ANIMATION_TIME_SCALE, BODY_WAVE_AMPLITUDE, BODY_WAVE_FREQUENCY, BODY_WAVE_PHASE_SPEED,
    TERMINAL_AMPLITUDE_BASE, TERMINAL_AMPLITUDE_RANGE, TERMINAL_FREQUENCY_BASE,
    TERMINAL_FREQUENCY_RANGE, TERMINAL_SPEED_BASE, TERMINAL_SPEED_RANGE, TERMINAL_TIME_FACTOR,
};
use constants::render_settings::{SHELL_LINE_OPACITY, SHELL_SURFACE_OPACITY};
use constants::scene::{
    BULB_RADIUS_SCALE, HEAD_BASE_P0, HEAD_BASE_P1, HEAD_BASE_P2, HEAD_BASE_SEGMENTS,
    HEAD_DOME_HEIGHT_SEGMENTS, HEAD_DOME_RADIUS, HEAD_DOME_WIDTH_SEGMENTS, HEAD_ROOF_HEIGHT,
    HEAD_ROOF_RADIUS, HEAD_ROOF_SEGMENTS, SHEATH_RADIUS, SHEATH_SCALE,
};

use crate::engine::animation::chain::Chain;
use crate::engine::animation::follower::seek_step;
use crate::engine::animation::wave::{IntensityCurve, WaveAxes, WaveParams, apply_wave};
use crate::engine::assets::SceneConfig;
use crate::engine::geometry::align::align_to;
use crate::engine::geometry::curve::{CatmullRomSpline, sample_quadratic_bezier};
use crate::engine::mesh::dome::build_dome_mesh;
use crate::engine::mesh::quadrant_surface::build_quadrant_surface;
use crate::engine::mesh::tube::build_tube_mesh;

/// Root of the neuron hierarchy. Seek targets are expressed in this
/// entity's local space.
#[derive(Component)]
pub struct Neuron;

/// The animated body tube: chain state plus the spline the attachments
/// sample. The spline is rebuilt from the current spine each frame, after
/// the wave step and before the attachments read it.
#[derive(Component)]
pub struct NeuronBody {
    pub chain: Chain,
    pub curve: CatmullRomSpline,
    pub tube_radius: f32,
    pub radial_segments: usize,
}

/// Head shell group: four quadrant surfaces and the inner dome. Rides the
/// first chain point.
#[derive(Component)]
pub struct HeadShell;

/// Ellipsoid sheath pinned at a fixed arc-length fraction of the body.
#[derive(Component)]
pub struct Sheath {
    pub t: f32,
}

/// Terminal cluster group riding the tail of the body chain.
#[derive(Component)]
pub struct TerminalCluster;

/// One flailing terminal: its own spine plus the wave parameters drawn at
/// creation.
#[derive(Component)]
pub struct Terminal {
    pub chain: Chain,
    pub wave: WaveParams,
    pub radius: f32,
    pub radial_segments: usize,
}

/// Tip bulb, a child of its terminal entity.
#[derive(Component)]
pub struct Bulb;

/// Initial straight spine: `segments + 1` points from the origin along -Z.
fn straight_spine(segments: usize, length: f32) -> Vec<Vec3> {
    (0..=segments)
        .map(|i| Vec3::new(0.0, 0.0, -length * i as f32 / segments as f32))
        .collect()
}

pub fn spawn_neuron(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    config: Res<SceneConfig>,
) {
    let cfg = &config.neuron;
    let mut rng = rand::rng();

    let body_material = materials.add(StandardMaterial {
        base_color: Color::srgb_u8(0, 170, 255),
        cull_mode: None,
        perceptual_roughness: 0.9,
        ..default()
    });

    let root = commands
        .spawn((
            Neuron,
            Transform::from_translation(cfg.position_vec())
                .with_rotation(Quat::from_rotation_y(cfg.rotation_deg.to_radians())),
            Visibility::default(),
        ))
        .id();

    // Body tube.
    let chain = Chain::new(
        straight_spine(cfg.segments, cfg.tube_length),
        cfg.move_speed,
        cfg.seek_epsilon,
    );
    let curve = CatmullRomSpline::new(chain.current());
    let tube = build_tube_mesh(&curve, cfg.segments, cfg.tube_radius, cfg.radial_segments);

    let body = commands
        .spawn((
            NeuronBody {
                chain,
                curve,
                tube_radius: cfg.tube_radius,
                radial_segments: cfg.radial_segments,
            },
            Mesh3d(meshes.add(tube)),
            MeshMaterial3d(body_material.clone()),
            Transform::IDENTITY,
        ))
        .id();
    commands.entity(root).add_child(body);

    let head = spawn_head_shell(&mut commands, &mut meshes, &mut materials);
    commands.entity(root).add_child(head);

    spawn_sheaths(&mut commands, &mut meshes, &mut materials, root, cfg);

    let cluster = spawn_terminal_cluster(
        &mut commands,
        &mut meshes,
        &mut materials,
        body_material,
        cfg,
        &mut rng,
    );
    commands
        .entity(cluster)
        .insert(Transform::from_xyz(0.0, 0.0, -cfg.tube_length));
    commands.entity(root).add_child(cluster);
}

/// Four congruent quadrant surfaces around the head, with a single dome
/// nested inside.
fn spawn_head_shell(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
) -> Entity {
    let line_material = materials.add(StandardMaterial {
        base_color: Color::srgba(1.0, 1.0, 1.0, SHELL_LINE_OPACITY),
        unlit: true,
        alpha_mode: AlphaMode::Blend,
        ..default()
    });
    let surface_material = materials.add(StandardMaterial {
        base_color: Color::srgba(1.0, 1.0, 1.0, SHELL_SURFACE_OPACITY),
        unlit: true,
        alpha_mode: AlphaMode::Blend,
        cull_mode: None,
        ..default()
    });
    let dome_material = materials.add(StandardMaterial {
        base_color: Color::srgb_u8(249, 91, 95),
        cull_mode: None,
        ..default()
    });

    let base_curve =
        sample_quadratic_bezier(HEAD_BASE_P0, HEAD_BASE_P1, HEAD_BASE_P2, HEAD_BASE_SEGMENTS);

    let shell = commands
        .spawn((HeadShell, Transform::IDENTITY, Visibility::default()))
        .id();

    for quadrant in 0..4 {
        let surface = build_quadrant_surface(
            &base_curve,
            HEAD_ROOF_RADIUS,
            HEAD_ROOF_HEIGHT,
            HEAD_ROOF_SEGMENTS,
            quadrant,
        );

        let wall = commands
            .spawn((
                Mesh3d(meshes.add(surface.wall)),
                MeshMaterial3d(surface_material.clone()),
                Transform::IDENTITY,
            ))
            .id();
        let cap = commands
            .spawn((
                Mesh3d(meshes.add(surface.cap)),
                MeshMaterial3d(surface_material.clone()),
                Transform::IDENTITY,
            ))
            .id();
        let lines = commands
            .spawn((
                Mesh3d(meshes.add(surface.lines)),
                MeshMaterial3d(line_material.clone()),
                Transform::IDENTITY,
            ))
            .id();
        commands.entity(shell).add_children(&[wall, cap, lines]);
    }

    let dome = commands
        .spawn((
            Mesh3d(meshes.add(build_dome_mesh(
                HEAD_DOME_RADIUS,
                HEAD_DOME_WIDTH_SEGMENTS,
                HEAD_DOME_HEIGHT_SEGMENTS,
            ))),
            MeshMaterial3d(dome_material),
            Transform::IDENTITY,
        ))
        .id();
    commands.entity(shell).add_child(dome);

    shell
}

fn spawn_sheaths(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
    root: Entity,
    cfg: &crate::engine::assets::scene_config::NeuronConfig,
) {
    let sheath_material = materials.add(StandardMaterial {
        base_color: Color::srgba(0.0, 1.0, 1.0, 0.8),
        unlit: true,
        alpha_mode: AlphaMode::Blend,
        ..default()
    });
    let sheath_mesh = meshes.add(Sphere::new(SHEATH_RADIUS));

    for i in 0..cfg.sheath_count {
        let t = i as f32 / cfg.sheath_count as f32;
        let sheath = commands
            .spawn((
                Sheath { t },
                Mesh3d(sheath_mesh.clone()),
                MeshMaterial3d(sheath_material.clone()),
                Transform::from_xyz(0.0, 0.0, -t * cfg.tube_length).with_scale(SHEATH_SCALE),
            ))
            .id();
        commands.entity(root).add_child(sheath);
    }
}

/// Spawn the terminal fan. Each terminal keeps its own straight-spined
/// chain (never seeks) and a per-terminal set of wave parameters drawn
/// once from the shared ranges.
fn spawn_terminal_cluster(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
    body_material: Handle<StandardMaterial>,
    cfg: &crate::engine::assets::scene_config::NeuronConfig,
    rng: &mut impl Rng,
) -> Entity {
    let bulb_material = materials.add(StandardMaterial {
        base_color: Color::srgb(1.0, 0.0, 0.0),
        cull_mode: None,
        ..default()
    });
    let bulb_mesh = meshes.add(Sphere::new(cfg.terminal_radius * BULB_RADIUS_SCALE));

    let cluster = commands
        .spawn((TerminalCluster, Transform::IDENTITY, Visibility::default()))
        .id();

    for i in 0..cfg.terminal_count {
        let angle = i as f32 / cfg.terminal_count as f32 * std::f32::consts::TAU;

        // Straight fan spine: outward in XY by the spread, back along -Z.
        let points: Vec<Vec3> = (0..=cfg.terminal_segments)
            .map(|j| {
                let t = j as f32 / cfg.terminal_segments as f32;
                Vec3::new(
                    angle.cos() * cfg.terminal_spread * t,
                    angle.sin() * cfg.terminal_spread * t,
                    -cfg.terminal_length * t,
                )
            })
            .collect();
        let tip = *points.last().unwrap_or(&Vec3::ZERO);

        let chain = Chain::new(points, 0.0, 0.0);
        let wave = WaveParams {
            amplitude: TERMINAL_AMPLITUDE_BASE + rng.random_range(0.0..TERMINAL_AMPLITUDE_RANGE),
            frequency: TERMINAL_FREQUENCY_BASE + rng.random_range(0.0..TERMINAL_FREQUENCY_RANGE),
            phase_speed: TERMINAL_SPEED_BASE + rng.random_range(0.0..TERMINAL_SPEED_RANGE),
            axes: WaveAxes::Perpendicular { base_angle: angle },
            intensity: IntensityCurve::QuadraticTip,
        };

        let spline = CatmullRomSpline::new(chain.current());
        let tube = build_tube_mesh(
            &spline,
            cfg.terminal_segments,
            cfg.terminal_radius,
            cfg.radial_segments,
        );

        let terminal = commands
            .spawn((
                Terminal {
                    chain,
                    wave,
                    radius: cfg.terminal_radius,
                    radial_segments: cfg.radial_segments,
                },
                Mesh3d(meshes.add(tube)),
                MeshMaterial3d(body_material.clone()),
                Transform::IDENTITY,
            ))
            .id();
        commands.entity(cluster).add_child(terminal);

        let bulb = commands
            .spawn((
                Bulb,
                Mesh3d(bulb_mesh.clone()),
                MeshMaterial3d(bulb_material.clone()),
                Transform::from_translation(tip),
            ))
            .id();
        commands.entity(terminal).add_child(bulb);
    }

    cluster
}

/// Advance any in-flight seek by one step. Runs before the wave step so the
/// wave reads the settled rest spine.
pub fn neuron_seek_system(mut bodies: Query<&mut NeuronBody>) {
    for mut body in &mut bodies {
        seek_step(&mut body.chain);
    }
}

/// Rewrite every chain's current spine from rest plus this frame's wave.
pub fn neuron_wave_system(
    time: Res<Time>,
    mut bodies: Query<&mut NeuronBody>,
    mut terminals: Query<&mut Terminal>,
) {
    let clock = time.elapsed_secs() * ANIMATION_TIME_SCALE;

    let body_params = WaveParams {
        amplitude: BODY_WAVE_AMPLITUDE,
        frequency: BODY_WAVE_FREQUENCY,
        phase_speed: BODY_WAVE_PHASE_SPEED,
        axes: WaveAxes::BodyXz,
        intensity: IntensityCurve::Uniform,
    };
    for mut body in &mut bodies {
        let (rest, current) = body.chain.spines_mut();
        apply_wave(rest, current, clock, &body_params);
    }

    let terminal_clock = clock * TERMINAL_TIME_FACTOR;
    for mut terminal in &mut terminals {
        let terminal = &mut *terminal;
        let (rest, current) = terminal.chain.spines_mut();
        apply_wave(rest, current, terminal_clock, &terminal.wave);
    }
}

/// Rebuild the tube meshes in place from the waved spines. The body also
/// refreshes its spline here, after the wave and before the attachments.
pub fn regenerate_chain_meshes(
    mut meshes: ResMut<Assets<Mesh>>,
    mut bodies: Query<(&mut NeuronBody, &Mesh3d)>,
    terminals: Query<(&Terminal, &Mesh3d)>,
) {
    for (mut body, mesh_handle) in &mut bodies {
        let body = &mut *body;
        body.curve = CatmullRomSpline::new(body.chain.current());
        let tube = build_tube_mesh(
            &body.curve,
            body.chain.segment_count(),
            body.tube_radius,
            body.radial_segments,
        );
        meshes.insert(&mesh_handle.0, tube);
    }

    for (terminal, mesh_handle) in &terminals {
        let spline = CatmullRomSpline::new(terminal.chain.current());
        let tube = build_tube_mesh(
            &spline,
            terminal.chain.segment_count(),
            terminal.radius,
            terminal.radial_segments,
        );
        meshes.insert(&mesh_handle.0, tube);
    }
}

/// Pin the head shell to the first chain point, facing the head direction.
pub fn update_head_attachment(
    bodies: Query<&NeuronBody>,
    mut shells: Query<&mut Transform, With<HeadShell>>,
) {
    let Ok(body) = bodies.single() else {
        return;
    };
    let Ok(mut transform) = shells.single_mut() else {
        return;
    };

    let spine = body.chain.current();
    transform.translation = spine[0];
    let direction = (spine[0] - spine[1]).normalize_or(Vec3::Z);
    transform.rotation = align_to(Vec3::Z, direction);
}

/// Slide each sheath to its arc-length station on the refreshed spline.
pub fn update_sheath_attachments(
    bodies: Query<&NeuronBody>,
    mut sheaths: Query<(&Sheath, &mut Transform)>,
) {
    let Ok(body) = bodies.single() else {
        return;
    };

    for (sheath, mut transform) in &mut sheaths {
        transform.translation = body.curve.point_at(sheath.t);
        let tangent = body.curve.tangent_at(sheath.t);
        transform.rotation = align_to(Vec3::Z, tangent);
    }
}

/// Pin the terminal cluster to the tail, facing the tail direction.
pub fn update_terminal_cluster(
    bodies: Query<&NeuronBody>,
    mut clusters: Query<&mut Transform, With<TerminalCluster>>,
) {
    let Ok(body) = bodies.single() else {
        return;
    };
    let Ok(mut transform) = clusters.single_mut() else {
        return;
    };

    let spine = body.chain.current();
    let tail = spine[spine.len() - 1];
    transform.translation = tail;
    let direction = (tail - spine[spine.len() - 2]).normalize_or(Vec3::NEG_Z);
    transform.rotation = align_to(Vec3::NEG_Z, direction);
}

/// Keep each bulb glued to its terminal's waved tip.
pub fn update_bulb_positions(
    terminals: Query<(&Terminal, &Children)>,
    mut bulbs: Query<&mut Transform, With<Bulb>>,
) {
    for (terminal, children) in &terminals {
        let spine = terminal.chain.current();
        let Some(tip) = spine.last() else {
            continue;
        };
        for child in children.iter() {
            if let Ok(mut transform) = bulbs.get_mut(child) {
                transform.translation = *tip;
            }
        }
    }
}
