use bevy::prelude::*;
use bevy::render::render_resource::PrimitiveTopology;
use bevy_panorbit_camera::{PanOrbitCamera, PanOrbitCameraPlugin};
use tetbody_xpbd::{Simulation, SimulationParams, SoftBody, TETRAHEDRON_FACES};

/// Frames stalled longer than this (window drag, breakpoint) are not worth
/// simulating in one go.
const MAX_FRAME_DT: f32 = 1.0 / 30.0;

#[derive(Resource)]
struct Sim(Simulation);

#[derive(Resource)]
struct BodyMesh(Handle<Mesh>);

fn main() {
    App::new()
        .add_plugins(DefaultPlugins)
        .add_plugins(PanOrbitCameraPlugin)
        .add_systems(Startup, setup)
        .add_systems(Update, (step_simulation, sync_body_mesh, draw_edges))
        .run();
}

fn setup(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        Camera3dBundle {
            transform: Transform::from_xyz(0., 1.5, 6.).looking_at(Vec3::ZERO, Vec3::Y),
            ..default()
        },
        PanOrbitCamera::default(),
    ));

    let params = SimulationParams::default();

    // ground plane
    commands.spawn(PbrBundle {
        mesh: meshes.add(Mesh::from(shape::Plane::from_size(10.0))),
        material: materials.add(Color::rgb(0.3, 0.5, 0.3).into()),
        transform: Transform::from_xyz(0.0, params.ground_y, 0.0),
        ..default()
    });

    // light
    commands.spawn(PointLightBundle {
        point_light: PointLight {
            intensity: 1500.0,
            shadows_enabled: true,
            ..default()
        },
        transform: Transform::from_xyz(4.0, 8.0, 4.0),
        ..default()
    });

    let mut simulation = Simulation::new(params);
    simulation.add_body(SoftBody::single_tetrahedron());

    let mesh = meshes.add(body_mesh(&simulation.bodies()[0]));
    commands.spawn(PbrBundle {
        mesh: mesh.clone(),
        material: materials.add(Color::rgb(1.0, 0.5, 0.2).into()),
        ..default()
    });
    commands.insert_resource(BodyMesh(mesh));
    commands.insert_resource(Sim(simulation));
}

fn step_simulation(time: Res<Time>, mut sim: ResMut<Sim>) {
    sim.0.step(time.delta_seconds().min(MAX_FRAME_DT));
}

/// Rewrite the render mesh from the current particle positions.
fn sync_body_mesh(sim: Res<Sim>, body_mesh: Res<BodyMesh>, mut meshes: ResMut<Assets<Mesh>>) {
    let Some(mesh) = meshes.get_mut(&body_mesh.0) else {
        return;
    };
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, face_positions(&sim.0.bodies()[0]));
    mesh.compute_flat_normals();
}

fn draw_edges(mut gizmos: Gizmos, sim: Res<Sim>) {
    for body in sim.0.bodies() {
        for edge in body.edges.iter() {
            gizmos.line(
                body.particles[edge.a].position,
                body.particles[edge.b].position,
                Color::WHITE,
            );
        }
    }
}

fn body_mesh(body: &SoftBody) -> Mesh {
    let mut mesh = Mesh::new(PrimitiveTopology::TriangleList);
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, face_positions(body));
    mesh.compute_flat_normals();
    mesh
}

/// Unindexed triangle soup, one vertex triple per face, so flat normals
/// stay per-face.
fn face_positions(body: &SoftBody) -> Vec<[f32; 3]> {
    TETRAHEDRON_FACES
        .iter()
        .flat_map(|face| face.iter().map(|&i| body.particles[i].position.to_array()))
        .collect()
}
