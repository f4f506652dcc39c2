use crate::gameplay::player::ActivePlayer;
use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::prelude::*;
use bevy::render::camera::Exposure;

pub fn plugin(app: &mut App) {
    // systems
    app.add_systems(Startup, spawn_camera);
    app.add_systems(Update, camera_follow);

    // reflection
    app.register_type::<CameraProperties>();
}

/// The camera the kitchen is viewed through. Screen-space UI projects through it.
#[derive(Component, Debug, Default)]
pub struct SceneCamera;

#[derive(Component, Debug, Clone, Copy, PartialEq, Default, Reflect)]
#[reflect(Component)]
pub struct CameraProperties {
    camera_follow_snappiness: f32,
}

const INITIAL_Z_OFFSET: f32 = 14.0;
/// Half extents of the area the camera may pan over.
const KITCHEN_HALF_WIDTH: f32 = 6.0;
const KITCHEN_HALF_DEPTH: f32 = 4.0;

pub fn spawn_camera(mut commands: Commands) {
    commands.spawn((
        Name::new("Main Camera"),
        SceneCamera,
        Camera3d::default(),
        Msaa::Sample4,
        IsDefaultUiCamera,
        CameraProperties {
            camera_follow_snappiness: 4.0,
        },
        Transform::from_xyz(0., 16., INITIAL_Z_OFFSET).looking_at(Vec3::ZERO, Vec3::Y),
        Camera {
            clear_color: Color::srgb_u8(36, 28, 24).into(),
            ..default()
        },
        Projection::from(PerspectiveProjection {
            fov: 40.0_f32.to_radians(),
            ..default()
        }),
        Exposure::INDOOR,
        Tonemapping::TonyMcMapface,
    ));
}

fn camera_follow(
    mut camera: Query<(&mut Transform, &CameraProperties), With<SceneCamera>>,
    target: Query<&Transform, (With<ActivePlayer>, Without<SceneCamera>)>,
    time: Res<Time<Real>>,
) {
    let (Ok((mut camera_transform, properties)), Ok(target_transform)) =
        (camera.single_mut(), target.single())
    else {
        return;
    };

    let min_z = -KITCHEN_HALF_DEPTH + INITIAL_Z_OFFSET;
    let max_z = KITCHEN_HALF_DEPTH + INITIAL_Z_OFFSET;
    let bounded_target_position = Vec3::new(
        target_transform
            .translation
            .x
            .clamp(-KITCHEN_HALF_WIDTH, KITCHEN_HALF_WIDTH),
        camera_transform.translation.y,
        (target_transform.translation.z + INITIAL_Z_OFFSET).clamp(min_z, max_z),
    );

    //smoothly interpolate camera position to target position
    let translation = camera_transform.translation.lerp(
        bounded_target_position,
        (time.delta_secs() * properties.camera_follow_snappiness).min(1.0),
    );
    camera_transform.translation = translation;
}
