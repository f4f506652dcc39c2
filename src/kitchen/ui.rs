//! Screen-space feedback for stations: the floating progress bar and the
//! result icons that follow finished ingredients around.

use crate::AppSystems;
use crate::gameplay::camera::SceneCamera;
use crate::kitchen::appliance::{Appliance, ApplianceUi};
use crate::kitchen::ingredient::Ingredient;
use crate::screens::Screen;
use crate::theme::palette as ui_palette;
use bevy::{prelude::*, ui::Val::*};

const BAR_WIDTH: f32 = 64.0;
const BAR_HEIGHT: f32 = 10.0;
const ARTIFACT_SIZE: f32 = 36.0;
/// Result icons float this far above their ingredient.
const ARTIFACT_OFFSET: Vec3 = Vec3::new(0.0, 0.8, 0.0);

pub(super) fn plugin(app: &mut App) {
    app.add_systems(
        Update,
        (sync_progress_bars, track_result_artifacts).in_set(AppSystems::Update),
    );
}

#[derive(Component, Debug, Clone, Copy)]
pub struct ProgressBar {
    fill: Entity,
}

#[derive(Component, Debug)]
struct ProgressFill;

/// The icon shown for a finished ingredient. Holds the ingredient entity only
/// to look up where to draw itself and goes away once that entity does.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct ResultArtifact {
    pub ingredient: Entity,
    pub icon: Handle<Image>,
}

/// Projects a world position into viewport coordinates.
pub fn screen_position(
    camera: &Camera,
    camera_transform: &GlobalTransform,
    world_position: Vec3,
) -> Option<Vec2> {
    camera
        .world_to_viewport(camera_transform, world_position)
        .ok()
}

pub fn spawn_progress_bar(commands: &mut Commands) -> Entity {
    let fill = commands
        .spawn((
            Name::new("Progress Fill"),
            ProgressFill,
            Node {
                width: Percent(0.0),
                height: Percent(100.0),
                ..default()
            },
            BackgroundColor(ui_palette::PROGRESS_FILL),
        ))
        .id();
    commands
        .spawn((
            Name::new("Progress Bar"),
            ProgressBar { fill },
            Node {
                position_type: PositionType::Absolute,
                width: Px(BAR_WIDTH),
                height: Px(BAR_HEIGHT),
                border: UiRect::all(Px(1.0)),
                ..default()
            },
            BackgroundColor(ui_palette::PROGRESS_BACKGROUND),
            BorderColor(ui_palette::PROGRESS_BORDER),
            Visibility::Hidden,
            StateScoped(Screen::Gameplay),
        ))
        .add_child(fill)
        .id()
}

pub fn result_artifact(ingredient: Entity, icon: Handle<Image>) -> impl Bundle {
    (
        Name::new("Result Artifact"),
        ResultArtifact {
            ingredient,
            icon: icon.clone(),
        },
        Node {
            position_type: PositionType::Absolute,
            width: Px(ARTIFACT_SIZE),
            height: Px(ARTIFACT_SIZE),
            ..default()
        },
        ImageNode::new(icon),
        StateScoped(Screen::Gameplay),
    )
}

fn sync_progress_bars(
    appliances: Query<(&Appliance, &GlobalTransform, &ApplianceUi)>,
    mut bars: Query<(&ProgressBar, &mut Node, &mut Visibility), Without<ProgressFill>>,
    mut fills: Query<&mut Node, With<ProgressFill>>,
    camera: Query<(&Camera, &GlobalTransform), With<SceneCamera>>,
) {
    let camera = camera.single().ok();
    for (appliance, transform, ui) in &appliances {
        let Ok((bar, mut node, mut visibility)) = bars.get_mut(ui.progress_bar) else {
            continue;
        };
        let view = appliance.session.progress_bar();
        *visibility = if view.visible {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
        if let Ok(mut fill) = fills.get_mut(bar.fill) {
            fill.width = Percent(view.value * 100.0);
        }
        if !view.visible {
            continue;
        }

        let world_position = transform.translation() + appliance.bar_offset;
        if let Some(position) = camera
            .and_then(|(camera, camera_transform)| screen_position(camera, camera_transform, world_position))
        {
            node.left = Px(position.x - BAR_WIDTH / 2.0);
            node.top = Px(position.y - BAR_HEIGHT / 2.0);
        }
    }
}

fn track_result_artifacts(
    mut artifacts: Query<(Entity, &ResultArtifact, &mut Node)>,
    ingredients: Query<&GlobalTransform, With<Ingredient>>,
    camera: Query<(&Camera, &GlobalTransform), With<SceneCamera>>,
    mut commands: Commands,
) {
    let camera = camera.single().ok();
    for (entity, artifact, mut node) in &mut artifacts {
        let Ok(ingredient) = ingredients.get(artifact.ingredient) else {
            commands.entity(entity).despawn();
            continue;
        };
        let world_position = ingredient.translation() + ARTIFACT_OFFSET;
        if let Some(position) = camera
            .and_then(|(camera, camera_transform)| screen_position(camera, camera_transform, world_position))
        {
            node.left = Px(position.x - ARTIFACT_SIZE / 2.0);
            node.top = Px(position.y - ARTIFACT_SIZE / 2.0);
        }
    }
}
