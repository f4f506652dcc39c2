//! Spawn the kitchen for the stage picked on the map.

use crate::assets::meshes::ingredient_color;
use crate::assets::{KitchenAssets, MeshAssets};
use crate::audio::music;
use crate::config::{GameConfig, KitchenConfig};
use crate::gameplay::player::{
    ActivePlayer, COUNTER_OFFSET, PlayerRoster, TrailVisual, player,
};
use crate::kitchen::appliance::{Appliance, ApplianceUi, HeldItem};
use crate::kitchen::cutting_board::CuttingBoard;
use crate::kitchen::ingredient::{Ingredient, IngredientKind, Process};
use crate::kitchen::stove::Stove;
use crate::kitchen::ui::spawn_progress_bar;
use crate::map::CurrentStage;
use crate::screens::Screen;
use bevy::prelude::*;

/// Counters are 0.9 high and sit on the floor.
const COUNTER_Y: f32 = 0.45;
const PLAYER_Y: f32 = 0.8;
const PROP_OFFSET: Vec3 = Vec3::new(0.0, 0.5, 0.0);
const INDICATOR_OFFSET: Vec3 = Vec3::new(0.0, -0.75, 0.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StationKind {
    CuttingBoard,
    Stove { heated: bool },
}

#[derive(Debug, Clone, Copy)]
struct StationLayout {
    kind: StationKind,
    x: f32,
    z: f32,
    ingredient: Option<IngredientKind>,
}

#[derive(Debug)]
struct StageLayout {
    stations: &'static [StationLayout],
    players: &'static [Vec2],
}

const fn board(x: f32, z: f32, ingredient: Option<IngredientKind>) -> StationLayout {
    StationLayout {
        kind: StationKind::CuttingBoard,
        x,
        z,
        ingredient,
    }
}

const fn stove(x: f32, z: f32, heated: bool, ingredient: Option<IngredientKind>) -> StationLayout {
    StationLayout {
        kind: StationKind::Stove { heated },
        x,
        z,
        ingredient,
    }
}

const STAGES: &[StageLayout] = &[
    StageLayout {
        stations: &[
            board(-2.5, -2.0, Some(IngredientKind::Tomato)),
            board(0.0, -2.0, Some(IngredientKind::Lettuce)),
            stove(2.5, -2.0, true, Some(IngredientKind::Rice)),
        ],
        players: &[Vec2::new(-1.0, 0.5), Vec2::new(1.0, 0.5)],
    },
    StageLayout {
        stations: &[
            board(-3.0, -2.0, Some(IngredientKind::Fish)),
            board(-1.0, -2.0, None),
            stove(1.0, -2.0, true, Some(IngredientKind::SushiRice)),
            board(3.0, -2.0, Some(IngredientKind::SeaWeed)),
        ],
        players: &[Vec2::new(-1.5, 0.5), Vec2::new(1.5, 0.5)],
    },
    StageLayout {
        stations: &[
            board(-3.0, -2.0, Some(IngredientKind::Meat)),
            board(-1.0, -2.0, Some(IngredientKind::Cheese)),
            stove(1.0, -2.0, false, Some(IngredientKind::Meat)),
            stove(3.0, -2.0, true, None),
            board(0.0, 2.5, Some(IngredientKind::Tortilla)),
        ],
        players: &[Vec2::new(-1.5, 0.5), Vec2::new(1.5, 0.5)],
    },
    StageLayout {
        stations: &[
            board(-3.0, -2.0, Some(IngredientKind::Dough)),
            board(-1.0, -2.0, Some(IngredientKind::PizzaTomato)),
            board(1.0, -2.0, Some(IngredientKind::Pepperoni)),
            stove(3.0, -2.0, true, Some(IngredientKind::Chicken)),
            stove(-3.0, 2.5, true, Some(IngredientKind::Potato)),
        ],
        players: &[Vec2::new(-1.0, 0.5), Vec2::new(1.0, 0.5), Vec2::new(0.0, 1.5)],
    },
];

fn stage_layout(stage: usize) -> &'static StageLayout {
    &STAGES[stage % STAGES.len()]
}

/// A system that spawns the kitchen for [`CurrentStage`].
pub fn spawn_level(
    stage: Res<CurrentStage>,
    meshes: Res<MeshAssets>,
    assets: Res<KitchenAssets>,
    config: Res<GameConfig>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut commands: Commands,
) {
    let layout = stage_layout(stage.0);
    info!(
        "spawning stage {} with {} stations and {} players",
        stage.0,
        layout.stations.len(),
        layout.players.len()
    );

    commands.spawn((
        Name::new("Kitchen"),
        Transform::default(),
        Visibility::default(),
        StateScoped(Screen::Gameplay),
        children![
            (
                Name::new("Gameplay Music"),
                music(assets.music.clone()),
            ),
            (
                Name::new("Floor"),
                Mesh3d(meshes.floor.clone()),
                MeshMaterial3d(meshes.floor_material.clone()),
            ),
            (
                Name::new("Sun"),
                DirectionalLight {
                    shadows_enabled: true,
                    ..default()
                },
                Transform::from_xyz(4.0, 10.0, 6.0).looking_at(Vec3::ZERO, Vec3::Y),
            ),
        ],
    ));

    for station in layout.stations {
        spawn_station(&mut commands, &meshes, &mut materials, &config.kitchen, station);
    }

    let players: Vec<Entity> = layout
        .players
        .iter()
        .enumerate()
        .map(|(i, position)| {
            let indicator = commands
                .spawn((
                    Name::new("Selection Indicator"),
                    Mesh3d(meshes.indicator.clone()),
                    MeshMaterial3d(meshes.indicator_material.clone()),
                    Transform::from_translation(INDICATOR_OFFSET),
                    if i == 0 {
                        Visibility::Inherited
                    } else {
                        Visibility::Hidden
                    },
                ))
                .id();
            commands
                .spawn((
                    player(Vec3::new(position.x, PLAYER_Y, position.y), Some(indicator)),
                    Mesh3d(meshes.player.clone()),
                    MeshMaterial3d(meshes.player_material.clone()),
                ))
                .add_child(indicator)
                .id()
        })
        .collect();
    if let Some(first) = players.first() {
        commands.entity(*first).insert(ActivePlayer);
    }
    commands.insert_resource(PlayerRoster::new(players));
    commands.insert_resource(TrailVisual {
        mesh: meshes.spark.clone(),
        material: meshes.indicator_material.clone(),
    });
}

fn spawn_station(
    commands: &mut Commands,
    meshes: &MeshAssets,
    materials: &mut Assets<StandardMaterial>,
    config: &KitchenConfig,
    layout: &StationLayout,
) {
    let progress_bar = spawn_progress_bar(commands);
    let ingredient = layout.ingredient.map(|kind| {
        commands
            .spawn((
                Name::new(format!("Raw {kind}")),
                Ingredient::raw(kind),
                Mesh3d(meshes.ingredient.clone()),
                MeshMaterial3d(materials.add(StandardMaterial::from_color(ingredient_color(kind)))),
                Transform::from_translation(COUNTER_OFFSET),
                Visibility::Inherited,
            ))
            .id()
    });

    let station = commands
        .spawn((
            Mesh3d(meshes.counter.clone()),
            MeshMaterial3d(meshes.counter_material.clone()),
            Transform::from_xyz(layout.x, COUNTER_Y, layout.z),
            Visibility::Inherited,
            HeldItem(ingredient),
            ApplianceUi { progress_bar },
            StateScoped(Screen::Gameplay),
        ))
        .id();
    if let Some(ingredient) = ingredient {
        commands.entity(station).add_child(ingredient);
    }

    match layout.kind {
        StationKind::CuttingBoard => {
            let knife = commands
                .spawn((
                    Name::new("Knife"),
                    Mesh3d(meshes.knife.clone()),
                    MeshMaterial3d(meshes.metal_material.clone()),
                    Transform::from_translation(PROP_OFFSET + Vec3::new(0.2, 0.06, 0.15)),
                    Visibility::Inherited,
                    ChildOf(station),
                ))
                .id();
            commands.spawn((
                Name::new("Board"),
                Mesh3d(meshes.board.clone()),
                MeshMaterial3d(meshes.board_material.clone()),
                Transform::from_translation(PROP_OFFSET),
                ChildOf(station),
            ));
            commands.entity(station).insert((
                Name::new("Cutting Board"),
                CuttingBoard { knife: Some(knife) },
                Appliance::new(Process::Cutting, config.timer(), config.bar_offset()),
            ));
        }
        StationKind::Stove { heated } => {
            let fire = commands
                .spawn((
                    Name::new("Fire"),
                    Mesh3d(meshes.fire.clone()),
                    MeshMaterial3d(meshes.fire_material.clone()),
                    Transform::from_translation(PROP_OFFSET),
                    Visibility::Hidden,
                    ChildOf(station),
                ))
                .id();
            commands.spawn((
                Name::new("Pot"),
                Mesh3d(meshes.pot.clone()),
                MeshMaterial3d(meshes.metal_material.clone()),
                Transform::from_translation(PROP_OFFSET + Vec3::Y * 0.2),
                ChildOf(station),
            ));
            commands.entity(station).insert((
                Name::new("Stove"),
                Stove {
                    heated,
                    fire: Some(fire),
                },
                Appliance::new(Process::Cooking, config.timer(), config.bar_offset()),
            ));
        }
    }
}
