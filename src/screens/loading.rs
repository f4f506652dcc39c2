//! Loads every asset collection, then hands over to the map.

use bevy::prelude::*;
use bevy_asset_loader::prelude::*;

use crate::assets::{KitchenAssets, MeshAssets};
use crate::kitchen::icons::IconTable;
use crate::{screens::Screen, theme::prelude::*};

pub(super) fn plugin(app: &mut App) {
    app.add_loading_state(
        LoadingState::new(Screen::Loading)
            .continue_to_state(Screen::Map)
            .load_collection::<KitchenAssets>()
            .init_resource::<MeshAssets>(),
    );

    app.add_systems(OnEnter(Screen::Loading), spawn_loading_screen);
    app.add_systems(OnExit(Screen::Loading), install_icon_table);
}

fn spawn_loading_screen(mut commands: Commands) {
    commands.spawn((
        widget::ui_root("Loading Screen"),
        StateScoped(Screen::Loading),
        children![widget::label("Loading...")],
    ));
}

fn install_icon_table(assets: Res<KitchenAssets>, mut commands: Commands) {
    commands.insert_resource(IconTable::new(assets.icons.clone()));
}
