//! The game's main screen states and transitions between them.

mod gameplay;
mod loading;
mod map;

use bevy::prelude::*;

pub(super) fn plugin(app: &mut App) {
    app.init_state::<Screen>();

    app.add_plugins((gameplay::plugin, loading::plugin, map::plugin));
}

/// The game's main screen states.
#[derive(States, Debug, Hash, PartialEq, Eq, Clone, Copy, Default)]
#[states(scoped_entities)]
pub enum Screen {
    #[default]
    Loading,
    /// Stage selection.
    Map,
    Gameplay,
}
