//! The kitchen floor: cooks, how they are controlled, the camera following
//! them and the stage they work in.

use bevy::prelude::*;

pub mod camera;
mod input;
pub mod level;
pub mod player;

pub(super) fn plugin(app: &mut App) {
    app.add_plugins((camera::plugin, input::plugin, player::plugin));
}
