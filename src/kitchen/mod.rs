//! Cooking stations and the ingredients they work on.
//!
//! The timing core ([`progress`], [`session`]) is plain Rust driven by explicit
//! ticks. The remaining modules wire it into the ECS: stations are entities with
//! an [`appliance::Appliance`] component, players start work on them by
//! triggering [`appliance::BeginInteraction`].

use bevy::prelude::*;

pub mod appliance;
pub mod cutting_board;
pub mod icons;
pub mod ingredient;
pub mod progress;
pub mod session;
pub mod stove;
pub mod ui;

pub(super) fn plugin(app: &mut App) {
    app.register_type::<ingredient::Ingredient>();
    app.init_resource::<icons::IconTable>();

    app.add_plugins((
        appliance::plugin,
        cutting_board::plugin,
        stove::plugin,
        ui::plugin,
    ));
}
