//! Cutting boards need a player standing at them. Any player can start the
//! chop, and walking away pauses it until someone interacts again.

use crate::AppSystems;
use crate::gameplay::player::{InteractTarget, PlayerAnimator};
use crate::kitchen::appliance::{Appliance, HeldItem, advance_sessions};
use crate::kitchen::session::SessionState;
use bevy::prelude::*;

pub(super) fn plugin(app: &mut App) {
    app.register_type::<CuttingBoard>();
    app.add_systems(
        Update,
        (
            pause_abandoned_boards
                .before(advance_sessions)
                .in_set(AppSystems::TickTimers),
            toggle_knife.in_set(AppSystems::Update),
        ),
    );
}

#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct CuttingBoard {
    /// The knife prop lying on the empty board.
    pub knife: Option<Entity>,
}

fn pause_abandoned_boards(
    mut boards: Query<(Entity, &mut Appliance), With<CuttingBoard>>,
    mut actors: Query<(&InteractTarget, &mut PlayerAnimator)>,
) {
    for (board, mut appliance) in &mut boards {
        if appliance.session.state() != SessionState::Active {
            continue;
        }
        let Some(actor) = appliance.session.actor() else {
            continue;
        };
        let Ok((target, mut animator)) = actors.get_mut(actor) else {
            continue;
        };
        if target.0 != Some(board) {
            debug!("{actor} walked away from {board}, pausing");
            appliance.session.pause(true);
            animator.can_interact = false;
        }
    }
}

fn toggle_knife(
    boards: Query<(&CuttingBoard, &HeldItem), Changed<HeldItem>>,
    mut knives: Query<&mut Visibility>,
) {
    for (board, held) in &boards {
        let Some(knife) = board.knife else {
            continue;
        };
        if let Ok(mut visibility) = knives.get_mut(knife) {
            *visibility = if held.0.is_none() {
                Visibility::Inherited
            } else {
                Visibility::Hidden
            };
        }
    }
}
