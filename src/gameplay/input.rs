use crate::gameplay::player::{ActivePlayer, InteractTarget, MoveIntent, PickUp, SwitchPlayer};
use crate::kitchen::appliance::BeginInteraction;
use bevy::prelude::*;
use bevy_enhanced_input::events::{Completed, Started};
use bevy_enhanced_input::prelude::*;

#[derive(InputContext)]
pub struct PlayerActions;

pub fn plugin(app: &mut App) {
    app.add_plugins(EnhancedInputPlugin);
    app.add_input_context::<PlayerActions>();
    app.add_observer(regular_binding);

    // the input context follows whichever player is active
    app.add_observer(give_input_to_active_player)
        .add_observer(take_input_from_inactive_player);

    app.add_observer(record_player_directional_input)
        .add_observer(stop_player_directional_input)
        .add_observer(interact)
        .add_observer(pick_up)
        .add_observer(switch_player);
}

#[derive(Debug, InputAction)]
#[input_action(output = Vec2)]
pub struct PlayerMoveAction;

/// Start or resume work at the station in front of the player.
#[derive(Debug, InputAction)]
#[input_action(output = bool)]
pub struct InteractAction;

#[derive(Debug, InputAction)]
#[input_action(output = bool)]
pub struct PickUpAction;

#[derive(Debug, InputAction)]
#[input_action(output = bool)]
pub struct SwitchPlayerAction;

fn regular_binding(
    trigger: Trigger<Binding<PlayerActions>>,
    mut players: Query<&mut Actions<PlayerActions>>,
) -> Result {
    // We have to bind the input mapping to the player at runtime
    let mut actions = players.get_mut(trigger.target())?;
    actions
        .bind::<PlayerMoveAction>()
        .to((
            Cardinal::wasd_keys(),
            Axial::left_stick(),
            Cardinal::arrow_keys(),
            Cardinal::dpad_buttons(),
        ))
        .with_modifiers(DeadZone::default());

    actions
        .bind::<InteractAction>()
        .to((KeyCode::KeyE, GamepadButton::West));
    actions
        .bind::<PickUpAction>()
        .to((KeyCode::Space, GamepadButton::South));
    actions
        .bind::<SwitchPlayerAction>()
        .to((KeyCode::Tab, GamepadButton::North));
    Ok(())
}

fn give_input_to_active_player(trigger: Trigger<OnAdd, ActivePlayer>, mut commands: Commands) {
    commands
        .entity(trigger.target())
        .insert(Actions::<PlayerActions>::default());
}

fn take_input_from_inactive_player(
    trigger: Trigger<OnRemove, ActivePlayer>,
    mut commands: Commands,
) {
    commands
        .entity(trigger.target())
        .try_remove::<Actions<PlayerActions>>();
}

fn record_player_directional_input(
    trigger: Trigger<Fired<PlayerMoveAction>>,
    mut intents: Query<&mut MoveIntent>,
) -> Result {
    intents.get_mut(trigger.target())?.0 = trigger.value;
    Ok(())
}

fn stop_player_directional_input(
    trigger: Trigger<Completed<PlayerMoveAction>>,
    mut intents: Query<&mut MoveIntent>,
) -> Result {
    intents.get_mut(trigger.target())?.0 = Vec2::ZERO;
    Ok(())
}

fn interact(
    trigger: Trigger<Started<InteractAction>>,
    targets: Query<&InteractTarget>,
    mut commands: Commands,
) -> Result {
    let actor = trigger.target();
    if let Some(station) = targets.get(actor)?.0 {
        commands.trigger_targets(BeginInteraction { actor }, station);
    }
    Ok(())
}

fn pick_up(trigger: Trigger<Started<PickUpAction>>, mut commands: Commands) {
    commands.trigger_targets(PickUp, trigger.target());
}

fn switch_player(_trigger: Trigger<Started<SwitchPlayerAction>>, mut commands: Commands) {
    commands.trigger(SwitchPlayer);
}
