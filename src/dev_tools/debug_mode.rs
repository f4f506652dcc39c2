use crate::kitchen::stove::Stove;
use bevy::input::common_conditions::input_just_pressed;
use bevy::prelude::*;

pub fn plugin(app: &mut App) {
    app.init_state::<DebugMode>();

    app.add_systems(
        Update,
        (
            toggle_debug_mode.run_if(input_just_pressed(KeyCode::KeyG)),
            heat_all_stoves.run_if(input_just_pressed(KeyCode::KeyH)),
        ),
    );
}

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, States)]
pub enum DebugMode {
    #[default]
    Normal,
    /// World inspector open.
    Inspect,
}

fn toggle_debug_mode(
    current: Res<State<DebugMode>>,
    mut next_mode: ResMut<NextState<DebugMode>>,
) {
    let next = match current.get() {
        DebugMode::Normal => DebugMode::Inspect,
        DebugMode::Inspect => DebugMode::Normal,
    };
    info!("debug mode: {:?}", next);
    next_mode.set(next);
}

fn heat_all_stoves(mut stoves: Query<&mut Stove>) {
    let mut heated = 0;
    for mut stove in &mut stoves {
        if !stove.heated {
            stove.heated = true;
            heated += 1;
        }
    }
    info!("turned on {heated} burners");
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::state::app::StatesPlugin;

    #[test]
    fn hotkey_lights_every_cold_stove() {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, StatesPlugin))
            .init_resource::<ButtonInput<KeyCode>>()
            .add_plugins(plugin);
        let cold = app
            .world_mut()
            .spawn(Stove {
                heated: false,
                fire: None,
            })
            .id();

        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(KeyCode::KeyH);
        app.update();

        assert!(app.world().get::<Stove>(cold).is_some_and(|stove| stove.heated));
    }
}
