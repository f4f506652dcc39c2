use crate::AppSystems;
use crate::assets::KitchenAssets;
use crate::kitchen::appliance::{ProcessingFinished, ProcessingTicked};
use crate::kitchen::ingredient::Process;
use bevy::prelude::*;
use rand::{Rng, thread_rng};

pub(super) fn plugin(app: &mut App) {
    app.add_systems(Update, play_tick_cues.in_set(AppSystems::Update));
    app.add_observer(play_finish_cue);
}

/// An organizational marker component that should be added to a spawned [`AudioPlayer`] if it's in the
/// general "music" category (e.g. global background music, soundtrack).
///
/// This can then be used to query for and operate on sounds in that category.
#[derive(Component, Default)]
pub struct Music;

/// A music audio instance.
pub fn music(handle: Handle<AudioSource>) -> impl Bundle {
    (AudioPlayer(handle), PlaybackSettings::LOOP, Music)
}

/// An organizational marker component that should be added to a spawned [`AudioPlayer`] if it's in the
/// general "sound effect" category (e.g. footsteps, the sound of a magic spell, a door opening).
///
/// This can then be used to query for and operate on sounds in that category.
#[derive(Component, Default)]
pub struct SoundEffect;

/// A sound effect audio instance.
pub fn sound_effect(handle: Handle<AudioSource>) -> impl Bundle {
    (AudioPlayer(handle), PlaybackSettings::DESPAWN, SoundEffect)
}

/// A sound effect with a little pitch variation, for sounds that repeat a lot.
pub fn varied_sound_effect(handle: Handle<AudioSource>) -> impl Bundle {
    let speed = thread_rng().gen_range(0.92..1.08);
    (
        AudioPlayer(handle),
        PlaybackSettings::DESPAWN.with_speed(speed),
        SoundEffect,
    )
}

fn play_tick_cues(
    mut ticks: EventReader<ProcessingTicked>,
    assets: Option<Res<KitchenAssets>>,
    mut commands: Commands,
) {
    let Some(assets) = assets else {
        ticks.clear();
        return;
    };
    for tick in ticks.read() {
        let handle = match tick.process {
            Process::Cutting => assets.cut.clone(),
            Process::Cooking => assets.sizzle.clone(),
        };
        commands.spawn(varied_sound_effect(handle));
    }
}

fn play_finish_cue(
    trigger: Trigger<ProcessingFinished>,
    assets: Option<Res<KitchenAssets>>,
    mut commands: Commands,
) {
    let finished = trigger.event();
    debug!(
        "{} of {} done, worked by {:?}",
        finished.process, finished.ingredient, finished.actor
    );
    if let Some(assets) = assets {
        commands.spawn(sound_effect(assets.done.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CUT: Handle<AudioSource> = Handle::weak_from_u128(1);
    const SIZZLE: Handle<AudioSource> = Handle::weak_from_u128(2);
    const DONE: Handle<AudioSource> = Handle::weak_from_u128(3);

    fn audio_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .add_event::<ProcessingTicked>()
            .insert_resource(KitchenAssets {
                icons: Vec::new(),
                cut: CUT,
                sizzle: SIZZLE,
                done: DONE,
                switch: Handle::weak_from_u128(4),
                music: Handle::weak_from_u128(5),
            })
            .add_plugins(plugin);
        app
    }

    fn played(app: &mut App, sound: &Handle<AudioSource>) -> usize {
        let world = app.world_mut();
        let mut players = world.query::<&AudioPlayer>();
        players
            .iter(world)
            .filter(|player| player.0 == *sound)
            .count()
    }

    #[test]
    fn every_tick_plays_its_station_cue() {
        let mut app = audio_app();
        let station = Entity::from_raw(3);
        for process in [Process::Cutting, Process::Cutting, Process::Cooking] {
            app.world_mut().send_event(ProcessingTicked {
                appliance: station,
                process,
            });
        }
        app.update();

        assert_eq!(played(&mut app, &CUT), 2);
        assert_eq!(played(&mut app, &SIZZLE), 1);
        assert_eq!(played(&mut app, &DONE), 0);
    }

    #[test]
    fn finishing_plays_the_done_cue() {
        let mut app = audio_app();
        app.world_mut().trigger(ProcessingFinished {
            process: Process::Cooking,
            ingredient: Entity::from_raw(4),
            actor: None,
        });
        app.update();

        assert_eq!(played(&mut app, &DONE), 1);
        assert_eq!(played(&mut app, &SIZZLE), 0);
    }
}
