//! Shared behaviour of every cooking station: one [`InteractionSession`] per
//! station entity, advanced once per frame, finishing the held ingredient and
//! spawning a result artifact when the run completes.

use crate::AppSystems;
use crate::gameplay::player::{InteractTarget, PlayerAnimator};
use crate::kitchen::icons::IconTable;
use crate::kitchen::ingredient::{Ingredient, Process};
use crate::kitchen::progress::ProgressTimer;
use crate::kitchen::session::{BeginOutcome, InteractionSession, RunEnded};
use crate::kitchen::stove::Stove;
use crate::kitchen::ui::result_artifact;
use bevy::prelude::*;

pub(super) fn plugin(app: &mut App) {
    app.register_type::<HeldItem>();
    app.add_event::<ProcessingTicked>();

    app.add_systems(Update, advance_sessions.in_set(AppSystems::TickTimers));

    app.add_observer(on_begin_interaction)
        .add_observer(finish_session);
}

#[derive(Component, Debug)]
pub struct Appliance {
    pub session: InteractionSession,
    /// World-space offset from the station to where its progress bar floats.
    pub bar_offset: Vec3,
}

impl Appliance {
    pub fn new(process: Process, timer: ProgressTimer, bar_offset: Vec3) -> Self {
        Self {
            session: InteractionSession::new(process, timer),
            bar_offset,
        }
    }
}

/// The ingredient currently sitting on a station.
#[derive(Component, Debug, Default, Clone, Copy, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct HeldItem(pub Option<Entity>);

/// UI entities owned by a station, resolved when the station is spawned.
#[derive(Component, Debug, Clone, Copy)]
pub struct ApplianceUi {
    pub progress_bar: Entity,
}

/// Trigger this on a station to start (or resume) working its ingredient.
#[derive(Event, Debug, Clone, Copy)]
pub struct BeginInteraction {
    pub actor: Entity,
}

/// Sent once per progress increment, used for audio cues.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessingTicked {
    pub appliance: Entity,
    pub process: Process,
}

/// Triggered on a station after its ingredient has been processed.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessingFinished {
    pub process: Process,
    pub ingredient: Entity,
    pub actor: Option<Entity>,
}

#[derive(Event, Debug, Clone, Copy)]
struct SessionCompleted(RunEnded);

/// Resolves the ingredient on a station, ignoring stale references.
pub fn held_ingredient<'a>(
    held: &HeldItem,
    ingredients: &'a Query<&Ingredient>,
) -> Option<(Entity, &'a Ingredient)> {
    let entity = held.0?;
    ingredients.get(entity).ok().map(|ingredient| (entity, ingredient))
}

fn on_begin_interaction(
    trigger: Trigger<BeginInteraction>,
    mut appliances: Query<(&mut Appliance, &HeldItem, Option<&Stove>)>,
    ingredients: Query<&Ingredient>,
    mut actors: Query<&mut PlayerAnimator>,
) -> Result {
    let appliance_entity = trigger.target();
    let actor_entity = trigger.actor;
    let (mut appliance, held, stove) = appliances.get_mut(appliance_entity)?;
    let target = held_ingredient(held, &ingredients);

    let outcome = if let Some(stove) = stove {
        if !stove.is_lit(held) {
            debug!("{appliance_entity} is not lit, nothing to cook");
            return Ok(());
        }
        appliance.session.begin_unattended(target)
    } else {
        let mut actor = actors.get_mut(actor_entity)?;
        appliance
            .session
            .begin(actor_entity, &mut *actor, target, None)
    };

    match outcome {
        BeginOutcome::Started => info!(
            "{actor_entity} started {} {}",
            appliance.session.process(),
            target
                .map(|(_, ingredient)| ingredient.to_string())
                .unwrap_or_default()
        ),
        BeginOutcome::Resumed => info!("{actor_entity} resumed {appliance_entity}"),
        BeginOutcome::Ignored(reason) => {
            debug!("{actor_entity} can't use {appliance_entity}: {reason:?}")
        }
    }
    Ok(())
}

pub(crate) fn advance_sessions(
    time: Res<Time>,
    mut appliances: Query<(Entity, &mut Appliance, &HeldItem)>,
    ingredients: Query<&Ingredient>,
    mut actors: Query<&mut PlayerAnimator>,
    mut ticked: EventWriter<ProcessingTicked>,
    mut commands: Commands,
) {
    for (entity, mut appliance, held) in &mut appliances {
        if !appliance.session.is_running() {
            continue;
        }

        // the run belongs to the ingredient it started on, a swapped item does
        // not inherit its progress
        let held_entity = held_ingredient(held, &ingredients).map(|(item, _)| item);
        if held_entity.is_none() || held_entity != appliance.session.target() {
            if let Some(ended) = appliance.session.cancel() {
                info!(
                    "{entity} lost {}, {} cancelled",
                    ended.target,
                    appliance.session.process()
                );
                if let Some(mut animator) = ended.actor.and_then(|a| actors.get_mut(a).ok()) {
                    animator.can_interact = false;
                }
            }
            continue;
        }

        let process = appliance.session.process();
        let step = appliance.session.advance(time.delta());
        for _ in 0..step.ticks {
            ticked.write(ProcessingTicked {
                appliance: entity,
                process,
            });
        }
        if let Some(ended) = step.completed {
            commands.trigger_targets(SessionCompleted(ended), entity);
        }
    }
}

fn finish_session(
    trigger: Trigger<SessionCompleted>,
    appliances: Query<&Appliance>,
    mut ingredients: Query<&mut Ingredient>,
    mut actors: Query<(Entity, &mut PlayerAnimator, Option<&InteractTarget>)>,
    icons: Res<IconTable>,
    mut commands: Commands,
) -> Result {
    let appliance_entity = trigger.target();
    let SessionCompleted(RunEnded {
        actor: session_actor,
        target: ingredient_entity,
    }) = *trigger.event();
    let process = appliances.get(appliance_entity)?.session.process();

    for (entity, mut animator, target) in &mut actors {
        let working_here = target.is_some_and(|t| t.0 == Some(appliance_entity));
        if Some(entity) == session_actor || working_here {
            animator.can_interact = false;
        }
    }

    let Ok(mut ingredient) = ingredients.get_mut(ingredient_entity) else {
        warn!("{appliance_entity} finished {process} but {ingredient_entity} is gone");
        return Ok(());
    };
    ingredient.finish(process);
    info!("{appliance_entity} finished {process}: {}", *ingredient);

    match icons.get(ingredient.kind) {
        Ok(icon) => {
            commands.spawn(result_artifact(ingredient_entity, icon));
        }
        Err(error) => error!("no result artifact for {appliance_entity}: {error}"),
    }

    commands.trigger_targets(
        ProcessingFinished {
            process,
            ingredient: ingredient_entity,
            actor: session_actor,
        },
        appliance_entity,
    );
    Ok(())
}
