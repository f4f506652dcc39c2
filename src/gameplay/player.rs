//! Player-specific behavior: the roster of cooks, which one the input drives,
//! what each is standing in front of, and what each is carrying.

use crate::AppSystems;
use crate::assets::KitchenAssets;
use crate::audio::sound_effect;
use crate::config::GameConfig;
use crate::kitchen::appliance::{Appliance, HeldItem};
use crate::kitchen::session::Actor;
use crate::screens::Screen;
use bevy::prelude::*;
use std::time::Duration;

const SWITCH_TRAIL_SECONDS: f32 = 0.35;
/// Where a carried ingredient sits relative to the player.
const CARRY_OFFSET: Vec3 = Vec3::new(0.0, 1.2, 0.6);
/// Where a placed ingredient sits relative to the station.
pub(crate) const COUNTER_OFFSET: Vec3 = Vec3::new(0.0, 0.6, 0.0);

pub(super) fn plugin(app: &mut App) {
    app.register_type::<Player>()
        .register_type::<ActivePlayer>()
        .register_type::<InteractTarget>()
        .register_type::<Carrying>()
        .register_type::<PlayerAnimator>()
        .register_type::<MoveIntent>();

    app.init_resource::<PlayerRoster>();

    app.add_systems(
        Update,
        (
            apply_movement,
            update_interact_targets,
            move_switch_trails,
            play_animation_triggers,
        )
            .chain()
            .in_set(AppSystems::Update),
    );

    app.add_observer(on_switch_player).add_observer(on_pick_up);
}

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct Player {
    /// The ring under the player shown while it is the one being controlled.
    pub indicator: Option<Entity>,
}

/// Marks the player that currently receives input.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
#[reflect(Component)]
pub struct ActivePlayer;

/// The station a player is close enough to use.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
#[reflect(Component)]
pub struct InteractTarget(pub Option<Entity>);

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
#[reflect(Component)]
pub struct Carrying(pub Option<Entity>);

/// Camera-relative movement requested by the input layer, cleared on release.
#[derive(Component, Debug, Clone, Copy, PartialEq, Default, Reflect)]
#[reflect(Component)]
pub struct MoveIntent(pub Vec2);

/// Animation state the rig reads from. Triggers queue up until the animation
/// layer drains them.
#[derive(Component, Debug, Clone, Default, Reflect)]
#[reflect(Component)]
pub struct PlayerAnimator {
    pub can_interact: bool,
    #[reflect(ignore)]
    triggers: Vec<&'static str>,
}

impl PlayerAnimator {
    pub fn pending_triggers(&self) -> &[&'static str] {
        &self.triggers
    }

    pub fn drain_triggers(&mut self) -> impl Iterator<Item = &'static str> + '_ {
        self.triggers.drain(..)
    }
}

impl Actor for PlayerAnimator {
    fn set_can_interact(&mut self, can_interact: bool) {
        self.can_interact = can_interact;
    }

    fn trigger_animation(&mut self, name: &'static str) {
        self.triggers.push(name);
    }
}

/// Every cook in the level, in switching order.
#[derive(Resource, Debug, Default, Clone, PartialEq, Eq)]
pub struct PlayerRoster {
    players: Vec<Entity>,
    current: usize,
}

impl PlayerRoster {
    pub fn new(players: Vec<Entity>) -> Self {
        Self {
            players,
            current: 0,
        }
    }

    pub fn current(&self) -> Option<Entity> {
        self.players.get(self.current).copied()
    }

    /// The previous and the new player [`advance`](Self::advance) would
    /// switch between, or `None` when there is nobody to switch to.
    pub fn upcoming(&self) -> Option<(Entity, Entity)> {
        let from = self.current()?;
        let to = self.players[(self.current + 1) % self.players.len()];
        (from != to).then_some((from, to))
    }

    /// Moves control to the next player, wrapping around.
    pub fn advance(&mut self) -> Option<(Entity, Entity)> {
        let switch = self.upcoming()?;
        self.current = (self.current + 1) % self.players.len();
        Some(switch)
    }
}

/// Trigger to hand control to the next player in the roster.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct SwitchPlayer;

/// Trigger on a player to lift the ingredient off the station in front of it,
/// or put the carried one down there.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct PickUp;

/// Shared handles for the switch trail, created with the level.
#[derive(Resource, Debug, Clone)]
pub struct TrailVisual {
    pub mesh: Handle<Mesh>,
    pub material: Handle<StandardMaterial>,
}

/// A small spark flying from the previous player to the new one.
#[derive(Component, Debug)]
pub struct SwitchTrail {
    origin: Vec3,
    target: Entity,
    timer: Timer,
}

fn on_switch_player(
    _trigger: Trigger<SwitchPlayer>,
    mut roster: ResMut<PlayerRoster>,
    players: Query<(&Player, &GlobalTransform)>,
    mut indicators: Query<&mut Visibility>,
    trail: Option<Res<TrailVisual>>,
    assets: Option<Res<KitchenAssets>>,
    mut commands: Commands,
) {
    let Some((from, to)) = roster.upcoming() else {
        debug!("nobody to switch to");
        return;
    };
    let (Ok((old_player, old_transform)), Ok((new_player, _))) = (players.get(from), players.get(to))
    else {
        warn!("can't switch from {from} to {to}, one of them is gone");
        return;
    };
    roster.advance();

    for (indicator, visible) in [(old_player.indicator, false), (new_player.indicator, true)] {
        if let Some(mut visibility) = indicator.and_then(|e| indicators.get_mut(e).ok()) {
            *visibility = if visible {
                Visibility::Inherited
            } else {
                Visibility::Hidden
            };
        }
    }

    commands
        .entity(from)
        .remove::<ActivePlayer>()
        .insert(MoveIntent::default());
    commands.entity(to).insert(ActivePlayer);

    let origin = old_transform.translation();
    let mut trail_entity = commands.spawn((
        Name::new("Switch Trail"),
        SwitchTrail {
            origin,
            target: to,
            timer: Timer::from_seconds(SWITCH_TRAIL_SECONDS, TimerMode::Once),
        },
        Transform::from_translation(origin),
        StateScoped(Screen::Gameplay),
    ));
    if let Some(trail) = trail {
        trail_entity.insert((
            Mesh3d(trail.mesh.clone()),
            MeshMaterial3d(trail.material.clone()),
        ));
    }
    if let Some(assets) = assets {
        commands.spawn(sound_effect(assets.switch.clone()));
    }

    info!("switched control from {from} to {to}");
}

fn on_pick_up(
    trigger: Trigger<PickUp>,
    mut players: Query<(&InteractTarget, &mut Carrying)>,
    mut stations: Query<&mut HeldItem>,
    mut commands: Commands,
) -> Result {
    let player = trigger.target();
    let (target, mut carrying) = players.get_mut(player)?;
    let Some(station) = target.0 else {
        return Ok(());
    };
    let mut held = stations.get_mut(station)?;

    match (carrying.0, held.0) {
        (Some(item), None) => {
            held.0 = Some(item);
            carrying.0 = None;
            commands.entity(station).add_child(item);
            commands
                .entity(item)
                .insert(Transform::from_translation(COUNTER_OFFSET));
            info!("{player} put {item} on {station}");
        }
        (None, Some(item)) => {
            held.0 = None;
            carrying.0 = Some(item);
            commands.entity(player).add_child(item);
            commands
                .entity(item)
                .insert(Transform::from_translation(CARRY_OFFSET));
            info!("{player} picked up {item} from {station}");
        }
        _ => debug!("{player} has nothing to swap with {station}"),
    }
    Ok(())
}

fn apply_movement(
    mut players: Query<(&MoveIntent, &mut Transform), With<ActivePlayer>>,
    camera: Query<&Transform, (With<Camera3d>, Without<ActivePlayer>)>,
    config: Res<GameConfig>,
    time: Res<Time>,
) {
    let Ok(camera_transform) = camera.single() else {
        return;
    };
    let camera_right = camera_transform
        .right()
        .as_vec3()
        .with_y(0.)
        .normalize_or_zero();
    let camera_forward = camera_transform
        .forward()
        .as_vec3()
        .with_y(0.)
        .normalize_or_zero();

    for (intent, mut transform) in &mut players {
        let direction = (camera_right * intent.0.x + camera_forward * intent.0.y).normalize_or_zero();
        if direction == Vec3::ZERO {
            continue;
        }
        transform.translation += direction * config.players.walk_speed * time.delta_secs();
        transform.look_to(direction, Vec3::Y);
    }
}

/// Picks the closest station within reach for every player.
fn update_interact_targets(
    mut players: Query<(&GlobalTransform, &mut InteractTarget), With<Player>>,
    stations: Query<(Entity, &GlobalTransform), With<Appliance>>,
    config: Res<GameConfig>,
) {
    let reach = config.players.interact_reach;
    for (player_transform, mut target) in &mut players {
        let position = player_transform.translation();
        let closest = stations
            .iter()
            .map(|(entity, transform)| (entity, transform.translation().distance(position)))
            .filter(|(_, distance)| *distance <= reach)
            .min_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(entity, _)| entity);
        target.set_if_neq(InteractTarget(closest));
    }
}

fn move_switch_trails(
    mut trails: Query<(Entity, &mut SwitchTrail, &mut Transform)>,
    targets: Query<&GlobalTransform, With<Player>>,
    time: Res<Time>,
    mut commands: Commands,
) {
    for (entity, mut trail, mut transform) in &mut trails {
        trail.timer.tick(time.delta());
        let Ok(target) = targets.get(trail.target) else {
            commands.entity(entity).despawn();
            continue;
        };
        transform.translation = trail
            .origin
            .lerp(target.translation(), trail.timer.fraction());
        if trail.timer.finished() {
            commands.entity(entity).despawn();
        }
    }
}

fn play_animation_triggers(mut animators: Query<(Entity, &mut PlayerAnimator)>) {
    for (entity, mut animator) in &mut animators {
        if animator.pending_triggers().is_empty() {
            continue;
        }
        for name in animator.drain_triggers() {
            debug!("{entity} plays {name}");
        }
    }
}

/// Spawns a cook. Whoever should start with control also needs [`ActivePlayer`].
pub fn player(position: Vec3, indicator: Option<Entity>) -> impl Bundle {
    (
        Name::new("Player"),
        Player { indicator },
        Transform::from_translation(position),
        Visibility::Inherited,
        InteractTarget::default(),
        Carrying::default(),
        MoveIntent::default(),
        PlayerAnimator::default(),
        StateScoped(Screen::Gameplay),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kitchen::ingredient::{Ingredient, IngredientKind};
    use bevy::time::TimeUpdateStrategy;

    fn player_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(100)))
            .insert_resource(GameConfig::default())
            .add_plugins(plugin);
        app.update();
        app
    }

    fn spawn_players(app: &mut App, count: usize) -> Vec<(Entity, Entity)> {
        let world = app.world_mut();
        let spawned: Vec<(Entity, Entity)> = (0..count)
            .map(|i| {
                let indicator = world
                    .spawn(if i == 0 {
                        Visibility::Inherited
                    } else {
                        Visibility::Hidden
                    })
                    .id();
                let player = world
                    .spawn((
                        Player {
                            indicator: Some(indicator),
                        },
                        GlobalTransform::from_translation(Vec3::X * i as f32 * 4.0),
                        InteractTarget::default(),
                        Carrying::default(),
                    ))
                    .id();
                (player, indicator)
            })
            .collect();
        world.entity_mut(spawned[0].0).insert(ActivePlayer);
        world.insert_resource(PlayerRoster::new(spawned.iter().map(|(p, _)| *p).collect()));
        spawned
    }

    #[test]
    fn roster_wraps_around() {
        let a = Entity::from_raw(1);
        let b = Entity::from_raw(2);
        let c = Entity::from_raw(3);
        let mut roster = PlayerRoster::new(vec![a, b, c]);
        assert_eq!(roster.upcoming(), Some((a, b)));
        assert_eq!(roster.current(), Some(a));
        assert_eq!(roster.advance(), Some((a, b)));
        assert_eq!(roster.advance(), Some((b, c)));
        assert_eq!(roster.advance(), Some((c, a)));
        assert_eq!(roster.current(), Some(a));
    }

    #[test]
    fn roster_needs_two_players_to_switch() {
        assert_eq!(PlayerRoster::default().advance(), None);
        let mut solo = PlayerRoster::new(vec![Entity::from_raw(1)]);
        assert_eq!(solo.advance(), None);
        assert_eq!(solo.current(), Some(Entity::from_raw(1)));
    }

    #[test]
    fn switching_moves_control_and_indicator() {
        let mut app = player_app();
        let players = spawn_players(&mut app, 2);
        let (first, first_ring) = players[0];
        let (second, second_ring) = players[1];

        app.world_mut().trigger(SwitchPlayer);
        app.update();

        let world = app.world();
        assert!(world.get::<ActivePlayer>(first).is_none());
        assert!(world.get::<ActivePlayer>(second).is_some());
        assert_eq!(world.get::<Visibility>(first_ring), Some(&Visibility::Hidden));
        assert_eq!(world.get::<Visibility>(second_ring), Some(&Visibility::Inherited));
        assert_eq!(world.resource::<PlayerRoster>().current(), Some(second));

        app.world_mut().trigger(SwitchPlayer);
        app.update();
        assert!(app.world().get::<ActivePlayer>(first).is_some());
    }

    #[test]
    fn switching_to_a_missing_player_keeps_control() {
        let mut app = player_app();
        let players = spawn_players(&mut app, 2);
        let (first, first_ring) = players[0];
        let (second, _) = players[1];
        app.world_mut().despawn(second);

        app.world_mut().trigger(SwitchPlayer);
        app.update();

        let world = app.world();
        assert_eq!(world.resource::<PlayerRoster>().current(), Some(first));
        assert!(world.get::<ActivePlayer>(first).is_some());
        assert_eq!(world.get::<Visibility>(first_ring), Some(&Visibility::Inherited));
    }

    #[test]
    fn switch_trail_expires() {
        let mut app = player_app();
        spawn_players(&mut app, 2);
        app.world_mut().trigger(SwitchPlayer);
        app.update();

        let mut trails = app.world_mut().query::<&SwitchTrail>();
        assert_eq!(trails.iter(app.world()).count(), 1);
        for _ in 0..5 {
            app.update();
        }
        assert_eq!(trails.iter(app.world()).count(), 0);
    }

    #[test]
    fn picking_up_and_putting_down() {
        let mut app = player_app();
        let world = app.world_mut();
        let item = world.spawn(Ingredient::raw(IngredientKind::Tomato)).id();
        let board = world.spawn(HeldItem(Some(item))).id();
        let cook = world
            .spawn((InteractTarget(Some(board)), Carrying::default()))
            .id();

        world.trigger_targets(PickUp, cook);
        world.flush();
        assert_eq!(world.get::<HeldItem>(board), Some(&HeldItem(None)));
        assert_eq!(world.get::<Carrying>(cook), Some(&Carrying(Some(item))));
        assert_eq!(world.get::<ChildOf>(item).map(|c| c.parent()), Some(cook));

        world.trigger_targets(PickUp, cook);
        world.flush();
        assert_eq!(world.get::<HeldItem>(board), Some(&HeldItem(Some(item))));
        assert_eq!(world.get::<Carrying>(cook), Some(&Carrying(None)));
        assert_eq!(world.get::<ChildOf>(item).map(|c| c.parent()), Some(board));
    }

    #[test]
    fn players_target_the_closest_station_in_reach() {
        let mut app = player_app();
        let world = app.world_mut();
        let near = world
            .spawn((
                Appliance::new(
                    crate::kitchen::ingredient::Process::Cutting,
                    Default::default(),
                    Vec3::Y,
                ),
                GlobalTransform::from_translation(Vec3::new(1.0, 0.0, 0.0)),
            ))
            .id();
        world.spawn((
            Appliance::new(
                crate::kitchen::ingredient::Process::Cutting,
                Default::default(),
                Vec3::Y,
            ),
            GlobalTransform::from_translation(Vec3::new(-1.4, 0.0, 0.0)),
        ));
        let cook = world
            .spawn((
                Player { indicator: None },
                GlobalTransform::default(),
                InteractTarget::default(),
            ))
            .id();
        let far_cook = world
            .spawn((
                Player { indicator: None },
                GlobalTransform::from_translation(Vec3::Z * 20.0),
                InteractTarget::default(),
            ))
            .id();

        app.update();
        assert_eq!(app.world().get::<InteractTarget>(cook), Some(&InteractTarget(Some(near))));
        assert_eq!(app.world().get::<InteractTarget>(far_cook), Some(&InteractTarget(None)));
    }

    #[test]
    fn animation_triggers_are_drained() {
        let mut app = player_app();
        let mut animator = PlayerAnimator::default();
        animator.trigger_animation("startCut");
        animator.set_can_interact(true);
        let cook = app.world_mut().spawn(animator).id();

        app.update();
        let animator = app.world().get::<PlayerAnimator>(cook).unwrap();
        assert!(animator.pending_triggers().is_empty());
        assert!(animator.can_interact);
    }
}
