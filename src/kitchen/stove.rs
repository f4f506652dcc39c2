//! A pot sitting on a stove. It cooks whatever is inside on its own once the
//! burner is lit, no player has to stand next to it.

use crate::AppSystems;
use crate::kitchen::appliance::{Appliance, HeldItem, advance_sessions, held_ingredient};
use crate::kitchen::ingredient::Ingredient;
use crate::kitchen::session::BeginOutcome;
use bevy::prelude::*;

pub(super) fn plugin(app: &mut App) {
    app.register_type::<Stove>();
    app.add_systems(
        Update,
        (
            heat_pots
                .before(advance_sessions)
                .in_set(AppSystems::TickTimers),
            sync_fire_effect.in_set(AppSystems::Update),
        ),
    );
}

#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct Stove {
    /// Whether the burner under the pot is on.
    pub heated: bool,
    /// Flame effect shown while the pot is actually cooking.
    pub fire: Option<Entity>,
}

impl Stove {
    /// Cooking needs heat and something in the pot.
    pub fn is_lit(&self, held: &HeldItem) -> bool {
        self.heated && held.0.is_some()
    }
}

/// Starts cooking as soon as a lit pot holds something raw, and pauses a run
/// while the burner is off.
fn heat_pots(
    mut stoves: Query<(Entity, &Stove, &HeldItem, &mut Appliance)>,
    ingredients: Query<&Ingredient>,
) {
    for (entity, stove, held, mut appliance) in &mut stoves {
        if appliance.session.is_running() {
            appliance.session.pause(!stove.heated);
            continue;
        }
        if !stove.is_lit(held) {
            continue;
        }
        let target = held_ingredient(held, &ingredients);
        if appliance.session.begin_unattended(target) == BeginOutcome::Started {
            info!("{entity} started cooking");
        }
    }
}

fn sync_fire_effect(
    stoves: Query<(&Stove, &HeldItem), Or<(Changed<Stove>, Changed<HeldItem>)>>,
    mut effects: Query<&mut Visibility>,
) {
    for (stove, held) in &stoves {
        let Some(fire) = stove.fire else {
            continue;
        };
        if let Ok(mut visibility) = effects.get_mut(fire) {
            *visibility = if stove.is_lit(held) {
                Visibility::Inherited
            } else {
                Visibility::Hidden
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kitchen::ingredient::IngredientKind;
    use crate::kitchen::test_support::{kitchen_app, run_for};
    use std::time::Duration;

    fn spawn_stove(app: &mut App, heated: bool, kind: Option<IngredientKind>) -> (Entity, Entity) {
        let world = app.world_mut();
        let fire = world.spawn(Visibility::Hidden).id();
        let item = kind.map(|kind| world.spawn(Ingredient::raw(kind)).id());
        let stove = world
            .spawn((
                Stove {
                    heated,
                    fire: Some(fire),
                },
                HeldItem(item),
                Appliance::new(
                    crate::kitchen::ingredient::Process::Cooking,
                    Default::default(),
                    Vec3::Y,
                ),
            ))
            .id();
        (stove, fire)
    }

    #[test]
    fn cold_stove_does_not_cook() {
        let mut app = kitchen_app();
        let (stove, fire) = spawn_stove(&mut app, false, Some(IngredientKind::Rice));
        run_for(&mut app, Duration::from_secs(3));

        let appliance = app.world().get::<Appliance>(stove).unwrap();
        assert!(!appliance.session.is_running());
        assert_eq!(app.world().get::<Visibility>(fire), Some(&Visibility::Hidden));
    }

    #[test]
    fn lit_stove_cooks_and_shows_fire() {
        let mut app = kitchen_app();
        let (stove, fire) = spawn_stove(&mut app, true, Some(IngredientKind::Rice));
        app.update();
        assert_eq!(app.world().get::<Visibility>(fire), Some(&Visibility::Inherited));
        assert!(app.world().get::<Appliance>(stove).unwrap().session.is_running());

        run_for(&mut app, Duration::from_secs(3));
        let item = app.world().get::<HeldItem>(stove).unwrap().0.unwrap();
        let rice = app.world().get::<Ingredient>(item).unwrap();
        assert!(rice.is_cooked);
        assert!(!app.world().get::<Appliance>(stove).unwrap().session.is_running());
    }

    #[test]
    fn empty_stove_keeps_fire_off() {
        let mut app = kitchen_app();
        let (_, fire) = spawn_stove(&mut app, true, None);
        app.update();
        assert_eq!(app.world().get::<Visibility>(fire), Some(&Visibility::Hidden));
    }

    #[test]
    fn removing_the_item_cancels_and_puts_out_the_fire() {
        let mut app = kitchen_app();
        let (stove, fire) = spawn_stove(&mut app, true, Some(IngredientKind::Potato));
        run_for(&mut app, Duration::from_millis(1000));
        assert!(app.world().get::<Appliance>(stove).unwrap().session.elapsed() > 0.0);

        app.world_mut().get_mut::<HeldItem>(stove).unwrap().0 = None;
        app.update();

        let appliance = app.world().get::<Appliance>(stove).unwrap();
        assert!(!appliance.session.is_running());
        assert_eq!(appliance.session.elapsed(), 0.0);
        assert_eq!(app.world().get::<Visibility>(fire), Some(&Visibility::Hidden));
    }

    #[test]
    fn turning_the_heat_off_pauses_cooking() {
        let mut app = kitchen_app();
        let (stove, _) = spawn_stove(&mut app, true, Some(IngredientKind::Potato));
        run_for(&mut app, Duration::from_millis(1000));
        let before = app.world().get::<Appliance>(stove).unwrap().session.elapsed();

        app.world_mut().get_mut::<Stove>(stove).unwrap().heated = false;
        run_for(&mut app, Duration::from_secs(2));
        let appliance = app.world().get::<Appliance>(stove).unwrap();
        assert!(appliance.session.is_running());
        assert_eq!(appliance.session.elapsed(), before);
    }
}
