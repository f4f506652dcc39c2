//! The stage map: every stage with its stars, locked stages greyed out.

use bevy::prelude::*;

use crate::map::{CurrentStage, MapProgress};
use crate::{screens::Screen, theme::prelude::*};

pub(super) fn plugin(app: &mut App) {
    app.add_systems(OnEnter(Screen::Map), spawn_map_screen);
}

fn spawn_map_screen(progress: Res<MapProgress>, mut commands: Commands) {
    commands
        .spawn((widget::ui_root("Map Screen"), StateScoped(Screen::Map)))
        .with_children(|parent| {
            parent.spawn(widget::header("Kitchen Map"));
            parent.spawn(widget::label(format!(
                "{} stars collected",
                progress.star_sum()
            )));
            for stage in 0..=progress.stage_count() {
                let title = stage_title(&progress, stage);
                if progress.is_unlocked(stage) {
                    parent.spawn(widget::button(title, enter_stage(stage)));
                } else {
                    parent.spawn(widget::locked_button(title));
                }
            }
        });
}

fn stage_title(progress: &MapProgress, stage: usize) -> String {
    let stars = match progress.stars(stage) {
        Some(1) => "1 star".to_string(),
        Some(stars) => format!("{stars} stars"),
        None => "new".to_string(),
    };
    let flag = if progress.flag_raised(stage) {
        " [flag]"
    } else {
        ""
    };
    format!("Stage {}: {stars}{flag}", stage + 1)
}

fn enter_stage(
    stage: usize,
) -> impl FnMut(Trigger<Pointer<Click>>, ResMut<CurrentStage>, ResMut<NextState<Screen>>) {
    move |_, mut current, mut next_screen| {
        info!("entering stage {stage}");
        current.0 = stage;
        next_screen.set(Screen::Gameplay);
    }
}
