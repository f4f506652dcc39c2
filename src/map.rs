//! Stage progression on the world map: stars earned per stage decide which
//! stages are open and which flags are raised.

use crate::config::GameConfig;
use bevy::prelude::*;

pub(super) fn plugin(app: &mut App) {
    app.register_type::<MapProgress>()
        .register_type::<CurrentStage>();
    app.init_resource::<CurrentStage>();
    app.add_systems(Startup, load_progress);
}

#[derive(Resource, Debug, Clone, PartialEq, Eq, Default, Reflect)]
#[reflect(Resource)]
pub struct MapProgress {
    stages: Vec<u32>,
}

/// The stage picked on the map, loaded when gameplay starts.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
#[reflect(Resource)]
pub struct CurrentStage(pub usize);

impl MapProgress {
    pub fn new(stages: Vec<u32>) -> Self {
        Self { stages }
    }

    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }

    pub fn stars(&self, stage: usize) -> Option<u32> {
        self.stages.get(stage).copied()
    }

    /// One flag per stage plus one for the stage after the last. The first
    /// stage is always open, every other opens once the one before it has
    /// at least one star.
    pub fn unlocked(&self) -> Vec<bool> {
        let mut unlocked = vec![false; self.stages.len() + 1];
        unlocked[0] = true;
        for (i, stars) in self.stages.iter().enumerate() {
            if *stars > 0 {
                unlocked[i + 1] = true;
            }
        }
        unlocked
    }

    pub fn is_unlocked(&self, stage: usize) -> bool {
        self.unlocked().get(stage).copied().unwrap_or(false)
    }

    pub fn star_sum(&self) -> u32 {
        self.stages.iter().sum()
    }

    /// Whether the flag on `stage` is up. Stage 0 has no flag.
    pub fn flag_raised(&self, stage: usize) -> bool {
        stage > 0 && stage < self.stages.len() && self.stages[stage - 1] > 0
    }
}

fn load_progress(config: Res<GameConfig>, mut commands: Commands) {
    let progress = MapProgress::new(config.map.stages.clone());
    info!(
        "{} stages, {} stars collected",
        progress.stage_count(),
        progress.star_sum()
    );
    commands.insert_resource(progress);
}
