//! Maps ingredient kinds onto the icon shown on result artifacts.

use crate::kitchen::ingredient::IngredientKind;
use bevy::prelude::*;
use thiserror::Error;

/// Number of distinct icons the art set ships with.
pub const ICON_SLOTS: usize = 14;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IconError {
    #[error("no icon loaded for {kind} (slot {slot} of {loaded})")]
    Unmapped {
        kind: IngredientKind,
        slot: usize,
        loaded: usize,
    },
}

/// Index into the icon sheet. Variants that only exist for recipes reuse the
/// icon of their base ingredient.
pub fn icon_slot(kind: IngredientKind) -> usize {
    match kind {
        IngredientKind::Fish | IngredientKind::SushiFish => 0,
        IngredientKind::Shrimp => 1,
        IngredientKind::Tomato | IngredientKind::PizzaTomato => 2,
        IngredientKind::Lettuce => 3,
        IngredientKind::Cucumber | IngredientKind::SushiCucumber => 4,
        IngredientKind::Potato => 5,
        IngredientKind::Chicken => 6,
        IngredientKind::SeaWeed => 7,
        IngredientKind::Tortilla => 8,
        IngredientKind::Rice | IngredientKind::SushiRice => 9,
        IngredientKind::Pepperoni => 10,
        IngredientKind::Meat => 11,
        IngredientKind::Dough => 12,
        IngredientKind::Cheese => 13,
    }
}

#[derive(Resource, Debug, Clone, Default)]
pub struct IconTable {
    icons: Vec<Handle<Image>>,
}

impl IconTable {
    pub fn new(icons: Vec<Handle<Image>>) -> Self {
        if icons.len() < ICON_SLOTS {
            warn!(
                "icon table has {} of {} icons, some ingredients cannot be shown",
                icons.len(),
                ICON_SLOTS
            );
        }
        Self { icons }
    }

    pub fn get(&self, kind: IngredientKind) -> Result<Handle<Image>, IconError> {
        let slot = icon_slot(kind);
        self.icons.get(slot).cloned().ok_or(IconError::Unmapped {
            kind,
            slot,
            loaded: self.icons.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_table() -> IconTable {
        IconTable::new(
            (0..ICON_SLOTS)
                .map(|i| Handle::weak_from_u128(i as u128 + 1))
                .collect(),
        )
    }

    #[test]
    fn every_kind_has_a_slot_in_range() {
        for kind in IngredientKind::ALL {
            assert!(icon_slot(kind) < ICON_SLOTS, "{kind}");
        }
    }

    #[test]
    fn recipe_variants_share_their_base_icon() {
        let table = full_table();
        assert_eq!(
            table.get(IngredientKind::SushiRice),
            table.get(IngredientKind::Rice)
        );
        assert_eq!(
            table.get(IngredientKind::PizzaTomato),
            table.get(IngredientKind::Tomato)
        );
        assert_ne!(
            table.get(IngredientKind::Meat),
            table.get(IngredientKind::Chicken)
        );
    }

    #[test]
    fn missing_icons_are_reported() {
        let table = IconTable::new(vec![Handle::default(); 3]);
        assert!(table.get(IngredientKind::Tomato).is_ok());
        assert_eq!(
            table.get(IngredientKind::Cheese),
            Err(IconError::Unmapped {
                kind: IngredientKind::Cheese,
                slot: 13,
                loaded: 3,
            })
        );
    }
}
