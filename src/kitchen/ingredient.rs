//! Ingredients and what each station does to them.

use bevy::prelude::*;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub enum IngredientKind {
    Fish,
    Shrimp,
    Tomato,
    Lettuce,
    Cucumber,
    Potato,
    Chicken,
    SeaWeed,
    Tortilla,
    Rice,
    Pepperoni,
    Meat,
    Dough,
    Cheese,
    SushiRice,
    SushiFish,
    SushiCucumber,
    PizzaTomato,
}

impl IngredientKind {
    #[cfg(test)]
    pub const ALL: [IngredientKind; 18] = [
        IngredientKind::Fish,
        IngredientKind::Shrimp,
        IngredientKind::Tomato,
        IngredientKind::Lettuce,
        IngredientKind::Cucumber,
        IngredientKind::Potato,
        IngredientKind::Chicken,
        IngredientKind::SeaWeed,
        IngredientKind::Tortilla,
        IngredientKind::Rice,
        IngredientKind::Pepperoni,
        IngredientKind::Meat,
        IngredientKind::Dough,
        IngredientKind::Cheese,
        IngredientKind::SushiRice,
        IngredientKind::SushiFish,
        IngredientKind::SushiCucumber,
        IngredientKind::PizzaTomato,
    ];

    /// Raw proteins still need the stove after they have been chopped.
    pub fn is_protein(self) -> bool {
        matches!(self, IngredientKind::Meat | IngredientKind::Chicken)
    }
}

impl fmt::Display for IngredientKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
pub enum CookState {
    #[default]
    Raw,
    Cooking,
    Cooked,
    Chopped,
}

/// Which kind of station is working on an ingredient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub enum Process {
    Cutting,
    Cooking,
}

impl fmt::Display for Process {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Process::Cutting => "cutting",
            Process::Cooking => "cooking",
        })
    }
}

#[derive(Component, Debug, Clone, PartialEq, Reflect)]
#[reflect(Component)]
pub struct Ingredient {
    pub kind: IngredientKind,
    pub state: CookState,
    pub is_cooked: bool,
}

impl Ingredient {
    pub fn raw(kind: IngredientKind) -> Self {
        Self {
            kind,
            state: CookState::Raw,
            is_cooked: false,
        }
    }

    /// Whether `process` has nothing left to do with this ingredient.
    pub fn is_done_for(&self, process: Process) -> bool {
        match process {
            Process::Cutting => self.state == CookState::Chopped || self.is_cooked,
            Process::Cooking => self.is_cooked,
        }
    }

    pub fn finish(&mut self, process: Process) {
        match process {
            Process::Cutting => {
                self.state = CookState::Chopped;
                self.is_cooked = !self.kind.is_protein();
            }
            Process::Cooking => {
                self.state = CookState::Cooked;
                self.is_cooked = true;
            }
        }
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match (self.state, self.is_cooked) {
            (CookState::Raw, _) => "raw",
            (CookState::Cooking, _) => "cooking",
            (CookState::Chopped, true) => "chopped",
            (CookState::Chopped, false) => "chopped raw",
            (CookState::Cooked, _) => "cooked",
        };
        write!(f, "{} {}", state, self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cutting_proteins_leaves_them_uncooked() {
        for kind in [IngredientKind::Meat, IngredientKind::Chicken] {
            let mut ingredient = Ingredient::raw(kind);
            ingredient.finish(Process::Cutting);
            assert!(!ingredient.is_cooked);
            assert_eq!(ingredient.state, CookState::Chopped);
            assert!(!ingredient.is_done_for(Process::Cooking));
        }
    }

    #[test]
    fn cutting_everything_else_makes_it_ready() {
        for kind in IngredientKind::ALL.into_iter().filter(|k| !k.is_protein()) {
            let mut ingredient = Ingredient::raw(kind);
            ingredient.finish(Process::Cutting);
            assert!(ingredient.is_cooked, "{kind} should be ready");
        }
    }

    #[test]
    fn chopped_ingredients_cannot_be_cut_again() {
        let mut meat = Ingredient::raw(IngredientKind::Meat);
        assert!(!meat.is_done_for(Process::Cutting));
        meat.finish(Process::Cutting);
        assert!(meat.is_done_for(Process::Cutting));
    }

    #[test]
    fn cooking_finishes_anything() {
        let mut rice = Ingredient::raw(IngredientKind::Rice);
        rice.finish(Process::Cooking);
        assert_eq!(rice.state, CookState::Cooked);
        assert!(rice.is_done_for(Process::Cooking));
        assert_eq!(rice.to_string(), "cooked Rice");
    }
}
