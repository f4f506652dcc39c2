use crate::kitchen::ingredient::IngredientKind;
use bevy::prelude::*;

/// Placeholder geometry for the kitchen. Real models replace these handles
/// without touching gameplay code.
#[derive(Resource, Clone, Reflect)]
#[reflect(Resource)]
pub struct MeshAssets {
    pub counter: Handle<Mesh>,
    pub board: Handle<Mesh>,
    pub pot: Handle<Mesh>,
    pub knife: Handle<Mesh>,
    pub fire: Handle<Mesh>,
    pub player: Handle<Mesh>,
    pub indicator: Handle<Mesh>,
    pub ingredient: Handle<Mesh>,
    pub spark: Handle<Mesh>,
    pub floor: Handle<Mesh>,
    pub counter_material: Handle<StandardMaterial>,
    pub board_material: Handle<StandardMaterial>,
    pub metal_material: Handle<StandardMaterial>,
    pub fire_material: Handle<StandardMaterial>,
    pub player_material: Handle<StandardMaterial>,
    pub indicator_material: Handle<StandardMaterial>,
    pub floor_material: Handle<StandardMaterial>,
}

impl FromWorld for MeshAssets {
    fn from_world(world: &mut World) -> Self {
        let asset_server = world.resource::<AssetServer>();
        let unlit = |color: Color| StandardMaterial {
            base_color: color,
            emissive: color.to_linear() * 4.0,
            unlit: true,
            ..default()
        };
        MeshAssets {
            counter: asset_server.add(Mesh::from(Cuboid::new(1.2, 0.9, 1.2))),
            board: asset_server.add(Mesh::from(Cuboid::new(0.9, 0.08, 0.6))),
            pot: asset_server.add(Mesh::from(Cylinder::new(0.4, 0.4))),
            knife: asset_server.add(Mesh::from(Cuboid::new(0.5, 0.03, 0.08))),
            fire: asset_server.add(Mesh::from(Cone::new(0.35, 0.3))),
            player: asset_server.add(Mesh::from(Capsule3d::new(0.35, 0.9))),
            indicator: asset_server.add(Mesh::from(Torus::new(0.45, 0.55))),
            ingredient: asset_server.add(Mesh::from(Sphere::new(0.2))),
            spark: asset_server.add(Mesh::from(Sphere::new(0.12))),
            floor: asset_server.add(Mesh::from(Plane3d::default().mesh().size(16.0, 12.0))),
            counter_material: asset_server.add(StandardMaterial::from_color(Color::srgb_u8(
                160, 140, 120,
            ))),
            board_material: asset_server.add(StandardMaterial::from_color(Color::srgb_u8(
                196, 152, 96,
            ))),
            metal_material: asset_server.add(StandardMaterial {
                base_color: Color::srgb_u8(120, 124, 130),
                metallic: 0.8,
                perceptual_roughness: 0.3,
                ..default()
            }),
            fire_material: asset_server.add(unlit(Color::srgb_u8(255, 120, 20))),
            player_material: asset_server.add(StandardMaterial::from_color(Color::srgb_u8(
                240, 240, 235,
            ))),
            indicator_material: asset_server.add(unlit(Color::srgb_u8(255, 215, 0))),
            floor_material: asset_server.add(StandardMaterial::from_color(Color::srgb_u8(
                90, 70, 60,
            ))),
        }
    }
}

/// Tint for an ingredient's placeholder sphere.
pub fn ingredient_color(kind: IngredientKind) -> Color {
    match kind {
        IngredientKind::Fish | IngredientKind::SushiFish => Color::srgb_u8(250, 128, 114),
        IngredientKind::Shrimp => Color::srgb_u8(255, 160, 122),
        IngredientKind::Tomato | IngredientKind::PizzaTomato => Color::srgb_u8(220, 40, 30),
        IngredientKind::Lettuce => Color::srgb_u8(120, 200, 80),
        IngredientKind::Cucumber | IngredientKind::SushiCucumber => Color::srgb_u8(40, 130, 50),
        IngredientKind::Potato => Color::srgb_u8(200, 170, 110),
        IngredientKind::Chicken => Color::srgb_u8(250, 220, 190),
        IngredientKind::SeaWeed => Color::srgb_u8(20, 60, 30),
        IngredientKind::Tortilla => Color::srgb_u8(240, 210, 140),
        IngredientKind::Rice | IngredientKind::SushiRice => Color::srgb_u8(250, 250, 245),
        IngredientKind::Pepperoni => Color::srgb_u8(180, 40, 40),
        IngredientKind::Meat => Color::srgb_u8(150, 40, 40),
        IngredientKind::Dough => Color::srgb_u8(240, 225, 190),
        IngredientKind::Cheese => Color::srgb_u8(255, 210, 60),
    }
}
