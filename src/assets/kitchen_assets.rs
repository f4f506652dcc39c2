use bevy::prelude::*;
use bevy_asset_loader::prelude::*;

/// Everything the kitchen needs from disk, loaded during `Screen::Loading`.
#[derive(AssetCollection, Resource)]
pub struct KitchenAssets {
    /// One icon per slot of [`crate::kitchen::icons::icon_slot`].
    #[asset(
        paths(
            "images/icons/fish.png",
            "images/icons/shrimp.png",
            "images/icons/tomato.png",
            "images/icons/lettuce.png",
            "images/icons/cucumber.png",
            "images/icons/potato.png",
            "images/icons/chicken.png",
            "images/icons/seaweed.png",
            "images/icons/tortilla.png",
            "images/icons/rice.png",
            "images/icons/pepperoni.png",
            "images/icons/meat.png",
            "images/icons/dough.png",
            "images/icons/cheese.png",
        ),
        collection(typed)
    )]
    pub icons: Vec<Handle<Image>>,
    #[asset(path = "audio/sfx/cut.ogg")]
    pub cut: Handle<AudioSource>,
    #[asset(path = "audio/sfx/sizzle.ogg")]
    pub sizzle: Handle<AudioSource>,
    #[asset(path = "audio/sfx/done.ogg")]
    pub done: Handle<AudioSource>,
    #[asset(path = "audio/sfx/switch.ogg")]
    pub switch: Handle<AudioSource>,
    #[asset(path = "audio/music/kitchen.ogg")]
    pub music: Handle<AudioSource>,
}
