use bevy::prelude::*;

/// #ddd369
pub const LABEL_TEXT: Color = Color::srgb(0.867, 0.827, 0.412);

/// #fcfbcc
pub const HEADER_TEXT: Color = Color::srgb(0.988, 0.984, 0.800);

/// #ececec
pub const BUTTON_TEXT: Color = Color::srgb(0.925, 0.925, 0.925);
/// #8c5a3c
pub const BUTTON_BACKGROUND: Color = Color::srgb(0.549, 0.353, 0.235);
/// #ffd700
pub const BUTTON_HOVERED_BACKGROUND: Color = Color::srgb(1.0, 0.843, 0.0);
/// #ffa500
pub const BUTTON_PRESSED_BACKGROUND: Color = Color::srgb(1.0, 0.647, 0.0);
/// #5a5a5a
pub const LOCKED_BACKGROUND: Color = Color::srgb(0.353, 0.353, 0.353);

/// #202020
pub const PROGRESS_BACKGROUND: Color = Color::srgb(0.125, 0.125, 0.125);
/// #f2f2f2
pub const PROGRESS_BORDER: Color = Color::srgb(0.949, 0.949, 0.949);
/// #5fd35f
pub const PROGRESS_FILL: Color = Color::srgb(0.373, 0.827, 0.373);
