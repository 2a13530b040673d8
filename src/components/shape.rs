//! Drawable shape component.
//!
//! An entity becomes visible by pairing a [`Shape`] with either a
//! [`MapPosition`](super::mapposition::MapPosition) (drawn through the world
//! camera) or a [`ScreenPosition`](super::screenposition::ScreenPosition)
//! (drawn through the identity camera). The render system applies the
//! shape's anchor before projecting, so positions mean "where the anchor
//! point goes", not "where the top-left corner goes".

use bevy_ecs::prelude::Component;
use raylib::prelude::Color;

use crate::components::anchor::Anchor;

/// Geometry of a drawable shape, in world units (or pixels for screen-space
/// entities).
#[derive(Clone, Debug)]
pub enum ShapeKind {
    Rectangle {
        width: f32,
        height: f32,
        filled: bool,
    },
    Circle {
        radius: f32,
        filled: bool,
    },
    Text {
        text: String,
        /// Font size in screen pixels.
        size: i32,
    },
    /// Textured quad; `tex_key` indexes the
    /// [`TextureStore`](crate::resources::texturestore::TextureStore).
    Sprite {
        tex_key: &'static str,
        width: f32,
        height: f32,
    },
}

/// What to draw, where on the box the position attaches, and in what color.
#[derive(Component, Clone, Debug)]
pub struct Shape {
    pub kind: ShapeKind,
    pub anchor: Anchor,
    pub color: Color,
}

impl Shape {
    pub fn new(kind: ShapeKind, anchor: Anchor, color: Color) -> Self {
        Self {
            kind,
            anchor,
            color,
        }
    }

    pub fn circle(radius: f32, filled: bool, color: Color) -> Self {
        Self::new(ShapeKind::Circle { radius, filled }, Anchor::Center, color)
    }
}
