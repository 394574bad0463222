//! # Simulation Components
//!
//! Plain data, no behavior. Coordinates are screen-space pixels with `y`
//! growing downward, which is why gravity adds to `y` velocity.

use strata_core::Entity;

/// 2D position of a body's top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Position {
    /// Horizontal coordinate.
    pub x: f32,
    /// Vertical coordinate, growing downward.
    pub y: f32,
}

/// Direction of motion, scaled by [`Speed`] during integration.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Velocity {
    /// Horizontal component.
    pub x: f32,
    /// Vertical component, positive is down.
    pub y: f32,
}

/// Axis-aligned extent of a body.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    /// Width in pixels.
    pub width: f32,
    /// Height in pixels.
    pub height: f32,
}

/// Scalar speed multiplier applied to velocity during integration.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Speed {
    /// Units per second at velocity magnitude 1.
    pub horizontal: f32,
}

/// How a body reacts when a collision is resolved.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Response {
    /// Bounce away from the hit surface.
    #[default]
    Deflect,
    /// Push the other body along.
    Push,
    /// Slide along the hit surface.
    Slide,
}

/// Participation in collision detection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Collider {
    /// Resolution style for this body.
    pub response: Response,
}

/// The most recent overlap partner, refreshed every detection pass.
///
/// One contact at a time: when a body overlaps several others in the same
/// tick, the last one found wins.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Contact {
    /// Id of the overlapping body.
    pub other: Entity,
}

/// Marker for the player-controlled body.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Player;
