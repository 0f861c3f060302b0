//! Example component definitions for the entity registry.
//!
//! These demonstrate how a caller declares its own vocabulary: each type
//! implements [`Component`] and thereby fixes which state shape lives under
//! which name.

use ecs_component::Component;
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A 2D position component.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Position {
    /// Location in world units.
    pub translation: Vec2,
}

impl Position {
    /// The world origin.
    pub const ORIGIN: Self = Self {
        translation: Vec2::ZERO,
    };

    /// Create a new position.
    #[must_use]
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            translation: Vec2::new(x, y),
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl Component for Position {
    const NAME: &'static str = "position";
}

/// A 2D velocity component.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Velocity {
    /// Linear velocity in world units per second.
    pub linear: Vec2,
}

impl Velocity {
    /// Zero velocity.
    pub const ZERO: Self = Self { linear: Vec2::ZERO };

    /// Create a new velocity.
    #[must_use]
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            linear: Vec2::new(x, y),
        }
    }
}

impl Default for Velocity {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Component for Velocity {
    const NAME: &'static str = "velocity";
}

/// Constant acceleration along +y (screen-space down) applied to an entity's
/// velocity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Gravity {
    /// Acceleration in world units per second².
    pub strength: f32,
}

impl Gravity {
    /// Create a new gravity component.
    #[must_use]
    pub fn new(strength: f32) -> Self {
        Self { strength }
    }
}

impl Component for Gravity {
    const NAME: &'static str = "gravity";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_are_distinct() {
        assert_ne!(Position::NAME, Velocity::NAME);
        assert_ne!(Velocity::NAME, Gravity::NAME);
        assert_ne!(Position::NAME, Gravity::NAME);
    }

    #[test]
    fn test_defaults_are_zero() {
        assert_eq!(Position::default().translation, Vec2::ZERO);
        assert_eq!(Velocity::default().linear, Vec2::ZERO);
    }

    #[test]
    fn test_position_json_shape() {
        let json = serde_json::to_value(Position::new(1.0, 2.0)).unwrap();
        assert_eq!(json, serde_json::json!({ "translation": [1.0, 2.0] }));
    }
}
