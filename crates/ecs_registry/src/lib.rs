//! # ecs_registry
//!
//! The storage and query half of an ECS. An [`EntityRegistry`] owns every
//! entity and every component state attached to it; systems reach entity
//! data only through its operations.
//!
//! ```rust
//! use ecs_component::Component;
//! use ecs_registry::EntityRegistry;
//!
//! struct Position { x: f32, y: f32 }
//! struct Velocity { x: f32, y: f32 }
//!
//! impl Component for Position { const NAME: &'static str = "position"; }
//! impl Component for Velocity { const NAME: &'static str = "velocity"; }
//!
//! let mut registry = EntityRegistry::new();
//! let e = registry.create();
//! registry.emplace(e, Position { x: 0.0, y: 0.0 }).unwrap();
//! registry.emplace(e, Velocity { x: 1.0, y: 2.0 }).unwrap();
//!
//! for (_entity, (position, velocity)) in registry.view::<(Position, Velocity)>().unwrap() {
//!     position.x += velocity.x;
//!     position.y += velocity.y;
//! }
//!
//! assert_eq!(registry.get::<Position>(e).unwrap().y, 2.0);
//! ```

pub mod config;
pub mod error;
pub mod record;
pub mod registry;
pub mod view;

pub use config::RegistryConfig;
pub use error::{RegistryError, Result};
pub use record::EntityRecord;
pub use registry::EntityRegistry;
pub use view::{Mismatch, View};
