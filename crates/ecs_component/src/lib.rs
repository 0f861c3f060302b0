//! # ecs_component
//!
//! The vocabulary shared by the registry and the systems that use it.
//!
//! This crate provides:
//!
//! - [`Component`] trait: binds a component name to a concrete Rust type.
//! - [`Entity`]: opaque `u64` entity handles.
//! - [`EntityAllocator`]: monotonically increasing, never-reused ID allocator.

pub mod component;
pub mod entity;

pub use component::Component;
pub use entity::{Entity, EntityAllocator};
