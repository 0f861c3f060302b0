//! Example systems driven by the entity registry.
//!
//! Each system is a plain function that takes the registry, asks for a view
//! and mutates the returned states in place. [`run_tick`] chains them in the
//! order gravity → velocity → render.

use anyhow::Result;
use components::{Gravity, Position, Velocity};
use ecs_component::Entity;
use ecs_registry::EntityRegistry;
use tracing::{debug, info};

/// Configuration for the demo tick loop.
#[derive(Debug, Clone)]
pub struct TickConfig {
    /// Fixed timestep in seconds.
    pub dt: f32,
    /// Number of ticks to run.
    pub ticks: u64,
}

impl Default for TickConfig {
    fn default() -> Self {
        Self { dt: 1.0, ticks: 10 }
    }
}

/// Populate the registry with the two falling bodies of the demo scene.
pub fn spawn_scene(registry: &mut EntityRegistry) -> Result<[Entity; 2]> {
    let resting = registry.create();
    registry.emplace(resting, Position::new(0.0, 0.0))?;
    registry.emplace(resting, Velocity::new(0.0, 0.0))?;
    registry.emplace(resting, Gravity::new(1.0))?;

    let moving = registry.create();
    registry.emplace(moving, Position::new(10.0, 10.0))?;
    registry.emplace(moving, Velocity::new(5.0, 1.0))?;
    registry.emplace(moving, Gravity::new(1.0))?;

    Ok([resting, moving])
}

/// Accelerate every entity with a velocity along its gravity.
pub fn gravity_system(registry: &mut EntityRegistry, dt: f32) -> Result<()> {
    for (_entity, (velocity, gravity)) in registry.view::<(Velocity, Gravity)>()? {
        velocity.linear.y += gravity.strength * dt;
    }
    Ok(())
}

/// Integrate velocity into position.
pub fn velocity_system(registry: &mut EntityRegistry, dt: f32) -> Result<()> {
    for (_entity, (position, velocity)) in registry.view::<(Position, Velocity)>()? {
        position.translation += velocity.linear * dt;
    }
    Ok(())
}

/// Report where every positioned entity is. Returns how many were drawn.
pub fn render_system(registry: &mut EntityRegistry) -> Result<usize> {
    let view = registry.view::<(Position,)>()?;
    for (entity, (position,)) in &view {
        info!(
            %entity,
            x = position.translation.x,
            y = position.translation.y,
            "entity at"
        );
    }
    Ok(view.len())
}

/// Run one tick of the game loop.
pub fn run_tick(registry: &mut EntityRegistry, dt: f32) -> Result<()> {
    gravity_system(registry, dt)?;
    velocity_system(registry, dt)?;
    let drawn = render_system(registry)?;
    debug!(drawn, "tick complete");
    Ok(())
}

/// Run `config.ticks` ticks.
pub fn run(registry: &mut EntityRegistry, config: &TickConfig) -> Result<()> {
    for tick in 0..config.ticks {
        debug!(tick, "tick start");
        run_tick(registry, config.dt)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use ecs_component::Component;
    use glam::Vec2;

    use super::*;

    #[test]
    fn test_one_tick_of_falling_bodies() {
        let mut registry = EntityRegistry::new();
        let [a, b] = spawn_scene(&mut registry).unwrap();

        run_tick(&mut registry, 1.0).unwrap();

        assert_eq!(registry.get::<Position>(a).unwrap().translation, Vec2::new(0.0, 1.0));
        assert_eq!(registry.get::<Velocity>(a).unwrap().linear, Vec2::new(0.0, 1.0));
        assert_eq!(registry.get::<Position>(b).unwrap().translation, Vec2::new(15.0, 12.0));
        assert_eq!(registry.get::<Velocity>(b).unwrap().linear, Vec2::new(5.0, 2.0));
    }

    #[test]
    fn test_gravity_skips_entities_without_gravity() {
        let mut registry = EntityRegistry::new();
        let drifting = registry.create();
        registry.emplace(drifting, Velocity::new(1.0, 0.0)).unwrap();

        gravity_system(&mut registry, 1.0).unwrap();
        assert_eq!(registry.get::<Velocity>(drifting).unwrap(), &Velocity::new(1.0, 0.0));
    }

    #[test]
    fn test_removed_gravity_stops_acceleration() {
        let mut registry = EntityRegistry::new();
        let [a, _] = spawn_scene(&mut registry).unwrap();
        registry.remove(a, Gravity::NAME).unwrap();

        run(&mut registry, &TickConfig { dt: 1.0, ticks: 3 }).unwrap();
        assert_eq!(registry.get::<Position>(a).unwrap(), &Position::ORIGIN);
    }

    #[test]
    fn test_render_counts_positioned_entities() {
        let mut registry = EntityRegistry::new();
        let [a, _] = spawn_scene(&mut registry).unwrap();
        registry.create();
        assert_eq!(render_system(&mut registry).unwrap(), 2);

        registry.destroy(a).unwrap();
        assert_eq!(render_system(&mut registry).unwrap(), 1);
    }

    #[test]
    fn test_default_config_runs_ten_unit_ticks() {
        let config = TickConfig::default();
        assert_eq!(config.ticks, 10);
        assert_eq!(config.dt, 1.0);
    }
}
