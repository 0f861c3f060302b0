//! Registry error types.

use ecs_component::Entity;

/// Contract violations reported by [`EntityRegistry`](crate::EntityRegistry).
///
/// Every variant is raised before the registry is touched, so a failed call
/// never leaves a partial mutation behind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// The entity was never created or has already been destroyed.
    #[error("entity {0} does not exist")]
    UnknownEntity(Entity),

    /// `emplace` targeted a component that is already attached.
    #[error("component '{component}' already exists on {entity}")]
    DuplicateComponent {
        entity: Entity,
        component: String,
    },

    /// The entity exists but does not carry the component.
    #[error("component '{component}' does not exist on {entity}")]
    MissingComponent {
        entity: Entity,
        component: String,
    },

    /// A state is stored under the name, but as a different Rust type.
    #[error("component '{component}' on {entity} is not a {expected}")]
    TypeMismatch {
        entity: Entity,
        component: String,
        expected: &'static str,
    },

    /// A view asked for the same component twice.
    #[error("view requests component '{0}' more than once")]
    AliasedView(String),
}

pub type Result<T> = std::result::Result<T, RegistryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_entity_and_component() {
        let err = RegistryError::MissingComponent {
            entity: Entity(3),
            component: "position".into(),
        };
        assert_eq!(
            err.to_string(),
            "component 'position' does not exist on Entity(3)"
        );
        assert_eq!(
            RegistryError::UnknownEntity(Entity(9)).to_string(),
            "entity Entity(9) does not exist"
        );
    }
}
