//! Core [`Component`] trait.
//!
//! A component is identified by its **name**, a plain string discriminator.
//! The registry stores component state type-erased under that name; the
//! `Component` impl is what lets a caller recover the concrete type again.
//!
//! The vocabulary is open: any crate can declare new components by
//! implementing the trait for its own types.

use std::any::Any;

/// The core component trait.
///
/// The name-to-type association is declared once, on the type, so every
/// registry call that carries a `C: Component` agrees on which state shape
/// lives under `C::NAME`.
///
/// Components must be `Send + Sync` so that a whole registry can be moved
/// behind a single lock when a host needs to share it.
///
/// # Examples
///
/// ```rust
/// use ecs_component::Component;
///
/// #[derive(Debug, Clone, PartialEq)]
/// struct Health {
///     current: f32,
///     max: f32,
/// }
///
/// impl Component for Health {
///     const NAME: &'static str = "health";
/// }
///
/// assert_eq!(Health::NAME, "health");
/// ```
pub trait Component: Any + Send + Sync {
    /// The name this component is stored and queried under.
    const NAME: &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Health {
        current: f32,
        max: f32,
    }

    impl Component for Health {
        const NAME: &'static str = "health";
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Velocity {
        x: f32,
        y: f32,
    }

    impl Component for Velocity {
        const NAME: &'static str = "velocity";
    }

    fn name_of<C: Component>() -> &'static str {
        C::NAME
    }

    #[test]
    fn test_name_is_reachable_through_generics() {
        assert_eq!(name_of::<Health>(), "health");
        assert_eq!(name_of::<Velocity>(), "velocity");
    }

    #[test]
    fn test_component_is_type_erasable() {
        let boxed: Box<dyn Any + Send + Sync> = Box::new(Health {
            current: 80.0,
            max: 100.0,
        });
        assert!(boxed.downcast_ref::<Velocity>().is_none());
        let health = boxed.downcast_ref::<Health>().unwrap();
        assert_eq!(health.current, 80.0);
        assert_eq!(health.max, 100.0);
    }
}
