//! Multi-component view queries.
//!
//! A [`View`] names a set of components and knows how to borrow all of them
//! mutably out of a single [`EntityRecord`]. It is implemented for `()`, which
//! matches every entity, and for tuples of up to eight [`Component`] types.

use ecs_component::Component;

use crate::record::EntityRecord;

/// A name a view asked for is stored on the entity, but as another type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mismatch {
    /// The component name that matched.
    pub component: &'static str,
    /// The Rust type the view expected under that name.
    pub expected: &'static str,
}

/// A set of components fetched together from one entity.
pub trait View {
    /// What a matching entity yields, e.g. `(&mut Position, &mut Velocity)`.
    type Item<'a>;

    /// The component names an entity must carry to match.
    fn names() -> Vec<&'static str>;

    /// Borrow the named states out of `record`.
    ///
    /// `Ok(None)` if any name is absent. `Err` if every name is present but
    /// one of them holds a different type.
    fn fetch<'a>(
        record: &'a mut EntityRecord,
    ) -> std::result::Result<Option<Self::Item<'a>>, Mismatch>;
}

impl View for () {
    type Item<'a> = ();

    fn names() -> Vec<&'static str> {
        Vec::new()
    }

    fn fetch<'a>(
        _record: &'a mut EntityRecord,
    ) -> std::result::Result<Option<Self::Item<'a>>, Mismatch> {
        Ok(Some(()))
    }
}

macro_rules! impl_view {
    ($($ty:ident),+) => {
        impl<$($ty: Component),+> View for ($($ty,)+) {
            type Item<'a> = ($(&'a mut $ty,)+);

            fn names() -> Vec<&'static str> {
                vec![$($ty::NAME),+]
            }

            #[allow(non_snake_case)]
            fn fetch<'a>(
                record: &'a mut EntityRecord,
            ) -> std::result::Result<Option<Self::Item<'a>>, Mismatch> {
                if !($(record.contains($ty::NAME))&&+) {
                    return Ok(None);
                }
                $(let mut $ty: Option<&'a mut $ty> = None;)+
                for (name, state) in record.iter_mut() {
                    $(
                        if name == $ty::NAME {
                            match state.downcast_mut::<$ty>() {
                                Some(state) => $ty = Some(state),
                                None => {
                                    return Err(Mismatch {
                                        component: $ty::NAME,
                                        expected: std::any::type_name::<$ty>(),
                                    });
                                }
                            }
                            continue;
                        }
                    )+
                }
                Ok(Some(($(
                    match $ty {
                        Some(state) => state,
                        None => return Ok(None),
                    },
                )+)))
            }
        }
    };
}

impl_view!(A);
impl_view!(A, B);
impl_view!(A, B, C);
impl_view!(A, B, C, D);
impl_view!(A, B, C, D, E);
impl_view!(A, B, C, D, E, F);
impl_view!(A, B, C, D, E, F, G);
impl_view!(A, B, C, D, E, F, G, H);
