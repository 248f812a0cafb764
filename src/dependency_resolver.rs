use super::errors::ResolveErrorKind;
use crate::Container;

/// A value the container knows how to produce for a factory parameter.
///
/// Implemented by [`crate::Inject`], [`crate::InjectTransient`] and tuples of
/// resolvers (the parameter lists of factory closures).
pub trait DependencyResolver: Sized {
    type Error: Into<ResolveErrorKind>;

    fn resolve(container: &Container) -> Result<Self, Self::Error>;
}

macro_rules! impl_dependency_resolver {
    (
        [$($ty:ident),*]
    ) => {
        #[allow(non_snake_case)]
        impl<$($ty,)*> DependencyResolver for ($($ty,)*)
        where
            $( $ty: DependencyResolver, )*
        {
            type Error = ResolveErrorKind;

            #[inline]
            #[allow(unused_variables)]
            fn resolve(container: &Container) -> Result<Self, Self::Error> {
                Ok(($($ty::resolve(container).map_err(Into::into)?,)*))
            }
        }
    };
}

all_the_tuples!(impl_dependency_resolver);

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::sync::Arc;
    use core::sync::atomic::{AtomicU8, Ordering};
    use std::format;
    use std::string::{String, ToString as _};
    use tracing::debug;
    use tracing_test::traced_test;

    use super::DependencyResolver;
    use crate::{
        inject::{Inject, InjectTransient},
        Binding, Container,
    };

    trait Token {
        fn get(&self) -> u8;
    }

    struct TokenImpl(u8);

    impl Token for TokenImpl {
        fn get(&self) -> u8 {
            self.0
        }
    }

    type DynToken = dyn Token + Send + Sync;

    #[test]
    #[traced_test]
    fn test_singleton_resolve() {
        let factory_call_count = Arc::new(AtomicU8::new(0));

        let container = Container::new();
        container
            .register::<DynToken>(Binding::to_factory({
                let factory_call_count = factory_call_count.clone();
                move || {
                    factory_call_count.fetch_add(1, Ordering::SeqCst);

                    debug!("Call token factory");
                    Ok(Arc::new(TokenImpl(1)) as Arc<DynToken>)
                }
            }))
            .unwrap();

        let token_1 = Inject::<DynToken>::resolve(&container).unwrap();
        let token_2 = Inject::<DynToken>::resolve(&container).unwrap();

        assert!(Arc::ptr_eq(&token_1.0, &token_2.0));
        assert_eq!(factory_call_count.load(Ordering::SeqCst), 1);
    }

    #[test]
    #[traced_test]
    fn test_transient_resolve() {
        let factory_call_count = Arc::new(AtomicU8::new(0));

        let container = Container::new();
        container
            .register::<DynToken>(Binding::to_factory({
                let factory_call_count = factory_call_count.clone();
                move || {
                    factory_call_count.fetch_add(1, Ordering::SeqCst);

                    debug!("Call token factory");
                    Ok(Arc::new(TokenImpl(1)) as Arc<DynToken>)
                }
            }))
            .unwrap();

        let token_1 = InjectTransient::<DynToken>::resolve(&container).unwrap();
        let token_2 = InjectTransient::<DynToken>::resolve(&container).unwrap();

        assert!(!Arc::ptr_eq(&token_1.0, &token_2.0));
        assert_eq!(factory_call_count.load(Ordering::SeqCst), 2);
    }

    #[test]
    #[traced_test]
    fn test_tuple_resolve() {
        let container = Container::new();
        container
            .register::<DynToken>(Binding::to_factory(|| Ok(Arc::new(TokenImpl(3)) as Arc<DynToken>)))
            .unwrap();

        let (Inject(shared), InjectTransient(fresh)) =
            <(Inject<DynToken>, InjectTransient<DynToken>)>::resolve(&container).unwrap();

        assert_eq!(shared.get(), 3);
        assert_eq!(fresh.get(), 3);
        assert!(!Arc::ptr_eq(&shared, &fresh));
    }
}
