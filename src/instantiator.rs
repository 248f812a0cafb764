use alloc::{boxed::Box, sync::Arc};
use tracing::debug;

use super::{
    dependency_resolver::DependencyResolver,
    errors::{InstantiateErrorKind, InstantiatorErrorKind, ResolveErrorKind},
    service::{service_fn, BoxCloneService},
};
use crate::{cache::SharedInstance, Container};

/// A factory producing instances of a contract. Implemented for closures of
/// up to twelve [`DependencyResolver`] parameters returning
/// `Result<Arc<C>, InstantiateErrorKind>`.
pub trait Instantiator<Deps>: Clone + 'static
where
    Deps: DependencyResolver,
{
    type Provides: 'static;
    type Error: Into<InstantiateErrorKind>;

    fn instantiate(&mut self, dependencies: Deps) -> Result<Self::Provides, Self::Error>;
}

pub(crate) type BoxedCloneInstantiator =
    BoxCloneService<Container, SharedInstance, InstantiatorErrorKind<ResolveErrorKind, InstantiateErrorKind>>;

#[must_use]
pub(crate) fn boxed_instantiator<C, Inst, Deps>(instantiator: Inst) -> BoxedCloneInstantiator
where
    C: ?Sized + Send + Sync + 'static,
    Inst: Instantiator<Deps, Provides = Arc<C>> + Send + Sync,
    Deps: DependencyResolver<Error = ResolveErrorKind>,
{
    BoxCloneService(Box::new(service_fn({
        move |container: Container| {
            let dependencies = match Deps::resolve(&container) {
                Ok(dependencies) => dependencies,
                Err(err) => return Err(InstantiatorErrorKind::Deps(err)),
            };
            let instance = match instantiator.clone().instantiate(dependencies) {
                Ok(instance) => instance,
                Err(err) => return Err(InstantiatorErrorKind::Factory(err.into())),
            };

            debug!("Instantiated");

            Ok(SharedInstance::new(instance))
        }
    })))
}

macro_rules! impl_instantiator {
    (
        [$($ty:ident),*]
    ) => {
        #[allow(non_snake_case)]
        impl<F, Response, Err, $($ty,)*> Instantiator<($($ty,)*)> for F
        where
            F: FnMut($($ty,)*) -> Result<Response, Err> + Clone + 'static,
            Response: 'static,
            Err: Into<InstantiateErrorKind>,
            $( $ty: DependencyResolver, )*
        {
            type Provides = Response;
            type Error = Err;

            fn instantiate(&mut self, ($($ty,)*): ($($ty,)*)) -> Result<Self::Provides, Self::Error> {
                self($($ty,)*)
            }
        }
    };
}

all_the_tuples!(impl_instantiator);

/// Wrapper to create an instantiator that just returns the passed value.
/// It can be used when the instance was created outside the container.
#[inline]
#[must_use]
pub fn instance<C>(value: Arc<C>) -> impl Instantiator<(), Provides = Arc<C>, Error = InstantiateErrorKind> + Send + Sync + Clone
where
    C: ?Sized + Send + Sync + 'static,
{
    move || Ok(value.clone())
}
