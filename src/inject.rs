use alloc::sync::Arc;

use crate::{dependency_resolver::DependencyResolver, strategy::Strategy, Container, ResolveErrorKind};

/// Factory parameter requesting a dependency under the `Singleton` strategy:
/// one shared instance per contract, cached on first resolution.
pub struct Inject<Dep: ?Sized>(pub Arc<Dep>);

impl<Dep: ?Sized + Send + Sync + 'static> DependencyResolver for Inject<Dep> {
    type Error = ResolveErrorKind;

    fn resolve(container: &Container) -> Result<Self, Self::Error> {
        container.resolve_dependency(Strategy::Singleton).map(Self)
    }
}

/// Factory parameter requesting a dependency under the `Transient` strategy:
/// a fresh instance per resolution, never cached and never tracked for
/// teardown.
pub struct InjectTransient<Dep: ?Sized>(pub Arc<Dep>);

impl<Dep: ?Sized + Send + Sync + 'static> DependencyResolver for InjectTransient<Dep> {
    type Error = ResolveErrorKind;

    fn resolve(container: &Container) -> Result<Self, Self::Error> {
        container.resolve_dependency(Strategy::Transient).map(Self)
    }
}
