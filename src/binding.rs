use alloc::sync::Arc;

use crate::{
    any::TypeInfo,
    dependency_resolver::DependencyResolver,
    descriptor::ServiceDescriptor,
    disposer::{boxed_disposer, BoxedCloneDisposer, Dispose, Disposer},
    errors::{InstantiateErrorKind, ResolveErrorKind},
    instantiator::{boxed_instantiator, instance, BoxedCloneInstantiator, Instantiator},
};

/// Configuration of one contract binding, passed to
/// [`crate::Container::register`].
///
/// The instance source is either an explicit pre-built instance or a factory;
/// when both are supplied (an instance set on a factory binding), the
/// explicit instance wins and the factory never runs. The disposer is the
/// explicit one when supplied, else the contract's [`Dispose`] capability
/// when requested, else none.
pub struct Binding<C: ?Sized> {
    source: BindingSource<C>,
    disposer: Option<BoxedCloneDisposer>,
    capability_disposer: Option<BoxedCloneDisposer>,
}

enum BindingSource<C: ?Sized> {
    Instance(Arc<C>),
    Factory(BoxedCloneInstantiator),
}

impl<C> Binding<C>
where
    C: ?Sized + Send + Sync + 'static,
{
    /// Binds the contract to a factory. The factory's parameters declare its
    /// dependencies ([`crate::Inject`] / [`crate::InjectTransient`]); the
    /// container resolves them before each invocation.
    #[must_use]
    pub fn to_factory<Inst, Deps>(factory: Inst) -> Self
    where
        Inst: Instantiator<Deps, Provides = Arc<C>, Error = InstantiateErrorKind> + Send + Sync,
        Deps: DependencyResolver<Error = ResolveErrorKind>,
    {
        Self {
            source: BindingSource::Factory(boxed_instantiator::<C, _, _>(factory)),
            disposer: None,
            capability_disposer: None,
        }
    }

    /// Binds the contract to a pre-built instance.
    #[must_use]
    pub fn to_instance(instance: Arc<C>) -> Self {
        Self {
            source: BindingSource::Instance(instance),
            disposer: None,
            capability_disposer: None,
        }
    }

    /// Overrides the binding's source with a pre-built instance. Takes
    /// precedence over a configured factory.
    #[must_use]
    pub fn with_instance(mut self, instance: Arc<C>) -> Self {
        self.source = BindingSource::Instance(instance);
        self
    }

    /// Sets an explicit disposer, invoked once for the realized singleton
    /// during teardown. Takes precedence over the [`Dispose`] capability.
    #[must_use]
    pub fn with_disposer<D>(mut self, disposer: D) -> Self
    where
        D: Disposer<C> + Send + Sync,
    {
        self.disposer = Some(boxed_disposer::<C, _>(disposer));
        self
    }

    /// Routes teardown of the realized singleton through the instance's own
    /// [`Dispose`] capability.
    #[must_use]
    pub fn dispose_on_teardown(mut self) -> Self
    where
        C: Dispose,
    {
        self.capability_disposer = Some(boxed_disposer::<C, _>(|instance: Arc<C>| instance.dispose()));
        self
    }

    pub(crate) fn into_descriptor(self, contract: TypeInfo) -> ServiceDescriptor {
        let instantiator = match self.source {
            BindingSource::Instance(value) => boxed_instantiator::<C, _, ()>(instance(value)),
            BindingSource::Factory(factory) => factory,
        };

        ServiceDescriptor::new(contract, instantiator, self.disposer.or(self.capability_disposer))
    }
}
