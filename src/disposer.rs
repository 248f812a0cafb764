use alloc::{boxed::Box, sync::Arc};

use crate::{
    cache::SharedInstance,
    errors::DisposeErrorKind,
    service::{service_fn, BoxCloneService},
};

/// Teardown capability a contract can expose. Declaring it as a supertrait of
/// a contract and registering the binding with
/// [`crate::Binding::dispose_on_teardown`] routes teardown through the
/// instance itself.
pub trait Dispose {
    /// Releases the resources held by the instance.
    ///
    /// # Errors
    /// Returns an error when cleanup fails; the container collects it into
    /// the joint teardown report instead of aborting the pass.
    fn dispose(&self) -> Result<(), DisposeErrorKind>;
}

/// A teardown callback for a realized singleton of the contract `Dep`.
/// Implemented for closures `FnMut(Arc<Dep>) -> Result<(), DisposeErrorKind>`.
pub trait Disposer<Dep: ?Sized>: Clone + 'static {
    fn dispose(&mut self, instance: Arc<Dep>) -> Result<(), DisposeErrorKind>;
}

impl<F, Dep: ?Sized> Disposer<Dep> for F
where
    F: FnMut(Arc<Dep>) -> Result<(), DisposeErrorKind> + Clone + 'static,
{
    #[inline]
    fn dispose(&mut self, instance: Arc<Dep>) -> Result<(), DisposeErrorKind> {
        self(instance)
    }
}

pub(crate) type BoxedCloneDisposer = BoxCloneService<SharedInstance, (), DisposeErrorKind>;

#[must_use]
pub(crate) fn boxed_disposer<Dep, D>(mut disposer: D) -> BoxedCloneDisposer
where
    Dep: ?Sized + Send + Sync + 'static,
    D: Disposer<Dep> + Send + Sync,
{
    BoxCloneService(Box::new(service_fn(move |instance: SharedInstance| {
        let instance = instance
            .extract::<Arc<Dep>>()
            .expect("Failed to downcast instance in disposer factory");
        disposer.dispose(instance)
    })))
}
