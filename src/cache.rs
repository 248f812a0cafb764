use alloc::{collections::vec_deque::VecDeque, sync::Arc};
use core::{
    any::{Any, TypeId},
    mem,
};

use crate::{any::TypeInfo, disposer::BoxedCloneDisposer};

/// A type-erased shared instance: the concrete `Arc<C>` boxed behind
/// `dyn Any`, so descriptors can hold instances of unsized contract types.
#[derive(Clone)]
pub(crate) struct SharedInstance {
    value: Arc<dyn Any + Send + Sync>,
}

impl SharedInstance {
    #[inline]
    #[must_use]
    pub(crate) fn new<T: Send + Sync + 'static>(value: T) -> Self {
        Self { value: Arc::new(value) }
    }

    #[inline]
    #[must_use]
    pub(crate) fn extract<T: Clone + 'static>(&self) -> Option<T> {
        self.value.downcast_ref::<T>().cloned()
    }

    #[inline]
    #[must_use]
    pub(crate) fn type_id(&self) -> TypeId {
        (*self.value).type_id()
    }
}

/// A singleton realized during a build, in construction-completion order.
/// The disposer is captured at cache time so a later re-registration of the
/// contract cannot redirect teardown of an already realized instance.
pub(crate) struct Resolved {
    pub(crate) type_info: TypeInfo,
    pub(crate) instance: SharedInstance,
    pub(crate) disposer: Option<BoxedCloneDisposer>,
}

#[derive(Default)]
pub(crate) struct ResolvedSet(VecDeque<Resolved>);

impl ResolvedSet {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self(VecDeque::new())
    }

    #[inline]
    pub(crate) fn push(&mut self, resolved: Resolved) {
        self.0.push_back(resolved);
    }

    /// Pops the most recently realized singleton, yielding the set in
    /// reverse construction order.
    #[inline]
    pub(crate) fn pop_newest(&mut self) -> Option<Resolved> {
        self.0.pop_back()
    }

    #[inline]
    #[must_use]
    pub(crate) fn take(&mut self) -> Self {
        mem::take(self)
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.0.len()
    }
}
