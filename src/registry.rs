use alloc::collections::BTreeMap;

use crate::{any::TypeInfo, descriptor::ServiceDescriptor};

/// The contract-key to descriptor mapping. Plain data: validation belongs to
/// the registration API and concurrency safety to the container's lock.
#[derive(Default)]
pub(crate) struct Registry {
    descriptors: BTreeMap<TypeInfo, ServiceDescriptor>,
}

impl Registry {
    #[inline]
    #[must_use]
    pub(crate) const fn new() -> Self {
        Self {
            descriptors: BTreeMap::new(),
        }
    }

    /// Inserts or replaces the descriptor bound to its contract key,
    /// returning the replaced one. Last write wins.
    #[inline]
    pub(crate) fn put(&mut self, descriptor: ServiceDescriptor) -> Option<ServiceDescriptor> {
        self.descriptors.insert(descriptor.contract, descriptor)
    }

    #[inline]
    #[must_use]
    pub(crate) fn get(&self, key: &TypeInfo) -> Option<&ServiceDescriptor> {
        self.descriptors.get(key)
    }

    #[inline]
    #[must_use]
    pub(crate) fn get_mut(&mut self, key: &TypeInfo) -> Option<&mut ServiceDescriptor> {
        self.descriptors.get_mut(key)
    }
}

#[cfg(test)]
mod tests {
    use alloc::sync::Arc;

    use super::Registry;
    use crate::{any::TypeInfo, binding::Binding, instance};

    trait Token {}

    struct First;
    struct Second;

    impl Token for First {}
    impl Token for Second {}

    type DynToken = dyn Token + Send + Sync;

    fn descriptor_of(value: Arc<DynToken>) -> crate::descriptor::ServiceDescriptor {
        Binding::to_factory(instance(value)).into_descriptor(TypeInfo::of::<DynToken>())
    }

    #[test]
    fn test_put_replaces() {
        let mut registry = Registry::new();
        let key = TypeInfo::of::<DynToken>();

        assert!(registry.get(&key).is_none());

        assert!(registry.put(descriptor_of(Arc::new(First))).is_none());
        assert!(registry.get(&key).is_some());

        let replaced = registry.put(descriptor_of(Arc::new(Second)));
        assert!(replaced.is_some());
        assert_eq!(replaced.unwrap().contract, key);
    }
}
