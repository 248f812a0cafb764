use alloc::vec::Vec;

use crate::{
    any::TypeInfo, cache::SharedInstance, dependency::Dependency, disposer::BoxedCloneDisposer,
    instantiator::BoxedCloneInstantiator,
};

/// One registered binding: the contract key, the instantiator synthesized at
/// registration, an optional disposer, the cached singleton instance and the
/// dependencies realized during the most recent build.
pub(crate) struct ServiceDescriptor {
    pub(crate) contract: TypeInfo,
    pub(crate) instantiator: BoxedCloneInstantiator,
    pub(crate) disposer: Option<BoxedCloneDisposer>,
    pub(crate) cached: Option<SharedInstance>,
    pub(crate) dependencies: Vec<Dependency>,
}

impl ServiceDescriptor {
    #[must_use]
    pub(crate) fn new(contract: TypeInfo, instantiator: BoxedCloneInstantiator, disposer: Option<BoxedCloneDisposer>) -> Self {
        Self {
            contract,
            instantiator,
            disposer,
            cached: None,
            dependencies: Vec::new(),
        }
    }
}
