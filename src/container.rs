use alloc::{sync::Arc, vec::Vec};
use core::cell::RefCell;
use parking_lot::ReentrantMutex;
use tracing::{debug, error, info_span};

use crate::{
    any::TypeInfo,
    binding::Binding,
    cache::{Resolved, ResolvedSet},
    dependency::Dependency,
    errors::{DependencyCycle, DisposeFailure, InstantiatorErrorKind, RegisterErrorKind, ResolveErrorKind, TeardownError},
    registry::Registry,
    service::Service as _,
    strategy::Strategy,
};

/// The service registry and graph resolver. Cheap to clone; all clones share
/// one registry behind one reentrant lock, so an entire resolution (or
/// teardown pass) is a single critical section while factories and disposers
/// holding a clone may still call back into the container.
#[derive(Clone)]
pub struct Container {
    inner: Arc<ContainerInner>,
}

impl Default for Container {
    fn default() -> Self {
        Self::new()
    }
}

impl Container {
    /// Creates an empty container.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Arc::new(ContainerInner {
                state: ReentrantMutex::new(RefCell::new(ContainerState {
                    registry: Registry::new(),
                    build_stack: BuildStack::new(),
                    resolved: ResolvedSet::new(),
                })),
            }),
        }
    }

    /// Registers a binding for the contract `C`, replacing any previous
    /// binding for the same contract (last write wins).
    ///
    /// # Errors
    /// Returns [`RegisterErrorKind::NotAContract`] if `C` is not a trait
    /// object (`dyn Trait`) type.
    pub fn register<C>(&self, binding: Binding<C>) -> Result<(), RegisterErrorKind>
    where
        C: ?Sized + Send + Sync + 'static,
    {
        let type_info = TypeInfo::of::<C>();
        let span = info_span!("register", contract = type_info.name);
        let _guard = span.enter();

        if !type_info.is_contract() {
            let err = RegisterErrorKind::NotAContract { type_info };
            error!("{err}");
            return Err(err);
        }

        let descriptor = binding.into_descriptor(type_info);

        let lock = self.inner.state.lock();
        if lock.borrow_mut().registry.put(descriptor).is_some() {
            debug!("Replaced previous binding");
        }

        Ok(())
    }

    /// Registers a binding, panicking on failure.
    ///
    /// # Panics
    /// Panics if [`Self::register`] returns an error. For call sites that
    /// treat a registration error as fatal misconfiguration.
    #[track_caller]
    pub fn must_register<C>(&self, binding: Binding<C>)
    where
        C: ?Sized + Send + Sync + 'static,
    {
        if let Err(err) = self.register(binding) {
            panic!("Failed to register contract `{}`: {err}", TypeInfo::of::<C>().name);
        }
    }

    /// Resolves the contract `C` under the `Singleton` strategy: the cached
    /// instance when present, otherwise a new one that is then cached.
    ///
    /// # Errors
    /// See [`Self::get_with`].
    #[inline]
    pub fn get<C>(&self) -> Result<Arc<C>, ResolveErrorKind>
    where
        C: ?Sized + Send + Sync + 'static,
    {
        self.get_with(Strategy::Singleton)
    }

    /// Resolves a fresh instance of the contract `C` on every call. The
    /// instance is not cached and not tracked for teardown; its `Singleton`
    /// dependencies still resolve through the shared cache.
    ///
    /// # Errors
    /// See [`Self::get_with`].
    #[inline]
    pub fn get_transient<C>(&self) -> Result<Arc<C>, ResolveErrorKind>
    where
        C: ?Sized + Send + Sync + 'static,
    {
        self.get_with(Strategy::Transient)
    }

    /// Resolves the contract `C` under the given strategy, building its
    /// dependency graph transitively. The whole traversal runs as one
    /// critical section.
    ///
    /// # Errors
    /// - [`ResolveErrorKind::NotAContract`] if `C` is not a trait object
    ///   (`dyn Trait`) type
    /// - [`ResolveErrorKind::NotRegistered`] if `C` (or, nested, one of its
    ///   dependencies) has no binding
    /// - [`ResolveErrorKind::CyclicDependency`] if a contract is required
    ///   while already under construction on the current path
    /// - [`ResolveErrorKind::Instantiator`] if a dependency resolution or a
    ///   factory fails
    pub fn get_with<C>(&self, strategy: Strategy) -> Result<Arc<C>, ResolveErrorKind>
    where
        C: ?Sized + Send + Sync + 'static,
    {
        let type_info = TypeInfo::of::<C>();
        let span = info_span!("get", contract = type_info.name, strategy = %strategy);
        let _guard = span.enter();

        if !type_info.is_contract() {
            let err = ResolveErrorKind::NotAContract { type_info };
            error!("{err}");
            return Err(err);
        }

        self.build(type_info, strategy)
    }

    /// Resolves the contract `C` under the `Singleton` strategy, panicking on
    /// failure.
    ///
    /// # Panics
    /// Panics if [`Self::get`] returns an error. For call sites that treat a
    /// resolution error as fatal misconfiguration.
    #[track_caller]
    pub fn must_get<C>(&self) -> Arc<C>
    where
        C: ?Sized + Send + Sync + 'static,
    {
        match self.get() {
            Ok(instance) => instance,
            Err(err) => panic!("Failed to resolve contract `{}`: {err}", TypeInfo::of::<C>().name),
        }
    }

    /// The dependencies realized by the most recent build of `C`, in
    /// resolution order, or `None` if `C` is not registered.
    #[must_use]
    pub fn dependencies_of<C>(&self) -> Option<Vec<Dependency>>
    where
        C: ?Sized + 'static,
    {
        let lock = self.inner.state.lock();
        let state = lock.borrow();
        state
            .registry
            .get(&TypeInfo::of::<C>())
            .map(|descriptor| descriptor.dependencies.clone())
    }

    /// Tears down every singleton realized since the last call, invoking each
    /// one's disposer exactly once in reverse construction order, so
    /// consumers are disposed before the dependencies they hold. Transient
    /// instances are never tracked. Best-effort: every disposer runs even
    /// when earlier ones fail.
    ///
    /// Dropping the last container handle runs the same pass, logging
    /// failures instead of returning them.
    ///
    /// # Errors
    /// Returns a [`TeardownError`] collecting every disposer failure.
    pub fn teardown(&self) -> Result<(), TeardownError> {
        let span = info_span!("teardown");
        let _guard = span.enter();

        self.inner.teardown()
    }

    /// Resolves a dependency for the descriptor currently under construction
    /// and records the realized edge on it.
    pub(crate) fn resolve_dependency<Dep>(&self, strategy: Strategy) -> Result<Arc<Dep>, ResolveErrorKind>
    where
        Dep: ?Sized + Send + Sync + 'static,
    {
        let type_info = TypeInfo::of::<Dep>();
        let lock = self.inner.state.lock();

        let consumer = lock.borrow().build_stack.current();
        if !type_info.is_contract() {
            let err = ResolveErrorKind::InvalidDependency {
                dependency: type_info,
                consumer,
            };
            error!("{err}");
            return Err(err);
        }

        let instance = self.build::<Dep>(type_info, strategy)?;

        if let Some(consumer) = consumer {
            let mut state = lock.borrow_mut();
            if let Some(descriptor) = state.registry.get_mut(&consumer) {
                descriptor.dependencies.push(Dependency { type_info, strategy });
            }
        }

        Ok(instance)
    }

    fn build<C>(&self, type_info: TypeInfo, strategy: Strategy) -> Result<Arc<C>, ResolveErrorKind>
    where
        C: ?Sized + Send + Sync + 'static,
    {
        // Held until the build returns: the lock is reentrant, so nested
        // builds on this call stack re-acquire it while other threads wait
        // for the whole traversal to finish.
        let lock = self.inner.state.lock();

        let (mut instantiator, disposer) = {
            let state = lock.borrow();

            let Some(descriptor) = state.registry.get(&type_info) else {
                let err = ResolveErrorKind::NotRegistered { type_info };
                error!("{err}");
                return Err(err);
            };

            if strategy == Strategy::Singleton {
                if let Some(cached) = &descriptor.cached {
                    debug!("Found in cache");
                    return cached.extract::<Arc<C>>().ok_or_else(|| ResolveErrorKind::IncorrectType {
                        expected: type_info,
                        actual: cached.type_id(),
                    });
                }
                debug!("Not found in cache");
            }

            if state.build_stack.contains(&type_info) {
                let err = ResolveErrorKind::CyclicDependency(state.build_stack.cycle_from(type_info));
                error!("{err}");
                return Err(err);
            }

            (descriptor.instantiator.clone(), descriptor.disposer.clone())
        };

        {
            let mut state = lock.borrow_mut();
            state.build_stack.push(type_info);
            if let Some(descriptor) = state.registry.get_mut(&type_info) {
                descriptor.dependencies.clear();
            }
        }

        // No borrow is held here: the instantiator re-enters the container to
        // resolve its declared dependencies.
        let result = instantiator.call(self.clone());
        lock.borrow_mut().build_stack.pop();

        let shared = match result {
            Ok(shared) => shared,
            Err(InstantiatorErrorKind::Deps(err)) => {
                let err = ResolveErrorKind::Instantiator(InstantiatorErrorKind::Deps(alloc::boxed::Box::new(err)));
                error!("{err}");
                return Err(err);
            }
            Err(InstantiatorErrorKind::Factory(err)) => {
                let err = ResolveErrorKind::Instantiator(InstantiatorErrorKind::Factory(err));
                error!("{err}");
                return Err(err);
            }
        };

        let Some(instance) = shared.extract::<Arc<C>>() else {
            let err = ResolveErrorKind::IncorrectType {
                expected: type_info,
                actual: shared.type_id(),
            };
            error!("{err}");
            return Err(err);
        };

        if strategy == Strategy::Singleton {
            let mut state = lock.borrow_mut();
            if let Some(descriptor) = state.registry.get_mut(&type_info) {
                descriptor.cached = Some(shared.clone());
            }
            state.resolved.push(Resolved {
                type_info,
                instance: shared,
                disposer,
            });
            debug!("Cached");
        }

        Ok(instance)
    }

    #[cfg(test)]
    pub(crate) fn resolved_len(&self) -> usize {
        self.inner.state.lock().borrow().resolved.len()
    }
}

pub(crate) struct ContainerInner {
    state: ReentrantMutex<RefCell<ContainerState>>,
}

struct ContainerState {
    registry: Registry,
    build_stack: BuildStack,
    resolved: ResolvedSet,
}

impl ContainerInner {
    fn teardown(&self) -> Result<(), TeardownError> {
        let lock = self.state.lock();
        let mut resolved = lock.borrow_mut().resolved.take();

        let mut failures = Vec::new();
        while let Some(Resolved {
            type_info,
            instance,
            disposer,
        }) = resolved.pop_newest()
        {
            let Some(mut disposer) = disposer else { continue };

            debug!(contract = type_info.name, "Disposing");
            if let Err(error) = disposer.call(instance) {
                error!(contract = type_info.name, %error, "Disposer failed");
                failures.push(DisposeFailure { type_info, error });
            }
        }

        if failures.is_empty() {
            Ok(())
        } else {
            Err(TeardownError { failures })
        }
    }
}

impl Drop for ContainerInner {
    fn drop(&mut self) {
        if let Err(err) = self.teardown() {
            error!("{err}");
        }
        debug!("Container closed on drop");
    }
}

/// Contract keys currently under construction on this call stack. Path-local:
/// a key is removed as soon as its build finishes, so sibling branches may
/// legally reuse a completed contract.
#[derive(Default)]
struct BuildStack(Vec<TypeInfo>);

impl BuildStack {
    #[must_use]
    const fn new() -> Self {
        Self(Vec::new())
    }

    #[inline]
    fn contains(&self, key: &TypeInfo) -> bool {
        self.0.contains(key)
    }

    #[inline]
    fn push(&mut self, key: TypeInfo) {
        self.0.push(key);
    }

    #[inline]
    fn pop(&mut self) {
        self.0.pop();
    }

    #[inline]
    fn current(&self) -> Option<TypeInfo> {
        self.0.last().copied()
    }

    fn cycle_from(&self, key: TypeInfo) -> DependencyCycle {
        let start = self.0.iter().position(|entry| *entry == key).unwrap_or(0);
        let mut path = self.0[start..].to_vec();
        path.push(key);
        DependencyCycle::new(path.into_boxed_slice())
    }
}
