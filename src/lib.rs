//! A compact, thread-safe dependency injection container.
//!
//! Contracts are trait-object types (`dyn Trait + Send + Sync`), bound to
//! factories that receive their own dependencies as typed parameters
//! ([`Inject`] for shared singletons, [`InjectTransient`] for per-resolution
//! instances). The container builds the object graph on demand, detects
//! cycles on the construction path, caches singletons, and tears realized
//! singletons down in reverse construction order.
//!
//! ```
//! use std::sync::Arc;
//! use rigging::{bind, shared, Binding, Container, Inject, InstantiatorResult};
//!
//! trait Greeter {
//!     fn greet(&self) -> &'static str;
//! }
//!
//! #[derive(Default)]
//! struct EnglishGreeter;
//!
//! impl Greeter for EnglishGreeter {
//!     fn greet(&self) -> &'static str {
//!         "hello"
//!     }
//! }
//!
//! trait App {
//!     fn run(&self) -> &'static str;
//! }
//!
//! struct CliApp {
//!     greeter: Arc<dyn Greeter + Send + Sync>,
//! }
//!
//! impl App for CliApp {
//!     fn run(&self) -> &'static str {
//!         self.greeter.greet()
//!     }
//! }
//!
//! fn new_app(Inject(greeter): Inject<dyn Greeter + Send + Sync>) -> InstantiatorResult<Arc<dyn App + Send + Sync>> {
//!     Ok(shared!(CliApp { greeter }; App + Send + Sync))
//! }
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let container = Container::new();
//! container.register(bind!(Greeter => EnglishGreeter))?;
//! container.register(Binding::to_factory(new_app))?;
//!
//! let app = container.get::<dyn App + Send + Sync>()?;
//! assert_eq!(app.run(), "hello");
//!
//! container.teardown()?;
//! # Ok(())
//! # }
//! ```
#![no_std]

extern crate alloc;

#[macro_use]
pub(crate) mod macros;

pub(crate) mod any;
pub(crate) mod bind_macros;
pub(crate) mod binding;
pub(crate) mod cache;
pub(crate) mod container;
pub(crate) mod dependency;
pub(crate) mod dependency_resolver;
pub(crate) mod descriptor;
pub(crate) mod disposer;
pub(crate) mod errors;
pub(crate) mod inject;
pub(crate) mod instantiator;
pub(crate) mod registry;
pub(crate) mod service;
pub(crate) mod strategy;

pub mod macros_utils;

pub use any::TypeInfo;
pub use binding::Binding;
pub use container::Container;
pub use dependency::Dependency;
pub use dependency_resolver::DependencyResolver;
pub use disposer::{Dispose, Disposer};
pub use errors::{
    DependencyCycle, DisposeErrorKind, DisposeFailure, InstantiateErrorKind, InstantiatorErrorKind, InstantiatorResult,
    InvalidStrategy, RegisterErrorKind, ResolveErrorKind, TeardownError,
};
pub use inject::{Inject, InjectTransient};
pub use instantiator::{instance, Instantiator};
pub use strategy::Strategy;
