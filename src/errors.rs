mod dispose;
mod instantiate;
mod instantiator;
mod register;
mod resolve;
mod strategy;
mod teardown;

pub use dispose::DisposeErrorKind;
pub use instantiate::InstantiateErrorKind;
pub use instantiator::InstantiatorErrorKind;
pub use register::RegisterErrorKind;
pub use resolve::{DependencyCycle, ResolveErrorKind};
pub use strategy::InvalidStrategy;
pub use teardown::{DisposeFailure, TeardownError};

/// Shorthand for the result type of factory functions.
pub type InstantiatorResult<T, Err = InstantiateErrorKind> = Result<T, Err>;
