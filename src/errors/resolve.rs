use alloc::boxed::Box;
use core::{
    any::TypeId,
    fmt::{self, Display, Formatter},
};

use super::{instantiate::InstantiateErrorKind, instantiator::InstantiatorErrorKind};
use crate::any::TypeInfo;

#[derive(thiserror::Error, Debug)]
pub enum ResolveErrorKind {
    #[error("`{}` is not a contract, expected a trait object (`dyn Trait`) type", type_info.name)]
    NotAContract { type_info: TypeInfo },
    #[error("No binding registered for contract `{}`", type_info.name)]
    NotRegistered { type_info: TypeInfo },
    #[error("{0}")]
    CyclicDependency(DependencyCycle),
    #[error(
        "Dependency `{}` required by `{}` is not a contract, expected a trait object (`dyn Trait`) type",
        dependency.name,
        consumer.as_ref().map_or("<root>", |consumer| consumer.name),
    )]
    InvalidDependency {
        dependency: TypeInfo,
        consumer: Option<TypeInfo>,
    },
    #[error("Stored instance for contract `{}` has incorrect type. Actual: {actual:?}", expected.name)]
    IncorrectType { expected: TypeInfo, actual: TypeId },
    #[error(transparent)]
    Instantiator(InstantiatorErrorKind<Box<ResolveErrorKind>, InstantiateErrorKind>),
}

impl ResolveErrorKind {
    /// Unwraps nested dependency-resolution failures down to the error that
    /// started the chain.
    #[must_use]
    pub fn root_cause(&self) -> &ResolveErrorKind {
        match self {
            Self::Instantiator(InstantiatorErrorKind::Deps(inner)) => inner.root_cause(),
            _ => self,
        }
    }
}

/// The construction path on which a contract was required while already under
/// construction, from its first occurrence back to itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyCycle {
    path: Box<[TypeInfo]>,
}

impl DependencyCycle {
    #[must_use]
    pub(crate) fn new(path: Box<[TypeInfo]>) -> Self {
        Self { path }
    }

    #[must_use]
    pub fn path(&self) -> &[TypeInfo] {
        &self.path
    }
}

impl Display for DependencyCycle {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Cyclic dependency detected: ")?;
        for (index, type_info) in self.path.iter().enumerate() {
            if index > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "`{}`", type_info.name)?;
        }
        Ok(())
    }
}
