use alloc::vec::Vec;
use core::fmt::{self, Display, Formatter};

use super::dispose::DisposeErrorKind;
use crate::any::TypeInfo;

/// A single disposer failure, tagged with the contract it belongs to.
#[derive(Debug)]
pub struct DisposeFailure {
    pub type_info: TypeInfo,
    pub error: DisposeErrorKind,
}

/// Joint report of every disposer that failed during a teardown pass.
/// Teardown is best-effort: all disposers run before this is returned.
#[derive(Debug)]
pub struct TeardownError {
    pub failures: Vec<DisposeFailure>,
}

impl Display for TeardownError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Teardown failed for {} service(s): ", self.failures.len())?;
        for (index, failure) in self.failures.iter().enumerate() {
            if index > 0 {
                write!(f, "; ")?;
            }
            write!(f, "`{}` ({})", failure.type_info.name, failure.error)?;
        }
        Ok(())
    }
}

impl core::error::Error for TeardownError {}
