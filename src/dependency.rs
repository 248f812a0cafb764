use crate::{any::TypeInfo, strategy::Strategy};

/// A dependency edge realized during the most recent build of a descriptor:
/// which contract was required and under which strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dependency {
    pub type_info: TypeInfo,
    pub strategy: Strategy,
}
