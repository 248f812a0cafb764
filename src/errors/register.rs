use crate::any::TypeInfo;

#[derive(thiserror::Error, Debug)]
pub enum RegisterErrorKind {
    #[error("`{}` is not a contract, expected a trait object (`dyn Trait`) type", type_info.name)]
    NotAContract { type_info: TypeInfo },
}
