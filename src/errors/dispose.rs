#[derive(thiserror::Error, Debug)]
pub enum DisposeErrorKind {
    #[error(transparent)]
    Custom(#[from] anyhow::Error),
}
