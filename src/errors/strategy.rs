use alloc::string::String;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error(
    "Unknown lifecycle strategy `{name}`, expected one of: \
    \"singleton\", \"single\", \"s\", \"transient\", \"transistent\", \"trans\", \"t\""
)]
pub struct InvalidStrategy {
    pub name: String,
}
