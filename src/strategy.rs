use alloc::string::ToString as _;
use core::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

use crate::errors::InvalidStrategy;

/// Lifecycle strategy of a resolution.
///
/// `Singleton` caches one shared instance per contract; `Transient` creates a
/// fresh instance on every resolution and never caches it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Strategy {
    #[default]
    Singleton,
    Transient,
}

impl Strategy {
    #[inline]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Singleton => "singleton",
            Self::Transient => "transient",
        }
    }
}

impl Display for Strategy {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = InvalidStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "singleton" | "single" | "s" => Ok(Self::Singleton),
            "transient" | "transistent" | "trans" | "t" => Ok(Self::Transient),
            _ => Err(InvalidStrategy { name: s.to_string() }),
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::Strategy;

    #[test]
    fn test_parse_aliases() {
        for name in ["singleton", "single", "s"] {
            assert_eq!(name.parse::<Strategy>().unwrap(), Strategy::Singleton);
        }
        for name in ["transient", "transistent", "trans", "t"] {
            assert_eq!(name.parse::<Strategy>().unwrap(), Strategy::Transient);
        }
    }

    #[test]
    fn test_parse_unknown() {
        let err = "lazy".parse::<Strategy>().unwrap_err();
        assert_eq!(err.name, "lazy");
    }

    #[test]
    fn test_display_roundtrip() {
        assert_eq!(Strategy::Singleton.name().parse::<Strategy>().unwrap(), Strategy::Singleton);
        assert_eq!(Strategy::Transient.name().parse::<Strategy>().unwrap(), Strategy::Transient);
    }

    #[test]
    fn test_default() {
        assert_eq!(Strategy::default(), Strategy::Singleton);
    }
}
