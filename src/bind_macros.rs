/// Creates an `Arc<dyn Trait>` from a value, optionally including
/// supertraits.
///
/// # Syntax
/// ```text
/// shared!(value; Trait [+ SuperTrait1 [+ SuperTrait2 ...]])
/// ```
///
/// # Examples
/// ```rust
/// use std::sync::Arc;
/// use rigging::shared;
///
/// trait UserRepo {}
///
/// struct PostgresUserRepo;
///
/// impl UserRepo for PostgresUserRepo {}
///
/// // Single trait
/// let repo1: Arc<dyn UserRepo> = shared!(PostgresUserRepo; UserRepo);
///
/// // Trait with supertraits
/// let repo2: Arc<dyn UserRepo + Send + Sync> = shared!(PostgresUserRepo; UserRepo + Send + Sync);
/// ```
#[macro_export]
macro_rules! shared {
    ($val:expr ; $contract:tt $($super_traits:tt)*) => {{
        $crate::macros_utils::Arc::new($val) as $crate::macros_utils::Arc<dyn $contract $($super_traits)*>
    }};
}

/// Creates a [`crate::Binding`] for the contract `dyn Trait + Send + Sync`
/// that default-constructs the named implementation type.
///
/// # Examples
/// ```rust
/// use rigging::{bind, Container};
///
/// trait UserRepo {}
///
/// #[derive(Default)]
/// struct PostgresUserRepo;
///
/// impl UserRepo for PostgresUserRepo {}
///
/// let container = Container::new();
/// container.register(bind!(UserRepo => PostgresUserRepo)).unwrap();
/// ```
#[macro_export]
macro_rules! bind {
    ($contract:path => $impl:ty) => {
        $crate::Binding::<dyn $contract + Send + Sync>::to_factory(|| {
            ::core::result::Result::Ok(
                $crate::macros_utils::Arc::new(<$impl as ::core::default::Default>::default())
                    as $crate::macros_utils::Arc<dyn $contract + Send + Sync>,
            )
        })
    };
}
