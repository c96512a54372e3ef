/// Returns the version of the folio workspace.
pub fn folio_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Asserts that a value matches a pattern, with an optional guard expression.
///
/// #### Example
/// ```rust
/// # use folio_utils::assert_matches;
/// assert_matches!(Some(7), Some(x) if x > 5);
/// ```
#[macro_export]
macro_rules! assert_matches {
    ($value:expr, $pattern:pat $(if $guard:expr)? $(,)?) => {
        match $value {
            $pattern $(if $guard)? => {}
            other => ::core::panic!(
                "expected `{}`, got {other:?}",
                ::core::stringify!($pattern $(if $guard)?),
            ),
        }
    };
}
