use std::sync::Arc;

use gridsql::{Connection, GridClient, result_set::*};

#[doc(hidden)]
pub use paste;

/// A grid client that is never asked to do anything.
#[derive(Debug, Default)]
pub struct MockGridClient;

impl GridClient for MockGridClient {}

// Make a new connection over a mock client
pub fn connection() -> Connection {
    Connection::new(Arc::new(MockGridClient))
}

/// Every capability code of the standard API that a caller might pass, across all dimensions.
pub const STATEMENT_INT_VALUES: [i32; 10] = [
    CONCUR_UPDATABLE,
    CONCUR_READ_ONLY,
    TYPE_FORWARD_ONLY,
    FETCH_UNKNOWN,
    FETCH_FORWARD,
    FETCH_REVERSE,
    HOLD_CURSORS_OVER_COMMIT,
    CLOSE_CURSORS_AT_COMMIT,
    TYPE_SCROLL_INSENSITIVE,
    TYPE_SCROLL_SENSITIVE,
];

/// Assert that `res` failed as an unsupported feature with exactly `message`.
pub fn assert_unsupported<T: std::fmt::Debug>(res: gridsql::Result<T>, message: &str) {
    match res {
        Err(err) => {
            assert!(
                err.is_feature_not_supported(),
                "expected a feature-not-supported error, got {err:?}"
            );
            assert_eq!(err.to_string(), message);
        }
        Ok(value) => panic!("expected {message:?}, got {value:?}"),
    }
}

// Generate one test per named capability code, skipping the supported one.
//
// `$check` is a `fn(i32) -> anyhow::Result<()>` in the calling module.
#[macro_export]
macro_rules! test_rejected_values {
    ($check:ident, supported = $supported:ident, [$($value:ident),+ $(,)?]) => {
        $crate::paste::paste! {
            $(
                #[test]
                fn [< $check _ $value:lower >] () -> anyhow::Result<()> {
                    let value = gridsql::result_set::$value;
                    if value == gridsql::result_set::$supported {
                        return Ok(());
                    }
                    $check(value)
                }
            )+
        }
    };
}
