//! Result set capability codes.
//!
//! The values are those published by the standard database-access API and are passed to the
//! statement factories on [`Connection`](crate::Connection) unchanged.

/// Rows are processed first to last.
pub const FETCH_FORWARD: i32 = 1000;
/// Rows are processed last to first.
pub const FETCH_REVERSE: i32 = 1001;
/// The order in which rows are processed is unknown.
pub const FETCH_UNKNOWN: i32 = 1002;

/// The cursor may move only forward.
pub const TYPE_FORWARD_ONLY: i32 = 1003;
/// Scrollable, not sensitive to changes made by others.
pub const TYPE_SCROLL_INSENSITIVE: i32 = 1004;
/// Scrollable, sensitive to changes made by others.
pub const TYPE_SCROLL_SENSITIVE: i32 = 1005;

/// The result set may not be updated.
pub const CONCUR_READ_ONLY: i32 = 1007;
/// The result set may be updated.
pub const CONCUR_UPDATABLE: i32 = 1008;

/// Open cursors stay open when the current transaction is committed.
pub const HOLD_CURSORS_OVER_COMMIT: i32 = 1;
/// Open cursors are closed when the current transaction is committed.
pub const CLOSE_CURSORS_AT_COMMIT: i32 = 2;

code_enum! {
    /// Scrollability of a result set.
    pub ResultSetType {
        ForwardOnly => TYPE_FORWARD_ONLY,
        ScrollInsensitive => TYPE_SCROLL_INSENSITIVE,
        ScrollSensitive => TYPE_SCROLL_SENSITIVE,
    }
    default ForwardOnly
}

code_enum! {
    /// Whether a result set may be updated through its cursor.
    pub ResultSetConcurrency {
        ReadOnly => CONCUR_READ_ONLY,
        Updatable => CONCUR_UPDATABLE,
    }
    default ReadOnly
}

code_enum! {
    /// What happens to open cursors when a transaction commits.
    pub ResultSetHoldability {
        HoldCursorsOverCommit => HOLD_CURSORS_OVER_COMMIT,
        CloseCursorsAtCommit => CLOSE_CURSORS_AT_COMMIT,
    }
    default CloseCursorsAtCommit
}

code_enum! {
    /// Hint for the order in which rows are fetched.
    pub FetchDirection {
        Forward => FETCH_FORWARD,
        Reverse => FETCH_REVERSE,
        Unknown => FETCH_UNKNOWN,
    }
    default Forward
}
