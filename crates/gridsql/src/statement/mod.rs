//! Statements produced by a [`Connection`](crate::Connection).

use std::ops::{Deref, DerefMut};

use crate::{
    Error, Result,
    result_set::{
        FetchDirection, ResultSetConcurrency, ResultSetHoldability, ResultSetType,
    },
};

mod flags;

pub use flags::StatementFlags;
pub(crate) use flags::validate_holdability;

/// Generated keys should be made available for retrieval.
pub const RETURN_GENERATED_KEYS: i32 = 1;
/// Generated keys should not be made available for retrieval.
pub const NO_GENERATED_KEYS: i32 = 2;

/// A statement carrying the capabilities it was created with.
///
/// Execution is performed by the grid client; this type records what the caller asked for.
#[derive(Debug, Clone)]
pub struct Statement {
    flags: StatementFlags,
    fetch_size: u32,
    fetch_direction: FetchDirection,
    closed: bool,
}

impl Statement {
    pub(crate) fn new(flags: StatementFlags, fetch_size: u32) -> Self {
        Self {
            flags,
            fetch_size,
            fetch_direction: FetchDirection::Forward,
            closed: false,
        }
    }

    pub fn flags(&self) -> StatementFlags {
        self.flags
    }

    pub fn result_set_type(&self) -> ResultSetType {
        self.flags.result_set_type
    }

    pub fn result_set_concurrency(&self) -> ResultSetConcurrency {
        self.flags.concurrency
    }

    pub fn result_set_holdability(&self) -> ResultSetHoldability {
        self.flags.holdability
    }

    /// Number of rows fetched from the grid per page. Zero leaves the choice to the grid.
    pub fn fetch_size(&self) -> u32 {
        self.fetch_size
    }

    /// Set the number of rows to fetch per page.
    pub fn set_fetch_size(&mut self, rows: i32) -> Result<()> {
        self.ensure_open()?;
        self.fetch_size = u32::try_from(rows)
            .map_err(|_| Error::InvalidArgument(format!("Fetch size must be >= 0: {rows}")))?;
        Ok(())
    }

    pub fn fetch_direction(&self) -> FetchDirection {
        self.fetch_direction
    }

    /// Set the fetch direction hint. Only [`FETCH_FORWARD`](crate::result_set::FETCH_FORWARD)
    /// is supported.
    pub fn set_fetch_direction(&mut self, direction: i32) -> Result<()> {
        self.ensure_open()?;
        match FetchDirection::from_code(direction) {
            Some(FetchDirection::Forward) => {
                self.fetch_direction = FetchDirection::Forward;
                Ok(())
            }
            _ => Err(Error::unsupported(format!(
                "Unsupported fetch direction: {direction}"
            ))),
        }
    }

    /// Close the statement. Closing an already closed statement has no effect.
    pub fn close(&mut self) {
        self.closed = true;
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    fn ensure_open(&self) -> Result<()> {
        if self.closed {
            return Err(Error::StatementClosed);
        }
        Ok(())
    }
}

/// A statement bound to its SQL text.
#[derive(Debug, Clone)]
pub struct PreparedStatement {
    pub(crate) statement: Statement,
    sql: String,
}

impl PreparedStatement {
    pub(crate) fn new(sql: String, statement: Statement) -> Self {
        Self { statement, sql }
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }
}

impl Deref for PreparedStatement {
    type Target = Statement;

    fn deref(&self) -> &Self::Target {
        &self.statement
    }
}

impl DerefMut for PreparedStatement {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.statement
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result_set::{FETCH_FORWARD, FETCH_REVERSE, FETCH_UNKNOWN};

    fn statement() -> Statement {
        Statement::new(StatementFlags::default(), 4096)
    }

    #[test]
    fn fetch_size_must_not_be_negative() {
        let mut stmt = statement();
        stmt.set_fetch_size(0).unwrap();
        assert_eq!(stmt.fetch_size(), 0);

        let err = stmt.set_fetch_size(-1).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
        assert_eq!(err.to_string(), "Fetch size must be >= 0: -1");
        assert_eq!(stmt.fetch_size(), 0);
    }

    #[test]
    fn only_forward_fetching_is_supported() {
        let mut stmt = statement();
        stmt.set_fetch_direction(FETCH_FORWARD).unwrap();

        for direction in [FETCH_REVERSE, FETCH_UNKNOWN] {
            let err = stmt.set_fetch_direction(direction).unwrap_err();
            assert!(err.is_feature_not_supported());
            assert_eq!(
                err.to_string(),
                format!("Unsupported fetch direction: {direction}")
            );
        }
        assert_eq!(stmt.fetch_direction(), FetchDirection::Forward);
    }

    #[test]
    fn closed_statement_rejects_changes() {
        let mut stmt = statement();
        stmt.close();
        stmt.close();
        assert!(stmt.is_closed());
        assert!(matches!(
            stmt.set_fetch_size(10),
            Err(Error::StatementClosed)
        ));
        assert!(matches!(
            stmt.set_fetch_direction(FETCH_FORWARD),
            Err(Error::StatementClosed)
        ));
    }

    #[test]
    fn prepared_statement_exposes_inner_statement() {
        let mut prepared = PreparedStatement::new("SELECT 1".into(), statement());
        assert_eq!(prepared.sql(), "SELECT 1");
        prepared.set_fetch_size(12).unwrap();
        assert_eq!(prepared.fetch_size(), 12);
        assert_eq!(prepared.result_set_type(), ResultSetType::ForwardOnly);
    }
}
