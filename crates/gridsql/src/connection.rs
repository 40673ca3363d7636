use std::{
    fmt::{self, Debug, Formatter},
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
};

use crate::{
    Error, GridClient, GridOptions, Result,
    logger::StatementLogger,
    result_set::ResultSetHoldability,
    statement::{PreparedStatement, Statement, StatementFlags, validate_holdability},
};

const AUTO_GENERATED_KEYS_NOT_SUPPORTED: &str = "Auto-generated keys are not supported.";
const CALLABLE_STATEMENTS_NOT_SUPPORTED: &str = "Callable statements are not supported.";

/// A connection to a data grid.
///
/// The connection hands out [`Statement`]s and [`PreparedStatement`]s. Only forward-only,
/// read-only result sets whose cursors close at commit are supported; every factory that takes
/// capability codes checks them in argument order (type, then concurrency, then holdability)
/// and fails with [`Error::FeatureNotSupported`] naming the first unsupported value.
///
/// Statement creation touches no shared mutable state, so a connection can be shared between
/// threads behind an [`Arc`].
pub struct Connection {
    client: Arc<dyn GridClient>,
    options: GridOptions,
    closed: AtomicBool,
}

impl Debug for Connection {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Connection")
            .field("client", &self.client)
            .field("schema", &self.options.schema)
            .field("closed", &self.is_closed())
            .finish()
    }
}

impl Connection {
    /// Create a connection over `client` with default options.
    pub fn new(client: Arc<dyn GridClient>) -> Self {
        Self {
            client,
            options: GridOptions::new(),
            closed: AtomicBool::new(false),
        }
    }

    /// Create a connection over `client` with the provided options.
    pub fn with_options(client: Arc<dyn GridClient>, options: GridOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self {
            client,
            options,
            closed: AtomicBool::new(false),
        })
    }

    /// The grid client this connection was created with.
    pub fn client(&self) -> &Arc<dyn GridClient> {
        &self.client
    }

    pub fn options(&self) -> &GridOptions {
        &self.options
    }

    /// Create a statement with default capabilities.
    pub fn create_statement(&self) -> Result<Statement> {
        self.ensure_open()?;
        Ok(self.statement("create", None, StatementFlags::default()))
    }

    /// Create a statement with the given result set type and concurrency.
    pub fn create_statement_with(
        &self,
        result_set_type: i32,
        concurrency: i32,
    ) -> Result<Statement> {
        self.ensure_open()?;
        let flags = StatementFlags::validate(result_set_type, concurrency, None)?;
        Ok(self.statement("create", None, flags))
    }

    /// Create a statement with the given result set type, concurrency and holdability.
    pub fn create_statement_with_holdability(
        &self,
        result_set_type: i32,
        concurrency: i32,
        holdability: i32,
    ) -> Result<Statement> {
        self.ensure_open()?;
        let flags = StatementFlags::validate(result_set_type, concurrency, Some(holdability))?;
        Ok(self.statement("create", None, flags))
    }

    /// Prepare `sql` with default capabilities.
    pub fn prepare_statement(&self, sql: impl Into<String>) -> Result<PreparedStatement> {
        self.ensure_open()?;
        Ok(self.prepared(sql.into(), StatementFlags::default()))
    }

    /// Prepare `sql` with the given result set type and concurrency.
    pub fn prepare_statement_with(
        &self,
        sql: impl Into<String>,
        result_set_type: i32,
        concurrency: i32,
    ) -> Result<PreparedStatement> {
        self.ensure_open()?;
        let flags = StatementFlags::validate(result_set_type, concurrency, None)?;
        Ok(self.prepared(sql.into(), flags))
    }

    /// Prepare `sql` with the given result set type, concurrency and holdability.
    pub fn prepare_statement_with_holdability(
        &self,
        sql: impl Into<String>,
        result_set_type: i32,
        concurrency: i32,
        holdability: i32,
    ) -> Result<PreparedStatement> {
        self.ensure_open()?;
        let flags = StatementFlags::validate(result_set_type, concurrency, Some(holdability))?;
        Ok(self.prepared(sql.into(), flags))
    }

    /// Auto-generated keys are not supported; this always fails, including for
    /// [`NO_GENERATED_KEYS`](crate::statement::NO_GENERATED_KEYS).
    pub fn prepare_statement_with_generated_keys(
        &self,
        _sql: &str,
        _auto_generated_keys: i32,
    ) -> Result<PreparedStatement> {
        self.ensure_open()?;
        Err(Error::unsupported(AUTO_GENERATED_KEYS_NOT_SUPPORTED))
    }

    /// Auto-generated keys are not supported; this always fails.
    pub fn prepare_statement_with_key_indexes(
        &self,
        _sql: &str,
        _column_indexes: &[i32],
    ) -> Result<PreparedStatement> {
        self.ensure_open()?;
        Err(Error::unsupported(AUTO_GENERATED_KEYS_NOT_SUPPORTED))
    }

    /// Auto-generated keys are not supported; this always fails.
    pub fn prepare_statement_with_key_names<S: AsRef<str>>(
        &self,
        _sql: &str,
        _column_names: &[S],
    ) -> Result<PreparedStatement> {
        self.ensure_open()?;
        Err(Error::unsupported(AUTO_GENERATED_KEYS_NOT_SUPPORTED))
    }

    /// Stored procedures are not supported; this always fails.
    pub fn prepare_call(&self, _sql: &str) -> Result<PreparedStatement> {
        self.ensure_open()?;
        Err(Error::unsupported(CALLABLE_STATEMENTS_NOT_SUPPORTED))
    }

    /// Returns `sql` as the grid will receive it. No translation is applied.
    pub fn native_sql<'q>(&self, sql: &'q str) -> Result<&'q str> {
        self.ensure_open()?;
        Ok(sql)
    }

    /// The holdability of result sets created by this connection.
    pub fn holdability(&self) -> ResultSetHoldability {
        ResultSetHoldability::CloseCursorsAtCommit
    }

    /// Only [`CLOSE_CURSORS_AT_COMMIT`](crate::result_set::CLOSE_CURSORS_AT_COMMIT) is accepted.
    pub fn set_holdability(&self, holdability: i32) -> Result<()> {
        self.ensure_open()?;
        validate_holdability(holdability).map(|_| ())
    }

    pub fn schema(&self) -> &str {
        &self.options.schema
    }

    /// Look up a client-info property.
    pub fn client_info(&self, name: &str) -> Option<&str> {
        self.options.client_info.get(name).map(String::as_str)
    }

    /// Close this connection.
    ///
    /// The grid client is owned by the application and stays open. Closing twice is a no-op.
    pub fn close(&self) {
        if !self.closed.swap(true, Ordering::AcqRel) {
            tracing::debug!(client = ?self.client, "connection closed");
        }
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }

    fn ensure_open(&self) -> Result<()> {
        if self.is_closed() {
            return Err(Error::ConnectionClosed);
        }
        Ok(())
    }

    fn statement(&self, kind: &'static str, sql: Option<&str>, flags: StatementFlags) -> Statement {
        StatementLogger::new(kind, sql, flags, &self.options.log_settings).finish();
        Statement::new(flags, self.options.default_fetch_size)
    }

    fn prepared(&self, sql: String, flags: StatementFlags) -> PreparedStatement {
        let statement = self.statement("prepare", Some(sql.as_str()), flags);
        PreparedStatement::new(sql, statement)
    }
}
