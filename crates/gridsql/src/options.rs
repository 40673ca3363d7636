use std::sync::Arc;

use indexmap::IndexMap;
use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::{Connection, Error, GridClient, Result, logger::LogSettings};

/// Default number of rows fetched per page.
pub(crate) const DEFAULT_FETCH_SIZE: u32 = 4096;

/// Default schema that unqualified names are resolved against.
pub(crate) const DEFAULT_SCHEMA: &str = "public";

/// Options for opening a [`Connection`].
///
/// ```
/// # use gridsql::GridOptions;
/// let options = GridOptions::new()
///     .schema("sales")
///     .default_fetch_size(512)
///     .client_info("ApplicationName", "reporting");
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct GridOptions {
    pub(crate) default_fetch_size: u32,
    pub(crate) schema: String,
    pub(crate) client_info: IndexMap<String, String>,
    pub(crate) log_settings: LogSettings,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl GridOptions {
    /// Construct `Self` with default options.
    #[must_use]
    pub fn new() -> Self {
        Self {
            default_fetch_size: DEFAULT_FETCH_SIZE,
            schema: DEFAULT_SCHEMA.into(),
            client_info: IndexMap::new(),
            log_settings: Default::default(),
        }
    }

    /// Sets the fetch size that new statements start with. Zero leaves the page size to the grid.
    #[must_use]
    pub fn default_fetch_size(mut self, rows: u32) -> Self {
        self.default_fetch_size = rows;
        self
    }

    /// Sets the schema that unqualified object names are resolved against.
    #[must_use]
    pub fn schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = schema.into();
        self
    }

    /// Sets a client-info property reported for this connection.
    ///
    /// Properties keep the order in which they were first set.
    #[must_use]
    pub fn client_info(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.client_info.insert(name.into(), value.into());
        self
    }

    #[must_use]
    pub fn log_settings(mut self, settings: LogSettings) -> Self {
        self.log_settings = settings;
        self
    }

    /// Sets the level at which statement creation is logged.
    #[must_use]
    pub fn log_statements(mut self, level: LevelFilter) -> Self {
        self.log_settings.log_statements(level);
        self
    }

    /// Check the options for consistency.
    pub fn validate(&self) -> Result<()> {
        if self.schema.trim().is_empty() {
            return Err(Error::Configuration("schema name must not be empty".into()));
        }
        Ok(())
    }

    /// Open a connection over `client` with these options.
    pub fn connect(&self, client: Arc<dyn GridClient>) -> Result<Connection> {
        Connection::with_options(client, self.clone())
    }
}
