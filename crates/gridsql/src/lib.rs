#[macro_use]
mod code_enum;

mod client;
mod connection;
mod error;
mod logger;
mod options;
pub mod result_set;
pub mod statement;
mod wrapper;

pub use crate::{
    client::GridClient,
    connection::Connection,
    error::{Error, Result},
    logger::LogSettings,
    options::GridOptions,
    result_set::{FetchDirection, ResultSetConcurrency, ResultSetHoldability, ResultSetType},
    statement::{PreparedStatement, Statement, StatementFlags},
    wrapper::Wrapper,
};
