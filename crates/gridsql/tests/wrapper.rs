use std::ptr;

use gridsql::{Connection, Error, PreparedStatement, Statement, Wrapper};
use gridsql_test::connection;

#[test]
fn it_unwraps_connection() -> anyhow::Result<()> {
    let conn = connection();

    assert!(conn.is_wrapper_for::<Connection>());
    let unwrapped: &Connection = conn.unwrap::<Connection>()?;
    assert!(ptr::eq(unwrapped, &conn));

    Ok(())
}

#[test]
fn it_refuses_unrelated_types() {
    let conn = connection();

    assert!(!conn.is_wrapper_for::<Statement>());
    assert!(!conn.is_wrapper_for::<String>());

    let err = conn.unwrap::<Statement>().unwrap_err();
    assert!(matches!(err, Error::Unwrap { .. }));
    assert!(err.to_string().starts_with("Cannot unwrap to "));
    assert!(err.to_string().ends_with("Statement"));
}

#[test]
fn prepared_statement_unwraps_to_its_statement() -> anyhow::Result<()> {
    let prepared = connection().prepare_statement("SELECT 1")?;

    assert!(prepared.is_wrapper_for::<PreparedStatement>());
    assert!(prepared.is_wrapper_for::<Statement>());
    assert!(!prepared.is_wrapper_for::<Connection>());

    let outer: &PreparedStatement = prepared.unwrap()?;
    assert!(ptr::eq(outer, &prepared));

    let inner: &Statement = prepared.unwrap()?;
    assert!(ptr::eq(inner, &*prepared));

    Ok(())
}

#[test]
fn statement_does_not_unwrap_to_prepared() -> anyhow::Result<()> {
    let stmt = connection().create_statement()?;

    assert!(stmt.is_wrapper_for::<Statement>());
    assert!(!stmt.is_wrapper_for::<PreparedStatement>());
    assert!(stmt.unwrap::<PreparedStatement>().is_err());

    Ok(())
}
