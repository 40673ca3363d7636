use crate::{
    Error, Result,
    result_set::{ResultSetConcurrency, ResultSetHoldability, ResultSetType},
};

/// The result set capabilities a statement was created with.
///
/// Only forward-only, read-only cursors that close at commit are supported, so every accepted
/// statement carries the default flags. They are still recorded on the statement so callers can
/// read them back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StatementFlags {
    pub(crate) result_set_type: ResultSetType,
    pub(crate) concurrency: ResultSetConcurrency,
    pub(crate) holdability: ResultSetHoldability,
}

impl StatementFlags {
    /// Check raw capability codes against the supported set.
    ///
    /// Dimensions are checked in argument order and the first violation is reported. A missing
    /// `holdability` falls back to the default.
    pub(crate) fn validate(
        result_set_type: i32,
        concurrency: i32,
        holdability: Option<i32>,
    ) -> Result<Self> {
        let result_set_type = accept(
            "type",
            result_set_type,
            ResultSetType::from_code,
            ResultSetType::ForwardOnly,
        )?;
        let concurrency = accept(
            "concurrency",
            concurrency,
            ResultSetConcurrency::from_code,
            ResultSetConcurrency::ReadOnly,
        )?;
        let holdability = match holdability {
            Some(code) => validate_holdability(code)?,
            None => ResultSetHoldability::default(),
        };

        Ok(Self {
            result_set_type,
            concurrency,
            holdability,
        })
    }

    pub fn result_set_type(&self) -> ResultSetType {
        self.result_set_type
    }

    pub fn concurrency(&self) -> ResultSetConcurrency {
        self.concurrency
    }

    pub fn holdability(&self) -> ResultSetHoldability {
        self.holdability
    }
}

pub(crate) fn validate_holdability(code: i32) -> Result<ResultSetHoldability> {
    accept(
        "holdability",
        code,
        ResultSetHoldability::from_code,
        ResultSetHoldability::CloseCursorsAtCommit,
    )
}

fn accept<T: PartialEq>(
    dimension: &str,
    code: i32,
    decode: fn(i32) -> Option<T>,
    supported: T,
) -> Result<T> {
    match decode(code) {
        Some(value) if value == supported => Ok(value),
        _ => Err(Error::unsupported(format!(
            "Unsupported ResultSet {dimension}: {code}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result_set::*;

    fn message(res: Result<StatementFlags>) -> String {
        res.unwrap_err().to_string()
    }

    #[test]
    fn accepts_supported_triple() {
        let flags = StatementFlags::validate(
            TYPE_FORWARD_ONLY,
            CONCUR_READ_ONLY,
            Some(CLOSE_CURSORS_AT_COMMIT),
        )
        .unwrap();
        assert_eq!(flags, StatementFlags::default());

        let flags = StatementFlags::validate(TYPE_FORWARD_ONLY, CONCUR_READ_ONLY, None).unwrap();
        assert_eq!(
            flags.holdability(),
            ResultSetHoldability::CloseCursorsAtCommit
        );
    }

    #[test]
    fn type_is_checked_first() {
        assert_eq!(
            message(StatementFlags::validate(
                TYPE_SCROLL_INSENSITIVE,
                CONCUR_UPDATABLE,
                Some(HOLD_CURSORS_OVER_COMMIT)
            )),
            "Unsupported ResultSet type: 1004"
        );
    }

    #[test]
    fn concurrency_is_checked_before_holdability() {
        assert_eq!(
            message(StatementFlags::validate(
                TYPE_FORWARD_ONLY,
                CONCUR_UPDATABLE,
                Some(HOLD_CURSORS_OVER_COMMIT)
            )),
            "Unsupported ResultSet concurrency: 1008"
        );
    }

    #[test]
    fn reports_values_from_other_dimensions_verbatim() {
        assert_eq!(
            message(StatementFlags::validate(CONCUR_READ_ONLY, CONCUR_READ_ONLY, None)),
            "Unsupported ResultSet type: 1007"
        );
        assert_eq!(
            message(StatementFlags::validate(
                TYPE_FORWARD_ONLY,
                CONCUR_READ_ONLY,
                Some(-5)
            )),
            "Unsupported ResultSet holdability: -5"
        );
    }
}
