use log::LevelFilter;
use serde::{Deserialize, Serialize};
use tracing::Level;

use crate::statement::StatementFlags;

const TARGET: &str = "gridsql::statement";

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
#[non_exhaustive]
/// Logging configuration for statement creation.
pub struct LogSettings {
    /// Log level for newly created statements.
    pub statements_level: LevelFilter,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            statements_level: LevelFilter::Debug,
        }
    }
}

impl LogSettings {
    /// Configure statement logging level.
    pub fn log_statements(&mut self, level: LevelFilter) {
        self.statements_level = level;
    }

    /// Returns `true` if any logging level is enabled.
    pub fn is_enabled(&self) -> bool {
        self.statements_level != LevelFilter::Off
    }
}

#[doc(hidden)]
pub fn private_level_filter_to_levels(filter: log::LevelFilter) -> Option<(Level, log::Level)> {
    let tracing_level = match filter {
        log::LevelFilter::Error => Some(Level::ERROR),
        log::LevelFilter::Warn => Some(Level::WARN),
        log::LevelFilter::Info => Some(Level::INFO),
        log::LevelFilter::Debug => Some(Level::DEBUG),
        log::LevelFilter::Trace => Some(Level::TRACE),
        log::LevelFilter::Off => None,
    };

    tracing_level.zip(filter.to_level())
}

fn tracing_enabled_for(level: Level) -> bool {
    match level {
        Level::ERROR => tracing::enabled!(target: TARGET, Level::ERROR),
        Level::WARN => tracing::enabled!(target: TARGET, Level::WARN),
        Level::INFO => tracing::enabled!(target: TARGET, Level::INFO),
        Level::DEBUG => tracing::enabled!(target: TARGET, Level::DEBUG),
        Level::TRACE => tracing::enabled!(target: TARGET, Level::TRACE),
    }
}

/// Emit a statement event at a level chosen at runtime.
fn emit_statement_event(level: Level, summary: &str, sql: &str, flags: &StatementFlags) {
    // `tracing::event!` needs the level as a constant.
    macro_rules! emit {
        ($level:expr) => {
            tracing::event!(
                target: TARGET,
                $level,
                summary,
                db.statement = sql,
                result_set_type = flags.result_set_type().code(),
                concurrency = flags.concurrency().code(),
                holdability = flags.holdability().code(),
            )
        };
    }

    match level {
        Level::ERROR => emit!(Level::ERROR),
        Level::WARN => emit!(Level::WARN),
        Level::INFO => emit!(Level::INFO),
        Level::DEBUG => emit!(Level::DEBUG),
        Level::TRACE => emit!(Level::TRACE),
    }
}

/// Records the creation of a statement.
pub(crate) struct StatementLogger<'q> {
    kind: &'static str,
    sql: Option<&'q str>,
    flags: StatementFlags,
    settings: &'q LogSettings,
}

impl<'q> StatementLogger<'q> {
    pub(crate) fn new(
        kind: &'static str,
        sql: Option<&'q str>,
        flags: StatementFlags,
        settings: &'q LogSettings,
    ) -> Self {
        Self {
            kind,
            sql,
            flags,
            settings,
        }
    }

    pub(crate) fn finish(&self) {
        let Some((tracing_level, log_level)) =
            private_level_filter_to_levels(self.settings.statements_level)
        else {
            return;
        };

        // The level may be enabled from either the log or the tracing side.
        if !(log::log_enabled!(target: TARGET, log_level) || tracing_enabled_for(tracing_level)) {
            return;
        }

        let (summary, sql) = self.build_log_payload();
        emit_statement_event(tracing_level, &summary, &sql, &self.flags);
    }

    fn build_log_payload(&self) -> (String, String) {
        let Some(sql) = self.sql else {
            return (self.kind.to_string(), String::new());
        };

        let mut summary = format!("{}: {}", self.kind, parse_query_summary(sql));
        if parse_query_summary(sql) != sql {
            summary.push_str(" …");
            let formatted = sqlformat::format(
                sql,
                &sqlformat::QueryParams::None,
                &sqlformat::FormatOptions::default(),
            );
            (summary, format!("\n\n{formatted}\n"))
        } else {
            (summary, String::new())
        }
    }
}

/// Produce a short summary of a SQL statement for logging.
fn parse_query_summary(sql: &str) -> String {
    sql.split_whitespace()
        .take(4)
        .collect::<Vec<&str>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(sql: Option<&str>) -> (String, String) {
        let settings = LogSettings::default();
        StatementLogger::new("prepare", sql, StatementFlags::default(), &settings)
            .build_log_payload()
    }

    #[test]
    fn short_sql_is_logged_inline() {
        let (summary, sql) = payload(Some("SELECT 1"));
        assert_eq!(summary, "prepare: SELECT 1");
        assert!(sql.is_empty());
    }

    #[test]
    fn long_sql_is_summarised_and_formatted() {
        let (summary, sql) = payload(Some("SELECT name, age FROM person WHERE age > 21"));
        assert_eq!(summary, "prepare: SELECT name, age FROM …");
        assert!(sql.contains("person"));
        assert!(sql.starts_with("\n\n"));
    }

    #[test]
    fn statements_without_sql_log_their_kind() {
        assert_eq!(payload(None), ("prepare".to_string(), String::new()));
    }

    #[test]
    fn off_disables_logging() {
        let mut settings = LogSettings::default();
        assert!(settings.is_enabled());
        settings.log_statements(LevelFilter::Off);
        assert!(!settings.is_enabled());
        assert_eq!(private_level_filter_to_levels(LevelFilter::Off), None);
    }
}
