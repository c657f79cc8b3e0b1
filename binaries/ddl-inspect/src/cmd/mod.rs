mod error;

pub use self::error::{Error, Result};

use {
    snafu::ResultExt,
    std::{
        fs,
        io::{self, Read},
        path::Path,
    },
    table_parser::TableDefinition,
    tracing::info,
};

/// Label used in diagnostics when the DDL comes from standard input.
pub const STDIN_NAME: &str = "<stdin>";

/// Reads DDL from `path`, or from standard input when `path` is `None` or `-`.
/// Returns the label used for diagnostics along with the text.
pub fn read_source(path: Option<&Path>) -> Result<(String, String)> {
    match path {
        Some(path) if path != Path::new("-") => {
            let sql = fs::read_to_string(path).context(error::ReadFileSnafu { path })?;
            Ok((path.display().to_string(), sql))
        }
        _ => {
            let mut sql = String::new();
            io::stdin()
                .read_to_string(&mut sql)
                .context(error::ReadStdinSnafu)?;
            Ok((STDIN_NAME.to_string(), sql))
        }
    }
}

/// Parses `sql` and renders every table definition, separated by blank lines.
pub fn inspect(name: &str, sql: &str) -> Result<String> {
    let defs: Vec<TableDefinition> =
        table_parser::parse_table(name, sql).context(error::ParseSnafu)?;

    info!(name, tables = defs.len(), "inspected DDL");

    Ok(defs
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n\n"))
}

pub fn inspect_path(path: Option<&Path>) -> Result<String> {
    let (name, sql) = read_source(path)?;
    inspect(&name, &sql)
}
