mod common;
mod ddl;
mod error;

pub use self::error::{Error, Result};

use {
    crate::{
        ast::TableDefinition,
        common::Position,
        lexer::{Lexer, TokenKind},
    },
    std::iter::Peekable,
    tracing::debug,
};

/// Parses every `CREATE TABLE` statement in `sql`.
///
/// `name` labels the input in error messages only. The call is all-or-nothing:
/// an error in any statement discards the definitions parsed before it.
pub fn parse_table(name: &str, sql: &str) -> Result<Vec<TableDefinition>> {
    Parser::new(name, sql).collect()
}

/// Yields one [`TableDefinition`] per statement, pulling tokens from the lexer
/// as it goes. Stops after the first error.
pub struct Parser<'a> {
    name: &'a str,
    src: &'a str,
    tokens: Peekable<Lexer<'a>>,
    failed: bool,
}

impl<'a> Parser<'a> {
    pub fn new(name: &'a str, src: &'a str) -> Self {
        Self {
            name,
            src,
            tokens: Lexer::new(src).peekable(),
            failed: false,
        }
    }

    pub fn parse(sql: &'a str) -> Result<Vec<TableDefinition>> {
        Self::new("", sql).collect()
    }

    fn eof_position(&self) -> Position {
        Position {
            offset: self.src.len(),
            line: 1 + self.src.matches('\n').count(),
        }
    }

    fn parse_statement(&mut self) -> Option<Result<TableDefinition>> {
        self.skip_semicolons();

        if self.peek_kind() == TokenKind::Eof {
            return None;
        }

        Some(self.parse_create_table())
    }
}

impl<'a> Iterator for Parser<'a> {
    type Item = Result<TableDefinition>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let result = self.parse_statement()?;
        match &result {
            Ok(def) => debug!(
                name = self.name,
                table = %def.qualified_name(),
                columns = def.columns.len(),
                "parsed table definition"
            ),
            Err(err) => {
                self.failed = true;
                debug!(name = self.name, %err, "failed to parse table definition");
            }
        }

        Some(result)
    }
}
