use {
    super::{common::match_token, error::Result, Parser},
    crate::{
        ast::{ColumnDefinition, ConstraintSet, TableDefinition},
        lexer::{Keyword, TokenKind},
    },
};

impl<'a> Parser<'a> {
    /// `CREATE TABLE [IF NOT EXISTS] table_ref '(' body ')' [';']`
    pub(super) fn parse_create_table(&mut self) -> Result<TableDefinition> {
        self.must_match_keyword(Keyword::CREATE)?;
        self.must_match_keyword(Keyword::TABLE)?;

        if self.try_match_keyword(Keyword::IF).is_some() {
            self.must_match_keyword(Keyword::NOT)?;
            self.must_match_keyword(Keyword::EXISTS)?;
        }

        let (schema, table) = self.parse_table_ref()?;
        let (columns, constraint) = self.parse_table_body()?;

        // the last statement may run into the end of input
        if self.peek_kind() != TokenKind::Eof {
            self.must_match(TokenKind::Semicolon, "';'")?;
        }

        Ok(TableDefinition {
            schema,
            table,
            columns,
            constraint,
        })
    }

    /// `[identifier '.'] identifier`
    fn parse_table_ref(&mut self) -> Result<(Option<String>, String)> {
        let name = self.parse_identifier("table name")?;

        if self.try_match(TokenKind::Period).is_none() {
            return Ok((None, name));
        }

        let table = self.parse_identifier("table name")?;
        Ok((Some(name), table))
    }

    /// Column definitions and table-level constraints, comma separated, in any order.
    /// At least one column definition is required.
    fn parse_table_body(&mut self) -> Result<(Vec<ColumnDefinition>, ConstraintSet)> {
        self.must_match(TokenKind::LeftParen, "'('")?;

        let mut columns = vec![];
        let mut constraint = ConstraintSet::default();

        loop {
            match_token!(self, "column definition or table constraint", {
                token if token.kind == TokenKind::Keyword(Keyword::PRIMARY) => {
                    self.must_match_keyword(Keyword::KEY)?;
                    let names = self.parse_identifiers_within_parentheses()?;

                    constraint.primary_key.extend(names);
                },
                token if token.kind == TokenKind::Keyword(Keyword::UNIQUE) => {
                    let names = self.parse_identifiers_within_parentheses()?;

                    constraint.uniques.push(names);
                },
                token if token.is_identifier() => {
                    let column = self.parse_column_definition(token.value, &mut constraint)?;

                    columns.push(column);
                },
            });

            match_token!(self, "',' or ')'", {
                token if token.kind == TokenKind::Comma => {},
                token if token.kind == TokenKind::RightParen => {
                    if columns.is_empty() {
                        return Err(self.unexpected(token, "at least one column definition"));
                    }
                    break;
                },
            })
        }

        Ok((columns, constraint))
    }

    /// Everything after the column name: `type_name [column_constraint]*`.
    ///
    /// Inline `PRIMARY KEY` and `UNIQUE` land in `constraint` next to the
    /// table-level clauses, so both syntaxes share one order.
    fn parse_column_definition(
        &mut self,
        name: String,
        constraint: &mut ConstraintSet,
    ) -> Result<ColumnDefinition> {
        let type_name = self.parse_type_name()?;
        let mut column = ColumnDefinition::new(name, type_name);

        loop {
            match self.peek_kind() {
                TokenKind::Keyword(Keyword::NOT) => {
                    self.next_token();
                    self.must_match_keyword(Keyword::NULL)?;
                    column.nullable = false;
                }
                TokenKind::Keyword(Keyword::NULL) => {
                    self.next_token();
                    column.nullable = true;
                }
                TokenKind::Keyword(Keyword::DEFAULT) => {
                    self.next_token();
                    self.skip_default_expression()?;
                }
                TokenKind::Keyword(Keyword::PRIMARY) => {
                    self.next_token();
                    self.must_match_keyword(Keyword::KEY)?;
                    constraint.primary_key.push(column.name.clone());
                }
                TokenKind::Keyword(Keyword::UNIQUE) => {
                    self.next_token();
                    constraint.uniques.push(vec![column.name.clone()]);
                }
                _ => break,
            }
        }

        Ok(column)
    }

    /// `identifier ['.' identifier] ['(' number (',' number)* ')']`
    fn parse_type_name(&mut self) -> Result<String> {
        let mut type_name = self.parse_identifier("type name")?;

        if self.try_match(TokenKind::Period).is_some() {
            type_name.push('.');
            type_name.push_str(&self.parse_identifier("type name")?);
        }

        if self.try_match(TokenKind::LeftParen).is_some() {
            let mut modifiers = vec![];
            loop {
                modifiers.push(self.must_match(TokenKind::Number, "number")?.value);

                match_token!(self, "',' or ')'", {
                    token if token.kind == TokenKind::Comma => {},
                    token if token.kind == TokenKind::RightParen => break,
                })
            }

            type_name = format!("{}({})", type_name, modifiers.join(","));
        }

        Ok(type_name)
    }

    /// Skips a `DEFAULT` expression without interpreting it.
    ///
    /// The expression ends before a `,` or an unmatched `)` at nesting depth zero,
    /// before `;` or the end of input, or before a column constraint keyword once
    /// at least one token has been taken.
    fn skip_default_expression(&mut self) -> Result<()> {
        let mut depth = 0usize;
        let mut skipped = 0usize;

        loop {
            match self.peek_kind() {
                TokenKind::Eof | TokenKind::Semicolon => break,
                TokenKind::Comma | TokenKind::RightParen if depth == 0 => break,
                TokenKind::Keyword(
                    Keyword::NOT
                    | Keyword::NULL
                    | Keyword::DEFAULT
                    | Keyword::PRIMARY
                    | Keyword::UNIQUE,
                ) if depth == 0 && skipped > 0 => break,
                TokenKind::LeftParen => depth += 1,
                TokenKind::RightParen => depth -= 1,
                _ => {}
            }

            self.next_token();
            skipped += 1;
        }

        if skipped == 0 {
            let token = self.next_token();
            return Err(self.unexpected(token, "default expression"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::{parser::Error, Parser},
    };

    fn parse_one(sql: &str) -> TableDefinition {
        let mut output = Parser::parse(sql).unwrap();

        assert_eq!(output.len(), 1);
        output.remove(0)
    }

    fn parse_err(sql: &str) -> Error {
        Parser::parse(sql).unwrap_err()
    }

    fn strings(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn inline_primary_key() {
        let def = parse_one(r#"CREATE TABLE t ("id" SERIAL PRIMARY KEY);"#);

        assert_eq!(def.constraint.primary_key, strings(&["id"]));
        assert!(def.constraint.uniques.is_empty());
    }

    #[test]
    fn inline_and_table_level_uniques_keep_declaration_order() {
        let def = parse_one(
            "CREATE TABLE t (
                col_with_inline_unique TEXT UNIQUE,
                a INT,
                b INT,
                UNIQUE (a, b)
            );",
        );

        assert_eq!(
            def.constraint.uniques,
            vec![strings(&["col_with_inline_unique"]), strings(&["a", "b"])]
        );
        assert!(def.constraint.primary_key.is_empty());
    }

    #[test]
    fn table_level_primary_key() {
        let def = parse_one("CREATE TABLE t (a INT, b INT, PRIMARY KEY (a, b))");

        assert_eq!(def.constraint.primary_key, strings(&["a", "b"]));
    }

    #[test]
    fn constraints_may_come_before_columns() {
        let def = parse_one("CREATE TABLE t (UNIQUE (b), a INT UNIQUE, b INT)");

        assert_eq!(def.constraint.uniques, vec![strings(&["b"]), strings(&["a"])]);
        assert_eq!(def.columns.len(), 2);
    }

    #[test]
    fn nullability() {
        let def = parse_one("CREATE TABLE t (a INT, b INT NOT NULL, c INT NULL, d INT PRIMARY KEY)");
        let nullable = def
            .columns
            .iter()
            .map(|column| column.nullable)
            .collect::<Vec<_>>();

        assert_eq!(nullable, vec![true, false, true, true]);
    }

    #[test]
    fn default_with_nested_parentheses() {
        let def = parse_one(
            r#"CREATE TABLE t (
                "uuid" UUID UNIQUE NOT NULL DEFAULT public.uuid_generate_v4(),
                "name" TEXT
            )"#,
        );

        assert_eq!(def.columns.len(), 2);
        assert_eq!(def.columns[0].name, "uuid");
        assert_eq!(def.columns[0].type_name, "UUID");
        assert!(!def.columns[0].nullable);
        assert_eq!(def.columns[1].name, "name");
        assert_eq!(def.columns[1].type_name, "TEXT");
        assert_eq!(def.constraint.uniques, vec![strings(&["uuid"])]);
    }

    #[test]
    fn default_followed_by_constraints() {
        let def = parse_one(
            "CREATE TABLE t (
                a INT DEFAULT 0 NOT NULL,
                b TEXT DEFAULT coalesce(lower('X'), (('y'))) UNIQUE,
                c INT DEFAULT -1,
                d TEXT DEFAULT NULL
            );",
        );

        assert!(!def.columns[0].nullable);
        assert_eq!(def.constraint.uniques, vec![strings(&["b"])]);
        assert_eq!(def.columns[2].type_name, "INT");
        assert!(def.columns[3].nullable);
        assert_eq!(def.columns.len(), 4);
    }

    #[test]
    fn default_at_end_of_body() {
        let def = parse_one("CREATE TABLE t (a TEXT DEFAULT 'x''y')");

        assert_eq!(def.columns[0].type_name, "TEXT");
    }

    #[test]
    fn empty_default_is_rejected() {
        let err = parse_err("CREATE TABLE t (a INT DEFAULT, b INT)");

        assert!(matches!(err, Error::Syntax { ref found, .. } if found == "','"));
        assert_eq!((err.line(), err.column()), (1, 30));
    }

    #[test]
    fn type_names() {
        let def = parse_one(
            r#"CREATE TABLE t (
                a admin.user_type,
                b VARCHAR(255),
                c NUMERIC(10, 2) NOT NULL,
                d "My Type"
            )"#,
        );
        let types = def
            .columns
            .iter()
            .map(|column| column.type_name.as_str())
            .collect::<Vec<_>>();

        assert_eq!(
            types,
            vec!["admin.user_type", "VARCHAR(255)", "NUMERIC(10,2)", "My Type"]
        );
    }

    #[test]
    fn qualified_table_names() {
        let def = parse_one(r#"CREATE TABLE "my ""schema"""."users" (a INT)"#);

        assert_eq!(def.schema.as_deref(), Some("my \"schema\""));
        assert_eq!(def.table, "users");
    }

    #[test]
    fn if_not_exists_is_all_or_nothing() {
        let err = parse_err("CREATE TABLE IF EXISTS t (a INT)");

        assert!(matches!(err, Error::Syntax { ref expected, ref found, .. }
            if expected == "NOT" && found == "keyword EXISTS"));
    }

    #[test]
    fn empty_column_list() {
        let err = parse_err("CREATE TABLE t ()");
        assert!(matches!(err, Error::Syntax { .. }));
        assert_eq!(err.column(), 17);

        let err = parse_err("CREATE TABLE t (UNIQUE (a))");
        assert!(matches!(err, Error::Syntax { ref expected, .. }
            if expected == "at least one column definition"));
        assert_eq!(err.column(), 27);
    }

    #[test]
    fn malformed_qualified_name() {
        let err = parse_err("CREATE TABLE admin. (a INT)");

        assert!(matches!(err, Error::Syntax { ref expected, ref found, .. }
            if expected == "table name" && found == "'('"));
        assert_eq!(err.column(), 21);

        assert!(matches!(
            parse_err("CREATE TABLE a.b.c (x INT)"),
            Error::Syntax { .. }
        ));
    }

    #[test]
    fn empty_quoted_identifier() {
        let err = parse_err(r#"CREATE TABLE t ("" INT)"#);

        assert!(matches!(err, Error::Syntax { ref found, .. }
            if found == r#"quoted identifier """#));
    }

    #[test]
    fn missing_type() {
        let err = parse_err("CREATE TABLE t (a, b INT)");

        assert!(matches!(err, Error::Syntax { ref expected, .. } if expected == "type name"));
    }

    #[test]
    fn unknown_character_is_a_syntax_error() {
        let err = parse_err("CREATE TABLE t (a INT $)");

        assert!(matches!(err, Error::Syntax { ref found, .. }
            if found == "unknown character '$'"));
        assert_eq!(err.column(), 23);
    }

    #[test]
    fn keyword_as_bare_column_name() {
        let err = parse_err("CREATE TABLE t (key INT)");
        assert!(matches!(err, Error::Syntax { ref found, .. } if found == "keyword KEY"));

        let def = parse_one(r#"CREATE TABLE t ("key" INT)"#);
        assert_eq!(def.columns[0].name, "key");
    }

    #[test]
    fn missing_semicolon_between_statements() {
        let err = parse_err("CREATE TABLE a (x INT) CREATE TABLE b (y INT)");

        assert!(matches!(err, Error::Syntax { ref expected, ref found, .. }
            if expected == "';'" && found == "keyword CREATE"));
    }

    #[test]
    fn unterminated_quote() {
        let err = parse_err(r#"CREATE TABLE t ("id"#);
        assert!(matches!(err, Error::UnexpectedEnd { ref expected, .. } if expected == "type name"));

        let err = parse_err("CREATE TABLE t (a TEXT DEFAULT 'abc);");
        assert!(matches!(err, Error::UnexpectedEnd { .. }));
    }
}
