mod display;

use crate::common::pub_fields_struct;

pub_fields_struct! {
    /// One parsed `CREATE TABLE` statement.
    #[derive(Clone, Debug, Default, PartialEq, Eq)]
    struct TableDefinition {
        /// `None` when the table name is unqualified.
        schema: Option<String>,
        table: String,
        /// In declaration order.
        columns: Vec<ColumnDefinition>,
        constraint: ConstraintSet,
    }

    #[derive(Clone, Debug, PartialEq, Eq)]
    struct ColumnDefinition {
        name: String,
        /// The declared type as written, e.g. `admin.user_type` or `VARCHAR(255)`.
        type_name: String,
        /// `false` only when the column carries an inline `NOT NULL`.
        nullable: bool,
    }

    /// Primary key and unique groups, gathered from inline column constraints and
    /// table-level clauses alike, in the order they appear.
    #[derive(Clone, Debug, Default, PartialEq, Eq)]
    struct ConstraintSet {
        primary_key: Vec<String>,
        uniques: Vec<Vec<String>>,
    }
}

impl TableDefinition {
    /// `schema.table`, or just `table` when unqualified.
    pub fn qualified_name(&self) -> String {
        match &self.schema {
            Some(schema) => format!("{}.{}", schema, self.table),
            None => self.table.clone(),
        }
    }

    /// The first column declared as `name`, matched exactly.
    pub fn column(&self, name: &str) -> Option<&ColumnDefinition> {
        self.columns.iter().find(|column| column.name == name)
    }
}

impl ColumnDefinition {
    pub(crate) fn new(name: String, type_name: String) -> Self {
        Self {
            name,
            type_name,
            nullable: true,
        }
    }
}

impl ConstraintSet {
    pub fn is_empty(&self) -> bool {
        self.primary_key.is_empty() && self.uniques.is_empty()
    }
}
