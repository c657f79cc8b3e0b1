use {
    super::{ColumnDefinition, ConstraintSet, TableDefinition},
    std::fmt::{self, Display},
};

impl Display for TableDefinition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "TABLE {}", self.qualified_name())?;

        for column in &self.columns {
            write!(f, "\n  {}", column)?;
        }

        if !self.constraint.is_empty() {
            write!(f, "\n{}", self.constraint)?;
        }

        Ok(())
    }
}

impl Display for ColumnDefinition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "COLUMN {} {}", self.name, self.type_name)?;
        if !self.nullable {
            write!(f, " NOT NULL")?;
        }
        Ok(())
    }
}

/// Renders one indented line per clause. Writes nothing when empty.
impl Display for ConstraintSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut lines = Vec::new();

        if !self.primary_key.is_empty() {
            lines.push(format!("  PRIMARY KEY ({})", self.primary_key.join(", ")));
        }
        for group in &self.uniques {
            lines.push(format!("  UNIQUE ({})", group.join(", ")));
        }

        write!(f, "{}", lines.join("\n"))
    }
}
