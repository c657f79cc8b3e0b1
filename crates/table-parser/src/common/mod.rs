use std::fmt::{self, Display};

/// Where a token starts in the source text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Position {
    /// Byte offset from the beginning of the input.
    pub(crate) offset: usize,
    /// 1-based line number.
    pub(crate) line: usize,
}

impl Position {
    /// 1-based column in bytes, counted from the last line break before `offset`.
    pub(crate) fn column(&self, src: &str) -> usize {
        let offset = self.offset.min(src.len());
        let line_start = src.as_bytes()[..offset]
            .iter()
            .rposition(|&b| b == b'\n')
            .map_or(0, |i| i + 1);

        offset - line_start + 1
    }

    pub(crate) fn locate(&self, name: &str, src: &str) -> Location {
        Location {
            name: name.to_string(),
            line: self.line,
            column: self.column(src),
        }
    }
}

/// A human-facing source location attached to every parse error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Location {
    pub name: String,
    pub line: usize,
    pub column: usize,
}

impl Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.name.is_empty() {
            write!(f, "{}:{}", self.line, self.column)
        } else {
            write!(f, "{}:{}:{}", self.name, self.line, self.column)
        }
    }
}

macro_rules! pub_fields_struct {
    {
        $(
            $(#[$($attr:tt)*])*
            struct $name:ident {
                $($(#[$($field_attr:tt)*])* $field:ident: $t:ty,)*
            }
        )*
    } => {
        $(
            $(#[$($attr)*])*
            pub struct $name {
                $($(#[$($field_attr)*])* pub $field: $t),*
            }
        )*
    }
}

pub(crate) use pub_fields_struct;
