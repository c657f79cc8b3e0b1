use {
    crate::common::Location,
    snafu::{prelude::*, Backtrace},
};

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("{}: syntax error: expected {}, found {}", location, expected, found))]
    Syntax {
        #[snafu(implicit(false))]
        location: Location,
        expected: String,
        found: String,
        backtrace: Backtrace,
    },

    #[snafu(display("{}: unexpected end of input, expected {}", location, expected))]
    UnexpectedEnd {
        #[snafu(implicit(false))]
        location: Location,
        expected: String,
        backtrace: Backtrace,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn location(&self) -> &Location {
        match self {
            Self::Syntax { location, .. } | Self::UnexpectedEnd { location, .. } => location,
        }
    }

    pub fn line(&self) -> usize {
        self.location().line
    }

    pub fn column(&self) -> usize {
        self.location().column
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location() -> Location {
        Location {
            name: "users.sql".to_string(),
            line: 2,
            column: 5,
        }
    }

    #[test]
    fn build_syntax_error() {
        let err = SyntaxSnafu {
            location: location(),
            expected: "'('",
            found: "keyword KEY",
        }
        .build();

        assert_eq!(err.location(), &location());
        assert_eq!((err.line(), err.column()), (2, 5));
        assert_eq!(
            err.to_string(),
            "users.sql:2:5: syntax error: expected '(', found keyword KEY"
        );
    }

    #[test]
    fn build_unexpected_end_error() {
        let err = UnexpectedEndSnafu {
            location: location(),
            expected: "type name",
        }
        .build();

        assert!(matches!(err, Error::UnexpectedEnd { ref expected, .. } if expected == "type name"));
        assert_eq!(
            err.to_string(),
            "users.sql:2:5: unexpected end of input, expected type name"
        );
    }
}
