use {
    crate::common::Position,
    std::fmt::{self, Display},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum TokenKind {
    Eof,

    Keyword(Keyword),

    /// A bare identifier.
    Word,
    /// A run of digits, optionally with a fractional part.
    Number,
    /// A double-quoted identifier, `"a""b"`.
    QuotedSymbol,
    /// A single-quoted literal, `'a''b'`.
    QuotedLiteral,

    Period,
    Comma,
    LeftParen,
    RightParen,
    Semicolon,

    /// Any character that cannot start a token. The grammar decides whether it is acceptable.
    Unknown,
}

impl TokenKind {
    pub(crate) fn punctuation(c: char) -> Option<Self> {
        match c {
            '.' => Some(Self::Period),
            ',' => Some(Self::Comma),
            '(' => Some(Self::LeftParen),
            ')' => Some(Self::RightParen),
            ';' => Some(Self::Semicolon),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Token {
    pub(crate) kind: TokenKind,
    /// Source text for words and punctuation, the de-escaped content for quoted forms,
    /// and the canonical spelling for keywords.
    pub(crate) value: String,
    pub(crate) pos: Position,
}

impl Token {
    pub(crate) fn new(kind: TokenKind, value: impl Into<String>, pos: Position) -> Self {
        Self {
            kind,
            value: value.into(),
            pos,
        }
    }

    pub(crate) fn is_identifier(&self) -> bool {
        matches!(self.kind, TokenKind::Word | TokenKind::QuotedSymbol) && !self.value.is_empty()
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.kind {
            TokenKind::Eof => write!(f, "end of input"),
            TokenKind::Keyword(keyword) => write!(f, "keyword {}", keyword.as_str()),
            TokenKind::Word => write!(f, "identifier {:?}", self.value),
            TokenKind::Number => write!(f, "number {}", self.value),
            TokenKind::QuotedSymbol => write!(f, "quoted identifier {:?}", self.value),
            TokenKind::QuotedLiteral => write!(f, "string '{}'", self.value),
            TokenKind::Unknown => write!(f, "unknown character '{}'", self.value),
            _ => write!(f, "'{}'", self.value),
        }
    }
}

macro_rules! keyword {
    ( $( $var:ident, )* ) => {
        #[derive(Clone, Copy, Debug, PartialEq, Eq)]
        #[allow(non_camel_case_types, clippy::upper_case_acronyms)]
        pub(crate) enum Keyword {
            $($var,)*
        }

        impl Keyword {
            pub(crate) fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$var => stringify!($var),)*
                }
            }
        }

        #[derive(Debug)]
        pub(crate) struct NotKeywordError;

        impl std::fmt::Display for NotKeywordError {
            fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                write!(f, "not a keyword")
            }
        }

        impl std::error::Error for NotKeywordError {}

        impl std::str::FromStr for Keyword {
            type Err = NotKeywordError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.to_ascii_uppercase().as_str() {
                    $(stringify!($var) => Ok(Self::$var),)*
                    _ => Err(NotKeywordError),
                }
            }
        }
    };
}

keyword! {
    CREATE,
    DEFAULT,
    EXISTS,
    IF,
    KEY,
    NOT,
    NULL,
    PRIMARY,
    TABLE,
    UNIQUE,
}
