use {
    super::{
        error::{Error, SyntaxSnafu, UnexpectedEndSnafu},
        Parser,
    },
    crate::lexer::{Keyword, Token, TokenKind},
    tracing::trace,
};

/// Matches the next token against the given arms, returning an error naming
/// `$expected` from the enclosing function when no arm applies.
macro_rules! match_token {
    ( $parser:expr, $expected:expr, { $( $t:pat $(if $cond:expr)? => $e:expr, )* } ) => {
        match $parser.next_token() {
            $( $t $(if $cond)? => $e, )*
            token => return Err($parser.unexpected(token, $expected)),
        }
    };
}

pub(super) use match_token;

impl<'a> Parser<'a> {
    /// Pulls the next token. Past the end of input this keeps returning EOF.
    pub(super) fn next_token(&mut self) -> Token {
        let token = self
            .tokens
            .next()
            .unwrap_or_else(|| Token::new(TokenKind::Eof, "", self.eof_position()));

        trace!(kind = ?token.kind, line = token.pos.line, offset = token.pos.offset, "token");
        token
    }

    pub(super) fn peek_kind(&mut self) -> TokenKind {
        self.tokens.peek().map_or(TokenKind::Eof, |token| token.kind)
    }

    pub(super) fn unexpected(&self, token: Token, expected: &str) -> Error {
        let location = token.pos.locate(self.name, self.src);

        match token.kind {
            TokenKind::Eof => UnexpectedEndSnafu { location, expected }.build(),
            _ => SyntaxSnafu {
                location,
                expected,
                found: token.to_string(),
            }
            .build(),
        }
    }

    pub(super) fn skip_semicolons(&mut self) {
        while self.try_match(TokenKind::Semicolon).is_some() {}
    }

    pub(super) fn try_match(&mut self, kind: TokenKind) -> Option<Token> {
        let token = self.tokens.next_if(|token| token.kind == kind)?;
        trace!(kind = ?token.kind, line = token.pos.line, offset = token.pos.offset, "token");
        Some(token)
    }

    pub(super) fn try_match_keyword(&mut self, keyword: Keyword) -> Option<Token> {
        self.try_match(TokenKind::Keyword(keyword))
    }

    pub(super) fn must_match(&mut self, kind: TokenKind, expected: &str) -> Result<Token, Error> {
        match_token!(self, expected, {
            token if token.kind == kind => Ok(token),
        })
    }

    pub(super) fn must_match_keyword(&mut self, keyword: Keyword) -> Result<Token, Error> {
        self.must_match(TokenKind::Keyword(keyword), keyword.as_str())
    }

    /// A bare word or a non-empty quoted symbol.
    pub(super) fn parse_identifier(&mut self, expected: &str) -> Result<String, Error> {
        match_token!(self, expected, {
            token if token.is_identifier() => Ok(token.value),
        })
    }

    /// `'(' identifier (',' identifier)* ')'`
    pub(super) fn parse_identifiers_within_parentheses(&mut self) -> Result<Vec<String>, Error> {
        self.must_match(TokenKind::LeftParen, "'('")?;

        let mut identifiers = vec![];
        loop {
            identifiers.push(self.parse_identifier("column name")?);

            match_token!(self, "',' or ')'", {
                token if token.kind == TokenKind::Comma => {},
                token if token.kind == TokenKind::RightParen => break,
            })
        }

        Ok(identifiers)
    }
}
