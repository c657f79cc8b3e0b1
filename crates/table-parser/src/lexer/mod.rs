mod token;

pub(crate) use token::{Keyword, Token, TokenKind};

use {
    crate::common::Position,
    std::{
        iter::Peekable,
        str::{CharIndices, FromStr},
    },
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    Text,
    Word,
    Number,
    Symbol,
    Literal,
    Done,
}

/// Turns DDL text into tokens, one per call to `next`.
///
/// The lexer never fails: characters that cannot start a token come out as
/// [`TokenKind::Unknown`], and a quoted region left open at the end of the input
/// is closed there. The last token is always [`TokenKind::Eof`].
pub(crate) struct Lexer<'a> {
    src: &'a str,
    iter: Peekable<CharIndices<'a>>,
    state: State,
    line: usize,
    start: Position,
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let token = match self.state {
                State::Done => return None,
                State::Text => self.lex_text(),
                State::Word => Some(self.lex_word()),
                State::Number => Some(self.lex_number()),
                State::Symbol => Some(self.lex_quoted('"', TokenKind::QuotedSymbol)),
                State::Literal => Some(self.lex_quoted('\'', TokenKind::QuotedLiteral)),
            };

            if token.is_some() {
                return token;
            }
        }
    }
}

impl<'a> Lexer<'a> {
    pub(crate) fn new(src: &'a str) -> Self {
        Self {
            src,
            iter: src.char_indices().peekable(),
            state: State::Text,
            line: 1,
            start: Position { offset: 0, line: 1 },
        }
    }

    fn bump(&mut self) -> Option<char> {
        let (_, c) = self.iter.next()?;
        if c == '\n' {
            self.line += 1;
        }
        Some(c)
    }

    fn bump_while(&mut self, func: impl Fn(char) -> bool) {
        while self.iter.next_if(|&(_, c)| func(c)).is_some() {}
    }

    fn offset(&mut self) -> usize {
        self.iter.peek().map_or(self.src.len(), |&(i, _)| i)
    }

    fn mark_start(&mut self) {
        self.start = Position {
            offset: self.offset(),
            line: self.line,
        };
    }

    fn text_from_start(&mut self) -> &'a str {
        let end = self.offset();
        &self.src[self.start.offset..end]
    }

    /// Skips blanks and either emits a single-character token or picks the state
    /// that scans the next one.
    fn lex_text(&mut self) -> Option<Token> {
        while let Some((_, c)) = self.iter.next_if(|&(_, c)| is_blank(c)) {
            if c == '\n' {
                self.line += 1;
            }
        }
        self.mark_start();

        let Some(&(_, c)) = self.iter.peek() else {
            self.state = State::Done;
            return Some(Token::new(TokenKind::Eof, "", self.start));
        };

        if let Some(kind) = TokenKind::punctuation(c) {
            self.bump();
            return Some(Token::new(kind, c, self.start));
        }

        match c {
            '\'' => {
                self.bump();
                self.state = State::Literal;
                None
            }
            '"' => {
                self.bump();
                self.state = State::Symbol;
                None
            }
            c if is_letter(c) => {
                self.state = State::Word;
                None
            }
            c if c.is_ascii_digit() => {
                self.state = State::Number;
                None
            }
            c => {
                self.bump();
                Some(Token::new(TokenKind::Unknown, c, self.start))
            }
        }
    }

    fn lex_word(&mut self) -> Token {
        self.state = State::Text;
        self.bump_while(|c| is_letter(c) || c.is_ascii_digit());

        let word = self.text_from_start();
        match Keyword::from_str(word) {
            Ok(keyword) => Token::new(TokenKind::Keyword(keyword), keyword.as_str(), self.start),
            Err(_) => Token::new(TokenKind::Word, word, self.start),
        }
    }

    fn lex_number(&mut self) -> Token {
        self.state = State::Text;
        self.bump_while(|c| c.is_ascii_digit());
        if self.iter.next_if(|&(_, c)| c == '.').is_some() {
            self.bump_while(|c| c.is_ascii_digit());
        }

        Token::new(TokenKind::Number, self.text_from_start(), self.start)
    }

    /// Scans up to the closing `quote`, treating a doubled quote as one escaped quote.
    /// The opening quote has already been consumed.
    fn lex_quoted(&mut self, quote: char, kind: TokenKind) -> Token {
        self.state = State::Text;

        let mut value = String::new();
        while let Some(c) = self.bump() {
            if c != quote {
                value.push(c);
                continue;
            }

            if self.iter.next_if(|&(_, c)| c == quote).is_none() {
                break;
            }
            value.push(quote);
        }

        Token::new(kind, value, self.start)
    }
}

fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}
