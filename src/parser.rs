use crate::error::{ParseErrors, SyntaxError};
use crate::lexer::{Lexer, Position, Token, TokenKind};
use crate::sexp::{SExp, SExpKind, MAX_DEPTH};
use miette::{NamedSource, SourceSpan};

/// A recursive descent parser producing untyped S-expression trees.
///
///    expr ::= atom | "(" { expr } ")"
///    atom ::= symbol | keyword | string | number | nil
///
/// Problems are collected rather than returned on first sight, so one call
/// can report several diagnostics. Lists nested deeper than
/// [`MAX_DEPTH`] are skipped and reported as [`SyntaxError::TooDeep`].
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    name: String,
    source: NamedSource<String>,
    errors: Vec<SyntaxError>,
    depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(source_text: &'a str) -> Self {
        Self::new_with_name(source_text, "source.sexp")
    }

    pub fn new_with_name(source_text: &'a str, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            lexer: Lexer::new(source_text),
            source: NamedSource::new(name.clone(), source_text.to_string()),
            name,
            errors: Vec::new(),
            depth: 0,
        }
    }

    /// Parses one expression. Anything after it is left unread.
    pub fn parse(&mut self) -> Result<SExp, ParseErrors> {
        let expr = self.parse_expr();
        self.finish(expr)
    }

    /// Parses expressions until the end of input.
    pub fn parse_all(&mut self) -> Result<Vec<SExp>, ParseErrors> {
        let mut exprs = Vec::new();
        while !self.lexer.peek_token().is_eof() {
            match self.parse_expr() {
                Some(expr) => exprs.push(expr),
                None => break,
            }
        }
        self.finish(Some(exprs))
    }

    /// Fails if anything other than whitespace and comments remains.
    pub fn expect_end(&mut self) -> Result<(), ParseErrors> {
        let token = self.lexer.peek_token().clone();
        if !token.is_eof() {
            self.errors.push(SyntaxError::TrailingInput {
                position: token.position,
                span: span_of(&token),
            });
        }
        self.finish(Some(()))
    }

    fn parse_expr(&mut self) -> Option<SExp> {
        loop {
            let token = self.lexer.next_token();
            let kind = match token.kind {
                TokenKind::LParen => return self.parse_list(token),
                TokenKind::Symbol => SExpKind::Symbol(token.literal),
                TokenKind::Keyword => SExpKind::Keyword(token.literal),
                TokenKind::String => SExpKind::String(token.literal),
                TokenKind::Number => SExpKind::Number(token.literal),
                TokenKind::Nil => SExpKind::Nil,
                TokenKind::RParen => {
                    self.errors.push(SyntaxError::UnexpectedToken {
                        found: token.literal.clone(),
                        position: token.position,
                        span: span_of(&token),
                    });
                    continue;
                }
                TokenKind::Illegal => {
                    self.record_illegal(&token);
                    continue;
                }
                TokenKind::Eof => {
                    self.errors.push(SyntaxError::UnexpectedEof {
                        position: token.position,
                        span: span_of(&token),
                    });
                    return None;
                }
            };
            return Some(SExp::new(kind, token.position));
        }
    }

    fn parse_list(&mut self, open: Token) -> Option<SExp> {
        if self.depth >= MAX_DEPTH {
            self.errors.push(SyntaxError::TooDeep {
                limit: MAX_DEPTH,
                position: open.position,
                span: span_of(&open),
            });
            self.skip_list();
            return None;
        }
        self.depth += 1;
        let list = self.list_items(open);
        self.depth -= 1;
        list
    }

    fn list_items(&mut self, open: Token) -> Option<SExp> {
        let mut items = Vec::new();
        loop {
            match self.lexer.peek_token().kind {
                TokenKind::RParen => {
                    self.lexer.next_token();
                    return Some(SExp::new(SExpKind::List(items), open.position));
                }
                TokenKind::Eof => {
                    self.errors.push(SyntaxError::UnterminatedList {
                        position: open.position,
                        span: span_of(&open),
                    });
                    return None;
                }
                TokenKind::Illegal => {
                    let token = self.lexer.next_token();
                    self.record_illegal(&token);
                }
                _ => items.push(self.parse_expr()?),
            }
        }
    }

    /// Consumes the rest of a list whose `(` was just read.
    fn skip_list(&mut self) {
        let mut open = 1usize;
        while open > 0 {
            match self.lexer.next_token().kind {
                TokenKind::LParen => open += 1,
                TokenKind::RParen => open -= 1,
                TokenKind::Eof => return,
                _ => {}
            }
        }
    }

    fn record_illegal(&mut self, token: &Token) {
        let position = token.position;
        let span = span_of(token);
        let text = token.literal.clone();
        let mut chars = text.chars();
        let error = match (chars.next(), chars.next()) {
            (Some('"'), _) => SyntaxError::UnterminatedString { position, span },
            (Some('\\'), _) => SyntaxError::InvalidEscape {
                escape: text,
                position,
                span,
            },
            (Some(c), _) if c.is_ascii_digit() => SyntaxError::MalformedNumber {
                text,
                position,
                span,
            },
            (Some('-' | '+'), Some(c)) if c.is_ascii_digit() => SyntaxError::MalformedNumber {
                text,
                position,
                span,
            },
            _ => SyntaxError::IllegalCharacter {
                text,
                position,
                span,
            },
        };
        self.errors.push(error);
    }

    fn finish<T>(&mut self, value: Option<T>) -> Result<T, ParseErrors> {
        match value {
            Some(value) if self.errors.is_empty() => Ok(value),
            _ => Err(ParseErrors {
                name: self.name.clone(),
                src: self.source.clone(),
                errors: std::mem::take(&mut self.errors),
            }),
        }
    }
}

fn span_of(token: &Token) -> SourceSpan {
    let Position { offset, .. } = token.position;
    (offset, token.end.saturating_sub(offset)).into()
}
