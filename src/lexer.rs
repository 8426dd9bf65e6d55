use crate::utils::unescape_char;
use std::fmt;

/// The different kinds of tokens the lexer can produce.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TokenKind {
    // == Special Tokens ==
    /// End of input. Returned again on every call once reached.
    Eof,
    /// Text the lexer could not recognize. The literal holds the offending text.
    Illegal,

    // == Punctuation ==
    /// Left Parenthesis: `(`
    LParen,
    /// Right Parenthesis: `)`
    RParen,

    // == Atoms ==
    /// A bare symbol such as `Ident`, `ADD` or `true`.
    Symbol,
    /// A keyword, written `:name`. The literal holds the name without the colon.
    Keyword,
    /// A double-quoted string. The literal holds the unescaped value.
    String,
    /// An integer or decimal number. The literal holds the source text.
    Number,
    /// The `nil` atom.
    Nil,
}

/// A location in the source text. Lines and columns are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub const START: Position = Position {
        offset: 0,
        line: 1,
        column: 1,
    };
}

impl Default for Position {
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// A token with its kind, literal text and starting position.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
    pub position: Position,
    /// Byte offset one past the last character of the token.
    pub end: usize,
}

impl Token {
    pub fn new(kind: TokenKind, literal: String, position: Position, end: usize) -> Token {
        Token {
            kind,
            literal,
            position,
            end,
        }
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

/// Characters besides letters and digits allowed in symbols and keywords.
const SYMBOL_PUNCTUATION: &[char] = &[
    '_', '-', '+', '*', '/', '.', '!', '?', '<', '>', '=', '&', '|', '%', '^', '~', '$', '#',
];

fn is_symbol_char(c: char) -> bool {
    c.is_alphanumeric() || SYMBOL_PUNCTUATION.contains(&c)
}

fn is_symbol_start(c: char) -> bool {
    c.is_alphabetic() || SYMBOL_PUNCTUATION.contains(&c)
}

/// Turns S-expression text into tokens, one at a time.
pub struct Lexer<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
    position: Position,
    peeked: Option<Token>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            chars: input.chars().peekable(),
            position: Position::START,
            peeked: None,
        }
    }

    /// Collects every remaining token, including the final `Eof`.
    pub fn lex(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let done = token.is_eof();
            tokens.push(token);
            if done {
                break;
            }
        }
        tokens
    }

    /// Returns the next token without consuming it.
    pub fn peek_token(&mut self) -> &Token {
        let token = match self.peeked.take() {
            Some(token) => token,
            None => self.scan(),
        };
        self.peeked.insert(token)
    }

    pub fn next_token(&mut self) -> Token {
        match self.peeked.take() {
            Some(token) => token,
            None => self.scan(),
        }
    }

    fn scan(&mut self) -> Token {
        self.skip_trivia();
        let start = self.position;

        let Some(c) = self.advance() else {
            return Token::new(TokenKind::Eof, String::new(), start, start.offset);
        };

        let (kind, literal) = match c {
            '(' => (TokenKind::LParen, "(".to_string()),
            ')' => (TokenKind::RParen, ")".to_string()),
            '"' => self.read_string(),
            ':' => self.read_keyword(),
            c if c.is_ascii_digit() => self.read_number(c),
            '-' | '+' if self.peek().is_some_and(|n| n.is_ascii_digit()) => self.read_number(c),
            c if is_symbol_start(c) => self.read_symbol(c),
            c => (TokenKind::Illegal, c.to_string()),
        };

        Token::new(kind, literal, start, self.position.offset)
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        self.position.offset += c.len_utf8();
        if c == '\n' {
            self.position.line += 1;
            self.position.column = 1;
        } else {
            self.position.column += 1;
        }
        Some(c)
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    fn skip_trivia(&mut self) {
        while let Some(c) = self.peek() {
            if c.is_whitespace() {
                self.advance();
            } else if c == ';' {
                while let Some(c) = self.peek() {
                    if c == '\n' {
                        break;
                    }
                    self.advance();
                }
            } else {
                break;
            }
        }
    }

    fn read_string(&mut self) -> (TokenKind, String) {
        let mut value = String::new();
        let mut raw = String::from('"');
        let mut bad_escape = None;

        while let Some(c) = self.advance() {
            raw.push(c);
            match c {
                '"' => {
                    return match bad_escape {
                        Some(escape) => (TokenKind::Illegal, escape),
                        None => (TokenKind::String, value),
                    };
                }
                '\\' => match self.advance() {
                    Some(escaped) => {
                        raw.push(escaped);
                        match unescape_char(escaped) {
                            Some(ch) => value.push(ch),
                            None => {
                                bad_escape.get_or_insert_with(|| format!("\\{escaped}"));
                            }
                        }
                    }
                    None => break,
                },
                c => value.push(c),
            }
        }
        // Unterminated: hand back everything from the opening quote.
        (TokenKind::Illegal, raw)
    }

    fn read_keyword(&mut self) -> (TokenKind, String) {
        let name = self.read_while(is_symbol_char);
        if name.is_empty() {
            (TokenKind::Illegal, ":".to_string())
        } else {
            (TokenKind::Keyword, name)
        }
    }

    fn read_symbol(&mut self, first: char) -> (TokenKind, String) {
        let mut text = first.to_string();
        text.push_str(&self.read_while(is_symbol_char));
        if text == "nil" {
            (TokenKind::Nil, text)
        } else {
            (TokenKind::Symbol, text)
        }
    }

    fn read_number(&mut self, first: char) -> (TokenKind, String) {
        let mut text = first.to_string();
        text.push_str(&self.read_while(|c| c.is_ascii_digit()));
        if self.peek() == Some('.') {
            self.advance();
            text.push('.');
            let fraction = self.read_while(|c| c.is_ascii_digit());
            if fraction.is_empty() {
                text.push_str(&self.read_while(is_symbol_char));
                return (TokenKind::Illegal, text);
            }
            text.push_str(&fraction);
        }
        // `12abc` or `1.5e3` is a malformed number, not a number and a symbol.
        let tail = self.read_while(is_symbol_char);
        if tail.is_empty() {
            (TokenKind::Number, text)
        } else {
            text.push_str(&tail);
            (TokenKind::Illegal, text)
        }
    }

    fn read_while(&mut self, keep: impl Fn(char) -> bool) -> String {
        let mut text = String::new();
        while let Some(c) = self.peek() {
            if !keep(c) {
                break;
            }
            text.push(c);
            self.advance();
        }
        text
    }
}
