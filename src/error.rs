use crate::lexer::Position;
use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Any failure of a top-level codec call.
#[derive(Error, Debug, Diagnostic)]
pub enum CodecError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Parse(#[from] ParseErrors),

    #[error("failed to decode {name}")]
    #[diagnostic(code(codec::decode))]
    Decode {
        name: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("decoding stopped here")]
        span: SourceSpan,
        #[source]
        #[diagnostic_source]
        error: DecodeError,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Encode(#[from] EncodeError),

    #[error("failed to access {path}")]
    #[diagnostic(code(codec::io))]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl CodecError {
    /// Attaches the decoded text to `error`, pointing at where it failed.
    pub(crate) fn from_decode(error: DecodeError, name: &str, source: &str) -> Self {
        let Position { offset, .. } = error.position();
        CodecError::Decode {
            name: name.to_string(),
            src: NamedSource::new(name, source.to_string()),
            span: (offset, 0).into(),
            error,
        }
    }

    /// The decode failure, if this is one.
    pub fn decode_error(&self) -> Option<&DecodeError> {
        match self {
            CodecError::Decode { error, .. } => Some(error),
            _ => None,
        }
    }
}

/// Every lexical and syntactic problem found in one parse call.
#[derive(Error, Debug, Diagnostic, Clone)]
#[error("{} syntax error(s) in {}", .errors.len(), .name)]
#[diagnostic(code(parser::failed))]
pub struct ParseErrors {
    pub name: String,
    #[source_code]
    pub src: NamedSource<String>,
    #[related]
    pub errors: Vec<SyntaxError>,
}

impl ParseErrors {
    pub fn first(&self) -> Option<&SyntaxError> {
        self.errors.first()
    }
}

#[derive(Error, Debug, Diagnostic, Clone, PartialEq)]
pub enum SyntaxError {
    #[error("{position}: illegal character `{text}`")]
    #[diagnostic(
        code(lexer::illegal_character),
        help("S-expressions are built from parentheses, symbols, :keywords, strings, numbers and nil.")
    )]
    IllegalCharacter {
        text: String,
        position: Position,
        #[label("not allowed here")]
        span: SourceSpan,
    },

    #[error("{position}: unterminated string")]
    #[diagnostic(
        code(lexer::unterminated_string),
        help("Close the string with a double quote.")
    )]
    UnterminatedString {
        position: Position,
        #[label("string starts here")]
        span: SourceSpan,
    },

    #[error("{position}: invalid escape sequence `{escape}`")]
    #[diagnostic(
        code(lexer::invalid_escape),
        help("Supported escapes are \\\", \\\\, \\n, \\t and \\r.")
    )]
    InvalidEscape {
        escape: String,
        position: Position,
        #[label("in this string")]
        span: SourceSpan,
    },

    #[error("{position}: malformed number `{text}`")]
    #[diagnostic(
        code(lexer::malformed_number),
        help("Numbers are an optional sign, digits, and an optional fraction.")
    )]
    MalformedNumber {
        text: String,
        position: Position,
        #[label("not a number")]
        span: SourceSpan,
    },

    #[error("{position}: unexpected token `{found}`")]
    #[diagnostic(code(parser::unexpected_token))]
    UnexpectedToken {
        found: String,
        position: Position,
        #[label("unexpected")]
        span: SourceSpan,
    },

    #[error("{position}: unterminated list")]
    #[diagnostic(
        code(parser::unterminated_list),
        help("The input ended before this list was closed with `)`.")
    )]
    UnterminatedList {
        position: Position,
        #[label("list opened here")]
        span: SourceSpan,
    },

    #[error("{position}: unexpected end of input")]
    #[diagnostic(code(parser::unexpected_eof))]
    UnexpectedEof {
        position: Position,
        #[label("expected an expression here")]
        span: SourceSpan,
    },

    #[error("{position}: lists nested more than {limit} deep")]
    #[diagnostic(
        code(parser::too_deep),
        help("Split the input or flatten the tree; deeper nesting is not read.")
    )]
    TooDeep {
        limit: usize,
        position: Position,
        #[label("this list is too deep")]
        span: SourceSpan,
    },

    #[error("{position}: unexpected input after the expression")]
    #[diagnostic(
        code(parser::trailing_input),
        help("A document holds exactly one top-level expression.")
    )]
    TrailingInput {
        position: Position,
        #[label("starts here")]
        span: SourceSpan,
    },
}

impl SyntaxError {
    pub fn position(&self) -> Position {
        match self {
            SyntaxError::IllegalCharacter { position, .. }
            | SyntaxError::UnterminatedString { position, .. }
            | SyntaxError::InvalidEscape { position, .. }
            | SyntaxError::MalformedNumber { position, .. }
            | SyntaxError::UnexpectedToken { position, .. }
            | SyntaxError::UnterminatedList { position, .. }
            | SyntaxError::UnexpectedEof { position, .. }
            | SyntaxError::TooDeep { position, .. }
            | SyntaxError::TrailingInput { position, .. } => *position,
        }
    }
}

/// A failure to turn an untyped tree into typed AST nodes.
///
/// Failures below the top-level node arrive wrapped in [`DecodeError::InField`]
/// layers, one per level, so the chain names every node and field on the way
/// down to the original cause.
#[derive(Error, Debug, Diagnostic, Clone, PartialEq)]
pub enum DecodeError {
    #[error("{position}: {node} is missing field `{field}`")]
    #[diagnostic(
        code(builder::missing_field),
        help("Every field must be written out. Use `nil` for an absent value and `()` for an empty list.")
    )]
    MissingField {
        node: String,
        field: String,
        position: Position,
    },

    #[error("{position}: {node} has no field `{field}`")]
    #[diagnostic(code(builder::unknown_field))]
    UnknownField {
        node: String,
        field: String,
        position: Position,
    },

    #[error("{position}: {node} sets field `{field}` more than once")]
    #[diagnostic(code(builder::duplicate_field))]
    DuplicateField {
        node: String,
        field: String,
        position: Position,
    },

    #[error("{position}: unknown node type: {name}")]
    #[diagnostic(code(builder::unknown_node_type))]
    UnknownNodeType { name: String, position: Position },

    #[error("{position}: expected {expected}, found {found}")]
    #[diagnostic(code(builder::wrong_shape))]
    WrongShape {
        expected: String,
        found: String,
        position: Position,
    },

    #[error("{position}: invalid {kind} `{literal}`")]
    #[diagnostic(code(builder::invalid_literal))]
    InvalidLiteral {
        kind: String,
        literal: String,
        position: Position,
    },

    #[error("{position}: nodes nested more than {limit} lists deep")]
    #[diagnostic(code(builder::too_deep))]
    TooDeep { limit: usize, position: Position },

    #[error("in field `{field}`{} of {node}", element(.index))]
    #[diagnostic(code(builder::in_field))]
    InField {
        node: String,
        field: String,
        index: Option<usize>,
        #[source]
        source: Box<DecodeError>,
    },
}

impl DecodeError {
    pub(crate) fn in_field(node: &str, field: &str, index: Option<usize>, source: Self) -> Self {
        DecodeError::InField {
            node: node.to_string(),
            field: field.to_string(),
            index,
            source: Box::new(source),
        }
    }

    /// The innermost error, with all field context stripped.
    pub fn root_cause(&self) -> &DecodeError {
        let mut current = self;
        while let DecodeError::InField { source, .. } = current {
            current = source;
        }
        current
    }

    /// Where the innermost error was found.
    pub fn position(&self) -> Position {
        match self.root_cause() {
            DecodeError::MissingField { position, .. }
            | DecodeError::UnknownField { position, .. }
            | DecodeError::DuplicateField { position, .. }
            | DecodeError::UnknownNodeType { position, .. }
            | DecodeError::WrongShape { position, .. }
            | DecodeError::InvalidLiteral { position, .. }
            | DecodeError::TooDeep { position, .. } => *position,
            DecodeError::InField { .. } => Position::START,
        }
    }

    /// The route from the outermost node to the failure, e.g.
    /// `File.decls[0] / FuncDecl.name`.
    pub fn path(&self) -> String {
        let mut segments = Vec::new();
        let mut current = self;
        while let DecodeError::InField {
            node,
            field,
            index,
            source,
        } = current
        {
            segments.push(match index {
                Some(i) => format!("{node}.{field}[{i}]"),
                None => format!("{node}.{field}"),
            });
            current = source;
        }
        segments.join(" / ")
    }
}

/// A typed AST value the writer refuses to serialize.
#[derive(Error, Debug, Diagnostic, Clone, PartialEq)]
pub enum EncodeError {
    #[error("{node}: token {token} is not allowed in field `{field}`, expected {expected}")]
    #[diagnostic(code(writer::invalid_token))]
    InvalidToken {
        node: String,
        field: String,
        token: String,
        expected: String,
    },

    #[error("identifier with an empty name")]
    #[diagnostic(
        code(writer::empty_identifier),
        help("An Ident must carry a name; use `_` for the blank identifier.")
    )]
    EmptyIdent,

    #[error("node type {name} has no registered shape")]
    #[diagnostic(code(writer::unregistered))]
    Unregistered { name: String },

    #[error("{node} would be nested more than {limit} lists deep")]
    #[diagnostic(code(writer::too_deep))]
    TooDeep { node: String, limit: usize },

    #[error("in field `{field}`{} of {node}", element(.index))]
    #[diagnostic(code(writer::in_field))]
    InField {
        node: String,
        field: String,
        index: Option<usize>,
        #[source]
        source: Box<EncodeError>,
    },
}

impl EncodeError {
    pub(crate) fn in_field(node: &str, field: &str, index: Option<usize>, source: Self) -> Self {
        EncodeError::InField {
            node: node.to_string(),
            field: field.to_string(),
            index,
            source: Box::new(source),
        }
    }

    pub fn root_cause(&self) -> &EncodeError {
        let mut current = self;
        while let EncodeError::InField { source, .. } = current {
            current = source;
        }
        current
    }
}

fn element(index: &Option<usize>) -> String {
    index.map(|i| format!(" (element {i})")).unwrap_or_default()
}
