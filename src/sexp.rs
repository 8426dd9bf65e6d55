use crate::lexer::Position;
use crate::serialization::{to_value, Value};
use crate::utils::write_quoted;
use std::fmt;

/// Deepest list nesting the codec reads or writes. The parser, builder and
/// writer all recurse once per level.
pub const MAX_DEPTH: usize = 256;

/// An untyped S-expression node with the position it was read from.
#[derive(Debug, Clone, PartialEq)]
pub struct SExp {
    pub kind: SExpKind,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SExpKind {
    Symbol(String),
    /// Keyword name without the leading `:`.
    Keyword(String),
    /// Unescaped string contents.
    String(String),
    /// Number literal text, not yet interpreted.
    Number(String),
    Nil,
    List(Vec<SExp>),
}

impl SExp {
    pub fn new(kind: SExpKind, position: Position) -> Self {
        SExp { kind, position }
    }

    pub fn as_symbol(&self) -> Option<&str> {
        match &self.kind {
            SExpKind::Symbol(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_keyword(&self) -> Option<&str> {
        match &self.kind {
            SExpKind::Keyword(k) => Some(k),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[SExp]> {
        match &self.kind {
            SExpKind::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn is_nil(&self) -> bool {
        matches!(self.kind, SExpKind::Nil)
    }

    /// The head symbol of a node-shaped list, `(Name ...)`.
    pub fn head(&self) -> Option<&str> {
        self.as_list()?.first()?.as_symbol()
    }

    /// A short description for error messages, e.g. `symbol ADD` or `list`.
    pub fn describe(&self) -> String {
        match &self.kind {
            SExpKind::Symbol(s) => format!("symbol {s}"),
            SExpKind::Keyword(k) => format!("keyword :{k}"),
            SExpKind::String(_) => "string".to_string(),
            SExpKind::Number(n) => format!("number {n}"),
            SExpKind::Nil => "nil".to_string(),
            SExpKind::List(items) => match items.first().and_then(SExp::as_symbol) {
                Some(head) => format!("node {head}"),
                None => "list".to_string(),
            },
        }
    }

    /// Renders the tree across several lines, one field per line, once a
    /// node no longer fits in `width` columns.
    pub fn to_pretty(&self, indent: usize, width: usize) -> String {
        let mut layout = Vec::new();
        self.measure(&mut layout);
        let mut pretty = Pretty {
            out: String::new(),
            layout: &layout,
            next: 0,
            indent,
            width,
        };
        pretty.write(self, 0);
        pretty.out
    }

    /// Records the flat width in columns and the subtree size of every
    /// node, in pre-order.
    fn measure(&self, layout: &mut Vec<Measure>) -> Measure {
        let slot = layout.len();
        layout.push(Measure::default());
        let measure = match &self.kind {
            SExpKind::List(items) => {
                let mut measure = Measure {
                    columns: 2 + items.len().saturating_sub(1),
                    nodes: 1,
                };
                for item in items {
                    let child = item.measure(layout);
                    measure.columns += child.columns;
                    measure.nodes += child.nodes;
                }
                measure
            }
            _ => Measure {
                columns: self.to_string().chars().count(),
                nodes: 1,
            },
        };
        layout[slot] = measure;
        measure
    }

    /// Converts the tree into the JSON-array S-expression layout.
    pub fn to_value(&self) -> Value {
        to_value(self)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.to_value())
    }

    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(&self.to_value())
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct Measure {
    columns: usize,
    nodes: usize,
}

struct Pretty<'a> {
    out: String,
    layout: &'a [Measure],
    next: usize,
    indent: usize,
    width: usize,
}

impl Pretty<'_> {
    fn write(&mut self, sexp: &SExp, depth: usize) {
        let measure = self.layout[self.next];
        let items = match &sexp.kind {
            SExpKind::List(items) if depth * self.indent + measure.columns > self.width => {
                self.next += 1;
                items
            }
            _ => {
                self.next += measure.nodes;
                self.out.push_str(&sexp.to_string());
                return;
            }
        };

        self.out.push('(');
        let mut after_keyword = false;
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                if after_keyword {
                    self.out.push(' ');
                } else {
                    self.out.push('\n');
                    self.out.push_str(&" ".repeat((depth + 1) * self.indent));
                }
            }
            self.write(item, depth + 1);
            after_keyword = item.as_keyword().is_some();
        }
        self.out.push(')');
    }
}

/// Compact canonical form: single spaces, no newlines.
impl fmt::Display for SExp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            SExpKind::Symbol(s) => f.write_str(s),
            SExpKind::Keyword(k) => write!(f, ":{k}"),
            SExpKind::String(s) => {
                let mut quoted = String::with_capacity(s.len() + 2);
                write_quoted(&mut quoted, s);
                f.write_str(&quoted)
            }
            SExpKind::Number(n) => f.write_str(n),
            SExpKind::Nil => f.write_str("nil"),
            SExpKind::List(items) => {
                f.write_str("(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str(")")
            }
        }
    }
}
