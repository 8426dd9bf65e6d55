//! Builds typed AST nodes out of untyped S-expression trees.
//!
//! A node is a list `(Name :field value ...)`. The head symbol selects a
//! shape from the [registry](crate::registry); the keyword/value pairs are
//! collected into [`Fields`] and handed to the shape's decode function,
//! which pulls each field out in canonical order. Nothing is defaulted: a
//! missing field, a stray keyword or a value of the wrong shape fails the
//! whole decode, wrapped with the node and field it occurred in.

pub(crate) mod decl;
pub(crate) mod expr;
pub(crate) mod stmt;

use crate::ast::*;
use crate::error::DecodeError;
use crate::lexer::Position;
use crate::registry::{self, Category, NodeShape};
use crate::sexp::{SExp, SExpKind, MAX_DEPTH};
use log::trace;

/// Types that can be built from an untyped tree.
pub trait Decode: Sized {
    fn decode(sexp: &SExp) -> Result<Self, DecodeError> {
        Self::decode_nested(sexp, 0)
    }

    /// Decodes `sexp` found `depth` lists below the root.
    fn decode_nested(sexp: &SExp, depth: usize) -> Result<Self, DecodeError>;
}

/// Decodes any registered node.
pub fn decode_node(sexp: &SExp) -> Result<Node, DecodeError> {
    Node::decode(sexp)
}

impl Decode for Node {
    fn decode_nested(sexp: &SExp, depth: usize) -> Result<Self, DecodeError> {
        let shape = shape_of(sexp)?;
        build(shape, sexp, depth)
    }
}

fn shape_of(sexp: &SExp) -> Result<&'static NodeShape, DecodeError> {
    let items = sexp.as_list().ok_or_else(|| wrong_shape("a node", sexp))?;
    let head = items.first().ok_or_else(|| DecodeError::WrongShape {
        expected: "a node".to_string(),
        found: "empty list".to_string(),
        position: sexp.position,
    })?;
    let name = head
        .as_symbol()
        .ok_or_else(|| wrong_shape("a node type symbol", head))?;
    registry::lookup(name).ok_or_else(|| DecodeError::UnknownNodeType {
        name: name.to_string(),
        position: head.position,
    })
}

fn build(shape: &'static NodeShape, sexp: &SExp, depth: usize) -> Result<Node, DecodeError> {
    trace!("building {} at {}", shape.name, sexp.position);
    if depth >= MAX_DEPTH {
        return Err(DecodeError::TooDeep {
            limit: MAX_DEPTH,
            position: sexp.position,
        });
    }
    let items = sexp.as_list().unwrap_or_default();
    let items = items.get(1..).unwrap_or_default();
    let mut fields = Fields::new(shape, items, sexp.position, depth)?;
    (shape.decode)(&mut fields)
}

/// Decodes a node whose category `accepts` allows, or fails naming `expected`.
fn decode_in(
    sexp: &SExp,
    depth: usize,
    expected: &str,
    accepts: impl Fn(&NodeShape) -> bool,
) -> Result<Node, DecodeError> {
    let shape = shape_of(sexp)?;
    if !accepts(shape) {
        return Err(DecodeError::WrongShape {
            expected: expected.to_string(),
            found: format!("{} {}", shape.category, shape.name),
            position: sexp.position,
        });
    }
    build(shape, sexp, depth)
}

fn mismatch(expected: &str, node: &Node, sexp: &SExp) -> DecodeError {
    DecodeError::WrongShape {
        expected: expected.to_string(),
        found: node.type_name().to_string(),
        position: sexp.position,
    }
}

fn wrong_shape(expected: &str, found: &SExp) -> DecodeError {
    DecodeError::WrongShape {
        expected: expected.to_string(),
        found: found.describe(),
        position: found.position,
    }
}

fn invalid(kind: &str, found: &SExp) -> DecodeError {
    DecodeError::InvalidLiteral {
        kind: kind.to_string(),
        literal: found.to_string(),
        position: found.position,
    }
}

macro_rules! decode_category {
    ($($ty:ident: $expected:literal, $accepts:expr, $pat:pat => $out:expr;)*) => {$(
        impl Decode for $ty {
            fn decode_nested(sexp: &SExp, depth: usize) -> Result<Self, DecodeError> {
                match decode_in(sexp, depth, $expected, $accepts)? {
                    $pat => Ok($out),
                    other => Err(mismatch($expected, &other, sexp)),
                }
            }
        }
    )*};
}

decode_category! {
    Expr: "an expression", |s| s.category.is_expr(), Node::Expr(x) => x;
    Stmt: "a statement", |s| s.category == Category::Stmt, Node::Stmt(x) => x;
    Spec: "a spec", |s| s.category == Category::Spec, Node::Spec(x) => x;
    Decl: "a declaration", |s| s.category == Category::Decl, Node::Decl(x) => x;
}

macro_rules! decode_concrete {
    ($($ty:ident: $pat:pat => $out:expr;)*) => {$(
        impl Decode for $ty {
            fn decode_nested(sexp: &SExp, depth: usize) -> Result<Self, DecodeError> {
                let expected = stringify!($ty);
                match decode_in(sexp, depth, expected, |s| s.name == expected)? {
                    $pat => Ok($out),
                    other => Err(mismatch(expected, &other, sexp)),
                }
            }
        }
    )*};
}

decode_concrete! {
    Ident: Node::Expr(Expr::Ident(x)) => x;
    BasicLit: Node::Expr(Expr::BasicLit(x)) => x;
    CallExpr: Node::Expr(Expr::Call(x)) => *x;
    FuncType: Node::Expr(Expr::FuncType(x)) => *x;
    BlockStmt: Node::Stmt(Stmt::Block(x)) => *x;
    ImportSpec: Node::Spec(Spec::Import(x)) => *x;
    File: Node::File(x) => *x;
    Field: Node::Field(x) => x;
    FieldList: Node::FieldList(x) => x;
    Comment: Node::Comment(x) => x;
    CommentGroup: Node::CommentGroup(x) => x;
    Scope: Node::Scope(x) => x;
    Object: Node::Object(x) => x;
}

/// The keyword/value pairs of one node, indexed by the node's field list.
pub struct Fields<'a> {
    shape: &'static NodeShape,
    position: Position,
    depth: usize,
    values: Vec<Option<&'a SExp>>,
}

impl<'a> Fields<'a> {
    fn new(
        shape: &'static NodeShape,
        items: &'a [SExp],
        position: Position,
        depth: usize,
    ) -> Result<Self, DecodeError> {
        let mut values = vec![None; shape.fields.len()];
        let mut items = items.iter();
        while let Some(item) = items.next() {
            let key = item
                .as_keyword()
                .ok_or_else(|| wrong_shape("a :keyword", item))?;
            let index = shape
                .field_index(key)
                .ok_or_else(|| DecodeError::UnknownField {
                    node: shape.name.to_string(),
                    field: key.to_string(),
                    position: item.position,
                })?;
            let value = items.next().ok_or_else(|| DecodeError::WrongShape {
                expected: format!("a value for :{key}"),
                found: "end of list".to_string(),
                position: item.position,
            })?;
            if values[index].replace(value).is_some() {
                return Err(DecodeError::DuplicateField {
                    node: shape.name.to_string(),
                    field: key.to_string(),
                    position: item.position,
                });
            }
        }
        Ok(Fields {
            shape,
            position,
            depth,
            values,
        })
    }

    pub fn node_name(&self) -> &'static str {
        self.shape.name
    }

    fn take(&mut self, field: &'static str) -> Result<&'a SExp, DecodeError> {
        let index = self.shape.field_index(field);
        debug_assert!(index.is_some(), "{} has no field {field}", self.shape.name);
        index
            .and_then(|i| self.values[i].take())
            .ok_or_else(|| DecodeError::MissingField {
                node: self.shape.name.to_string(),
                field: field.to_string(),
                position: self.position,
            })
    }

    fn wrap(&self, field: &str, index: Option<usize>, err: DecodeError) -> DecodeError {
        DecodeError::in_field(self.shape.name, field, index, err)
    }

    /// Reads a primitive value with `read`, wrapping its failure in field context.
    fn primitive<T>(
        &mut self,
        field: &'static str,
        read: impl FnOnce(&SExp) -> Result<T, DecodeError>,
    ) -> Result<T, DecodeError> {
        let value = self.take(field)?;
        read(value).map_err(|e| self.wrap(field, None, e))
    }

    /// A position. Any non-negative integer is accepted and normalized.
    pub fn pos(&mut self, field: &'static str) -> Result<Pos, DecodeError> {
        self.primitive(field, |value| position_number(value).map(|_| Pos::NONE))
    }

    /// A position whose presence matters: `0` is absent, anything else set.
    pub fn marker(&mut self, field: &'static str) -> Result<Pos, DecodeError> {
        self.primitive(field, |value| {
            let set = position_number(value)?;
            Ok(if set { Pos::MARKED } else { Pos::NONE })
        })
    }

    pub fn string(&mut self, field: &'static str) -> Result<String, DecodeError> {
        self.primitive(field, |value| match &value.kind {
            SExpKind::String(s) => Ok(s.clone()),
            _ => Err(wrong_shape("a string", value)),
        })
    }

    pub fn boolean(&mut self, field: &'static str) -> Result<bool, DecodeError> {
        self.primitive(field, |value| match value.as_symbol() {
            Some("true") => Ok(true),
            Some("false") => Ok(false),
            _ => Err(invalid("boolean", value)),
        })
    }

    pub fn token(&mut self, field: &'static str, class: TokenClass) -> Result<Token, DecodeError> {
        self.primitive(field, |value| {
            let name = value
                .as_symbol()
                .ok_or_else(|| wrong_shape("a token symbol", value))?;
            let token = Token::from_name(name).ok_or_else(|| invalid("token", value))?;
            if class.allows(token) {
                Ok(token)
            } else {
                Err(DecodeError::WrongShape {
                    expected: class.describe().to_string(),
                    found: format!("token {name}"),
                    position: value.position,
                })
            }
        })
    }

    pub fn chan_dir(&mut self, field: &'static str) -> Result<ChanDir, DecodeError> {
        self.primitive(field, |value| {
            value
                .as_symbol()
                .and_then(ChanDir::from_name)
                .ok_or_else(|| invalid("channel direction", value))
        })
    }

    pub fn obj_kind(&mut self, field: &'static str) -> Result<ObjKind, DecodeError> {
        self.primitive(field, |value| {
            value
                .as_symbol()
                .and_then(ObjKind::from_name)
                .ok_or_else(|| invalid("object kind", value))
        })
    }

    /// A required child node.
    pub fn node<T: Decode>(&mut self, field: &'static str) -> Result<T, DecodeError> {
        let value = self.take(field)?;
        T::decode_nested(value, self.depth + 1).map_err(|e| self.wrap(field, None, e))
    }

    /// An optional child node; `nil` means absent.
    pub fn opt<T: Decode>(&mut self, field: &'static str) -> Result<Option<T>, DecodeError> {
        let value = self.take(field)?;
        if value.is_nil() {
            return Ok(None);
        }
        T::decode_nested(value, self.depth + 1)
            .map(Some)
            .map_err(|e| self.wrap(field, None, e))
    }

    /// A list of child nodes; `()` is an empty list and `nil` is rejected.
    pub fn list<T: Decode>(&mut self, field: &'static str) -> Result<Vec<T>, DecodeError> {
        let value = self.take(field)?;
        self.elements(field, value)
    }

    /// A list of child nodes that may also be `nil`, kept distinct from `()`.
    pub fn opt_list<T: Decode>(
        &mut self,
        field: &'static str,
    ) -> Result<Option<Vec<T>>, DecodeError> {
        let value = self.take(field)?;
        if value.is_nil() {
            return Ok(None);
        }
        self.elements(field, value).map(Some)
    }

    fn elements<T: Decode>(&self, field: &str, value: &SExp) -> Result<Vec<T>, DecodeError> {
        let items = match &value.kind {
            // A node where a list of nodes belongs is a shape error, not a
            // list whose first element is a symbol.
            SExpKind::List(items) if value.head().is_none() => items,
            _ => return Err(self.wrap(field, None, wrong_shape("a list", value))),
        };
        items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                T::decode_nested(item, self.depth + 2).map_err(|e| self.wrap(field, Some(i), e))
            })
            .collect()
    }
}

/// Checks that `value` is a position number and reports whether it is set.
fn position_number(value: &SExp) -> Result<bool, DecodeError> {
    match &value.kind {
        SExpKind::Number(n) if n.bytes().all(|b| b.is_ascii_digit()) => {
            Ok(n.bytes().any(|b| b != b'0'))
        }
        SExpKind::Number(_) => Err(invalid("position", value)),
        _ => Err(wrong_shape("a position number", value)),
    }
}
