//! The typed Go syntax tree.
//!
//! The node family follows `go/ast`. Every node owns its children; there is
//! no sharing between subtrees. Position fields are kept for shape only: the
//! codec writes them as [`Pos::NONE`] and reads every position back as
//! [`Pos::NONE`]. The exceptions are the few positions whose presence alone
//! changes the Go source (`TypeSpec.assign`, `CallExpr.ellipsis`,
//! `GenDecl.lparen` and `GenDecl.rparen`); those keep their validity and
//! come back as [`Pos::MARKED`] when set.

mod decl;
mod expr;
mod stmt;
mod support;
mod token;
mod types;

pub use decl::*;
pub use expr::*;
pub use stmt::*;
pub use support::*;
pub use token::{ChanDir, ObjKind, Token, TokenClass};
pub use types::*;

/// A source position placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Pos(pub u32);

impl Pos {
    /// An absent position. Ordinary positions always come back as this.
    pub const NONE: Pos = Pos(0);

    /// What a set marker position (`type A = B`, `f(xs...)`, `var (...)`)
    /// decodes to.
    pub const MARKED: Pos = Pos(1);

    pub fn is_valid(self) -> bool {
        self != Pos::NONE
    }
}

/// Any node with an entry in the registry.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Expr(Expr),
    Stmt(Stmt),
    Spec(Spec),
    Decl(Decl),
    File(Box<File>),
    Field(Field),
    FieldList(FieldList),
    Comment(Comment),
    CommentGroup(CommentGroup),
    Scope(Scope),
    Object(Object),
}

impl Node {
    /// The canonical type name written at the head of the node's list.
    pub fn type_name(&self) -> &'static str {
        match self {
            Node::Expr(expr) => expr.type_name(),
            Node::Stmt(stmt) => stmt.type_name(),
            Node::Spec(spec) => spec.type_name(),
            Node::Decl(decl) => decl.type_name(),
            Node::File(_) => "File",
            Node::Field(_) => "Field",
            Node::FieldList(_) => "FieldList",
            Node::Comment(_) => "Comment",
            Node::CommentGroup(_) => "CommentGroup",
            Node::Scope(_) => "Scope",
            Node::Object(_) => "Object",
        }
    }
}

/// Implements `From<$ty>` for an enum variant, boxing where the variant does.
macro_rules! node_from {
    ($enum:ident :: $variant:ident (box $ty:ty)) => {
        impl From<$ty> for $enum {
            fn from(node: $ty) -> Self {
                $enum::$variant(Box::new(node))
            }
        }
    };
    ($enum:ident :: $variant:ident ($ty:ty)) => {
        impl From<$ty> for $enum {
            fn from(node: $ty) -> Self {
                $enum::$variant(node)
            }
        }
    };
}

pub(crate) use node_from;

node_from!(Node::Expr(Expr));
node_from!(Node::Stmt(Stmt));
node_from!(Node::Spec(Spec));
node_from!(Node::Decl(Decl));
node_from!(Node::File(box File));
node_from!(Node::Field(Field));
node_from!(Node::FieldList(FieldList));
node_from!(Node::Comment(Comment));
node_from!(Node::CommentGroup(CommentGroup));
node_from!(Node::Scope(Scope));
node_from!(Node::Object(Object));
