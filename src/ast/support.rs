use super::{BasicLit, Expr, Ident, ObjKind, Pos};

/// A single `//` or `/* */` comment.
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub slash: Pos,
    /// Comment text including the comment markers.
    pub text: String,
}

impl Comment {
    pub fn new(text: impl Into<String>) -> Self {
        Comment {
            slash: Pos::NONE,
            text: text.into(),
        }
    }
}

/// A run of comments with no other tokens and no empty lines between them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CommentGroup {
    pub list: Vec<Comment>,
}

/// A parameter, result, struct field, method or type parameter.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Field {
    pub doc: Option<CommentGroup>,
    /// Empty for anonymous parameters and embedded fields.
    pub names: Vec<Ident>,
    /// `None` only in the degenerate case of a parse error.
    pub ty: Option<Expr>,
    pub tag: Option<BasicLit>,
    pub comment: Option<CommentGroup>,
}

/// A parenthesized or braced list of fields.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FieldList {
    pub opening: Pos,
    pub list: Vec<Field>,
    pub closing: Pos,
}

impl FieldList {
    pub fn new(list: Vec<Field>) -> Self {
        FieldList {
            opening: Pos::NONE,
            list,
            closing: Pos::NONE,
        }
    }
}

/// A named language entity.
///
/// Only the kind and name are kept; the back-links to the declaring node are
/// not part of the tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Object {
    pub kind: ObjKind,
    pub name: String,
}

impl Object {
    pub fn new(kind: ObjKind, name: impl Into<String>) -> Self {
        Object {
            kind,
            name: name.into(),
        }
    }
}

/// The objects declared in a block, with a link to the enclosing scope.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Scope {
    pub outer: Option<Box<Scope>>,
    pub objects: Vec<Object>,
}

impl Scope {
    pub fn lookup(&self, name: &str) -> Option<&Object> {
        self.objects.iter().find(|obj| obj.name == name)
    }
}
