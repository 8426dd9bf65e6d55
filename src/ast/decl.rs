use super::{
    node_from, BasicLit, BlockStmt, CommentGroup, Expr, FieldList, FuncType, Ident, Pos, Scope,
    Token,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Spec {
    Import(Box<ImportSpec>),
    Value(Box<ValueSpec>),
    Type(Box<TypeSpec>),
}

impl Spec {
    pub fn type_name(&self) -> &'static str {
        match self {
            Spec::Import(_) => "ImportSpec",
            Spec::Value(_) => "ValueSpec",
            Spec::Type(_) => "TypeSpec",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImportSpec {
    pub doc: Option<CommentGroup>,
    /// Local package name, `.` or `_`.
    pub name: Option<Ident>,
    pub path: BasicLit,
    pub comment: Option<CommentGroup>,
    pub end_pos: Pos,
}

impl ImportSpec {
    pub fn new(path: &str) -> Self {
        ImportSpec {
            doc: None,
            name: None,
            path: BasicLit::string(path),
            comment: None,
            end_pos: Pos::NONE,
        }
    }
}

/// A `const` or `var` declaration line.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ValueSpec {
    pub doc: Option<CommentGroup>,
    pub names: Vec<Ident>,
    pub ty: Option<Expr>,
    pub values: Vec<Expr>,
    pub comment: Option<CommentGroup>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypeSpec {
    pub doc: Option<CommentGroup>,
    pub name: Ident,
    pub type_params: Option<FieldList>,
    /// Position of `=` for alias declarations, otherwise `Pos::NONE`. Kept
    /// as a marker through encoding.
    pub assign: Pos,
    pub ty: Expr,
    pub comment: Option<CommentGroup>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Decl {
    Bad(BadDecl),
    Gen(Box<GenDecl>),
    Func(Box<FuncDecl>),
}

impl Decl {
    pub fn type_name(&self) -> &'static str {
        match self {
            Decl::Bad(_) => "BadDecl",
            Decl::Gen(_) => "GenDecl",
            Decl::Func(_) => "FuncDecl",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct BadDecl {
    pub from: Pos,
    pub to: Pos,
}

/// An `import`, `const`, `type` or `var` declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct GenDecl {
    pub doc: Option<CommentGroup>,
    pub tok_pos: Pos,
    pub tok: Token,
    /// `Pos::NONE` when the declaration is not parenthesized. Kept as a
    /// marker through encoding, like `rparen`.
    pub lparen: Pos,
    pub specs: Vec<Spec>,
    pub rparen: Pos,
}

impl GenDecl {
    pub fn new(tok: Token, specs: Vec<Spec>) -> Self {
        GenDecl {
            doc: None,
            tok_pos: Pos::NONE,
            tok,
            lparen: Pos::NONE,
            specs,
            rparen: Pos::NONE,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FuncDecl {
    pub doc: Option<CommentGroup>,
    /// Receiver of a method; `None` for plain functions.
    pub recv: Option<FieldList>,
    pub name: Ident,
    pub ty: FuncType,
    /// `None` for external (non-Go) functions.
    pub body: Option<BlockStmt>,
}

/// A Go source file.
#[derive(Debug, Clone, PartialEq)]
pub struct File {
    pub doc: Option<CommentGroup>,
    pub package: Pos,
    pub name: Ident,
    pub decls: Vec<Decl>,
    pub file_start: Pos,
    pub file_end: Pos,
    pub scope: Option<Scope>,
    /// Copies of the import specs found in `decls`.
    pub imports: Vec<ImportSpec>,
    pub unresolved: Vec<Ident>,
    pub comments: Vec<CommentGroup>,
    /// Minimum Go version from a `//go:build` line, or empty.
    pub go_version: String,
}

impl File {
    pub fn new(package: impl Into<String>, decls: Vec<Decl>) -> Self {
        File {
            doc: None,
            package: Pos::NONE,
            name: Ident::new(package),
            decls,
            file_start: Pos::NONE,
            file_end: Pos::NONE,
            scope: None,
            imports: Vec::new(),
            unresolved: Vec::new(),
            comments: Vec::new(),
            go_version: String::new(),
        }
    }
}

node_from!(Spec::Import(box ImportSpec));
node_from!(Spec::Value(box ValueSpec));
node_from!(Spec::Type(box TypeSpec));
node_from!(Decl::Bad(BadDecl));
node_from!(Decl::Gen(box GenDecl));
node_from!(Decl::Func(box FuncDecl));
