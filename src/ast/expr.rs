use super::{
    node_from, ArrayType, BlockStmt, ChanType, FuncType, InterfaceType, MapType, Object, Pos,
    StructType, Token,
};

/// An expression or a type expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Bad(BadExpr),
    Ident(Ident),
    Ellipsis(Box<Ellipsis>),
    BasicLit(BasicLit),
    FuncLit(Box<FuncLit>),
    CompositeLit(Box<CompositeLit>),
    Paren(Box<ParenExpr>),
    Selector(Box<SelectorExpr>),
    Index(Box<IndexExpr>),
    IndexList(Box<IndexListExpr>),
    Slice(Box<SliceExpr>),
    TypeAssert(Box<TypeAssertExpr>),
    Call(Box<CallExpr>),
    Star(Box<StarExpr>),
    Unary(Box<UnaryExpr>),
    Binary(Box<BinaryExpr>),
    KeyValue(Box<KeyValueExpr>),
    ArrayType(Box<ArrayType>),
    StructType(Box<StructType>),
    FuncType(Box<FuncType>),
    InterfaceType(Box<InterfaceType>),
    MapType(Box<MapType>),
    ChanType(Box<ChanType>),
}

impl Expr {
    pub fn type_name(&self) -> &'static str {
        match self {
            Expr::Bad(_) => "BadExpr",
            Expr::Ident(_) => "Ident",
            Expr::Ellipsis(_) => "Ellipsis",
            Expr::BasicLit(_) => "BasicLit",
            Expr::FuncLit(_) => "FuncLit",
            Expr::CompositeLit(_) => "CompositeLit",
            Expr::Paren(_) => "ParenExpr",
            Expr::Selector(_) => "SelectorExpr",
            Expr::Index(_) => "IndexExpr",
            Expr::IndexList(_) => "IndexListExpr",
            Expr::Slice(_) => "SliceExpr",
            Expr::TypeAssert(_) => "TypeAssertExpr",
            Expr::Call(_) => "CallExpr",
            Expr::Star(_) => "StarExpr",
            Expr::Unary(_) => "UnaryExpr",
            Expr::Binary(_) => "BinaryExpr",
            Expr::KeyValue(_) => "KeyValueExpr",
            Expr::ArrayType(_) => "ArrayType",
            Expr::StructType(_) => "StructType",
            Expr::FuncType(_) => "FuncType",
            Expr::InterfaceType(_) => "InterfaceType",
            Expr::MapType(_) => "MapType",
            Expr::ChanType(_) => "ChanType",
        }
    }

    /// Shorthand for an identifier expression.
    pub fn ident(name: impl Into<String>) -> Expr {
        Expr::Ident(Ident::new(name))
    }
}

/// Placeholder for an expression containing syntax errors.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BadExpr {
    pub from: Pos,
    pub to: Pos,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ident {
    pub name_pos: Pos,
    pub name: String,
    /// The denoted object, if resolved.
    pub obj: Option<Object>,
}

impl Ident {
    pub fn new(name: impl Into<String>) -> Self {
        Ident {
            name_pos: Pos::NONE,
            name: name.into(),
            obj: None,
        }
    }

    pub fn with_obj(mut self, obj: Object) -> Self {
        self.obj = Some(obj);
        self
    }

    pub fn is_blank(&self) -> bool {
        self.name == "_"
    }
}

/// `...T` in a parameter list or `[...]T` in an array type.
#[derive(Debug, Clone, PartialEq)]
pub struct Ellipsis {
    pub ellipsis: Pos,
    pub elt: Option<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BasicLit {
    pub value_pos: Pos,
    /// One of `INT`, `FLOAT`, `IMAG`, `CHAR` or `STRING`.
    pub kind: Token,
    /// Literal source text, e.g. `42`, `0x7f`, `'a'` or `"foo"`.
    pub value: String,
}

impl BasicLit {
    pub fn new(kind: Token, value: impl Into<String>) -> Self {
        BasicLit {
            value_pos: Pos::NONE,
            kind,
            value: value.into(),
        }
    }

    pub fn string(value: &str) -> Self {
        Self::new(Token::String, format!("{value:?}"))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FuncLit {
    pub ty: FuncType,
    pub body: BlockStmt,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompositeLit {
    pub ty: Option<Expr>,
    pub lbrace: Pos,
    pub elts: Vec<Expr>,
    pub rbrace: Pos,
    /// True if source expressions are missing from `elts`.
    pub incomplete: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParenExpr {
    pub lparen: Pos,
    pub x: Expr,
    pub rparen: Pos,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectorExpr {
    pub x: Expr,
    pub sel: Ident,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IndexExpr {
    pub x: Expr,
    pub lbrack: Pos,
    pub index: Expr,
    pub rbrack: Pos,
}

/// A generic instantiation with more than one index, `x[A, B]`.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexListExpr {
    pub x: Expr,
    pub lbrack: Pos,
    pub indices: Vec<Expr>,
    pub rbrack: Pos,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SliceExpr {
    pub x: Expr,
    pub lbrack: Pos,
    pub low: Option<Expr>,
    pub high: Option<Expr>,
    pub max: Option<Expr>,
    /// True for the three-index form `x[low:high:max]`.
    pub slice3: bool,
    pub rbrack: Pos,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypeAssertExpr {
    pub x: Expr,
    pub lparen: Pos,
    /// `None` for the `x.(type)` form of a type switch.
    pub ty: Option<Expr>,
    pub rparen: Pos,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub fun: Expr,
    pub lparen: Pos,
    pub args: Vec<Expr>,
    /// Position of a trailing `...`, or `Pos::NONE`. Kept as a marker
    /// through encoding.
    pub ellipsis: Pos,
    pub rparen: Pos,
}

impl CallExpr {
    pub fn new(fun: Expr, args: Vec<Expr>) -> Self {
        CallExpr {
            fun,
            lparen: Pos::NONE,
            args,
            ellipsis: Pos::NONE,
            rparen: Pos::NONE,
        }
    }
}

/// `*x`, either a dereference or a pointer type.
#[derive(Debug, Clone, PartialEq)]
pub struct StarExpr {
    pub star: Pos,
    pub x: Expr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpr {
    pub op_pos: Pos,
    pub op: Token,
    pub x: Expr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub x: Expr,
    pub op_pos: Pos,
    pub op: Token,
    pub y: Expr,
}

impl BinaryExpr {
    pub fn new(x: Expr, op: Token, y: Expr) -> Self {
        BinaryExpr {
            x,
            op_pos: Pos::NONE,
            op,
            y,
        }
    }
}

/// `key: value` inside a composite literal.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyValueExpr {
    pub key: Expr,
    pub colon: Pos,
    pub value: Expr,
}

node_from!(Expr::Bad(BadExpr));
node_from!(Expr::Ident(Ident));
node_from!(Expr::Ellipsis(box Ellipsis));
node_from!(Expr::BasicLit(BasicLit));
node_from!(Expr::FuncLit(box FuncLit));
node_from!(Expr::CompositeLit(box CompositeLit));
node_from!(Expr::Paren(box ParenExpr));
node_from!(Expr::Selector(box SelectorExpr));
node_from!(Expr::Index(box IndexExpr));
node_from!(Expr::IndexList(box IndexListExpr));
node_from!(Expr::Slice(box SliceExpr));
node_from!(Expr::TypeAssert(box TypeAssertExpr));
node_from!(Expr::Call(box CallExpr));
node_from!(Expr::Star(box StarExpr));
node_from!(Expr::Unary(box UnaryExpr));
node_from!(Expr::Binary(box BinaryExpr));
node_from!(Expr::KeyValue(box KeyValueExpr));
