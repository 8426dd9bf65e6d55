use super::{node_from, CallExpr, Decl, Expr, Ident, Pos, Token};

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Bad(BadStmt),
    Decl(Box<DeclStmt>),
    Empty(EmptyStmt),
    Labeled(Box<LabeledStmt>),
    Expr(Box<ExprStmt>),
    Send(Box<SendStmt>),
    IncDec(Box<IncDecStmt>),
    Assign(Box<AssignStmt>),
    Go(Box<GoStmt>),
    Defer(Box<DeferStmt>),
    Return(Box<ReturnStmt>),
    Branch(Box<BranchStmt>),
    Block(Box<BlockStmt>),
    If(Box<IfStmt>),
    CaseClause(Box<CaseClause>),
    Switch(Box<SwitchStmt>),
    TypeSwitch(Box<TypeSwitchStmt>),
    CommClause(Box<CommClause>),
    Select(Box<SelectStmt>),
    For(Box<ForStmt>),
    Range(Box<RangeStmt>),
}

impl Stmt {
    pub fn type_name(&self) -> &'static str {
        match self {
            Stmt::Bad(_) => "BadStmt",
            Stmt::Decl(_) => "DeclStmt",
            Stmt::Empty(_) => "EmptyStmt",
            Stmt::Labeled(_) => "LabeledStmt",
            Stmt::Expr(_) => "ExprStmt",
            Stmt::Send(_) => "SendStmt",
            Stmt::IncDec(_) => "IncDecStmt",
            Stmt::Assign(_) => "AssignStmt",
            Stmt::Go(_) => "GoStmt",
            Stmt::Defer(_) => "DeferStmt",
            Stmt::Return(_) => "ReturnStmt",
            Stmt::Branch(_) => "BranchStmt",
            Stmt::Block(_) => "BlockStmt",
            Stmt::If(_) => "IfStmt",
            Stmt::CaseClause(_) => "CaseClause",
            Stmt::Switch(_) => "SwitchStmt",
            Stmt::TypeSwitch(_) => "TypeSwitchStmt",
            Stmt::CommClause(_) => "CommClause",
            Stmt::Select(_) => "SelectStmt",
            Stmt::For(_) => "ForStmt",
            Stmt::Range(_) => "RangeStmt",
        }
    }

    /// Shorthand for an expression statement.
    pub fn expr(x: impl Into<Expr>) -> Stmt {
        Stmt::Expr(Box::new(ExprStmt { x: x.into() }))
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct BadStmt {
    pub from: Pos,
    pub to: Pos,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeclStmt {
    /// A `GenDecl` with `CONST`, `TYPE` or `VAR`.
    pub decl: Decl,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct EmptyStmt {
    pub semicolon: Pos,
    /// True if the semicolon was inserted by the scanner.
    pub implicit: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LabeledStmt {
    pub label: Ident,
    pub colon: Pos,
    pub stmt: Stmt,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExprStmt {
    pub x: Expr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SendStmt {
    pub chan: Expr,
    pub arrow: Pos,
    pub value: Expr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IncDecStmt {
    pub x: Expr,
    pub tok_pos: Pos,
    /// `INC` or `DEC`.
    pub tok: Token,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssignStmt {
    pub lhs: Vec<Expr>,
    pub tok_pos: Pos,
    /// `ASSIGN`, `DEFINE` or an `op=` token.
    pub tok: Token,
    pub rhs: Vec<Expr>,
}

impl AssignStmt {
    pub fn new(lhs: Vec<Expr>, tok: Token, rhs: Vec<Expr>) -> Self {
        AssignStmt {
            lhs,
            tok_pos: Pos::NONE,
            tok,
            rhs,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GoStmt {
    pub go_pos: Pos,
    pub call: CallExpr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeferStmt {
    pub defer_pos: Pos,
    pub call: CallExpr,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReturnStmt {
    pub return_pos: Pos,
    pub results: Vec<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BranchStmt {
    pub tok_pos: Pos,
    /// `BREAK`, `CONTINUE`, `GOTO` or `FALLTHROUGH`.
    pub tok: Token,
    pub label: Option<Ident>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct BlockStmt {
    pub lbrace: Pos,
    pub list: Vec<Stmt>,
    pub rbrace: Pos,
}

impl BlockStmt {
    pub fn new(list: Vec<Stmt>) -> Self {
        BlockStmt {
            lbrace: Pos::NONE,
            list,
            rbrace: Pos::NONE,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub if_pos: Pos,
    pub init: Option<Stmt>,
    pub cond: Expr,
    pub body: BlockStmt,
    /// A `BlockStmt` or a nested `IfStmt`.
    pub els: Option<Stmt>,
}

/// A `case` or `default` clause of an expression or type switch.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CaseClause {
    pub case_pos: Pos,
    /// `None` marks the `default` clause; `Some(vec![])` is never produced
    /// by Go's parser but is kept distinct.
    pub list: Option<Vec<Expr>>,
    pub colon: Pos,
    pub body: Vec<Stmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SwitchStmt {
    pub switch_pos: Pos,
    pub init: Option<Stmt>,
    pub tag: Option<Expr>,
    /// Holds `CaseClause` statements only.
    pub body: BlockStmt,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypeSwitchStmt {
    pub switch_pos: Pos,
    pub init: Option<Stmt>,
    /// `x := y.(type)` or `y.(type)`.
    pub assign: Stmt,
    pub body: BlockStmt,
}

/// A `case` or `default` clause of a select statement.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CommClause {
    pub case_pos: Pos,
    /// Send or receive statement; `None` marks the `default` clause.
    pub comm: Option<Stmt>,
    pub colon: Pos,
    pub body: Vec<Stmt>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SelectStmt {
    pub select_pos: Pos,
    pub body: BlockStmt,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ForStmt {
    pub for_pos: Pos,
    pub init: Option<Stmt>,
    pub cond: Option<Expr>,
    pub post: Option<Stmt>,
    pub body: BlockStmt,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RangeStmt {
    pub for_pos: Pos,
    pub key: Option<Expr>,
    pub value: Option<Expr>,
    pub tok_pos: Pos,
    /// `ILLEGAL` when there is no key, otherwise `ASSIGN` or `DEFINE`.
    pub tok: Token,
    pub range_pos: Pos,
    pub x: Expr,
    pub body: BlockStmt,
}

node_from!(Stmt::Bad(BadStmt));
node_from!(Stmt::Decl(box DeclStmt));
node_from!(Stmt::Empty(EmptyStmt));
node_from!(Stmt::Labeled(box LabeledStmt));
node_from!(Stmt::Expr(box ExprStmt));
node_from!(Stmt::Send(box SendStmt));
node_from!(Stmt::IncDec(box IncDecStmt));
node_from!(Stmt::Assign(box AssignStmt));
node_from!(Stmt::Go(box GoStmt));
node_from!(Stmt::Defer(box DeferStmt));
node_from!(Stmt::Return(box ReturnStmt));
node_from!(Stmt::Branch(box BranchStmt));
node_from!(Stmt::Block(box BlockStmt));
node_from!(Stmt::If(box IfStmt));
node_from!(Stmt::CaseClause(box CaseClause));
node_from!(Stmt::Switch(box SwitchStmt));
node_from!(Stmt::TypeSwitch(box TypeSwitchStmt));
node_from!(Stmt::CommClause(box CommClause));
node_from!(Stmt::Select(box SelectStmt));
node_from!(Stmt::For(box ForStmt));
node_from!(Stmt::Range(box RangeStmt));
