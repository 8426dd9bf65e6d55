//! Type expressions. In Go these share the expression namespace, so each
//! is also an [`Expr`] variant.

use super::{node_from, ChanDir, Expr, FieldList, Pos};

/// `[len]elt`, or a slice type when `len` is `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayType {
    pub lbrack: Pos,
    pub len: Option<Expr>,
    pub elt: Expr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StructType {
    pub struct_pos: Pos,
    pub fields: FieldList,
    pub incomplete: bool,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FuncType {
    /// `Pos::NONE` when the `func` keyword is absent, as in method signatures.
    pub func_pos: Pos,
    pub type_params: Option<FieldList>,
    pub params: FieldList,
    pub results: Option<FieldList>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InterfaceType {
    pub interface_pos: Pos,
    pub methods: FieldList,
    pub incomplete: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapType {
    pub map_pos: Pos,
    pub key: Expr,
    pub value: Expr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChanType {
    pub begin: Pos,
    /// Position of `<-`, or `Pos::NONE` for a bidirectional channel.
    pub arrow: Pos,
    pub dir: ChanDir,
    pub value: Expr,
}

node_from!(Expr::ArrayType(box ArrayType));
node_from!(Expr::StructType(box StructType));
node_from!(Expr::FuncType(box FuncType));
node_from!(Expr::InterfaceType(box InterfaceType));
node_from!(Expr::MapType(box MapType));
node_from!(Expr::ChanType(box ChanType));
