//! The node registry: every node type the codec knows, its category, its
//! canonical field order and its decode function.
//!
//! The builder decodes through this table. The writer dispatches with an
//! exhaustive `match` over the AST enums and checks each field it emits
//! against the same field list, so the two sides cannot drift apart.

use crate::ast::Node;
use crate::builder::{decl, expr, stmt, Fields};
use crate::error::DecodeError;
use log::trace;
use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Expr,
    Type,
    Stmt,
    Spec,
    Decl,
    Support,
}

impl Category {
    pub fn is_expr(self) -> bool {
        matches!(self, Category::Expr | Category::Type)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Category::Expr => "expression",
            Category::Type => "type",
            Category::Stmt => "statement",
            Category::Spec => "spec",
            Category::Decl => "declaration",
            Category::Support => "support node",
        })
    }
}

pub type DecodeFn = fn(&mut Fields<'_>) -> Result<Node, DecodeError>;

/// The canonical shape of one node type.
pub struct NodeShape {
    pub name: &'static str,
    pub category: Category,
    /// Field keywords in the order the writer emits them.
    pub fields: &'static [&'static str],
    pub(crate) decode: DecodeFn,
}

impl fmt::Debug for NodeShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeShape")
            .field("name", &self.name)
            .field("category", &self.category)
            .field("fields", &self.fields)
            .finish()
    }
}

impl NodeShape {
    pub fn field_index(&self, field: &str) -> Option<usize> {
        self.fields.iter().position(|f| *f == field)
    }
}

macro_rules! shapes {
    ($($name:ident : $category:ident [$($field:literal)*] => $decode:path,)*) => {
        static SHAPES: &[NodeShape] = &[
            $(NodeShape {
                name: stringify!($name),
                category: Category::$category,
                fields: &[$($field),*],
                decode: $decode,
            },)*
        ];
    };
}

shapes! {
    Comment: Support ["slash" "text"] => decl::decode_comment,
    CommentGroup: Support ["list"] => decl::decode_comment_group,
    Field: Support ["doc" "names" "type" "tag" "comment"] => decl::decode_field,
    FieldList: Support ["opening" "list" "closing"] => decl::decode_field_list,
    Object: Support ["kind" "name"] => decl::decode_object,
    Scope: Support ["outer" "objects"] => decl::decode_scope,

    BadExpr: Expr ["from" "to"] => expr::decode_bad_expr,
    Ident: Expr ["namepos" "name" "obj"] => expr::decode_ident,
    Ellipsis: Expr ["ellipsis" "elt"] => expr::decode_ellipsis,
    BasicLit: Expr ["valuepos" "kind" "value"] => expr::decode_basic_lit,
    FuncLit: Expr ["type" "body"] => expr::decode_func_lit,
    CompositeLit: Expr ["type" "lbrace" "elts" "rbrace" "incomplete"] => expr::decode_composite_lit,
    ParenExpr: Expr ["lparen" "x" "rparen"] => expr::decode_paren_expr,
    SelectorExpr: Expr ["x" "sel"] => expr::decode_selector_expr,
    IndexExpr: Expr ["x" "lbrack" "index" "rbrack"] => expr::decode_index_expr,
    IndexListExpr: Expr ["x" "lbrack" "indices" "rbrack"] => expr::decode_index_list_expr,
    SliceExpr: Expr ["x" "lbrack" "low" "high" "max" "slice3" "rbrack"] => expr::decode_slice_expr,
    TypeAssertExpr: Expr ["x" "lparen" "type" "rparen"] => expr::decode_type_assert_expr,
    CallExpr: Expr ["fun" "lparen" "args" "ellipsis" "rparen"] => expr::decode_call_expr,
    StarExpr: Expr ["star" "x"] => expr::decode_star_expr,
    UnaryExpr: Expr ["oppos" "op" "x"] => expr::decode_unary_expr,
    BinaryExpr: Expr ["x" "oppos" "op" "y"] => expr::decode_binary_expr,
    KeyValueExpr: Expr ["key" "colon" "value"] => expr::decode_key_value_expr,

    ArrayType: Type ["lbrack" "len" "elt"] => expr::decode_array_type,
    StructType: Type ["struct" "fields" "incomplete"] => expr::decode_struct_type,
    FuncType: Type ["func" "typeparams" "params" "results"] => expr::decode_func_type,
    InterfaceType: Type ["interface" "methods" "incomplete"] => expr::decode_interface_type,
    MapType: Type ["map" "key" "value"] => expr::decode_map_type,
    ChanType: Type ["begin" "arrow" "dir" "value"] => expr::decode_chan_type,

    BadStmt: Stmt ["from" "to"] => stmt::decode_bad_stmt,
    DeclStmt: Stmt ["decl"] => stmt::decode_decl_stmt,
    EmptyStmt: Stmt ["semicolon" "implicit"] => stmt::decode_empty_stmt,
    LabeledStmt: Stmt ["label" "colon" "stmt"] => stmt::decode_labeled_stmt,
    ExprStmt: Stmt ["x"] => stmt::decode_expr_stmt,
    SendStmt: Stmt ["chan" "arrow" "value"] => stmt::decode_send_stmt,
    IncDecStmt: Stmt ["x" "tokpos" "tok"] => stmt::decode_inc_dec_stmt,
    AssignStmt: Stmt ["lhs" "tokpos" "tok" "rhs"] => stmt::decode_assign_stmt,
    GoStmt: Stmt ["go" "call"] => stmt::decode_go_stmt,
    DeferStmt: Stmt ["defer" "call"] => stmt::decode_defer_stmt,
    ReturnStmt: Stmt ["return" "results"] => stmt::decode_return_stmt,
    BranchStmt: Stmt ["tokpos" "tok" "label"] => stmt::decode_branch_stmt,
    BlockStmt: Stmt ["lbrace" "list" "rbrace"] => stmt::decode_block_stmt,
    IfStmt: Stmt ["if" "init" "cond" "body" "else"] => stmt::decode_if_stmt,
    CaseClause: Stmt ["case" "list" "colon" "body"] => stmt::decode_case_clause,
    SwitchStmt: Stmt ["switch" "init" "tag" "body"] => stmt::decode_switch_stmt,
    TypeSwitchStmt: Stmt ["switch" "init" "assign" "body"] => stmt::decode_type_switch_stmt,
    CommClause: Stmt ["case" "comm" "colon" "body"] => stmt::decode_comm_clause,
    SelectStmt: Stmt ["select" "body"] => stmt::decode_select_stmt,
    ForStmt: Stmt ["for" "init" "cond" "post" "body"] => stmt::decode_for_stmt,
    RangeStmt: Stmt ["for" "key" "value" "tokpos" "tok" "range" "x" "body"] => stmt::decode_range_stmt,

    ImportSpec: Spec ["doc" "name" "path" "comment" "endpos"] => decl::decode_import_spec,
    ValueSpec: Spec ["doc" "names" "type" "values" "comment"] => decl::decode_value_spec,
    TypeSpec: Spec ["doc" "name" "typeparams" "assign" "type" "comment"] => decl::decode_type_spec,

    BadDecl: Decl ["from" "to"] => decl::decode_bad_decl,
    GenDecl: Decl ["doc" "tokpos" "tok" "lparen" "specs" "rparen"] => decl::decode_gen_decl,
    FuncDecl: Decl ["doc" "recv" "name" "type" "body"] => decl::decode_func_decl,

    File: Support ["doc" "package" "name" "decls" "filestart" "fileend" "scope" "imports" "unresolved" "comments" "goversion"] => decl::decode_file,
}

fn index() -> &'static HashMap<&'static str, &'static NodeShape> {
    static INDEX: OnceLock<HashMap<&'static str, &'static NodeShape>> = OnceLock::new();
    INDEX.get_or_init(|| SHAPES.iter().map(|shape| (shape.name, shape)).collect())
}

/// Finds the shape registered under a canonical type name.
pub fn lookup(name: &str) -> Option<&'static NodeShape> {
    let shape = index().get(name).copied();
    trace!("registry lookup {name}: {}", shape.is_some());
    shape
}

/// All registered shapes, in registration order.
pub fn shapes() -> &'static [NodeShape] {
    SHAPES
}
