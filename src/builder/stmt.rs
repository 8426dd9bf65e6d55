use super::Fields;
use crate::ast::*;
use crate::error::DecodeError;

type Decoded = Result<Node, DecodeError>;

fn stmt(s: impl Into<Stmt>) -> Decoded {
    Ok(Node::Stmt(s.into()))
}

pub(crate) fn decode_bad_stmt(f: &mut Fields<'_>) -> Decoded {
    stmt(BadStmt {
        from: f.pos("from")?,
        to: f.pos("to")?,
    })
}

pub(crate) fn decode_decl_stmt(f: &mut Fields<'_>) -> Decoded {
    stmt(DeclStmt {
        decl: f.node("decl")?,
    })
}

pub(crate) fn decode_empty_stmt(f: &mut Fields<'_>) -> Decoded {
    stmt(EmptyStmt {
        semicolon: f.pos("semicolon")?,
        implicit: f.boolean("implicit")?,
    })
}

pub(crate) fn decode_labeled_stmt(f: &mut Fields<'_>) -> Decoded {
    stmt(LabeledStmt {
        label: f.node("label")?,
        colon: f.pos("colon")?,
        stmt: f.node("stmt")?,
    })
}

pub(crate) fn decode_expr_stmt(f: &mut Fields<'_>) -> Decoded {
    stmt(ExprStmt { x: f.node("x")? })
}

pub(crate) fn decode_send_stmt(f: &mut Fields<'_>) -> Decoded {
    stmt(SendStmt {
        chan: f.node("chan")?,
        arrow: f.pos("arrow")?,
        value: f.node("value")?,
    })
}

pub(crate) fn decode_inc_dec_stmt(f: &mut Fields<'_>) -> Decoded {
    stmt(IncDecStmt {
        x: f.node("x")?,
        tok_pos: f.pos("tokpos")?,
        tok: f.token("tok", TokenClass::IncDec)?,
    })
}

pub(crate) fn decode_assign_stmt(f: &mut Fields<'_>) -> Decoded {
    stmt(AssignStmt {
        lhs: f.list("lhs")?,
        tok_pos: f.pos("tokpos")?,
        tok: f.token("tok", TokenClass::Assign)?,
        rhs: f.list("rhs")?,
    })
}

pub(crate) fn decode_go_stmt(f: &mut Fields<'_>) -> Decoded {
    stmt(GoStmt {
        go_pos: f.pos("go")?,
        call: f.node("call")?,
    })
}

pub(crate) fn decode_defer_stmt(f: &mut Fields<'_>) -> Decoded {
    stmt(DeferStmt {
        defer_pos: f.pos("defer")?,
        call: f.node("call")?,
    })
}

pub(crate) fn decode_return_stmt(f: &mut Fields<'_>) -> Decoded {
    stmt(ReturnStmt {
        return_pos: f.pos("return")?,
        results: f.list("results")?,
    })
}

pub(crate) fn decode_branch_stmt(f: &mut Fields<'_>) -> Decoded {
    stmt(BranchStmt {
        tok_pos: f.pos("tokpos")?,
        tok: f.token("tok", TokenClass::Branch)?,
        label: f.opt("label")?,
    })
}

pub(crate) fn decode_block_stmt(f: &mut Fields<'_>) -> Decoded {
    stmt(BlockStmt {
        lbrace: f.pos("lbrace")?,
        list: f.list("list")?,
        rbrace: f.pos("rbrace")?,
    })
}

pub(crate) fn decode_if_stmt(f: &mut Fields<'_>) -> Decoded {
    stmt(IfStmt {
        if_pos: f.pos("if")?,
        init: f.opt("init")?,
        cond: f.node("cond")?,
        body: f.node("body")?,
        els: f.opt("else")?,
    })
}

pub(crate) fn decode_case_clause(f: &mut Fields<'_>) -> Decoded {
    stmt(CaseClause {
        case_pos: f.pos("case")?,
        list: f.opt_list("list")?,
        colon: f.pos("colon")?,
        body: f.list("body")?,
    })
}

pub(crate) fn decode_switch_stmt(f: &mut Fields<'_>) -> Decoded {
    stmt(SwitchStmt {
        switch_pos: f.pos("switch")?,
        init: f.opt("init")?,
        tag: f.opt("tag")?,
        body: f.node("body")?,
    })
}

pub(crate) fn decode_type_switch_stmt(f: &mut Fields<'_>) -> Decoded {
    stmt(TypeSwitchStmt {
        switch_pos: f.pos("switch")?,
        init: f.opt("init")?,
        assign: f.node("assign")?,
        body: f.node("body")?,
    })
}

pub(crate) fn decode_comm_clause(f: &mut Fields<'_>) -> Decoded {
    stmt(CommClause {
        case_pos: f.pos("case")?,
        comm: f.opt("comm")?,
        colon: f.pos("colon")?,
        body: f.list("body")?,
    })
}

pub(crate) fn decode_select_stmt(f: &mut Fields<'_>) -> Decoded {
    stmt(SelectStmt {
        select_pos: f.pos("select")?,
        body: f.node("body")?,
    })
}

pub(crate) fn decode_for_stmt(f: &mut Fields<'_>) -> Decoded {
    stmt(ForStmt {
        for_pos: f.pos("for")?,
        init: f.opt("init")?,
        cond: f.opt("cond")?,
        post: f.opt("post")?,
        body: f.node("body")?,
    })
}

pub(crate) fn decode_range_stmt(f: &mut Fields<'_>) -> Decoded {
    stmt(RangeStmt {
        for_pos: f.pos("for")?,
        key: f.opt("key")?,
        value: f.opt("value")?,
        tok_pos: f.pos("tokpos")?,
        tok: f.token("tok", TokenClass::Range)?,
        range_pos: f.pos("range")?,
        x: f.node("x")?,
        body: f.node("body")?,
    })
}
