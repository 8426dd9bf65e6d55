use super::{Encode, Writer};
use crate::ast::*;
use crate::error::EncodeError;

impl Encode for Stmt {
    fn encode(&self, w: &mut Writer) -> Result<(), EncodeError> {
        match self {
            Stmt::Bad(x) => x.encode(w),
            Stmt::Decl(x) => x.encode(w),
            Stmt::Empty(x) => x.encode(w),
            Stmt::Labeled(x) => x.encode(w),
            Stmt::Expr(x) => x.encode(w),
            Stmt::Send(x) => x.encode(w),
            Stmt::IncDec(x) => x.encode(w),
            Stmt::Assign(x) => x.encode(w),
            Stmt::Go(x) => x.encode(w),
            Stmt::Defer(x) => x.encode(w),
            Stmt::Return(x) => x.encode(w),
            Stmt::Branch(x) => x.encode(w),
            Stmt::Block(x) => x.encode(w),
            Stmt::If(x) => x.encode(w),
            Stmt::CaseClause(x) => x.encode(w),
            Stmt::Switch(x) => x.encode(w),
            Stmt::TypeSwitch(x) => x.encode(w),
            Stmt::CommClause(x) => x.encode(w),
            Stmt::Select(x) => x.encode(w),
            Stmt::For(x) => x.encode(w),
            Stmt::Range(x) => x.encode(w),
        }
    }
}

impl Encode for BadStmt {
    fn encode(&self, w: &mut Writer) -> Result<(), EncodeError> {
        w.node("BadStmt", |n| {
            n.pos("from", self.from)?;
            n.pos("to", self.to)
        })
    }
}

impl Encode for DeclStmt {
    fn encode(&self, w: &mut Writer) -> Result<(), EncodeError> {
        w.node("DeclStmt", |n| n.node("decl", &self.decl))
    }
}

impl Encode for EmptyStmt {
    fn encode(&self, w: &mut Writer) -> Result<(), EncodeError> {
        w.node("EmptyStmt", |n| {
            n.pos("semicolon", self.semicolon)?;
            n.boolean("implicit", self.implicit)
        })
    }
}

impl Encode for LabeledStmt {
    fn encode(&self, w: &mut Writer) -> Result<(), EncodeError> {
        w.node("LabeledStmt", |n| {
            n.node("label", &self.label)?;
            n.pos("colon", self.colon)?;
            n.node("stmt", &self.stmt)
        })
    }
}

impl Encode for ExprStmt {
    fn encode(&self, w: &mut Writer) -> Result<(), EncodeError> {
        w.node("ExprStmt", |n| n.node("x", &self.x))
    }
}

impl Encode for SendStmt {
    fn encode(&self, w: &mut Writer) -> Result<(), EncodeError> {
        w.node("SendStmt", |n| {
            n.node("chan", &self.chan)?;
            n.pos("arrow", self.arrow)?;
            n.node("value", &self.value)
        })
    }
}

impl Encode for IncDecStmt {
    fn encode(&self, w: &mut Writer) -> Result<(), EncodeError> {
        w.node("IncDecStmt", |n| {
            n.node("x", &self.x)?;
            n.pos("tokpos", self.tok_pos)?;
            n.token("tok", self.tok, TokenClass::IncDec)
        })
    }
}

impl Encode for AssignStmt {
    fn encode(&self, w: &mut Writer) -> Result<(), EncodeError> {
        w.node("AssignStmt", |n| {
            n.list("lhs", &self.lhs)?;
            n.pos("tokpos", self.tok_pos)?;
            n.token("tok", self.tok, TokenClass::Assign)?;
            n.list("rhs", &self.rhs)
        })
    }
}

impl Encode for GoStmt {
    fn encode(&self, w: &mut Writer) -> Result<(), EncodeError> {
        w.node("GoStmt", |n| {
            n.pos("go", self.go_pos)?;
            n.node("call", &self.call)
        })
    }
}

impl Encode for DeferStmt {
    fn encode(&self, w: &mut Writer) -> Result<(), EncodeError> {
        w.node("DeferStmt", |n| {
            n.pos("defer", self.defer_pos)?;
            n.node("call", &self.call)
        })
    }
}

impl Encode for ReturnStmt {
    fn encode(&self, w: &mut Writer) -> Result<(), EncodeError> {
        w.node("ReturnStmt", |n| {
            n.pos("return", self.return_pos)?;
            n.list("results", &self.results)
        })
    }
}

impl Encode for BranchStmt {
    fn encode(&self, w: &mut Writer) -> Result<(), EncodeError> {
        w.node("BranchStmt", |n| {
            n.pos("tokpos", self.tok_pos)?;
            n.token("tok", self.tok, TokenClass::Branch)?;
            n.opt("label", self.label.as_ref())
        })
    }
}

impl Encode for BlockStmt {
    fn encode(&self, w: &mut Writer) -> Result<(), EncodeError> {
        w.node("BlockStmt", |n| {
            n.pos("lbrace", self.lbrace)?;
            n.list("list", &self.list)?;
            n.pos("rbrace", self.rbrace)
        })
    }
}

impl Encode for IfStmt {
    fn encode(&self, w: &mut Writer) -> Result<(), EncodeError> {
        w.node("IfStmt", |n| {
            n.pos("if", self.if_pos)?;
            n.opt("init", self.init.as_ref())?;
            n.node("cond", &self.cond)?;
            n.node("body", &self.body)?;
            n.opt("else", self.els.as_ref())
        })
    }
}

impl Encode for CaseClause {
    fn encode(&self, w: &mut Writer) -> Result<(), EncodeError> {
        w.node("CaseClause", |n| {
            n.pos("case", self.case_pos)?;
            n.opt_list("list", self.list.as_deref())?;
            n.pos("colon", self.colon)?;
            n.list("body", &self.body)
        })
    }
}

impl Encode for SwitchStmt {
    fn encode(&self, w: &mut Writer) -> Result<(), EncodeError> {
        w.node("SwitchStmt", |n| {
            n.pos("switch", self.switch_pos)?;
            n.opt("init", self.init.as_ref())?;
            n.opt("tag", self.tag.as_ref())?;
            n.node("body", &self.body)
        })
    }
}

impl Encode for TypeSwitchStmt {
    fn encode(&self, w: &mut Writer) -> Result<(), EncodeError> {
        w.node("TypeSwitchStmt", |n| {
            n.pos("switch", self.switch_pos)?;
            n.opt("init", self.init.as_ref())?;
            n.node("assign", &self.assign)?;
            n.node("body", &self.body)
        })
    }
}

impl Encode for CommClause {
    fn encode(&self, w: &mut Writer) -> Result<(), EncodeError> {
        w.node("CommClause", |n| {
            n.pos("case", self.case_pos)?;
            n.opt("comm", self.comm.as_ref())?;
            n.pos("colon", self.colon)?;
            n.list("body", &self.body)
        })
    }
}

impl Encode for SelectStmt {
    fn encode(&self, w: &mut Writer) -> Result<(), EncodeError> {
        w.node("SelectStmt", |n| {
            n.pos("select", self.select_pos)?;
            n.node("body", &self.body)
        })
    }
}

impl Encode for ForStmt {
    fn encode(&self, w: &mut Writer) -> Result<(), EncodeError> {
        w.node("ForStmt", |n| {
            n.pos("for", self.for_pos)?;
            n.opt("init", self.init.as_ref())?;
            n.opt("cond", self.cond.as_ref())?;
            n.opt("post", self.post.as_ref())?;
            n.node("body", &self.body)
        })
    }
}

impl Encode for RangeStmt {
    fn encode(&self, w: &mut Writer) -> Result<(), EncodeError> {
        w.node("RangeStmt", |n| {
            n.pos("for", self.for_pos)?;
            n.opt("key", self.key.as_ref())?;
            n.opt("value", self.value.as_ref())?;
            n.pos("tokpos", self.tok_pos)?;
            n.token("tok", self.tok, TokenClass::Range)?;
            n.pos("range", self.range_pos)?;
            n.node("x", &self.x)?;
            n.node("body", &self.body)
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::*;
    use crate::error::EncodeError;
    use crate::writer::to_canonical;

    #[test]
    fn test_default_case_is_nil() {
        let clause = Stmt::from(CaseClause::default());
        assert_eq!(
            to_canonical(&clause).unwrap(),
            "(CaseClause :case 0 :list nil :colon 0 :body ())"
        );

        let clause = Stmt::from(CaseClause {
            list: Some(vec![]),
            ..CaseClause::default()
        });
        assert_eq!(
            to_canonical(&clause).unwrap(),
            "(CaseClause :case 0 :list () :colon 0 :body ())"
        );
    }

    #[test]
    fn test_define_statement() {
        let assign = Stmt::from(AssignStmt::new(
            vec![Expr::ident("x")],
            Token::Define,
            vec![BasicLit::new(Token::Int, "1").into()],
        ));
        assert_eq!(
            to_canonical(&assign).unwrap(),
            concat!(
                r#"(AssignStmt :lhs ((Ident :namepos 0 :name "x" :obj nil)) :tokpos 0 :tok DEFINE "#,
                r#":rhs ((BasicLit :valuepos 0 :kind INT :value "1")))"#
            )
        );
    }

    #[test]
    fn test_branch_token_class() {
        let branch = Stmt::from(BranchStmt {
            tok_pos: Pos::NONE,
            tok: Token::Return,
            label: None,
        });
        assert!(matches!(
            to_canonical(&branch),
            Err(EncodeError::InvalidToken { ref node, .. }) if node == "BranchStmt"
        ));
    }

    #[test]
    fn test_errors_nest_through_blocks() {
        let block = Stmt::from(BlockStmt::new(vec![
            Stmt::from(EmptyStmt::default()),
            Stmt::expr(Expr::ident("")),
        ]));
        let err = to_canonical(&block).unwrap_err();
        assert_eq!(err.root_cause(), &EncodeError::EmptyIdent);
        assert!(matches!(
            err,
            EncodeError::InField { ref node, index: Some(1), .. } if node == "BlockStmt"
        ));
    }
}
