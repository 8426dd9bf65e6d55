use super::Fields;
use crate::ast::*;
use crate::error::DecodeError;

type Decoded = Result<Node, DecodeError>;

fn expr(x: impl Into<Expr>) -> Decoded {
    Ok(Node::Expr(x.into()))
}

pub(crate) fn decode_bad_expr(f: &mut Fields<'_>) -> Decoded {
    expr(BadExpr {
        from: f.pos("from")?,
        to: f.pos("to")?,
    })
}

pub(crate) fn decode_ident(f: &mut Fields<'_>) -> Decoded {
    let name_pos = f.pos("namepos")?;
    let name = f.string("name")?;
    if name.is_empty() {
        return Err(DecodeError::in_field(
            f.node_name(),
            "name",
            None,
            DecodeError::InvalidLiteral {
                kind: "identifier".to_string(),
                literal: "\"\"".to_string(),
                position: f.position,
            },
        ));
    }
    expr(Ident {
        name_pos,
        name,
        obj: f.opt("obj")?,
    })
}

pub(crate) fn decode_ellipsis(f: &mut Fields<'_>) -> Decoded {
    expr(Ellipsis {
        ellipsis: f.pos("ellipsis")?,
        elt: f.opt("elt")?,
    })
}

pub(crate) fn decode_basic_lit(f: &mut Fields<'_>) -> Decoded {
    expr(BasicLit {
        value_pos: f.pos("valuepos")?,
        kind: f.token("kind", TokenClass::Literal)?,
        value: f.string("value")?,
    })
}

pub(crate) fn decode_func_lit(f: &mut Fields<'_>) -> Decoded {
    expr(FuncLit {
        ty: f.node("type")?,
        body: f.node("body")?,
    })
}

pub(crate) fn decode_composite_lit(f: &mut Fields<'_>) -> Decoded {
    expr(CompositeLit {
        ty: f.opt("type")?,
        lbrace: f.pos("lbrace")?,
        elts: f.list("elts")?,
        rbrace: f.pos("rbrace")?,
        incomplete: f.boolean("incomplete")?,
    })
}

pub(crate) fn decode_paren_expr(f: &mut Fields<'_>) -> Decoded {
    expr(ParenExpr {
        lparen: f.pos("lparen")?,
        x: f.node("x")?,
        rparen: f.pos("rparen")?,
    })
}

pub(crate) fn decode_selector_expr(f: &mut Fields<'_>) -> Decoded {
    expr(SelectorExpr {
        x: f.node("x")?,
        sel: f.node("sel")?,
    })
}

pub(crate) fn decode_index_expr(f: &mut Fields<'_>) -> Decoded {
    expr(IndexExpr {
        x: f.node("x")?,
        lbrack: f.pos("lbrack")?,
        index: f.node("index")?,
        rbrack: f.pos("rbrack")?,
    })
}

pub(crate) fn decode_index_list_expr(f: &mut Fields<'_>) -> Decoded {
    expr(IndexListExpr {
        x: f.node("x")?,
        lbrack: f.pos("lbrack")?,
        indices: f.list("indices")?,
        rbrack: f.pos("rbrack")?,
    })
}

pub(crate) fn decode_slice_expr(f: &mut Fields<'_>) -> Decoded {
    expr(SliceExpr {
        x: f.node("x")?,
        lbrack: f.pos("lbrack")?,
        low: f.opt("low")?,
        high: f.opt("high")?,
        max: f.opt("max")?,
        slice3: f.boolean("slice3")?,
        rbrack: f.pos("rbrack")?,
    })
}

pub(crate) fn decode_type_assert_expr(f: &mut Fields<'_>) -> Decoded {
    expr(TypeAssertExpr {
        x: f.node("x")?,
        lparen: f.pos("lparen")?,
        ty: f.opt("type")?,
        rparen: f.pos("rparen")?,
    })
}

pub(crate) fn decode_call_expr(f: &mut Fields<'_>) -> Decoded {
    expr(CallExpr {
        fun: f.node("fun")?,
        lparen: f.pos("lparen")?,
        args: f.list("args")?,
        ellipsis: f.marker("ellipsis")?,
        rparen: f.pos("rparen")?,
    })
}

pub(crate) fn decode_star_expr(f: &mut Fields<'_>) -> Decoded {
    expr(StarExpr {
        star: f.pos("star")?,
        x: f.node("x")?,
    })
}

pub(crate) fn decode_unary_expr(f: &mut Fields<'_>) -> Decoded {
    expr(UnaryExpr {
        op_pos: f.pos("oppos")?,
        op: f.token("op", TokenClass::Unary)?,
        x: f.node("x")?,
    })
}

pub(crate) fn decode_binary_expr(f: &mut Fields<'_>) -> Decoded {
    expr(BinaryExpr {
        x: f.node("x")?,
        op_pos: f.pos("oppos")?,
        op: f.token("op", TokenClass::Binary)?,
        y: f.node("y")?,
    })
}

pub(crate) fn decode_key_value_expr(f: &mut Fields<'_>) -> Decoded {
    expr(KeyValueExpr {
        key: f.node("key")?,
        colon: f.pos("colon")?,
        value: f.node("value")?,
    })
}

// Types

pub(crate) fn decode_array_type(f: &mut Fields<'_>) -> Decoded {
    expr(ArrayType {
        lbrack: f.pos("lbrack")?,
        len: f.opt("len")?,
        elt: f.node("elt")?,
    })
}

pub(crate) fn decode_struct_type(f: &mut Fields<'_>) -> Decoded {
    expr(StructType {
        struct_pos: f.pos("struct")?,
        fields: f.node("fields")?,
        incomplete: f.boolean("incomplete")?,
    })
}

pub(crate) fn decode_func_type(f: &mut Fields<'_>) -> Decoded {
    expr(FuncType {
        func_pos: f.pos("func")?,
        type_params: f.opt("typeparams")?,
        params: f.node("params")?,
        results: f.opt("results")?,
    })
}

pub(crate) fn decode_interface_type(f: &mut Fields<'_>) -> Decoded {
    expr(InterfaceType {
        interface_pos: f.pos("interface")?,
        methods: f.node("methods")?,
        incomplete: f.boolean("incomplete")?,
    })
}

pub(crate) fn decode_map_type(f: &mut Fields<'_>) -> Decoded {
    expr(MapType {
        map_pos: f.pos("map")?,
        key: f.node("key")?,
        value: f.node("value")?,
    })
}

pub(crate) fn decode_chan_type(f: &mut Fields<'_>) -> Decoded {
    expr(ChanType {
        begin: f.pos("begin")?,
        arrow: f.pos("arrow")?,
        dir: f.chan_dir("dir")?,
        value: f.node("value")?,
    })
}

#[cfg(test)]
mod tests {
    use crate::ast::*;
    use crate::builder::Decode;
    use crate::parser::Parser;

    fn expr(source: &str) -> Expr {
        Expr::decode(&Parser::new(source).parse().unwrap()).unwrap()
    }

    #[test]
    fn test_binary_expr() {
        let e = expr(
            r#"(BinaryExpr :x (BasicLit :valuepos 0 :kind INT :value "1") :oppos 0 :op ADD
                           :y (Ident :namepos 0 :name "n" :obj (Object :kind var :name "n")))"#,
        );
        let Expr::Binary(bin) = e else {
            panic!("expected BinaryExpr, got {e:?}")
        };
        assert_eq!(bin.op, Token::Add);
        assert_eq!(bin.x, Expr::BasicLit(BasicLit::new(Token::Int, "1")));
        assert_eq!(
            bin.y,
            Expr::Ident(Ident::new("n").with_obj(Object::new(ObjKind::Var, "n")))
        );
    }

    #[test]
    fn test_slice_expr_optionals() {
        let e = expr(
            r#"(SliceExpr :x (Ident :namepos 0 :name "s" :obj nil) :lbrack 0
                          :low nil :high (BasicLit :valuepos 0 :kind INT :value "2")
                          :max nil :slice3 false :rbrack 0)"#,
        );
        let Expr::Slice(slice) = e else {
            panic!("expected SliceExpr")
        };
        assert!(slice.low.is_none());
        assert!(slice.high.is_some());
        assert!(!slice.slice3);
    }

    #[test]
    fn test_chan_type() {
        let e = expr(
            r#"(ChanType :begin 0 :arrow 0 :dir RECV
                         :value (Ident :namepos 0 :name "int" :obj nil))"#,
        );
        assert!(matches!(e, Expr::ChanType(ref c) if c.dir == ChanDir::Recv));
    }

    #[test]
    fn test_func_type_needs_field_list() {
        let err = Expr::decode(
            &Parser::new("(FuncType :func 0 :typeparams nil :params () :results nil)")
                .parse()
                .unwrap(),
        )
        .unwrap_err();
        assert_eq!(err.path(), "FuncType.params");
    }

    #[test]
    fn test_empty_ident_rejected() {
        let err = Expr::decode(
            &Parser::new(r#"(Ident :namepos 0 :name "" :obj nil)"#)
                .parse()
                .unwrap(),
        )
        .unwrap_err();
        assert_eq!(err.path(), "Ident.name");
    }
}
