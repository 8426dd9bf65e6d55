use super::{Encode, Writer};
use crate::ast::*;
use crate::error::EncodeError;

impl Encode for Expr {
    fn encode(&self, w: &mut Writer) -> Result<(), EncodeError> {
        match self {
            Expr::Bad(x) => x.encode(w),
            Expr::Ident(x) => x.encode(w),
            Expr::Ellipsis(x) => x.encode(w),
            Expr::BasicLit(x) => x.encode(w),
            Expr::FuncLit(x) => x.encode(w),
            Expr::CompositeLit(x) => x.encode(w),
            Expr::Paren(x) => x.encode(w),
            Expr::Selector(x) => x.encode(w),
            Expr::Index(x) => x.encode(w),
            Expr::IndexList(x) => x.encode(w),
            Expr::Slice(x) => x.encode(w),
            Expr::TypeAssert(x) => x.encode(w),
            Expr::Call(x) => x.encode(w),
            Expr::Star(x) => x.encode(w),
            Expr::Unary(x) => x.encode(w),
            Expr::Binary(x) => x.encode(w),
            Expr::KeyValue(x) => x.encode(w),
            Expr::ArrayType(x) => x.encode(w),
            Expr::StructType(x) => x.encode(w),
            Expr::FuncType(x) => x.encode(w),
            Expr::InterfaceType(x) => x.encode(w),
            Expr::MapType(x) => x.encode(w),
            Expr::ChanType(x) => x.encode(w),
        }
    }
}

impl Encode for BadExpr {
    fn encode(&self, w: &mut Writer) -> Result<(), EncodeError> {
        w.node("BadExpr", |n| {
            n.pos("from", self.from)?;
            n.pos("to", self.to)
        })
    }
}

impl Encode for Ident {
    fn encode(&self, w: &mut Writer) -> Result<(), EncodeError> {
        if self.name.is_empty() {
            return Err(EncodeError::EmptyIdent);
        }
        w.node("Ident", |n| {
            n.pos("namepos", self.name_pos)?;
            n.string("name", &self.name)?;
            n.opt("obj", self.obj.as_ref())
        })
    }
}

impl Encode for Ellipsis {
    fn encode(&self, w: &mut Writer) -> Result<(), EncodeError> {
        w.node("Ellipsis", |n| {
            n.pos("ellipsis", self.ellipsis)?;
            n.opt("elt", self.elt.as_ref())
        })
    }
}

impl Encode for BasicLit {
    fn encode(&self, w: &mut Writer) -> Result<(), EncodeError> {
        w.node("BasicLit", |n| {
            n.pos("valuepos", self.value_pos)?;
            n.token("kind", self.kind, TokenClass::Literal)?;
            n.string("value", &self.value)
        })
    }
}

impl Encode for FuncLit {
    fn encode(&self, w: &mut Writer) -> Result<(), EncodeError> {
        w.node("FuncLit", |n| {
            n.node("type", &self.ty)?;
            n.node("body", &self.body)
        })
    }
}

impl Encode for CompositeLit {
    fn encode(&self, w: &mut Writer) -> Result<(), EncodeError> {
        w.node("CompositeLit", |n| {
            n.opt("type", self.ty.as_ref())?;
            n.pos("lbrace", self.lbrace)?;
            n.list("elts", &self.elts)?;
            n.pos("rbrace", self.rbrace)?;
            n.boolean("incomplete", self.incomplete)
        })
    }
}

impl Encode for ParenExpr {
    fn encode(&self, w: &mut Writer) -> Result<(), EncodeError> {
        w.node("ParenExpr", |n| {
            n.pos("lparen", self.lparen)?;
            n.node("x", &self.x)?;
            n.pos("rparen", self.rparen)
        })
    }
}

impl Encode for SelectorExpr {
    fn encode(&self, w: &mut Writer) -> Result<(), EncodeError> {
        w.node("SelectorExpr", |n| {
            n.node("x", &self.x)?;
            n.node("sel", &self.sel)
        })
    }
}

impl Encode for IndexExpr {
    fn encode(&self, w: &mut Writer) -> Result<(), EncodeError> {
        w.node("IndexExpr", |n| {
            n.node("x", &self.x)?;
            n.pos("lbrack", self.lbrack)?;
            n.node("index", &self.index)?;
            n.pos("rbrack", self.rbrack)
        })
    }
}

impl Encode for IndexListExpr {
    fn encode(&self, w: &mut Writer) -> Result<(), EncodeError> {
        w.node("IndexListExpr", |n| {
            n.node("x", &self.x)?;
            n.pos("lbrack", self.lbrack)?;
            n.list("indices", &self.indices)?;
            n.pos("rbrack", self.rbrack)
        })
    }
}

impl Encode for SliceExpr {
    fn encode(&self, w: &mut Writer) -> Result<(), EncodeError> {
        w.node("SliceExpr", |n| {
            n.node("x", &self.x)?;
            n.pos("lbrack", self.lbrack)?;
            n.opt("low", self.low.as_ref())?;
            n.opt("high", self.high.as_ref())?;
            n.opt("max", self.max.as_ref())?;
            n.boolean("slice3", self.slice3)?;
            n.pos("rbrack", self.rbrack)
        })
    }
}

impl Encode for TypeAssertExpr {
    fn encode(&self, w: &mut Writer) -> Result<(), EncodeError> {
        w.node("TypeAssertExpr", |n| {
            n.node("x", &self.x)?;
            n.pos("lparen", self.lparen)?;
            n.opt("type", self.ty.as_ref())?;
            n.pos("rparen", self.rparen)
        })
    }
}

impl Encode for CallExpr {
    fn encode(&self, w: &mut Writer) -> Result<(), EncodeError> {
        w.node("CallExpr", |n| {
            n.node("fun", &self.fun)?;
            n.pos("lparen", self.lparen)?;
            n.list("args", &self.args)?;
            n.marker("ellipsis", self.ellipsis)?;
            n.pos("rparen", self.rparen)
        })
    }
}

impl Encode for StarExpr {
    fn encode(&self, w: &mut Writer) -> Result<(), EncodeError> {
        w.node("StarExpr", |n| {
            n.pos("star", self.star)?;
            n.node("x", &self.x)
        })
    }
}

impl Encode for UnaryExpr {
    fn encode(&self, w: &mut Writer) -> Result<(), EncodeError> {
        w.node("UnaryExpr", |n| {
            n.pos("oppos", self.op_pos)?;
            n.token("op", self.op, TokenClass::Unary)?;
            n.node("x", &self.x)
        })
    }
}

impl Encode for BinaryExpr {
    fn encode(&self, w: &mut Writer) -> Result<(), EncodeError> {
        w.node("BinaryExpr", |n| {
            n.node("x", &self.x)?;
            n.pos("oppos", self.op_pos)?;
            n.token("op", self.op, TokenClass::Binary)?;
            n.node("y", &self.y)
        })
    }
}

impl Encode for KeyValueExpr {
    fn encode(&self, w: &mut Writer) -> Result<(), EncodeError> {
        w.node("KeyValueExpr", |n| {
            n.node("key", &self.key)?;
            n.pos("colon", self.colon)?;
            n.node("value", &self.value)
        })
    }
}

// Types

impl Encode for ArrayType {
    fn encode(&self, w: &mut Writer) -> Result<(), EncodeError> {
        w.node("ArrayType", |n| {
            n.pos("lbrack", self.lbrack)?;
            n.opt("len", self.len.as_ref())?;
            n.node("elt", &self.elt)
        })
    }
}

impl Encode for StructType {
    fn encode(&self, w: &mut Writer) -> Result<(), EncodeError> {
        w.node("StructType", |n| {
            n.pos("struct", self.struct_pos)?;
            n.node("fields", &self.fields)?;
            n.boolean("incomplete", self.incomplete)
        })
    }
}

impl Encode for FuncType {
    fn encode(&self, w: &mut Writer) -> Result<(), EncodeError> {
        w.node("FuncType", |n| {
            n.pos("func", self.func_pos)?;
            n.opt("typeparams", self.type_params.as_ref())?;
            n.node("params", &self.params)?;
            n.opt("results", self.results.as_ref())
        })
    }
}

impl Encode for InterfaceType {
    fn encode(&self, w: &mut Writer) -> Result<(), EncodeError> {
        w.node("InterfaceType", |n| {
            n.pos("interface", self.interface_pos)?;
            n.node("methods", &self.methods)?;
            n.boolean("incomplete", self.incomplete)
        })
    }
}

impl Encode for MapType {
    fn encode(&self, w: &mut Writer) -> Result<(), EncodeError> {
        w.node("MapType", |n| {
            n.pos("map", self.map_pos)?;
            n.node("key", &self.key)?;
            n.node("value", &self.value)
        })
    }
}

impl Encode for ChanType {
    fn encode(&self, w: &mut Writer) -> Result<(), EncodeError> {
        w.node("ChanType", |n| {
            n.pos("begin", self.begin)?;
            n.pos("arrow", self.arrow)?;
            n.chan_dir("dir", self.dir)?;
            n.node("value", &self.value)
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::*;
    use crate::writer::to_canonical;

    #[test]
    fn test_selector_call() {
        let call = Expr::from(CallExpr::new(
            SelectorExpr {
                x: Expr::ident("fmt"),
                sel: Ident::new("Println"),
            }
            .into(),
            vec![BasicLit::string("hi").into()],
        ));
        assert_eq!(
            to_canonical(&call).unwrap(),
            concat!(
                r#"(CallExpr :fun (SelectorExpr :x (Ident :namepos 0 :name "fmt" :obj nil) "#,
                r#":sel (Ident :namepos 0 :name "Println" :obj nil)) :lparen 0 "#,
                r#":args ((BasicLit :valuepos 0 :kind STRING :value "\"hi\"")) :ellipsis 0 :rparen 0)"#
            )
        );
    }

    #[test]
    fn test_func_type_without_results() {
        let ty = Expr::from(FuncType::default());
        assert_eq!(
            to_canonical(&ty).unwrap(),
            "(FuncType :func 0 :typeparams nil :params (FieldList :opening 0 :list () :closing 0) :results nil)"
        );
    }

    #[test]
    fn test_chan_type_direction() {
        let chan = Expr::from(ChanType {
            begin: Pos::NONE,
            arrow: Pos::NONE,
            dir: ChanDir::Send,
            value: Expr::ident("int"),
        });
        assert!(to_canonical(&chan).unwrap().contains(":dir SEND"));
    }

    #[test]
    fn test_ident_object() {
        let ident = Ident::new("x").with_obj(Object::new(ObjKind::Var, "x"));
        assert_eq!(
            to_canonical(&ident).unwrap(),
            r#"(Ident :namepos 0 :name "x" :obj (Object :kind var :name "x"))"#
        );
    }
}
