use super::{Encode, Writer};
use crate::ast::*;
use crate::error::EncodeError;

// Support nodes

impl Encode for Comment {
    fn encode(&self, w: &mut Writer) -> Result<(), EncodeError> {
        w.node("Comment", |n| {
            n.pos("slash", self.slash)?;
            n.string("text", &self.text)
        })
    }
}

impl Encode for CommentGroup {
    fn encode(&self, w: &mut Writer) -> Result<(), EncodeError> {
        w.node("CommentGroup", |n| n.list("list", &self.list))
    }
}

impl Encode for Field {
    fn encode(&self, w: &mut Writer) -> Result<(), EncodeError> {
        w.node("Field", |n| {
            n.opt("doc", self.doc.as_ref())?;
            n.list("names", &self.names)?;
            n.opt("type", self.ty.as_ref())?;
            n.opt("tag", self.tag.as_ref())?;
            n.opt("comment", self.comment.as_ref())
        })
    }
}

impl Encode for FieldList {
    fn encode(&self, w: &mut Writer) -> Result<(), EncodeError> {
        w.node("FieldList", |n| {
            n.pos("opening", self.opening)?;
            n.list("list", &self.list)?;
            n.pos("closing", self.closing)
        })
    }
}

impl Encode for Object {
    fn encode(&self, w: &mut Writer) -> Result<(), EncodeError> {
        w.node("Object", |n| {
            n.obj_kind("kind", self.kind)?;
            n.string("name", &self.name)
        })
    }
}

impl Encode for Scope {
    fn encode(&self, w: &mut Writer) -> Result<(), EncodeError> {
        w.node("Scope", |n| {
            n.opt("outer", self.outer.as_deref())?;
            n.list("objects", &self.objects)
        })
    }
}

// Specs

impl Encode for Spec {
    fn encode(&self, w: &mut Writer) -> Result<(), EncodeError> {
        match self {
            Spec::Import(x) => x.encode(w),
            Spec::Value(x) => x.encode(w),
            Spec::Type(x) => x.encode(w),
        }
    }
}

impl Encode for ImportSpec {
    fn encode(&self, w: &mut Writer) -> Result<(), EncodeError> {
        w.node("ImportSpec", |n| {
            n.opt("doc", self.doc.as_ref())?;
            n.opt("name", self.name.as_ref())?;
            n.node("path", &self.path)?;
            n.opt("comment", self.comment.as_ref())?;
            n.pos("endpos", self.end_pos)
        })
    }
}

impl Encode for ValueSpec {
    fn encode(&self, w: &mut Writer) -> Result<(), EncodeError> {
        w.node("ValueSpec", |n| {
            n.opt("doc", self.doc.as_ref())?;
            n.list("names", &self.names)?;
            n.opt("type", self.ty.as_ref())?;
            n.list("values", &self.values)?;
            n.opt("comment", self.comment.as_ref())
        })
    }
}

impl Encode for TypeSpec {
    fn encode(&self, w: &mut Writer) -> Result<(), EncodeError> {
        w.node("TypeSpec", |n| {
            n.opt("doc", self.doc.as_ref())?;
            n.node("name", &self.name)?;
            n.opt("typeparams", self.type_params.as_ref())?;
            n.marker("assign", self.assign)?;
            n.node("type", &self.ty)?;
            n.opt("comment", self.comment.as_ref())
        })
    }
}

// Declarations

impl Encode for Decl {
    fn encode(&self, w: &mut Writer) -> Result<(), EncodeError> {
        match self {
            Decl::Bad(x) => x.encode(w),
            Decl::Gen(x) => x.encode(w),
            Decl::Func(x) => x.encode(w),
        }
    }
}

impl Encode for BadDecl {
    fn encode(&self, w: &mut Writer) -> Result<(), EncodeError> {
        w.node("BadDecl", |n| {
            n.pos("from", self.from)?;
            n.pos("to", self.to)
        })
    }
}

impl Encode for GenDecl {
    fn encode(&self, w: &mut Writer) -> Result<(), EncodeError> {
        w.node("GenDecl", |n| {
            n.opt("doc", self.doc.as_ref())?;
            n.pos("tokpos", self.tok_pos)?;
            n.token("tok", self.tok, TokenClass::Declaration)?;
            n.marker("lparen", self.lparen)?;
            n.list("specs", &self.specs)?;
            n.marker("rparen", self.rparen)
        })
    }
}

impl Encode for FuncDecl {
    fn encode(&self, w: &mut Writer) -> Result<(), EncodeError> {
        w.node("FuncDecl", |n| {
            n.opt("doc", self.doc.as_ref())?;
            n.opt("recv", self.recv.as_ref())?;
            n.node("name", &self.name)?;
            n.node("type", &self.ty)?;
            n.opt("body", self.body.as_ref())
        })
    }
}

impl Encode for File {
    fn encode(&self, w: &mut Writer) -> Result<(), EncodeError> {
        w.node("File", |n| {
            n.opt("doc", self.doc.as_ref())?;
            n.pos("package", self.package)?;
            n.node("name", &self.name)?;
            n.list("decls", &self.decls)?;
            n.pos("filestart", self.file_start)?;
            n.pos("fileend", self.file_end)?;
            n.opt("scope", self.scope.as_ref())?;
            n.list("imports", &self.imports)?;
            n.list("unresolved", &self.unresolved)?;
            n.list("comments", &self.comments)?;
            n.string("goversion", &self.go_version)
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::*;
    use crate::error::EncodeError;
    use crate::writer::to_canonical;

    #[test]
    fn test_minimal_file() {
        assert_eq!(
            to_canonical(&File::new("main", vec![])).unwrap(),
            concat!(
                r#"(File :doc nil :package 0 :name (Ident :namepos 0 :name "main" :obj nil) "#,
                r#":decls () :filestart 0 :fileend 0 :scope nil :imports () :unresolved () "#,
                r#":comments () :goversion "")"#
            )
        );
    }

    #[test]
    fn test_scope_chain() {
        let scope = Scope {
            outer: Some(Box::new(Scope::default())),
            objects: vec![Object::new(ObjKind::Fun, "main")],
        };
        assert_eq!(
            to_canonical(&scope).unwrap(),
            concat!(
                "(Scope :outer (Scope :outer nil :objects ()) ",
                r#":objects ((Object :kind func :name "main")))"#
            )
        );
    }

    #[test]
    fn test_gen_decl_token_class() {
        let decl = Decl::from(GenDecl::new(Token::Func, vec![]));
        let err = to_canonical(&decl).unwrap_err();
        assert!(matches!(
            err,
            EncodeError::InvalidToken { ref field, ref expected, .. }
                if field == "tok" && expected.contains("IMPORT")
        ));
    }

    #[test]
    fn test_file_error_path() {
        let mut file = File::new("main", vec![]);
        file.unresolved.push(Ident::new(""));
        let err = to_canonical(&file).unwrap_err();
        assert!(matches!(
            err,
            EncodeError::InField { ref node, ref field, index: Some(0), .. }
                if node == "File" && field == "unresolved"
        ));
    }
}
