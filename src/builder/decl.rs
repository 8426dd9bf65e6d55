use super::Fields;
use crate::ast::*;
use crate::error::DecodeError;

type Decoded = Result<Node, DecodeError>;

// Support nodes

pub(crate) fn decode_comment(f: &mut Fields<'_>) -> Decoded {
    Ok(Node::Comment(Comment {
        slash: f.pos("slash")?,
        text: f.string("text")?,
    }))
}

pub(crate) fn decode_comment_group(f: &mut Fields<'_>) -> Decoded {
    Ok(Node::CommentGroup(CommentGroup {
        list: f.list("list")?,
    }))
}

pub(crate) fn decode_field(f: &mut Fields<'_>) -> Decoded {
    Ok(Node::Field(Field {
        doc: f.opt("doc")?,
        names: f.list("names")?,
        ty: f.opt("type")?,
        tag: f.opt("tag")?,
        comment: f.opt("comment")?,
    }))
}

pub(crate) fn decode_field_list(f: &mut Fields<'_>) -> Decoded {
    Ok(Node::FieldList(FieldList {
        opening: f.pos("opening")?,
        list: f.list("list")?,
        closing: f.pos("closing")?,
    }))
}

pub(crate) fn decode_object(f: &mut Fields<'_>) -> Decoded {
    Ok(Node::Object(Object {
        kind: f.obj_kind("kind")?,
        name: f.string("name")?,
    }))
}

pub(crate) fn decode_scope(f: &mut Fields<'_>) -> Decoded {
    Ok(Node::Scope(Scope {
        outer: f.opt::<Scope>("outer")?.map(Box::new),
        objects: f.list("objects")?,
    }))
}

// Specs

pub(crate) fn decode_import_spec(f: &mut Fields<'_>) -> Decoded {
    Ok(Node::Spec(
        ImportSpec {
            doc: f.opt("doc")?,
            name: f.opt("name")?,
            path: f.node("path")?,
            comment: f.opt("comment")?,
            end_pos: f.pos("endpos")?,
        }
        .into(),
    ))
}

pub(crate) fn decode_value_spec(f: &mut Fields<'_>) -> Decoded {
    Ok(Node::Spec(
        ValueSpec {
            doc: f.opt("doc")?,
            names: f.list("names")?,
            ty: f.opt("type")?,
            values: f.list("values")?,
            comment: f.opt("comment")?,
        }
        .into(),
    ))
}

pub(crate) fn decode_type_spec(f: &mut Fields<'_>) -> Decoded {
    Ok(Node::Spec(
        TypeSpec {
            doc: f.opt("doc")?,
            name: f.node("name")?,
            type_params: f.opt("typeparams")?,
            assign: f.marker("assign")?,
            ty: f.node("type")?,
            comment: f.opt("comment")?,
        }
        .into(),
    ))
}

// Declarations

pub(crate) fn decode_bad_decl(f: &mut Fields<'_>) -> Decoded {
    Ok(Node::Decl(Decl::Bad(BadDecl {
        from: f.pos("from")?,
        to: f.pos("to")?,
    })))
}

pub(crate) fn decode_gen_decl(f: &mut Fields<'_>) -> Decoded {
    Ok(Node::Decl(
        GenDecl {
            doc: f.opt("doc")?,
            tok_pos: f.pos("tokpos")?,
            tok: f.token("tok", TokenClass::Declaration)?,
            lparen: f.marker("lparen")?,
            specs: f.list("specs")?,
            rparen: f.marker("rparen")?,
        }
        .into(),
    ))
}

pub(crate) fn decode_func_decl(f: &mut Fields<'_>) -> Decoded {
    Ok(Node::Decl(
        FuncDecl {
            doc: f.opt("doc")?,
            recv: f.opt("recv")?,
            name: f.node("name")?,
            ty: f.node("type")?,
            body: f.opt("body")?,
        }
        .into(),
    ))
}

pub(crate) fn decode_file(f: &mut Fields<'_>) -> Decoded {
    Ok(Node::from(File {
        doc: f.opt("doc")?,
        package: f.pos("package")?,
        name: f.node("name")?,
        decls: f.list("decls")?,
        file_start: f.pos("filestart")?,
        file_end: f.pos("fileend")?,
        scope: f.opt("scope")?,
        imports: f.list("imports")?,
        unresolved: f.list("unresolved")?,
        comments: f.list("comments")?,
        go_version: f.string("goversion")?,
    }))
}
