// Decode error paths: every failure names the node and field it happened in.

use goast_sexp::ast::*;
use goast_sexp::{decode, decode_file, decode_node, CodecError, DecodeError};
use miette::{Diagnostic, Report};

fn decode_err<T: goast_sexp::Decode + std::fmt::Debug>(source: &str) -> DecodeError {
    match decode::<T>(source, "test.sexp") {
        Err(CodecError::Decode { error, .. }) => error,
        other => panic!("Expected decode error, got {other:?}"),
    }
}

#[test]
fn test_missing_field_is_reported_for_its_node() {
    let err = decode_err::<Expr>("(Ident :namepos 10)");
    assert!(matches!(
        err,
        DecodeError::MissingField { ref node, ref field, position }
            if node == "Ident" && field == "name" && position.column == 1
    ));
    assert!(err.to_string().ends_with("Ident is missing field `name`"));
}

#[test]
fn test_unknown_node_type() {
    let err = decode_err::<Node>("(NotARealType :x 1)");
    assert!(matches!(err, DecodeError::UnknownNodeType { ref name, .. } if name == "NotARealType"));
}

#[test]
fn test_atom_where_node_expected() {
    let err = decode_err::<Expr>("main");
    assert!(matches!(
        err,
        DecodeError::WrongShape { ref expected, ref found, .. }
            if expected == "a node" && found == "symbol main"
    ));

    let err = decode_err::<Expr>("()");
    assert!(matches!(err, DecodeError::WrongShape { ref found, .. } if found == "empty list"));
}

#[test]
fn test_statement_in_expression_field() {
    let err = decode_err::<Expr>(
        "(ParenExpr :lparen 0 :x (EmptyStmt :semicolon 0 :implicit false) :rparen 0)",
    );
    assert_eq!(err.path(), "ParenExpr.x");
    assert!(matches!(
        err.root_cause(),
        DecodeError::WrongShape { expected, .. } if expected == "an expression"
    ));
}

#[test]
fn test_deep_error_path_through_file() {
    let source = r#"
        (File :doc nil :package 0 :name (Ident :namepos 0 :name "p" :obj nil)
              :decls ((FuncDecl :doc nil :recv nil
                                :name (Ident :namepos 0 :name "f" :obj nil)
                                :type (FuncType :func 0 :typeparams nil
                                                :params (FieldList :opening 0 :list () :closing 0)
                                                :results nil)
                                :body (BlockStmt :lbrace 0 :rbrace 0
                                                 :list ((IncDecStmt :x (Ident :namepos 0 :name "i" :obj nil)
                                                                    :tokpos 0 :tok ADD)))))
              :filestart 0 :fileend 0 :scope nil :imports () :unresolved ()
              :comments () :goversion "")"#;
    let err = match decode_file(source, "deep.sexp") {
        Err(CodecError::Decode { error, .. }) => error,
        other => panic!("Expected decode error, got {other:?}"),
    };
    assert_eq!(
        err.path(),
        "File.decls[0] / FuncDecl.body / BlockStmt.list[0] / IncDecStmt.tok"
    );
    assert!(matches!(
        err.root_cause(),
        DecodeError::WrongShape { found, .. } if found == "token ADD"
    ));
}

#[test]
fn test_source_chain_reads_top_down() {
    let err = decode_err::<Expr>(
        r#"(SelectorExpr :x (Ident :namepos 0 :name "a" :obj nil) :sel (Ident :namepos 0 :name 5 :obj nil))"#,
    );
    let mut messages = vec![err.to_string()];
    let mut source = std::error::Error::source(&err);
    while let Some(inner) = source {
        messages.push(inner.to_string());
        source = inner.source();
    }
    assert_eq!(messages.len(), 3, "{messages:#?}");
    assert!(messages[0].contains("`sel`"));
    assert!(messages[1].contains("`name`"));
    assert!(messages[2].contains("a string"));
}

#[test]
fn test_invalid_enum_values() {
    let err = decode_err::<Expr>(
        r#"(ChanType :begin 0 :arrow 0 :dir SIDEWAYS :value (Ident :namepos 0 :name "int" :obj nil))"#,
    );
    assert!(matches!(
        err.root_cause(),
        DecodeError::InvalidLiteral { kind, literal, .. }
            if kind == "channel direction" && literal == "SIDEWAYS"
    ));

    let err = decode_err::<Object>(r#"(Object :kind thing :name "x")"#);
    assert!(matches!(
        err.root_cause(),
        DecodeError::InvalidLiteral { kind, .. } if kind == "object kind"
    ));

    let err = decode_err::<Stmt>("(EmptyStmt :semicolon 0 :implicit yes)");
    assert!(matches!(
        err.root_cause(),
        DecodeError::InvalidLiteral { kind, .. } if kind == "boolean"
    ));
}

#[test]
fn test_decode_report_shows_the_source() {
    let source = "(ReturnStmt :return 0\n            :results ((Ident :namepos 0 :name 7 :obj nil)))";
    let err = decode_node(source, "ret.sexp").unwrap_err();
    let CodecError::Decode { ref span, ref error, .. } = err else {
        panic!("Expected decode error, got {err:?}")
    };
    assert_eq!(error.position().line, 2);
    assert_eq!(&source[span.offset()..span.offset() + 1], "7");

    let rendered = format!("{:?}", Report::new(err));
    assert!(rendered.contains("ret.sexp"), "{rendered}");
    assert!(rendered.contains(":name 7"), "{rendered}");
}

#[test]
fn test_decode_errors_render_as_diagnostics() {
    let err = decode_node("(Ident :namepos 0 :obj nil)", "report.sexp").unwrap_err();
    assert!(err.code().is_some());
    let rendered = format!("{:?}", Report::new(err));
    assert!(rendered.contains("name"), "{rendered}");
}
