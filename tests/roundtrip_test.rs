// Round-trip and canonical-form properties of the codec.

use goast_sexp::ast::*;
use goast_sexp::{decode, decode_file, decode_node, encode};

fn main_func(body: Vec<Stmt>) -> Decl {
    FuncDecl {
        doc: None,
        recv: None,
        name: Ident::new("main"),
        ty: FuncType::default(),
        body: Some(BlockStmt::new(body)),
    }
    .into()
}

fn sample_file() -> File {
    let fmt_import = ImportSpec::new("fmt");
    let mut file = File::new(
        "main",
        vec![
            GenDecl::new(Token::Import, vec![fmt_import.clone().into()]).into(),
            main_func(vec![
                AssignStmt::new(
                    vec![Expr::ident("greeting")],
                    Token::Define,
                    vec![BasicLit::string("tab\there \"quoted\" \\ done\n").into()],
                )
                .into(),
                Stmt::expr(CallExpr::new(
                    SelectorExpr {
                        x: Expr::ident("fmt"),
                        sel: Ident::new("Println"),
                    }
                    .into(),
                    vec![Expr::ident("greeting")],
                )),
            ]),
        ],
    );
    file.imports.push(fmt_import);
    file.unresolved.push(Ident::new("fmt"));
    file.comments.push(CommentGroup {
        list: vec![Comment::new("// Command main greets.")],
    });
    file.go_version = "go1.22".to_string();
    file
}

#[test]
fn test_minimal_ident_scenario() {
    let text = encode(&Ident::new("main")).unwrap();
    assert_eq!(text, r#"(Ident :namepos 0 :name "main" :obj nil)"#);
    assert_eq!(decode::<Ident>(&text, "ident.sexp").unwrap(), Ident::new("main"));
}

#[test]
fn test_empty_block_list() {
    let text = encode(&Stmt::from(BlockStmt::new(vec![]))).unwrap();
    assert_eq!(text, "(BlockStmt :lbrace 0 :list () :rbrace 0)");
    let block = decode::<BlockStmt>(&text, "block.sexp").unwrap();
    assert!(block.list.is_empty());
}

#[test]
fn test_round_trip_is_identity() {
    let file = sample_file();
    let text = encode(&file).unwrap();
    assert_eq!(decode_file(&text, "sample.sexp").unwrap(), file);
}

#[test]
fn test_encoding_is_stable() {
    let file = sample_file();
    let first = encode(&file).unwrap();
    let second = encode(&decode_file(&first, "first.sexp").unwrap()).unwrap();
    let third = encode(&decode_file(&second, "second.sexp").unwrap()).unwrap();
    assert_eq!(first, second);
    assert_eq!(second, third);
}

#[test]
fn test_field_order_does_not_matter_on_input() {
    let shuffled = r#"(BinaryExpr :y (Ident :obj nil :name "b" :namepos 3)
                                  :op ADD :x (Ident :name "a" :namepos 1 :obj nil) :oppos 2)"#;
    let expr = decode::<Expr>(shuffled, "shuffled.sexp").unwrap();
    assert_eq!(
        encode(&expr).unwrap(),
        concat!(
            r#"(BinaryExpr :x (Ident :namepos 0 :name "a" :obj nil) :oppos 0 :op ADD "#,
            r#":y (Ident :namepos 0 :name "b" :obj nil))"#
        )
    );
}

#[test]
fn test_absence_and_emptiness_stay_distinct() {
    let default_case = CaseClause::default();
    let empty_case = CaseClause {
        list: Some(vec![]),
        ..CaseClause::default()
    };
    let default_text = encode(&Stmt::from(default_case.clone())).unwrap();
    let empty_text = encode(&Stmt::from(empty_case.clone())).unwrap();
    assert_ne!(default_text, empty_text);
    assert_eq!(
        decode::<Stmt>(&default_text, "a.sexp").unwrap(),
        Stmt::from(default_case)
    );
    assert_eq!(
        decode::<Stmt>(&empty_text, "b.sexp").unwrap(),
        Stmt::from(empty_case)
    );

    let plain = FuncDecl {
        doc: None,
        recv: None,
        name: Ident::new("external"),
        ty: FuncType::default(),
        body: None,
    };
    let text = encode(&Decl::from(plain.clone())).unwrap();
    assert!(text.ends_with(":body nil)"));
    assert_eq!(decode::<Decl>(&text, "c.sexp").unwrap(), Decl::from(plain));
}

#[test]
fn test_string_escapes_survive() {
    let value = "line one\nline \"two\"\twith \\ backslash\r";
    let comment = Comment::new(value);
    let text = encode(&comment).unwrap();
    assert!(!text.contains('\n'));
    let back = decode::<Comment>(&text, "comment.sexp").unwrap();
    assert_eq!(back.text, value);
}

#[test]
fn test_non_ascii_text_is_kept() {
    let lit = BasicLit::new(Token::String, "\"héllo, 世界\"");
    let text = encode(&Expr::from(lit.clone())).unwrap();
    assert!(text.contains("世界"));
    assert_eq!(decode::<BasicLit>(&text, "utf8.sexp").unwrap(), lit);
}

#[test]
fn test_positions_normalize_to_zero() {
    let text = r#"(StarExpr :star 17 :x (Ident :namepos 18 :name "p" :obj nil))"#;
    let node = decode_node(text, "star.sexp").unwrap();
    assert_eq!(
        encode(&node).unwrap(),
        r#"(StarExpr :star 0 :x (Ident :namepos 0 :name "p" :obj nil))"#
    );
}

#[test]
fn test_type_nodes_decode_wherever_expressions_do() {
    let text = r#"(CompositeLit
        :type (ArrayType :lbrack 0 :len nil :elt (Ident :namepos 0 :name "byte" :obj nil))
        :lbrace 0 :elts () :rbrace 0 :incomplete false)"#;
    let Expr::CompositeLit(lit) = decode::<Expr>(text, "lit.sexp").unwrap() else {
        panic!("expected CompositeLit")
    };
    assert!(matches!(lit.ty, Some(Expr::ArrayType(ref a)) if a.len.is_none()));
}

#[test]
fn test_alias_and_variadic_markers_survive() {
    // type Bytes = []byte
    let alias = TypeSpec {
        doc: None,
        name: Ident::new("Bytes"),
        type_params: None,
        assign: Pos(10),
        ty: ArrayType {
            lbrack: Pos(12),
            len: None,
            elt: Expr::ident("byte"),
        }
        .into(),
        comment: None,
    };
    let text = encode(&Spec::from(alias)).unwrap();
    assert!(text.contains(":assign 1 "), "{text}");
    let Spec::Type(back) = decode::<Spec>(&text, "alias.sexp").unwrap() else {
        panic!("expected TypeSpec")
    };
    assert!(back.assign.is_valid());
    let Expr::ArrayType(ref array) = back.ty else {
        panic!("expected ArrayType")
    };
    assert_eq!(array.lbrack, Pos::NONE);

    // f(xs...)
    let mut call = CallExpr::new(Expr::ident("f"), vec![Expr::ident("xs")]);
    call.ellipsis = Pos(7);
    let back = decode::<CallExpr>(&encode(&Expr::from(call)).unwrap(), "call.sexp").unwrap();
    assert_eq!(back.ellipsis, Pos::MARKED);

    let plain = CallExpr::new(Expr::ident("f"), vec![Expr::ident("xs")]);
    let back = decode::<CallExpr>(&encode(&Expr::from(plain.clone())).unwrap(), "plain.sexp");
    assert_eq!(back.unwrap(), plain);
}

#[test]
fn test_grouped_declaration_stays_grouped() {
    let mut grouped = GenDecl::new(Token::Import, vec![ImportSpec::new("fmt").into()]);
    grouped.lparen = Pos(7);
    grouped.rparen = Pos(14);
    let text = encode(&Decl::from(grouped)).unwrap();
    let Decl::Gen(back) = decode::<Decl>(&text, "grouped.sexp").unwrap() else {
        panic!("expected GenDecl")
    };
    assert!(back.lparen.is_valid() && back.rparen.is_valid());

    let single = GenDecl::new(Token::Import, vec![ImportSpec::new("fmt").into()]);
    let text = encode(&Decl::from(single.clone())).unwrap();
    assert_eq!(decode::<Decl>(&text, "single.sexp").unwrap(), Decl::from(single));
}
