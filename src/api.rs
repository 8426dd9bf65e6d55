use crate::ast::{File, Node};
use crate::builder::{self, Decode};
use crate::error::{CodecError, EncodeError};
use crate::parser::Parser;
use crate::sexp::SExp;
use crate::writer::{self, Encode, EncodeOptions};
use log::debug;
use std::fs;
use std::path::Path;

/// Parses a source string holding exactly one S-expression.
///
/// # Arguments
///
/// * `source` - The S-expression text.
/// * `file_name` - The name reported in diagnostics.
///
/// # Errors
///
/// Returns `CodecError::Parse` with every syntax error found, including
/// anything left over after the first expression.
pub fn parse_sexp(source: &str, file_name: &str) -> Result<SExp, CodecError> {
    debug!("parsing {file_name} ({} bytes)", source.len());
    let mut parser = Parser::new_with_name(source, file_name);
    let sexp = parser.parse()?;
    parser.expect_end()?;
    Ok(sexp)
}

/// Parses and decodes a source string into any decodable node type.
///
/// # Errors
///
/// Returns `CodecError::Parse` for malformed text and `CodecError::Decode`
/// when the tree does not have the shape `T` requires.
pub fn decode<T: Decode>(source: &str, file_name: &str) -> Result<T, CodecError> {
    let sexp = parse_sexp(source, file_name)?;
    debug!("decoding {file_name} as {}", std::any::type_name::<T>());
    T::decode(&sexp).map_err(|error| CodecError::from_decode(error, file_name, source))
}

/// Decodes a `File` node.
///
/// # Errors
///
/// See [`decode`].
pub fn decode_file(source: &str, file_name: &str) -> Result<File, CodecError> {
    decode(source, file_name)
}

/// Decodes whatever registered node the text holds.
///
/// # Errors
///
/// See [`decode`].
pub fn decode_node(source: &str, file_name: &str) -> Result<Node, CodecError> {
    let sexp = parse_sexp(source, file_name)?;
    builder::decode_node(&sexp).map_err(|error| CodecError::from_decode(error, file_name, source))
}

/// Writes a node in compact canonical form.
///
/// # Errors
///
/// Returns an `EncodeError` for trees the format cannot represent: an
/// identifier with an empty name or a token outside its field's class.
pub fn encode<T: Encode + ?Sized>(node: &T) -> Result<String, EncodeError> {
    let text = writer::to_canonical(node)?;
    debug!("encoded {} bytes", text.len());
    Ok(text)
}

/// Writes a node with the layout `options` selects.
///
/// The indented layout re-renders the compact text, so both decode to the
/// same tree.
///
/// # Errors
///
/// See [`encode`].
pub fn encode_with<T: Encode + ?Sized>(
    node: &T,
    options: &EncodeOptions,
) -> Result<String, CodecError> {
    let compact = encode(node)?;
    let Some(indent) = options.indent else {
        return Ok(compact);
    };
    debug!("indenting by {indent} within {} columns", options.width);
    let sexp = Parser::new_with_name(&compact, "<encoded>").parse()?;
    Ok(sexp.to_pretty(indent, options.width))
}

/// Reads and decodes a `File` node from disk.
///
/// # Errors
///
/// Returns `CodecError::Io` if the file cannot be read, otherwise any
/// error [`decode_file`] reports.
pub fn read_file(path: impl AsRef<Path>) -> Result<File, CodecError> {
    let path = path.as_ref();
    debug!("reading {}", path.display());
    let source = fs::read_to_string(path).map_err(|source| CodecError::Io {
        path: path.display().to_string(),
        source,
    })?;
    decode_file(&source, &path.display().to_string())
}

/// Encodes a `File` node and writes it to disk, followed by a newline.
///
/// # Errors
///
/// Returns `CodecError::Encode` if the tree cannot be written and
/// `CodecError::Io` if the file cannot be created.
pub fn write_file(
    path: impl AsRef<Path>,
    file: &File,
    options: &EncodeOptions,
) -> Result<(), CodecError> {
    let path = path.as_ref();
    let mut text = encode_with(file, options)?;
    text.push('\n');
    debug!("writing {} ({} bytes)", path.display(), text.len());
    fs::write(path, text).map_err(|source| CodecError::Io {
        path: path.display().to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::*;

    const HELLO: &str = r#"
        ; package main
        (File :doc nil :package 0
              :name (Ident :namepos 0 :name "main" :obj nil)
              :decls ((FuncDecl :doc nil :recv nil
                                :name (Ident :namepos 0 :name "main" :obj nil)
                                :type (FuncType :func 0 :typeparams nil
                                                :params (FieldList :opening 0 :list () :closing 0)
                                                :results nil)
                                :body (BlockStmt :lbrace 0 :list () :rbrace 0)))
              :filestart 0 :fileend 0 :scope nil :imports () :unresolved ()
              :comments () :goversion "")
    "#;

    #[test]
    fn test_decode_file() {
        let file = decode_file(HELLO, "hello.sexp").unwrap();
        assert_eq!(file.name.name, "main");
        assert!(matches!(file.decls.as_slice(), [Decl::Func(f)] if f.name.name == "main"));
    }

    #[test]
    fn test_encode_is_canonical() {
        let file = decode_file(HELLO, "hello.sexp").unwrap();
        let text = encode(&file).unwrap();
        assert!(!text.contains('\n'));
        assert_eq!(encode(&decode_file(&text, "again.sexp").unwrap()).unwrap(), text);
    }

    #[test]
    fn test_indented_layout_decodes_to_same_tree() {
        let file = decode_file(HELLO, "hello.sexp").unwrap();
        let pretty = encode_with(&file, &EncodeOptions::indented(2)).unwrap();
        assert!(pretty.lines().count() > 1);
        assert!(pretty.contains("\n  :decls"));
        assert_eq!(decode_file(&pretty, "pretty.sexp").unwrap(), file);
    }

    #[test]
    fn test_compact_options_match_encode() {
        let ident = Ident::new("x");
        assert_eq!(
            encode_with(&ident, &EncodeOptions::compact()).unwrap(),
            encode(&ident).unwrap()
        );
    }

    #[test]
    fn test_trailing_input_is_rejected() {
        let err = parse_sexp("(a) (b)", "two.sexp").unwrap_err();
        assert!(matches!(err, CodecError::Parse(_)));
    }

    #[test]
    fn test_decode_node_dispatches_on_head() {
        let node = decode_node("(EmptyStmt :semicolon 0 :implicit true)", "stmt.sexp").unwrap();
        assert_eq!(node.type_name(), "EmptyStmt");
        let node = decode_node(r#"(Comment :slash 0 :text "// hi")"#, "c.sexp").unwrap();
        assert_eq!(node, Node::Comment(Comment::new("// hi")));
    }

    #[test]
    fn test_decode_error_is_wrapped() {
        let err = decode::<Expr>("(Ident :namepos 10)", "bad.sexp").unwrap_err();
        assert!(matches!(
            err.decode_error(),
            Some(crate::error::DecodeError::MissingField { field, .. }) if field == "name"
        ));
        let CodecError::Decode { ref name, ref span, .. } = err else {
            panic!("Expected decode error, got {err:?}")
        };
        assert_eq!(name, "bad.sexp");
        assert_eq!(span.offset(), 0);
    }
}
