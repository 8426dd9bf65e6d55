//! Writes typed AST nodes as canonical S-expression text.
//!
//! Every node is `(Name :field value ...)` with its fields in registry order,
//! separated by single spaces. Positions are written as `0`, except set
//! marker positions which are written as `1`. Absent optional values are
//! `nil` and empty lists `()`. Writing the same tree twice always yields the
//! same text.

mod decl;
mod expr;
mod stmt;

use crate::ast::{ChanDir, Node, ObjKind, Pos, Token, TokenClass};
use crate::error::EncodeError;
use crate::registry::{self, NodeShape};
use crate::sexp::MAX_DEPTH;
use crate::utils::write_quoted;
use serde::{Deserialize, Serialize};

/// Types that can be written as a canonical node.
pub trait Encode {
    fn encode(&self, w: &mut Writer) -> Result<(), EncodeError>;
}

/// Layout settings for [`encode_with`](crate::api::encode_with).
///
/// Deserializable so a host tool can keep them in its own JSON or YAML
/// configuration; missing keys take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncodeOptions {
    /// Spaces per nesting level. `None` writes the compact single-line form.
    pub indent: Option<usize>,
    /// Column budget before an indented node is broken across lines.
    pub width: usize,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        EncodeOptions {
            indent: None,
            width: 100,
        }
    }
}

impl EncodeOptions {
    pub fn compact() -> Self {
        Self::default()
    }

    pub fn indented(indent: usize) -> Self {
        EncodeOptions {
            indent: Some(indent),
            ..Self::default()
        }
    }
}

/// Accumulates canonical text.
#[derive(Debug, Default)]
pub struct Writer {
    out: String,
    /// Lists currently open.
    depth: usize,
}

impl Writer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn finish(self) -> String {
        self.out
    }

    fn open(&mut self, node: &str) -> Result<(), EncodeError> {
        if self.depth >= MAX_DEPTH {
            return Err(EncodeError::TooDeep {
                node: node.to_string(),
                limit: MAX_DEPTH,
            });
        }
        self.depth += 1;
        self.out.push('(');
        Ok(())
    }

    fn close(&mut self) {
        self.depth -= 1;
        self.out.push(')');
    }

    /// Writes one node. `fields` must emit every field of the registered
    /// shape, in order.
    pub fn node(
        &mut self,
        name: &'static str,
        fields: impl FnOnce(&mut NodeWriter<'_>) -> Result<(), EncodeError>,
    ) -> Result<(), EncodeError> {
        let shape = registry::lookup(name).ok_or_else(|| EncodeError::Unregistered {
            name: name.to_string(),
        })?;
        self.open(name)?;
        self.out.push_str(name);
        let mut node = NodeWriter {
            writer: self,
            shape,
            next: 0,
        };
        fields(&mut node)?;
        debug_assert_eq!(
            node.next,
            shape.fields.len(),
            "{name} wrote {} of {} fields",
            node.next,
            shape.fields.len()
        );
        self.close();
        Ok(())
    }
}

/// Writes the fields of a single node.
pub struct NodeWriter<'w> {
    writer: &'w mut Writer,
    shape: &'static NodeShape,
    next: usize,
}

impl NodeWriter<'_> {
    fn key(&mut self, field: &'static str) {
        debug_assert_eq!(
            self.shape.fields.get(self.next).copied(),
            Some(field),
            "{} fields out of order",
            self.shape.name
        );
        self.next += 1;
        let out = &mut self.writer.out;
        out.push_str(" :");
        out.push_str(field);
        out.push(' ');
    }

    fn wrap(&self, field: &str, index: Option<usize>, err: EncodeError) -> EncodeError {
        EncodeError::in_field(self.shape.name, field, index, err)
    }

    fn symbol(&mut self, field: &'static str, symbol: &str) -> Result<(), EncodeError> {
        self.key(field);
        self.writer.out.push_str(symbol);
        Ok(())
    }

    /// Positions are not carried over; every one is written as `0`.
    pub fn pos(&mut self, field: &'static str, _pos: Pos) -> Result<(), EncodeError> {
        self.symbol(field, "0")
    }

    /// A position whose presence matters is written as `1` when set.
    pub fn marker(&mut self, field: &'static str, pos: Pos) -> Result<(), EncodeError> {
        self.symbol(field, if pos.is_valid() { "1" } else { "0" })
    }

    pub fn string(&mut self, field: &'static str, value: &str) -> Result<(), EncodeError> {
        self.key(field);
        write_quoted(&mut self.writer.out, value);
        Ok(())
    }

    pub fn boolean(&mut self, field: &'static str, value: bool) -> Result<(), EncodeError> {
        self.symbol(field, if value { "true" } else { "false" })
    }

    pub fn token(
        &mut self,
        field: &'static str,
        token: Token,
        class: TokenClass,
    ) -> Result<(), EncodeError> {
        if !class.allows(token) {
            return Err(EncodeError::InvalidToken {
                node: self.shape.name.to_string(),
                field: field.to_string(),
                token: token.name().to_string(),
                expected: class.describe().to_string(),
            });
        }
        self.symbol(field, token.name())
    }

    pub fn chan_dir(&mut self, field: &'static str, dir: ChanDir) -> Result<(), EncodeError> {
        self.symbol(field, dir.name())
    }

    pub fn obj_kind(&mut self, field: &'static str, kind: ObjKind) -> Result<(), EncodeError> {
        self.symbol(field, kind.name())
    }

    pub fn node<T: Encode + ?Sized>(
        &mut self,
        field: &'static str,
        value: &T,
    ) -> Result<(), EncodeError> {
        self.key(field);
        value
            .encode(self.writer)
            .map_err(|e| self.wrap(field, None, e))
    }

    pub fn opt<T: Encode>(
        &mut self,
        field: &'static str,
        value: Option<&T>,
    ) -> Result<(), EncodeError> {
        match value {
            Some(value) => self.node(field, value),
            None => self.symbol(field, "nil"),
        }
    }

    pub fn list<T: Encode>(&mut self, field: &'static str, items: &[T]) -> Result<(), EncodeError> {
        self.key(field);
        self.writer
            .open(self.shape.name)
            .map_err(|e| self.wrap(field, None, e))?;
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.writer.out.push(' ');
            }
            item.encode(self.writer)
                .map_err(|e| self.wrap(field, Some(i), e))?;
        }
        self.writer.close();
        Ok(())
    }

    pub fn opt_list<T: Encode>(
        &mut self,
        field: &'static str,
        items: Option<&[T]>,
    ) -> Result<(), EncodeError> {
        match items {
            Some(items) => self.list(field, items),
            None => self.symbol(field, "nil"),
        }
    }
}

impl Encode for Node {
    fn encode(&self, w: &mut Writer) -> Result<(), EncodeError> {
        match self {
            Node::Expr(x) => x.encode(w),
            Node::Stmt(x) => x.encode(w),
            Node::Spec(x) => x.encode(w),
            Node::Decl(x) => x.encode(w),
            Node::File(x) => x.encode(w),
            Node::Field(x) => x.encode(w),
            Node::FieldList(x) => x.encode(w),
            Node::Comment(x) => x.encode(w),
            Node::CommentGroup(x) => x.encode(w),
            Node::Scope(x) => x.encode(w),
            Node::Object(x) => x.encode(w),
        }
    }
}

/// Writes `node` in compact canonical form.
pub fn to_canonical<T: Encode + ?Sized>(node: &T) -> Result<String, EncodeError> {
    let mut writer = Writer::new();
    node.encode(&mut writer)?;
    Ok(writer.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::*;

    #[test]
    fn test_minimal_ident() {
        assert_eq!(
            to_canonical(&Ident::new("main")).unwrap(),
            r#"(Ident :namepos 0 :name "main" :obj nil)"#
        );
    }

    #[test]
    fn test_positions_are_zeroed() {
        let mut ident = Ident::new("x");
        ident.name_pos = Pos(1234);
        assert_eq!(
            to_canonical(&ident).unwrap(),
            r#"(Ident :namepos 0 :name "x" :obj nil)"#
        );
    }

    #[test]
    fn test_marker_positions_keep_presence() {
        let mut call = CallExpr::new(Expr::ident("f"), vec![Expr::ident("xs")]);
        call.lparen = Pos(3);
        call.ellipsis = Pos(42);
        let text = to_canonical(&Expr::from(call)).unwrap();
        assert!(text.contains(":lparen 0 :args"), "{text}");
        assert!(text.contains(":ellipsis 1 :rparen 0)"), "{text}");
    }

    fn star_chain(stars: usize) -> Expr {
        (0..stars).fold(Expr::ident("p"), |x, _| {
            StarExpr {
                star: Pos::NONE,
                x,
            }
            .into()
        })
    }

    #[test]
    fn test_nesting_limit() {
        assert!(to_canonical(&star_chain(MAX_DEPTH - 1)).is_ok());

        let err = to_canonical(&star_chain(MAX_DEPTH)).unwrap_err();
        assert!(matches!(
            err.root_cause(),
            EncodeError::TooDeep { node, limit } if node == "Ident" && *limit == MAX_DEPTH
        ));

        let nested_list = (0..MAX_DEPTH / 2).fold(Stmt::from(BlockStmt::default()), |inner, _| {
            BlockStmt::new(vec![inner]).into()
        });
        assert!(matches!(
            to_canonical(&nested_list).unwrap_err().root_cause(),
            EncodeError::TooDeep { node, .. } if node == "BlockStmt"
        ));
    }

    #[test]
    fn test_empty_block() {
        assert_eq!(
            to_canonical(&Stmt::from(BlockStmt::default())).unwrap(),
            "(BlockStmt :lbrace 0 :list () :rbrace 0)"
        );
    }

    #[test]
    fn test_string_escaping() {
        let comment = Comment::new("// say \"hi\"\n\tand \\ bye");
        assert_eq!(
            to_canonical(&comment).unwrap(),
            r#"(Comment :slash 0 :text "// say \"hi\"\n\tand \\ bye")"#
        );
    }

    #[test]
    fn test_empty_ident_is_rejected() {
        let call = Expr::from(CallExpr::new(Expr::ident(""), vec![]));
        let err = to_canonical(&call).unwrap_err();
        assert_eq!(err.root_cause(), &EncodeError::EmptyIdent);
        assert!(matches!(
            err,
            EncodeError::InField { ref node, ref field, .. } if node == "CallExpr" && field == "fun"
        ));
    }

    #[test]
    fn test_token_class_is_checked() {
        let bin = Expr::from(BinaryExpr::new(Expr::ident("a"), Token::Define, Expr::ident("b")));
        let err = to_canonical(&bin).unwrap_err();
        assert!(matches!(
            err,
            EncodeError::InvalidToken { ref token, ref field, .. } if token == "DEFINE" && field == "op"
        ));
    }

    #[test]
    fn test_list_errors_carry_index() {
        let ret = Stmt::from(ReturnStmt {
            return_pos: Pos::NONE,
            results: vec![Expr::ident("ok"), Expr::ident("")],
        });
        let err = to_canonical(&ret).unwrap_err();
        assert!(matches!(
            err,
            EncodeError::InField { index: Some(1), ref field, .. } if field == "results"
        ));
    }

    #[test]
    fn test_options_deserialize_with_defaults() {
        let options: EncodeOptions = serde_json::from_str(r#"{"indent": 4}"#).unwrap();
        assert_eq!(options, EncodeOptions::indented(4));
        let options: EncodeOptions = serde_yaml::from_str("width: 60").unwrap();
        assert_eq!(options.indent, None);
        assert_eq!(options.width, 60);
    }
}
