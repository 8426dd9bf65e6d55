use crate::sexp::{SExp, SExpKind};
use serde::Serialize;

/// The untyped tree in a shape JSON and YAML can carry.
///
/// Lists become arrays, symbols plain strings, keywords strings with their
/// leading `:`, and `nil` becomes null. String atoms are wrapped as
/// `{"str": ...}` so they stay distinct from symbols.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Number(serde_json::Number),
    Symbol(String),
    Text { str: String },
    Array(Vec<Value>),
}

pub(crate) fn to_value(sexp: &SExp) -> Value {
    match &sexp.kind {
        SExpKind::Symbol(s) => Value::Symbol(s.clone()),
        SExpKind::Keyword(k) => Value::Symbol(format!(":{k}")),
        SExpKind::String(s) => Value::Text { str: s.clone() },
        SExpKind::Number(n) => number(n),
        SExpKind::Nil => Value::Null,
        SExpKind::List(items) => Value::Array(items.iter().map(to_value).collect()),
    }
}

fn number(literal: &str) -> Value {
    let trimmed = literal.strip_prefix('+').unwrap_or(literal);
    if let Ok(n) = trimmed.parse::<i64>() {
        return Value::Number(n.into());
    }
    trimmed
        .parse::<f64>()
        .ok()
        .and_then(serde_json::Number::from_f64)
        .map(Value::Number)
        // Out-of-range integers keep their digits.
        .unwrap_or_else(|| Value::Symbol(literal.to_string()))
}

#[cfg(test)]
mod tests {
    use crate::parser::Parser;

    #[test]
    fn test_json_export() {
        let sexp = Parser::new(r#"(Ident :namepos 0 :name "main" :obj nil)"#)
            .parse()
            .unwrap();
        let json: serde_json::Value = serde_json::from_str(&sexp.to_json().unwrap()).unwrap();
        assert_eq!(
            json,
            serde_json::json!(["Ident", ":namepos", 0, ":name", {"str": "main"}, ":obj", null])
        );
    }

    #[test]
    fn test_yaml_export() {
        let sexp = Parser::new("(a 1.5 -2 ())").parse().unwrap();
        assert_eq!(sexp.to_yaml().unwrap(), "- a\n- 1.5\n- -2\n- []\n");
    }
}
