//! Go lexical tokens and the other enum-like values carried by AST fields.
//!
//! Each value is written as a bare symbol. Tokens use their `go/token`
//! names (`ADD`, `DEFINE`, `STRING`, ...).

use std::fmt;

macro_rules! tokens {
    ($($variant:ident => $name:literal,)*) => {
        /// A Go token, as stored in operator, keyword and literal-kind fields.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Token {
            $($variant,)*
        }

        impl Token {
            pub const ALL: &'static [Token] = &[$(Token::$variant,)*];

            pub fn name(self) -> &'static str {
                match self {
                    $(Token::$variant => $name,)*
                }
            }

            pub fn from_name(name: &str) -> Option<Token> {
                match name {
                    $($name => Some(Token::$variant),)*
                    _ => None,
                }
            }
        }
    };
}

tokens! {
    Illegal => "ILLEGAL",
    Eof => "EOF",
    Comment => "COMMENT",

    Ident => "IDENT",
    Int => "INT",
    Float => "FLOAT",
    Imag => "IMAG",
    Char => "CHAR",
    String => "STRING",

    Add => "ADD",
    Sub => "SUB",
    Mul => "MUL",
    Quo => "QUO",
    Rem => "REM",

    And => "AND",
    Or => "OR",
    Xor => "XOR",
    Shl => "SHL",
    Shr => "SHR",
    AndNot => "AND_NOT",

    AddAssign => "ADD_ASSIGN",
    SubAssign => "SUB_ASSIGN",
    MulAssign => "MUL_ASSIGN",
    QuoAssign => "QUO_ASSIGN",
    RemAssign => "REM_ASSIGN",

    AndAssign => "AND_ASSIGN",
    OrAssign => "OR_ASSIGN",
    XorAssign => "XOR_ASSIGN",
    ShlAssign => "SHL_ASSIGN",
    ShrAssign => "SHR_ASSIGN",
    AndNotAssign => "AND_NOT_ASSIGN",

    LAnd => "LAND",
    LOr => "LOR",
    Arrow => "ARROW",
    Inc => "INC",
    Dec => "DEC",

    Eql => "EQL",
    Lss => "LSS",
    Gtr => "GTR",
    Assign => "ASSIGN",
    Not => "NOT",

    Neq => "NEQ",
    Leq => "LEQ",
    Geq => "GEQ",
    Define => "DEFINE",
    Ellipsis => "ELLIPSIS",

    LParen => "LPAREN",
    LBrack => "LBRACK",
    LBrace => "LBRACE",
    Comma => "COMMA",
    Period => "PERIOD",

    RParen => "RPAREN",
    RBrack => "RBRACK",
    RBrace => "RBRACE",
    Semicolon => "SEMICOLON",
    Colon => "COLON",
    Tilde => "TILDE",

    Break => "BREAK",
    Case => "CASE",
    Chan => "CHAN",
    Const => "CONST",
    Continue => "CONTINUE",

    Default => "DEFAULT",
    Defer => "DEFER",
    Else => "ELSE",
    Fallthrough => "FALLTHROUGH",
    For => "FOR",

    Func => "FUNC",
    Go => "GO",
    Goto => "GOTO",
    If => "IF",
    Import => "IMPORT",

    Interface => "INTERFACE",
    Map => "MAP",
    Package => "PACKAGE",
    Range => "RANGE",
    Return => "RETURN",

    Select => "SELECT",
    Struct => "STRUCT",
    Switch => "SWITCH",
    Type => "TYPE",
    Var => "VAR",
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The set of tokens a particular field accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenClass {
    Literal,
    Unary,
    Binary,
    Assign,
    IncDec,
    Branch,
    Declaration,
    Range,
}

impl TokenClass {
    pub fn allows(self, token: Token) -> bool {
        use Token::*;
        match self {
            TokenClass::Literal => matches!(token, Int | Float | Imag | Char | String),
            TokenClass::Unary => matches!(token, Add | Sub | Not | Xor | Mul | And | Arrow | Tilde),
            TokenClass::Binary => matches!(
                token,
                Add | Sub
                    | Mul
                    | Quo
                    | Rem
                    | And
                    | Or
                    | Xor
                    | Shl
                    | Shr
                    | AndNot
                    | LAnd
                    | LOr
                    | Eql
                    | Neq
                    | Lss
                    | Leq
                    | Gtr
                    | Geq
            ),
            TokenClass::Assign => matches!(
                token,
                Assign
                    | Define
                    | AddAssign
                    | SubAssign
                    | MulAssign
                    | QuoAssign
                    | RemAssign
                    | AndAssign
                    | OrAssign
                    | XorAssign
                    | ShlAssign
                    | ShrAssign
                    | AndNotAssign
            ),
            TokenClass::IncDec => matches!(token, Inc | Dec),
            TokenClass::Branch => matches!(token, Break | Continue | Goto | Fallthrough),
            TokenClass::Declaration => matches!(token, Import | Const | Type | Var),
            TokenClass::Range => matches!(token, Illegal | Assign | Define),
        }
    }

    pub fn describe(self) -> &'static str {
        match self {
            TokenClass::Literal => "a literal kind (INT, FLOAT, IMAG, CHAR, STRING)",
            TokenClass::Unary => "a unary operator",
            TokenClass::Binary => "a binary operator",
            TokenClass::Assign => "an assignment operator",
            TokenClass::IncDec => "INC or DEC",
            TokenClass::Branch => "BREAK, CONTINUE, GOTO or FALLTHROUGH",
            TokenClass::Declaration => "IMPORT, CONST, TYPE or VAR",
            TokenClass::Range => "ILLEGAL, ASSIGN or DEFINE",
        }
    }
}

/// Direction of a channel type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChanDir {
    Send,
    Recv,
    Both,
}

impl ChanDir {
    pub fn name(self) -> &'static str {
        match self {
            ChanDir::Send => "SEND",
            ChanDir::Recv => "RECV",
            ChanDir::Both => "BOTH",
        }
    }

    pub fn from_name(name: &str) -> Option<ChanDir> {
        match name {
            "SEND" => Some(ChanDir::Send),
            "RECV" => Some(ChanDir::Recv),
            "BOTH" => Some(ChanDir::Both),
            _ => None,
        }
    }
}

/// What kind of entity an [`Object`](super::Object) names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjKind {
    Bad,
    Pkg,
    Con,
    Typ,
    Var,
    Fun,
    Lbl,
}

impl ObjKind {
    pub fn name(self) -> &'static str {
        match self {
            ObjKind::Bad => "bad",
            ObjKind::Pkg => "package",
            ObjKind::Con => "const",
            ObjKind::Typ => "type",
            ObjKind::Var => "var",
            ObjKind::Fun => "func",
            ObjKind::Lbl => "label",
        }
    }

    pub fn from_name(name: &str) -> Option<ObjKind> {
        match name {
            "bad" => Some(ObjKind::Bad),
            "package" => Some(ObjKind::Pkg),
            "const" => Some(ObjKind::Con),
            "type" => Some(ObjKind::Typ),
            "var" => Some(ObjKind::Var),
            "func" => Some(ObjKind::Fun),
            "label" => Some(ObjKind::Lbl),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_names_round_trip() {
        for token in Token::ALL {
            assert_eq!(Token::from_name(token.name()), Some(*token));
        }
        assert_eq!(Token::from_name("PLUS"), None);
    }

    #[test]
    fn test_token_classes() {
        assert!(TokenClass::Binary.allows(Token::AndNot));
        assert!(!TokenClass::Binary.allows(Token::Not));
        assert!(TokenClass::Unary.allows(Token::Arrow));
        assert!(TokenClass::Range.allows(Token::Illegal));
        assert!(!TokenClass::Literal.allows(Token::Ident));
        assert!(TokenClass::Assign.allows(Token::ShlAssign));
    }

    #[test]
    fn test_obj_kind_names() {
        for kind in [
            ObjKind::Bad,
            ObjKind::Pkg,
            ObjKind::Con,
            ObjKind::Typ,
            ObjKind::Var,
            ObjKind::Fun,
            ObjKind::Lbl,
        ] {
            assert_eq!(ObjKind::from_name(kind.name()), Some(kind));
        }
    }
}
