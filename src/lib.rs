//! A lossless codec between Go syntax trees and canonical S-expression text.
//!
//! ```text
//! (Ident :namepos 0 :name "main" :obj nil)
//! ```
//!
//! Text is lexed and parsed into an untyped [`SExp`](sexp::SExp) tree, then
//! built into the typed [`ast`] through the node [`registry`]. The [`writer`]
//! goes the other way and always produces the same text for the same tree.

pub mod api;
pub mod ast;
pub mod builder;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod registry;
pub mod sexp;
pub mod utils;
pub mod writer;
mod serialization;

pub use api::{
    decode, decode_file, decode_node, encode, encode_with, parse_sexp, read_file, write_file,
};
pub use builder::Decode;
pub use error::{CodecError, DecodeError, EncodeError, ParseErrors, SyntaxError};
pub use serialization::Value;
pub use writer::{Encode, EncodeOptions};
