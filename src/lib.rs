pub mod ast;
pub mod comments;
pub mod config;
pub mod error;
pub mod export;
pub mod lexer;
pub mod parser;
pub mod serializer;
pub mod syntax;

pub use ast::{Document, Section, Value};
pub use config::HfcConfig;
pub use error::HfcError;
pub use parser::{parse, Parser};
pub use serializer::{to_string, Serializer, Style};
pub use syntax::{MergeStrategy, Syntax};
