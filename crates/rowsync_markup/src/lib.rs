pub mod parser;

pub use parser::{ParseError, ParseResult, parse_metadata};
