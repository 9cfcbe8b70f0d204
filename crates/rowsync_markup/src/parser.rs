use pest::Parser;
use pest::iterators::Pair;
use pest_derive::Parser;
use rowsync_model::{FieldValue, Record};

#[derive(Parser)]
#[grammar = "metadata.pest"]
pub struct MetadataParser;

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Pest parsing error: {0}")]
    PestError(#[from] pest::error::Error<Rule>),

    #[error("Unexpected rule: {0:?}")]
    UnexpectedRule(Rule),

    #[error("Parse error: {0}")]
    Custom(String),
}

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a row's declared attribute text into its record. All scalars
/// come back as strings: form values are strings, and numbers keep their
/// lexical form.
pub fn parse_metadata(source: &str) -> ParseResult<Record> {
    let mut pairs = MetadataParser::parse(Rule::metadata, source.trim())?;
    let metadata = pairs
        .next()
        .ok_or_else(|| ParseError::Custom("empty metadata input".to_string()))?;

    let mut record = Record::new();
    for pair in metadata.into_inner() {
        match pair.as_rule() {
            Rule::object => {
                for entry in pair.into_inner() {
                    if entry.as_rule() == Rule::pair {
                        let (name, value) = parse_pair(entry)?;
                        record.set(name, value);
                    }
                }
            }
            Rule::EOI => {}
            rule => return Err(ParseError::UnexpectedRule(rule)),
        }
    }
    Ok(record)
}

fn parse_pair(pair: Pair<Rule>) -> ParseResult<(String, FieldValue)> {
    let mut inner = pair.into_inner();
    let key = inner
        .next()
        .ok_or_else(|| ParseError::Custom("pair without key".to_string()))?;
    let value = inner
        .next()
        .ok_or_else(|| ParseError::Custom("pair without value".to_string()))?;
    Ok((parse_key(key)?, parse_value(value)?))
}

fn parse_key(pair: Pair<Rule>) -> ParseResult<String> {
    let inner = pair
        .into_inner()
        .next()
        .ok_or_else(|| ParseError::Custom("empty key".to_string()))?;
    match inner.as_rule() {
        Rule::ident => Ok(inner.as_str().to_string()),
        Rule::string => Ok(string_text(inner)?),
        rule => Err(ParseError::UnexpectedRule(rule)),
    }
}

fn parse_value(pair: Pair<Rule>) -> ParseResult<FieldValue> {
    let inner = pair
        .into_inner()
        .next()
        .ok_or_else(|| ParseError::Custom("empty value".to_string()))?;
    match inner.as_rule() {
        Rule::scalar => Ok(FieldValue::Scalar(scalar_text(inner)?)),
        Rule::array => {
            let mut values = Vec::new();
            for entry in inner.into_inner() {
                if entry.as_rule() == Rule::scalar {
                    values.push(scalar_text(entry)?);
                }
            }
            Ok(FieldValue::Many(values))
        }
        rule => Err(ParseError::UnexpectedRule(rule)),
    }
}

fn scalar_text(pair: Pair<Rule>) -> ParseResult<String> {
    let inner = pair
        .into_inner()
        .next()
        .ok_or_else(|| ParseError::Custom("empty scalar".to_string()))?;
    match inner.as_rule() {
        Rule::ident | Rule::number => Ok(inner.as_str().to_string()),
        Rule::string => string_text(inner),
        rule => Err(ParseError::UnexpectedRule(rule)),
    }
}

fn string_text(pair: Pair<Rule>) -> ParseResult<String> {
    let inner = pair
        .into_inner()
        .next()
        .ok_or_else(|| ParseError::Custom("empty string literal".to_string()))?;
    match inner.as_rule() {
        Rule::sq_inner | Rule::dq_inner => Ok(inner.as_str().to_string()),
        rule => Err(ParseError::UnexpectedRule(rule)),
    }
}
