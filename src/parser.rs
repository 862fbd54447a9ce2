//! This module provides the parser for rule tables, utilizing the `pest` crate.
//! A rule table is header-less CSV where every record has four fields:
//! current state, symbol read, next state, and action.

use crate::types::{RuleRecord, TuringMachineError};
use pest::{
    error::{Error, ErrorVariant},
    iterators::Pair,
    Parser as PestParser, Span,
};
use pest_derive::Parser as PestParser;

/// The number of fields every rule record must have.
pub const FIELDS_PER_RECORD: usize = 4;

/// Derives a `PestParser` for the rule table grammar defined in `grammar.pest`.
#[derive(PestParser)]
#[grammar = "grammar.pest"]
pub struct RuleTableParser;

/// Parses rule table text into raw [`RuleRecord`]s, in file order.
///
/// Blank lines are skipped. Fields may be quoted with `"`, with `""` standing for a
/// literal quote. Whitespace around fields is kept, so `s, 1` reads the symbol `" 1"`.
/// Symbols and actions are not validated here; that happens when the records are
/// built into a [`TransitionTable`](crate::table::TransitionTable).
///
/// # Returns
///
/// * `Ok(Vec<RuleRecord>)` if the input is well-formed.
/// * `Err(TuringMachineError::ParseError)` on a syntax error or a record that does not
///   have exactly four fields.
pub fn parse(input: &str) -> Result<Vec<RuleRecord>, TuringMachineError> {
    let pairs = RuleTableParser::parse(Rule::table, input)
        .map_err(|e| TuringMachineError::ParseError(Box::new(e)))?;

    pairs
        .flatten()
        .filter(|pair| pair.as_rule() == Rule::record)
        .filter_map(|pair| parse_record(pair).transpose())
        .collect()
}

/// Parses a single record, returning `None` for a blank line.
fn parse_record(pair: Pair<Rule>) -> Result<Option<RuleRecord>, TuringMachineError> {
    let span = pair.as_span();
    if span.as_str().is_empty() {
        return Ok(None);
    }

    let mut fields: Vec<String> = pair.into_inner().map(parse_field).collect();

    if fields.len() != FIELDS_PER_RECORD {
        return Err(parse_error(
            &format!(
                "Expected {} fields (state, read, next state, action), found {}",
                FIELDS_PER_RECORD,
                fields.len()
            ),
            span,
        ));
    }

    let action = fields.pop().unwrap_or_default();
    let next_state = fields.pop().unwrap_or_default();
    let read = fields.pop().unwrap_or_default();
    let state = fields.pop().unwrap_or_default();

    Ok(Some(RuleRecord {
        state,
        read,
        next_state,
        action,
    }))
}

/// Extracts the text of a quoted or bare field.
fn parse_field(pair: Pair<Rule>) -> String {
    match pair.as_rule() {
        Rule::quoted => pair
            .into_inner()
            .next()
            .map(|inner| inner.as_str().replace("\"\"", "\""))
            .unwrap_or_default(),
        _ => pair.as_str().to_string(),
    }
}

/// Creates a `TuringMachineError::ParseError` from a message and a `Span`.
fn parse_error(msg: &str, span: Span) -> TuringMachineError {
    TuringMachineError::ParseError(Box::new(Error::new_from_span(
        ErrorVariant::CustomError {
            message: msg.to_string(),
        },
        span,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_table() {
        let input = "s,1,s,->\ns,_,h,1\n";
        let records = parse(input).unwrap();

        assert_eq!(
            records,
            vec![
                RuleRecord::new("s", "1", "s", "->"),
                RuleRecord::new("s", "_", "h", "1"),
            ]
        );
    }

    #[test]
    fn test_parse_without_trailing_newline() {
        let records = parse("s,0,h,<-").unwrap();

        assert_eq!(records, vec![RuleRecord::new("s", "0", "h", "<-")]);
    }

    #[test]
    fn test_parse_crlf_and_blank_lines() {
        let input = "\r\ns,0,a,->\r\n\r\na,1,h,0\r\n\n";
        let records = parse(input).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[1], RuleRecord::new("a", "1", "h", "0"));
    }

    #[test]
    fn test_parse_empty_input() {
        assert_eq!(parse("").unwrap(), Vec::new());
        assert_eq!(parse("\n\n").unwrap(), Vec::new());
    }

    #[test]
    fn test_parse_quoted_fields() {
        let input = "\"q,1\",\",\",\"say \"\"hi\"\"\",\"\"\"\"\n";
        let records = parse(input).unwrap();

        assert_eq!(
            records,
            vec![RuleRecord::new("q,1", ",", "say \"hi\"", "\"")]
        );
    }

    #[test]
    fn test_parse_keeps_whitespace() {
        let records = parse("s, 1,h ,->").unwrap();

        assert_eq!(records[0].read, " 1");
        assert_eq!(records[0].next_state, "h ");
    }

    #[test]
    fn test_parse_keeps_empty_fields() {
        // Empty fields survive parsing and are rejected later, when the table is built.
        let records = parse("s,0,,").unwrap();

        assert_eq!(records, vec![RuleRecord::new("s", "0", "", "")]);
    }

    #[test]
    fn test_parse_wrong_field_count() {
        let input = "s,1,s,->\ns,_,h\n";
        let result = parse(input);

        assert!(result.is_err());
        let error = result.unwrap_err();
        assert!(matches!(error, TuringMachineError::ParseError(_)));
        let message = error.to_string();
        assert!(message.contains("Expected 4 fields"));
        assert!(message.contains("found 3"));
        assert!(message.contains("2:1"));
    }

    #[test]
    fn test_parse_too_many_fields() {
        let result = parse("s,1,s,->,extra");

        let error = result.unwrap_err();
        assert!(error.to_string().contains("found 5"));
    }

    #[test]
    fn test_parse_quoted_empty_line_is_a_record() {
        let result = parse("s,1,s,->\n\"\"\n");

        let error = result.unwrap_err();
        assert!(matches!(error, TuringMachineError::ParseError(_)));
        assert!(error.to_string().contains("found 1"));
        assert!(error.to_string().contains("2:1"));
    }

    #[test]
    fn test_parse_bare_quote_in_field() {
        let result = parse("s,a\"b,h,1");

        assert!(matches!(result, Err(TuringMachineError::ParseError(_))));
    }

    #[test]
    fn test_parse_unterminated_quote() {
        let result = parse("s,\"1,h,1\n");

        assert!(matches!(result, Err(TuringMachineError::ParseError(_))));
    }
}
