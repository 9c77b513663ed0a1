//! Placeholder grammar parser.
//!
//! Scans decoded string content for `{{identifier(arg, arg, ...)}}`
//! tokens and splits it into literal and call segments. Arguments are
//! literals: numbers, quoted strings, booleans, or `new Date(...)`
//! expressions. `{{identifier}}` without parentheses is accepted as a
//! zero-argument call.
//!
//! A lone `{` or `}` is ordinary text; only a `{{` opener starts a
//! placeholder, and once opened the token must be well formed.

use crate::error::ParseError;
use crate::template::{Argument, DateExpr, GeneratorCall, Segment, TemplateString};

/// Parse decoded string content into segments.
///
/// `line` and `column` locate the string literal in the source document
/// and are carried into any error raised here.
pub fn parse_template_string(
    raw: &str,
    line: u32,
    column: u32,
) -> Result<TemplateString, ParseError> {
    let mut scanner = Scanner {
        chars: raw.chars().collect(),
        pos: 0,
        line,
        column,
    };

    let mut segments = Vec::new();
    let mut literal = String::new();

    while let Some(ch) = scanner.peek() {
        if ch == '{' && scanner.peek_at(1) == Some('{') {
            if !literal.is_empty() {
                segments.push(Segment::Literal(std::mem::take(&mut literal)));
            }
            scanner.bump();
            scanner.bump();
            segments.push(Segment::Call(scanner.parse_call()?));
        } else {
            literal.push(ch);
            scanner.bump();
        }
    }

    if !literal.is_empty() {
        segments.push(Segment::Literal(literal));
    }

    Ok(TemplateString { segments })
}

struct Scanner {
    chars: Vec<char>,
    pos: usize,
    line: u32,
    column: u32,
}

impl Scanner {
    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.peek();
        if ch.is_some() {
            self.pos += 1;
        }
        ch
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(ch) if ch.is_whitespace()) {
            self.bump();
        }
    }

    fn malformed(&self, detail: impl Into<String>) -> ParseError {
        ParseError::MalformedPlaceholder {
            detail: detail.into(),
            line: self.line,
            column: self.column,
        }
    }

    /// Parse the body of a placeholder after the `{{` opener, through
    /// the closing `}}`.
    fn parse_call(&mut self) -> Result<GeneratorCall, ParseError> {
        self.skip_whitespace();

        let name = self.parse_identifier()?;

        self.skip_whitespace();
        let args = if self.peek() == Some('(') {
            self.bump();
            self.parse_arguments()?
        } else {
            Vec::new()
        };

        self.skip_whitespace();
        if self.bump() != Some('}') || self.bump() != Some('}') {
            return Err(self.malformed(format!("expected '}}}}' to close '{{{{{name}'")));
        }

        Ok(GeneratorCall { name, args })
    }

    fn parse_identifier(&mut self) -> Result<String, ParseError> {
        let mut name = String::new();
        match self.peek() {
            Some(ch) if ch.is_ascii_alphabetic() || ch == '_' || ch == '$' => {
                name.push(ch);
                self.bump();
            }
            Some(ch) => {
                return Err(self.malformed(format!("expected function name, found '{ch}'")))
            }
            None => return Err(self.malformed("expected function name, found end of string")),
        }
        while let Some(ch) = self.peek() {
            if ch.is_ascii_alphanumeric() || ch == '_' || ch == '$' {
                name.push(ch);
                self.bump();
            } else {
                break;
            }
        }
        Ok(name)
    }

    /// Parse a comma-separated argument list through the closing `)`.
    fn parse_arguments(&mut self) -> Result<Vec<Argument>, ParseError> {
        let mut args = Vec::new();

        self.skip_whitespace();
        if self.peek() == Some(')') {
            self.bump();
            return Ok(args);
        }

        loop {
            args.push(self.parse_argument()?);
            self.skip_whitespace();
            match self.bump() {
                Some(',') => {
                    self.skip_whitespace();
                }
                Some(')') => return Ok(args),
                Some(ch) => {
                    return Err(
                        self.malformed(format!("expected ',' or ')' in arguments, found '{ch}'"))
                    )
                }
                None => {
                    return Err(self.malformed("unterminated argument list"));
                }
            }
        }
    }

    fn parse_argument(&mut self) -> Result<Argument, ParseError> {
        match self.peek() {
            Some('\'') | Some('"') => self.parse_string_argument(),
            Some(ch) if ch.is_ascii_digit() || ch == '-' || ch == '+' => {
                self.parse_number_argument()
            }
            Some(ch) if ch.is_ascii_alphabetic() || ch == '_' => self.parse_word_argument(),
            Some(ch) => Err(self.malformed(format!("unexpected character '{ch}' in arguments"))),
            None => Err(self.malformed("unterminated argument list")),
        }
    }

    fn parse_string_argument(&mut self) -> Result<Argument, ParseError> {
        let quote = self.bump().unwrap_or('\'');
        let mut text = String::new();
        loop {
            match self.bump() {
                Some(ch) if ch == quote => return Ok(Argument::Str(text)),
                Some('\\') => match self.bump() {
                    Some('n') => text.push('\n'),
                    Some('t') => text.push('\t'),
                    Some(ch @ ('\\' | '\'' | '"')) => text.push(ch),
                    Some(ch) => {
                        return Err(self.malformed(format!("invalid escape '\\{ch}' in argument")))
                    }
                    None => return Err(self.malformed("unterminated string argument")),
                },
                Some(ch) => text.push(ch),
                None => return Err(self.malformed("unterminated string argument")),
            }
        }
    }

    fn parse_number_argument(&mut self) -> Result<Argument, ParseError> {
        let text = self.take_number_text();
        parse_number(&text).ok_or_else(|| self.malformed(format!("invalid number '{text}'")))
    }

    fn take_number_text(&mut self) -> String {
        let mut text = String::new();
        if matches!(self.peek(), Some('-') | Some('+')) {
            text.push(self.bump().unwrap_or('+'));
        }
        while let Some(ch) = self.peek() {
            if ch.is_ascii_digit() || ch == '.' || ch == 'e' || ch == 'E' {
                text.push(ch);
                self.bump();
            } else if (ch == '-' || ch == '+') && matches!(text.chars().last(), Some('e' | 'E')) {
                text.push(ch);
                self.bump();
            } else {
                break;
            }
        }
        text
    }

    /// Parse a bare-word argument: `true`, `false`, or `new Date(...)`.
    fn parse_word_argument(&mut self) -> Result<Argument, ParseError> {
        let word = self.parse_identifier()?;
        match word.as_str() {
            "true" => Ok(Argument::Bool(true)),
            "false" => Ok(Argument::Bool(false)),
            "new" => self.parse_date_expression(),
            other => Err(self.malformed(format!("unsupported argument '{other}'"))),
        }
    }

    fn parse_date_expression(&mut self) -> Result<Argument, ParseError> {
        self.skip_whitespace();
        let ctor = self.parse_identifier()?;
        if ctor != "Date" {
            return Err(self.malformed(format!("expected 'Date' after 'new', found '{ctor}'")));
        }

        self.skip_whitespace();
        if self.bump() != Some('(') {
            return Err(self.malformed("expected '(' after 'new Date'"));
        }

        let mut components = Vec::new();
        self.skip_whitespace();
        if self.peek() == Some(')') {
            self.bump();
            return Ok(Argument::Date(DateExpr::Now));
        }

        loop {
            let text = self.take_number_text();
            match parse_number(&text) {
                Some(Argument::Int(value)) => components.push(value),
                _ => {
                    return Err(
                        self.malformed(format!("expected integer in 'new Date', found '{text}'"))
                    )
                }
            }
            self.skip_whitespace();
            match self.bump() {
                Some(',') => {
                    self.skip_whitespace();
                }
                Some(')') => return Ok(Argument::Date(DateExpr::Components(components))),
                Some(ch) => {
                    return Err(
                        self.malformed(format!("expected ',' or ')' in 'new Date', found '{ch}'"))
                    )
                }
                None => return Err(self.malformed("unterminated 'new Date' expression")),
            }
        }
    }
}

/// Parse a numeric literal as an integer when possible, a float otherwise.
fn parse_number(text: &str) -> Option<Argument> {
    if text.is_empty() {
        return None;
    }
    if !text.contains('.') && !text.contains('e') && !text.contains('E') {
        if let Ok(value) = text.parse::<i64>() {
            return Some(Argument::Int(value));
        }
    }
    text.parse::<f64>().ok().map(Argument::Float)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> TemplateString {
        parse_template_string(raw, 1, 1).unwrap()
    }

    #[test]
    fn test_plain_text_is_one_literal() {
        let parsed = parse("just text");
        assert_eq!(parsed.as_literal(), Some("just text"));
    }

    #[test]
    fn test_single_call_without_args() {
        let parsed = parse("{{bool()}}");
        let call = parsed.as_single_call().expect("single call");
        assert_eq!(call.name, "bool");
        assert!(call.args.is_empty());
    }

    #[test]
    fn test_call_without_parens() {
        let parsed = parse("{{index}}");
        let call = parsed.as_single_call().expect("single call");
        assert_eq!(call.name, "index");
        assert!(call.args.is_empty());
    }

    #[test]
    fn test_numeric_arguments() {
        let parsed = parse("{{integer(20, 40)}}");
        let call = parsed.as_single_call().expect("single call");
        assert_eq!(call.args, vec![Argument::Int(20), Argument::Int(40)]);
    }

    #[test]
    fn test_string_and_float_arguments() {
        let parsed = parse(r#"{{floating(50, 4000, 2, "$0,0.00")}}"#);
        let call = parsed.as_single_call().expect("single call");
        assert_eq!(call.name, "floating");
        assert_eq!(call.args.len(), 4);
        assert_eq!(call.args[3], Argument::Str("$0,0.00".to_string()));
    }

    #[test]
    fn test_mixed_string_segments() {
        let parsed = parse("{{firstName()}} {{surname()}}");
        assert_eq!(parsed.segments.len(), 3);
        assert!(parsed.as_single_call().is_none());
        assert!(matches!(&parsed.segments[1], Segment::Literal(s) if s == " "));
    }

    #[test]
    fn test_date_expression_arguments() {
        let parsed =
            parse(r#"{{date(new Date(2017, 0, 1), new Date(), "YYYY-MM-ddThh:mm:ss Z")}}"#);
        let call = parsed.as_single_call().expect("single call");
        assert_eq!(call.name, "date");
        assert_eq!(
            call.args[0],
            Argument::Date(DateExpr::Components(vec![2017, 0, 1]))
        );
        assert_eq!(call.args[1], Argument::Date(DateExpr::Now));
        assert_eq!(
            call.args[2],
            Argument::Str("YYYY-MM-ddThh:mm:ss Z".to_string())
        );
    }

    #[test]
    fn test_single_braces_are_text() {
        let parsed = parse("{not a placeholder}");
        assert_eq!(parsed.as_literal(), Some("{not a placeholder}"));
    }

    #[test]
    fn test_unterminated_placeholder_is_error() {
        let result = parse_template_string("{{integer(1, 2)", 3, 7);
        assert!(matches!(
            result,
            Err(ParseError::MalformedPlaceholder { line: 3, column: 7, .. })
        ));
    }

    #[test]
    fn test_unknown_word_argument_is_error() {
        let result = parse_template_string("{{integer(one, 2)}}", 1, 1);
        assert!(matches!(result, Err(ParseError::MalformedPlaceholder { .. })));
    }

    #[test]
    fn test_negative_and_float_numbers() {
        let parsed = parse("{{floating(-1.5, 2.5)}}");
        let call = parsed.as_single_call().expect("single call");
        assert_eq!(call.args, vec![Argument::Float(-1.5), Argument::Float(2.5)]);
    }
}
