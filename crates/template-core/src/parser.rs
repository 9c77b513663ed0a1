//! JSON5-tolerant document parser.
//!
//! Parses the template dialect the generator consumes: JSON extended
//! with unquoted identifier keys, single-quoted strings, trailing
//! commas, and `//` / `/* */` comments. String values are handed to the
//! placeholder parser, and `{{repeat(...)}}` markers are consumed and
//! validated while arrays are built.

use crate::error::ParseError;
use crate::placeholder::parse_template_string;
use crate::template::{Argument, GeneratorCall, Repeat, TemplateNode};

/// Parse a complete template document.
pub fn parse_document(source: &str) -> Result<TemplateNode, ParseError> {
    let mut parser = Parser::new(source);
    parser.skip_trivia()?;
    let (line, column) = parser.position();
    let node = parser.parse_value()?;
    ensure_no_repeat(&node, line, column)?;
    parser.skip_trivia()?;
    if let Some(ch) = parser.peek() {
        return Err(parser.unexpected(&ch.to_string(), "end of input"));
    }
    Ok(node)
}

struct Parser {
    chars: Vec<char>,
    pos: usize,
    line: u32,
    column: u32,
}

impl Parser {
    fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    fn position(&self) -> (u32, u32) {
        (self.line, self.column)
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += 1;
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    fn unexpected(&self, found: &str, expected: &'static str) -> ParseError {
        ParseError::UnexpectedToken {
            expected,
            found: found.to_string(),
            line: self.line,
            column: self.column,
        }
    }

    /// Skip whitespace and comments.
    fn skip_trivia(&mut self) -> Result<(), ParseError> {
        loop {
            match self.peek() {
                Some(ch) if ch.is_whitespace() => {
                    self.bump();
                }
                Some('/') if self.peek_at(1) == Some('/') => {
                    while !matches!(self.peek(), None | Some('\n')) {
                        self.bump();
                    }
                }
                Some('/') if self.peek_at(1) == Some('*') => {
                    let (line, column) = self.position();
                    self.bump();
                    self.bump();
                    loop {
                        match self.peek() {
                            Some('*') if self.peek_at(1) == Some('/') => {
                                self.bump();
                                self.bump();
                                break;
                            }
                            Some(_) => {
                                self.bump();
                            }
                            None => {
                                return Err(ParseError::UnterminatedComment { line, column })
                            }
                        }
                    }
                }
                _ => return Ok(()),
            }
        }
    }

    fn parse_value(&mut self) -> Result<TemplateNode, ParseError> {
        self.skip_trivia()?;
        match self.peek() {
            Some('{') => self.parse_object(),
            Some('[') => self.parse_array(),
            Some('\'') | Some('"') => self.parse_string_value(),
            Some(ch) if ch.is_ascii_digit() || ch == '-' || ch == '+' || ch == '.' => {
                self.parse_number()
            }
            Some(ch) if ch.is_ascii_alphabetic() || ch == '_' || ch == '$' => {
                let (line, column) = self.position();
                let word = self.parse_identifier()?;
                match word.as_str() {
                    "true" => Ok(TemplateNode::Bool(true)),
                    "false" => Ok(TemplateNode::Bool(false)),
                    "null" => Ok(TemplateNode::Null),
                    other => Err(ParseError::UnexpectedToken {
                        expected: "value",
                        found: other.to_string(),
                        line,
                        column,
                    }),
                }
            }
            Some(ch) => Err(ParseError::UnexpectedCharacter {
                ch,
                line: self.line,
                column: self.column,
            }),
            None => Err(self.unexpected("end of input", "value")),
        }
    }

    fn parse_object(&mut self) -> Result<TemplateNode, ParseError> {
        self.bump(); // '{'
        let mut members = Vec::new();

        loop {
            self.skip_trivia()?;
            match self.peek() {
                Some('}') => {
                    self.bump();
                    return Ok(TemplateNode::Object(members));
                }
                None => return Err(self.unexpected("end of input", "object member or '}'")),
                _ => {}
            }

            let key = self.parse_member_key()?;

            self.skip_trivia()?;
            match self.bump() {
                Some(':') => {}
                Some(ch) => return Err(self.unexpected(&ch.to_string(), "':'")),
                None => return Err(self.unexpected("end of input", "':'")),
            }

            self.skip_trivia()?;
            let (line, column) = self.position();
            let value = self.parse_value()?;
            ensure_no_repeat(&value, line, column)?;
            members.push((key, value));

            self.skip_trivia()?;
            match self.peek() {
                Some(',') => {
                    self.bump();
                }
                Some('}') => {}
                Some(ch) => return Err(self.unexpected(&ch.to_string(), "',' or '}'")),
                None => return Err(self.unexpected("end of input", "',' or '}'")),
            }
        }
    }

    fn parse_member_key(&mut self) -> Result<String, ParseError> {
        match self.peek() {
            Some('\'') | Some('"') => self.parse_string_literal(),
            Some(ch) if ch.is_ascii_alphabetic() || ch == '_' || ch == '$' => {
                self.parse_identifier()
            }
            Some(ch) => Err(self.unexpected(&ch.to_string(), "member key")),
            None => Err(self.unexpected("end of input", "member key")),
        }
    }

    fn parse_identifier(&mut self) -> Result<String, ParseError> {
        let mut name = String::new();
        while let Some(ch) = self.peek() {
            if ch.is_ascii_alphanumeric() || ch == '_' || ch == '$' {
                name.push(ch);
                self.bump();
            } else {
                break;
            }
        }
        if name.is_empty() {
            return Err(self.unexpected(
                &self.peek().map(|c| c.to_string()).unwrap_or_default(),
                "identifier",
            ));
        }
        Ok(name)
    }

    fn parse_array(&mut self) -> Result<TemplateNode, ParseError> {
        let array_pos = self.position();
        self.bump(); // '['
        let mut entries: Vec<(TemplateNode, (u32, u32))> = Vec::new();

        loop {
            self.skip_trivia()?;
            match self.peek() {
                Some(']') => {
                    self.bump();
                    break;
                }
                None => return Err(self.unexpected("end of input", "array element or ']'")),
                _ => {}
            }

            let pos = self.position();
            let value = self.parse_value()?;
            entries.push((value, pos));

            self.skip_trivia()?;
            match self.peek() {
                Some(',') => {
                    self.bump();
                }
                Some(']') => {}
                Some(ch) => return Err(self.unexpected(&ch.to_string(), "',' or ']'")),
                None => return Err(self.unexpected("end of input", "',' or ']'")),
            }
        }

        finish_array(entries, array_pos)
    }

    fn parse_string_value(&mut self) -> Result<TemplateNode, ParseError> {
        let (line, column) = self.position();
        let content = self.parse_string_literal()?;
        let text = parse_template_string(&content, line, column)?;
        Ok(TemplateNode::Text(text))
    }

    /// Parse a quoted string literal, decoding escape sequences.
    fn parse_string_literal(&mut self) -> Result<String, ParseError> {
        let (line, column) = self.position();
        let quote = self.bump().unwrap_or('"');
        let mut text = String::new();

        loop {
            match self.bump() {
                Some(ch) if ch == quote => return Ok(text),
                Some('\n') | None => {
                    return Err(ParseError::UnterminatedString { line, column })
                }
                Some('\\') => match self.bump() {
                    Some('n') => text.push('\n'),
                    Some('t') => text.push('\t'),
                    Some('r') => text.push('\r'),
                    Some('b') => text.push('\u{0008}'),
                    Some('f') => text.push('\u{000C}'),
                    Some(ch @ ('\\' | '\'' | '"' | '/')) => text.push(ch),
                    // JSON5 line continuation
                    Some('\n') => {}
                    Some('u') => text.push(self.parse_unicode_escape()?),
                    Some(ch) => {
                        return Err(ParseError::InvalidEscape {
                            ch,
                            line: self.line,
                            column: self.column,
                        })
                    }
                    None => return Err(ParseError::UnterminatedString { line, column }),
                },
                Some(ch) => text.push(ch),
            }
        }
    }

    fn parse_unicode_escape(&mut self) -> Result<char, ParseError> {
        let (line, column) = self.position();
        let mut code = 0u32;
        for _ in 0..4 {
            let digit = self
                .bump()
                .and_then(|ch| ch.to_digit(16))
                .ok_or(ParseError::InvalidEscape {
                    ch: 'u',
                    line,
                    column,
                })?;
            code = code * 16 + digit;
        }
        char::from_u32(code).ok_or(ParseError::InvalidEscape {
            ch: 'u',
            line,
            column,
        })
    }

    fn parse_number(&mut self) -> Result<TemplateNode, ParseError> {
        let (line, column) = self.position();
        let mut text = String::new();

        if matches!(self.peek(), Some('-') | Some('+')) {
            if let Some(sign) = self.bump() {
                text.push(sign);
            }
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

        let is_float = text.contains('.') || text.contains('e') || text.contains('E');
        if !is_float {
            if let Ok(value) = text.parse::<i64>() {
                return Ok(TemplateNode::Integer(value));
            }
        }
        text.parse::<f64>()
            .map(TemplateNode::Float)
            .map_err(|_| ParseError::InvalidNumber { text, line, column })
    }
}

/// Reject template strings containing a repeat call; valid markers are
/// consumed by `finish_array` before this check runs.
fn ensure_no_repeat(node: &TemplateNode, line: u32, column: u32) -> Result<(), ParseError> {
    if let TemplateNode::Text(text) = node {
        if text.calls_function("repeat") {
            return Err(ParseError::MisplacedRepeat { line, column });
        }
    }
    Ok(())
}

/// Assemble an array node, consuming a leading repeat marker if present.
fn finish_array(
    entries: Vec<(TemplateNode, (u32, u32))>,
    array_pos: (u32, u32),
) -> Result<TemplateNode, ParseError> {
    let mut repeat = None;
    let mut elements = Vec::new();

    for (index, (node, (line, column))) in entries.into_iter().enumerate() {
        if index == 0 {
            if let TemplateNode::Text(text) = &node {
                if let Some(call) = text.as_single_call() {
                    if call.name == "repeat" {
                        repeat = Some(repeat_bounds(call, line, column)?);
                        continue;
                    }
                }
            }
        }
        ensure_no_repeat(&node, line, column)?;
        elements.push(node);
    }

    if repeat.is_some() && elements.is_empty() {
        let (line, column) = array_pos;
        return Err(ParseError::EmptyRepeat { line, column });
    }

    Ok(TemplateNode::Array { repeat, elements })
}

/// Validate the arguments of a consumed repeat marker.
fn repeat_bounds(call: &GeneratorCall, line: u32, column: u32) -> Result<Repeat, ParseError> {
    let invalid = |detail: String| ParseError::InvalidRepeatBounds {
        detail,
        line,
        column,
    };

    let as_count = |arg: &Argument| -> Result<u32, ParseError> {
        match arg {
            Argument::Int(value) => u32::try_from(*value)
                .map_err(|_| invalid(format!("bound {value} is out of range"))),
            other => Err(invalid(format!(
                "bounds must be non-negative integers, found {other:?}"
            ))),
        }
    };

    let (min, max) = match call.args.as_slice() {
        [count] => {
            let count = as_count(count)?;
            (count, count)
        }
        [min, max] => (as_count(min)?, as_count(max)?),
        args => {
            return Err(invalid(format!(
                "repeat() takes 1 or 2 arguments, found {}",
                args.len()
            )))
        }
    };

    if min > max {
        return Err(invalid(format!("min ({min}) is greater than max ({max})")));
    }

    Ok(Repeat { min, max })
}
