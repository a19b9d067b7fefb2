//! Assembly lexer - splits source into instruction lines

use core_types::Value;

/// Comment delimiter; everything after it on a line is ignored
pub const COMMENT: char = ';';

/// One non-empty instruction line of source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine<'a> {
    /// 1-based line number in the source text
    pub number: u32,
    /// First word on the line
    pub mnemonic: &'a str,
    /// Remaining words on the line
    pub operands: Vec<&'a str>,
}

/// Split `source` into instruction lines.
///
/// Comments and blank lines are dropped; line numbers still count them.
///
/// # Example
///
/// ```
/// use assembler::lexer::tokenize;
///
/// let lines = tokenize("; header\n\n  constant 1.5\nRET");
/// assert_eq!(lines.len(), 2);
/// assert_eq!(lines[0].number, 3);
/// assert_eq!(lines[0].mnemonic, "constant");
/// assert_eq!(lines[0].operands, vec!["1.5"]);
/// ```
pub fn tokenize(source: &str) -> Vec<SourceLine<'_>> {
    source
        .lines()
        .enumerate()
        .filter_map(|(i, raw)| {
            let code = match raw.find(COMMENT) {
                Some(pos) => &raw[..pos],
                None => raw,
            };
            let mut words = code.split_whitespace();
            let mnemonic = words.next()?;
            Some(SourceLine {
                number: i as u32 + 1,
                mnemonic,
                operands: words.collect(),
            })
        })
        .collect()
}

/// A literal operand
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Literal {
    /// `nil`
    Nil,
    /// `true` or `false`
    Bool(bool),
    /// A decimal number such as `3`, `-0.5` or `1e3`
    Number(f64),
}

impl Literal {
    /// Classify a literal token, or `None` if it is not one.
    ///
    /// Keywords are case-sensitive. Numbers are plain decimal: words such as
    /// `inf` or `NaN` are not literals.
    pub fn parse(text: &str) -> Option<Self> {
        match text {
            "nil" => Some(Literal::Nil),
            "true" => Some(Literal::Bool(true)),
            "false" => Some(Literal::Bool(false)),
            _ => {
                let numeric = text
                    .chars()
                    .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'));
                if !numeric || !text.chars().any(|c| c.is_ascii_digit()) {
                    return None;
                }
                text.parse::<f64>().ok().map(Literal::Number)
            }
        }
    }
}

impl From<Literal> for Value {
    fn from(literal: Literal) -> Self {
        match literal {
            Literal::Nil => Value::Nil,
            Literal::Bool(b) => Value::Bool(b),
            Literal::Number(n) => Value::Number(n),
        }
    }
}
