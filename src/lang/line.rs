use super::ast::*;
use super::error::*;
use super::lex::*;
use super::parse::*;
use super::token::*;
use super::LineNumber;

/// A numbered program line. The statement is parsed once when the
/// line is created and the result, good or bad, is kept with the text.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    number: LineNumber,
    text: String,
    keyword: Option<Word>,
    statement: Result<Statement, Error>,
}

impl Line {
    pub fn new(number: LineNumber, text: &str) -> Line {
        let text = text.trim();
        let tokens = lex(text);
        let keyword = match tokens.first() {
            Some((_, Token::Word(word))) if word.is_statement() => Some(*word),
            _ => None,
        };
        Line {
            number,
            text: text.to_string(),
            keyword,
            statement: parse(number, &tokens),
        }
    }

    pub fn number(&self) -> LineNumber {
        self.number
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// The statement keyword the line starts with, whether or not
    /// the rest of the line parsed.
    pub fn keyword(&self) -> Option<Word> {
        self.keyword
    }

    pub fn statement(&self) -> Result<&Statement, &Error> {
        self.statement.as_ref()
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {}", self.number, self.text)
    }
}
