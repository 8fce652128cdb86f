pub use super::ident::Ident;
use super::{Error, LineNumber};
use std::convert::TryFrom;

#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    Unknown(String),
    Literal(Literal),
    Word(Word),
    Operator(Operator),
    Ident(Ident),
    LParen,
    RParen,
    Comma,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Token::*;
        match self {
            Unknown(s) => write!(f, "{}", s),
            Literal(s) => write!(f, "{}", s),
            Word(s) => write!(f, "{}", s),
            Operator(s) => write!(f, "{}", s),
            Ident(s) => write!(f, "{}", s),
            LParen => write!(f, "("),
            RParen => write!(f, ")"),
            Comma => write!(f, ","),
        }
    }
}

impl TryFrom<&Token> for LineNumber {
    type Error = Error;
    fn try_from(token: &Token) -> Result<Self, Self::Error> {
        let msg = "INVALID LINE NUMBER";
        if let Token::Literal(Literal::Number(s)) = token {
            if s.chars().all(|c| c.is_ascii_digit()) {
                if let Ok(line) = s.parse::<LineNumber>() {
                    return Ok(line);
                }
            }
        }
        Err(error!(SyntaxError; msg))
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum Literal {
    Number(String),
    String(String),
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Literal::*;
        match self {
            Number(s) => write!(f, "{}", s),
            String(s) => write!(f, "\"{}\"", s),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Word {
    Dim,
    End,
    For,
    Goto,
    If,
    Let,
    Next,
    Print,
    Step,
    Then,
    To,
}

impl Word {
    /// Statement keywords in the order they are tried against a line.
    pub const STATEMENTS: [Word; 8] = [
        Word::Let,
        Word::Dim,
        Word::For,
        Word::Print,
        Word::Goto,
        Word::If,
        Word::End,
        Word::Next,
    ];

    /// Keywords recognized anywhere after the statement keyword.
    pub const INLINE: [Word; 3] = [Word::To, Word::Step, Word::Then];

    pub fn is_statement(self) -> bool {
        Word::STATEMENTS.contains(&self)
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Word::*;
        match self {
            Dim => write!(f, "DIM"),
            End => write!(f, "END"),
            For => write!(f, "FOR"),
            Goto => write!(f, "GOTO"),
            If => write!(f, "IF"),
            Let => write!(f, "LET"),
            Next => write!(f, "NEXT"),
            Print => write!(f, "PRINT"),
            Step => write!(f, "STEP"),
            Then => write!(f, "THEN"),
            To => write!(f, "TO"),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Operator {
    Multiply,
    Divide,
    Plus,
    Minus,
    Equal,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
}

impl Operator {
    pub fn is_relational(self) -> bool {
        use Operator::*;
        match self {
            Equal | NotEqual | Less | LessEqual | Greater | GreaterEqual => true,
            Multiply | Divide | Plus | Minus => false,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Operator::*;
        match self {
            Multiply => write!(f, "*"),
            Divide => write!(f, "/"),
            Plus => write!(f, "+"),
            Minus => write!(f, "-"),
            Equal => write!(f, "="),
            NotEqual => write!(f, "<>"),
            Less => write!(f, "<"),
            LessEqual => write!(f, "<="),
            Greater => write!(f, ">"),
            GreaterEqual => write!(f, ">="),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_number_from_token() {
        let t = Token::Literal(Literal::Number("100".to_string()));
        assert_eq!(LineNumber::try_from(&t), Ok(100));
        let t = Token::Literal(Literal::Number("1.5".to_string()));
        assert!(LineNumber::try_from(&t).is_err());
        let t = Token::Literal(Literal::Number("99999999999".to_string()));
        assert!(LineNumber::try_from(&t).is_err());
        let t = Token::Ident(Ident::new('A', None).unwrap());
        assert!(LineNumber::try_from(&t).is_err());
    }

    #[test]
    fn test_word_classes() {
        assert!(Word::Next.is_statement());
        assert!(!Word::Then.is_statement());
        assert!(Operator::NotEqual.is_relational());
        assert!(!Operator::Minus.is_relational());
    }
}
