use super::{ast::*, token::*, Column, Error, LineNumber};
use std::convert::TryFrom;

type Result<T> = std::result::Result<T, Error>;

pub fn parse(line_number: LineNumber, tokens: &[(Column, Token)]) -> Result<Statement> {
    match Parser::parse(tokens) {
        Err(e) => Err(e.in_line_number(line_number)),
        Ok(r) => Ok(r),
    }
}

struct Parser<'a> {
    tokens: &'a [(Column, Token)],
    pos: usize,
    col: Column,
}

impl<'a> Parser<'a> {
    fn parse(tokens: &'a [(Column, Token)]) -> Result<Statement> {
        let mut parse = Parser {
            tokens,
            pos: 0,
            col: 0..0,
        };
        match parse.statement() {
            Ok(s) => Ok(s),
            Err(e) => {
                if e.column() == (0..0) {
                    Err(e.in_column(&parse.col))
                } else {
                    Err(e)
                }
            }
        }
    }

    fn column(&self) -> Column {
        self.col.clone()
    }

    fn next(&mut self) -> Option<&'a Token> {
        match self.tokens.get(self.pos) {
            Some((col, token)) => {
                self.pos += 1;
                self.col = col.clone();
                Some(token)
            }
            None => {
                let end = self.tokens.last().map_or(0, |(col, _)| col.end);
                self.col = end..end;
                None
            }
        }
    }

    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos).map(|(_, token)| token)
    }

    /// Skips whatever is left of the line.
    fn drain(&mut self) {
        self.pos = self.tokens.len();
    }

    /// Consumes a closing parenthesis if one is next. A missing one is
    /// tolerated.
    fn close_paren(&mut self) {
        if self.peek() == Some(&Token::RParen) {
            self.next();
        }
    }

    fn statement(&mut self) -> Result<Statement> {
        let statement = match self.peek() {
            Some(Token::Word(word)) if word.is_statement() => {
                self.next();
                Statement::for_word(self, *word)?
            }
            Some(Token::Ident(_)) => Statement::assignment(self)?,
            _ => return Err(error!(SyntaxError; "UNKNOWN STATEMENT")),
        };
        self.drain();
        Ok(statement)
    }

    fn expression(&mut self) -> Result<Expression> {
        let mut lhs = self.term()?;
        loop {
            let op = match self.peek() {
                Some(Token::Operator(op @ Operator::Plus))
                | Some(Token::Operator(op @ Operator::Minus)) => *op,
                _ => return Ok(lhs),
            };
            self.next();
            let column = self.column();
            let rhs = self.term()?;
            lhs = Expression::for_binary_op(column, op, lhs, rhs);
        }
    }

    fn term(&mut self) -> Result<Expression> {
        let mut lhs = self.factor()?;
        loop {
            let op = match self.peek() {
                Some(Token::Operator(op @ Operator::Multiply))
                | Some(Token::Operator(op @ Operator::Divide)) => *op,
                _ => return Ok(lhs),
            };
            self.next();
            let column = self.column();
            let rhs = self.factor()?;
            lhs = Expression::for_binary_op(column, op, lhs, rhs);
        }
    }

    /// A missing operand reads as 0 and consumes nothing.
    fn factor(&mut self) -> Result<Expression> {
        if !self.operand_follows() {
            let at = self.tokens.get(self.pos).map_or(self.col.end, |(col, _)| col.start);
            return Ok(Expression::Number(at..at, 0.0));
        }
        match self.next() {
            Some(Token::Operator(Operator::Plus)) => self.factor(),
            Some(Token::Operator(Operator::Minus)) => {
                let column = self.column();
                Ok(Expression::Negation(column, Box::new(self.factor()?)))
            }
            Some(Token::LParen) => {
                let expr = self.expression()?;
                self.close_paren();
                Ok(expr)
            }
            Some(Token::Ident(ident)) => {
                let column = self.column();
                match self.subscript(&column, ident)? {
                    Some((col, index)) => Ok(Expression::Index(col, *ident, Box::new(index))),
                    None => Ok(Expression::Var(column, *ident)),
                }
            }
            Some(Token::Literal(Literal::Number(s))) => match s.parse::<f64>() {
                Ok(n) => Ok(Expression::Number(self.column(), n)),
                Err(_) => Err(error!(SyntaxError; "INVALID NUMBER")),
            },
            _ => Err(error!(SyntaxError; "EXPECTED EXPRESSION")),
        }
    }

    fn operand_follows(&self) -> bool {
        matches!(
            self.peek(),
            Some(Token::Operator(Operator::Plus))
                | Some(Token::Operator(Operator::Minus))
                | Some(Token::LParen)
                | Some(Token::Ident(_))
                | Some(Token::Literal(Literal::Number(_)))
        )
    }

    /// Parses `'(' expr [')']` after an identifier when present. The
    /// returned column spans from the identifier to the end of the subscript.
    fn subscript(&mut self, column: &Column, ident: &Ident) -> Result<Option<(Column, Expression)>> {
        if self.peek() != Some(&Token::LParen) {
            return Ok(None);
        }
        if !ident.is_plain() {
            return Err(error!(SyntaxError, ..column; "ARRAYS ONLY SUPPORTED FOR A-Z"));
        }
        self.next();
        let index = self.expression()?;
        self.close_paren();
        Ok(Some((column.start..self.col.end, index)))
    }

    fn condition(&mut self) -> Result<Condition> {
        let lhs = self.expression()?;
        let relation = match self.peek() {
            Some(Token::Operator(op)) if op.is_relational() => Relation::for_operator(*op),
            _ => return Ok(Condition::Truth(lhs)),
        };
        self.next();
        let column = self.column();
        let rhs = self.expression()?;
        Ok(Condition::Compare(column, relation, lhs, rhs))
    }

    fn variable(&mut self) -> Result<Variable> {
        let (column, ident) = self.ident()?;
        match self.subscript(&column, &ident)? {
            Some((col, index)) => Ok(Variable::Array(col, ident, index)),
            None => Ok(Variable::Unary(column, ident)),
        }
    }

    fn ident(&mut self) -> Result<(Column, Ident)> {
        let ident = match self.next() {
            Some(Token::Ident(i)) => *i,
            _ => return Err(error!(SyntaxError; "EXPECTED VARIABLE")),
        };
        Ok((self.column(), ident))
    }

    fn line_number(&mut self) -> Result<LineNumber> {
        match self.next() {
            Some(token) => LineNumber::try_from(token),
            None => Err(error!(SyntaxError; "EXPECTED LINE NUMBER")),
        }
    }

    fn expect(&mut self, token: Token) -> Result<()> {
        if let Some(t) = self.next() {
            if *t == token {
                return Ok(());
            }
        }
        use Token::*;
        let msg = match token {
            Unknown(_) => "UNEXPECTED TOKEN".to_string(),
            Literal(_) => "EXPECTED LITERAL".to_string(),
            Word(word) => format!("EXPECTED {}", word),
            Operator(op) => format!("EXPECTED {}", op),
            Ident(_) => "EXPECTED VARIABLE".to_string(),
            LParen => "EXPECTED LEFT PARENTHESIS".to_string(),
            RParen => "EXPECTED RIGHT PARENTHESIS".to_string(),
            Comma => "EXPECTED COMMA".to_string(),
        };
        Err(error!(SyntaxError; &msg))
    }
}

impl Expression {
    fn for_binary_op(col: Column, op: Operator, lhs: Expression, rhs: Expression) -> Expression {
        use Operator::*;
        match op {
            Plus => Expression::Add(col, Box::new(lhs), Box::new(rhs)),
            Minus => Expression::Subtract(col, Box::new(lhs), Box::new(rhs)),
            Multiply => Expression::Multiply(col, Box::new(lhs), Box::new(rhs)),
            Divide => Expression::Divide(col, Box::new(lhs), Box::new(rhs)),
            Equal | NotEqual | Less | LessEqual | Greater | GreaterEqual => {
                unreachable!("relational operator in arithmetic")
            }
        }
    }
}

impl Relation {
    fn for_operator(op: Operator) -> Relation {
        use Operator::*;
        match op {
            Equal => Relation::Equal,
            NotEqual => Relation::NotEqual,
            Less => Relation::Less,
            LessEqual => Relation::LessEqual,
            Greater => Relation::Greater,
            GreaterEqual => Relation::GreaterEqual,
            Multiply | Divide | Plus | Minus => unreachable!("arithmetic operator in comparison"),
        }
    }
}

impl Statement {
    fn for_word(parse: &mut Parser, word: Word) -> Result<Statement> {
        let column = parse.column();
        use Word::*;
        match word {
            Dim => Self::r#dim(parse, column),
            End => Self::r#end(parse, column),
            For => Self::r#for(parse, column),
            Goto => Self::r#goto(parse, column),
            If => Self::r#if(parse, column),
            Let => Self::r#let(parse, column),
            Next => Self::r#next(parse, column),
            Print => Self::r#print(parse, column),
            Step | Then | To => Err(error!(SyntaxError; "EXPECTED STATEMENT")),
        }
    }

    fn assignment(parse: &mut Parser) -> Result<Statement> {
        let var = parse.variable()?;
        let column = match &var {
            Variable::Unary(col, _) | Variable::Array(col, ..) => col.clone(),
        };
        match parse.next() {
            Some(Token::Operator(Operator::Equal)) => {}
            _ => return Err(error!(SyntaxError, ..&column; "UNKNOWN STATEMENT")),
        }
        Ok(Statement::Let(column, var, parse.expression()?))
    }

    fn r#dim(parse: &mut Parser, column: Column) -> Result<Statement> {
        let mut dims = vec![];
        while let Some(Token::Ident(_)) = parse.peek() {
            let (col, ident) = parse.ident()?;
            if !ident.is_plain() {
                return Err(error!(SyntaxError, ..&col; "ARRAYS ONLY SUPPORTED FOR A-Z"));
            }
            parse.expect(Token::LParen)?;
            let bound = parse.expression()?;
            parse.close_paren();
            dims.push(Dimension {
                col: col.start..parse.col.end,
                ident,
                bound,
            });
            if parse.peek() != Some(&Token::Comma) {
                break;
            }
            parse.next();
        }
        Ok(Statement::Dim(column, dims))
    }

    fn r#end(parse: &mut Parser, column: Column) -> Result<Statement> {
        parse.drain();
        Ok(Statement::End(column))
    }

    fn r#for(parse: &mut Parser, column: Column) -> Result<Statement> {
        let (_, ident) = parse.ident()?;
        parse.expect(Token::Operator(Operator::Equal))?;
        let from = parse.expression()?;
        parse.expect(Token::Word(Word::To))?;
        let to = parse.expression()?;
        let step = match parse.peek() {
            Some(Token::Word(Word::Step)) => {
                parse.next();
                Some(parse.expression()?)
            }
            _ => None,
        };
        Ok(Statement::For(column, ident, from, to, step))
    }

    fn r#goto(parse: &mut Parser, column: Column) -> Result<Statement> {
        Ok(Statement::Goto(column, parse.line_number()?))
    }

    fn r#if(parse: &mut Parser, column: Column) -> Result<Statement> {
        let predicate = parse.condition()?;
        match parse.peek() {
            Some(Token::Word(Word::Then)) => {
                parse.next();
                Ok(Statement::If(column, predicate, Some(parse.line_number()?)))
            }
            _ => {
                parse.drain();
                Ok(Statement::If(column, predicate, None))
            }
        }
    }

    fn r#let(parse: &mut Parser, column: Column) -> Result<Statement> {
        let var = parse.variable()?;
        parse.expect(Token::Operator(Operator::Equal))?;
        let expr = parse.expression()?;
        Ok(Statement::Let(column, var, expr))
    }

    fn r#next(parse: &mut Parser, column: Column) -> Result<Statement> {
        match parse.peek() {
            Some(Token::Ident(_)) => {
                let (_, ident) = parse.ident()?;
                Ok(Statement::Next(column, Some(ident)))
            }
            _ => Ok(Statement::Next(column, None)),
        }
    }

    fn r#print(parse: &mut Parser, column: Column) -> Result<Statement> {
        if let Some(Token::Literal(Literal::String(s))) = parse.peek() {
            parse.next();
            return Ok(Statement::Print(
                column,
                Printable::Text(parse.column(), s.as_str().into()),
            ));
        }
        Ok(Statement::Print(column, Printable::Value(parse.expression()?)))
    }
}

#[cfg(test)]
mod tests {
    use super::super::lex::*;
    use super::*;

    fn parse_str(s: &str) -> Statement {
        match parse(10, &lex(s)) {
            Ok(statement) => statement,
            Err(e) => panic!("{} : {:?}", e, e),
        }
    }

    fn parse_err(s: &str) -> Error {
        match parse(10, &lex(s)) {
            Ok(statement) => panic!("{:?}", statement),
            Err(e) => e,
        }
    }

    fn ident(letter: char) -> Ident {
        Ident::new(letter, None).unwrap()
    }

    #[test]
    fn test_let_and_assignment() {
        let answer = Statement::Let(
            0..3,
            Variable::Unary(4..5, ident('A')),
            Expression::Number(6..8, 12.0),
        );
        assert_eq!(parse_str("LET A=12"), answer);
        let answer = Statement::Let(
            0..1,
            Variable::Unary(0..1, ident('A')),
            Expression::Number(2..4, 12.0),
        );
        assert_eq!(parse_str("A=12"), answer);
    }

    #[test]
    fn test_precedence_and_paren() {
        let answer = Statement::Let(
            0..3,
            Variable::Unary(4..5, ident('A')),
            Expression::Subtract(
                8..9,
                Box::new(Expression::Number(7..8, 2.0)),
                Box::new(Expression::Multiply(
                    14..15,
                    Box::new(Expression::Add(
                        11..12,
                        Box::new(Expression::Number(10..11, 3.0)),
                        Box::new(Expression::Var(12..13, ident('B'))),
                    )),
                    Box::new(Expression::Number(15..16, 4.0)),
                )),
            ),
        );
        assert_eq!(parse_str("let A=(2-(3+B)*4)"), answer);
    }

    #[test]
    fn test_left_assoc() {
        let answer = Statement::Print(
            0..5,
            Printable::Value(Expression::Subtract(
                9..10,
                Box::new(Expression::Subtract(
                    7..8,
                    Box::new(Expression::Number(6..7, 8.0)),
                    Box::new(Expression::Number(8..9, 2.0)),
                )),
                Box::new(Expression::Number(10..11, 1.0)),
            )),
        );
        assert_eq!(parse_str("PRINT 8-2-1"), answer);
    }

    #[test]
    fn test_unary_signs() {
        let answer = Statement::Print(
            0..5,
            Printable::Value(Expression::Negation(
                6..7,
                Box::new(Expression::Negation(
                    8..9,
                    Box::new(Expression::Number(9..10, 5.0)),
                )),
            )),
        );
        assert_eq!(parse_str("PRINT -+-5"), answer);
    }

    #[test]
    fn test_array_subscripts() {
        let answer = Statement::Let(
            0..4,
            Variable::Array(0..4, ident('A'), Expression::Number(2..3, 2.0)),
            Expression::Index(
                5..9,
                ident('B'),
                Box::new(Expression::Var(7..8, ident('I'))),
            ),
        );
        assert_eq!(parse_str("A(2)=B(I)"), answer);
        let e = parse_err("A1(2)=5");
        assert_eq!(e.column(), 0..2);
        assert_eq!(
            e.to_string(),
            "SYNTAX ERROR IN 10 (0..2); ARRAYS ONLY SUPPORTED FOR A-Z"
        );
        parse_err("PRINT B2(1)");
        parse_err("DIM A1(3)");
    }

    #[test]
    fn test_dim() {
        match parse_str("DIM A(3), B(N+1)") {
            Statement::Dim(_, dims) => {
                assert_eq!(dims.len(), 2);
                assert_eq!(dims[0].ident, ident('A'));
                assert_eq!(dims[0].col, 4..8);
                assert_eq!(dims[1].ident, ident('B'));
            }
            s => panic!("{:?}", s),
        }
        parse_err("DIM A");
        match parse_str("DIM A(2), B(1") {
            Statement::Dim(_, dims) => {
                assert_eq!(dims.len(), 2);
                assert_eq!(dims[1].col, 10..13);
                assert_eq!(dims[1].bound, Expression::Number(12..13, 1.0));
            }
            s => panic!("{:?}", s),
        }
        match parse_str("DIM A(3),") {
            Statement::Dim(_, dims) => assert_eq!(dims.len(), 1),
            s => panic!("{:?}", s),
        }
    }

    #[test]
    fn test_for() {
        match parse_str("FOR I=1 TO 10 STEP -2") {
            Statement::For(_, i, from, _, step) => {
                assert_eq!(i, ident('I'));
                assert_eq!(from, Expression::Number(6..7, 1.0));
                assert!(step.is_some());
            }
            s => panic!("{:?}", s),
        }
        match parse_str("FOR I=1 TO 10") {
            Statement::For(_, _, _, _, step) => assert!(step.is_none()),
            s => panic!("{:?}", s),
        }
        assert_eq!(
            parse_err("FOR I=1 10").to_string(),
            "SYNTAX ERROR IN 10 (8..10); EXPECTED TO"
        );
    }

    #[test]
    fn test_if() {
        let answer = Statement::If(
            0..2,
            Condition::Compare(
                4..6,
                Relation::LessEqual,
                Expression::Var(3..4, ident('A')),
                Expression::Number(6..7, 5.0),
            ),
            Some(100),
        );
        assert_eq!(parse_str("IF A<=5 THEN 100"), answer);
        let answer = Statement::If(
            0..2,
            Condition::Truth(Expression::Var(3..4, ident('A'))),
            None,
        );
        assert_eq!(parse_str("IF A GOTO 100"), answer);
        parse_err("IF A THEN");
        parse_err("IF A THEN 1.5");
    }

    #[test]
    fn test_print() {
        assert_eq!(
            parse_str("PRINT \"HI THERE\""),
            Statement::Print(0..5, Printable::Text(6..16, "HI THERE".into()))
        );
        assert_eq!(
            parse_str("PRINT 'A'"),
            Statement::Print(0..5, Printable::Text(6..9, "A".into()))
        );
        assert_eq!(
            parse_str("PRINT"),
            Statement::Print(0..5, Printable::Value(Expression::Number(5..5, 0.0)))
        );
    }

    #[test]
    fn test_next_goto_end() {
        assert_eq!(parse_str("NEXT"), Statement::Next(0..4, None));
        assert_eq!(parse_str("NEXT J"), Statement::Next(0..4, Some(ident('J'))));
        assert_eq!(parse_str("GOTO 30"), Statement::Goto(0..4, 30));
        assert_eq!(parse_str("END OF PROGRAM"), Statement::End(0..3));
    }

    #[test]
    fn test_unknown_and_trailing() {
        assert_eq!(
            parse_err("AB=1").to_string(),
            "SYNTAX ERROR IN 10 (0..1); UNKNOWN STATEMENT"
        );
        assert_eq!(
            parse_err("GOTO10").to_string(),
            "SYNTAX ERROR IN 10 (0..1); UNKNOWN STATEMENT"
        );
        parse_err("?");
        assert_eq!(
            parse_err("LET A 5").to_string(),
            "SYNTAX ERROR IN 10 (6..7); EXPECTED ="
        );
    }

    #[test]
    fn test_missing_operand_is_zero() {
        assert_eq!(
            parse_str("LET A="),
            Statement::Let(
                0..3,
                Variable::Unary(4..5, ident('A')),
                Expression::Number(6..6, 0.0)
            )
        );
        assert_eq!(
            parse_str("PRINT 2*"),
            Statement::Print(
                0..5,
                Printable::Value(Expression::Multiply(
                    7..8,
                    Box::new(Expression::Number(6..7, 2.0)),
                    Box::new(Expression::Number(8..8, 0.0)),
                ))
            )
        );
    }

    #[test]
    fn test_trailing_text_is_ignored() {
        assert_eq!(
            parse_str("PRINT 1 2"),
            Statement::Print(0..5, Printable::Value(Expression::Number(6..7, 1.0)))
        );
        assert_eq!(
            parse_str("LET A=1 2"),
            Statement::Let(
                0..3,
                Variable::Unary(4..5, ident('A')),
                Expression::Number(6..7, 1.0)
            )
        );
        assert_eq!(
            parse_str("PRINT \"HI\" X"),
            Statement::Print(0..5, Printable::Text(6..10, "HI".into()))
        );
        assert_eq!(parse_str("NEXT 5"), Statement::Next(0..4, None));
    }

    #[test]
    fn test_missing_right_paren() {
        assert_eq!(
            parse_str("PRINT (2+3"),
            Statement::Print(
                0..5,
                Printable::Value(Expression::Add(
                    8..9,
                    Box::new(Expression::Number(7..8, 2.0)),
                    Box::new(Expression::Number(9..10, 3.0)),
                ))
            )
        );
        assert_eq!(
            parse_str("A(2=5"),
            Statement::Let(
                0..3,
                Variable::Array(0..3, ident('A'), Expression::Number(2..3, 2.0)),
                Expression::Number(4..5, 5.0)
            )
        );
        match parse_str("PRINT B(I") {
            Statement::Print(_, Printable::Value(Expression::Index(col, i, _))) => {
                assert_eq!(col, 6..9);
                assert_eq!(i, ident('B'));
            }
            s => panic!("{:?}", s),
        }
    }
}
