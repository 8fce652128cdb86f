use super::{token::*, Column};
use std::iter::Peekable;
use std::str::CharIndices;

/// Splits one statement into tokens, each tagged with its byte range.
pub fn lex(s: &str) -> Vec<(Column, Token)> {
    BasicLexer::lex(s)
}

fn is_basic_whitespace(c: char) -> bool {
    c.is_whitespace()
}

fn is_basic_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_basic_alphabetic(c: char) -> bool {
    c.is_ascii_alphabetic()
}

struct BasicLexer<'a> {
    s: &'a str,
    chars: Peekable<CharIndices<'a>>,
}

impl<'a> Iterator for BasicLexer<'a> {
    type Item = (Column, Token);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((_, ch)) = self.chars.peek() {
            if !is_basic_whitespace(*ch) {
                break;
            }
            self.chars.next();
        }
        let (start, pk) = *self.chars.peek()?;
        let token = if is_basic_digit(pk) || (pk == '.' && self.digit_at(start + 1)) {
            self.number(start)
        } else if is_basic_alphabetic(pk) {
            self.alphabetic(start)
        } else if pk == '"' || pk == '\'' {
            self.string()
        } else {
            self.minutia()
        };
        Some((start..self.position(), token))
    }
}

impl<'a> BasicLexer<'a> {
    fn lex(s: &str) -> Vec<(Column, Token)> {
        let mut lexer = BasicLexer {
            s,
            chars: s.char_indices().peekable(),
        };
        let mut tokens = vec![];
        if let Some((len, word)) = BasicLexer::statement_word(s) {
            tokens.push((0..len, Token::Word(word)));
            lexer.skip_to(len);
        }
        tokens.extend(lexer);
        tokens
    }

    /// A statement keyword is matched by prefix. Most need whitespace
    /// after them; PRINT and NEXT may also end the line and END needs
    /// nothing at all.
    fn statement_word(s: &str) -> Option<(usize, Word)> {
        for word in Word::STATEMENTS.iter() {
            let name = word.to_string();
            if !BasicLexer::starts_with_word(s, 0, &name) {
                continue;
            }
            let after = s[name.len()..].chars().next();
            let bounded = match word {
                Word::End => true,
                Word::Print | Word::Next => after.map_or(true, is_basic_whitespace),
                _ => after.map_or(false, is_basic_whitespace),
            };
            if bounded {
                return Some((name.len(), *word));
            }
        }
        None
    }

    fn starts_with_word(s: &str, at: usize, name: &str) -> bool {
        match s.get(at..at + name.len()) {
            Some(prefix) => prefix.eq_ignore_ascii_case(name),
            None => false,
        }
    }

    fn position(&mut self) -> usize {
        match self.chars.peek() {
            Some((index, _)) => *index,
            None => self.s.len(),
        }
    }

    fn skip_to(&mut self, end: usize) {
        while let Some((index, _)) = self.chars.peek() {
            if *index >= end {
                break;
            }
            self.chars.next();
        }
    }

    fn digit_at(&self, index: usize) -> bool {
        self.s
            .as_bytes()
            .get(index)
            .map_or(false, |b| b.is_ascii_digit())
    }

    fn number(&mut self, start: usize) -> Token {
        let bytes = self.s.as_bytes();
        let mut end = start;
        while self.digit_at(end) {
            end += 1;
        }
        if bytes.get(end) == Some(&b'.') {
            end += 1;
            while self.digit_at(end) {
                end += 1;
            }
        }
        if let Some(b'e') | Some(b'E') = bytes.get(end) {
            let mut exp = end + 1;
            if let Some(b'+') | Some(b'-') = bytes.get(exp) {
                exp += 1;
            }
            if self.digit_at(exp) {
                while self.digit_at(exp) {
                    exp += 1;
                }
                end = exp;
            }
        }
        self.skip_to(end);
        Token::Literal(Literal::Number(self.s[start..end].to_string()))
    }

    fn alphabetic(&mut self, start: usize) -> Token {
        for word in Word::INLINE.iter() {
            let name = word.to_string();
            if BasicLexer::starts_with_word(self.s, start, &name) {
                self.skip_to(start + name.len());
                return Token::Word(*word);
            }
        }
        match Ident::resolve(&mut self.chars) {
            Some(ident) => Token::Ident(ident),
            None => {
                debug_assert!(false, "Failed to tokenize alphabetic.");
                self.minutia()
            }
        }
    }

    fn string(&mut self) -> Token {
        let mut s = String::new();
        let quote = match self.chars.next() {
            Some((_, q)) => q,
            None => return Token::Literal(Literal::String(s)),
        };
        while let Some((_, ch)) = self.chars.next() {
            if ch == quote {
                break;
            }
            s.push(ch);
        }
        Token::Literal(Literal::String(s))
    }

    fn minutia(&mut self) -> Token {
        let ch = match self.chars.next() {
            Some((_, ch)) => ch,
            None => return Token::Unknown(String::new()),
        };
        let mut two_char = |second: char, token: Token| -> Option<Token> {
            if let Some((_, pk)) = self.chars.peek() {
                if *pk == second {
                    self.chars.next();
                    return Some(token);
                }
            }
            None
        };
        use Operator::*;
        match ch {
            '(' => Token::LParen,
            ')' => Token::RParen,
            ',' => Token::Comma,
            '+' => Token::Operator(Plus),
            '-' => Token::Operator(Minus),
            '*' => Token::Operator(Multiply),
            '/' => Token::Operator(Divide),
            '<' => two_char('=', Token::Operator(LessEqual))
                .or_else(|| two_char('>', Token::Operator(NotEqual)))
                .unwrap_or(Token::Operator(Less)),
            '>' => two_char('=', Token::Operator(GreaterEqual))
                .unwrap_or(Token::Operator(Greater)),
            '=' => {
                two_char('=', Token::Operator(Equal));
                Token::Operator(Equal)
            }
            _ => Token::Unknown(ch.to_string()),
        }
    }
}
