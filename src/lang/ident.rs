// Used in both Token and Ast

use std::iter::Peekable;
use std::str::CharIndices;

/// A variable name: one letter, optionally followed by one digit.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct Ident {
    letter: u8,
    digit: Option<u8>,
}

/// Address of one scalar cell in variable memory.
///
/// `A`..`Z` occupy slots 0 to 25. A letter with a digit suffix
/// occupies `26 + letter * 10 + digit`.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct Slot(u16);

impl Slot {
    pub const COUNT: usize = 26 + 26 * 10;

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl Ident {
    pub fn new(letter: char, digit: Option<u8>) -> Option<Ident> {
        if !letter.is_ascii_alphabetic() {
            return None;
        }
        if let Some(d) = digit {
            if d > 9 {
                return None;
            }
        }
        Some(Ident {
            letter: letter.to_ascii_uppercase() as u8 - b'A',
            digit,
        })
    }

    /// Consumes a letter and an optional digit from the cursor.
    /// Nothing is consumed when the cursor is not on a letter.
    pub fn resolve(chars: &mut Peekable<CharIndices>) -> Option<Ident> {
        let letter = match chars.peek() {
            Some((_, ch)) if ch.is_ascii_alphabetic() => *ch,
            _ => return None,
        };
        chars.next();
        let digit = match chars.peek() {
            Some((_, ch)) if ch.is_ascii_digit() => {
                let d = *ch as u8 - b'0';
                chars.next();
                Some(d)
            }
            _ => None,
        };
        Ident::new(letter, digit)
    }

    pub fn slot(&self) -> Slot {
        match self.digit {
            None => Slot(self.letter as u16),
            Some(d) => Slot(26 + self.letter as u16 * 10 + d as u16),
        }
    }

    pub fn letter(&self) -> char {
        (b'A' + self.letter) as char
    }

    /// Only plain letters may name an array.
    pub fn is_plain(&self) -> bool {
        self.digit.is_none()
    }
}

impl std::fmt::Display for Ident {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.digit {
            None => write!(f, "{}", self.letter()),
            Some(d) => write!(f, "{}{}", self.letter(), d),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(s: &str) -> (Option<Ident>, Option<char>) {
        let mut chars = s.char_indices().peekable();
        let ident = Ident::resolve(&mut chars);
        (ident, chars.next().map(|(_, ch)| ch))
    }

    #[test]
    fn test_slots() {
        assert_eq!(resolve("a").0.unwrap().slot().index(), 0);
        assert_eq!(resolve("Z").0.unwrap().slot().index(), 25);
        assert_eq!(resolve("A0").0.unwrap().slot().index(), 26);
        assert_eq!(resolve("B3").0.unwrap().slot().index(), 39);
        assert_eq!(resolve("z9").0.unwrap().slot().index(), Slot::COUNT - 1);
    }

    #[test]
    fn test_cursor_advance() {
        let (ident, rest) = resolve("X12");
        assert_eq!(ident.unwrap().to_string(), "X1");
        assert_eq!(rest, Some('2'));
        let (ident, rest) = resolve("AB");
        assert_eq!(ident.unwrap().to_string(), "A");
        assert_eq!(rest, Some('B'));
        let (ident, rest) = resolve("9A");
        assert_eq!(ident, None);
        assert_eq!(rest, Some('9'));
    }

    #[test]
    fn test_plain() {
        assert!(Ident::new('q', None).unwrap().is_plain());
        assert!(!Ident::new('q', Some(1)).unwrap().is_plain());
        assert_eq!(Ident::new('_', None), None);
    }
}
