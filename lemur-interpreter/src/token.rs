use std::fmt::{self, Display};
use std::mem;

/// A token is its kind plus the source text that produced it. Kinds with a
/// fixed spelling carry no payload; `Ident`, `Int` and `Illegal` keep the
/// scanned text. `Int` stays text here, the parser converts it.
#[derive(PartialEq, Debug, Clone, Eq, Hash)]
pub enum Token {
    Illegal(String),
    EOF,

    // Identifiers + literals
    Ident(String),
    Int(String),

    // Operators
    Assign,
    Plus,
    Minus,
    Bang,
    Asterisk,
    Slash,
    EQ,
    NotEq,

    LT,
    GT,

    // Delimiters
    Comma,
    Semicolon,

    LParen,
    RParen,
    LBrace,
    RBrace,

    // Keywords
    Function,
    Let,
    True,
    False,
    If,
    Else,
    Return,
}

impl Token {
    /// The exact substring of source that produced this token. Empty only
    /// for `EOF`.
    pub fn literal(&self) -> &str {
        match self {
            Token::Illegal(s) | Token::Ident(s) | Token::Int(s) => s.as_str(),
            Token::EOF => "",
            Token::Assign => "=",
            Token::Plus => "+",
            Token::Minus => "-",
            Token::Bang => "!",
            Token::Asterisk => "*",
            Token::Slash => "/",
            Token::EQ => "==",
            Token::NotEq => "!=",
            Token::LT => "<",
            Token::GT => ">",
            Token::Comma => ",",
            Token::Semicolon => ";",
            Token::LParen => "(",
            Token::RParen => ")",
            Token::LBrace => "{",
            Token::RBrace => "}",
            Token::Function => "fun",
            Token::Let => "let",
            Token::True => "true",
            Token::False => "false",
            Token::If => "if",
            Token::Else => "else",
            Token::Return => "return",
        }
    }

    /// Maps a scanned identifier to its keyword token, or wraps it in
    /// `Ident`. Case-sensitive, whole-token match.
    pub fn lookup_ident(ident: String) -> Token {
        match ident.as_str() {
            "fun" => Token::Function,
            "let" => Token::Let,
            "true" => Token::True,
            "false" => Token::False,
            "if" => Token::If,
            "else" => Token::Else,
            "return" => Token::Return,
            _ => Token::Ident(ident),
        }
    }

    /// Compares kinds only, ignoring any payload.
    pub fn is_same_kind(&self, other: &Token) -> bool {
        mem::discriminant(self) == mem::discriminant(other)
    }
}

impl Display for Token {
    /// The kind tag used in parser diagnostics. Operators and delimiters
    /// display as their glyph, everything else as an upper-case tag.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Token::Illegal(_) => "ILLEGAL",
            Token::EOF => "EOF",
            Token::Ident(_) => "IDENT",
            Token::Int(_) => "INT",
            Token::Function => "FUNCTION",
            Token::Let => "LET",
            Token::True => "TRUE",
            Token::False => "FALSE",
            Token::If => "IF",
            Token::Else => "ELSE",
            Token::Return => "RETURN",
            other => other.literal(),
        };
        write!(f, "{}", tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_ident_matches_whole_tokens() {
        assert_eq!(Token::lookup_ident("fun".to_owned()), Token::Function);
        assert_eq!(Token::lookup_ident("let".to_owned()), Token::Let);
        assert_eq!(Token::lookup_ident("true".to_owned()), Token::True);
        assert_eq!(Token::lookup_ident("false".to_owned()), Token::False);
        assert_eq!(Token::lookup_ident("if".to_owned()), Token::If);
        assert_eq!(Token::lookup_ident("else".to_owned()), Token::Else);
        assert_eq!(Token::lookup_ident("return".to_owned()), Token::Return);
        assert_eq!(
            Token::lookup_ident("letter".to_owned()),
            Token::Ident("letter".to_owned())
        );
        assert_eq!(
            Token::lookup_ident("Let".to_owned()),
            Token::Ident("Let".to_owned())
        );
    }

    #[test]
    fn is_same_kind_ignores_payload() {
        assert!(Token::Ident("a".to_owned()).is_same_kind(&Token::Ident(String::new())));
        assert!(Token::Int("5".to_owned()).is_same_kind(&Token::Int("10".to_owned())));
        assert!(!Token::Ident("a".to_owned()).is_same_kind(&Token::Int("5".to_owned())));
        assert!(Token::Assign.is_same_kind(&Token::Assign));
        assert!(!Token::Assign.is_same_kind(&Token::EQ));
    }

    #[test]
    fn diagnostic_tags() {
        assert_eq!(Token::Assign.to_string(), "=");
        assert_eq!(Token::EQ.to_string(), "==");
        assert_eq!(Token::Ident("x".to_owned()).to_string(), "IDENT");
        assert_eq!(Token::Int("5".to_owned()).to_string(), "INT");
        assert_eq!(Token::Function.to_string(), "FUNCTION");
    }
}
