use lazy_static::lazy_static;
use std::{collections::HashSet, fmt::Display};

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashSet<&'static str> = {
        let mut set = HashSet::new();
        set.insert("int");
        set.insert("float");
        set.insert("print");
        set.insert("if");
        set.insert("else");
        set
    };
}

pub fn is_reserved(text: &str) -> bool {
    RESERVED_LOOKUP.contains(text)
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Identifier,
    Reserved,
    MathOperator, // + - * /
    Assignment,   // =
    RelOperator,  // == != < <= > >= !
    Parenthesis,
    Number,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {{ kind: {}, text: {:?} }}", self.kind, self.text)
    }
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Token {
            kind,
            text: text.into(),
        }
    }

    pub fn debug(&self) {
        println!("{} ({})", self.kind, self.text);
    }
}
