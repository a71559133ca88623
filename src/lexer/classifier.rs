//! Character classes of the scanned language.
//!
//! Every predicate here is pure. Together they decide what is lexically
//! legal: anything none of them accepts is [`is_invalid`].

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CharClass {
    Whitespace,
    CommentStart,
    Letter,
    Digit,
    Underscore,
    Point,
    MathOperator,
    Assignment,
    RelOperator,
    Parenthesis,
    Invalid,
}

pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

pub fn is_end_of_line(c: char) -> bool {
    matches!(c, '\n' | '\r')
}

pub fn is_comment_start(c: char) -> bool {
    c == '#'
}

pub fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

pub fn is_underscore(c: char) -> bool {
    c == '_'
}

pub fn is_point(c: char) -> bool {
    c == '.'
}

pub fn is_math_operator(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/')
}

pub fn is_assignment(c: char) -> bool {
    c == '='
}

/// `=` is also accepted by [`is_assignment`]; callers check assignment first.
pub fn is_rel_operator(c: char) -> bool {
    matches!(c, '=' | '>' | '<' | '!')
}

pub fn is_parenthesis(c: char) -> bool {
    matches!(c, '(' | ')')
}

pub fn is_invalid(c: char) -> bool {
    classify(c) == CharClass::Invalid
}

/// Classifies a character into exactly one class, assignment winning over
/// relational operator for `=`.
pub fn classify(c: char) -> CharClass {
    if is_whitespace(c) {
        CharClass::Whitespace
    } else if is_comment_start(c) {
        CharClass::CommentStart
    } else if is_letter(c) {
        CharClass::Letter
    } else if is_digit(c) {
        CharClass::Digit
    } else if is_underscore(c) {
        CharClass::Underscore
    } else if is_point(c) {
        CharClass::Point
    } else if is_math_operator(c) {
        CharClass::MathOperator
    } else if is_assignment(c) {
        CharClass::Assignment
    } else if is_rel_operator(c) {
        CharClass::RelOperator
    } else if is_parenthesis(c) {
        CharClass::Parenthesis
    } else {
        CharClass::Invalid
    }
}
