use std::{fs, iter::FusedIterator, mem, path::Path, rc::Rc};

use log::{debug, trace};

use crate::{
    errors::errors::{Error, ErrorImpl, NumberFault, SourceError},
    Position, MK_TOKEN,
};

use super::{
    classifier::{self, CharClass},
    tokens::{is_reserved, Token, TokenKind},
};

/// Most decimal points a single number literal may contain.
pub const MAX_POINTS: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Start,
    Comment,
    Identifier,
    AssignLookahead,
    RelLookahead,
    NumberInt,
    NumberFloat,
}

enum Step {
    Continue(State),
    Emit(TokenKind),
}

/// Finite-state scanner over one source unit.
///
/// Each call to [`Scanner::next_token`] recognises one lexeme. Boundaries are
/// found with one character of lookahead; the over-read character is kept in
/// a single pending slot together with its position, so it is reclassified
/// on the next call without disturbing line/column tracking.
#[derive(Debug, Clone)]
pub struct Scanner {
    source: Vec<char>,
    cursor: usize,
    line: u32,
    column: u32,
    pending: Option<(char, Position)>,
    lexeme: String,
    points: u32,
    file: Rc<String>,
    finished: bool,
}

impl Scanner {
    pub fn new(source: impl Into<String>, file: Option<String>) -> Scanner {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        let source: Vec<char> = source.into().chars().collect();
        debug!("scanner created for {} ({} chars)", file_name, source.len());

        Scanner {
            source,
            cursor: 0,
            line: 1,
            column: 1,
            pending: None,
            lexeme: String::new(),
            points: 0,
            file: file_name,
            finished: false,
        }
    }

    /// Reads the whole file at `path` and builds a scanner over it.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Scanner, SourceError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| SourceError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;

        debug!("read {} bytes from {}", contents.len(), path.display());
        Ok(Scanner::new(contents, Some(path.display().to_string())))
    }

    pub fn file(&self) -> &str {
        &self.file
    }

    /// Position of the next character to be read.
    pub fn current_position(&self) -> Position {
        match self.pending {
            Some((_, position)) => position,
            None => Position::new(self.line, self.column),
        }
    }

    pub fn at_eof(&self) -> bool {
        self.pending.is_none() && self.cursor >= self.source.len()
    }

    /// Scans the next token.
    ///
    /// Returns `Ok(None)` once only whitespace and comments remain. Any
    /// error ends the usable token stream.
    pub fn next_token(&mut self) -> Result<Option<Token>, Error> {
        self.lexeme.clear();
        self.points = 0;
        let mut state = State::Start;

        loop {
            let Some((c, position)) = self.advance() else {
                return self.end_of_input(state);
            };

            let step = match state {
                State::Start => self.start(c, position)?,
                State::Comment => self.comment(c),
                State::Identifier => self.identifier(c, position)?,
                State::AssignLookahead => self.assign_lookahead(c, position),
                State::RelLookahead => self.rel_lookahead(c, position),
                State::NumberInt => self.number_int(c, position)?,
                State::NumberFloat => self.number_float(c, position)?,
            };

            match step {
                Step::Continue(next) => state = next,
                Step::Emit(kind) => {
                    let token = MK_TOKEN!(kind, mem::take(&mut self.lexeme));
                    trace!("{}: {}", position, token);
                    return Ok(Some(token));
                }
            }
        }
    }

    fn start(&mut self, c: char, position: Position) -> Result<Step, Error> {
        let next = match classifier::classify(c) {
            CharClass::Whitespace => return Ok(Step::Continue(State::Start)),
            CharClass::CommentStart => return Ok(Step::Continue(State::Comment)),
            CharClass::Invalid => {
                return Err(self.fail(ErrorImpl::InvalidCharacter { found: c }, position))
            }
            CharClass::MathOperator => {
                self.lexeme.push(c);
                return Ok(Step::Emit(TokenKind::MathOperator));
            }
            CharClass::Parenthesis => {
                self.lexeme.push(c);
                return Ok(Step::Emit(TokenKind::Parenthesis));
            }
            CharClass::Letter | CharClass::Underscore => State::Identifier,
            CharClass::Assignment => State::AssignLookahead,
            CharClass::RelOperator => State::RelLookahead,
            CharClass::Digit => State::NumberInt,
            CharClass::Point => {
                self.points += 1;
                State::NumberFloat
            }
        };

        self.lexeme.push(c);
        Ok(Step::Continue(next))
    }

    fn comment(&mut self, c: char) -> Step {
        if classifier::is_end_of_line(c) {
            Step::Continue(State::Start)
        } else {
            Step::Continue(State::Comment)
        }
    }

    fn identifier(&mut self, c: char, position: Position) -> Result<Step, Error> {
        if classifier::is_letter(c) || classifier::is_digit(c) || classifier::is_underscore(c) {
            self.lexeme.push(c);
            return Ok(Step::Continue(State::Identifier));
        }

        if classifier::is_invalid(c) {
            return Err(self.fail(ErrorImpl::MalformedIdentifier { found: c }, position));
        }

        self.push_back(c, position);
        if is_reserved(&self.lexeme) {
            Ok(Step::Emit(TokenKind::Reserved))
        } else {
            Ok(Step::Emit(TokenKind::Identifier))
        }
    }

    fn assign_lookahead(&mut self, c: char, position: Position) -> Step {
        if classifier::is_assignment(c) {
            self.lexeme.push(c);
            Step::Emit(TokenKind::RelOperator)
        } else {
            self.push_back(c, position);
            Step::Emit(TokenKind::Assignment)
        }
    }

    fn rel_lookahead(&mut self, c: char, position: Position) -> Step {
        if classifier::is_assignment(c) {
            self.lexeme.push(c);
        } else {
            self.push_back(c, position);
        }
        Step::Emit(TokenKind::RelOperator)
    }

    fn number_int(&mut self, c: char, position: Position) -> Result<Step, Error> {
        if classifier::is_digit(c) {
            self.lexeme.push(c);
            Ok(Step::Continue(State::NumberInt))
        } else if classifier::is_point(c) {
            // NumberFloat consumes the point itself.
            self.push_back(c, position);
            Ok(Step::Continue(State::NumberFloat))
        } else if classifier::is_letter(c) || classifier::is_invalid(c) {
            let reason = NumberFault::UnexpectedCharacter(c);
            Err(self.fail(ErrorImpl::MalformedNumber { reason }, position))
        } else {
            self.push_back(c, position);
            Ok(Step::Emit(TokenKind::Number))
        }
    }

    fn number_float(&mut self, c: char, position: Position) -> Result<Step, Error> {
        if classifier::is_digit(c) {
            self.lexeme.push(c);
            return Ok(Step::Continue(State::NumberFloat));
        }

        if classifier::is_point(c) {
            self.lexeme.push(c);
            self.points += 1;
            if self.points > MAX_POINTS {
                let reason = NumberFault::TooManyPoints;
                return Err(self.fail(ErrorImpl::MalformedNumber { reason }, position));
            }
            return Ok(Step::Continue(State::NumberFloat));
        }

        if self.lexeme.ends_with('.') {
            let reason = NumberFault::TrailingPoint;
            return Err(self.fail(ErrorImpl::MalformedNumber { reason }, position));
        }

        self.push_back(c, position);
        Ok(Step::Emit(TokenKind::Number))
    }

    fn end_of_input(&mut self, state: State) -> Result<Option<Token>, Error> {
        match state {
            State::Start | State::Comment => {
                self.finished = true;
                Ok(None)
            }
            _ => Err(self.fail(ErrorImpl::UnexpectedEndOfInput, self.current_position())),
        }
    }

    fn advance(&mut self) -> Option<(char, Position)> {
        if let Some(pending) = self.pending.take() {
            return Some(pending);
        }

        let c = *self.source.get(self.cursor)?;
        let position = Position::new(self.line, self.column);

        self.cursor += 1;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        Some((c, position))
    }

    fn push_back(&mut self, c: char, position: Position) {
        debug_assert!(self.pending.is_none(), "only one character of pushback");
        trace!("{}: push back {:?}", position, c);
        self.pending = Some((c, position));
    }

    fn fail(&mut self, error_impl: ErrorImpl, position: Position) -> Error {
        self.finished = true;
        let error = Error::new(error_impl, position, self.lexeme.as_str());
        debug!("{}: {}", self.file, error);
        error
    }
}

impl Iterator for Scanner {
    type Item = Result<Token, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        self.next_token().transpose()
    }
}

impl FusedIterator for Scanner {}

/// Scans `source` to the end, collecting every token.
pub fn tokenize(source: impl Into<String>, file: Option<String>) -> Result<Vec<Token>, Error> {
    Scanner::new(source, file).collect()
}
