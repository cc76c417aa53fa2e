//! Tokenizer and bracket balance check for formula text
//!
//! The lexer feeds the generated grammar directly: it yields
//! `(start, token, end)` triples with byte offsets, or the first [`LexError`].

use super::ast::BinaryOp;
use super::error::{BalanceError, LexError};
use super::operators::NOT_SYMBOL;
use std::fmt;
use std::iter::Peekable;
use std::str::CharIndices;
use std::sync::Arc;

/// The three bracket pairs; each closes only with its own kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BracketKind {
    /// `(` `)`
    Round,
    /// `[` `]`
    Square,
    /// `{` `}`
    Curly,
}

impl BracketKind {
    /// Classify an opening bracket character
    pub fn from_open(c: char) -> Option<Self> {
        match c {
            '(' => Some(BracketKind::Round),
            '[' => Some(BracketKind::Square),
            '{' => Some(BracketKind::Curly),
            _ => None,
        }
    }

    /// Classify a closing bracket character
    pub fn from_close(c: char) -> Option<Self> {
        match c {
            ')' => Some(BracketKind::Round),
            ']' => Some(BracketKind::Square),
            '}' => Some(BracketKind::Curly),
            _ => None,
        }
    }

    /// Opening character of this kind
    pub fn open(self) -> char {
        match self {
            BracketKind::Round => '(',
            BracketKind::Square => '[',
            BracketKind::Curly => '{',
        }
    }

    /// Closing character of this kind
    pub fn close(self) -> char {
        match self {
            BracketKind::Round => ')',
            BracketKind::Square => ']',
            BracketKind::Curly => '}',
        }
    }
}

/// A lexical token of formula text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A variable such as `x_1`
    Variable(Arc<str>),
    /// Unary negation `-`
    Not,
    /// One of the seven binary connectives
    Binary(BinaryOp),
    /// An opening bracket
    Open(BracketKind),
    /// A closing bracket
    Close(BracketKind),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Variable(name) => write!(f, "{}", name),
            Token::Not => write!(f, "{}", NOT_SYMBOL),
            Token::Binary(op) => write!(f, "{}", op.symbol()),
            Token::Open(kind) => write!(f, "{}", kind.open()),
            Token::Close(kind) => write!(f, "{}", kind.close()),
        }
    }
}

/// Token with its byte span, as consumed by the grammar
pub type Spanned = (usize, Token, usize);

fn is_variable_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Check a candidate identifier against `[A-Za-z]_[0-9]+`
pub fn is_valid_variable(name: &str) -> bool {
    let bytes = name.as_bytes();
    bytes.len() >= 3
        && bytes[0].is_ascii_alphabetic()
        && bytes[1] == b'_'
        && bytes[2..].iter().all(u8::is_ascii_digit)
}

/// Streaming tokenizer over a formula string
pub struct Lexer<'input> {
    input: &'input str,
    chars: Peekable<CharIndices<'input>>,
    failed: bool,
}

impl<'input> Lexer<'input> {
    /// Start tokenizing `input` from its first character
    pub fn new(input: &'input str) -> Self {
        Lexer {
            input,
            chars: input.char_indices().peekable(),
            failed: false,
        }
    }

    fn variable(&mut self, start: usize) -> Result<Spanned, LexError> {
        let mut end = self.input.len();
        while let Some(&(i, c)) = self.chars.peek() {
            if is_variable_char(c) {
                self.chars.next();
            } else {
                end = i;
                break;
            }
        }
        let name = &self.input[start..end];
        if is_valid_variable(name) {
            Ok((start, Token::Variable(Arc::from(name)), end))
        } else {
            Err(LexError::InvalidVariable {
                name: Arc::from(name),
                position: start,
            })
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Spanned, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        loop {
            let (i, c) = self.chars.next()?;
            let single = |token| Some(Ok((i, token, i + c.len_utf8())));

            let item = if c.is_whitespace() {
                continue;
            } else if c == NOT_SYMBOL {
                single(Token::Not)
            } else if let Some(op) = BinaryOp::from_symbol(c) {
                single(Token::Binary(op))
            } else if let Some(kind) = BracketKind::from_open(c) {
                single(Token::Open(kind))
            } else if let Some(kind) = BracketKind::from_close(c) {
                single(Token::Close(kind))
            } else if is_variable_char(c) {
                Some(self.variable(i))
            } else {
                Some(Err(LexError::UnknownCharacter {
                    character: c,
                    position: i,
                }))
            };

            if matches!(item, Some(Err(_))) {
                self.failed = true;
            }
            return item;
        }
    }
}

/// Tokenize a whole formula, stopping at the first error
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(input)
        .map(|item| item.map(|(_, token, _)| token))
        .collect()
}

/// Verify that brackets in raw formula text are balanced
///
/// Every closing bracket must match the kind of the innermost open bracket;
/// `(x_1]` is rejected. Characters other than brackets are ignored, so this
/// runs before (and independently of) tokenization.
pub fn check_balance(input: &str) -> Result<(), BalanceError> {
    let mut stack: Vec<(BracketKind, usize)> = Vec::new();

    for (i, c) in input.char_indices() {
        if let Some(kind) = BracketKind::from_open(c) {
            stack.push((kind, i));
        } else if let Some(kind) = BracketKind::from_close(c) {
            match stack.pop() {
                None => {
                    return Err(BalanceError::UnexpectedClose {
                        bracket: c,
                        position: i,
                    })
                }
                Some((open, open_position)) if open != kind => {
                    return Err(BalanceError::MismatchedClose {
                        open: open.open(),
                        open_position,
                        close: c,
                        position: i,
                    })
                }
                Some(_) => {}
            }
        }
    }

    match stack.pop() {
        Some((kind, position)) => Err(BalanceError::Unclosed {
            bracket: kind.open(),
            position,
        }),
        None => Ok(()),
    }
}
