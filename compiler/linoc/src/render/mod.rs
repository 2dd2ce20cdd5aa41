//! Textual token rendering.
//!
//! One token per line: `KIND @ col:<N>[, len:<M>] :: '<lexeme>'`. The
//! `len:` part only appears for lexemes longer than one character.

use std::fmt;

use lino_lexer_core::Token;

/// Display adapter for a [`Token`].
#[derive(Clone, Copy, Debug)]
pub struct TokenDisplay<'a> {
    token: Token<'a>,
}

impl<'a> TokenDisplay<'a> {
    pub fn new(token: Token<'a>) -> Self {
        TokenDisplay { token }
    }
}

impl fmt::Display for TokenDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = &self.token;
        write!(f, "{} @ col:{}", token.kind().mnemonic(), token.column())?;
        if token.column_len() > 1 {
            write!(f, ", len:{}", token.column_len())?;
        }
        write!(f, " :: '{}'", token.text())
    }
}
