//! Token store: raw tokens plus the role each one has been given.

use std::fmt;

use crate::args::tokenizer::{join, tokenize};

/// What a raw token has been identified as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenRole {
    /// Not claimed yet; left for the selected command to parse.
    Unassigned,
    /// Position 0: the program path/name.
    ProgramName,
    /// The token that selected the command (name or shortcut).
    CommandName,
    /// Claimed by a command's own option parser.
    Option,
}

/// A single raw token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    value: String,
    role: TokenRole,
}

impl Token {
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn role(&self) -> TokenRole {
        self.role
    }
}

/// Ordered tokens of one invocation.
///
/// Length and values are fixed at construction; only roles change, and
/// [`classify`](Self::classify) only ever moves a token out of
/// [`TokenRole::Unassigned`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenStore {
    tokens: Vec<Token>,
}

impl TokenStore {
    /// Build from an explicit token list. Index 0 becomes the program name.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tokens = tokens
            .into_iter()
            .enumerate()
            .map(|(index, value)| Token {
                value: value.into(),
                role: if index == 0 {
                    TokenRole::ProgramName
                } else {
                    TokenRole::Unassigned
                },
            })
            .collect();
        Self { tokens }
    }

    /// Build from a single command line, honoring double quotes.
    pub fn parse(line: &str) -> Self {
        Self::from_tokens(tokenize(line))
    }

    /// Build from the arguments this process was started with.
    ///
    /// Arguments that are not valid UTF-8 are converted lossily.
    pub fn from_env() -> Self {
        Self::from_tokens(std::env::args_os().map(|a| a.to_string_lossy().into_owned()))
    }

    /// Give `role` to the first still-unassigned token equal to `value`.
    ///
    /// Absent values are ignored, so callers may classify speculatively.
    pub fn classify(&mut self, value: &str, role: TokenRole) {
        let index = self
            .tokens
            .iter()
            .position(|t| t.role == TokenRole::Unassigned && t.value == value);

        if let Some(index) = index {
            self.classify_at(index, role);
        }
    }

    /// Positional classification; the prior role is not checked.
    pub(crate) fn classify_at(&mut self, index: usize, role: TokenRole) {
        tracing::trace!(index, ?role, value = %self.tokens[index].value, "classify");
        self.tokens[index].role = role;
    }

    /// Values of all unassigned tokens, in original order.
    pub fn unassigned_tokens(&self) -> Vec<String> {
        self.tokens
            .iter()
            .filter(|t| t.role == TokenRole::Unassigned)
            .map(|t| t.value.clone())
            .collect()
    }

    /// Index and value of the first unassigned token.
    pub fn first_unassigned(&self) -> Option<(usize, &str)> {
        self.tokens
            .iter()
            .enumerate()
            .find(|(_, t)| t.role == TokenRole::Unassigned)
            .map(|(index, t)| (index, t.value.as_str()))
    }

    pub fn first_token_of_role(&self, role: TokenRole) -> Option<&str> {
        self.tokens
            .iter()
            .find(|t| t.role == role)
            .map(|t| t.value.as_str())
    }

    /// The token right after the first occurrence of `value`, whatever its role.
    ///
    /// Option parsers use this to fetch an option's argument.
    pub fn token_following(&self, value: &str) -> Option<&str> {
        let index = self.tokens.iter().position(|t| t.value == value)?;
        self.tokens.get(index + 1).map(|t| t.value.as_str())
    }

    pub fn role_of(&self, index: usize) -> Option<TokenRole> {
        self.tokens.get(index).map(|t| t.role)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl fmt::Display for TokenStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let values: Vec<&str> = self.tokens.iter().map(|t| t.value.as_str()).collect();
        f.write_str(&join(&values))
    }
}
