//! Per-entry tokens that namespace inline image substitutions.
//!
//! Every rendered table embeds its icons through reStructuredText
//! substitutions such as `|<token>-icon|`. Substitution names are global to a
//! document, so each entry gets its own token.

use uuid::Uuid;

/// Source of fresh entry tokens.
pub trait TokenSource {
    fn next_token(&mut self) -> String;
}

/// Random v4 UUIDs.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidTokens;

impl TokenSource for UuidTokens {
    fn next_token(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Deterministic tokens (`entry-1`, `entry-2`, ...) for reproducible output.
#[derive(Debug, Clone)]
pub struct SequentialTokens {
    prefix: String,
    next: u64,
}

impl SequentialTokens {
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            next: 1,
        }
    }
}

impl Default for SequentialTokens {
    fn default() -> Self {
        Self::new("entry")
    }
}

impl TokenSource for SequentialTokens {
    fn next_token(&mut self) -> String {
        let token = format!("{}-{}", self.prefix, self.next);
        self.next += 1;
        token
    }
}

impl<T: TokenSource + ?Sized> TokenSource for &mut T {
    fn next_token(&mut self) -> String {
        (**self).next_token()
    }
}
