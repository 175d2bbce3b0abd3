//! Raw argument handling for a single invocation.
//!
//! ```text
//! argv / command line → Tokenize → TokenStore → Route → unassigned tokens
//! ```
//!
//! The store is the only owner of the tokens; every role change goes through
//! its methods. What is left `Unassigned` after routing is exactly what the
//! selected command gets to parse.

mod store;
mod tokenizer;

pub use store::{Token, TokenRole, TokenStore};
pub use tokenizer::{join, tokenize};
