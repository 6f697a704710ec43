//! Raw token kinds for the filter language.
//!
//! Logos recognises token boundaries only. Decoding literal values (numbers,
//! escaped strings) happens in the scanner, which owns error reporting.
//!
//! Longest match decides between keywords and words: `true`, `AND` are
//! keywords, `trueish`, `ANDROID` are words.

use logos::Logos;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    #[token("true")]
    True,

    #[token("false")]
    False,

    #[token("AND")]
    And,

    #[token("OR")]
    Or,

    #[token("(")]
    ParenOpen,

    #[token(")")]
    ParenClose,

    /// Opens a string literal. The body is scanned by hand so escapes and
    /// missing terminators can be reported precisely.
    #[token("\"")]
    DoubleQuote,

    #[token("'")]
    SingleQuote,

    /// Anything starting with a digit or `.`; validated as a number later.
    #[regex(r"[0-9.][^ ()]*", allow_greedy = true)]
    Number,

    /// Bare word: reference names and operator names.
    #[regex(r#"[^ ()'"0-9.][^ ()]*"#, allow_greedy = true)]
    Word,

    /// Only the space character separates tokens.
    #[regex(" +")]
    Whitespace,
}
