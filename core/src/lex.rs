//! Brace scan used for matching function bodies.

use logos::Logos;

/// Token types recognized when scanning a line for structural braces.
///
/// This lexer exists to tell braces in code apart from braces in comments,
/// not to parse the language. A comment swallows the rest of its line, so
/// braces inside one never show up as tokens. Jade has no string literals,
/// which makes comments the only context where a brace is not structural.
#[derive(Logos, Debug, PartialEq)]
#[logos(skip r"[ \t\n\f]+")]
pub enum Token {
    #[token("{")]
    LBrace,

    #[token("}")]
    RBrace,

    #[regex(r"//.*")]
    Comment,

    /// A slash that does not start a comment.
    #[token("/")]
    Slash,

    /// Any other run of characters we don't care about.
    #[regex(r"[^ \t\n\f{}/]+")]
    Other,
}

/// A structural brace and its byte offset within the scanned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BraceEvent {
    Open(usize),
    Close(usize),
}

/// The braces of `text` that sit outside comments, left to right.
pub fn brace_events(text: &str) -> Vec<BraceEvent> {
    let mut events = Vec::new();
    let mut lexer = Token::lexer(text);
    while let Some(token) = lexer.next() {
        match token {
            Ok(Token::LBrace) => events.push(BraceEvent::Open(lexer.span().start)),
            Ok(Token::RBrace) => events.push(BraceEvent::Close(lexer.span().start)),
            Ok(_) | Err(_) => {}
        }
    }
    events
}
