//! Highlighted code blocks
//!
//! Fenced code arrives pre-tokenized; each token becomes a
//! `<span class="token ...">` inside a verbatim `<pre>` block.

use fos_vdom::Node;

/// One token of a highlighted code block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// Unhighlighted source text
    Plain(&'static str),
    /// Token class and its text
    Tagged(&'static str, &'static str),
}

pub const fn plain(text: &'static str) -> Token {
    Token::Plain(text)
}

pub const fn punct(text: &'static str) -> Token {
    Token::Tagged("punctuation", text)
}

pub const fn func(text: &'static str) -> Token {
    Token::Tagged("function", text)
}

pub const fn num(text: &'static str) -> Token {
    Token::Tagged("number", text)
}

pub const fn comment(text: &'static str) -> Token {
    Token::Tagged("comment", text)
}

pub const fn keyword(text: &'static str) -> Token {
    Token::Tagged("keyword", text)
}

pub const fn operator(text: &'static str) -> Token {
    Token::Tagged("operator", text)
}

pub const fn constant(text: &'static str) -> Token {
    Token::Tagged("constant", text)
}

pub const fn string(text: &'static str) -> Token {
    Token::Tagged("string", text)
}

/// `div.language-js > pre > code` block for a token stream
pub fn code_block(tokens: &[Token]) -> Node {
    let code = Node::element("code").with_children(tokens.iter().map(|token| match *token {
        Token::Plain(text) => Node::text(text),
        Token::Tagged(class, text) => Node::element("span")
            .with_attr("class", format!("token {class}"))
            .with_child(Node::text(text)),
    }));

    Node::element("div")
        .with_static_class("language-js extra-class")
        .with_child(
            Node::element("pre")
                .with_pre()
                .with_attr("class", "language-js")
                .with_child(code),
        )
}
