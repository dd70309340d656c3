//! Component body parsing: directive items, component calls, and the
//! host-language statement scavenger.

use tuic_lex::TokenKind;
use tuic_util::Span;

use crate::ast::{ComponentCall, ForLoop, IfStmt, LetBinding, Node};
use crate::Parser;

impl<'a> Parser<'a> {
    /// Parse body items until a closing `}` (left unconsumed) or EOF.
    pub(crate) fn parse_body_items(&mut self) -> Vec<Node> {
        let mut items = Vec::new();
        loop {
            self.skip_newlines();
            match self.peek_kind() {
                TokenKind::RBrace | TokenKind::Eof => break,
                _ => match self.parse_body_item() {
                    Some(node) => items.push(node),
                    None => self.recover_body_item(),
                },
            }
        }
        items
    }

    /// Parse one body item, dispatched on the leading token.
    fn parse_body_item(&mut self) -> Option<Node> {
        match self.peek_kind() {
            TokenKind::AtLet => self.parse_let(),
            TokenKind::AtFor => Some(self.parse_for()),
            TokenKind::AtIf => Some(self.parse_if()),
            TokenKind::Lt => self.parse_element().map(Node::Element),
            TokenKind::ComponentCall => self.parse_component_call(),
            TokenKind::AtElse => {
                self.error_here_hint(
                    "'@else' without a preceding '@if'",
                    "did you mean '@if'?",
                );
                None
            }
            TokenKind::Error => {
                // the lexer already reported this token
                self.advance();
                None
            }
            // anything else starts an opaque host-language statement
            _ => self.parse_host_statement(),
        }
    }

    /// Parse `@let name = <element>`.
    pub(crate) fn parse_let(&mut self) -> Option<Node> {
        let at = self.advance(); // '@let'
        let name = self.expect_named(TokenKind::Ident, "binding name")?;
        self.expect(TokenKind::Assign)?;
        self.skip_newlines();
        if self.peek_kind() != TokenKind::Lt {
            self.error_here_hint(
                "expected element after '='",
                "@let binds a name to an element, e.g. @let row = <box/>",
            );
            return None;
        }
        let element = self.parse_element()?;
        Some(Node::Let(LetBinding {
            name: name.literal,
            element,
            span: at.span,
        }))
    }

    /// Parse `@for [index,] value := range iterable { body }`.
    ///
    /// The header between `@for` and the opening `{` is captured as raw
    /// source and then split: loop variables before `:=`, the keyword
    /// `range`, and the iterable expression verbatim after it.
    pub(crate) fn parse_for(&mut self) -> Node {
        let at = self.advance(); // '@for'
        let (header, header_span) = self.raw_until_lbrace();

        let mut index = String::new();
        let mut value = String::new();
        let mut iterable = String::new();

        match header.split_once(":=") {
            Some((vars, rest)) => {
                let vars: Vec<&str> = vars.split(',').map(str::trim).collect();
                match vars.as_slice() {
                    [v] if !v.is_empty() => value = (*v).to_string(),
                    [i, v] if !i.is_empty() && !v.is_empty() => {
                        index = (*i).to_string();
                        value = (*v).to_string();
                    }
                    _ => self.error_hint(
                        header_span,
                        "malformed loop variables",
                        "expected 'value' or 'index, value' before ':='",
                    ),
                }
                match strip_range_keyword(rest) {
                    Some(expr) => iterable = expr.to_string(),
                    None => self.error_hint(
                        header_span,
                        "expected 'range' in loop header",
                        "loops iterate with ':= range', e.g. @for item := range items",
                    ),
                }
            }
            None => self.error_hint(
                header_span,
                "expected ':=' in loop header",
                "loops iterate with ':= range', e.g. @for item := range items",
            ),
        }

        self.expect(TokenKind::LBrace);
        let body = self.parse_body_items();
        self.expect(TokenKind::RBrace);

        Node::For(ForLoop {
            index,
            value,
            iterable,
            body,
            span: at.span,
        })
    }

    /// Parse `@if condition { then } [@else ...]`.
    ///
    /// The condition between `@if` and the opening `{` is captured as raw
    /// source, preserving the user's exact spelling. An `@else` may be
    /// followed by a block or by another `@if`, which nests as a single
    /// if-statement in the else branch to form an else-if chain.
    pub(crate) fn parse_if(&mut self) -> Node {
        let at = self.advance(); // '@if'
        let (condition, condition_span) = self.raw_until_lbrace();
        if condition.is_empty() {
            self.error(condition_span, "missing condition after '@if'");
        }

        self.expect(TokenKind::LBrace);
        let then_branch = self.parse_body_items();
        self.expect(TokenKind::RBrace);

        let mut else_branch = Vec::new();
        self.skip_newlines();
        if self.match_token(TokenKind::AtElse).is_some() {
            self.skip_newlines();
            if self.peek_kind() == TokenKind::AtIf {
                else_branch.push(self.parse_if());
            } else {
                self.expect(TokenKind::LBrace);
                else_branch = self.parse_body_items();
                self.expect(TokenKind::RBrace);
            }
        }

        Node::If(IfStmt {
            condition,
            then_branch,
            else_branch,
            span: at.span,
        })
    }

    /// Parse `@Name(args)` with an optional `{ body }` block.
    ///
    /// The argument list is captured as raw source via a balanced scan of
    /// the parentheses, so arbitrary host expressions (including nested
    /// calls and literals) pass through untouched.
    pub(crate) fn parse_component_call(&mut self) -> Option<Node> {
        let call = self.advance(); // the '@Name' token
        self.expect(TokenKind::LParen)?;

        let start = self.peek_span().start;
        let mut depth = 0i32;
        let end;
        loop {
            match self.peek_kind() {
                TokenKind::RParen if depth == 0 => {
                    end = self.peek_span().start;
                    break;
                }
                TokenKind::RBracket | TokenKind::RBrace if depth == 0 => {
                    end = self.peek_span().start;
                    break;
                }
                TokenKind::Eof => {
                    end = self.peek_span().start;
                    self.error(
                        call.span,
                        format!("unclosed argument list in call to '{}'", call.literal),
                    );
                    break;
                }
                TokenKind::LParen | TokenKind::LBracket | TokenKind::LBrace => {
                    depth += 1;
                    self.advance();
                }
                TokenKind::RParen | TokenKind::RBracket | TokenKind::RBrace => {
                    depth -= 1;
                    self.advance();
                }
                _ => {
                    self.advance();
                }
            }
        }
        let args = self.raw_slice(start, end);
        self.expect(TokenKind::RParen)?;

        let mut children = Vec::new();
        if self.match_token(TokenKind::LBrace).is_some() {
            children = self.parse_body_items();
            self.expect(TokenKind::RBrace);
        }

        Some(Node::Call(ComponentCall {
            name: call.literal,
            args,
            children,
            span: call.span,
        }))
    }

    /// Capture one opaque host-language statement as raw source.
    ///
    /// The slice runs from the current token to the end of a logical
    /// statement: a newline at outer bracket depth terminates, and any open
    /// `(`, `[`, or `{` must close before the terminator. A `}` at outer
    /// depth ends the enclosing body and is left for the caller.
    fn parse_host_statement(&mut self) -> Option<Node> {
        let start_span = self.peek_span();
        let start = start_span.start;
        let mut depth = 0i32;
        let end;
        loop {
            match self.peek_kind() {
                TokenKind::Newline if depth == 0 => {
                    end = self.peek_span().start;
                    self.advance();
                    break;
                }
                TokenKind::RBrace if depth == 0 => {
                    end = self.peek_span().start;
                    break;
                }
                TokenKind::Eof => {
                    end = self.peek_span().start;
                    break;
                }
                TokenKind::LParen | TokenKind::LBracket | TokenKind::LBrace => {
                    depth += 1;
                    self.advance();
                }
                TokenKind::RParen | TokenKind::RBracket | TokenKind::RBrace => {
                    depth -= 1;
                    self.advance();
                }
                _ => {
                    self.advance();
                }
            }
        }

        let code = self.raw_slice(start, end);
        if code.is_empty() {
            return None;
        }
        let span = Span {
            start,
            end,
            ..start_span
        };
        Some(Node::HostCode { code, span })
    }
}

/// Strip a leading `range` keyword, requiring a word boundary after it.
fn strip_range_keyword(header: &str) -> Option<&str> {
    let rest = header.trim_start();
    let after = rest.strip_prefix("range")?;
    match after.chars().next() {
        None => Some(""),
        Some(c) if c.is_ascii_alphanumeric() || c == '_' => None,
        Some(_) => Some(after.trim()),
    }
}
