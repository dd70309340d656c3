//! Element parsing: tags, named refs, attributes, and children.

use tuic_lex::TokenKind;
use tuic_util::Span;

use crate::ast::{AttrValue, Attribute, Element, Node, TextContent};
use crate::Parser;

impl<'a> Parser<'a> {
    /// Parse an element starting at `<`.
    pub(crate) fn parse_element(&mut self) -> Option<Element> {
        let lt = self.expect(TokenKind::Lt)?;
        let tag = self.expect_named(TokenKind::Ident, "element tag")?;

        let mut named_ref = None;
        if self.match_token(TokenKind::Hash).is_some() {
            named_ref = self
                .expect_named(TokenKind::Ident, "ref name after '#'")
                .map(|t| t.literal);
        }

        let mut element = Element {
            tag: tag.literal,
            named_ref,
            ref_key: None,
            attributes: Vec::new(),
            children: Vec::new(),
            self_close: false,
            span: lt.span,
        };

        // attribute list, possibly spanning lines
        loop {
            self.skip_newlines();
            match self.peek_kind() {
                TokenKind::Ident => match self.parse_attribute() {
                    Some(attr) => self.collect_attribute(&mut element, attr),
                    None => self.recover_attribute(),
                },
                TokenKind::Gt | TokenKind::SelfCloseEnd | TokenKind::Eof => break,
                found => {
                    self.error_here(format!(
                        "unexpected {} in element '{}'",
                        found.describe(),
                        element.tag
                    ));
                    self.recover_attribute();
                }
            }
        }

        match self.peek_kind() {
            TokenKind::SelfCloseEnd => {
                self.advance();
                element.self_close = true;
            }
            TokenKind::Gt => {
                self.advance();
                element.children = self.parse_children(&element.tag, lt.span);
                self.parse_closing_tag(&element.tag);
            }
            _ => {
                self.error_here(format!(
                    "expected '>' or '/>' to finish element '{}'",
                    element.tag
                ));
                self.recover_past_gt();
                element.self_close = true;
            }
        }

        Some(element)
    }

    /// File an attribute on the element, extracting `key` into the ref-key
    /// slot when the element carries a named ref.
    fn collect_attribute(&mut self, element: &mut Element, attr: Attribute) {
        if attr.name == "key" && element.named_ref.is_some() {
            if element.ref_key.is_some() {
                self.error(
                    attr.span,
                    format!(
                        "duplicate 'key' on element '#{}'",
                        element.named_ref.as_deref().unwrap_or_default()
                    ),
                );
                return;
            }
            match attr.value {
                AttrValue::HostExpr(code) => {
                    element.ref_key = Some(code);
                }
                _ => {
                    self.error_hint(
                        attr.span,
                        "'key' must be an embedded expression",
                        "write key={expr}",
                    );
                    // keep it as an ordinary attribute so nothing is lost
                    element.attributes.push(Attribute {
                        name: attr.name,
                        value: attr.value,
                        span: attr.span,
                    });
                }
            }
            return;
        }
        element.attributes.push(attr);
    }

    /// Parse one attribute. A bare name is boolean true.
    fn parse_attribute(&mut self) -> Option<Attribute> {
        let name = self.advance(); // identifier, checked by the caller

        if self.match_token(TokenKind::Assign).is_none() {
            return Some(Attribute {
                name: name.literal,
                value: AttrValue::Bool(true),
                span: name.span,
            });
        }

        let value = match self.peek_kind() {
            TokenKind::Str => AttrValue::Str(self.advance().literal),
            TokenKind::Int => {
                let token = self.advance();
                match token.literal.parse::<i64>() {
                    Ok(v) => AttrValue::Int(v),
                    Err(_) => {
                        self.error(token.span, "integer literal out of range");
                        AttrValue::Int(0)
                    }
                }
            }
            TokenKind::Float => {
                let token = self.advance();
                match token.literal.parse::<f64>() {
                    Ok(v) => AttrValue::Float(v),
                    Err(_) => {
                        self.error(token.span, "malformed float literal");
                        AttrValue::Float(0.0)
                    }
                }
            }
            TokenKind::Ident => {
                let token = self.advance();
                match token.literal.as_str() {
                    "true" => AttrValue::Bool(true),
                    "false" => AttrValue::Bool(false),
                    other => {
                        self.error_hint(
                            token.span,
                            format!("invalid attribute value '{}'", other),
                            "expected a literal, true/false, or {expression}",
                        );
                        return None;
                    }
                }
            }
            TokenKind::LBrace => {
                // take the '{' from the lookahead; the lexer is now
                // positioned right behind it, which read_host_expr requires
                self.advance();
                let expr = self.lexer.read_host_expr();
                if expr.kind != TokenKind::HostExpr {
                    return None;
                }
                AttrValue::HostExpr(expr.literal)
            }
            found => {
                self.error_here(format!(
                    "expected attribute value, found {}",
                    found.describe()
                ));
                return None;
            }
        };

        Some(Attribute {
            name: name.literal,
            value,
            span: name.span,
        })
    }

    /// Parse children until `</`, coalescing adjacent bare text tokens.
    fn parse_children(&mut self, parent_tag: &str, open_span: Span) -> Vec<Node> {
        let mut children = Vec::new();
        let mut words: Vec<String> = Vec::new();
        let mut words_span: Option<Span> = None;

        macro_rules! flush_text {
            () => {
                if !words.is_empty() {
                    let text = words.join(" ");
                    let span = words_span.take().unwrap_or(Span::DUMMY);
                    children.push(Node::Text(TextContent { text, span }));
                    words.clear();
                }
            };
        }

        loop {
            match self.peek_kind() {
                TokenKind::CloseTagStart => break,
                TokenKind::Eof => {
                    self.error(
                        open_span,
                        format!("unclosed element '{}': reached end of file", parent_tag),
                    );
                    break;
                }
                // newlines separate words without breaking the run
                TokenKind::Newline => {
                    self.advance();
                }
                TokenKind::Lt => {
                    flush_text!();
                    if let Some(child) = self.parse_element() {
                        children.push(Node::Element(child));
                    }
                }
                TokenKind::ComponentCall => {
                    flush_text!();
                    if let Some(node) = self.parse_component_call() {
                        children.push(node);
                    }
                }
                TokenKind::AtLet => {
                    flush_text!();
                    match self.parse_let() {
                        Some(node) => children.push(node),
                        None => self.recover_body_item(),
                    }
                }
                TokenKind::AtFor => {
                    flush_text!();
                    let node = self.parse_for();
                    children.push(node);
                }
                TokenKind::AtIf => {
                    flush_text!();
                    let node = self.parse_if();
                    children.push(node);
                }
                TokenKind::LBrace => {
                    flush_text!();
                    self.advance();
                    let expr = self.lexer.read_host_expr();
                    if expr.kind == TokenKind::HostExpr {
                        if expr.literal.trim() == "children..." {
                            children.push(Node::ChildrenSlot { span: expr.span });
                        } else {
                            children.push(Node::HostExpr {
                                code: expr.literal,
                                span: expr.span,
                            });
                        }
                    }
                }
                TokenKind::Error => {
                    // already reported by the lexer
                    self.advance();
                }
                TokenKind::RBrace => {
                    self.error_here(format!("unexpected '}}' inside element '{}'", parent_tag));
                    self.advance();
                }
                // everything else is bare text content
                _ => {
                    let token = self.advance();
                    if words_span.is_none() {
                        words_span = Some(token.span);
                    }
                    words.push(token.literal);
                }
            }
        }

        flush_text!();
        children
    }

    /// Parse `</tag>`, checking the name against the opening tag.
    fn parse_closing_tag(&mut self, open_tag: &str) {
        if self.match_token(TokenKind::CloseTagStart).is_none() {
            // parse_children only stops at '</' or EOF; EOF was reported
            return;
        }
        match self.expect_named(TokenKind::Ident, "closing tag name") {
            Some(close) => {
                if close.literal != open_tag {
                    self.error_hint(
                        close.span,
                        format!(
                            "mismatched closing tag: expected '</{}>', found '</{}>'",
                            open_tag, close.literal
                        ),
                        "element tags must match",
                    );
                }
                if self.expect(TokenKind::Gt).is_none() {
                    self.recover_past_gt();
                }
            }
            None => self.recover_past_gt(),
        }
    }
}
