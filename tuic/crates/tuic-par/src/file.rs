//! File-level parsing: package clause, imports, and component declarations.

use tuic_lex::TokenKind;
use crate::ast::{Component, File, Import, Param};
use crate::Parser;

impl<'a> Parser<'a> {
    /// Parse a complete source file.
    ///
    /// Always returns a `File`; on errors it is partial and the shared
    /// handler holds the diagnostics.
    pub fn parse_file(&mut self) -> File {
        let mut file = File {
            package: String::new(),
            imports: Vec::new(),
            decls: Vec::new(),
        };

        self.skip_newlines();
        if self.match_token(TokenKind::KwPackage).is_some() {
            if let Some(name) = self.expect_named(TokenKind::Ident, "package name") {
                file.package = name.literal;
            }
        } else {
            self.error_here_hint(
                "missing package declaration",
                "every .tui file starts with 'package <name>'",
            );
        }

        loop {
            self.skip_newlines();
            if self.match_token(TokenKind::KwImport).is_none() {
                break;
            }
            self.parse_import_tail(&mut file.imports);
        }

        loop {
            self.skip_newlines();
            match self.peek_kind() {
                TokenKind::Eof => break,
                TokenKind::AtComponent => {
                    if let Some(component) = self.parse_component() {
                        file.decls.push(component);
                    } else {
                        self.recover_body_item();
                    }
                }
                found => {
                    self.error_here(format!(
                        "expected component declaration, found {}",
                        found.describe()
                    ));
                    self.advance();
                    self.recover_body_item();
                }
            }
        }

        file
    }

    /// Parse the rest of an import after the `import` keyword:
    /// a single path, an aliased path, or a parenthesized group.
    fn parse_import_tail(&mut self, imports: &mut Vec<Import>) {
        match self.peek_kind() {
            TokenKind::Str => {
                let path = self.advance();
                imports.push(Import {
                    alias: None,
                    path: path.literal,
                    span: path.span,
                });
            }
            TokenKind::Ident => {
                let alias = self.advance();
                if let Some(path) = self.expect_named(TokenKind::Str, "import path") {
                    imports.push(Import {
                        alias: Some(alias.literal),
                        path: path.literal,
                        span: alias.span,
                    });
                }
            }
            TokenKind::LParen => {
                self.advance();
                loop {
                    self.skip_newlines();
                    match self.peek_kind() {
                        TokenKind::RParen => {
                            self.advance();
                            break;
                        }
                        TokenKind::Str => {
                            let path = self.advance();
                            imports.push(Import {
                                alias: None,
                                path: path.literal,
                                span: path.span,
                            });
                        }
                        TokenKind::Ident => {
                            let alias = self.advance();
                            if let Some(path) =
                                self.expect_named(TokenKind::Str, "import path")
                            {
                                imports.push(Import {
                                    alias: Some(alias.literal),
                                    path: path.literal,
                                    span: alias.span,
                                });
                            }
                        }
                        TokenKind::Eof => {
                            self.error_here("unexpected end of file in import group");
                            break;
                        }
                        found => {
                            self.error_here(format!(
                                "expected import path, found {}",
                                found.describe()
                            ));
                            self.advance();
                            self.recover_body_item();
                        }
                    }
                }
            }
            found => {
                self.error_here(format!("expected import path, found {}", found.describe()));
            }
        }
    }

    /// Parse a `@component Name(params) { body }` declaration.
    fn parse_component(&mut self) -> Option<Component> {
        let at = self.advance(); // '@component'

        let name = self.expect_named(TokenKind::Ident, "component name")?;
        self.expect(TokenKind::LParen)?;

        let mut params = Vec::new();
        self.skip_newlines();
        while self.peek_kind() != TokenKind::RParen && self.peek_kind() != TokenKind::Eof {
            let pname = match self.expect_named(TokenKind::Ident, "parameter name") {
                Some(token) => token,
                None => break,
            };
            let ty = self.parse_type_expr();
            if ty.is_empty() {
                self.error(pname.span, format!("parameter '{}' has no type", pname.literal));
            }
            params.push(Param {
                name: pname.literal,
                ty,
                span: pname.span,
            });

            if self.match_token(TokenKind::Comma).is_none() {
                break;
            }
            self.skip_newlines();
        }
        self.expect(TokenKind::RParen)?;

        self.expect(TokenKind::LBrace)?;
        let body = self.parse_body_items();
        self.expect(TokenKind::RBrace)?;

        Some(Component {
            name: name.literal,
            params,
            body,
            span: at.span,
        })
    }

    /// Parse a parameter type as a raw substring of the original source.
    ///
    /// The scan starts at the next token and walks tokens until a `,` or
    /// `)` at outer bracket depth, tracking nested `[](){}`. This accepts
    /// the leading `*`, `<-`, `chan`, `func(...)`, `map[...]`, and `[]`
    /// forms without understanding them, and preserves the user's exact
    /// spelling including generic brackets and function-type parentheses.
    fn parse_type_expr(&mut self) -> String {
        let start = self.peek_span().start;
        let mut depth = 0i32;
        loop {
            match self.peek_kind() {
                TokenKind::Comma | TokenKind::RParen | TokenKind::RBracket | TokenKind::RBrace
                    if depth == 0 =>
                {
                    break
                }
                // an unbalanced '{' at outer depth is the component body
                // after a missing ')'; stop and let the caller report it
                TokenKind::LBrace if depth == 0 => break,
                TokenKind::Eof => break,
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
        let end = self.peek_span().start;
        self.raw_slice(start, end)
    }
}
