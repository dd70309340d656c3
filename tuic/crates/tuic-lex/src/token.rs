//! Token definitions for the `.tui` language.

use tuic_util::Span;

/// The kind of a lexical token.
///
/// Kinds carry no payload; the textual value lives in [`Token::literal`].
/// For string literals the literal is the decoded value (escapes applied),
/// for everything else it is the raw source text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Structural brackets
    /// "("
    LParen,
    /// ")"
    RParen,
    /// "{"
    LBrace,
    /// "}"
    RBrace,
    /// "["
    LBracket,
    /// "]"
    RBracket,
    /// "<"
    Lt,
    /// ">"
    Gt,
    /// "</" - closing tag start
    CloseTagStart,
    /// "/>" - self-closing tag end
    SelfCloseEnd,

    // Operators and punctuation
    /// "+"
    Plus,
    /// "-"
    Minus,
    /// "*"
    Star,
    /// "/"
    Slash,
    /// "&"
    Ampersand,
    /// "|"
    Pipe,
    /// "!"
    Bang,
    /// ","
    Comma,
    /// "."
    Dot,
    /// ";"
    Semicolon,
    /// "="
    Assign,
    /// ":"
    Colon,
    /// ":=" - short variable declaration
    Declare,
    /// "_" - blank identifier
    Underscore,
    /// "#" - named-ref marker in element tags
    Hash,

    // Literals
    /// Integer literal
    Int,
    /// Floating point literal
    Float,
    /// Double-quoted string literal (literal holds the decoded value)
    Str,
    /// Backtick raw string literal (no escapes)
    RawStr,

    // Identifiers and host-language keywords
    /// Identifier
    Ident,
    /// "package"
    KwPackage,
    /// "import"
    KwImport,
    /// "func"
    KwFunc,
    /// "return"
    KwReturn,
    /// "if"
    KwIf,
    /// "else"
    KwElse,
    /// "for"
    KwFor,
    /// "range"
    KwRange,

    // Markup directive keywords
    /// "@component"
    AtComponent,
    /// "@let"
    AtLet,
    /// "@for"
    AtFor,
    /// "@if"
    AtIf,
    /// "@else"
    AtElse,

    /// "@Name" - component call; literal holds the name without the '@'
    ComponentCall,

    /// Embedded host expression, produced only by
    /// [`Lexer::read_host_expr`](crate::Lexer::read_host_expr);
    /// literal holds the text between the outer braces
    HostExpr,

    // Control
    /// End of line
    Newline,
    /// End of input
    Eof,
    /// Malformed input; a diagnostic has been recorded
    Error,
}

impl TokenKind {
    /// Short human-readable description, used in parser error messages.
    pub fn describe(&self) -> &'static str {
        match self {
            TokenKind::LParen => "'('",
            TokenKind::RParen => "')'",
            TokenKind::LBrace => "'{'",
            TokenKind::RBrace => "'}'",
            TokenKind::LBracket => "'['",
            TokenKind::RBracket => "']'",
            TokenKind::Lt => "'<'",
            TokenKind::Gt => "'>'",
            TokenKind::CloseTagStart => "'</'",
            TokenKind::SelfCloseEnd => "'/>'",
            TokenKind::Plus => "'+'",
            TokenKind::Minus => "'-'",
            TokenKind::Star => "'*'",
            TokenKind::Slash => "'/'",
            TokenKind::Ampersand => "'&'",
            TokenKind::Pipe => "'|'",
            TokenKind::Bang => "'!'",
            TokenKind::Comma => "','",
            TokenKind::Dot => "'.'",
            TokenKind::Semicolon => "';'",
            TokenKind::Assign => "'='",
            TokenKind::Colon => "':'",
            TokenKind::Declare => "':='",
            TokenKind::Underscore => "'_'",
            TokenKind::Hash => "'#'",
            TokenKind::Int => "integer literal",
            TokenKind::Float => "float literal",
            TokenKind::Str => "string literal",
            TokenKind::RawStr => "raw string literal",
            TokenKind::Ident => "identifier",
            TokenKind::KwPackage => "'package'",
            TokenKind::KwImport => "'import'",
            TokenKind::KwFunc => "'func'",
            TokenKind::KwReturn => "'return'",
            TokenKind::KwIf => "'if'",
            TokenKind::KwElse => "'else'",
            TokenKind::KwFor => "'for'",
            TokenKind::KwRange => "'range'",
            TokenKind::AtComponent => "'@component'",
            TokenKind::AtLet => "'@let'",
            TokenKind::AtFor => "'@for'",
            TokenKind::AtIf => "'@if'",
            TokenKind::AtElse => "'@else'",
            TokenKind::ComponentCall => "component call",
            TokenKind::HostExpr => "embedded expression",
            TokenKind::Newline => "end of line",
            TokenKind::Eof => "end of file",
            TokenKind::Error => "invalid token",
        }
    }
}

/// A lexical token: kind, textual value, and source span.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    /// What kind of token this is
    pub kind: TokenKind,
    /// Decoded value for strings, raw text otherwise
    pub literal: String,
    /// Source location, including byte offsets for raw slicing
    pub span: Span,
}

impl Token {
    /// Create a new token
    pub fn new(kind: TokenKind, literal: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            literal: literal.into(),
            span,
        }
    }

    /// Line number where the token starts (1-based)
    #[inline]
    pub fn line(&self) -> u32 {
        self.span.line
    }

    /// Column number where the token starts (1-based, in bytes)
    #[inline]
    pub fn column(&self) -> u32 {
        self.span.column
    }

    /// Returns true if this token has the given kind
    #[inline]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

/// Map an identifier to its host-language keyword kind, if any.
pub fn keyword_from_ident(ident: &str) -> Option<TokenKind> {
    match ident {
        "package" => Some(TokenKind::KwPackage),
        "import" => Some(TokenKind::KwImport),
        "func" => Some(TokenKind::KwFunc),
        "return" => Some(TokenKind::KwReturn),
        "if" => Some(TokenKind::KwIf),
        "else" => Some(TokenKind::KwElse),
        "for" => Some(TokenKind::KwFor),
        "range" => Some(TokenKind::KwRange),
        _ => None,
    }
}

/// Map the identifier after an '@' to its directive keyword kind, if any.
///
/// Only lowercase directives live here; `@Name` component calls are
/// recognized separately by the case of the first letter.
pub fn at_keyword(ident: &str) -> Option<TokenKind> {
    match ident {
        "component" => Some(TokenKind::AtComponent),
        "let" => Some(TokenKind::AtLet),
        "for" => Some(TokenKind::AtFor),
        "if" => Some(TokenKind::AtIf),
        "else" => Some(TokenKind::AtElse),
        _ => None,
    }
}
