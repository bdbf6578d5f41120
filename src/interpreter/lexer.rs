use logos::{Lexer, Logos};
use tracing::trace;

use crate::error::{LexError, LexErrorKind};

/// The shape of a numeric literal found by [`lex_number`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Numeric {
    Integer,
    Fractional,
}

/// What a `<` turned out to introduce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AngleLead {
    LessThan,
    Literal,
}

/// What a `.` turned out to introduce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DotLead {
    Catenate,
    Repeat,
    CatenateAssign,
}

/// The string relational keyword after an `@`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StringRelation {
    Equal,
    LessEqual,
    Greater,
}

/// Raw tokens as recognized by `logos`.
///
/// The context-sensitive rules of the language (fraction and exponent
/// roll-back, `<...>` strings, `.`-led operators, `@` keywords) are handled
/// in callbacks; [`Scanner`] maps these raw tokens onto [`TokenKind`].
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
#[logos(error = LexErrorKind)]
#[logos(skip r"[ \t\r\f\v]+")]
enum RawToken {
    #[regex(r"[0-9]+", lex_number)]
    Number(Numeric),
    #[regex(r"[a-zA-Z$][a-zA-Z0-9_$]*")]
    Word,
    #[regex(r#""[^"\n]*""#, allow_greedy = true)]
    #[regex(r"'[^'\n]*'", allow_greedy = true)]
    Quoted,
    #[regex(r#""[^"\n]*"#, reject_unterminated, allow_greedy = true)]
    #[regex(r"'[^'\n]*", reject_unterminated, allow_greedy = true)]
    Unterminated,
    #[token("<", lex_angle)]
    Angle(AngleLead),
    #[token(".", lex_dot)]
    Dot(DotLead),
    #[regex(r"@[a-zA-Z]*", lex_string_relation)]
    StringRelation(StringRelation),
    #[token("+")]
    Plus,
    #[token("+=")]
    PlusAssign,
    #[token("-")]
    Minus,
    #[token("-=")]
    MinusAssign,
    #[token("*")]
    Star,
    #[token("**")]
    DoubleStar,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("=")]
    Equals,
    #[token("==")]
    EqualEqual,
    #[token(">=")]
    GreaterEqual,
    #[token(">", reject_bare_greater)]
    Greater,
    #[token("&&")]
    DoubleAmpersand,
    #[token("||")]
    DoublePipe,
    #[token("!")]
    Bang,
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[regex(r"#[^\n]*", logos::skip, allow_greedy = true)]
    Comment,
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number. No token spans a newline, so the value
/// at the moment a token is produced is also the line it started on.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Extends an integer literal with a fractional part and an optional
/// exponent.
///
/// A `.` joins the literal only when a digit follows it; an exponent only
/// when the literal already has a fraction and digits follow the marker
/// (otherwise it is rolled back). A fractional literal directly followed by
/// another `.` is malformed, and the error spans that extra `.`.
fn lex_number(lex: &mut Lexer<RawToken>) -> Result<Numeric, LexErrorKind> {
    let rest = lex.remainder().as_bytes();
    if rest.first() != Some(&b'.') || !rest.get(1).is_some_and(u8::is_ascii_digit) {
        return Ok(Numeric::Integer);
    }

    let mut len = 1;
    while rest.get(len).is_some_and(u8::is_ascii_digit) {
        len += 1;
    }

    if matches!(rest.get(len), Some(b'e' | b'E')) {
        let mut end = len + 1;
        if matches!(rest.get(end), Some(b'+' | b'-')) {
            end += 1;
        }
        let digits_start = end;
        while rest.get(end).is_some_and(u8::is_ascii_digit) {
            end += 1;
        }
        if end > digits_start {
            len = end;
        }
    }

    let trailing_dot = rest.get(len) == Some(&b'.');
    lex.bump(len + usize::from(trailing_dot));

    if trailing_dot {
        Err(LexErrorKind::MalformedNumber)
    } else {
        Ok(Numeric::Fractional)
    }
}

/// Decides between the `<` operator and a `<...>` string literal.
///
/// The literal form needs an alphanumeric character right after `<` and a
/// closing `>` on the same line.
fn lex_angle(lex: &mut Lexer<RawToken>) -> Result<AngleLead, LexErrorKind> {
    let rest = lex.remainder();
    if !rest.starts_with(|c: char| c.is_ascii_alphanumeric()) {
        return Ok(AngleLead::LessThan);
    }

    match rest.find(['>', '\n']) {
        Some(end) if rest.as_bytes()[end] == b'>' => {
            lex.bump(end + 1);
            Ok(AngleLead::Literal)
        },
        Some(end) => {
            lex.bump(end);
            Err(LexErrorKind::UnterminatedString)
        },
        None => {
            lex.bump(rest.len());
            Err(LexErrorKind::UnterminatedString)
        },
    }
}

/// Recognizes `.x.`, `.X.`, `.=` or a plain `.`.
fn lex_dot(lex: &mut Lexer<RawToken>) -> DotLead {
    match lex.remainder().as_bytes() {
        [b'x' | b'X', b'.', ..] => {
            lex.bump(2);
            DotLead::Repeat
        },
        [b'=', ..] => {
            lex.bump(1);
            DotLead::CatenateAssign
        },
        _ => DotLead::Catenate,
    }
}

/// Accepts `@eq`, `@le` and `@gt` in any letter case.
fn lex_string_relation(lex: &mut Lexer<RawToken>) -> Result<StringRelation, LexErrorKind> {
    match lex.slice()[1..].to_ascii_lowercase().as_str() {
        "eq" => Ok(StringRelation::Equal),
        "le" => Ok(StringRelation::LessEqual),
        "gt" => Ok(StringRelation::Greater),
        _ => Err(LexErrorKind::MalformedKeyword),
    }
}

fn reject_unterminated(_: &mut Lexer<RawToken>) -> Result<(), LexErrorKind> {
    Err(LexErrorKind::UnterminatedString)
}

fn reject_bare_greater(_: &mut Lexer<RawToken>) -> Result<(), LexErrorKind> {
    Err(LexErrorKind::UnrecognizedCharacter)
}

/// Classifies a lexical token.
///
/// This is the closed set of token kinds of the language. `End` marks the
/// end of input and `Error` a lexical error; the scanner keeps returning
/// either of them once it has produced one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Integer literal such as `42`.
    IntConst,
    /// Fractional literal such as `4.2` or `4.2e-1`.
    FloatConst,
    /// String literal delimited by `"`, `'` or `<` and `>`.
    StringConst,
    /// Identifier such as `total` or `$x_1`.
    Ident,
    /// `if`, in any letter case.
    If,
    /// `else`, in any letter case.
    Else,
    /// `println`, in any letter case.
    Println,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Mult,
    /// `/`
    Div,
    /// `%`
    Rem,
    /// `**`
    Pow,
    /// `.`
    Cat,
    /// `.x.`
    Repeat,
    /// `=`
    Assign,
    /// `+=`
    AddAssign,
    /// `-=`
    SubAssign,
    /// `.=`
    CatAssign,
    /// `==`
    NumEq,
    /// `>=`
    NumGe,
    /// `<`
    NumLt,
    /// `@eq`
    StrEq,
    /// `@le`
    StrLe,
    /// `@gt`
    StrGt,
    /// `&&`
    And,
    /// `||`
    Or,
    /// `!`
    Not,
    /// `,`
    Comma,
    /// `;`
    Semicolon,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// End of input.
    End,
    /// Lexical error.
    Error(LexErrorKind),
}

impl TokenKind {
    /// Returns `true` if a statement can start with this token.
    #[must_use]
    pub const fn starts_statement(self) -> bool {
        matches!(self, Self::If | Self::Println | Self::Ident)
    }

    /// Returns `true` if a primary operand can start with this token.
    #[must_use]
    pub const fn starts_primary(self) -> bool {
        matches!(self,
                 Self::Ident | Self::IntConst | Self::FloatConst | Self::StringConst | Self::LParen)
    }

    /// Returns `true` if an operand, including a leading `+`, `-` or `!`,
    /// can start with this token.
    #[must_use]
    pub const fn starts_operand(self) -> bool {
        self.starts_primary() || matches!(self, Self::Plus | Self::Minus | Self::Not)
    }

    /// Returns `true` for `=`, `+=`, `-=` and `.=`.
    #[must_use]
    pub const fn is_assign_op(self) -> bool {
        matches!(self, Self::Assign | Self::AddAssign | Self::SubAssign | Self::CatAssign)
    }

    /// Returns `true` for `End` and `Error`, after which the scanner yields
    /// nothing else.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::End | Self::Error(_))
    }

    /// The upper-case name used by the token listing.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::IntConst => "ICONST",
            Self::FloatConst => "FCONST",
            Self::StringConst => "SCONST",
            Self::Ident => "IDENT",
            Self::If => "IF",
            Self::Else => "ELSE",
            Self::Println => "PRINTLN",
            Self::Plus => "PLUS",
            Self::Minus => "MINUS",
            Self::Mult => "MULT",
            Self::Div => "DIV",
            Self::Rem => "REM",
            Self::Pow => "EXPONENT",
            Self::Cat => "CAT",
            Self::Repeat => "SREPEAT",
            Self::Assign => "ASSOP",
            Self::AddAssign => "CADDA",
            Self::SubAssign => "CSUBA",
            Self::CatAssign => "CCATA",
            Self::NumEq => "NEQ",
            Self::NumGe => "NGTE",
            Self::NumLt => "NLT",
            Self::StrEq => "SEQ",
            Self::StrLe => "SLTE",
            Self::StrGt => "SGT",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Not => "NOT",
            Self::Comma => "COMMA",
            Self::Semicolon => "SEMICOL",
            Self::LParen => "LPAREN",
            Self::RParen => "RPAREN",
            Self::LBrace => "LBRACES",
            Self::RBrace => "RBRACES",
            Self::End => "EOF",
            Self::Error(_) => "ERR",
        }
    }
}

/// A classified lexical token.
///
/// `lexeme` is the exact source text of the token (for string literals this
/// includes the delimiters) and `line` is the line it appeared on. Tokens are
/// never modified once produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What kind of token this is.
    pub kind:   TokenKind,
    /// The source text the token was derived from.
    pub lexeme: String,
    /// The source line of the token.
    pub line:   usize,
}

impl Token {
    /// Creates an end-of-input token.
    #[must_use]
    pub const fn end(line: usize) -> Self {
        Self { kind: TokenKind::End,
               lexeme: String::new(),
               line }
    }

    /// Returns the contents of a string literal without its delimiters, or
    /// the lexeme of any other token.
    #[must_use]
    pub fn text(&self) -> &str {
        match self.kind {
            TokenKind::StringConst if self.lexeme.len() >= 2 => {
                &self.lexeme[1..self.lexeme.len() - 1]
            },
            _ => &self.lexeme,
        }
    }

    /// Converts an error token into the matching [`LexError`].
    #[must_use]
    pub fn lex_error(&self) -> Option<LexError> {
        match self.kind {
            TokenKind::Error(kind) => Some(LexError { kind,
                                                      lexeme: self.lexeme.clone(),
                                                      line: self.line }),
            _ => None,
        }
    }
}

/// Converts source text into a lazy sequence of [`Token`]s.
///
/// Blanks and `#` comments are skipped, newlines advance the line counter.
/// After the end of input or a lexical error the scanner is idempotent: it
/// keeps returning that terminal token.
///
/// # Example
/// ```
/// use bpl::interpreter::lexer::{Scanner, TokenKind};
///
/// let mut scanner = Scanner::new("x = 3.5 .x. 2; # comment");
/// let kinds: Vec<TokenKind> = std::iter::from_fn(|| {
///                                 let token = scanner.next_token();
///                                 (token.kind != TokenKind::End).then_some(token.kind)
///                             }).collect();
///
/// assert_eq!(kinds,
///            [TokenKind::Ident,
///             TokenKind::Assign,
///             TokenKind::FloatConst,
///             TokenKind::Repeat,
///             TokenKind::IntConst,
///             TokenKind::Semicolon]);
/// ```
pub struct Scanner<'src> {
    lexer:    Lexer<'src, RawToken>,
    terminal: Option<Token>,
}

impl<'src> Scanner<'src> {
    /// Creates a scanner positioned at the start of `source`, on line 1.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { lexer:    RawToken::lexer_with_extras(source, LexerExtras { line: 1 }),
               terminal: None, }
    }

    /// The line the scanner is currently on.
    #[must_use]
    pub fn line(&self) -> usize {
        self.lexer.extras.line
    }

    /// Produces the next token.
    pub fn next_token(&mut self) -> Token {
        if let Some(token) = &self.terminal {
            return token.clone();
        }

        let raw = self.lexer.next();
        let line = self.lexer.extras.line;
        let lexeme = self.lexer.slice();

        let kind = match raw {
            None => TokenKind::End,
            Some(Ok(raw)) => classify(&raw, lexeme),
            Some(Err(kind)) => TokenKind::Error(kind),
        };
        let token = Token { kind,
                            lexeme: if kind == TokenKind::End { String::new() } else { lexeme.to_string() },
                            line };

        trace!(kind = ?token.kind, lexeme = %token.lexeme, line = token.line, "scanned token");

        if kind.is_terminal() {
            self.terminal = Some(token.clone());
        }
        token
    }
}

/// Maps a raw `logos` token onto the public token kind.
fn classify(raw: &RawToken, lexeme: &str) -> TokenKind {
    match raw {
        RawToken::Number(Numeric::Integer) => TokenKind::IntConst,
        RawToken::Number(Numeric::Fractional) => TokenKind::FloatConst,
        RawToken::Word => keyword(lexeme).unwrap_or(TokenKind::Ident),
        RawToken::Quoted | RawToken::Angle(AngleLead::Literal) => TokenKind::StringConst,
        RawToken::Angle(AngleLead::LessThan) => TokenKind::NumLt,
        RawToken::Dot(DotLead::Catenate) => TokenKind::Cat,
        RawToken::Dot(DotLead::Repeat) => TokenKind::Repeat,
        RawToken::Dot(DotLead::CatenateAssign) => TokenKind::CatAssign,
        RawToken::StringRelation(StringRelation::Equal) => TokenKind::StrEq,
        RawToken::StringRelation(StringRelation::LessEqual) => TokenKind::StrLe,
        RawToken::StringRelation(StringRelation::Greater) => TokenKind::StrGt,
        RawToken::Plus => TokenKind::Plus,
        RawToken::PlusAssign => TokenKind::AddAssign,
        RawToken::Minus => TokenKind::Minus,
        RawToken::MinusAssign => TokenKind::SubAssign,
        RawToken::Star => TokenKind::Mult,
        RawToken::DoubleStar => TokenKind::Pow,
        RawToken::Slash => TokenKind::Div,
        RawToken::Percent => TokenKind::Rem,
        RawToken::Equals => TokenKind::Assign,
        RawToken::EqualEqual => TokenKind::NumEq,
        RawToken::GreaterEqual => TokenKind::NumGe,
        RawToken::DoubleAmpersand => TokenKind::And,
        RawToken::DoublePipe => TokenKind::Or,
        RawToken::Bang => TokenKind::Not,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Semicolon => TokenKind::Semicolon,
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBrace => TokenKind::LBrace,
        RawToken::RBrace => TokenKind::RBrace,
        // These never reach the caller: their callbacks skip or fail.
        RawToken::Unterminated | RawToken::Greater | RawToken::Comment | RawToken::NewLine => {
            TokenKind::Error(LexErrorKind::UnrecognizedCharacter)
        },
    }
}

/// Looks up a reserved word, ignoring letter case.
fn keyword(word: &str) -> Option<TokenKind> {
    match word.to_ascii_lowercase().as_str() {
        "if" => Some(TokenKind::If),
        "else" => Some(TokenKind::Else),
        "println" => Some(TokenKind::Println),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn scan_all(source: &str) -> Vec<Token> {
        let mut scanner = Scanner::new(source);
        let mut tokens = Vec::new();
        loop {
            let token = scanner.next_token();
            let done = token.kind.is_terminal();
            tokens.push(token);
            if done {
                return tokens;
            }
        }
    }

    fn kinds(source: &str) -> Vec<TokenKind> {
        scan_all(source).into_iter().map(|t| t.kind).collect()
    }

    fn lexemes(source: &str) -> Vec<String> {
        scan_all(source).into_iter().map(|t| t.lexeme).collect()
    }

    #[test]
    fn statement_tokens_carry_lexemes_and_lines() {
        let tokens = scan_all("x = 10;\nprintln(x, \"hi\");\n");
        let summary: Vec<(TokenKind, &str, usize)> =
            tokens.iter().map(|t| (t.kind, t.lexeme.as_str(), t.line)).collect();

        assert_eq!(summary,
                   vec![(TokenKind::Ident, "x", 1),
                        (TokenKind::Assign, "=", 1),
                        (TokenKind::IntConst, "10", 1),
                        (TokenKind::Semicolon, ";", 1),
                        (TokenKind::Println, "println", 2),
                        (TokenKind::LParen, "(", 2),
                        (TokenKind::Ident, "x", 2),
                        (TokenKind::Comma, ",", 2),
                        (TokenKind::StringConst, "\"hi\"", 2),
                        (TokenKind::RParen, ")", 2),
                        (TokenKind::Semicolon, ";", 2),
                        (TokenKind::End, "", 3)]);
    }

    #[test]
    fn keywords_ignore_case_but_keep_lexeme() {
        let tokens = scan_all("IF Else PrintLn iffy");
        assert_eq!(tokens[0].kind, TokenKind::If);
        assert_eq!(tokens[0].lexeme, "IF");
        assert_eq!(tokens[1].kind, TokenKind::Else);
        assert_eq!(tokens[2].kind, TokenKind::Println);
        assert_eq!(tokens[2].lexeme, "PrintLn");
        assert_eq!(tokens[3].kind, TokenKind::Ident);
    }

    #[test]
    fn identifiers_accept_dollar_and_underscore() {
        assert_eq!(lexemes("$total_2 a$b"), vec!["$total_2", "a$b", ""]);
    }

    #[test]
    fn numeric_literals() {
        assert_eq!(kinds("12 3.25 1.5e3 2.5E-2"),
                   vec![TokenKind::IntConst,
                        TokenKind::FloatConst,
                        TokenKind::FloatConst,
                        TokenKind::FloatConst,
                        TokenKind::End]);
        assert_eq!(lexemes("1.5e3 2.5E-2"), vec!["1.5e3", "2.5E-2", ""]);
    }

    #[test]
    fn dot_without_digit_is_not_absorbed() {
        assert_eq!(kinds("3.x.2"),
                   vec![TokenKind::IntConst, TokenKind::Repeat, TokenKind::IntConst, TokenKind::End]);
        assert_eq!(kinds("3. a"),
                   vec![TokenKind::IntConst, TokenKind::Cat, TokenKind::Ident, TokenKind::End]);
    }

    #[test]
    fn exponent_requires_fraction_and_digits() {
        assert_eq!(lexemes("3e5"), vec!["3", "e5", ""]);
        assert_eq!(lexemes("1.5e+x"), vec!["1.5", "e", "+", "x", ""]);
    }

    #[test]
    fn second_dot_after_fraction_is_an_error() {
        let tokens = scan_all("x = 3.5.2;");
        let last = tokens.last().unwrap();
        assert_eq!(last.kind, TokenKind::Error(LexErrorKind::MalformedNumber));
        assert_eq!(last.lexeme, "3.5.");
    }

    #[test]
    fn string_literal_forms() {
        let tokens = scan_all("\"double\" 'single' <angle text> \"\"");
        let texts: Vec<&str> = tokens.iter().map(Token::text).collect();
        assert_eq!(texts, vec!["double", "single", "angle text", "", ""]);
        assert!(tokens[..4].iter().all(|t| t.kind == TokenKind::StringConst));
    }

    #[test]
    fn less_than_without_alphanumeric_is_operator() {
        assert_eq!(kinds("a < b"),
                   vec![TokenKind::Ident, TokenKind::NumLt, TokenKind::Ident, TokenKind::End]);
    }

    #[test]
    fn unterminated_string_stops_the_scanner() {
        let mut scanner = Scanner::new("println(\"abc);\nx = 1;");
        assert_eq!(scanner.next_token().kind, TokenKind::Println);
        assert_eq!(scanner.next_token().kind, TokenKind::LParen);

        let error = scanner.next_token();
        assert_eq!(error.kind, TokenKind::Error(LexErrorKind::UnterminatedString));
        assert_eq!(error.lexeme, "\"abc);");
        assert_eq!(error.line, 1);

        assert_eq!(scanner.next_token(), error);
        assert_eq!(scanner.next_token(), error);
    }

    #[test]
    fn unterminated_angle_literal() {
        let tokens = scan_all("<abc\n>");
        assert_eq!(tokens[0].kind, TokenKind::Error(LexErrorKind::UnterminatedString));
        assert_eq!(tokens[0].lexeme, "<abc");
    }

    #[test]
    fn operators_and_compound_assignments() {
        assert_eq!(kinds("+ += - -= * ** / % = == >= .= . && || !"),
                   vec![TokenKind::Plus,
                        TokenKind::AddAssign,
                        TokenKind::Minus,
                        TokenKind::SubAssign,
                        TokenKind::Mult,
                        TokenKind::Pow,
                        TokenKind::Div,
                        TokenKind::Rem,
                        TokenKind::Assign,
                        TokenKind::NumEq,
                        TokenKind::NumGe,
                        TokenKind::CatAssign,
                        TokenKind::Cat,
                        TokenKind::And,
                        TokenKind::Or,
                        TokenKind::Not,
                        TokenKind::End]);
    }

    #[test]
    fn string_relational_keywords() {
        assert_eq!(kinds("@eq @LE @Gt"),
                   vec![TokenKind::StrEq, TokenKind::StrLe, TokenKind::StrGt, TokenKind::End]);
        assert_eq!(kinds("@ne"), vec![TokenKind::Error(LexErrorKind::MalformedKeyword)]);
        assert_eq!(kinds("@ 1"), vec![TokenKind::Error(LexErrorKind::MalformedKeyword)]);
    }

    #[test]
    fn lone_characters_are_errors() {
        for source in ["_", ">", "&", "|", "?"] {
            let tokens = scan_all(source);
            assert_eq!(tokens.len(), 1, "source {source:?}");
            assert_eq!(tokens[0].kind, TokenKind::Error(LexErrorKind::UnrecognizedCharacter));
            assert_eq!(tokens[0].lexeme, source);
        }
    }

    #[test]
    fn comments_are_skipped_and_lines_counted() {
        let tokens = scan_all("# header\n\n  x # trailing\ny");
        assert_eq!(tokens[0].line, 3);
        assert_eq!(tokens[1].line, 4);
        assert_eq!(tokens[2].kind, TokenKind::End);
    }

    #[test]
    fn error_line_is_where_the_construct_started() {
        let tokens = scan_all("a\nb\n  'open");
        assert_eq!(tokens[2].lex_error().unwrap().line, 3);
    }

    #[test]
    fn integer_lexemes_parse_back_to_their_value() {
        for value in [0_u64, 7, 42, 1000, 9_007_199_254_740_991] {
            let tokens = scan_all(&value.to_string());
            assert_eq!(tokens[0].kind, TokenKind::IntConst);
            assert_eq!(tokens[0].lexeme.parse::<u64>().unwrap(), value);
        }
    }
}
