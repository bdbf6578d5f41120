use std::fmt;

use crate::{
    error::LexError,
    interpreter::lexer::{Scanner, Token, TokenKind},
    util::num::{format_literal, parse_leading},
};

/// Which literal lists follow the summary of a [`TokenListing`].
///
/// Only one list style is rendered. Identifiers win over strings, and
/// strings win over numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Sections {
    /// Sorted unique identifiers, numeric values and string literals, with
    /// the summary counting unique entries.
    pub identifiers: bool,
    /// Every string literal, sorted.
    pub strings:     bool,
    /// Every numeric literal by value, sorted.
    pub numbers:     bool,
}

/// Every token of a source unit, collected for inspection.
///
/// The listing stops at the first lexical error. Its `Display` renders the
/// verbose token lines (when `verbose` is set) followed by either the error
/// line or a summary of token counts. A verbose listing without extra
/// sections ends with `EOF: []` once the input holds any identifier or
/// literal.
///
/// # Example
/// ```
/// use bpl::interpreter::listing::TokenListing;
///
/// let listing = TokenListing::scan("x = 'hi';\nprintln(x);");
/// assert_eq!(listing.tokens.len(), 9);
/// assert_eq!(listing.identifiers(), 2);
/// assert_eq!(listing.string_literals(), 1);
/// assert!(listing.error.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenListing {
    /// The tokens scanned before the end of input or the first error.
    pub tokens:   Vec<Token>,
    /// The lexical error that ended the scan, if any.
    pub error:    Option<LexError>,
    /// Whether `Display` lists every token.
    pub verbose:  bool,
    /// The literal lists rendered after the summary.
    pub sections: Sections,
}

impl TokenListing {
    /// Scans the whole of `source`.
    #[must_use]
    pub fn scan(source: &str) -> Self {
        let mut scanner = Scanner::new(source);
        let mut tokens = Vec::new();

        let error = loop {
            let token = scanner.next_token();
            match token.kind {
                TokenKind::End => break None,
                TokenKind::Error(_) => break token.lex_error(),
                _ => tokens.push(token),
            }
        };

        Self { tokens,
               error,
               verbose:  false,
               sections: Sections::default(), }
    }

    /// Turns on the per-token lines of the rendered listing.
    #[must_use]
    pub const fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Selects the literal lists rendered after the summary.
    #[must_use]
    pub const fn sections(mut self, sections: Sections) -> Self {
        self.sections = sections;
        self
    }

    /// The line of the last token seen.
    #[must_use]
    pub fn lines(&self) -> usize {
        self.tokens.last().map_or(1, |t| t.line)
    }

    #[must_use]
    pub fn identifiers(&self) -> usize {
        self.count(|kind| kind == TokenKind::Ident)
    }

    #[must_use]
    pub fn numeric_literals(&self) -> usize {
        self.count(|kind| matches!(kind, TokenKind::IntConst | TokenKind::FloatConst))
    }

    #[must_use]
    pub fn string_literals(&self) -> usize {
        self.count(|kind| kind == TokenKind::StringConst)
    }

    /// Identifier names in source order.
    pub fn identifier_names(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().filter(|t| t.kind == TokenKind::Ident).map(|t| t.lexeme.as_str())
    }

    /// Numeric literal values in source order.
    pub fn numeric_values(&self) -> impl Iterator<Item = f64> + '_ {
        self.tokens
            .iter()
            .filter(|t| matches!(t.kind, TokenKind::IntConst | TokenKind::FloatConst))
            .map(|t| parse_leading(&t.lexeme).unwrap_or(0.0))
    }

    /// String literal contents, without delimiters, in source order.
    pub fn string_texts(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().filter(|t| t.kind == TokenKind::StringConst).map(Token::text)
    }

    fn count(&self, filter: impl Fn(TokenKind) -> bool) -> usize {
        self.tokens.iter().filter(|t| filter(t.kind)).count()
    }
}

fn sorted_numbers(values: impl Iterator<Item = f64>) -> Vec<f64> {
    let mut values: Vec<f64> = values.collect();
    values.sort_by(f64::total_cmp);
    values
}

fn sorted_texts<'a>(texts: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut texts: Vec<&str> = texts.collect();
    texts.sort_unstable();
    texts
}

fn write_summary(f: &mut fmt::Formatter<'_>,
                 listing: &TokenListing,
                 identifiers: usize,
                 numbers: usize,
                 strings: usize)
                 -> fmt::Result {
    writeln!(f)?;
    writeln!(f, "Lines: {}", listing.lines())?;
    writeln!(f, "Total Tokens: {}", listing.tokens.len())?;
    writeln!(f, "Identifiers: {identifiers}")?;
    writeln!(f, "Numeric Literals: {numbers}")?;
    writeln!(f, "String Literals: {strings}")
}

fn write_numbers(f: &mut fmt::Formatter<'_>, values: &[f64]) -> fmt::Result {
    writeln!(f, "NUMERIC LITERALS:")?;
    for value in values {
        writeln!(f, "{}", format_literal(*value))?;
    }
    Ok(())
}

fn write_strings(f: &mut fmt::Formatter<'_>, texts: &[&str]) -> fmt::Result {
    writeln!(f, "STRING LITERALS:")?;
    for text in texts {
        writeln!(f, "<{text}>")?;
    }
    Ok(())
}

/// Renders one token the way the verbose listing shows it.
fn write_token(f: &mut fmt::Formatter<'_>, token: &Token) -> fmt::Result {
    let name = token.kind.name();
    match token.kind {
        TokenKind::IntConst | TokenKind::FloatConst => writeln!(f, "{name}: [{}]", token.lexeme),
        TokenKind::StringConst => writeln!(f, "{name}: <{}>", token.text()),
        TokenKind::Ident => writeln!(f, "{name}: ({})", token.lexeme),
        _ => writeln!(f, "{name}: \"{}\"", token.lexeme),
    }
}

impl fmt::Display for TokenListing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.verbose {
            for token in &self.tokens {
                write_token(f, token)?;
            }
        }

        if let Some(error) = &self.error {
            return writeln!(f, "ERR: {error} in line {}", error.line);
        }

        let (identifiers, numbers, strings) =
            (self.identifiers(), self.numeric_literals(), self.string_literals());

        if self.sections.identifiers {
            let mut names = sorted_texts(self.identifier_names());
            names.dedup();
            let mut values = sorted_numbers(self.numeric_values());
            values.dedup();
            let mut texts = sorted_texts(self.string_texts());
            texts.dedup();

            write_summary(f, self, names.len(), values.len(), texts.len())?;
            writeln!(f, "IDENTIFIERS:")?;
            writeln!(f, "{}", names.join(", "))?;
            write_numbers(f, &values)?;
            if !texts.is_empty() {
                write_strings(f, &texts)?;
            }
            return Ok(());
        }
        if self.sections.strings {
            write_summary(f, self, identifiers, numbers, strings)?;
            return write_strings(f, &sorted_texts(self.string_texts()));
        }
        if self.sections.numbers {
            write_summary(f, self, identifiers, numbers, strings)?;
            return write_numbers(f, &sorted_numbers(self.numeric_values()));
        }
        if self.verbose && identifiers + numbers + strings > 0 {
            return writeln!(f, "EOF: []");
        }
        write_summary(f, self, identifiers, numbers, strings)
    }
}
