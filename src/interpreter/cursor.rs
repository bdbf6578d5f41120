use tracing::debug;

use crate::interpreter::lexer::{Scanner, Token, TokenKind};

/// A one-token lookahead buffer over a [`Scanner`].
///
/// Both the syntax checker and the evaluator own one of these. At most one
/// token can be pending at a time: pushing back a second token before the
/// first was consumed is a programming error and panics.
///
/// # Example
/// ```
/// use bpl::interpreter::{cursor::TokenCursor, lexer::TokenKind};
///
/// let mut cursor = TokenCursor::new("x = 1;");
/// assert_eq!(cursor.peek().kind, TokenKind::Ident);
///
/// let x = cursor.next();
/// cursor.push_back(x);
/// assert_eq!(cursor.next().lexeme, "x");
///
/// assert!(cursor.accept(TokenKind::Assign).is_some());
/// assert!(cursor.accept(TokenKind::Semicolon).is_none());
/// assert_eq!(cursor.next().lexeme, "1");
/// ```
pub struct TokenCursor<'src> {
    scanner:   Scanner<'src>,
    pending:   Option<Token>,
    last_line: usize,
}

impl<'src> TokenCursor<'src> {
    /// Creates a cursor at the start of `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { scanner:   Scanner::new(source),
               pending:   None,
               last_line: 1, }
    }

    /// Takes the next token, the pushed back one if there is one.
    pub fn next(&mut self) -> Token {
        match self.pending.take() {
            Some(token) => token,
            None => self.scan(),
        }
    }

    /// Returns a token to the cursor so that the next call to
    /// [`TokenCursor::next`] delivers it again.
    ///
    /// # Panics
    /// Panics if a token is already pending.
    pub fn push_back(&mut self, token: Token) {
        assert!(self.pending.is_none(),
                "cannot push back `{}` while `{}` is pending",
                token.lexeme,
                self.pending.as_ref().map_or("", |t| t.lexeme.as_str()));
        self.pending = Some(token);
    }

    /// Looks at the next token without consuming it.
    pub fn peek(&mut self) -> &Token {
        let token = match self.pending.take() {
            Some(token) => token,
            None => self.scan(),
        };
        self.pending.insert(token)
    }

    /// Shorthand for the kind of [`TokenCursor::peek`].
    pub fn peek_kind(&mut self) -> TokenKind {
        self.peek().kind
    }

    /// Consumes the next token if it is of the given kind.
    pub fn accept(&mut self, kind: TokenKind) -> Option<Token> {
        if self.peek_kind() == kind { Some(self.next()) } else { None }
    }

    /// The line of the most recently scanned token, including a token that
    /// was only peeked at.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.last_line
    }

    /// Discards tokens until one of the `sync` kinds has been consumed.
    ///
    /// Returns the consumed synchronizing token, or `None` if the input ended
    /// (or failed to scan) first. The terminal token stays pending in that
    /// case.
    pub fn skip_until(&mut self, sync: &[TokenKind]) -> Option<Token> {
        let mut skipped = 0_usize;
        loop {
            let token = self.next();
            if sync.contains(&token.kind) {
                debug!(skipped, sync = %token.lexeme, line = token.line, "resynchronized");
                return Some(token);
            }
            if token.kind.is_terminal() {
                debug!(skipped, line = token.line, "input ended while resynchronizing");
                self.push_back(token);
                return None;
            }
            skipped += 1;
        }
    }

    /// Skips the rest of a `{...}` block whose opening brace has already been
    /// consumed, tracking nested braces so that only the matching `}` ends
    /// the skip.
    ///
    /// # Errors
    /// Returns the terminal token (end of input or a lexical error) if the
    /// block is never closed.
    pub fn skip_block(&mut self) -> Result<(), Token> {
        let mut depth = 1_usize;
        while depth > 0 {
            let token = self.next();
            match token.kind {
                TokenKind::LBrace => depth += 1,
                TokenKind::RBrace => depth -= 1,
                kind if kind.is_terminal() => return Err(token),
                _ => {},
            }
        }
        Ok(())
    }

    fn scan(&mut self) -> Token {
        let token = self.scanner.next_token();
        self.last_line = token.line;
        token
    }
}
