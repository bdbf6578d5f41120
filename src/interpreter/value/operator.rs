use crate::{error::OperationFamily, interpreter::lexer::TokenKind};

/// Every binary operator of the language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
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
}

/// Every prefix operator of the language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    /// `+`, which leaves its operand unchanged.
    Plus,
    /// `-`
    Minus,
    /// `!`
    Not,
}

impl BinaryOperator {
    /// Maps an operator token to its binary operator.
    ///
    /// Compound assignment tokens map to the operator they apply: `+=` to
    /// [`BinaryOperator::Add`], `-=` to [`BinaryOperator::Sub`] and `.=` to
    /// [`BinaryOperator::Cat`].
    #[must_use]
    pub const fn from_token(kind: TokenKind) -> Option<Self> {
        Some(match kind {
            TokenKind::Plus | TokenKind::AddAssign => Self::Add,
            TokenKind::Minus | TokenKind::SubAssign => Self::Sub,
            TokenKind::Mult => Self::Mul,
            TokenKind::Div => Self::Div,
            TokenKind::Rem => Self::Rem,
            TokenKind::Pow => Self::Pow,
            TokenKind::Cat | TokenKind::CatAssign => Self::Cat,
            TokenKind::Repeat => Self::Repeat,
            TokenKind::NumEq => Self::NumEq,
            TokenKind::NumGe => Self::NumGe,
            TokenKind::NumLt => Self::NumLt,
            TokenKind::StrEq => Self::StrEq,
            TokenKind::StrLe => Self::StrLe,
            TokenKind::StrGt => Self::StrGt,
            TokenKind::And => Self::And,
            TokenKind::Or => Self::Or,
            _ => return None,
        })
    }

    /// The grammar level that evaluates this operator, which names it in
    /// runtime failure messages.
    #[must_use]
    pub const fn family(self) -> OperationFamily {
        match self {
            Self::Add | Self::Sub | Self::Cat => OperationFamily::Additive,
            Self::Mul | Self::Div | Self::Rem | Self::Repeat => OperationFamily::Multiplicative,
            Self::Pow => OperationFamily::Exponentiation,
            Self::NumEq | Self::NumGe | Self::NumLt | Self::StrEq | Self::StrLe | Self::StrGt => {
                OperationFamily::Relational
            },
            Self::And => OperationFamily::And,
            Self::Or => OperationFamily::Or,
        }
    }

    /// The source spelling of the operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Rem => "%",
            Self::Pow => "**",
            Self::Cat => ".",
            Self::Repeat => ".x.",
            Self::NumEq => "==",
            Self::NumGe => ">=",
            Self::NumLt => "<",
            Self::StrEq => "@eq",
            Self::StrLe => "@le",
            Self::StrGt => "@gt",
            Self::And => "&&",
            Self::Or => "||",
        }
    }
}

impl UnaryOperator {
    /// Maps a prefix token to its unary operator.
    #[must_use]
    pub const fn from_token(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Plus => Some(Self::Plus),
            TokenKind::Minus => Some(Self::Minus),
            TokenKind::Not => Some(Self::Not),
            _ => None,
        }
    }

    /// The operation family named when this operator fails.
    #[must_use]
    pub const fn family(self) -> OperationFamily {
        match self {
            Self::Plus | Self::Minus => OperationFamily::Sign,
            Self::Not => OperationFamily::Not,
        }
    }
}
