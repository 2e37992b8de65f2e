//! Symbols and transition labels.

use std::fmt;

/// An alphabet symbol: a single input character.
pub type Symbol = char;

/// The label on a transition: either a concrete alphabet symbol or epsilon.
///
/// Epsilon is a distinct variant rather than a reserved character, so an
/// alphabet can never contain it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    /// An epsilon transition, consumable without reading input.
    Epsilon,
    /// A transition on the given alphabet symbol.
    Symbol(Symbol),
}

impl Label {
    /// Check whether this label is epsilon.
    #[inline]
    pub fn is_epsilon(self) -> bool {
        matches!(self, Label::Epsilon)
    }

    /// The concrete symbol, if this is not an epsilon label.
    pub fn symbol(self) -> Option<Symbol> {
        match self {
            Label::Epsilon => None,
            Label::Symbol(sym) => Some(sym),
        }
    }
}

impl From<Symbol> for Label {
    fn from(sym: Symbol) -> Self {
        Label::Symbol(sym)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Epsilon => write!(f, "ε"),
            Label::Symbol(sym) => write!(f, "{sym}"),
        }
    }
}
