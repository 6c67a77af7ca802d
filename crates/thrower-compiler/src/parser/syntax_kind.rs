//! Token kinds for the program language.
//!
//! Logos derives token recognition. `Garbage` has no pattern; the lexer
//! produces it for runs of unrecognized characters.

use logos::Logos;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SyntaxKind {
    #[token("{")]
    BraceOpen,

    #[token("}")]
    BraceClose,

    #[token("==")]
    EqEq,

    #[token("!=")]
    NotEq,

    #[token("resolve")]
    KwResolve,

    #[token("sleep")]
    KwSleep,

    #[token("repeat")]
    KwRepeat,

    #[token("load")]
    KwLoad,

    #[token("store")]
    KwStore,

    #[token("if")]
    KwIf,

    #[token("assert")]
    KwAssert,

    /// Register prefix. Keywords starting with `r` win by longest match.
    #[token("r")]
    RegisterPrefix,

    /// Sign is accepted here; the parser decides where negatives are allowed.
    #[regex(r"-?[0-9]+")]
    Integer,

    /// No escapes: the literal ends at the next quote.
    #[regex(r#""[^"\n]*""#)]
    StringLiteral,

    #[regex(r"[ \t\f]+")]
    Whitespace,

    #[token("\n")]
    #[token("\r\n")]
    Newline,

    #[regex(r"#[^\n]*", allow_greedy = true)]
    Comment,

    /// Coalesced unrecognized characters
    Garbage,
}

use SyntaxKind::*;

impl SyntaxKind {
    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(self, Whitespace | Newline | Comment)
    }

    #[inline]
    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            KwResolve | KwSleep | KwRepeat | KwLoad | KwStore | KwIf | KwAssert
        )
    }

    /// Human-readable name for diagnostics.
    pub fn describe(self) -> &'static str {
        match self {
            BraceOpen => "`{`",
            BraceClose => "`}`",
            EqEq => "`==`",
            NotEq => "`!=`",
            KwResolve => "`resolve`",
            KwSleep => "`sleep`",
            KwRepeat => "`repeat`",
            KwLoad => "`load`",
            KwStore => "`store`",
            KwIf => "`if`",
            KwAssert => "`assert`",
            RegisterPrefix => "register",
            Integer => "integer",
            StringLiteral => "string",
            Whitespace | Newline => "whitespace",
            Comment => "comment",
            Garbage => "unrecognized input",
        }
    }
}
