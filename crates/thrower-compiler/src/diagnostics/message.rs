use text_size::TextRange;

/// Parse diagnostics, plus one kind for stops raised while running a program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiagnosticKind {
    UnclosedBlock,
    UnmatchedBrace,

    // User omitted something required
    EmptyProgram,
    EmptyBlock,
    ExpectedInstruction,
    ExpectedOperand,
    ExpectedRegister,
    ExpectedRegisterIndex,
    ExpectedInteger,
    ExpectedComparison,
    ExpectedBlock,

    // User wrote something that doesn't fit
    InvalidRegisterIndex,
    IntegerOutOfRange,
    UnexpectedToken,

    RuntimeStop,
}

impl DiagnosticKind {
    /// Base message for this diagnostic kind, used when no custom message is provided.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::UnclosedBlock => "missing closing `}`",
            Self::UnmatchedBrace => "unmatched `}`",

            Self::EmptyProgram => "program must contain at least one instruction",
            Self::EmptyBlock => "block must contain at least one instruction",
            Self::ExpectedInstruction => "expected an instruction",
            Self::ExpectedOperand => "expected a register or literal",
            Self::ExpectedRegister => "expected a register",
            Self::ExpectedRegisterIndex => "expected a register index",
            Self::ExpectedInteger => "expected an integer",
            Self::ExpectedComparison => "expected `==` or `!=`",
            Self::ExpectedBlock => "expected `{`",

            Self::InvalidRegisterIndex => "invalid register index",
            Self::IntegerOutOfRange => "integer literal out of range",
            Self::UnexpectedToken => "unexpected token",

            Self::RuntimeStop => "program stopped",
        }
    }

    /// Template for custom messages. Contains `{}` placeholder for caller-provided detail.
    pub fn custom_message(&self) -> String {
        match self {
            Self::UnclosedBlock => format!("{}; {{}}", self.fallback_message()),
            Self::RuntimeStop => "{}".to_string(),
            _ => format!("{}: {{}}", self.fallback_message()),
        }
    }

    /// Render the final message.
    ///
    /// - `None` → returns `fallback_message()`
    /// - `Some(detail)` → returns `custom_message()` with `{}` replaced by detail
    pub fn message(&self, msg: Option<&str>) -> String {
        match msg {
            None => self.fallback_message().to_string(),
            Some(detail) => self.custom_message().replace("{}", detail),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedInfo {
    pub(crate) range: TextRange,
    pub(crate) message: String,
}

impl RelatedInfo {
    pub fn new(range: TextRange, message: impl Into<String>) -> Self {
        Self {
            range,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DiagnosticMessage {
    pub(crate) kind: DiagnosticKind,
    /// The range shown to the user (underlined in output).
    pub(crate) range: TextRange,
    pub(crate) message: String,
    pub(crate) related: Vec<RelatedInfo>,
}

impl DiagnosticMessage {
    pub(crate) fn new(kind: DiagnosticKind, range: TextRange, message: impl Into<String>) -> Self {
        Self {
            kind,
            range,
            message: message.into(),
            related: Vec::new(),
        }
    }

    pub(crate) fn with_default_message(kind: DiagnosticKind, range: TextRange) -> Self {
        Self::new(kind, range, kind.fallback_message())
    }
}

impl std::fmt::Display for DiagnosticMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "error at {}: {}", Offsets(self.range), self.message)?;
        for related in &self.related {
            write!(
                f,
                " (related: {} at {})",
                related.message,
                Offsets(related.range)
            )?;
        }
        Ok(())
    }
}

/// `start..end` as plain byte offsets.
struct Offsets(TextRange);

impl std::fmt::Display for Offsets {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", u32::from(self.0.start()), u32::from(self.0.end()))
    }
}
