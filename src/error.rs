//! The error type for this crate.

use alloc::borrow::Cow;
use core::fmt;

/// The category of a [`DateError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// A value fell outside its representable or valid range.
    Range,
    /// An unrecognized or unsupported calendar field token.
    Component,
    /// An invalid argument, such as a non-positive rounding increment.
    Argument,
    /// An unrecognized field in a format pattern.
    Syntax,
    /// An internal invariant failed to hold.
    Assert,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Range => "RangeError",
            Self::Component => "ComponentError",
            Self::Argument => "ArgumentError",
            Self::Syntax => "SyntaxError",
            Self::Assert => "AssertionError",
        }
        .fmt(f)
    }
}

/// The error returned by fallible operations in this crate.
///
/// Errors are detected synchronously at the start of an operation and
/// surfaced immediately; absence of a result (for example, no candidate
/// inside a search window) is modeled as `Ok(None)` rather than an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateError {
    kind: ErrorKind,
    msg: Cow<'static, str>,
}

impl DateError {
    const fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            msg: Cow::Borrowed(""),
        }
    }

    /// Creates a range error.
    #[must_use]
    pub const fn range() -> Self {
        Self::new(ErrorKind::Range)
    }

    /// Creates an invalid component error.
    #[must_use]
    pub const fn component() -> Self {
        Self::new(ErrorKind::Component)
    }

    /// Creates an invalid argument error.
    #[must_use]
    pub const fn argument() -> Self {
        Self::new(ErrorKind::Argument)
    }

    /// Creates a syntax error.
    #[must_use]
    pub const fn syntax() -> Self {
        Self::new(ErrorKind::Syntax)
    }

    /// Creates an assertion error for a failed internal invariant.
    #[must_use]
    pub(crate) const fn assert() -> Self {
        Self::new(ErrorKind::Assert)
    }

    /// Attaches a message to this error.
    #[must_use]
    pub fn with_message(mut self, msg: &'static str) -> Self {
        self.msg = Cow::Borrowed(msg);
        self
    }

    /// Returns this error's kind.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns this error's message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.msg
    }
}

impl fmt::Display for DateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.kind.fmt(f)?;
        if !self.msg.is_empty() {
            f.write_str(": ")?;
            f.write_str(&self.msg)?;
        }
        Ok(())
    }
}

impl core::error::Error for DateError {}
