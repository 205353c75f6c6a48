//! Stable event codes for compiler diagnostics

use std::fmt;

/// A short stable code attached to logged compiler events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code(&'static str);

impl Code {
    pub const fn new(code: &'static str) -> Self {
        Self(code)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Lexical analysis codes
pub mod lexical {
    use super::Code;

    pub const EMPTY_CONDITION: Code = Code::new("L001");
    pub const UNEXPECTED_TOKEN: Code = Code::new("L002");
}

/// Shunting-yard conversion codes
pub mod shunting {
    use super::Code;

    pub const MISSING_RIGHT_BRACKET: Code = Code::new("S001");
    pub const MISMATCHED_BRACKETS: Code = Code::new("S002");
}

/// Success codes
pub mod success {
    use super::Code;

    pub const COMPILE_COMPLETE: Code = Code::new("C001");
}
