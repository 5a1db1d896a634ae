//! Processing modes recognized by the playground.

use std::fmt;

/// What the user wants done with a source sample.
///
/// The UI supplies the mode as a plain string, so the identifier mapping is
/// the trust boundary: [`ProcessingMode::from_identifier`] performs an
/// exact-match lookup and anything else is an unrecognized mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProcessingMode {
    /// Hand-written lexer backend.
    Lexer,
    /// Alternate Flex-generated lexer backend.
    FlexLexer,
    /// Pratt parser backend.
    Pratt,
    /// Tree-walking evaluator backend.
    Evaluator,
    /// Bytecode compiler backend.
    Bytecode,
}

impl ProcessingMode {
    /// Every recognized mode, in UI order.
    pub const ALL: [ProcessingMode; 5] = [
        ProcessingMode::Lexer,
        ProcessingMode::FlexLexer,
        ProcessingMode::Pratt,
        ProcessingMode::Evaluator,
        ProcessingMode::Bytecode,
    ];

    /// The wire identifier used by the UI and the configuration file.
    pub fn identifier(&self) -> &'static str {
        match self {
            ProcessingMode::Lexer => "lexer",
            ProcessingMode::FlexLexer => "flex-lexer",
            ProcessingMode::Pratt => "pratt",
            ProcessingMode::Evaluator => "evaluator",
            ProcessingMode::Bytecode => "bytecode",
        }
    }

    /// Exact-match lookup of a UI-supplied identifier.
    pub fn from_identifier(identifier: &str) -> Option<ProcessingMode> {
        ProcessingMode::ALL
            .into_iter()
            .find(|mode| mode.identifier() == identifier)
    }
}

impl fmt::Display for ProcessingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers_round_trip() {
        for mode in ProcessingMode::ALL {
            assert_eq!(ProcessingMode::from_identifier(mode.identifier()), Some(mode));
        }
    }

    #[test]
    fn lookup_is_exact_match() {
        assert_eq!(ProcessingMode::from_identifier("compiler"), None);
        assert_eq!(ProcessingMode::from_identifier("Lexer"), None);
        assert_eq!(ProcessingMode::from_identifier(" lexer"), None);
        assert_eq!(ProcessingMode::from_identifier(""), None);
    }
}
