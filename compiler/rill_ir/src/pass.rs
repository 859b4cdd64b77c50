//! Compiler pass names.
//!
//! Only the lexical pass exists today; the rest name the phases diagnostics
//! will be tagged with once those passes are built.

use std::fmt;

/// The compiler phase a diagnostic originates from.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Pass {
    Lexical,
    Syntax,
    Semantic,
    Optimisation,
    CodeGeneration,
}

impl fmt::Display for Pass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Pass::Lexical => "lexical",
            Pass::Syntax => "syntax",
            Pass::Semantic => "semantic",
            Pass::Optimisation => "optimisation",
            Pass::CodeGeneration => "code generation",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names() {
        assert_eq!(Pass::Lexical.to_string(), "lexical");
        assert_eq!(Pass::CodeGeneration.to_string(), "code generation");
    }
}
