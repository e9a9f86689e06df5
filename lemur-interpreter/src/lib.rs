//! Tree-walking interpreter for the Lemur scripting language.
//!
//! Source text flows one way through the pipeline: [`lexer::Lexer`] turns
//! it into tokens, [`parser::Parser`] builds a [`ast::Program`] while
//! accumulating recoverable diagnostics, and [`evaluator`] walks the tree
//! to an [`object::Object`].
//!
//! [`Interpreter`] bundles the pipeline with a persistent environment for
//! hosts that feed it one chunk of source at a time.

pub mod ast;
pub mod evaluator;
pub mod lexer;
pub mod object;
pub mod parser;
pub mod token;

use evaluator::eval_program;
use lexer::Lexer;
use object::{Environment, MutableEnvironment};
use parser::Parser;

/// Runs chunks of source against a single long-lived environment, so
/// bindings survive from one `interpret` call to the next.
pub struct Interpreter {
    environment: MutableEnvironment,
}

impl Interpreter {
    pub fn new() -> Interpreter {
        Interpreter {
            environment: Environment::new(),
        }
    }

    /// Feeds one chunk of source through the pipeline. Returns the
    /// `inspect` rendering of the result; if the parser produced
    /// diagnostics, returns them tab-indented, one per line, without
    /// evaluating.
    pub fn interpret(&mut self, input: &str) -> String {
        let lexer = Lexer::new(input);
        let mut parser = Parser::new(lexer);
        let program = parser.parse_program();

        if !parser.errors().is_empty() {
            return parser
                .errors()
                .iter()
                .map(|e| format!("\t{}", e))
                .collect::<Vec<_>>()
                .join("\n");
        }

        match eval_program(&program, &self.environment) {
            Ok(value) => value.inspect(),
            Err(e) => format!("\t{}", e),
        }
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Interpreter::new()
    }
}
