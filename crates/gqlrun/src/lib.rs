pub use gqlrun_core::*;

/// The GraphQL request-document lexer, parser, and AST.
pub mod parser {
    pub use gqlrun_parser::*;
}

mod request;

pub use request::RequestError;
pub use request::execute_request;
