//! CLI domain: parse, route, and output only.
//! A single route builds the request, sends it, and renders the response.

mod output;
mod parse;
mod route;

pub use output::map_error;
pub use parse::Cli;
pub use route::RunContext;
