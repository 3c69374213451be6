mod builder;
mod header;
#[allow(clippy::module_inception)]
mod token;

pub use builder::TokenBuilder;
pub use header::{Header, TYPE_JWT};
pub use token::Token;
