mod discover_quote;
mod explain_quote;
mod fetch_quote;

pub use discover_quote::*;
pub use explain_quote::*;
pub use fetch_quote::*;
