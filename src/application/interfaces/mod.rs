mod chat_client;
mod quote_source;

pub use chat_client::*;
pub use quote_source::*;
