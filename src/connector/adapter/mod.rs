mod mock_chat_client;
mod mock_quote_source;
mod openai_client;
mod quotable_client;

pub use mock_chat_client::*;
pub use mock_quote_source::*;
pub use openai_client::*;
pub use quotable_client::*;
