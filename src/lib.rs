pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

pub use application::{
    ChatClient, ChatRequest, DiscoverQuoteUseCase, ExplainQuoteUseCase, FetchQuoteUseCase,
    QuoteSource,
};

pub use connector::{
    Container, ContainerConfig, MockChatClient, MockQuoteSource, OpenAiClient, QuotableClient,
    QuoteController, Router,
};

pub use domain::{
    Discovery, DomainError, Explanation, ExplanationModel, ExplanationOutcome, Quote, Session,
};
