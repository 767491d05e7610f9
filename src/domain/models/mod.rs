mod explanation;
mod explanation_model;
mod quote;
mod session;

pub use explanation::*;
pub use explanation_model::*;
pub use quote::*;
pub use session::*;
