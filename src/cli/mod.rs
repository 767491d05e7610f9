use std::net::SocketAddr;

use clap::Subcommand;

use crate::domain::ExplanationModel;

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Serve the single-page web front-end
    Serve {
        /// Address to listen on
        #[arg(long, env = "QUOTE_INSIGHTS_BIND", default_value = "127.0.0.1:8501")]
        bind: SocketAddr,

        /// Model preselected in the settings panel (mini, full, legacy)
        #[arg(short, long, env = "QUOTE_INSIGHTS_MODEL", default_value = "mini")]
        model: ExplanationModel,
    },

    /// Fetch one quote, explain it, and print both
    Discover {
        /// Model used for the explanation (mini, full, legacy)
        #[arg(short, long, env = "QUOTE_INSIGHTS_MODEL", default_value = "mini")]
        model: ExplanationModel,
    },
}
