use anyhow::Result;

use crate::cli::Commands;

use super::container::Container;
use super::controller::DiscoverController;

pub struct Router<'a> {
    discover_controller: DiscoverController<'a>,
}

impl<'a> Router<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self {
            discover_controller: DiscoverController::new(container),
        }
    }

    pub async fn route(&self, command: Commands) -> Result<String> {
        match command {
            Commands::Discover { model } => self.discover_controller.discover(model).await,
            Commands::Serve { .. } => unreachable!("Serve command is handled separately in main"),
        }
    }
}
