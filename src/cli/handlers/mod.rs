mod init;
mod mutate;
mod query;
mod schema;
mod serve;

pub use init::handle_init;
pub use mutate::handle_mutate;
pub use query::handle_query;
pub use schema::handle_schema;
pub use serve::handle_serve;

use crate::config::EmailqlConfig;
use crate::graphql::{EmailqlSchema, build_schema};
use std::path::PathBuf;

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: EmailqlConfig,
    pub config_path: Option<PathBuf>,
}

impl CommandContext {
    pub fn new(config: EmailqlConfig, config_path: Option<PathBuf>) -> Self {
        Self {
            config,
            config_path,
        }
    }

    pub fn schema(&self) -> EmailqlSchema {
        build_schema(&self.config.graphql)
    }
}

/// Prints the response as pretty JSON and fails when it carries errors.
fn print_response(response: &async_graphql::Response) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(response)?);
    if response.is_err() {
        anyhow::bail!("GraphQL request failed with {} error(s)", response.errors.len());
    }
    Ok(())
}
