use anyhow::Result;
use colored::Colorize;

use crate::graphql::run_server;

use super::CommandContext;

pub fn handle_serve(mut ctx: CommandContext, host: Option<String>, port: Option<u16>) -> Result<()> {
    if let Some(host) = host {
        ctx.config.server.host = host;
    }
    if let Some(port) = port {
        ctx.config.server.port = port;
    }
    if let Some(ref path) = ctx.config_path {
        tracing::debug!("Using config {}", path.display());
    }

    let schema = ctx.schema();
    let url = format!(
        "http://{}:{}{}",
        ctx.config.server.host, ctx.config.server.port, ctx.config.graphql.path
    );
    println!("{} GraphQL server on {}", "Starting".green(), url.cyan());
    if ctx.config.graphql.graphiql {
        println!("GraphiQL: {}", url);
    }

    tokio::runtime::Runtime::new()?.block_on(run_server(schema, &ctx.config))?;
    Ok(())
}
