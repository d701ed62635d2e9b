use anyhow::Result;

use crate::graphql::execute;

use super::{CommandContext, print_response};

pub fn handle_mutate(
    ctx: CommandContext,
    mutation: String,
    variables: Option<String>,
) -> Result<()> {
    let schema = ctx.schema();

    // Auto-wrap in mutation { }
    let query = format!("mutation {{ {} }}", mutation);
    let response = tokio::runtime::Runtime::new()?.block_on(execute(
        &schema,
        &query,
        variables.as_deref(),
    ))?;

    print_response(&response)
}
