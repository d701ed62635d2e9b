//! GraphQL schema, scalar and HTTP wiring.
//!
//! ## Schema
//!
//! ```graphql
//! scalar EmailAddress
//! type Query { users: [User] }
//! type Mutation { createUser(input: CreateUserInput!): User }
//! type User { name: String, email: String }
//! input CreateUserInput { name: String!, email: EmailAddress! }
//! ```
//!
//! ## Usage
//!
//! ```bash
//! # Start the GraphQL server
//! emailql serve --port 4000
//!
//! # Execute a query from CLI
//! emailql query '{ users { name email } }'
//!
//! # Execute a mutation from CLI
//! emailql mutate 'createUser(input: { name: "Jane", email: "jane@example.com" }) { name email }'
//! ```

pub mod scalar;
mod schema;
mod server;
mod types;

pub use scalar::{CustomScalar, EmailAddress, ValidationError};
pub use schema::{EmailqlSchema, MutationRoot, QueryRoot, build_schema};
pub use server::{AppState, bind, router, run_server};
pub use types::*;

use crate::error::Result;

/// Parses a JSON object of variables, empty when `None`.
pub fn parse_variables(variables: Option<&str>) -> Result<async_graphql::Variables> {
    match variables {
        Some(v) => Ok(serde_json::from_str(v)?),
        None => Ok(async_graphql::Variables::default()),
    }
}

/// Executes a document against the schema in-process.
pub async fn execute(
    schema: &EmailqlSchema,
    document: &str,
    variables: Option<&str>,
) -> Result<async_graphql::Response> {
    let request = async_graphql::Request::new(document).variables(parse_variables(variables)?);
    Ok(schema.execute(request).await)
}
