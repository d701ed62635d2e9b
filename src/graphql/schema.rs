use async_graphql::extensions::Tracing;
use async_graphql::{EmptySubscription, Object, Schema};

use crate::config::GraphqlSettings;

use super::types::*;

pub type EmailqlSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Builds the schema once; the returned value is immutable and cheap to clone.
pub fn build_schema(settings: &GraphqlSettings) -> EmailqlSchema {
    let mut builder = Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .extension(Tracing)
        .limit_depth(settings.max_depth)
        .limit_complexity(settings.max_complexity);

    if !settings.introspection {
        builder = builder.disable_introspection();
    }

    builder.finish()
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// List users
    async fn users(&self) -> Option<Vec<Option<User>>> {
        tracing::debug!("resolving users");
        Some(vec![Some(User::named("John Doe"))])
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Create a user; the validated input is returned as-is
    async fn create_user(&self, input: CreateUserInput) -> Option<User> {
        tracing::debug!(email = %input.email, "creating user");
        Some(input.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sdl_declares_full_surface() {
        let sdl = build_schema(&GraphqlSettings::default()).sdl();
        assert!(sdl.contains("scalar EmailAddress"));
        assert!(sdl.contains("users: [User]"));
        assert!(sdl.contains("createUser(input: CreateUserInput!): User"));
        assert!(sdl.contains("input CreateUserInput"));
        assert!(sdl.contains("email: EmailAddress!"));
        assert!(sdl.contains("name: String!"));
        assert!(sdl.contains("type User"));
    }

    #[test]
    fn test_user_fields_are_nullable() {
        let sdl = build_schema(&GraphqlSettings::default()).sdl();
        assert!(!sdl.contains("users: [User!]"));
        assert!(!sdl.contains("createUser(input: CreateUserInput!): User!"));
        assert!(sdl.contains("email: String\n"));
        assert!(sdl.contains("name: String\n"));
    }
}
