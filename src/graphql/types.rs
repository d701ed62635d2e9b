use async_graphql::{InputObject, SimpleObject};

use super::scalar::EmailAddress;

/// Both fields are nullable: `users` returns a record without an email.
#[derive(SimpleObject, Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl User {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            email: None,
        }
    }
}

impl From<CreateUserInput> for User {
    fn from(input: CreateUserInput) -> Self {
        Self {
            name: Some(input.name),
            email: Some(String::from(input.email)),
        }
    }
}

#[derive(InputObject, Debug, Clone)]
pub struct CreateUserInput {
    pub name: String,
    pub email: EmailAddress,
}
