//! # emailql - a small GraphQL server with a validated email scalar
//!
//! Serves a schema with a `User` type, a `users` query, a `createUser`
//! mutation and an `EmailAddress` custom scalar that rejects anything not in
//! `local-part@domain` syntax.
//!
//! ## Quick Start
//!
//! ```bash
//! # Start the server on http://127.0.0.1:4000/graphql
//! emailql serve
//!
//! # Run a document without a server
//! emailql query '{ users { name email } }'
//!
//! # Print the SDL
//! emailql schema
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions and handlers
//! - [`config`]: Configuration loading and management
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: Schema, resolvers, the `EmailAddress` scalar and HTTP wiring
//! - [`logging`]: tracing subscriber setup

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading and management.
///
/// Handles `.emailql.toml` configuration files and upward discovery.
pub mod config;

/// Error types and result aliases.
///
/// Defines `EmailqlError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema and resolvers.
///
/// Provides the async-graphql schema, the `EmailAddress` scalar and the axum router.
pub mod graphql;

/// Logging setup.
///
/// Installs the tracing subscriber: stderr output plus an optional JSON log file.
pub mod logging;
