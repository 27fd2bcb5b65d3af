//! Paygraph Client - runs typed operations against a Hasura endpoint.
//!
//! # Architecture
//!
//! - Operations come from `paygraph-core`; this crate only moves them over
//!   the wire and decodes the aliased root field
//! - Queries and mutations are POSTed with `reqwest`; the response envelope is
//!   `graphql_client::Response`
//! - Query results are cached in memory via `moka`; mutations clear the cache
//! - Subscriptions use `graphql-transport-ws` over `async-tungstenite`
//!
//! # Example
//!
//! ```rust,ignore
//! use paygraph_client::GraphClient;
//! use paygraph_core::SelectByPk;
//! use paygraph_core::tables::checkout::{Checkout, PkColumnsInput};
//!
//! let client = GraphClient::from_env()?;
//! let checkout = client
//!     .fetch_one(&SelectByPk::<Checkout>::new(PkColumnsInput { id }).with("seller")?)
//!     .await?;
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

mod client;
pub mod config;
pub mod error;
mod subscription;

pub use client::GraphClient;
pub use config::{ClientConfig, ConfigError};
pub use error::{GraphError, GraphQLError, GraphQLErrorLocation};
pub use subscription::SubscriptionStream;
