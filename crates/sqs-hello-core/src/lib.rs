//! # sqs-hello-core
//!
//! Core library for sending and receiving single messages on an AWS SQS queue.
//!
//! ## Features
//!
//! - **Configuration**: region, static credentials and queue URL from the environment
//! - **Send**: send one message and return its server-assigned id
//! - **Receive**: long-poll for one message and delete it by its receipt handle
//!
//! ## Example
//!
//! ```no_run
//! use sqs_hello::{receive_one, Config, ReceiveOutcome, SqsQueue};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::from_env()?;
//! let queue = SqsQueue::connect(&config).await;
//!
//! match receive_one(&queue).await? {
//!     ReceiveOutcome::Deleted(message) => println!("{}", message.body),
//!     other => println!("{:?}", other),
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
mod error;
pub mod receive;
pub mod send;
mod sqs;

pub use config::{Config, ConfigError};
pub use error::TransportError;
pub use receive::{receive_one, ReceiveOutcome};
pub use send::{send_message, DEFAULT_MESSAGE_BODY};
pub use sqs::*;
