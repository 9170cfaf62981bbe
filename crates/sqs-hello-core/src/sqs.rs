//! SQS client wrapper and message types.

use async_trait::async_trait;
use aws_config::{retry::RetryConfig, BehaviorVersion, Region, SdkConfig};
use aws_sdk_sqs as sqs;
use sqs::config::Credentials;

use crate::config::Config;
use crate::error::{describe, TransportError};

#[cfg(any(test, feature = "mocks"))]
use mockall::automock;

/// Parameters of a single receive call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReceiveOptions {
    pub max_messages: i32,
    /// Long-poll duration; SQS returns early as soon as a message is available.
    pub wait_time_seconds: i32,
}

impl Default for ReceiveOptions {
    fn default() -> Self {
        Self {
            max_messages: 1,
            wait_time_seconds: 10,
        }
    }
}

/// Acknowledgement of a sent message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMessage {
    pub message_id: String,
    pub md5_of_body: Option<String>,
}

/// One delivery of a message.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceivedMessage {
    pub message_id: Option<String>,
    pub body: String,
    /// Needed to delete this particular delivery.
    pub receipt_handle: Option<String>,
}

impl From<sqs::types::Message> for ReceivedMessage {
    fn from(message: sqs::types::Message) -> Self {
        Self {
            message_id: message.message_id,
            body: message.body.unwrap_or_default(),
            receipt_handle: message.receipt_handle,
        }
    }
}

/// The three queue operations used by the sender and the receiver.
///
/// Every implementation is bound to one queue URL.
#[cfg_attr(any(test, feature = "mocks"), automock)]
#[async_trait]
pub trait QueueClient: Send + Sync {
    async fn send(&self, body: &str) -> Result<SentMessage, TransportError>;

    async fn receive(&self, options: ReceiveOptions)
        -> Result<Vec<ReceivedMessage>, TransportError>;

    async fn delete(&self, receipt_handle: &str) -> Result<(), TransportError>;
}

/// [`QueueClient`] backed by the AWS SDK.
///
/// # Example
///
/// ```no_run
/// use sqs_hello::{Config, QueueClient, SqsQueue};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = Config::from_env()?;
/// let queue = SqsQueue::connect(&config).await;
///
/// let sent = queue.send("hello").await?;
/// println!("sent {}", sent.message_id);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct SqsQueue {
    /// The AWS SDK configuration used for SQS operations
    pub config: SdkConfig,
    pub client: sqs::Client,
    pub queue_url: String,
}

impl SqsQueue {
    /// Builds the SDK client from the region and static credentials in
    /// `config`. SDK retries are disabled; every operation is attempted once.
    pub async fn connect(config: &Config) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .credentials_provider(Credentials::new(
                config.access_key_id.clone(),
                config.secret_access_key.clone(),
                None,
                None,
                "environment",
            ))
            .retry_config(RetryConfig::disabled());

        if let Some(endpoint_url) = &config.endpoint_url {
            loader = loader.endpoint_url(endpoint_url.clone());
        }

        Self::from_config(loader.load().await, &config.queue_url)
    }

    /// Creates an SqsQueue from a pre-built AWS SDK config.
    pub fn from_config(config: SdkConfig, queue_url: &str) -> Self {
        let client = sqs::Client::new(&config);
        Self {
            config,
            client,
            queue_url: queue_url.to_string(),
        }
    }
}

#[async_trait]
impl QueueClient for SqsQueue {
    async fn send(&self, body: &str) -> Result<SentMessage, TransportError> {
        log::debug!("SendMessage queue_url={} bytes={}", self.queue_url, body.len());

        let output = self
            .client
            .send_message()
            .queue_url(&self.queue_url)
            .message_body(body)
            .send()
            .await
            .map_err(|e| TransportError::Send(describe(&e)))?;

        let message_id = output
            .message_id
            .filter(|id| !id.is_empty())
            .ok_or_else(|| TransportError::Send("response did not include a MessageId".into()))?;

        Ok(SentMessage {
            message_id,
            md5_of_body: output.md5_of_message_body,
        })
    }

    async fn receive(
        &self,
        options: ReceiveOptions,
    ) -> Result<Vec<ReceivedMessage>, TransportError> {
        log::debug!(
            "ReceiveMessage queue_url={} max_messages={} wait_time_seconds={}",
            self.queue_url,
            options.max_messages,
            options.wait_time_seconds
        );

        let output = self
            .client
            .receive_message()
            .queue_url(&self.queue_url)
            .max_number_of_messages(options.max_messages)
            .wait_time_seconds(options.wait_time_seconds)
            .send()
            .await
            .map_err(|e| TransportError::Receive(describe(&e)))?;

        Ok(output
            .messages
            .unwrap_or_default()
            .into_iter()
            .map(ReceivedMessage::from)
            .collect())
    }

    async fn delete(&self, receipt_handle: &str) -> Result<(), TransportError> {
        log::debug!("DeleteMessage queue_url={}", self.queue_url);

        self.client
            .delete_message()
            .queue_url(&self.queue_url)
            .receipt_handle(receipt_handle)
            .send()
            .await
            .map_err(|e| TransportError::Delete(describe(&e)))?;

        Ok(())
    }
}
