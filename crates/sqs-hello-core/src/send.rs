use crate::error::TransportError;
use crate::sqs::{QueueClient, SentMessage};

/// Body sent when the caller does not supply one.
pub const DEFAULT_MESSAGE_BODY: &str = "Hello from Deno v2 using ES2024 and Web APIs!";

/// Sends `body` as a single message.
pub async fn send_message<Q>(queue: &Q, body: &str) -> Result<SentMessage, TransportError>
where
    Q: QueueClient + ?Sized,
{
    let sent = queue.send(body).await?;
    log::info!("sent message {}", sent.message_id);
    Ok(sent)
}
