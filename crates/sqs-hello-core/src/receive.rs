use crate::error::TransportError;
use crate::sqs::{QueueClient, ReceiveOptions, ReceivedMessage};

/// What happened to the (at most one) message fetched by [`receive_one`].
#[derive(Debug)]
pub enum ReceiveOutcome {
    /// The long poll ended without a message.
    Empty,
    Deleted(ReceivedMessage),
    /// The message came without a receipt handle and stays on the queue.
    Undeletable(ReceivedMessage),
    /// The message was received but deleting it failed.
    DeleteFailed(ReceivedMessage, TransportError),
}

/// Long-polls for one message and deletes it by its receipt handle.
///
/// Uses [`ReceiveOptions::default`]: one message, ten second wait.
///
/// # Errors
///
/// Returns the receive failure. A failed delete is reported through
/// [`ReceiveOutcome::DeleteFailed`] since the message was already delivered.
pub async fn receive_one<Q>(queue: &Q) -> Result<ReceiveOutcome, TransportError>
where
    Q: QueueClient + ?Sized,
{
    let messages = queue.receive(ReceiveOptions::default()).await?;

    let Some(message) = messages.into_iter().next() else {
        return Ok(ReceiveOutcome::Empty);
    };

    let Some(receipt_handle) = message.receipt_handle.as_deref() else {
        log::warn!("message {:?} has no receipt handle; not deleting", message.message_id);
        return Ok(ReceiveOutcome::Undeletable(message));
    };

    let deleted = queue.delete(receipt_handle).await;
    match deleted {
        Ok(()) => Ok(ReceiveOutcome::Deleted(message)),
        Err(e) => Ok(ReceiveOutcome::DeleteFailed(message, e)),
    }
}
