use aws_sdk_sqs::error::{DisplayErrorContext, SdkError};

/// Failure raised by the queue service or the transport underneath it.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("failed to send message: {0}")]
    Send(String),
    #[error("failed to receive message: {0}")]
    Receive(String),
    #[error("failed to delete message: {0}")]
    Delete(String),
}

/// Renders an SDK error for the console.
///
/// Service errors carry the message from the SQS response; anything else
/// (timeouts, dispatch failures, ...) is rendered with its full source chain.
pub(crate) fn describe<E, R>(error: &SdkError<E, R>) -> String
where
    E: std::error::Error + 'static,
    R: std::fmt::Debug + 'static,
{
    if let SdkError::ServiceError(se) = error {
        se.err().to_string()
    } else {
        DisplayErrorContext(error).to_string()
    }
}
