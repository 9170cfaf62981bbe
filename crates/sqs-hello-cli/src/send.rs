use std::io::Write;

use sqs_hello::QueueClient;

/// Sends `body` and reports the result on `out` / `err`. Returns whether the
/// send succeeded; the transport error itself is only printed.
pub async fn run<Q, O, E>(queue: &Q, body: &str, out: &mut O, err: &mut E) -> anyhow::Result<bool>
where
    Q: QueueClient,
    O: Write,
    E: Write,
{
    match sqs_hello::send_message(queue, body).await {
        Ok(sent) => {
            writeln!(
                out,
                "Message sent successfully with MessageId: {}",
                sent.message_id
            )?;
            Ok(true)
        }
        Err(e) => {
            writeln!(err, "Error sending message: {}", e)?;
            Ok(false)
        }
    }
}
