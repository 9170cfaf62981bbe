use std::io::Write;

use sqs_hello::{QueueClient, ReceiveOutcome, ReceivedMessage};

/// Receives and deletes at most one message, reporting on `out` / `err`.
///
/// Returns whether every queue call succeeded. Only write failures and a
/// failure to render the message as JSON are propagated.
pub async fn run<Q, O, E>(queue: &Q, json: bool, out: &mut O, err: &mut E) -> anyhow::Result<bool>
where
    Q: QueueClient,
    O: Write,
    E: Write,
{
    let outcome = match sqs_hello::receive_one(queue).await {
        Ok(outcome) => outcome,
        Err(e) => {
            writeln!(err, "Error receiving message: {}", e)?;
            return Ok(false);
        }
    };

    match outcome {
        ReceiveOutcome::Empty => {
            writeln!(out, "No messages received.")?;
            Ok(true)
        }
        ReceiveOutcome::Deleted(message) => {
            print_message(out, &message, json)?;
            writeln!(out, "Message deleted from the queue.")?;
            Ok(true)
        }
        ReceiveOutcome::Undeletable(message) => {
            print_message(out, &message, json)?;
            Ok(true)
        }
        ReceiveOutcome::DeleteFailed(message, e) => {
            print_message(out, &message, json)?;
            writeln!(err, "Error receiving message: {}", e)?;
            Ok(false)
        }
    }
}

fn print_message<O: Write>(out: &mut O, message: &ReceivedMessage, json: bool) -> anyhow::Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string(message)?)?;
    } else {
        writeln!(out, "Received message: {}", message.body)?;
    }
    Ok(())
}
