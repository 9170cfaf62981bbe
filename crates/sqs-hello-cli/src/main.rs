use std::process::ExitCode;

use clap::{Parser, Subcommand};
use sqs_hello::{Config, SqsQueue};

mod receive;
mod send;

#[tokio::main]
pub async fn main() -> ExitCode {
    env_logger::init();

    match Cli::parse().run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "sqs-hello")]
#[command(about = "send or receive a single message on an AWS SQS queue", long_about = None)]
pub struct Cli {
    /// Override the SQS endpoint, e.g. http://localhost:4566 for LocalStack
    #[arg(long, global = true)]
    endpoint: Option<String>,

    /// Exit with status 1 when the queue operation fails
    #[arg(long, global = true)]
    strict: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Send one message to the queue
    Send {
        /// Message body
        #[arg(default_value = sqs_hello::DEFAULT_MESSAGE_BODY)]
        body: String,
    },
    /// Receive one message (waiting up to 10 seconds) and delete it
    Receive {
        /// Print the received message as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<ExitCode> {
        // must fail before any network call
        let mut config = Config::from_env()?;
        if let Some(endpoint) = self.endpoint {
            config = config.with_endpoint_url(endpoint);
        }
        log::debug!("{:?}", config);

        let queue = SqsQueue::connect(&config).await;

        let (mut out, mut err) = (std::io::stdout(), std::io::stderr());
        let succeeded = match self.command {
            Commands::Send { body } => send::run(&queue, &body, &mut out, &mut err).await?,
            Commands::Receive { json } => receive::run(&queue, json, &mut out, &mut err).await?,
        };

        Ok(ExitCode::from(exit_status(succeeded, self.strict)))
    }
}

/// Transport failures only change the exit status under `--strict`.
fn exit_status(succeeded: bool, strict: bool) -> u8 {
    if succeeded || !strict {
        0
    } else {
        1
    }
}
