use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use clap::{Parser, Subcommand};
use colored::*;
use roomcast::client::{ErrorReply, HandlerConfig, NotificationHandler, TransportRejected};
use roomcast::model::{Method, Notification, RoomEvent};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::sync::Arc;
use std::thread;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "roomcast")]
#[command(about = "Inspect room server notifications")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Feed newline-delimited JSON-RPC notifications through the handler
    /// and print the events a consumer would receive.
    Replay {
        /// Read from this file instead of stdin.
        #[arg(short, long)]
        input: Option<PathBuf>,

        #[arg(long, default_value = "100")]
        capacity: NonZeroUsize,

        /// Do not report rejected notifications, only log them.
        #[arg(long)]
        no_reply: bool,

        /// Print events as JSON lines.
        #[arg(long)]
        json: bool,
    },
    /// Print the notification methods and their required params.
    Methods,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    match Cli::parse().command {
        Commands::Replay {
            input,
            capacity,
            no_reply,
            json,
        } => {
            let config = HandlerConfig {
                queue_capacity: capacity,
                reply_on_error: !no_reply,
            };
            let runtime = tokio::runtime::Runtime::new().context("Failed to start runtime")?;
            runtime.block_on(replay(input, config, json))?;
        }
        Commands::Methods => print_methods(),
    }

    Ok(())
}

/// Prints rejected notifications the way a server would receive them.
struct StderrReply;

#[async_trait]
impl ErrorReply for StderrReply {
    async fn send_error(&self, code: i64, reason: String) -> Result<(), TransportRejected> {
        eprintln!("{} [{}] {}", "✗".red().bold(), code, reason);
        Ok(())
    }
}

async fn replay(input: Option<PathBuf>, config: HandlerConfig, json: bool) -> Result<()> {
    let reader: Box<dyn BufRead + Send> = match &input {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("Failed to open {}", path.display()))?,
        )),
        None => Box::new(BufReader::new(io::stdin())),
    };

    let source = input
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "stdin".to_owned());

    let handler = Arc::new(NotificationHandler::with_config(config));
    eprintln!(
        "{}",
        format!(
            "📡 Replaying notifications from {} (queue capacity {})...",
            source,
            handler.config().queue_capacity
        )
        .cyan()
    );

    // The transport side runs on its own thread and blocks on a full queue,
    // just like a real transport delivery thread.
    let transport = thread::spawn({
        let handler = handler.clone();
        move || {
            let received = feed(reader, &handler);
            handler.shutdown();
            received
        }
    });

    // One listener for the whole loop, so a Ctrl-C during printing is not lost.
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    let mut delivered = 0usize;
    while let Some(event) = handler.next_event_until(&mut ctrl_c).await {
        delivered += 1;
        print_event(&event, json)?;
    }

    if !handler.queue().is_shut_down() {
        handler.shutdown();
        eprintln!("{}", "Interrupted.".yellow());
        return Ok(());
    }

    let received = transport
        .join()
        .map_err(|_| anyhow!("Transport thread panicked"))??;

    eprintln!(
        "{} {} delivered, {} rejected",
        "✨".green().bold(),
        delivered.to_string().green(),
        received.saturating_sub(delivered).to_string().red(),
    );
    Ok(())
}

/// Reads notifications line by line and hands each one to the handler.
/// Returns the number of non-empty lines.
fn feed(reader: Box<dyn BufRead + Send>, handler: &NotificationHandler) -> Result<usize> {
    let mut received = 0;

    for (index, line) in reader.lines().enumerate() {
        let line = line.context("Failed to read notification")?;
        if line.trim().is_empty() {
            continue;
        }
        received += 1;

        match serde_json::from_str::<Notification>(&line) {
            Ok(notification) => handler.on_notification_blocking(
                &notification.method,
                &notification.params,
                &StderrReply,
            ),
            Err(e) => eprintln!(
                "{} line {}: not a JSON-RPC notification: {}",
                "✗".red().bold(),
                index + 1,
                e
            ),
        }
    }

    Ok(received)
}

fn print_event(event: &RoomEvent, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(event)?);
    } else {
        println!("{:<24} {}", event.method().as_str().bold(), event);
    }
    Ok(())
}

fn print_methods() {
    for method in Method::ALL {
        let params = method
            .params()
            .iter()
            .map(|p| format!("{}:{}", p.name, p.kind))
            .collect::<Vec<_>>();

        let params = if params.is_empty() {
            "-".dimmed().to_string()
        } else {
            params.join(", ")
        };
        println!("{:<24} {}", method.as_str().green(), params);
    }
}
