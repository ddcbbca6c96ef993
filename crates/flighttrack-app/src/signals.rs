//! SIGINT/SIGTERM handling
//!
//! A signal is turned into `Message::Quit`, so the TUI restores the terminal
//! and headless mode reports an interrupted lookup instead of dying mid-write.

use tokio::sync::mpsc;

use crate::message::Message;
use flighttrack_core::prelude::*;

/// Spawn a task that waits for SIGINT/SIGTERM (Ctrl+C off unix) and asks the
/// engine to quit
pub fn spawn_signal_handler(tx: mpsc::Sender<Message>) {
    tokio::spawn(async move {
        match wait_for_signal().await {
            Ok(name) => {
                info!("Received {}, quitting", name);
                request_quit(&tx).await;
            }
            Err(e) => error!("Signal handler error: {}", e),
        }
    });
}

async fn request_quit(tx: &mpsc::Sender<Message>) {
    if tx.send(Message::Quit).await.is_err() {
        debug!("Engine already gone, quit request dropped");
    }
}

/// Resolve with the name of the first termination signal received
async fn wait_for_signal() -> Result<&'static str> {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let mut sigint =
            signal(SignalKind::interrupt()).context("Failed to create SIGINT handler")?;
        let mut sigterm =
            signal(SignalKind::terminate()).context("Failed to create SIGTERM handler")?;

        let name = tokio::select! {
            _ = sigint.recv() => "SIGINT",
            _ = sigterm.recv() => "SIGTERM",
        };
        Ok(name)
    }

    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c()
            .await
            .context("Failed to listen for Ctrl+C")?;
        Ok("Ctrl+C")
    }
}
