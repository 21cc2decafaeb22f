//! One idle cycle against an in-memory host: arm on startup, watch the
//! off-command fire.
//!
//! Run with `RUST_LOG=debug cargo run --example idle_cycle` to see the
//! scheduler's decisions.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

use lightsout::{
    CommandSink, IdleShutdownScheduler, LightsOutSettings, ObservedCommand, PrinterEvent,
    PrinterStatus, Result, SettingsProvider,
};

#[derive(Clone, Default)]
struct MemoryHost {
    sent: Arc<Mutex<Vec<String>>>,
}

impl SettingsProvider for MemoryHost {
    fn settings(&self) -> Result<LightsOutSettings> {
        Ok(LightsOutSettings {
            enabled: true,
            timeout_seconds: 2,
            off_command: "M150 P0".into(),
        })
    }
}

impl CommandSink for MemoryHost {
    fn send(&self, command: &str, tags: &[&str]) -> Result<()> {
        println!("printer <- {command} (tags: {tags:?})");
        self.sent.lock().push(command.to_string());
        Ok(())
    }
}

impl PrinterStatus for MemoryHost {
    fn is_printing(&self) -> bool {
        false
    }

    fn is_paused(&self) -> bool {
        false
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let host = MemoryHost::default();
    let scheduler = IdleShutdownScheduler::new(host.clone());

    scheduler.handle_event(&PrinterEvent::Startup)?;
    println!("startup seen, timer armed: {}", scheduler.is_armed());

    // someone flips the lights back on half way through the countdown
    tokio::time::sleep(Duration::from_secs(1)).await;
    scheduler.observe_command(&ObservedCommand::parse("M150 P255"))?;
    println!("lights back on, countdown restarted");

    tokio::time::sleep(Duration::from_secs(3)).await;
    println!("commands sent: {:?}", host.sent.lock());
    Ok(())
}
