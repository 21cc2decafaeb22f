//! The idle shutdown state machine.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, trace, warn};

use lightsout_gcode::ObservedCommand;

use crate::error::Result;
use crate::events::PrinterEvent;
use crate::host::{
    CommandObserver, CommandSink, EventHandler, PrinterStatus, SettingsProvider, UpdateCheck,
};
use crate::update::UpdateDescriptor;

/// Tag attached to every command the scheduler dispatches, so the host can
/// tell scheduler-originated commands from user-originated ones.
pub const SCHEDULER_TAG: &str = "plugin:lightsout";

/// Decides when to arm, disarm and fire the configured off-command.
///
/// The scheduler owns a single cancellable delayed action: "send the
/// configured off-command after the idle timeout". Lifecycle events that
/// leave the printer idle (re)arm it, `PrintStarted` disarms it, and a
/// lights-on command observed while idle restarts the countdown. The timer
/// is single-shot; after firing the scheduler stays disarmed until the next
/// qualifying event.
///
/// Callbacks may arrive from different host threads; every state transition
/// runs under one internal lock. Cloning is cheap and clones share the same
/// timer. Dropping the last clone cancels any pending timer.
pub struct IdleShutdownScheduler<H> {
    inner: Arc<Inner<H>>,
}

impl<H> Clone for IdleShutdownScheduler<H> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

struct Inner<H> {
    host: H,
    runtime: Handle,
    timer: Mutex<TimerState>,
}

#[derive(Default)]
struct TimerState {
    /// Bumped on every transition; a fire holding a stale generation was
    /// superseded and must do nothing.
    generation: u64,
    pending: Option<JoinHandle<()>>,
}

impl<H> IdleShutdownScheduler<H>
where
    H: SettingsProvider + CommandSink + PrinterStatus + Send + Sync + 'static,
{
    /// Create a scheduler driving its timer on the ambient tokio runtime.
    ///
    /// # Panics
    ///
    /// Panics outside a runtime context; use [`Self::with_runtime`] when
    /// constructing from a plain host thread.
    pub fn new(host: H) -> Self {
        Self::with_runtime(host, Handle::current())
    }

    /// Create a scheduler spawning its delayed action on `runtime`.
    pub fn with_runtime(host: H, runtime: Handle) -> Self {
        Self {
            inner: Arc::new(Inner {
                host,
                runtime,
                timer: Mutex::new(TimerState::default()),
            }),
        }
    }

    /// Handle one host lifecycle event, reading settings fresh.
    ///
    /// Disabled configuration disarms and ignores the event. Events that
    /// leave the printer idle cancel any pending timer and start a new one
    /// for the full timeout; `PrintStarted` cancels without rescheduling.
    pub fn handle_event(&self, event: &PrinterEvent) -> Result<()> {
        let settings = self.inner.host.settings()?;
        if !settings.enabled {
            self.disarm();
            debug!(%event, "shutdown disabled, timer disarmed");
            return Ok(());
        }
        if event.re_arms() {
            let timeout = settings.timeout()?;
            self.arm(timeout);
            debug!(%event, timeout_s = timeout.as_secs(), "idle timer armed");
        } else if *event == PrinterEvent::PrintStarted {
            self.disarm();
            debug!(%event, "print started, timer disarmed");
        } else {
            trace!(%event, "event ignored");
        }
        Ok(())
    }

    /// Inspect one outbound command observation.
    ///
    /// A lights-on command while the printer is neither printing nor paused
    /// restarts the countdown exactly like a settings change. During an
    /// active job the signal is ignored: lights stay on until the job leaves
    /// the printer idle.
    pub fn observe_command(&self, command: &ObservedCommand) -> Result<()> {
        if !command.is_lights_on() {
            return Ok(());
        }
        if self.inner.host.is_printing() || self.inner.host.is_paused() {
            debug!(line = %command.line, "lights on during an active job, ignoring");
            return Ok(());
        }
        debug!(line = %command.line, "lights switched on while idle");
        self.handle_event(&PrinterEvent::SettingsUpdated)
    }

    /// Is a delayed off-command currently pending?
    pub fn is_armed(&self) -> bool {
        self.inner.timer.lock().pending.is_some()
    }

    /// Cancel any pending timer and schedule a fresh single-shot delay.
    fn arm(&self, timeout: Duration) {
        let mut timer = self.inner.timer.lock();
        if let Some(pending) = timer.pending.take() {
            pending.abort();
        }
        timer.generation = timer.generation.wrapping_add(1);
        let generation = timer.generation;
        // weak: the pending task must not keep the scheduler alive
        let inner = Arc::downgrade(&self.inner);
        timer.pending = Some(self.inner.runtime.spawn(async move {
            tokio::time::sleep(timeout).await;
            if let Some(inner) = inner.upgrade() {
                inner.fire(generation);
            }
        }));
    }

    /// Cancel any pending timer without rescheduling.
    fn disarm(&self) {
        let mut timer = self.inner.timer.lock();
        timer.generation = timer.generation.wrapping_add(1);
        if let Some(pending) = timer.pending.take() {
            pending.abort();
        }
    }
}

impl<H> Inner<H>
where
    H: SettingsProvider + CommandSink + PrinterStatus + Send + Sync + 'static,
{
    /// Timer callback. The scheduler disarms before dispatch is attempted,
    /// so a rejected send leaves it disarmed.
    fn fire(&self, generation: u64) {
        {
            let mut timer = self.timer.lock();
            if timer.generation != generation {
                trace!("stale timer fire, superseded");
                return;
            }
            timer.pending = None;
        }
        let settings = match self.host.settings() {
            Ok(settings) => settings,
            Err(err) => {
                warn!(%err, "settings unreadable at fire time, off-command skipped");
                return;
            }
        };
        if !settings.enabled {
            debug!("shutdown disabled at fire time, off-command skipped");
            return;
        }
        let command = settings.off_command.trim();
        if command.is_empty() {
            warn!("off_command is blank, nothing to dispatch");
            return;
        }
        info!(command, "idle timeout reached, switching lights off");
        if let Err(err) = self.host.send(command, &[SCHEDULER_TAG]) {
            error!(%err, "host rejected the off-command");
        }
    }
}

impl<H> Drop for Inner<H> {
    fn drop(&mut self) {
        if let Some(pending) = self.timer.get_mut().pending.take() {
            pending.abort();
        }
    }
}

impl<H> EventHandler for IdleShutdownScheduler<H>
where
    H: SettingsProvider + CommandSink + PrinterStatus + Send + Sync + 'static,
{
    fn on_event(&self, event: &PrinterEvent, _payload: &serde_json::Value) -> Result<()> {
        self.handle_event(event)
    }
}

impl<H> CommandObserver for IdleShutdownScheduler<H>
where
    H: SettingsProvider + CommandSink + PrinterStatus + Send + Sync + 'static,
{
    fn on_command_sent(&self, command: &ObservedCommand) -> Result<()> {
        self.observe_command(command)
    }
}

impl<H> UpdateCheck for IdleShutdownScheduler<H>
where
    H: SettingsProvider + CommandSink + PrinterStatus + Send + Sync + 'static,
{
    fn update_information(&self) -> UpdateDescriptor {
        UpdateDescriptor::current()
    }
}
