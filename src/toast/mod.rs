//! Clipboard copy with toast feedback.
//!
//! `ToastController` owns the copy-in-progress flag and the visible toast.
//! Clipboard writes and hide timers run as spawned tasks and report back to
//! the app loop as events, so every state change happens on the loop.

use crate::app::events::{ClipboardEvent, Event, ToastEvent};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::mpsc;

/// Write-only access to a clipboard.
pub trait ClipboardWriter: Send + Sync + 'static {
    fn write_text(&self, text: &str) -> anyhow::Result<()>;
}

/// The OS clipboard via `arboard`.
///
/// The handle is kept alive after the first write: on X11/Wayland the copied
/// text is served by this process and disappears with the last handle.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Mutex<Option<arboard::Clipboard>>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClipboardWriter for SystemClipboard {
    fn write_text(&self, text: &str) -> anyhow::Result<()> {
        let mut guard = self
            .inner
            .lock()
            .map_err(|_| anyhow::anyhow!("clipboard lock poisoned"))?;
        if guard.is_none() {
            *guard = Some(arboard::Clipboard::new()?);
        }
        if let Some(clipboard) = guard.as_mut() {
            clipboard.set_text(text.to_string())?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CopyState {
    #[default]
    Idle,
    InProgress,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    /// Color shown as a small swatch next to the message.
    pub swatch: Option<String>,
    pub generation: u64,
}

pub struct ToastController {
    writer: Arc<dyn ClipboardWriter>,
    duration: Duration,
    copy_state: CopyState,
    current: Option<Toast>,
    generation: u64,
}

impl ToastController {
    pub fn new(writer: Arc<dyn ClipboardWriter>, duration: Duration) -> Self {
        Self {
            writer,
            duration,
            copy_state: CopyState::Idle,
            current: None,
            generation: 0,
        }
    }

    pub fn copy_state(&self) -> CopyState {
        self.copy_state
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    /// Copy `color` and announce it. Ignored while a previous copy is still
    /// in progress; returns whether a copy was started.
    pub fn copy_and_notify(&mut self, color: &str, tx: &mpsc::Sender<Event>) -> bool {
        if self.copy_state == CopyState::InProgress {
            tracing::debug!(%color, "copy already in progress, ignoring");
            return false;
        }
        self.copy_state = CopyState::InProgress;

        let writer = self.writer.clone();
        let color = color.to_string();
        let tx = tx.clone();
        tokio::spawn(async move {
            let result = tokio::task::spawn_blocking({
                let color = color.clone();
                move || writer.write_text(&color)
            })
            .await;
            let ev = match result {
                Ok(Ok(())) => ClipboardEvent::Copied { color },
                Ok(Err(e)) => ClipboardEvent::Failed {
                    color,
                    error: format!("{e:#}"),
                },
                Err(e) => ClipboardEvent::Failed {
                    color,
                    error: format!("clipboard task: {e}"),
                },
            };
            let _ = tx.send(Event::Clipboard(ev)).await;
        });
        true
    }

    pub fn on_clipboard(&mut self, ev: ClipboardEvent, tx: &mpsc::Sender<Event>) {
        match ev {
            ClipboardEvent::Copied { color } => {
                tracing::info!(%color, "copied to clipboard");
                let message = format!("{color} copied!");
                self.notify(message, Some(color), tx);
            }
            ClipboardEvent::Failed { color, error } => {
                tracing::error!(%color, %error, "failed to copy color");
                self.copy_state = CopyState::Idle;
            }
        }
    }

    /// Show a toast, replacing any visible one. Returns its generation.
    pub fn notify(
        &mut self,
        message: impl Into<String>,
        swatch: Option<String>,
        tx: &mpsc::Sender<Event>,
    ) -> u64 {
        self.generation += 1;
        let generation = self.generation;
        self.current = Some(Toast {
            message: message.into(),
            swatch,
            generation,
        });

        let duration = self.duration;
        let tx = tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            let _ = tx
                .send(Event::Toast(ToastEvent::Expired { generation }))
                .await;
        });
        generation
    }

    /// Hide timer fired. Only the last-shown toast's timer hides it and
    /// releases the copy flag; earlier timers are stale.
    pub fn on_expired(&mut self, generation: u64) -> bool {
        if generation != self.generation {
            return false;
        }
        self.current = None;
        self.copy_state = CopyState::Idle;
        true
    }
}
