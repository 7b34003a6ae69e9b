pub mod actions;
pub mod events;
pub mod state;
pub mod swatches;

use crate::colorapi::{ColorApiClient, FetchError};
use crate::config::Config;
use crate::input;
use crate::storage::{settings, Settings, Storage};
use crate::toast::{ClipboardWriter, ToastController};
use crate::tui::{self, TuiTerminal};
use actions::Action;
use anyhow::Context;
use events::{Event, NetworkEvent, ToastEvent};
use state::{AppState, FetchOutcome, FetchPhase, Focus};
use std::sync::Arc;
use tokio::sync::mpsc;

/// The only failure text users ever see.
pub const FETCH_ERROR_MESSAGE: &str = "Failed to fetch color scheme. Please try again.";

/// Error text of an interrupted fetch (e.g. the user quit mid-request).
const INTERRUPTED_MARKER: &str = "Failed to fetch";

pub struct App {
    cfg: Config,
    state: AppState,
    colorapi: ColorApiClient,
    storage: Storage,
    toasts: ToastController,
}

impl App {
    pub fn new(cfg: Config, clipboard: Arc<dyn ClipboardWriter>) -> anyhow::Result<Self> {
        let colorapi = ColorApiClient::from_config(&cfg.api)?;
        let storage = Storage::open(&cfg.store_path()).context("open settings store")?;
        let toasts = ToastController::new(clipboard, cfg.toast_duration());
        let state = AppState::new(cfg.palette.modes.clone());

        Ok(Self {
            cfg,
            state,
            colorapi,
            storage,
            toasts,
        })
    }

    pub async fn run(&mut self, terminal: &mut TuiTerminal) -> anyhow::Result<()> {
        let (tx, mut rx) = mpsc::channel::<Event>(256);

        input::spawn_input_task(tx.clone(), self.cfg.input.mouse);

        self.state.mount_swatches();
        self.initial_load(&tx);

        // First draw
        tui::draw(terminal, &mut self.state, self.toasts.current())?;

        while let Some(ev) = rx.recv().await {
            self.handle_event(ev, &tx);

            if self.state.should_quit {
                break;
            }

            self.state.tick = self.state.tick.wrapping_add(1);
            tui::draw(terminal, &mut self.state, self.toasts.current())?;
        }

        Ok(())
    }

    pub fn handle_event(&mut self, ev: Event, tx: &mpsc::Sender<Event>) {
        match ev {
            Event::Input(input_ev) => {
                if let Some(action) = input::map_input_to_action(&self.state, input_ev) {
                    self.handle_action(action, tx);
                }
            }
            Event::Network(ne) => self.handle_network(ne, tx),
            Event::Clipboard(ce) => self.toasts.on_clipboard(ce, tx),
            Event::Toast(ToastEvent::Expired { generation }) => {
                self.toasts.on_expired(generation);
            }
        }
    }

    fn handle_action(&mut self, action: Action, tx: &mpsc::Sender<Event>) {
        match action {
            Action::Quit => self.state.should_quit = true,
            Action::FocusNext => self.set_focus(self.state.focus.next()),
            Action::FocusPrev => self.set_focus(self.state.focus.prev()),
            Action::ToggleHelp => self.state.show_help = !self.state.show_help,
            Action::InputChar(c) => self.state.push_seed_char(c),
            Action::Backspace => self.state.pop_seed_char(),
            Action::ClearInput => self.state.seed_input.clear(),
            Action::SchemeNext => self.state.scheme.select_next(),
            Action::SchemePrev => self.state.scheme.select_prev(),
            Action::Submit => self.submit(tx),
            // Scrolling over the list from the form moves focus there first.
            Action::SwatchUp | Action::SwatchDown if self.state.focus != Focus::Swatches => {
                self.set_focus(Focus::Swatches);
            }
            Action::SwatchUp => {
                if let Some(list) = self.state.swatches.as_mut() {
                    list.focus_prev();
                }
            }
            Action::SwatchDown => {
                if let Some(list) = self.state.swatches.as_mut() {
                    list.focus_next();
                }
            }
            Action::ActivateFocused => {
                let focused = self.state.swatches.as_ref().and_then(|l| l.focused());
                if let Some(index) = focused {
                    self.activate_swatch(index, tx);
                }
            }
            Action::ActivateAt(index) => self.activate_swatch(index, tx),
            Action::Resize => {}
        }
    }

    fn set_focus(&mut self, focus: Focus) {
        if let Some(list) = self.state.swatches.as_mut() {
            if focus == Focus::Swatches {
                list.focus_next();
            } else {
                list.blur();
            }
        }
        self.state.focus = focus;
    }

    /// Restore the last selection and fetch its palette.
    pub fn initial_load(&mut self, tx: &mpsc::Sender<Event>) {
        let stored = settings::load(&self.storage).unwrap_or_else(|e| {
            tracing::error!(error = %format!("{e:#}"), "failed to read settings, using defaults");
            Settings::default()
        });
        let settings = stored.with_offered_scheme(&self.state.scheme.options);

        self.state.scheme.select(&settings.scheme_mode);
        self.state.seed_input = format!("#{}", settings.seed_color);
        self.request_palette(settings, tx);
    }

    /// Persist the form and fetch its palette.
    pub fn submit(&mut self, tx: &mpsc::Sender<Event>) {
        let settings = Settings::new(
            self.state.seed_color(),
            self.state.scheme.selected_mode().to_string(),
        );
        if let Err(e) = settings::save(&self.storage, &settings) {
            tracing::error!(error = %format!("{e:#}"), "failed to save settings");
        }
        self.request_palette(settings, tx);
    }

    fn request_palette(&mut self, settings: Settings, tx: &mpsc::Sender<Event>) {
        let request_id = self.state.next_request_id();
        self.state.fetch = FetchPhase::Requesting { request_id };
        self.state.status = format!(
            "Fetching {} scheme for #{}...",
            settings.scheme_mode, settings.seed_color
        );

        let client = self.colorapi.clone();
        let count = self.cfg.api.count;
        let tx = tx.clone();
        tokio::spawn(async move {
            let ev = match client
                .fetch_palette(&settings.seed_color, &settings.scheme_mode, count)
                .await
            {
                Ok(colors) => NetworkEvent::PaletteLoaded { request_id, colors },
                Err(error) => NetworkEvent::PaletteFailed { request_id, error },
            };
            let _ = tx.send(Event::Network(ev)).await;
        });
    }

    fn handle_network(&mut self, ev: NetworkEvent, tx: &mpsc::Sender<Event>) {
        let request_id = match &ev {
            NetworkEvent::PaletteLoaded { request_id, .. }
            | NetworkEvent::PaletteFailed { request_id, .. } => *request_id,
        };
        if request_id != self.state.latest_request {
            tracing::debug!(
                request_id,
                pending = ?self.state.pending_request(),
                "dropping stale palette response"
            );
            return;
        }

        let outcome = match ev {
            NetworkEvent::PaletteLoaded { colors, .. } => {
                swatches::render_colors(self.state.swatches.as_mut(), &colors);
                self.state.status = format!("{} colors", colors.len());
                FetchOutcome::Rendered
            }
            NetworkEvent::PaletteFailed { error, .. } => match classify_failure(&error) {
                FetchOutcome::ErrorSilent => {
                    tracing::warn!(%error, "palette request interrupted");
                    self.state.status = "Request interrupted".into();
                    FetchOutcome::ErrorSilent
                }
                _ => {
                    tracing::error!(%error, "error fetching color data");
                    self.toasts.notify(FETCH_ERROR_MESSAGE, None, tx);
                    self.state.status = "Fetch failed".into();
                    FetchOutcome::ErrorReported
                }
            },
        };

        self.state.last_outcome = Some(outcome);
        self.state.fetch = FetchPhase::Idle;
    }

    fn activate_swatch(&mut self, index: usize, tx: &mpsc::Sender<Event>) {
        let color = self.state.swatches.as_mut().and_then(|l| l.activate(index));
        if let Some(color) = color {
            self.toasts.copy_and_notify(&color, tx);
        }
    }
}

/// Transport failures and interrupted fetches stay silent; everything else
/// is reported to the user.
pub fn classify_failure(error: &FetchError) -> FetchOutcome {
    if matches!(error, FetchError::Network(_)) || error.to_string().contains(INTERRUPTED_MARKER) {
        FetchOutcome::ErrorSilent
    } else {
        FetchOutcome::ErrorReported
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colorapi::mock::{MockColorApi, MockReply};
    use crate::toast::CopyState;
    use std::sync::Mutex;

    const FIVE: [&str; 5] = ["#1A2B3C", "#3C1A2B", "#2B3C1A", "#4D5E6F", "#6F4D5E"];

    #[derive(Default)]
    struct RecordingClipboard {
        writes: Mutex<Vec<String>>,
    }

    impl ClipboardWriter for RecordingClipboard {
        fn write_text(&self, text: &str) -> anyhow::Result<()> {
            self.writes.lock().unwrap().push(text.to_string());
            Ok(())
        }
    }

    #[derive(Clone, Default)]
    struct LogCapture(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for LogCapture {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for LogCapture {
        type Writer = LogCapture;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    struct Harness {
        app: App,
        tx: mpsc::Sender<Event>,
        rx: mpsc::Receiver<Event>,
        clipboard: Arc<RecordingClipboard>,
        _dir: tempfile::TempDir,
    }

    fn harness(base_url: &str) -> Harness {
        let dir = tempfile::tempdir().unwrap();
        let mut cfg = Config::default();
        cfg.paths.data_dir = dir.path().to_path_buf();
        cfg.api.base_url = base_url.to_string();

        let clipboard = Arc::new(RecordingClipboard::default());
        let mut app = App::new(cfg, clipboard.clone()).unwrap();
        app.state.mount_swatches();
        let (tx, rx) = mpsc::channel(64);
        Harness {
            app,
            tx,
            rx,
            clipboard,
            _dir: dir,
        }
    }

    impl Harness {
        /// Feed the next non-timer event back into the app.
        async fn pump(&mut self) {
            loop {
                let ev = self.rx.recv().await.expect("event channel closed");
                if matches!(ev, Event::Toast(_)) {
                    continue;
                }
                self.app.handle_event(ev, &self.tx);
                return;
            }
        }

        fn codes(&self) -> Vec<String> {
            self.app
                .state
                .swatches
                .as_ref()
                .map(|l| l.entries().iter().map(|e| e.code.clone()).collect())
                .unwrap_or_default()
        }
    }

    #[test]
    fn test_classify_failure() {
        assert_eq!(
            classify_failure(&FetchError::Network("connection reset".into())),
            FetchOutcome::ErrorSilent
        );
        assert_eq!(
            classify_failure(&FetchError::Malformed("TypeError: Failed to fetch".into())),
            FetchOutcome::ErrorSilent
        );
        assert_eq!(classify_failure(&FetchError::Status(500)), FetchOutcome::ErrorReported);
        assert_eq!(
            classify_failure(&FetchError::Malformed("expected value".into())),
            FetchOutcome::ErrorReported
        );
    }

    #[tokio::test]
    async fn test_submit_fetches_renders_and_copies_each_color() {
        let api = MockColorApi::start(MockReply::colors(&FIVE)).await;
        let mut h = harness(&api.base_url);

        h.app.state.seed_input = "#1a2b3c".into();
        assert!(h.app.state.scheme.select("triad"));
        h.app.handle_action(Action::Submit, &h.tx.clone());
        assert!(h.app.state.is_requesting());
        h.pump().await;

        assert_eq!(api.queries(), vec!["mode=triad&count=5&hex=1a2b3c"]);
        assert_eq!(h.codes(), FIVE);
        assert_eq!(h.app.state.last_outcome, Some(FetchOutcome::Rendered));
        assert_eq!(h.app.state.fetch, FetchPhase::Idle);

        for (index, color) in FIVE.iter().enumerate() {
            h.app.handle_action(Action::ActivateAt(index), &h.tx.clone());
            h.pump().await;

            let toast = h.app.toasts.current().unwrap().clone();
            assert_eq!(toast.message, format!("{color} copied!"));
            assert_eq!(toast.swatch.as_deref(), Some(*color));

            // The hide timer releases the copy flag.
            h.app
                .handle_event(Event::Toast(ToastEvent::Expired { generation: toast.generation }), &h.tx.clone());
            assert_eq!(h.app.toasts.copy_state(), CopyState::Idle);
        }
        assert_eq!(*h.clipboard.writes.lock().unwrap(), FIVE);
    }

    #[tokio::test]
    async fn test_submit_persists_settings() {
        let api = MockColorApi::start(MockReply::colors(&FIVE)).await;
        let mut h = harness(&api.base_url);

        h.app.state.seed_input = "#abcdef".into();
        h.app.state.scheme.select("quad");
        h.app.submit(&h.tx.clone());

        let stored = settings::load(&h.app.storage).unwrap();
        assert_eq!(stored, Settings::new("abcdef", "quad"));
    }

    #[tokio::test]
    async fn test_http_500_reports_once_and_renders_nothing() {
        let api = MockColorApi::start(MockReply::Status(500)).await;
        let mut h = harness(&api.base_url);

        h.app.submit(&h.tx.clone());
        h.pump().await;

        let toast = h.app.toasts.current().unwrap();
        assert_eq!(toast.message, FETCH_ERROR_MESSAGE);
        assert!(toast.swatch.is_none());
        assert_eq!(toast.generation, 1);
        assert!(h.codes().is_empty());
        assert_eq!(h.app.state.last_outcome, Some(FetchOutcome::ErrorReported));
    }

    #[tokio::test]
    async fn test_malformed_body_is_reported() {
        let api = MockColorApi::start(MockReply::Body("not json")).await;
        let mut h = harness(&api.base_url);

        h.app.submit(&h.tx.clone());
        h.pump().await;

        assert_eq!(h.app.toasts.current().unwrap().message, FETCH_ERROR_MESSAGE);
        assert_eq!(h.app.state.last_outcome, Some(FetchOutcome::ErrorReported));
    }

    #[tokio::test]
    async fn test_unreachable_service_is_silent() {
        let base_url = MockColorApi::unreachable_url().await;
        let mut h = harness(&base_url);

        h.app.submit(&h.tx.clone());
        h.pump().await;

        assert!(h.app.toasts.current().is_none());
        assert_eq!(h.app.state.last_outcome, Some(FetchOutcome::ErrorSilent));
        assert_eq!(h.app.state.fetch, FetchPhase::Idle);
    }

    #[tokio::test]
    async fn test_interrupted_fetch_is_logged_not_shown() {
        let mut h = harness("http://127.0.0.1:9");
        let request_id = h.app.state.next_request_id();
        let ev = Event::Network(NetworkEvent::PaletteFailed {
            request_id,
            error: FetchError::Malformed("TypeError: Failed to fetch".into()),
        });

        let logs = LogCapture::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(logs.clone())
            .with_ansi(false)
            .finish();
        let tx = h.tx.clone();
        tracing::subscriber::with_default(subscriber, || h.app.handle_event(ev, &tx));

        assert!(h.app.toasts.current().is_none());
        assert_eq!(h.app.state.last_outcome, Some(FetchOutcome::ErrorSilent));
        let logged = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        assert!(logged.contains("palette request interrupted"));
        assert!(logged.contains("Failed to fetch"));
    }

    #[tokio::test]
    async fn test_initial_load_defaults() {
        let api = MockColorApi::start(MockReply::colors(&FIVE)).await;
        let mut h = harness(&api.base_url);

        h.app.initial_load(&h.tx.clone());
        h.pump().await;

        assert_eq!(h.app.state.seed_input, "#6366f1");
        assert_eq!(h.app.state.scheme.selected_mode(), "triad");
        assert_eq!(api.queries(), vec!["mode=triad&count=5&hex=6366f1"]);
        assert_eq!(h.codes().len(), 5);
    }

    #[tokio::test]
    async fn test_initial_load_drops_unoffered_scheme() {
        let api = MockColorApi::start(MockReply::colors(&FIVE)).await;
        let mut h = harness(&api.base_url);
        settings::save(&h.app.storage, &Settings::new("abcdef", "rainbow")).unwrap();

        h.app.initial_load(&h.tx.clone());
        h.pump().await;

        assert_eq!(h.app.state.seed_input, "#abcdef");
        assert_eq!(h.app.state.scheme.selected_mode(), "triad");
        assert_eq!(api.queries(), vec!["mode=triad&count=5&hex=abcdef"]);
    }

    #[tokio::test]
    async fn test_stale_response_is_dropped() {
        let mut h = harness("http://127.0.0.1:9");
        let older = h.app.state.next_request_id();
        let newer = h.app.state.next_request_id();
        let tx = h.tx.clone();

        h.app.handle_event(
            Event::Network(NetworkEvent::PaletteLoaded {
                request_id: newer,
                colors: vec!["#000000".into()],
            }),
            &tx,
        );
        h.app.handle_event(
            Event::Network(NetworkEvent::PaletteLoaded {
                request_id: older,
                colors: vec!["#FFFFFF".into(), "#EEEEEE".into()],
            }),
            &tx,
        );

        assert_eq!(h.codes(), vec!["#000000"]);
    }

    #[tokio::test]
    async fn test_unmounted_list_does_not_fail() {
        let mut h = harness("http://127.0.0.1:9");
        h.app.state.swatches = None;
        let request_id = h.app.state.next_request_id();
        let tx = h.tx.clone();

        h.app.handle_event(
            Event::Network(NetworkEvent::PaletteLoaded {
                request_id,
                colors: vec!["#000000".into()],
            }),
            &tx,
        );
        assert!(h.app.state.swatches.is_none());
        assert_eq!(h.app.state.last_outcome, Some(FetchOutcome::Rendered));
    }

    #[tokio::test]
    async fn test_scroll_from_form_moves_focus_to_list() {
        let mut h = harness("http://127.0.0.1:9");
        let request_id = h.app.state.next_request_id();
        let tx = h.tx.clone();
        h.app.handle_event(
            Event::Network(NetworkEvent::PaletteLoaded {
                request_id,
                colors: FIVE.iter().map(|c| c.to_string()).collect(),
            }),
            &tx,
        );
        assert_eq!(h.app.state.focus, Focus::SeedInput);

        h.app.handle_action(Action::SwatchDown, &tx);
        assert_eq!(h.app.state.focus, Focus::Swatches);
        assert_eq!(h.app.state.swatches.as_ref().unwrap().focused(), Some(0));

        h.app.handle_action(Action::SwatchDown, &tx);
        assert_eq!(h.app.state.swatches.as_ref().unwrap().focused(), Some(1));

        h.app.handle_action(Action::FocusNext, &tx);
        assert_eq!(h.app.state.focus, Focus::SeedInput);
        assert_eq!(h.app.state.swatches.as_ref().unwrap().focused(), None);
    }

    #[tokio::test]
    async fn test_activation_blurs_entry() {
        let mut h = harness("http://127.0.0.1:9");
        let request_id = h.app.state.next_request_id();
        let tx = h.tx.clone();
        h.app.handle_event(
            Event::Network(NetworkEvent::PaletteLoaded {
                request_id,
                colors: FIVE.iter().map(|c| c.to_string()).collect(),
            }),
            &tx,
        );

        h.app.handle_action(Action::FocusPrev, &tx);
        assert_eq!(h.app.state.focus, Focus::Swatches);
        h.app.handle_action(Action::SwatchDown, &tx);
        h.app.handle_action(Action::ActivateFocused, &tx);
        h.pump().await;

        assert_eq!(*h.clipboard.writes.lock().unwrap(), vec!["#3C1A2B"]);
        assert_eq!(h.app.state.swatches.as_ref().unwrap().focused(), None);
    }
}
