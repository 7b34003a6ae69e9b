use super::swatches::SwatchList;
use crate::config::defaults::DEFAULT_SCHEME;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    SeedInput,
    SchemeSelect,
    Swatches,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::SeedInput => Focus::SchemeSelect,
            Focus::SchemeSelect => Focus::Swatches,
            Focus::Swatches => Focus::SeedInput,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::SeedInput => Focus::Swatches,
            Focus::SchemeSelect => Focus::SeedInput,
            Focus::Swatches => Focus::SchemeSelect,
        }
    }
}

/// Where the current fetch cycle stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchPhase {
    #[default]
    Idle,
    Requesting { request_id: u64 },
}

/// How the last settled fetch cycle ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    Rendered,
    ErrorReported,
    ErrorSilent,
}

/// Scheme-mode dropdown.
#[derive(Debug, Clone)]
pub struct SchemeSelector {
    pub options: Vec<String>,
    pub selected: usize,
}

impl SchemeSelector {
    pub fn new(options: Vec<String>) -> Self {
        let mut s = Self {
            options,
            selected: 0,
        };
        s.select(DEFAULT_SCHEME);
        s
    }

    pub fn selected_mode(&self) -> &str {
        self.options
            .get(self.selected)
            .map(String::as_str)
            .unwrap_or(DEFAULT_SCHEME)
    }

    /// Select `mode` if offered; returns whether it was.
    pub fn select(&mut self, mode: &str) -> bool {
        match self.options.iter().position(|m| m == mode) {
            Some(idx) => {
                self.selected = idx;
                true
            }
            None => false,
        }
    }

    pub fn select_next(&mut self) {
        if !self.options.is_empty() {
            self.selected = (self.selected + 1) % self.options.len();
        }
    }

    pub fn select_prev(&mut self) {
        if !self.options.is_empty() {
            self.selected = (self.selected + self.options.len() - 1) % self.options.len();
        }
    }
}

pub struct AppState {
    pub should_quit: bool,
    pub tick: u64,
    pub focus: Focus,
    pub show_help: bool,

    // Form
    pub seed_input: String,
    pub scheme: SchemeSelector,

    // Palette display; `None` until the UI mounts it.
    pub swatches: Option<SwatchList>,

    // Fetch cycle
    pub fetch: FetchPhase,
    pub last_outcome: Option<FetchOutcome>,
    pub latest_request: u64,

    // Status message (for debugging/info)
    pub status: String,
}

impl AppState {
    pub const SEED_INPUT_MAX: usize = 7;

    pub fn new(modes: Vec<String>) -> Self {
        Self {
            should_quit: false,
            tick: 0,
            focus: Focus::default(),
            show_help: false,
            seed_input: String::new(),
            scheme: SchemeSelector::new(modes),
            swatches: None,
            fetch: FetchPhase::Idle,
            last_outcome: None,
            latest_request: 0,
            status: String::new(),
        }
    }

    pub fn mount_swatches(&mut self) {
        if self.swatches.is_none() {
            self.swatches = Some(SwatchList::new());
        }
    }

    pub fn is_requesting(&self) -> bool {
        self.pending_request().is_some()
    }

    pub fn pending_request(&self) -> Option<u64> {
        match self.fetch {
            FetchPhase::Requesting { request_id } => Some(request_id),
            FetchPhase::Idle => None,
        }
    }

    /// Seed color as submitted: the input without its leading `#`.
    pub fn seed_color(&self) -> String {
        self.seed_input
            .strip_prefix('#')
            .unwrap_or(&self.seed_input)
            .to_string()
    }

    /// Accept hex digits (and a leading `#`) up to `#rrggbb`.
    pub fn push_seed_char(&mut self, c: char) {
        if self.seed_input.len() >= Self::SEED_INPUT_MAX {
            return;
        }
        if c == '#' {
            if self.seed_input.is_empty() {
                self.seed_input.push('#');
            }
            return;
        }
        if !c.is_ascii_hexdigit() {
            return;
        }
        if self.seed_input.is_empty() {
            self.seed_input.push('#');
        }
        self.seed_input.push(c.to_ascii_lowercase());
    }

    pub fn pop_seed_char(&mut self) {
        self.seed_input.pop();
    }

    pub fn next_request_id(&mut self) -> u64 {
        self.latest_request += 1;
        self.latest_request
    }
}
