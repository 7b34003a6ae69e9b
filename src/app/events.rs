use crate::colorapi::FetchError;

#[derive(Debug)]
pub enum Event {
    Input(InputEvent),
    Network(NetworkEvent),
    Clipboard(ClipboardEvent),
    Toast(ToastEvent),
}

#[derive(Debug, Clone)]
pub enum InputEvent {
    Key(crossterm::event::KeyEvent),
    Mouse(crossterm::event::MouseEvent),
    Resize,
}

#[derive(Debug)]
pub enum NetworkEvent {
    PaletteLoaded { request_id: u64, colors: Vec<String> },
    PaletteFailed { request_id: u64, error: FetchError },
}

#[derive(Debug, Clone)]
pub enum ClipboardEvent {
    Copied { color: String },
    Failed { color: String, error: String },
}

#[derive(Debug, Clone, Copy)]
pub enum ToastEvent {
    Expired { generation: u64 },
}
