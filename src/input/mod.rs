use crate::app::actions::Action;
use crate::app::events::{Event, InputEvent};
use crate::app::state::{AppState, Focus};
use crossterm::event::{
    self, Event as CtEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton,
    MouseEventKind,
};
use tokio::sync::mpsc;

pub fn spawn_input_task(tx: mpsc::Sender<Event>, mouse_enabled: bool) {
    tokio::task::spawn_blocking(move || {
        loop {
            if event::poll(std::time::Duration::from_millis(250)).unwrap_or(false) {
                match event::read() {
                    Ok(CtEvent::Key(k)) => {
                        if k.kind == KeyEventKind::Press
                            && tx.blocking_send(Event::Input(InputEvent::Key(k))).is_err()
                        {
                            break;
                        }
                    }
                    Ok(CtEvent::Mouse(m)) if mouse_enabled => {
                        if tx.blocking_send(Event::Input(InputEvent::Mouse(m))).is_err() {
                            break;
                        }
                    }
                    Ok(CtEvent::Resize(_, _)) => {
                        if tx
                            .blocking_send(Event::Input(InputEvent::Resize))
                            .is_err()
                        {
                            break;
                        }
                    }
                    Ok(_) => {}
                    Err(_) => {}
                }
            } else if tx.is_closed() {
                break;
            }
        }
    });
}

pub fn map_input_to_action(state: &AppState, ev: InputEvent) -> Option<Action> {
    match ev {
        InputEvent::Resize => Some(Action::Resize),
        // The help overlay covers the list.
        InputEvent::Mouse(_) if state.show_help => None,
        InputEvent::Mouse(m) => match m.kind {
            MouseEventKind::Down(MouseButton::Left) => state
                .swatches
                .as_ref()
                .and_then(|l| l.entry_at(m.column, m.row))
                .map(Action::ActivateAt),
            MouseEventKind::ScrollUp => Some(Action::SwatchUp),
            MouseEventKind::ScrollDown => Some(Action::SwatchDown),
            _ => None,
        },
        InputEvent::Key(k) => handle_key(state, k),
    }
}

fn handle_key(state: &AppState, k: KeyEvent) -> Option<Action> {
    if k.code == KeyCode::Char('c') && k.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Action::Quit);
    }

    if state.show_help {
        return match k.code {
            KeyCode::Esc | KeyCode::Char('?') | KeyCode::F(1) => Some(Action::ToggleHelp),
            KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        };
    }

    // Keys shared by every focus
    match k.code {
        KeyCode::Esc => return Some(Action::Quit),
        KeyCode::Tab => return Some(Action::FocusNext),
        KeyCode::BackTab => return Some(Action::FocusPrev),
        KeyCode::F(5) => return Some(Action::Submit),
        KeyCode::F(1) => return Some(Action::ToggleHelp),
        _ => {}
    }

    match state.focus {
        Focus::SeedInput => handle_seed_input(k),
        Focus::SchemeSelect => handle_scheme_select(k),
        Focus::Swatches => handle_swatches(k),
    }
}

fn handle_seed_input(k: KeyEvent) -> Option<Action> {
    match k.code {
        KeyCode::Enter => Some(Action::Submit),
        KeyCode::Backspace => Some(Action::Backspace),
        KeyCode::Char('u') if k.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Action::ClearInput)
        }
        KeyCode::Down => Some(Action::FocusNext),
        KeyCode::Char('?') => Some(Action::ToggleHelp),
        KeyCode::Char(c) if !k.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Action::InputChar(c))
        }
        _ => None,
    }
}

fn handle_scheme_select(k: KeyEvent) -> Option<Action> {
    match k.code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Left | KeyCode::Char('h') => {
            Some(Action::SchemePrev)
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Right | KeyCode::Char('l') => {
            Some(Action::SchemeNext)
        }
        KeyCode::Enter | KeyCode::Char('r') => Some(Action::Submit),
        KeyCode::Char('?') => Some(Action::ToggleHelp),
        _ => None,
    }
}

fn handle_swatches(k: KeyEvent) -> Option<Action> {
    match k.code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::SwatchUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::SwatchDown),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::ActivateFocused),
        KeyCode::Char('r') => Some(Action::Submit),
        KeyCode::Char('?') => Some(Action::ToggleHelp),
        _ => None,
    }
}
