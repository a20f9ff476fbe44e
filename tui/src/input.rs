//! Input handling for Folio TUI.

use anyhow::{Result, anyhow};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::Rect;
use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};
use tokio::sync::mpsc;
use tracing::debug;

use folio_engine::{App, Direction, RawInput, WHEEL_NOTCH_PX};

use crate::layout::{DeckLayout, Hit};
use crate::theme::glyphs;

const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(25); // shutdown responsiveness
const INPUT_CHANNEL_CAPACITY: usize = 1024; // bounded: no OOM
const MAX_EVENTS_PER_FRAME: usize = 64; // never starve rendering

enum InputMsg {
    Event(Event),
    Error(String),
}

/// Reads terminal events on a blocking task and hands them to the frame loop.
pub struct InputPump {
    rx: mpsc::Receiver<InputMsg>,
    stop: Arc<AtomicBool>,
    join: Option<tokio::task::JoinHandle<()>>,
}

impl InputPump {
    #[must_use]
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel(INPUT_CHANNEL_CAPACITY);
        let stop = Arc::new(AtomicBool::new(false));
        let stop2 = stop.clone();

        let join = tokio::task::spawn_blocking(move || input_loop(stop2, tx));
        Self {
            rx,
            stop,
            join: Some(join),
        }
    }

    pub async fn shutdown(&mut self) {
        self.rx.close();

        self.stop.store(true, Ordering::Release);
        if let Some(join) = self.join.take() {
            let _ = tokio::time::timeout(Duration::from_secs(2), join).await;
        }
    }
}

impl Default for InputPump {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for InputPump {
    fn drop(&mut self) {
        // Best-effort stop if caller exits early; do not block in Drop.
        self.rx.close();
        self.stop.store(true, Ordering::Release);
    }
}

fn input_loop(stop: Arc<AtomicBool>, tx: mpsc::Sender<InputMsg>) {
    while !stop.load(Ordering::Acquire) {
        match event::poll(INPUT_POLL_TIMEOUT) {
            Ok(true) => match event::read() {
                Ok(ev) => {
                    if tx.blocking_send(InputMsg::Event(ev)).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                    break;
                }
            },
            Ok(false) => {}
            Err(e) => {
                let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                break;
            }
        }
    }
}

/// Drain pending events into `app`. Returns `true` once the app wants to quit.
pub fn handle_events(app: &mut App, input: &mut InputPump) -> Result<bool> {
    let mut processed = 0;
    while processed < MAX_EVENTS_PER_FRAME {
        let ev = match input.rx.try_recv() {
            Ok(InputMsg::Event(ev)) => ev,
            Ok(InputMsg::Error(msg)) => return Err(anyhow!("input error: {msg}")),
            Err(mpsc::error::TryRecvError::Empty) => break,
            Err(mpsc::error::TryRecvError::Disconnected) => {
                return Err(anyhow!("input pump disconnected"));
            }
        };

        apply_event(app, ev);
        processed += 1;
        if app.should_quit() {
            break;
        }
    }

    if processed == MAX_EVENTS_PER_FRAME {
        debug!(backlog = input.rx.len(), "Input budget exhausted for this frame");
    }
    Ok(app.should_quit())
}

/// Route one terminal event to the app.
pub fn apply_event(app: &mut App, event: Event) {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => handle_key(app, key),
        Event::Mouse(mouse) => handle_mouse(app, mouse),
        Event::Resize(width, height) => app.resize(width, height),
        _ => {}
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.request_quit();
        return;
    }

    if app.contact().is_open() {
        handle_form_key(app, key);
        return;
    }

    let horizontal = app.deck().slide(app.active_section()).is_horizontal()
        && !app.responsive_mode().is_mobile();

    let input = match key.code {
        KeyCode::Char('q') => {
            app.request_quit();
            return;
        }
        KeyCode::Down | KeyCode::Char(' ' | 'j') => RawInput::KeyStep(Direction::Forward),
        KeyCode::Up | KeyCode::Char('k') => RawInput::KeyStep(Direction::Backward),
        KeyCode::PageDown => RawInput::KeyPage(Direction::Forward),
        KeyCode::PageUp => RawInput::KeyPage(Direction::Backward),
        KeyCode::Right if horizontal => RawInput::KeyStep(Direction::Forward),
        KeyCode::Left if horizontal => RawInput::KeyStep(Direction::Backward),
        KeyCode::Char(c @ '1'..='9') => {
            let section = (u32::from(c) - u32::from('1')) as usize;
            if section >= app.deck().len() {
                return;
            }
            RawInput::DotClick { section }
        }
        KeyCode::Char(c) => {
            match app.nav_links().iter().find(|link| link.hotkey == c) {
                Some(link) => RawInput::Navigate {
                    section: link.section,
                },
                None => return,
            }
        }
        KeyCode::Enter => {
            app.open_contact();
            return;
        }
        _ => return,
    };
    app.handle_input(input);
}

fn handle_form_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.contact_mut().close(),
        KeyCode::Tab => app.contact_mut().focus_next(),
        KeyCode::BackTab => app.contact_mut().focus_prev(),
        KeyCode::Enter => app.submit_contact(),
        KeyCode::Backspace => app.contact_mut().backspace(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.contact_mut().insert_char(c);
        }
        _ => {}
    }
}

fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    let y = app.row_to_px(mouse.row);
    let input = match mouse.kind {
        MouseEventKind::ScrollDown => RawInput::Wheel {
            delta_y: WHEEL_NOTCH_PX,
        },
        MouseEventKind::ScrollUp => RawInput::Wheel {
            delta_y: -WHEEL_NOTCH_PX,
        },
        MouseEventKind::Down(MouseButton::Left) => match hit_test(app, mouse.column, mouse.row) {
            Some(Hit::Link(section)) => RawInput::Navigate { section },
            Some(Hit::Dot(section)) => RawInput::DotClick { section },
            None => RawInput::TouchStart { y },
        },
        MouseEventKind::Drag(MouseButton::Left) => RawInput::TouchMove { y },
        MouseEventKind::Up(MouseButton::Left) => RawInput::TouchEnd,
        _ => return,
    };
    app.handle_input(input);
}

fn hit_test(app: &App, column: u16, row: u16) -> Option<Hit> {
    let (width, height) = app.viewport();
    let layout = DeckLayout::compute(
        app,
        Rect::new(0, 0, width, height),
        &glyphs(app.ui_options()),
    );
    layout.hit(column, row)
}

#[cfg(test)]
mod tests {
    use crossterm::event::{
        Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    };

    use folio_engine::{App, FolioConfig};

    use super::apply_event;

    fn desktop_app() -> App {
        App::new(&FolioConfig::default(), 120, 30)
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn ctrl_c_and_q_quit() {
        let mut app = desktop_app();
        apply_event(
            &mut app,
            Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        );
        assert!(app.should_quit());

        let mut app = desktop_app();
        apply_event(&mut app, key(KeyCode::Char('q')));
        assert!(app.should_quit());
    }

    #[test]
    fn down_key_steps_forward() {
        let mut app = desktop_app();
        apply_event(&mut app, key(KeyCode::Down));
        assert_eq!(app.active_section(), 1);
    }

    #[test]
    fn left_right_only_move_inside_carousel() {
        let mut app = desktop_app();
        apply_event(&mut app, key(KeyCode::Right));
        assert_eq!(app.active_section(), 0);

        apply_event(&mut app, key(KeyCode::Char('p')));
        assert_eq!(app.active_section(), 3);
        app.advance(app.settings().transition);
        apply_event(&mut app, key(KeyCode::Right));
        assert_eq!(app.horizontal_index(), 1);
    }

    #[test]
    fn digits_are_gated_but_hotkeys_are_not() {
        let mut app = desktop_app();
        apply_event(&mut app, key(KeyCode::Char('3')));
        assert_eq!(app.active_section(), 2);
        assert!(app.is_transitioning());

        apply_event(&mut app, key(KeyCode::Char('5')));
        assert_eq!(app.active_section(), 2);

        apply_event(&mut app, key(KeyCode::Char('c')));
        assert_eq!(app.active_section(), 5);
    }

    #[test]
    fn digits_past_the_last_section_are_ignored() {
        let mut app = desktop_app();
        apply_event(&mut app, key(KeyCode::Char('7')));
        assert_eq!(app.active_section(), 0);
        assert!(!app.is_transitioning());

        apply_event(&mut app, key(KeyCode::Char('6')));
        assert_eq!(app.active_section(), 5);
    }

    #[test]
    fn dot_click_away_from_form_returns_keys_to_the_deck() {
        let mut app = desktop_app();
        apply_event(&mut app, key(KeyCode::Char('c')));
        app.advance(app.settings().transition);
        apply_event(&mut app, key(KeyCode::Enter));
        assert!(app.contact().is_open());

        app.handle_input(folio_engine::RawInput::DotClick { section: 0 });
        assert!(!app.contact().is_open());
        assert_eq!(app.active_section(), 0);

        apply_event(&mut app, key(KeyCode::Char('q')));
        assert!(app.should_quit());
        assert!(app.contact().draft().is_blank());
    }

    #[test]
    fn wheel_notch_steps_once() {
        let mut app = desktop_app();
        apply_event(&mut app, mouse(MouseEventKind::ScrollDown, 10, 10));
        apply_event(&mut app, mouse(MouseEventKind::ScrollDown, 10, 10));
        assert_eq!(app.active_section(), 1);
    }

    #[test]
    fn drag_up_swipes_forward() {
        let mut app = desktop_app();
        apply_event(&mut app, mouse(MouseEventKind::Down(MouseButton::Left), 10, 20));
        apply_event(&mut app, mouse(MouseEventKind::Drag(MouseButton::Left), 10, 16));
        apply_event(&mut app, mouse(MouseEventKind::Up(MouseButton::Left), 10, 16));
        assert_eq!(app.active_section(), 1);
    }

    #[test]
    fn form_captures_typing() {
        let mut app = desktop_app();
        apply_event(&mut app, key(KeyCode::Char('c')));
        app.advance(app.settings().transition);
        apply_event(&mut app, key(KeyCode::Enter));
        assert!(app.contact().is_open());

        for c in "Ada q".chars() {
            apply_event(&mut app, key(KeyCode::Char(c)));
        }
        assert!(!app.should_quit());
        assert_eq!(app.contact().draft().name, "Ada q");

        apply_event(&mut app, key(KeyCode::Esc));
        assert!(!app.contact().is_open());
    }

    #[test]
    fn resize_event_switches_mode() {
        let mut app = desktop_app();
        apply_event(&mut app, Event::Resize(40, 30));
        assert!(app.responsive_mode().is_mobile());
    }
}
