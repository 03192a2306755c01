use std::str::FromStr;

/// Input as delivered by a particular device, before normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawInput {
    /// Mouse button pressed at a cell.
    Mouse {
        x: u16,
        y: u16,
        button: MouseButton,
    },
    /// Touch started; one entry per finger, in contact order.
    Touch { touches: Vec<(u16, u16)> },
    /// Key pressed.
    Key { key: Key, modifiers: Modifiers },
}

/// Modality-agnostic input, the only thing widgets ever see.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Primary pointer pressed at a cell.
    PointerDown { x: u16, y: u16 },
    /// Key pressed.
    KeyDown { key: Key, modifiers: Modifiers },
}

impl RawInput {
    /// Collapse device specific input into an [`InputEvent`].
    ///
    /// Secondary mouse buttons and touches without contact points produce
    /// nothing; only the first finger of a multi-touch counts.
    pub fn normalize(&self) -> Option<InputEvent> {
        match self {
            Self::Mouse {
                x,
                y,
                button: MouseButton::Left,
            } => Some(InputEvent::PointerDown { x: *x, y: *y }),
            Self::Mouse { .. } => None,
            Self::Touch { touches } => touches
                .first()
                .map(|(x, y)| InputEvent::PointerDown { x: *x, y: *y }),
            Self::Key { key, modifiers } => Some(InputEvent::KeyDown {
                key: *key,
                modifiers: *modifiers,
            }),
        }
    }
}

impl From<InputEvent> for RawInput {
    fn from(event: InputEvent) -> Self {
        match event {
            InputEvent::PointerDown { x, y } => Self::Mouse {
                x,
                y,
                button: MouseButton::Left,
            },
            InputEvent::KeyDown { key, modifiers } => Self::Key { key, modifiers },
        }
    }
}

/// Simplified key representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Delete,
    Tab,
    BackTab,
    Escape,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    Insert,
    F(u8),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownKey(pub String);

impl std::fmt::Display for UnknownKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown key name: {:?}", self.0)
    }
}

impl std::error::Error for UnknownKey {}

impl FromStr for Key {
    type Err = UnknownKey;

    /// Parse key names as written in scripts: `Escape`/`Esc`, `Enter`,
    /// `F5`, or a single character.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Ok(Key::Char(c));
        }

        let key = match s.to_ascii_lowercase().as_str() {
            "escape" | "esc" => Key::Escape,
            "enter" | "return" => Key::Enter,
            "backspace" => Key::Backspace,
            "delete" | "del" => Key::Delete,
            "tab" => Key::Tab,
            "backtab" => Key::BackTab,
            "up" => Key::Up,
            "down" => Key::Down,
            "left" => Key::Left,
            "right" => Key::Right,
            "home" => Key::Home,
            "end" => Key::End,
            "pageup" => Key::PageUp,
            "pagedown" => Key::PageDown,
            "insert" => Key::Insert,
            "space" => Key::Char(' '),
            other => match other.strip_prefix('f').and_then(|n| n.parse().ok()) {
                Some(n) => Key::F(n),
                None => return Err(UnknownKey(s.to_string())),
            },
        };
        Ok(key)
    }
}

/// Key modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn none(&self) -> bool {
        !self.shift && !self.ctrl && !self.alt
    }
}

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

// Terminal input, for pages driven from a terminal

impl RawInput {
    /// Convert a terminal event. Only mouse-down and key presses with a
    /// [`Key`] equivalent are kept; everything else returns None.
    pub fn from_crossterm(event: &crossterm::event::Event) -> Option<Self> {
        use crossterm::event::{Event, KeyEventKind, KeyModifiers, MouseEventKind};

        match event {
            Event::Mouse(mouse) => {
                let MouseEventKind::Down(button) = mouse.kind else {
                    return None;
                };
                Some(Self::Mouse {
                    x: mouse.column,
                    y: mouse.row,
                    button: match button {
                        crossterm::event::MouseButton::Left => MouseButton::Left,
                        crossterm::event::MouseButton::Right => MouseButton::Right,
                        crossterm::event::MouseButton::Middle => MouseButton::Middle,
                    },
                })
            }
            Event::Key(press) if press.kind == KeyEventKind::Press => Some(Self::Key {
                key: terminal_key(press.code)?,
                modifiers: Modifiers {
                    shift: press.modifiers.contains(KeyModifiers::SHIFT),
                    ctrl: press.modifiers.contains(KeyModifiers::CONTROL),
                    alt: press.modifiers.contains(KeyModifiers::ALT),
                },
            }),
            _ => None,
        }
    }
}

fn terminal_key(code: crossterm::event::KeyCode) -> Option<Key> {
    use crossterm::event::KeyCode;

    let key = match code {
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::Enter => Key::Enter,
        KeyCode::Esc => Key::Escape,
        KeyCode::Tab => Key::Tab,
        KeyCode::BackTab => Key::BackTab,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Delete => Key::Delete,
        KeyCode::Insert => Key::Insert,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        KeyCode::PageUp => Key::PageUp,
        KeyCode::PageDown => Key::PageDown,
        KeyCode::F(n) => Key::F(n),
        _ => return None,
    };
    Some(key)
}
