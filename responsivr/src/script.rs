//! Scripted interaction replayed against a page.
//!
//! Steps are written as short commands, one per JSON string:
//!
//! ```text
//! open select1        click the summary of #select1
//! pick select1 2      click item 2 of #select1's open list
//! click 40 12         mouse press at a cell
//! touch 40 12         touch start at a cell
//! key escape          key press
//! ```

use std::fmt;
use std::str::FromStr;

use pagedom::{Key, Modifiers, MouseButton, NodeId, RawInput, UnknownKey};
use selecty::{EventResult, Page};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScriptError {
    #[error("empty step")]
    Empty,

    #[error("unknown action `{0}`")]
    UnknownAction(String),

    #[error("`{action}` expects {expected} argument(s)")]
    Arity {
        action: &'static str,
        expected: usize,
    },

    #[error("`{0}` is not a number")]
    InvalidNumber(String),

    #[error(transparent)]
    UnknownKey(#[from] UnknownKey),

    #[error("no widget is mounted on #{0}")]
    UnknownHost(String),

    #[error("#{host} has no item {index}")]
    UnknownItem { host: String, index: usize },

    #[error("`{0}` is not on screen")]
    NotVisible(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum Step {
    Open { host: String },
    Pick { host: String, index: usize },
    Click { x: u16, y: u16 },
    Touch { x: u16, y: u16 },
    Key(Key),
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open { host } => write!(f, "open {host}"),
            Self::Pick { host, index } => write!(f, "pick {host} {index}"),
            Self::Click { x, y } => write!(f, "click {x} {y}"),
            Self::Touch { x, y } => write!(f, "touch {x} {y}"),
            Self::Key(key) => write!(f, "key {key:?}"),
        }
    }
}

fn host_id(arg: &str) -> String {
    arg.trim_start_matches('#').to_string()
}

fn number<T: FromStr>(arg: &str) -> Result<T, ScriptError> {
    arg.parse()
        .map_err(|_| ScriptError::InvalidNumber(arg.to_string()))
}

impl FromStr for Step {
    type Err = ScriptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let words: Vec<&str> = s.split_whitespace().collect();
        let Some((action, args)) = words.split_first() else {
            return Err(ScriptError::Empty);
        };
        match (action.to_ascii_lowercase().as_str(), args) {
            ("open", [h]) => Ok(Self::Open { host: host_id(h) }),
            ("open", _) => Err(ScriptError::Arity {
                action: "open",
                expected: 1,
            }),
            ("pick", [h, index]) => Ok(Self::Pick {
                host: host_id(h),
                index: number(index)?,
            }),
            ("pick", _) => Err(ScriptError::Arity {
                action: "pick",
                expected: 2,
            }),
            ("click", [x, y]) => Ok(Self::Click {
                x: number(x)?,
                y: number(y)?,
            }),
            ("click", _) => Err(ScriptError::Arity {
                action: "click",
                expected: 2,
            }),
            ("touch", [x, y]) => Ok(Self::Touch {
                x: number(x)?,
                y: number(y)?,
            }),
            ("touch", _) => Err(ScriptError::Arity {
                action: "touch",
                expected: 2,
            }),
            ("key", [name]) => Ok(Self::Key(name.parse()?)),
            ("key", _) => Err(ScriptError::Arity {
                action: "key",
                expected: 1,
            }),
            _ => Err(ScriptError::UnknownAction(action.to_string())),
        }
    }
}

impl TryFrom<String> for Step {
    type Error = ScriptError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// A replayed step and whether anything on the page reacted to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub step: Step,
    pub result: EventResult,
}

fn point_of(page: &Page, node: NodeId, what: String) -> Result<(u16, u16), ScriptError> {
    page.center_of(node).ok_or(ScriptError::NotVisible(what))
}

impl Step {
    /// Translate into device input against the page's current layout.
    pub fn input(&self, page: &Page) -> Result<RawInput, ScriptError> {
        let press = |(x, y): (u16, u16)| RawInput::Mouse {
            x,
            y,
            button: MouseButton::Left,
        };

        match self {
            Self::Open { host } => {
                let widget = page
                    .widget_for(host)
                    .ok_or_else(|| ScriptError::UnknownHost(host.clone()))?;
                let point = point_of(page, widget.replica().summary(), format!("#{host} summary"))?;
                Ok(press(point))
            }
            Self::Pick { host, index } => {
                let widget = page
                    .widget_for(host)
                    .ok_or_else(|| ScriptError::UnknownHost(host.clone()))?;
                let item = widget.replica().item(*index).ok_or(ScriptError::UnknownItem {
                    host: host.clone(),
                    index: *index,
                })?;
                let point = point_of(page, item, format!("#{host} item {index}"))?;
                Ok(press(point))
            }
            Self::Click { x, y } => Ok(press((*x, *y))),
            Self::Touch { x, y } => Ok(RawInput::Touch {
                touches: vec![(*x, *y)],
            }),
            Self::Key(key) => Ok(RawInput::Key {
                key: *key,
                modifiers: Modifiers::new(),
            }),
        }
    }
}

/// Replay `steps` in order, stopping at the first step that can't be
/// turned into input.
pub fn replay(page: &mut Page, steps: &[Step]) -> Result<Vec<Outcome>, ScriptError> {
    let mut outcomes = Vec::with_capacity(steps.len());
    for step in steps {
        let input = step.input(page)?;
        let result = page.dispatch_raw(&input);
        log::debug!("step `{step}` -> {result:?}");
        outcomes.push(Outcome {
            step: step.clone(),
            result,
        });
    }
    Ok(outcomes)
}
