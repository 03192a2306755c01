//! Selecty: a custom-styled dropdown that mirrors a native `select`.
//!
//! A [`SelectWidget`] reads the options of a host `select` element, hides
//! it, and inserts a synthetic replica (a summary link plus a list of items)
//! right after it. Clicks on the replica drive a small open/closed state
//! machine; every committed selection is written back to the host's
//! `option` elements so form submission keeps working.
//!
//! Widgets live on a [`Page`], which routes normalized input to them and
//! keeps at most one widget open at a time.

pub mod config;
pub mod error;
pub mod events;
pub mod host;
pub mod option;
pub mod page;
pub mod replica;
pub mod selection;
pub mod widget;

pub use config::{Environment, SelectConfig};
pub use error::SelectyError;
pub use events::{EventResult, SelectionChanged};
pub use host::HostRef;
pub use option::{GroupId, OptionGroup, SelectOption};
pub use page::{MountReport, Page};
pub use replica::Replica;
pub use selection::SelectionState;
pub use widget::{DegradedWidget, Mount, OpenState, SelectWidget, Target, WidgetId};

/// Style tag names shared by the replica and stylesheets.
pub mod tags {
    pub const WRAPPER: &str = "selecty";
    pub const SUMMARY: &str = "selecty-selected";
    pub const LIST: &str = "selecty-options";
    pub const ACTIVE: &str = "active";
    pub const SELECTED: &str = "selected";
    pub const DISABLED: &str = "disabled";
    pub const GROUP_HEADER: &str = "optgroup";
    pub const GROUP_OPTION: &str = "optgroup-option";
    pub const DEGRADED_HOST: &str = "selecty-select";
    pub const ARROW: &str = "selecty-arrow";
}
