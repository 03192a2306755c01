//! JSON page fixtures: the host page a set of widgets is mounted on.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use pagedom::{Document, Markup, Rect};
use selecty::{Environment, SelectConfig};
use serde::Deserialize;
use thiserror::Error;

use crate::script::Step;

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid page fixture: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("host id `{0}` is used more than once")]
    DuplicateHostId(String),

    #[error("host at position {0} has an empty id")]
    EmptyHostId(usize),
}

/// A page: environment, host controls and an interaction script.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PageFixture {
    #[serde(default)]
    pub user_agent: String,
    #[serde(default)]
    pub viewport: Option<Viewport>,
    #[serde(default)]
    pub config: SelectConfig,
    #[serde(default)]
    pub hosts: Vec<HostFixture>,
    #[serde(default)]
    pub script: Vec<Step>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HostFixture {
    pub id: String,
    #[serde(default)]
    pub multiple: bool,
    #[serde(default)]
    pub disabled: bool,
    /// Carry the marker attribute so the page-load hook picks it up.
    #[serde(default = "default_mount")]
    pub mount: bool,
    #[serde(default)]
    pub entries: Vec<EntryFixture>,
}

fn default_mount() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum EntryFixture {
    Option(OptionFixture),
    Group {
        label: String,
        #[serde(default)]
        disabled: bool,
        #[serde(default)]
        options: Vec<OptionFixture>,
    },
}

#[derive(Debug, Clone, Deserialize)]
pub struct OptionFixture {
    pub label: String,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub selected: bool,
    #[serde(default)]
    pub disabled: bool,
}

impl OptionFixture {
    fn markup(&self) -> Markup {
        let mut option = Markup::element("option")
            .text(self.label.clone())
            .flag("selected", self.selected)
            .flag("disabled", self.disabled);
        if let Some(value) = &self.value {
            option = option.attr("value", value.clone());
        }
        option
    }
}

impl EntryFixture {
    fn markup(&self) -> Markup {
        match self {
            Self::Option(option) => option.markup(),
            Self::Group {
                label,
                disabled,
                options,
            } => Markup::element("optgroup")
                .attr("label", label.clone())
                .flag("disabled", *disabled)
                .children(options.iter().map(OptionFixture::markup)),
        }
    }
}

impl HostFixture {
    fn markup(&self, marker: &str) -> Markup {
        let mut select = Markup::element("select")
            .id(self.id.clone())
            .attr("name", self.id.clone())
            .flag("multiple", self.multiple)
            .flag("disabled", self.disabled)
            .children(self.entries.iter().map(EntryFixture::markup));
        if self.mount {
            select = select.attr(marker, "");
        }
        select
    }
}

impl PageFixture {
    pub fn load(path: &Path) -> Result<Self, FixtureError> {
        let text = fs::read_to_string(path).map_err(|source| FixtureError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let fixture = Self::from_json(&text)?;
        log::debug!(
            "loaded {}: {} host(s), {} step(s)",
            path.display(),
            fixture.hosts.len(),
            fixture.script.len()
        );
        Ok(fixture)
    }

    pub fn from_json(text: &str) -> Result<Self, FixtureError> {
        Ok(serde_json::from_str(text)?)
    }

    /// The runtime environment, with an optional user agent override.
    pub fn environment(&self, user_agent: Option<&str>) -> Environment {
        let env = Environment::new(user_agent.unwrap_or(&self.user_agent));
        match self.viewport {
            Some(Viewport { width, height }) => env.with_viewport(Rect::from_size(width, height)),
            None => env,
        }
    }

    /// Build the host page: every host control in order under `body`.
    pub fn build_document(&self, config: &SelectConfig) -> Result<Document, FixtureError> {
        let mut seen = HashSet::new();
        for (position, host) in self.hosts.iter().enumerate() {
            if host.id.is_empty() {
                return Err(FixtureError::EmptyHostId(position));
            }
            if !seen.insert(host.id.as_str()) {
                return Err(FixtureError::DuplicateHostId(host.id.clone()));
            }
        }

        let mut doc = Document::new();
        let body = doc.body();
        for host in &self.hosts {
            doc.insert(body, host.markup(&config.marker_attribute));
        }
        Ok(doc)
    }
}
