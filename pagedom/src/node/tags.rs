use std::collections::BTreeSet;
use std::fmt;

/// The set of named visual states attached to an element (its class list).
///
/// Adding a tag that is present, or removing one that is absent, is a no-op,
/// so renders can reset and reapply tags without tracking what changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleTags {
    tags: BTreeSet<String>,
}

impl StyleTags {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a whitespace separated class attribute.
    pub fn parse(classes: &str) -> Self {
        classes.split_whitespace().collect()
    }

    /// Returns true if the tag was not already present.
    pub fn add(&mut self, tag: &str) -> bool {
        if self.tags.contains(tag) {
            return false;
        }
        self.tags.insert(tag.to_string())
    }

    /// Returns true if the tag was present.
    pub fn remove(&mut self, tag: &str) -> bool {
        self.tags.remove(tag)
    }

    /// Add or remove `tag` depending on `active`.
    pub fn set(&mut self, tag: &str, active: bool) -> bool {
        if active {
            self.add(tag)
        } else {
            self.remove(tag)
        }
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }
}

impl<'a> FromIterator<&'a str> for StyleTags {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self {
            tags: iter.into_iter().map(str::to_string).collect(),
        }
    }
}

impl fmt::Display for StyleTags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, tag) in self.tags.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(tag)?;
        }
        Ok(())
    }
}
