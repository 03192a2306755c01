//! Authoritative selection record of a widget.

use std::collections::BTreeSet;

use crate::option::SelectOption;

/// Indices of the selected options.
///
/// Kept ascending and duplicate free by construction. Mutations accept only
/// indices of existing, enabled options, a single-select never holds more
/// than one index, and an emptied selection falls back to the first option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    selected: BTreeSet<usize>,
    multiple: bool,
    disabled: bool,
}

impl SelectionState {
    pub fn new(multiple: bool, disabled: bool) -> Self {
        Self {
            selected: BTreeSet::new(),
            multiple,
            disabled,
        }
    }

    /// Seed from the host's pre-selected options.
    ///
    /// Disabled or unknown indices are dropped. A single-select keeps the
    /// last pre-selected option, the way a native control resolves
    /// conflicting `selected` flags.
    pub fn initialize(
        multiple: bool,
        disabled: bool,
        preselected: &[usize],
        options: &[SelectOption],
    ) -> Self {
        let mut state = Self::new(multiple, disabled);
        let valid = preselected
            .iter()
            .copied()
            .filter(|index| is_selectable(options, *index));

        if multiple {
            state.selected.extend(valid);
        } else if let Some(last) = valid.last() {
            state.selected.insert(last);
        }
        state.repair();
        state
    }

    pub fn is_multiple(&self) -> bool {
        self.multiple
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn contains(&self, index: usize) -> bool {
        self.selected.contains(&index)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Selected indices, ascending.
    pub fn indices(&self) -> Vec<usize> {
        self.selected.iter().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.selected.iter().copied()
    }

    /// Flip membership of `index`. Returns false if the index was rejected.
    pub fn toggle(&mut self, index: usize, options: &[SelectOption]) -> bool {
        if !is_selectable(options, index) {
            return false;
        }
        if !self.selected.remove(&index) {
            self.selected.insert(index);
        }
        if self.selected.is_empty() {
            log::debug!("selection emptied by toggling {index}, repairing");
        }
        self.repair();
        true
    }

    /// Make `index` the only selected option. Returns false if rejected.
    pub fn replace(&mut self, index: usize, options: &[SelectOption]) -> bool {
        if !is_selectable(options, index) {
            return false;
        }
        self.selected.clear();
        self.selected.insert(index);
        true
    }

    /// Commit a click on `index`: toggle for multi-select, replace for
    /// single-select.
    pub fn commit(&mut self, index: usize, options: &[SelectOption]) -> bool {
        if self.multiple {
            self.toggle(index, options)
        } else {
            self.replace(index, options)
        }
    }

    /// Never leave the selection empty: fall back to the first option.
    fn repair(&mut self) {
        if self.selected.is_empty() {
            self.selected.insert(0);
        }
    }
}

fn is_selectable(options: &[SelectOption], index: usize) -> bool {
    options.get(index).is_some_and(|option| !option.disabled)
}
