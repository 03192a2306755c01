//! The options a widget was built from.

/// Position of an [`OptionGroup`] among the groups of one widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupId(pub usize);

/// One selectable choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    /// Position among selectable entries; group headers are not counted.
    pub index: usize,
    pub label: String,
    pub value: String,
    pub disabled: bool,
    pub group: Option<GroupId>,
}

/// A non-selectable header over a run of options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionGroup {
    pub id: GroupId,
    pub label: String,
    pub disabled: bool,
}
