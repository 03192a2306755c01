use pagedom::NodeId;
use thiserror::Error;

/// Reasons a widget could not be constructed.
///
/// All of these are terminal for the one host they concern; the host is
/// left untouched and the rest of the page carries on.
#[derive(Debug, Error)]
pub enum SelectyError {
    /// The host reference names no live element.
    #[error("host '{0}' does not resolve to an element in the document")]
    InvalidHostReference(String),

    /// The host resolved, but is not a `select` element.
    #[error("host {node} is a <{tag}>, not a <select>")]
    NotASelect { node: NodeId, tag: String },

    /// The host has no `option` entries.
    #[error("host {0} has no options")]
    EmptyOptionSet(NodeId),

    /// Construction was already attempted for this host.
    #[error("host {0} was already processed")]
    AlreadyMounted(NodeId),

    /// The configured touch detection pattern does not compile.
    #[error("invalid touch pattern: {0}")]
    InvalidTouchPattern(#[from] regex::Error),
}
