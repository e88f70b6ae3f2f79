use thiserror::Error;

/// Recoverable conditions raised while building the address list.
///
/// Invalid syntax is deliberately absent from this taxonomy: a malformed
/// address is still stored and counted, only flagged for invalid styling.
/// These conditions never propagate to the host binding or the change
/// callback; the widget surfaces them as timed notices.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddError {
    /// The token already exists verbatim in the list. The token is dropped
    /// and the rest of the batch still processes.
    #[error("email {address} is already in the list")]
    Duplicate { address: String },

    /// The separator key was pressed while the text field was empty.
    #[error("email can't start with the `,` character")]
    LeadingSeparator,
}
