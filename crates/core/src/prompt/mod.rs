//! Operator prompts.
//!
//! The driver blocks on these - one file is fully handled before the next
//! one starts. Keeping the capability behind a trait lets batch and test
//! harnesses supply scripted responders instead of a terminal.

/// A source of interactive decisions.
pub trait Prompt: Send + Sync {
    /// Ask a yes/no question. Implementations default to yes on an empty
    /// reply.
    fn confirm(&self, question: &str) -> bool;

    /// Present an ordered list of options and return the chosen index.
    ///
    /// Returns `None` when the reply does not name an in-range option;
    /// callers treat that as "do not rename".
    fn choose(&self, header: &str, options: &[String]) -> Option<usize>;
}
