//! Mock implementations of the driver's seams, for tests.

mod mock_resolver;
mod mock_suggester;
mod scripted_prompt;

pub use mock_resolver::MockLanguageResolver;
pub use mock_suggester::MockSuggester;
pub use scripted_prompt::ScriptedPrompt;
