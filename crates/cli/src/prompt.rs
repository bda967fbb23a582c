//! Interactive terminal prompts backed by dialoguer.

use dialoguer::{Confirm, Input};

use marquee_core::Prompt;

/// Terminal-based prompt implementation.
///
/// Candidate lists are printed as `index : title` and the reply is read
/// as free text; anything that does not parse to an in-range index means
/// "do not rename".
#[derive(Debug, Default)]
pub struct InteractivePrompt;

impl InteractivePrompt {
    pub fn new() -> Self {
        Self
    }
}

impl Prompt for InteractivePrompt {
    fn confirm(&self, question: &str) -> bool {
        Confirm::new()
            .with_prompt(question)
            .default(true)
            .interact()
            .unwrap_or(false)
    }

    fn choose(&self, header: &str, options: &[String]) -> Option<usize> {
        println!("{}", header);
        for (idx, option) in options.iter().enumerate() {
            println!("{} : {}", idx, option);
        }

        let reply: String = Input::new()
            .with_prompt("Selection")
            .allow_empty(true)
            .interact_text()
            .unwrap_or_default();

        match reply.trim().parse::<usize>() {
            Ok(idx) if idx < options.len() => Some(idx),
            _ => {
                println!("Invalid selection, not renaming");
                None
            }
        }
    }
}
