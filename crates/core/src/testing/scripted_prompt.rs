//! Scripted prompt for testing.

use std::collections::VecDeque;
use std::sync::Mutex;

use crate::prompt::Prompt;

/// Scripted implementation of the [`Prompt`] trait.
///
/// Replies are queued in call order. An exhausted confirm queue answers
/// yes (the interactive default); an exhausted choose queue answers
/// `None` (do not rename).
#[derive(Default)]
pub struct ScriptedPrompt {
    confirms: Mutex<VecDeque<bool>>,
    choices: Mutex<VecDeque<Option<usize>>>,
    confirm_calls: Mutex<Vec<String>>,
    choose_calls: Mutex<Vec<(String, Vec<String>)>>,
}

impl ScriptedPrompt {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn queue_confirm(&self, reply: bool) {
        self.confirms.lock().expect("lock").push_back(reply);
    }

    pub fn queue_choice(&self, reply: Option<usize>) {
        self.choices.lock().expect("lock").push_back(reply);
    }

    pub fn confirm_count(&self) -> usize {
        self.confirm_calls.lock().expect("lock").len()
    }

    pub fn choose_count(&self) -> usize {
        self.choose_calls.lock().expect("lock").len()
    }

    /// Recorded `(header, options)` pairs, in call order.
    pub fn recorded_choices(&self) -> Vec<(String, Vec<String>)> {
        self.choose_calls.lock().expect("lock").clone()
    }
}

impl Prompt for ScriptedPrompt {
    fn confirm(&self, question: &str) -> bool {
        self.confirm_calls
            .lock()
            .expect("lock")
            .push(question.to_string());
        self.confirms
            .lock()
            .expect("lock")
            .pop_front()
            .unwrap_or(true)
    }

    fn choose(&self, header: &str, options: &[String]) -> Option<usize> {
        self.choose_calls
            .lock()
            .expect("lock")
            .push((header.to_string(), options.to_vec()));
        self.choices
            .lock()
            .expect("lock")
            .pop_front()
            .unwrap_or(None)
    }
}
