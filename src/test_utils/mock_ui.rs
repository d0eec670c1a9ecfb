use crate::ui::{Prompt, Reporter, SweepEvent};
use crate::utils::Result;
use std::cell::RefCell;

/// Answers every prompt with the same line; `None` simulates a cancelled prompt.
pub struct ScriptedPrompt {
    answer: Option<String>,
    asked: RefCell<Vec<String>>,
}

impl ScriptedPrompt {
    pub fn new(answer: Option<&str>) -> Self {
        Self {
            answer: answer.map(str::to_string),
            asked: RefCell::new(Vec::new()),
        }
    }

    pub fn asked(&self) -> Vec<String> {
        self.asked.borrow().clone()
    }
}

impl Prompt for ScriptedPrompt {
    fn ask(&self, prompt: &str) -> Result<Option<String>> {
        self.asked.borrow_mut().push(prompt.to_string());
        Ok(self.answer.clone())
    }
}

#[derive(Default)]
pub struct RecordingReporter {
    events: RefCell<Vec<SweepEvent>>,
}

impl RecordingReporter {
    pub fn events(&self) -> Vec<SweepEvent> {
        self.events.borrow().clone()
    }

    pub fn contains(&self, event: &SweepEvent) -> bool {
        self.events.borrow().contains(event)
    }
}

impl Reporter for RecordingReporter {
    fn emit(&self, event: &SweepEvent) {
        self.events.borrow_mut().push(event.clone());
    }
}
