//! Recording UI for tests.
//!
//! `MockUI` keeps everything shown to it in a single ordered log and answers
//! prompts from scripted responses.
//!
//! # Example
//!
//! ```
//! use devflow::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.set_prompt_response("overwrite", "n");
//!
//! ui.message("Cloning template");
//! ui.success("Done!");
//!
//! assert!(ui.has_message("Cloning"));
//! assert_eq!(ui.successes(), ["Done!"]);
//! ```

use std::collections::{HashMap, VecDeque};

use crate::error::Result;

use super::{parse_confirm, Prompt, PromptResult, PromptType, SpinnerHandle, UserInterface};

/// Where a line was sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Message,
    Success,
    Warning,
    Error,
    Header,
    Hint,
    Spinner,
}

/// UI that records output and replays scripted answers.
///
/// Queued answers for a key are used first, then the fixed answer, then the
/// prompt's default.
#[derive(Debug, Default)]
pub struct MockUI {
    log: Vec<(Channel, String)>,
    answers: HashMap<String, String>,
    queued: HashMap<String, VecDeque<String>>,
    prompts_shown: Vec<String>,
}

impl MockUI {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer every `key` prompt with `response`.
    pub fn set_prompt_response(&mut self, key: &str, response: &str) {
        self.answers.insert(key.to_string(), response.to_string());
    }

    /// Answer successive `key` prompts with `responses`, in order.
    pub fn queue_prompt_responses(&mut self, key: &str, responses: Vec<&str>) {
        self.queued
            .entry(key.to_string())
            .or_default()
            .extend(responses.into_iter().map(String::from));
    }

    /// Every line sent to `channel`, in order.
    pub fn lines(&self, channel: Channel) -> Vec<&str> {
        self.log
            .iter()
            .filter(|(c, _)| *c == channel)
            .map(|(_, line)| line.as_str())
            .collect()
    }

    /// The whole log, in order.
    pub fn log(&self) -> &[(Channel, String)] {
        &self.log
    }

    pub fn messages(&self) -> Vec<&str> {
        self.lines(Channel::Message)
    }

    pub fn successes(&self) -> Vec<&str> {
        self.lines(Channel::Success)
    }

    pub fn warnings(&self) -> Vec<&str> {
        self.lines(Channel::Warning)
    }

    pub fn errors(&self) -> Vec<&str> {
        self.lines(Channel::Error)
    }

    pub fn headers(&self) -> Vec<&str> {
        self.lines(Channel::Header)
    }

    pub fn hints(&self) -> Vec<&str> {
        self.lines(Channel::Hint)
    }

    pub fn spinners(&self) -> Vec<&str> {
        self.lines(Channel::Spinner)
    }

    /// Keys of the prompts asked so far.
    pub fn prompts_shown(&self) -> &[String] {
        &self.prompts_shown
    }

    /// Whether any line on `channel` contains `needle`.
    pub fn contains(&self, channel: Channel, needle: &str) -> bool {
        self.log
            .iter()
            .any(|(c, line)| *c == channel && line.contains(needle))
    }

    pub fn has_message(&self, needle: &str) -> bool {
        self.contains(Channel::Message, needle)
    }

    pub fn has_success(&self, needle: &str) -> bool {
        self.contains(Channel::Success, needle)
    }

    pub fn has_warning(&self, needle: &str) -> bool {
        self.contains(Channel::Warning, needle)
    }

    pub fn has_error(&self, needle: &str) -> bool {
        self.contains(Channel::Error, needle)
    }

    pub fn has_hint(&self, needle: &str) -> bool {
        self.contains(Channel::Hint, needle)
    }

    fn record(&mut self, channel: Channel, line: &str) {
        self.log.push((channel, line.to_string()));
    }

    fn scripted_answer(&mut self, key: &str) -> Option<String> {
        self.queued
            .get_mut(key)
            .and_then(VecDeque::pop_front)
            .or_else(|| self.answers.get(key).cloned())
    }
}

impl UserInterface for MockUI {
    fn message(&mut self, msg: &str) {
        self.record(Channel::Message, msg);
    }

    fn success(&mut self, msg: &str) {
        self.record(Channel::Success, msg);
    }

    fn warning(&mut self, msg: &str) {
        self.record(Channel::Warning, msg);
    }

    fn error(&mut self, msg: &str) {
        self.record(Channel::Error, msg);
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        self.prompts_shown.push(prompt.key.clone());

        let answer = self
            .scripted_answer(&prompt.key)
            .or_else(|| prompt.default.clone())
            .unwrap_or_default();

        Ok(match prompt.prompt_type {
            PromptType::Confirm => PromptResult::Bool(parse_confirm(&answer)),
            PromptType::Input => PromptResult::String(answer),
        })
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        self.record(Channel::Spinner, message);
        Box::new(SilentSpinner)
    }

    fn show_header(&mut self, title: &str) {
        self.record(Channel::Header, title);
    }

    fn show_hint(&mut self, hint: &str) {
        self.record(Channel::Hint, hint);
    }
}

struct SilentSpinner;

impl SpinnerHandle for SilentSpinner {
    fn finish_success(&mut self, _msg: &str) {}
    fn finish_error(&mut self, _msg: &str) {}
}
