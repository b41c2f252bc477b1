//! Terminal side of the [`Prompter`] seam, backed by `inquire`.

use inquire::{InquireError, Text};
use weather_core::{LocationQuery, PromptError, Prompter};

use crate::display;

#[derive(Debug, Default)]
pub struct InquirePrompter;

impl InquirePrompter {
    /// Read a menu selection; `None` when the user presses Esc / Ctrl-C.
    pub fn menu_choice(&mut self) -> anyhow::Result<Option<String>> {
        match Text::new("Select an option:").prompt() {
            Ok(line) => Ok(Some(line)),
            Err(err) => match to_prompt_error(err) {
                PromptError::Cancelled => Ok(None),
                err => Err(err.into()),
            },
        }
    }
}

impl Prompter for InquirePrompter {
    fn read_line(&mut self, prompt: &str) -> Result<String, PromptError> {
        Text::new(prompt).prompt().map_err(to_prompt_error)
    }

    fn notify(&mut self, message: &str) {
        println!("{message}");
    }

    fn on_attempt(&mut self, _query: &LocationQuery) {
        println!("{}", display::PROGRESS);
    }
}

fn to_prompt_error(err: InquireError) -> PromptError {
    match err {
        InquireError::OperationCanceled | InquireError::OperationInterrupted => PromptError::Cancelled,
        InquireError::IO(io) => PromptError::Io(io),
        other => PromptError::Io(std::io::Error::other(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_and_ctrl_c_cancel() {
        assert!(matches!(to_prompt_error(InquireError::OperationCanceled), PromptError::Cancelled));
        assert!(matches!(to_prompt_error(InquireError::OperationInterrupted), PromptError::Cancelled));
    }

    #[test]
    fn missing_terminal_is_an_io_error() {
        let err = to_prompt_error(InquireError::NotTTY);
        assert!(matches!(err, PromptError::Io(_)));
    }
}
