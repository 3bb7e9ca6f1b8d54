use nu_ansi_term::Color;
use reedline::{Prompt, PromptEditMode, PromptHistorySearch};
use std::borrow::Cow;

pub struct DashboardPrompt {
    selected: Option<String>,
}

impl DashboardPrompt {
    pub fn new(selected: Option<String>) -> Self {
        Self { selected }
    }
}

impl Prompt for DashboardPrompt {
    fn render_prompt_left(&self) -> Cow<'_, str> {
        let prefix = Color::LightBlue.bold().paint("assetmap");
        match &self.selected {
            Some(name) => {
                let display_name = if name.chars().count() > 30 {
                    let head: String = name.chars().take(29).collect();
                    format!("{}…", head)
                } else {
                    name.clone()
                };
                let target = Color::Yellow.paint(display_name);
                Cow::Owned(format!("{} {} > ", prefix, target))
            }
            None => {
                let target = Color::Yellow.paint("/");
                Cow::Owned(format!("{} {} > ", prefix, target))
            }
        }
    }

    fn render_prompt_right(&self) -> Cow<'_, str> {
        Cow::Borrowed("")
    }

    fn render_prompt_indicator(&self, _edit_mode: PromptEditMode) -> Cow<'_, str> {
        Cow::Borrowed("")
    }

    fn render_prompt_multiline_indicator(&self) -> Cow<'_, str> {
        Cow::Borrowed(".. ")
    }

    fn render_prompt_history_search_indicator(
        &self,
        _history_search: PromptHistorySearch,
    ) -> Cow<'_, str> {
        Cow::Borrowed("(search) ")
    }
}
