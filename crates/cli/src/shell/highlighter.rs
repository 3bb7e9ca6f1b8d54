use nu_ansi_term::{Color, Style};
use reedline::{Highlighter, StyledText};

pub struct ShellHighlighter {
    commands: Vec<String>,
}

impl ShellHighlighter {
    pub fn new(commands: Vec<String>) -> Self {
        Self { commands }
    }
}

impl Highlighter for ShellHighlighter {
    fn highlight(&self, line: &str, _cursor: usize) -> StyledText {
        let mut styled_text = StyledText::new();

        let mut current_pos = 0;
        let words = line.split_inclusive(char::is_whitespace);

        for word in words {
            let trimmed = word.trim();
            if trimmed.is_empty() {
                styled_text.push((Style::new(), word.to_string()));
                current_pos += word.len();
                continue;
            }

            let style = if self.is_at_start_of_command(line, current_pos) {
                if self.commands.contains(&trimmed.to_string()) {
                    Style::new().fg(Color::LightGreen).bold()
                } else {
                    Style::new()
                }
            } else if trimmed.starts_with('-') {
                Style::new().fg(Color::Cyan)
            } else if trimmed.chars().all(|c| c.is_ascii_digit()) {
                Style::new().fg(Color::Yellow)
            } else {
                Style::new()
            };

            styled_text.push((style, word.to_string()));
            current_pos += word.len();
        }

        styled_text
    }
}

impl ShellHighlighter {
    fn is_at_start_of_command(&self, line: &str, pos: usize) -> bool {
        let prefix = &line[..pos];
        prefix.trim().is_empty()
    }
}
