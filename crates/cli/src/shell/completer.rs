use super::context::CatalogIndex;
use reedline::{Completer, Suggestion};

pub struct AssetCompleter {
    commands: Vec<String>,
    catalog_index: CatalogIndex,
}

impl AssetCompleter {
    pub fn new(commands: Vec<String>, catalog_index: CatalogIndex) -> Self {
        Self {
            commands,
            catalog_index,
        }
    }
}

impl Completer for AssetCompleter {
    fn complete(&mut self, line: &str, pos: usize) -> Vec<Suggestion> {
        let trimmed = line.trim_start();

        // 1. Command completion (at start of line)
        if !trimmed.contains(' ') {
            return self
                .commands
                .iter()
                .filter(|cmd| cmd.starts_with(trimmed))
                .map(|cmd| Suggestion {
                    value: cmd.clone(),
                    description: None,
                    style: None,
                    extra: None,
                    span: reedline::Span {
                        start: pos - trimmed.len(),
                        end: pos,
                    },
                    append_whitespace: true,
                    match_indices: None,
                })
                .collect();
        }

        // 2. Asset-id completion for the commands that take one
        let parts: Vec<&str> = trimmed.split_whitespace().collect();
        if let Some(cmd) = parts.first() {
            if matches!(*cmd, "select" | "hover" | "cat") {
                let last_word = if line.ends_with(' ') {
                    ""
                } else {
                    parts.last().copied().unwrap_or("")
                };
                let span_start = pos - last_word.len();

                let mut suggestions: Vec<Suggestion> = self
                    .catalog_index
                    .read()
                    .unwrap()
                    .iter()
                    .filter(|(id, _)| id.starts_with(last_word))
                    .map(|(id, name)| Suggestion {
                        value: id.clone(),
                        description: Some(name.clone()),
                        style: None,
                        extra: None,
                        span: reedline::Span {
                            start: span_start,
                            end: pos,
                        },
                        append_whitespace: true,
                        match_indices: None,
                    })
                    .collect();

                // Keep the menu readable on large catalogs
                suggestions.truncate(50);
                return suggestions;
            }
        }

        vec![]
    }
}
