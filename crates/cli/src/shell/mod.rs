mod command;
mod completer;
mod context;
mod highlighter;
mod prompt;
pub(crate) mod view;

use reedline::{
    ColumnarMenu, DefaultHinter, Emacs, FileBackedHistory, KeyCode, KeyModifiers, MenuBuilder,
    Reedline, ReedlineEvent, ReedlineMenu, Signal, default_emacs_keybindings,
};
use std::path::Path;
use tracing::info;

use assetmap_api::models::{AssetId, VacancyLevel, ViewportClass};
use assetmap_core::config::DashboardConfig;
use assetmap_core::facade::Dashboard;
use assetmap_core::ingest;

use self::command::{ShellCommand, parse_shell_command};
use self::completer::AssetCompleter;
use self::context::ShellContext;
use self::highlighter::ShellHighlighter;
use self::prompt::DashboardPrompt;
use crate::surface::TermMap;

// Shell configuration constants
const SHELL_HISTORY_SIZE: usize = 500;

pub struct ReplServer {
    context: ShellContext,
}

impl ReplServer {
    pub fn new(dashboard: Dashboard<TermMap>) -> Self {
        Self {
            context: ShellContext::new(dashboard),
        }
    }

    pub fn run(self) -> Result<(), Box<dyn std::error::Error>> {
        println!(
            "{} assets loaded. Type 'help' for commands.",
            self.context.dashboard.total_assets()
        );
        println!("{}", self.context.dashboard.surface().status_line());

        let line_editor = self.setup_line_editor()?;
        self.run_loop(line_editor)
    }

    fn setup_line_editor(&self) -> Result<Reedline, Box<dyn std::error::Error>> {
        let commands = ShellCommand::command_names();

        let completer = Box::new(AssetCompleter::new(
            commands.clone(),
            self.context.catalog_index.clone(),
        ));

        let completion_menu = Box::new(ColumnarMenu::default().with_name("completion_menu"));

        let mut keybindings = default_emacs_keybindings();
        keybindings.add_binding(
            KeyModifiers::NONE,
            KeyCode::Tab,
            ReedlineEvent::UntilFound(vec![
                ReedlineEvent::Menu("completion_menu".to_string()),
                ReedlineEvent::MenuNext,
            ]),
        );

        let history_file = dirs::home_dir()
            .map(|mut p| {
                p.push(".assetmap");
                p.push("shell");
                let _ = std::fs::create_dir_all(&p);
                p.push("history");
                p
            })
            .unwrap();

        let history = Box::new(
            FileBackedHistory::with_file(SHELL_HISTORY_SIZE, history_file.clone()).unwrap_or_else(
                |_| FileBackedHistory::new(SHELL_HISTORY_SIZE).expect("Failed to create history"),
            ),
        );

        let highlighter = Box::new(ShellHighlighter::new(commands));

        Ok(Reedline::create()
            .with_history(history)
            .with_completer(completer)
            .with_highlighter(highlighter)
            .with_menu(ReedlineMenu::EngineCompleter(completion_menu))
            .with_hinter(Box::new(
                DefaultHinter::default().with_style(
                    nu_ansi_term::Style::new()
                        .italic()
                        .fg(nu_ansi_term::Color::LightGray),
                ),
            ))
            .with_edit_mode(Box::new(Emacs::new(keybindings))))
    }

    fn run_loop(mut self, mut line_editor: Reedline) -> Result<(), Box<dyn std::error::Error>> {
        loop {
            let selected_name = self
                .context
                .dashboard
                .selected_asset()
                .map(|asset| asset.name.clone());
            let prompt = DashboardPrompt::new(selected_name);
            let sig = line_editor.read_line(&prompt);

            match sig {
                Ok(Signal::Success(buffer)) => {
                    let trimmed = buffer.trim();
                    if trimmed.is_empty() {
                        continue;
                    }
                    if trimmed == "exit" || trimmed == "quit" {
                        break;
                    }

                    match parse_shell_command(trimmed) {
                        Ok(Some(cmd)) => {
                            match execute(&cmd, &mut self.context) {
                                Ok(output) => {
                                    if !output.is_empty() {
                                        println!("{}", output);
                                    }
                                    if matches!(cmd, ShellCommand::Clear) {
                                        let _ = line_editor.clear_screen();
                                    }
                                }
                                Err(e) => eprintln!("Error: {}", e),
                            }
                            self.context.refresh_index();
                        }
                        Ok(None) => {} // Help, handled by Clap
                        Err(e) => eprintln!("Error: {}", e),
                    }
                }
                Ok(Signal::CtrlD) | Ok(Signal::CtrlC) => {
                    println!("Bye!");
                    break;
                }
                x => println!("Event: {:?}", x),
            }
        }

        // Session end: the surface is torn down with the dashboard.
        self.context.dashboard.close();
        Ok(())
    }
}

fn execute(
    cmd: &ShellCommand,
    context: &mut ShellContext,
) -> Result<String, Box<dyn std::error::Error>> {
    let dashboard = &mut context.dashboard;

    match cmd {
        ShellCommand::Search { keywords } => {
            dashboard.set_search_term(keywords.join(" "));
            Ok(render_dashboard(dashboard))
        }
        ShellCommand::Ls { long } => {
            let visible = dashboard.visible();
            if visible.is_empty() {
                return Ok("No matching assets.".to_string());
            }
            let mut out = view::asset_table(&visible, dashboard.selected(), *long);
            out.push_str(&format!(
                "\n{} of {} assets",
                visible.len(),
                dashboard.total_assets()
            ));
            Ok(out)
        }
        ShellCommand::Select { id } => {
            dashboard.select(AssetId(*id));
            Ok(render_dashboard(dashboard))
        }
        ShellCommand::Deselect => {
            dashboard.clear_selection();
            Ok(render_dashboard(dashboard))
        }
        ShellCommand::Hover { target } => {
            let hovered = match target.as_str() {
                "off" | "none" => None,
                other => {
                    let id: u32 = other
                        .parse()
                        .map_err(|_| format!("expected an asset id or 'off', got {:?}", other))?;
                    Some(AssetId(id))
                }
            };
            dashboard.set_hovered(hovered);
            Ok(dashboard.surface().status_line())
        }
        ShellCommand::Cat { id, json } => {
            let target = id
                .map(AssetId)
                .or_else(|| dashboard.selected())
                .ok_or("no asset selected; pass an id")?;
            let asset = dashboard
                .store()
                .get(target)
                .ok_or_else(|| format!("no asset with id {}", target))?;
            if *json {
                Ok(serde_json::to_string_pretty(asset)?)
            } else {
                Ok(view::render_detail(asset))
            }
        }
        ShellCommand::Map => Ok(dashboard.surface().status_line()),
        ShellCommand::Stats => Ok(render_stats(dashboard)),
        ShellCommand::Clear => Ok(String::new()),
    }
}

/// Compose the dashboard exactly as the visibility rules dictate: map
/// status always, list and detail panels only when visible.
fn render_dashboard(dashboard: &Dashboard<TermMap>) -> String {
    let mut out = String::new();
    out.push_str(&dashboard.surface().status_line());

    let visibility = dashboard.visibility();
    if visibility.show_list {
        let visible = dashboard.visible();
        out.push('\n');
        if visible.is_empty() {
            out.push_str("No matching assets.");
        } else {
            out.push_str(&view::asset_table(&visible, dashboard.selected(), false));
            out.push_str(&format!(
                "\n{} of {} assets",
                visible.len(),
                dashboard.total_assets()
            ));
        }
    }
    if visibility.show_detail {
        out.push('\n');
        match dashboard.selected_asset() {
            Some(asset) => out.push_str(&view::render_detail(asset)),
            None => out.push_str("Selected asset is not in the catalog."),
        }
    }
    out
}

fn render_stats(dashboard: &Dashboard<TermMap>) -> String {
    let mut high = 0usize;
    let mut medium = 0usize;
    let mut low = 0usize;
    let mut none = 0usize;
    let mut placeable = 0usize;

    for asset in dashboard.store().iter() {
        match asset.vacancy_level {
            VacancyLevel::High => high += 1,
            VacancyLevel::Medium => medium += 1,
            VacancyLevel::Low => low += 1,
            VacancyLevel::None => none += 1,
        }
        if asset.is_placeable() {
            placeable += 1;
        }
    }

    format!(
        "{} assets ({} placeable on the map)\nvacancy: {} high, {} medium, {} low, {} none",
        dashboard.total_assets(),
        placeable,
        high,
        medium,
        low,
        none
    )
}

pub fn run(data: &Path, viewport: ViewportClass) -> Result<(), Box<dyn std::error::Error>> {
    let store = ingest::load_from_path(data)?;
    println!("Catalog: {}", data.display());

    let config = DashboardConfig {
        viewport,
        ..Default::default()
    };
    let dashboard = Dashboard::new(store, TermMap::new(), config);
    info!("dashboard session started");

    let server = ReplServer::new(dashboard);
    server.run()
}
