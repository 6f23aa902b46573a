//! Top-level CLI definition and dispatch.

use std::io::{self, Write};
use std::path::PathBuf;

use chrono::{SecondsFormat, Utc};
use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::{Shell as CompletionShell, generate};
use colored::{Colorize, control};
use serde_json::{Value, json};
use thiserror::Error;

use gov_directory::core::config::Config;
use gov_directory::directory::fixture::{Directory, IssueSeverity};
use gov_directory::directory::model::Committee;
use gov_directory::directory::search::filter_committees;
use gov_directory::render::renderer::{DirectoryRenderer, PageView};
use gov_directory::render::text::format_page;
use gov_directory::split::split_regions;

/// Government services directory — legislative chamber renderer and fixture tools.
#[derive(Debug, Parser)]
#[command(
    name = "govdir",
    author,
    version,
    about = "Government Services Directory - Legislative Chambers",
    long_about = None,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Override config file path.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Override the legislative fixture path (default: bundled fixture).
    #[arg(long, global = true, value_name = "PATH")]
    fixture: Option<PathBuf>,
    /// Force JSON output mode.
    #[arg(long, global = true)]
    json: bool,
    /// Disable colored output.
    #[arg(long, global = true)]
    no_color: bool,
    /// Increase verbosity.
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,
    /// Quiet mode (errors only).
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
    /// Subcommand to execute.
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Subcommand)]
enum Command {
    /// List all chambers in the directory.
    List,
    /// Render one chamber page by slug.
    Show(ShowArgs),
    /// List or search a chamber's permanent committees.
    Committees(CommitteesArgs),
    /// Validate the fixture and report findings.
    Validate,
    /// Split a region fixture into one file per slug.
    Split(SplitArgs),
    /// Generate shell completions.
    Completions(CompletionsArgs),
}

#[derive(Debug, Clone, Args)]
struct ShowArgs {
    /// Chamber slug (for example: `senate`, `house-of-representatives`).
    #[arg(value_name = "SLUG")]
    chamber: String,
}

#[derive(Debug, Clone, Args, Default)]
struct CommitteesArgs {
    /// Chamber slug. Defaults to the chamber whose name contains "Senate".
    #[arg(value_name = "SLUG")]
    chamber: Option<String>,
    /// Filter committees and chairpersons by substring, case-insensitively.
    #[arg(long, value_name = "QUERY")]
    search: Option<String>,
}

#[derive(Debug, Clone, Args)]
struct SplitArgs {
    /// Input JSON array of region records.
    #[arg(value_name = "INPUT")]
    input: PathBuf,
    /// Output directory for per-slug files.
    #[arg(value_name = "OUT_DIR")]
    out_dir: PathBuf,
}

#[derive(Debug, Clone, Args)]
struct CompletionsArgs {
    /// Shell to generate completion script for.
    #[arg(value_enum)]
    shell: CompletionShell,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputMode {
    Human,
    Json,
}

/// CLI error type with explicit exit-code mapping.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid user input at runtime.
    #[error("{0}")]
    User(String),
    /// Environment/runtime failure.
    #[error("{0}")]
    Runtime(String),
    /// JSON serialization failed.
    #[error("failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),
    /// Output write failed.
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

impl CliError {
    /// Process exit code contract for the CLI.
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::User(_) => 1,
            Self::Runtime(_) | Self::Io(_) => 2,
            Self::Json(_) => 3,
        }
    }
}

/// Dispatch CLI commands.
pub fn run(cli: &Cli) -> Result<(), CliError> {
    if cli.no_color {
        control::set_override(false);
    }

    match &cli.command {
        Command::List => run_list(cli),
        Command::Show(args) => run_show(cli, args),
        Command::Committees(args) => run_committees(cli, args),
        Command::Validate => run_validate(cli),
        Command::Split(args) => run_split(cli, args),
        Command::Completions(args) => {
            let mut command = Cli::command();
            let binary_name = command.get_name().to_string();
            generate(args.shell, &mut command, binary_name, &mut io::stdout());
            Ok(())
        }
    }
}

fn output_mode(cli: &Cli) -> OutputMode {
    if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    }
}

fn write_json_line(payload: &Value) -> Result<(), CliError> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer(&mut stdout, payload)?;
    stdout.write_all(b"\n")?;
    Ok(())
}

fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

fn load_config(cli: &Cli) -> Result<Config, CliError> {
    Config::load(cli.config.as_deref()).map_err(|e| CliError::Runtime(e.to_string()))
}

/// Resolve the fixture source (flag > config > bundled) and load it.
fn load_directory(cli: &Cli, config: &Config) -> Result<(Directory, String), CliError> {
    let override_path = cli
        .fixture
        .clone()
        .or_else(|| config.fixture.legislative_path.clone());
    let validate = config.fixture.validate_on_load;

    match override_path {
        Some(path) => {
            let directory = Directory::load_from_path(&path, validate)
                .map_err(|e| CliError::User(e.to_string()))?;
            Ok((directory, path.display().to_string()))
        }
        None => {
            let directory = Directory::load_bundled(validate)
                .map_err(|e| CliError::Runtime(e.to_string()))?;
            Ok((directory, "bundled".to_string()))
        }
    }
}

fn note_source(cli: &Cli, directory: &Directory, source: &str) {
    if cli.verbose && output_mode(cli) == OutputMode::Human {
        eprintln!(
            "govdir: loaded {} chamber(s) from {source}",
            directory.chambers().len()
        );
    }
}

fn run_list(cli: &Cli) -> Result<(), CliError> {
    let config = load_config(cli)?;
    let (directory, source) = load_directory(cli, &config)?;
    note_source(cli, &directory, &source);

    match output_mode(cli) {
        OutputMode::Human => {
            if cli.quiet {
                for record in directory.chambers() {
                    println!("{}", record.slug);
                }
                return Ok(());
            }
            println!("  {:<28}  {:<36}  {}", "Slug", "Chamber", "Branch");
            println!("  {}", "-".repeat(config.render.text_width.saturating_sub(4)));
            for record in directory.chambers() {
                println!(
                    "  {:<28}  {:<36}  {}",
                    record.slug,
                    record.chamber,
                    record.branch.as_deref().unwrap_or("-"),
                );
            }
        }
        OutputMode::Json => {
            let chambers: Vec<Value> = directory
                .chambers()
                .iter()
                .map(|record| {
                    json!({
                        "slug": record.slug,
                        "chamber": record.chamber,
                        "branch": record.branch,
                    })
                })
                .collect();
            let payload = json!({
                "command": "list",
                "ts": timestamp(),
                "source": source,
                "chambers": chambers,
            });
            write_json_line(&payload)?;
        }
    }
    Ok(())
}

fn run_show(cli: &Cli, args: &ShowArgs) -> Result<(), CliError> {
    let config = load_config(cli)?;
    let (directory, source) = load_directory(cli, &config)?;
    note_source(cli, &directory, &source);

    let renderer = DirectoryRenderer::default();
    let page = renderer.render_page(&directory, &args.chamber);

    match output_mode(cli) {
        OutputMode::Human => {
            print!("{}", format_page(&page, &config.render));
        }
        OutputMode::Json => {
            let payload = json!({
                "command": "show",
                "ts": timestamp(),
                "slug": args.chamber,
                "found": matches!(page, PageView::Chamber(_)),
                "result": serde_json::to_value(&page)?,
            });
            write_json_line(&payload)?;
        }
    }
    Ok(())
}

fn chamber_committees(
    directory: &Directory,
    args: &CommitteesArgs,
) -> Result<(String, Vec<Committee>), CliError> {
    let record = match &args.chamber {
        Some(slug) => directory
            .find(slug)
            .ok_or_else(|| CliError::User(format!("no chamber with slug {slug:?}")))?,
        None => directory
            .find_chamber_containing("Senate")
            .ok_or_else(|| CliError::User("no Senate chamber in this fixture".to_string()))?,
    };

    let committees = record
        .body
        .get("permanent_committees")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|item| serde_json::from_value::<Committee>(item.clone()).ok())
                .collect()
        })
        .unwrap_or_default();

    Ok((record.chamber.clone(), committees))
}

fn run_committees(cli: &Cli, args: &CommitteesArgs) -> Result<(), CliError> {
    let config = load_config(cli)?;
    let (directory, source) = load_directory(cli, &config)?;
    note_source(cli, &directory, &source);

    let (chamber_name, committees) = chamber_committees(&directory, args)?;
    let query = args.search.as_deref().unwrap_or("");
    let filtered = filter_committees(&committees, query);

    match output_mode(cli) {
        OutputMode::Json => {
            let hits: Vec<Value> = filtered
                .iter()
                .map(|c| json!({"committee": c.committee, "chairperson": c.chairperson}))
                .collect();
            let payload = json!({
                "command": "committees",
                "ts": timestamp(),
                "chamber": chamber_name,
                "total": committees.len(),
                "query": query,
                "committees": hits,
            });
            write_json_line(&payload)?;
        }
        OutputMode::Human => {
            if !cli.quiet {
                println!("{}", format!("{chamber_name} Committees").bold());
                println!(
                    "{} permanent committees{}",
                    committees.len(),
                    if query.is_empty() {
                        String::new()
                    } else {
                        format!(", {} matching {query:?}", filtered.len())
                    }
                );
                println!();
            }
            if filtered.is_empty() {
                println!("No committees found");
                println!("Try adjusting your search term.");
            } else {
                for committee in &filtered {
                    println!("* {}", committee.committee.bold());
                    println!("  Chairperson: {}", committee.chairperson);
                }
            }
        }
    }
    Ok(())
}

fn run_validate(cli: &Cli) -> Result<(), CliError> {
    let config = load_config(cli)?;
    let override_path = cli
        .fixture
        .clone()
        .or_else(|| config.fixture.legislative_path.clone());

    let (directory, issues, source) = match override_path {
        Some(path) => {
            let (directory, issues) = Directory::load_path_with_report(&path)
                .map_err(|e| CliError::User(e.to_string()))?;
            (directory, issues, path.display().to_string())
        }
        None => {
            let (directory, issues) =
                Directory::bundled_with_report().map_err(|e| CliError::Runtime(e.to_string()))?;
            (directory, issues, "bundled".to_string())
        }
    };

    let error_count = issues
        .iter()
        .filter(|i| i.severity == IssueSeverity::Error)
        .count();
    let warning_count = issues.len() - error_count;

    match output_mode(cli) {
        OutputMode::Json => {
            let payload = json!({
                "command": "validate",
                "ts": timestamp(),
                "source": source,
                "chambers": directory.chambers().len(),
                "errors": error_count,
                "warnings": warning_count,
                "issues": serde_json::to_value(&issues)?,
            });
            write_json_line(&payload)?;
        }
        OutputMode::Human => {
            if !cli.quiet {
                println!(
                    "Validated {source}: {} chamber(s), {error_count} error(s), {warning_count} warning(s)",
                    directory.chambers().len(),
                );
            }
            for issue in &issues {
                let line = issue.to_string();
                match issue.severity {
                    IssueSeverity::Error => println!("  {}", line.red()),
                    IssueSeverity::Warning => {
                        if !cli.quiet {
                            println!("  {}", line.yellow());
                        }
                    }
                }
            }
        }
    }

    if error_count > 0 {
        return Err(CliError::User(format!(
            "fixture validation failed with {error_count} error(s)"
        )));
    }
    Ok(())
}

fn run_split(cli: &Cli, args: &SplitArgs) -> Result<(), CliError> {
    let report =
        split_regions(&args.input, &args.out_dir).map_err(|e| CliError::Runtime(e.to_string()))?;

    for skipped in &report.skipped {
        eprintln!(
            "govdir: skipping region without slug: {} ({})",
            skipped.name, skipped.reason
        );
    }

    match output_mode(cli) {
        OutputMode::Json => {
            let payload = json!({
                "command": "split",
                "ts": timestamp(),
                "input": args.input.to_string_lossy(),
                "report": serde_json::to_value(&report)?,
            });
            write_json_line(&payload)?;
        }
        OutputMode::Human => {
            if !cli.quiet {
                println!(
                    "Wrote {} region file(s) to {}",
                    report.written,
                    report.out_dir.display()
                );
            }
        }
    }
    Ok(())
}
