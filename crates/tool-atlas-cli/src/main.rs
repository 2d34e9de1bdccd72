// crates/tool-atlas-cli/src/main.rs
// ============================================================================
// Module: Tool Atlas CLI Entry Point
// Description: Command dispatcher for the display server and catalog queries.
// Purpose: Provide a localized CLI for serving, browsing, and validating the catalog.
// Dependencies: clap, serde, serde_json, thiserror, tokio, tool-atlas-config,
//               tool-atlas-core, tool-atlas-views
// ============================================================================

//! ## Overview
//! The Tool Atlas CLI starts the read-only display server and answers the same
//! questions from the terminal: list tools through any design's pipeline, show
//! one tool, print facet counts, describe the designs, and render a page to a
//! file. All user-facing strings are routed through the i18n catalog, and the
//! `--lang` choice also selects which catalog text is searched and printed.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt::Write as _;
use std::fs;
use std::fs::File;
use std::io::Read;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::ArgAction;
use clap::Args;
use clap::CommandFactory;
use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use serde::Serialize;
use thiserror::Error;
use tool_atlas_cli::i18n::Locale;
use tool_atlas_cli::i18n::current_locale;
use tool_atlas_cli::i18n::set_locale;
use tool_atlas_cli::serve_policy::BindOutcome;
use tool_atlas_cli::serve_policy::enforce_local_only;
use tool_atlas_cli::serve_policy::resolve_allow_non_loopback;
use tool_atlas_cli::t;
use tool_atlas_config::DisplayConfig;
use tool_atlas_config::ToolAtlasConfig;
use tool_atlas_config::config_toml_example;
use tool_atlas_core::Catalog;
use tool_atlas_core::FacetCounts;
use tool_atlas_core::Tool;
use tool_atlas_core::ViewVariant;
use tool_atlas_core::catalog::MAX_CATALOG_BYTES;
use tool_atlas_core::core::labels::category_label;
use tool_atlas_core::core::labels::department_label;
use tool_atlas_core::core::labels::level_label;
use tool_atlas_core::core::labels::tier_description;
use tool_atlas_core::core::labels::tier_label;
use tool_atlas_core::core::labels::untiered_label;
use tool_atlas_views::DisplayServer;
use tool_atlas_views::PageModel;
use tool_atlas_views::PageQuery;
use tool_atlas_views::PageState;
use tool_atlas_views::ToolsResponse;
use tool_atlas_views::design_entries;
use tool_atlas_views::render_page;

// ============================================================================
// SECTION: Limits
// ============================================================================

/// Environment variable for CLI locale selection.
const LANG_ENV: &str = "TOOL_ATLAS_LANG";
/// Departments listed per tool in text output before the overflow marker.
const DEPARTMENT_PREVIEW_LIMIT: usize = 3;

// ============================================================================
// SECTION: CLI Types
// ============================================================================

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(name = "tool-atlas", disable_help_subcommand = true, disable_version_flag = true)]
struct Cli {
    /// Print version information and exit.
    #[arg(long = "version", action = ArgAction::SetTrue, global = true)]
    show_version: bool,
    /// Preferred output language (overrides `TOOL_ATLAS_LANG`).
    #[arg(long, value_enum, value_name = "LANG", global = true)]
    lang: Option<LangArg>,
    /// Selected subcommand to execute.
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Supported CLI subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the display server.
    Serve(ServeCommand),
    /// List tools through a design's filter and ordering pipeline.
    List(ListCommand),
    /// Show one tool in full.
    Show(ShowCommand),
    /// Print catalog-wide facet counts.
    Facets(FacetsCommand),
    /// Describe every design variant.
    Designs(DesignsCommand),
    /// Render a page for a query string as HTML.
    Render(RenderCommand),
    /// Catalog utilities.
    Catalog {
        /// Selected catalog subcommand.
        #[command(subcommand)]
        command: CatalogCommand,
    },
    /// Configuration utilities.
    Config {
        /// Selected config subcommand.
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

/// Configuration for the `serve` command.
#[derive(Args, Debug)]
struct ServeCommand {
    /// Optional config file path (defaults to tool-atlas.toml or env override).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Allow binding to non-loopback addresses.
    #[arg(long, action = ArgAction::SetTrue)]
    allow_non_loopback: bool,
}

/// Filter flags shared by listing commands.
#[derive(Args, Debug)]
struct FilterArgs {
    /// Design whose ordering applies (for example `bento`).
    #[arg(long, value_name = "DESIGN")]
    design: Option<String>,
    /// Category key (for example `agents`).
    #[arg(long, value_name = "CATEGORY")]
    category: Option<String>,
    /// Tier key (`tier1`, `tier2`, `tier3`, or `untiered`).
    #[arg(long, value_name = "TIER")]
    tier: Option<String>,
    /// Level key (`beginner`, `intermediate`, or `advanced`).
    #[arg(long, value_name = "LEVEL")]
    level: Option<String>,
    /// Case-insensitive search text matched in the selected language.
    #[arg(long = "query", short = 'q', value_name = "TEXT")]
    query: Option<String>,
}

/// Arguments for `list`.
#[derive(Args, Debug)]
struct ListCommand {
    /// Filter and ordering flags.
    #[command(flatten)]
    filters: FilterArgs,
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

/// Arguments for `show`.
#[derive(Args, Debug)]
struct ShowCommand {
    /// Tool identifier.
    #[arg(value_name = "ID")]
    id: String,
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

/// Arguments for `facets`.
#[derive(Args, Debug)]
struct FacetsCommand {
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

/// Arguments for `designs`.
#[derive(Args, Debug)]
struct DesignsCommand {
    /// Optional config file path; its default design is marked.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

/// Arguments for `render`.
#[derive(Args, Debug)]
struct RenderCommand {
    /// Page query string, as it would follow `/?` (for example `design=bento&lang=es`).
    #[arg(long, value_name = "QUERY", default_value = "")]
    query: String,
    /// Optional config file path supplying display defaults.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Write the page to this file instead of stdout.
    #[arg(long, value_name = "PATH")]
    output: Option<PathBuf>,
}

/// Catalog subcommands.
#[derive(Subcommand, Debug)]
enum CatalogCommand {
    /// Validate the built-in catalog or a catalog file.
    Validate(CatalogValidateCommand),
}

/// Arguments for `catalog validate`.
#[derive(Args, Debug)]
struct CatalogValidateCommand {
    /// Catalog JSON file to validate instead of the built-in catalog.
    #[arg(long, value_name = "PATH")]
    file: Option<PathBuf>,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Validate a Tool Atlas configuration file.
    Validate(ConfigValidateCommand),
    /// Print an example configuration file.
    Example,
}

/// Arguments for `config validate`.
#[derive(Args, Debug)]
struct ConfigValidateCommand {
    /// Optional config file path (defaults to tool-atlas.toml or env override).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

/// Output formats for query commands.
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
enum OutputFormat {
    /// Localized human-readable text.
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Supported CLI language selections.
#[derive(ValueEnum, Copy, Clone, Debug)]
enum LangArg {
    /// English.
    En,
    /// Spanish.
    Es,
}

/// Converts CLI language selections into locales.
impl From<LangArg> for Locale {
    fn from(value: LangArg) -> Self {
        match value {
            LangArg::En => Self::En,
            LangArg::Es => Self::Es,
        }
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// CLI error wrapper for localized error messages.
#[derive(Debug, Error)]
#[error("{message}")]
struct CliError {
    /// Human-readable error message.
    message: String,
}

impl CliError {
    /// Constructs a new [`CliError`] from a localized message.
    const fn new(message: String) -> Self {
        Self {
            message,
        }
    }
}

/// CLI result alias for fallible operations.
type CliResult<T> = Result<T, CliError>;

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// CLI entry point returning an exit code.
#[tokio::main(flavor = "multi_thread")]
async fn main() -> ExitCode {
    match run().await {
        Ok(code) => code,
        Err(err) => emit_error(&err.to_string()),
    }
}

/// Executes the CLI command dispatcher.
async fn run() -> CliResult<ExitCode> {
    let cli = Cli::parse();
    let env_lang = std::env::var(LANG_ENV).ok();
    let locale = resolve_locale(cli.lang, env_lang.as_deref())?;
    set_locale(locale);

    if cli.show_version {
        let version = env!("CARGO_PKG_VERSION");
        write_stdout_line(&t!("main.version", version = version))
            .map_err(|err| CliError::new(output_error("stdout", &err)))?;
        return Ok(ExitCode::SUCCESS);
    }

    let Some(command) = cli.command else {
        show_help()?;
        return Ok(ExitCode::SUCCESS);
    };

    match command {
        Commands::Serve(command) => command_serve(command).await,
        Commands::List(command) => command_list(&command),
        Commands::Show(command) => command_show(&command),
        Commands::Facets(command) => command_facets(&command),
        Commands::Designs(command) => command_designs(&command),
        Commands::Render(command) => command_render(&command),
        Commands::Catalog {
            command,
        } => command_catalog(command),
        Commands::Config {
            command,
        } => command_config(command),
    }
}

// ============================================================================
// SECTION: Serve Command
// ============================================================================

/// Executes the `serve` command.
async fn command_serve(command: ServeCommand) -> CliResult<ExitCode> {
    let config = ToolAtlasConfig::load(command.config.as_deref())
        .map_err(|err| CliError::new(t!("serve.config.load_failed", error = err)))?;
    let allow_non_loopback = resolve_allow_non_loopback(command.allow_non_loopback)
        .map_err(|err| CliError::new(err.to_string()))?;
    let bind_outcome = enforce_local_only(&config, allow_non_loopback)
        .map_err(|err| CliError::new(err.to_string()))?;
    if bind_outcome.network_exposed {
        warn_network_exposure(&bind_outcome)?;
    }

    let server = DisplayServer::from_config(config)
        .map_err(|err| CliError::new(t!("serve.init_failed", error = err)))?;
    write_stderr_line(&t!("serve.listening", addr = server.bind_addr()))
        .map_err(|err| CliError::new(output_error("stderr", &err)))?;
    server.serve().await.map_err(|err| CliError::new(t!("serve.failed", error = err)))?;

    Ok(ExitCode::SUCCESS)
}

/// Warns when the server is reachable beyond loopback.
fn warn_network_exposure(outcome: &BindOutcome) -> CliResult<()> {
    write_stderr_line(&t!("serve.warn.network_exposed", bind = outcome.bind_addr))
        .map_err(|err| CliError::new(output_error("stderr", &err)))
}

/// Emits the top-level help message for the CLI.
fn show_help() -> CliResult<()> {
    let mut command = Cli::command();
    command.print_help().map_err(|err| CliError::new(output_error("stdout", &err)))?;
    write_stdout_line("").map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(())
}

// ============================================================================
// SECTION: Query Commands
// ============================================================================

/// Executes `list`.
fn command_list(command: &ListCommand) -> CliResult<ExitCode> {
    let catalog = builtin_catalog()?;
    let design = parse_design(command.filters.design.as_deref())?;
    let query = filter_query(&command.filters, design);
    let display = DisplayConfig::default();
    let mut state = PageState::resolve(&query, &display);
    state.selection = query.selection();
    let model = PageModel::build(catalog, state);

    if command.format == OutputFormat::Json {
        write_json(&ToolsResponse::from_model(&model))?;
        return Ok(ExitCode::SUCCESS);
    }

    let locale = model.state.locale;
    let mut output = String::new();
    for tool in &model.tools {
        let _ = writeln!(
            output,
            "{:<16} {:<20} {:<22} {:<16} {}",
            tool.id.as_str(),
            tool.name,
            category_label(tool.category, locale),
            tool.tier.map_or_else(|| untiered_label(locale), |tier| tier_label(tier, locale)),
            tool.starting_price().map_or_else(|| t!("show.contact_pricing"), str::to_string),
        );
    }
    if model.is_empty() {
        output.push_str(&t!("list.empty"));
    } else {
        output.push_str(&t!("list.summary", count = model.tools.len()));
    }
    output.push('\n');
    write_stdout_bytes(output.as_bytes()).map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

/// Executes `show`.
fn command_show(command: &ShowCommand) -> CliResult<ExitCode> {
    let catalog = builtin_catalog()?;
    let tool = catalog
        .get(command.id.trim())
        .ok_or_else(|| CliError::new(t!("tool.not_found", id = command.id.trim())))?;
    if command.format == OutputFormat::Json {
        write_json(tool)?;
        return Ok(ExitCode::SUCCESS);
    }
    let output = render_tool_text(tool, current_locale());
    write_stdout_bytes(output.as_bytes()).map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

/// Executes `facets`.
fn command_facets(command: &FacetsCommand) -> CliResult<ExitCode> {
    let catalog = builtin_catalog()?;
    let facets = FacetCounts::from_tools(catalog.tools());
    if command.format == OutputFormat::Json {
        write_json(&facets)?;
        return Ok(ExitCode::SUCCESS);
    }

    let locale = current_locale();
    let mut output = String::new();
    output.push_str(&t!("facets.total", count = facets.total));
    output.push_str("\n\n");
    output.push_str(&t!("facets.categories"));
    output.push('\n');
    for (category, count) in &facets.categories {
        let _ = writeln!(output, "  {:<24} {count}", category_label(*category, locale));
    }
    output.push('\n');
    output.push_str(&t!("facets.tiers"));
    output.push('\n');
    for (tier, count) in &facets.tiers {
        let _ = writeln!(output, "  {:<24} {count}", tier_label(*tier, locale));
    }
    let _ = writeln!(output, "  {:<24} {}", untiered_label(locale), facets.untiered);
    output.push('\n');
    output.push_str(&t!("facets.levels"));
    output.push('\n');
    for (level, count) in &facets.levels {
        let _ = writeln!(output, "  {:<24} {count}", level_label(*level, locale));
    }
    write_stdout_bytes(output.as_bytes()).map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

/// Executes `designs`.
fn command_designs(command: &DesignsCommand) -> CliResult<ExitCode> {
    let config = load_config(command.config.as_deref())?;
    let entries = design_entries(config.display.default_design);
    if command.format == OutputFormat::Json {
        write_json(&entries)?;
        return Ok(ExitCode::SUCCESS);
    }

    let mut output = String::new();
    for entry in &entries {
        let marker = if entry.default { t!("designs.default_marker") } else { String::new() };
        output.push_str(
            format!(
                "{:<12} {:<30} {:<14} {}",
                entry.key.as_str(),
                entry.name,
                entry.capabilities.layout.as_str(),
                marker
            )
            .trim_end(),
        );
        output.push('\n');
    }
    write_stdout_bytes(output.as_bytes()).map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

/// Executes `render`.
fn command_render(command: &RenderCommand) -> CliResult<ExitCode> {
    let config = load_config(command.config.as_deref())?;
    let catalog = builtin_catalog()?;
    let query = PageQuery::parse(command.query.trim_start_matches('?'));
    let state = PageState::resolve(&query, &config.display);
    let html = render_page(&PageModel::build(catalog, state), &config.display);

    match &command.output {
        Some(path) => {
            fs::write(path, html.as_bytes()).map_err(|err| {
                CliError::new(t!("render.write_failed", path = path.display(), error = err))
            })?;
            write_stderr_line(&t!("render.written", path = path.display()))
                .map_err(|err| CliError::new(output_error("stderr", &err)))?;
        }
        None => {
            write_stdout_line(&html).map_err(|err| CliError::new(output_error("stdout", &err)))?;
        }
    }
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Catalog Commands
// ============================================================================

/// Dispatches catalog subcommands.
fn command_catalog(command: CatalogCommand) -> CliResult<ExitCode> {
    match command {
        CatalogCommand::Validate(command) => command_catalog_validate(&command),
    }
}

/// Executes `catalog validate`.
fn command_catalog_validate(command: &CatalogValidateCommand) -> CliResult<ExitCode> {
    let count = match &command.file {
        Some(path) => load_catalog_file(path)?.len(),
        None => builtin_catalog()?.len(),
    };
    write_stdout_line(&t!("catalog.validate.ok", count = count))
        .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Config Commands
// ============================================================================

/// Dispatches config subcommands.
fn command_config(command: ConfigCommand) -> CliResult<ExitCode> {
    match command {
        ConfigCommand::Validate(command) => command_config_validate(&command),
        ConfigCommand::Example => command_config_example(),
    }
}

/// Executes the config validation command.
fn command_config_validate(command: &ConfigValidateCommand) -> CliResult<ExitCode> {
    let _config = load_config(command.config.as_deref())?;
    write_stdout_line(&t!("config.validate.ok"))
        .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

/// Executes `config example`.
fn command_config_example() -> CliResult<ExitCode> {
    write_stdout_bytes(config_toml_example().as_bytes())
        .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Query Helpers
// ============================================================================

/// Resolves the CLI locale from flags or environment.
fn resolve_locale(lang: Option<LangArg>, env_lang: Option<&str>) -> CliResult<Locale> {
    if let Some(lang) = lang {
        return Ok(lang.into());
    }
    if let Some(value) = env_lang {
        return Locale::parse(value).ok_or_else(|| {
            CliError::new(t!("i18n.lang.invalid_env", env = LANG_ENV, value = value))
        });
    }
    Ok(Locale::En)
}

/// Parses a `--design` value, rejecting unknown keys.
fn parse_design(value: Option<&str>) -> CliResult<Option<ViewVariant>> {
    let Some(value) = value else {
        return Ok(None);
    };
    ViewVariant::parse(value).map(Some).ok_or_else(|| {
        let expected: Vec<&str> = ViewVariant::ALL.iter().map(|variant| variant.as_str()).collect();
        CliError::new(t!("design.unknown", value = value, expected = expected.join(", ")))
    })
}

/// Builds the page query equivalent of the filter flags.
fn filter_query(filters: &FilterArgs, design: Option<ViewVariant>) -> PageQuery {
    PageQuery {
        design: design.map(|variant| variant.as_str().to_string()),
        lang: Some(current_locale().as_str().to_string()),
        category: filters.category.clone(),
        tier: filters.tier.clone(),
        level: filters.level.clone(),
        q: filters.query.clone(),
        ..PageQuery::default()
    }
}

/// Formats one tool for the terminal.
fn render_tool_text(tool: &Tool, locale: Locale) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "{} ({})", tool.name, tool.id);
    output.push_str(tool.short_description.text(locale));
    output.push_str("\n\n");
    output.push_str(tool.description.text(locale));
    output.push_str("\n\n");
    let _ = writeln!(output, "{}: {}", t!("show.category"), category_label(tool.category, locale));
    let _ = writeln!(output, "{}: {}", t!("show.level"), level_label(tool.level, locale));
    let tier = tool.tier.map_or_else(
        || untiered_label(locale).to_string(),
        |tier| format!("{} ({})", tier_label(tier, locale), tier_description(tier, locale)),
    );
    let _ = writeln!(output, "{}: {tier}", t!("show.tier"));
    if !tool.departments.is_empty() {
        let preview = tool.department_preview(DEPARTMENT_PREVIEW_LIMIT);
        let mut departments: Vec<String> = preview
            .shown
            .iter()
            .map(|department| department_label(*department, locale).to_string())
            .collect();
        if preview.hidden > 0 {
            departments.push(format!("+{}", preview.hidden));
        }
        let _ = writeln!(output, "{}: {}", t!("show.departments"), departments.join(", "));
    }

    output.push('\n');
    output.push_str(&t!("show.pricing"));
    output.push('\n');
    if tool.pricing.is_empty() {
        let _ = writeln!(output, "  {}", t!("show.contact_pricing"));
    }
    for plan in &tool.pricing {
        let _ = writeln!(
            output,
            "  - {}: {} ({})",
            plan.plan,
            plan.price,
            plan.features.text(locale)
        );
    }
    push_bullets(&mut output, &t!("show.use_cases"), tool.use_cases.items(locale));
    push_bullets(&mut output, &t!("show.highlights"), tool.highlights.items(locale));
    output.push('\n');
    let _ = writeln!(output, "{}: {}", t!("show.url"), tool.url);
    output
}

/// Appends a titled bullet list.
fn push_bullets(output: &mut String, title: &str, items: &[String]) {
    output.push('\n');
    output.push_str(title);
    output.push('\n');
    for item in items {
        let _ = writeln!(output, "  - {item}");
    }
}

// ============================================================================
// SECTION: Input Helpers
// ============================================================================

/// Returns the built-in catalog or a localized load error.
fn builtin_catalog() -> CliResult<&'static Catalog> {
    Catalog::builtin().map_err(|err| CliError::new(t!("catalog.load_failed", error = err)))
}

/// Loads configuration or returns a localized load error.
fn load_config(path: Option<&Path>) -> CliResult<ToolAtlasConfig> {
    ToolAtlasConfig::load(path).map_err(|err| CliError::new(t!("config.load_failed", error = err)))
}

/// Reads and validates a catalog file.
fn load_catalog_file(path: &Path) -> CliResult<Catalog> {
    let bytes = read_bytes_with_limit(path, MAX_CATALOG_BYTES).map_err(|err| match err {
        ReadLimitError::Io(err) => {
            CliError::new(t!("catalog.read_failed", path = path.display(), error = err))
        }
        ReadLimitError::TooLarge {
            size,
            limit,
        } => CliError::new(t!(
            "catalog.read_too_large",
            path = path.display(),
            size = size,
            limit = limit
        )),
    })?;
    let payload = String::from_utf8(bytes).map_err(|err| {
        CliError::new(t!("catalog.read_failed", path = path.display(), error = err))
    })?;
    Catalog::from_json(&payload).map_err(|err| CliError::new(t!("catalog.load_failed", error = err)))
}

/// Bounded file read failures.
#[derive(Debug)]
enum ReadLimitError {
    /// File I/O failure.
    Io(std::io::Error),
    /// File size exceeds the configured limit.
    TooLarge {
        /// Actual size in bytes.
        size: u64,
        /// Allowed limit in bytes.
        limit: usize,
    },
}

/// Reads a file from disk while enforcing a hard size limit.
fn read_bytes_with_limit(path: &Path, max_bytes: usize) -> Result<Vec<u8>, ReadLimitError> {
    let file = File::open(path).map_err(ReadLimitError::Io)?;
    let size = file.metadata().map_err(ReadLimitError::Io)?.len();
    let limit = u64::try_from(max_bytes).unwrap_or(u64::MAX);
    if size > limit {
        return Err(ReadLimitError::TooLarge {
            size,
            limit: max_bytes,
        });
    }

    let mut limited = file.take(limit.saturating_add(1));
    let mut bytes = Vec::new();
    limited.read_to_end(&mut bytes).map_err(ReadLimitError::Io)?;
    if bytes.len() > max_bytes {
        return Err(ReadLimitError::TooLarge {
            size: u64::try_from(bytes.len()).unwrap_or(u64::MAX),
            limit: max_bytes,
        });
    }
    Ok(bytes)
}

// ============================================================================
// SECTION: Output Helpers
// ============================================================================

/// Writes a single line to stdout.
fn write_stdout_line(message: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    writeln!(&mut stdout, "{message}")
}

/// Writes raw bytes to stdout without adding a newline.
fn write_stdout_bytes(bytes: &[u8]) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    stdout.write_all(bytes)
}

/// Writes pretty JSON followed by a newline to stdout.
fn write_json<T: Serialize + ?Sized>(value: &T) -> CliResult<()> {
    let mut bytes = serde_json::to_vec_pretty(value)
        .map_err(|err| CliError::new(t!("output.json_failed", error = err)))?;
    bytes.push(b'\n');
    write_stdout_bytes(&bytes).map_err(|err| CliError::new(output_error("stdout", &err)))
}

/// Writes a single line to stderr.
fn write_stderr_line(message: &str) -> std::io::Result<()> {
    let mut stderr = std::io::stderr();
    writeln!(&mut stderr, "{message}")
}

/// Formats a localized output error message.
fn output_error(stream: &str, error: &std::io::Error) -> String {
    let stream_label = match stream {
        "stdout" => t!("output.stream.stdout"),
        "stderr" => t!("output.stream.stderr"),
        _ => t!("output.stream.unknown"),
    };
    t!("output.write_failed", stream = stream_label, error = error)
}

/// Emits an error message to stderr and returns a failure exit code.
fn emit_error(message: &str) -> ExitCode {
    let _ = write_stderr_line(message);
    ExitCode::FAILURE
}
