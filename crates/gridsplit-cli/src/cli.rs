use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use gridsplit_layout::{AreaGrid, LayoutConfig, SplitLayout, extract_areas, presets};
use serde::Serialize;

use crate::error::{CliError, Result};

#[derive(Debug, Parser)]
#[command(
    name = "gridsplit",
    about = "Compute panel and splitter geometry from grid-template-areas",
    version
)]
pub struct Cli {
    /// Print single-line JSON.
    #[arg(long, global = true)]
    pub compact: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Validate a template and print its grid and area lines.
    Parse(TemplateArgs),

    /// Build a full split layout (areas, gutters, track lists).
    Layout(LayoutArgs),

    /// Print the built-in layout presets.
    Presets,
}

#[derive(Debug, Clone, Default, Args)]
pub struct TemplateArgs {
    /// Template text; `-` reads standard input.
    #[arg(value_name = "TEMPLATE")]
    pub template: Option<String>,

    /// Template text, as a flag.
    #[arg(
        long = "template",
        value_name = "TEMPLATE",
        conflicts_with_all = ["template", "file"]
    )]
    pub template_flag: Option<String>,

    /// Read the template from a file.
    #[arg(long, conflicts_with = "template")]
    pub file: Option<PathBuf>,
}

impl TemplateArgs {
    /// Template text from either the positional argument or `--template`.
    fn text(&self) -> Option<&str> {
        self.template.as_deref().or(self.template_flag.as_deref())
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct LayoutArgs {
    #[command(flatten)]
    pub source: TemplateArgs,

    /// Layout config file (`.toml` or `.json`).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Start from a built-in preset, by name or id.
    #[arg(long)]
    pub preset: Option<String>,

    /// Override `grid-template-columns`.
    #[arg(long)]
    pub columns: Option<String>,

    /// Override `grid-template-rows`.
    #[arg(long)]
    pub rows: Option<String>,

    /// Splitter track size, e.g. `4px`.
    #[arg(long = "splitter-size")]
    pub splitter_size: Option<String>,
}

pub fn run_from_env() -> Result<()> {
    let cli = Cli::parse();
    let stdout = std::io::stdout();
    run(cli, &mut stdout.lock())
}

pub fn run(cli: Cli, out: &mut impl Write) -> Result<()> {
    let compact = cli.compact;
    match cli.command {
        Commands::Parse(args) => {
            let report = parse_report(&args)?;
            emit(out, &report, compact)
        }
        Commands::Layout(args) => {
            let layout = build_layout(&args)?;
            emit(out, &layout, compact)
        }
        Commands::Presets => emit(out, presets::builtin(), compact),
    }
}

fn emit<T: Serialize + ?Sized>(out: &mut impl Write, value: &T, compact: bool) -> Result<()> {
    if compact {
        serde_json::to_writer(&mut *out, value)?;
    } else {
        serde_json::to_writer_pretty(&mut *out, value)?;
    }
    writeln!(out)?;
    Ok(())
}

#[derive(Debug, Serialize)]
struct ParseReport {
    rows: usize,
    cols: usize,
    names: Vec<String>,
    grid: AreaGrid,
    areas: gridsplit_layout::AreaMap,
}

fn parse_report(args: &TemplateArgs) -> Result<ParseReport> {
    let Some(template) = read_template(args)? else {
        return Err(CliError::invalid("a template or --file is required"));
    };
    let grid = AreaGrid::parse(&template)?;
    Ok(ParseReport {
        rows: grid.rows(),
        cols: grid.cols(),
        names: grid.area_names().to_vec(),
        areas: extract_areas(&grid),
        grid,
    })
}

fn read_template(args: &TemplateArgs) -> Result<Option<String>> {
    if let Some(path) = &args.file {
        return Ok(Some(std::fs::read_to_string(path)?));
    }
    match args.text() {
        Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(Some(buf))
        }
        Some(text) => Ok(Some(text.to_owned())),
        None => Ok(None),
    }
}

/// Resolve the effective config: preset or config file first, then
/// command-line overrides.
pub fn resolve_config(args: &LayoutArgs) -> Result<LayoutConfig> {
    let mut config = match (&args.preset, &args.config) {
        (Some(_), Some(_)) => {
            return Err(CliError::invalid("--preset and --config are mutually exclusive"));
        }
        (Some(key), None) => {
            let preset = key
                .parse::<u32>()
                .ok()
                .and_then(presets::find)
                .or_else(|| presets::find_by_name(key))
                .ok_or_else(|| CliError::PresetNotFound { name: key.clone() })?;
            preset.to_config(gridsplit_layout::DEFAULT_SPLITTER_SIZE)
        }
        (None, Some(path)) => load_config(path)?,
        (None, None) => LayoutConfig::default(),
    };

    let explicit_template = read_template(&args.source)?;
    if explicit_template.is_none() && args.preset.is_none() && args.config.is_none() {
        return Err(CliError::invalid(
            "one of a template, --file, --preset or --config is required",
        ));
    }
    if let Some(template) = explicit_template {
        config.template = template;
        // Tracks from a preset or file describe a different grid.
        config.grid_template_columns = None;
        config.grid_template_rows = None;
    }
    if let Some(columns) = &args.columns {
        config.grid_template_columns = Some(columns.clone());
    }
    if let Some(rows) = &args.rows {
        config.grid_template_rows = Some(rows.clone());
    }
    if let Some(size) = &args.splitter_size {
        config.splitter_size = size.clone();
    }

    tracing::debug!(?config, "resolved layout config");
    Ok(config)
}

fn load_config(path: &Path) -> Result<LayoutConfig> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => Ok(LayoutConfig::from_toml_file(path)?),
        Some("json") => Ok(LayoutConfig::from_json_file(path)?),
        _ => Err(CliError::UnsupportedConfigFormat {
            path: path.to_path_buf(),
        }),
    }
}

fn build_layout(args: &LayoutArgs) -> Result<SplitLayout> {
    let config = resolve_config(args)?;
    let problems = config.validate();
    if !problems.is_empty() {
        return Err(CliError::InvalidConfig { problems });
    }
    Ok(SplitLayout::build(&config)?)
}
