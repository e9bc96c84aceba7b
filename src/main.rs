use std::fs;
use std::path::Path;

use clap::Parser;

use solsniff::cli::{Cli, ColorChoice};
use solsniff::config::{Config, ConfigLoader, FileConfigLoader, MIN_WRAP_WIDTH};
use solsniff::document::SourceDocument;
use solsniff::engine::RuleEngine;
use solsniff::error::SolsniffError;
use solsniff::output::{ColorMode, JsonFormatter, OutputFormat, ReportFormatter, TextFormatter};
use solsniff::{EXIT_CONFIG_ERROR, EXIT_INPUT_ERROR, EXIT_SUCCESS};

const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

fn main() {
    let cli = Cli::parse();
    std::process::exit(run_scan(&cli));
}

fn run_scan(cli: &Cli) -> i32 {
    match run_scan_impl(cli) {
        Ok(exit_code) => exit_code,
        Err(e @ SolsniffError::FileRead { .. }) => {
            eprintln!("Error: {e}");
            EXIT_INPUT_ERROR
        }
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_scan_impl(cli: &Cli) -> solsniff::Result<i32> {
    // 1. Load configuration
    let config = load_config(cli.config.as_deref(), cli.no_config)?;

    // 2. Apply CLI argument overrides
    let format = match cli.format {
        Some(format) => format,
        None => config.output_format()?,
    };
    let width = cli.width.unwrap_or(config.output.width);
    if width < MIN_WRAP_WIDTH {
        return Err(SolsniffError::Config(format!(
            "--width must be at least {MIN_WRAP_WIDTH}, got {width}"
        )));
    }
    let mut disabled = config.rules.disabled.clone();
    disabled.extend(cli.disable.iter().cloned());

    // 3. Read the source file; a missing or unreadable input is fatal
    // before any rule runs
    let raw = fs::read_to_string(&cli.file).map_err(|e| SolsniffError::FileRead {
        path: cli.file.clone(),
        source: e,
    })?;
    let document = SourceDocument::new(raw);

    // 4. Build the rule engine
    let mut engine = RuleEngine::with_builtin_rules()?;
    engine.disable(&disabled)?;

    // 5. Scan
    let findings = engine.scan(&document);

    // 6. Format output
    let color_mode = color_choice_to_mode(cli.color);
    let output = match format {
        OutputFormat::Text => TextFormatter::with_width(color_mode, width).format(&findings)?,
        OutputFormat::Json => JsonFormatter.format(&findings)?,
    };

    // 7. Write output
    write_output(cli.output.as_deref(), &output, cli.quiet)?;

    Ok(EXIT_SUCCESS)
}

fn load_config(config_path: Option<&Path>, no_config: bool) -> solsniff::Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

fn write_output(output_path: Option<&Path>, content: &str, quiet: bool) -> solsniff::Result<()> {
    if let Some(path) = output_path {
        fs::write(path, content)?;
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
