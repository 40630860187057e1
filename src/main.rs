use std::collections::VecDeque;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;

use docstyle::checker::CheckRegistry;
use docstyle::cli::Cli;
use docstyle::config::{ConfigLoader, FileConfig, FileConfigLoader, build_config};
use docstyle::document::{Document, FileEncoding};
use docstyle::output::Summary;
use docstyle::scanner::{IgnoreFilter, find_files};
use docstyle::validator::Validator;
use docstyle::{EXIT_FAILURE, EXIT_SUCCESS, EXIT_VIOLATIONS};

fn main() {
    let cli = Cli::parse();
    let exit_code = match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_FAILURE
        }
    };
    std::process::exit(exit_code);
}

fn load_file_config(cli: &Cli) -> docstyle::Result<Option<FileConfig>> {
    if cli.no_config {
        return Ok(None);
    }
    let loader = FileConfigLoader::new();
    if cli.config.is_empty() {
        return loader.load();
    }
    for path in &cli.config {
        if path.is_file() {
            return loader.load_from_path(path).map(Some);
        }
        println!(
            "Configuration file {} does not exist...ignoring",
            path.display()
        );
    }
    Ok(None)
}

fn run(cli: &Cli) -> docstyle::Result<i32> {
    let file_config = load_file_config(cli)?;
    let config = build_config(file_config, cli)?;
    let encoding = config
        .file_encoding
        .as_deref()
        .filter(|label| !label.is_empty())
        .map(FileEncoding::from_label)
        .transpose()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if !config.quiet {
        writeln!(out, "Scanning...")?;
    }
    let filter = IgnoreFilter::new(&config.ignore_path)?;
    let paths = if cli.paths.is_empty() {
        vec![PathBuf::from(".")]
    } else {
        cli.paths.clone()
    };

    let mut files = VecDeque::new();
    let mut files_ignored = 0;
    for (path, ignorable) in find_files(&paths, &config.extensions, &filter)? {
        if ignorable {
            files_ignored += 1;
            if config.verbose {
                writeln!(out, "  Ignoring '{}'", path.display())?;
            }
        } else {
            if config.verbose {
                writeln!(out, "  Selecting '{}'", path.display())?;
            }
            files.push_back(Document::load(path, encoding, &config.default_extension)?);
        }
    }
    let files_selected = files.len();

    let registry = CheckRegistry::with_builtins();
    let checks = registry.instantiate(&config);

    if !config.quiet {
        writeln!(out, "Validating...")?;
    }
    let validator = Validator::new(&config, &checks);
    let error_counts = validator.validate(&mut files, &mut out)?;

    let summary = Summary {
        files_selected,
        files_ignored,
        error_counts,
    };
    let total_errors = summary.total_errors();
    if !config.quiet {
        writeln!(out, "{}", summary.render())?;
    }

    Ok(if total_errors > 0 {
        EXIT_VIOLATIONS
    } else {
        EXIT_SUCCESS
    })
}
