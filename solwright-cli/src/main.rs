use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use solwright_codegen::ContractPrinter;
use solwright_features::{build_erc20, BuildError, Erc20Options};
use solwright_model::{linearize, Contract, Linearization};

const DEFAULT_OPTIONS_FILE: &str = "solwright.json";

#[derive(Parser)]
#[command(name = "solwright", about = "Solwright – composable token contract generator")]
#[command(version, propagate_version = true)]
struct Cli {
    /// Show debug logs on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write a default options file
    Init {
        /// Options file to create
        #[arg(default_value = DEFAULT_OPTIONS_FILE)]
        path: PathBuf,
    },
    /// Compose a token and show a summary of the contract model
    Check {
        /// Options file
        #[arg(default_value = DEFAULT_OPTIONS_FILE)]
        path: PathBuf,
        /// Dump the contract model as JSON instead
        #[arg(long)]
        json: bool,
    },
    /// Generate Solidity source for a token
    Generate {
        /// Options file
        #[arg(default_value = DEFAULT_OPTIONS_FILE)]
        path: PathBuf,
        /// Output directory (prints to stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_tracing(cli.verbose) {
        eprintln!("{} {e:#}", "warning:".yellow().bold());
    }

    let result = match cli.command {
        Command::Init { path } => cmd_init(&path),
        Command::Check { path, json } => cmd_check(&path, json),
        Command::Generate { path, output } => cmd_generate(&path, output.as_deref()),
    };

    match result {
        Ok(success) => {
            if success {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1)
            }
        }
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            ExitCode::from(1)
        }
    }
}

/// Log to stderr; `SOLWRIGHT_LOG` or `RUST_LOG` pick the filter unless `-v` is given.
fn init_tracing(verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env("SOLWRIGHT_LOG")
            .or_else(|_| EnvFilter::try_from_default_env())
            .unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing subscriber: {e}"))
}

fn load_options(path: &Path) -> Result<Erc20Options> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read options '{}'", path.display()))?;
    let options = Erc20Options::from_json(&json)
        .with_context(|| format!("Failed to parse options '{}'", path.display()))?;
    debug!(path = %path.display(), "loaded options");
    Ok(options)
}

fn report_build_error(e: &BuildError) {
    eprintln!("{} {}", "✗".red().bold(), e);
}

fn cmd_init(path: &Path) -> Result<bool> {
    if path.exists() {
        anyhow::bail!("'{}' already exists", path.display());
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory '{}'", parent.display()))?;
    }

    let json = Erc20Options::default().to_json_pretty()?;
    std::fs::write(path, json + "\n")
        .with_context(|| format!("Failed to write '{}'", path.display()))?;

    println!(
        "{} Created options file {}",
        "✓".green().bold(),
        path.display().to_string().bold()
    );
    println!();
    println!("Next steps:");
    println!("  {} check {}", "solwright".dimmed(), path.display());
    println!("  {} generate {} -o contracts", "solwright".dimmed(), path.display());

    Ok(true)
}

fn cmd_check(path: &Path, json: bool) -> Result<bool> {
    let options = load_options(path)?;

    let contract = match build_erc20(&options) {
        Ok(contract) => contract,
        Err(e) => {
            report_build_error(&e);
            return Ok(false);
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&contract)?);
        return Ok(true);
    }

    let linearization = match linearize(&contract) {
        Ok(linearization) => linearization,
        Err(e) => {
            eprintln!("{} {e}", "✗".red().bold());
            return Ok(false);
        }
    };

    println!("{}", "Token".bold().underline());
    println!("  Contract:  {}", contract.name());
    println!(
        "  Network:   {} ({})",
        options.network.as_str(),
        options.network.standard()
    );
    println!("  Access:    {}", options.access.as_str());
    println!("  License:   {}", contract.license());

    println!();
    println!("{}", "Parents".bold().underline());
    for parent in linearization.parents() {
        println!("  {} {}", parent.name(), parent.path().dimmed());
    }

    print_functions(&contract, &linearization);

    let variables: Vec<_> = contract.variables().collect();
    if !variables.is_empty() {
        println!();
        println!("{}", "Variables".bold().underline());
        for variable in variables {
            println!("  {}", variable);
        }
    }

    println!();
    println!("{} Contract composes cleanly", "✓".green().bold());
    Ok(true)
}

fn print_functions(contract: &Contract, linearization: &Linearization<'_>) {
    let functions: Vec<_> = contract.functions().collect();
    if functions.is_empty() {
        return;
    }

    println!();
    println!("{}", "Functions".bold().underline());
    for function in functions {
        let mut line = format!("  {}", function.declaration().signature());
        let modifiers: Vec<&str> = function.modifiers().collect();
        if !modifiers.is_empty() {
            line.push_str(&format!(" [{}]", modifiers.join(", ")));
        }
        if !function.overrides().is_empty() {
            let overrides = linearization.sort(function.overrides());
            line.push_str(&format!(" {} {}", "overrides".dimmed(), overrides.join(", ")));
        }
        println!("{}", line);
    }
}

fn cmd_generate(path: &Path, output: Option<&Path>) -> Result<bool> {
    let options = load_options(path)?;

    let contract = match build_erc20(&options) {
        Ok(contract) => contract,
        Err(e) => {
            report_build_error(&e);
            return Ok(false);
        }
    };

    let generated = ContractPrinter::new()
        .generate(&contract)
        .with_context(|| format!("Failed to print contract '{}'", contract.name()))?;

    match output {
        None => print!("{}", generated.source()),
        Some(dir) => {
            let written = generated
                .write_to_disk(dir)
                .with_context(|| format!("Failed to write to '{}'", dir.display()))?;
            eprintln!(
                "{} Generated {} → {}",
                "✓".green().bold(),
                generated.file_name(),
                written.display()
            );
        }
    }

    Ok(true)
}
