use anyhow::Result;
use clap::{Parser, Subcommand};
use std::process::Command;

#[derive(Parser)]
#[command(name = "xtask", about = "Workspace automation for origins")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run all checks: fmt, clippy, tests, doc
    Check,
    /// Run cargo fmt --check on all crates
    Fmt,
    /// Run clippy on all crates
    Clippy,
    /// Run all tests
    Test,
    /// Build rustdoc for the workspace
    Doc,
    /// Build the entire workspace
    Build,
}

const FMT: (&str, &[&str]) = ("cargo fmt --check", &["fmt", "--all", "--", "--check"]);
const CLIPPY: (&str, &[&str]) = (
    "cargo clippy",
    &["clippy", "--workspace", "--all-targets", "--", "-D", "warnings"],
);
const TEST: (&str, &[&str]) = ("cargo test", &["test", "--workspace"]);
const DOC: (&str, &[&str]) = ("cargo doc", &["doc", "--workspace", "--no-deps"]);
const BUILD: (&str, &[&str]) = ("cargo build", &["build", "--workspace"]);

fn main() -> Result<()> {
    let cli = Cli::parse();

    let steps: &[(&str, &[&str])] = match cli.command {
        Commands::Check => &[FMT, CLIPPY, TEST, DOC],
        Commands::Fmt => &[FMT],
        Commands::Clippy => &[CLIPPY],
        Commands::Test => &[TEST],
        Commands::Doc => &[DOC],
        Commands::Build => &[BUILD],
    };

    for (label, args) in steps {
        cargo(label, args)?;
    }

    Ok(())
}

fn cargo(label: &str, args: &[&str]) -> Result<()> {
    println!("==> Running {label}");
    let status = Command::new("cargo").args(args).status()?;
    if !status.success() {
        anyhow::bail!("{label} failed");
    }
    Ok(())
}
