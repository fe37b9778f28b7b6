//! Release helpers: man pages and shell completions for `ats-score`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "xtask", about = "Development tasks for ats-score")]
struct Xtask {
    #[command(subcommand)]
    task: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Render man pages for the CLI and each subcommand.
    Man {
        /// Output directory.
        #[arg(long, default_value = "target/man")]
        out: PathBuf,
    },
    /// Generate shell completion scripts.
    Completions {
        /// Output directory.
        #[arg(long, default_value = "target/completions")]
        out: PathBuf,
    },
}

fn main() -> io::Result<()> {
    match Xtask::parse().task {
        Task::Man { out } => man(&out),
        Task::Completions { out } => completions(&out),
    }
}

fn man(out: &Path) -> io::Result<()> {
    fs::create_dir_all(out)?;
    let cmd = ats_score::command();
    render_man(&cmd, cmd.get_name(), out)?;
    for sub in cmd.get_subcommands().filter(|s| !s.is_hide_set()) {
        let name = format!("{}-{}", cmd.get_name(), sub.get_name());
        render_man(sub, &name, out)?;
    }
    println!("man pages written to {}", out.display());
    Ok(())
}

fn render_man(cmd: &clap::Command, name: &str, out: &Path) -> io::Result<()> {
    let mut buffer = Vec::new();
    clap_mangen::Man::new(cmd.clone()).render(&mut buffer)?;
    fs::write(out.join(format!("{name}.1")), buffer)
}

fn completions(out: &Path) -> io::Result<()> {
    fs::create_dir_all(out)?;
    let mut cmd = ats_score::command();
    for shell in [Shell::Bash, Shell::Zsh, Shell::Fish, Shell::PowerShell, Shell::Elvish] {
        let path = clap_complete::generate_to(shell, &mut cmd, "ats-score", out)?;
        println!("{}", path.display());
    }
    Ok(())
}
