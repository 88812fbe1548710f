pub mod action;
pub mod init;
pub mod list;
pub mod repl;
pub mod session;

use crate::libs::{config::Config, logging};
use crate::storage::TaskFile;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Print saved tasks and exit")]
    List,
}

/// Without a subcommand, duke reads commands from standard input until `bye`.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Task file to use instead of the configured one
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        logging::init();
        match cli.command {
            Some(Commands::Init(args)) => init::cmd(args),
            Some(Commands::List) => list::cmd(task_file(cli.file)?),
            None => repl::cmd(task_file(cli.file)?),
        }
    }
}

fn task_file(file: Option<PathBuf>) -> Result<TaskFile> {
    let path = match file {
        Some(path) => path,
        None => Config::read()?.task_file_path()?,
    };
    Ok(TaskFile::new(path))
}
