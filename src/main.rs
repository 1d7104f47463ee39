use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use minus::Pager;
use pit::areas::repository::Repository;
use pit::artifacts::core::{PagerWriter, should_page};
use pit::config::Config;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "PIT_LOG";

#[derive(Parser)]
#[command(
    name = "pit",
    version = "0.1.0",
    about = "A minimal local snapshot store",
    long_about = "Stage files, record them as save points, inspect the working tree \
    against the last save point and restore any save point back into the working tree.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(short, long, action = ArgAction::Count, global = true, help = "Log more (-v debug, -vv trace)")]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "init",
        about = "Initialize a new repository",
        long_about = "This command creates the store directory in the current directory. \
        Running it on an existing repository changes nothing."
    )]
    Init,
    #[command(
        name = "add",
        about = "Stage files for the next save point",
        long_about = "This command stores the content of the given files and stages them. \
        Directories are expanded recursively."
    )]
    Add {
        #[arg(index = 1, required = true, num_args = 1.., help = "Files or directories to stage")]
        paths: Vec<PathBuf>,
    },
    #[command(
        name = "remove",
        about = "Unstage files",
        long_about = "This command removes exact paths from the index. Use '.' to unstage everything."
    )]
    Remove {
        #[arg(index = 1, required = true, num_args = 1.., help = "Staged paths, or '.' for all")]
        paths: Vec<PathBuf>,
    },
    #[command(
        name = "save",
        about = "Record the staged files as a save point",
        long_about = "This command creates a save point from the index, on top of the checked out save point."
    )]
    Save {
        #[arg(index = 1, help = "The save point message")]
        message: String,
    },
    #[command(name = "status", about = "Show the working tree status")]
    Status,
    #[command(
        name = "checkout",
        about = "Restore a save point into the working tree",
        long_about = "This command overwrites the files of a save point in the working tree \
        and makes it the current save point."
    )]
    Checkout {
        #[arg(index = 1, help = "A save point fingerprint, or 'latest'")]
        target: String,
    },
    #[command(name = "log", about = "Show the save points from the current one back")]
    Log,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(format!("pit={level}")));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::load_from_env()?;
    let pwd = std::env::current_dir()?;

    match &cli.command {
        Commands::Init => {
            let repository = Repository::new(&pwd, Box::new(std::io::stdout()), config)?;
            repository.init().await?
        }
        Commands::Add { paths } => {
            let repository = Repository::new(&pwd, Box::new(std::io::stdout()), config)?;
            repository.add(paths).await?;
        }
        Commands::Remove { paths } => {
            let repository = Repository::new(&pwd, Box::new(std::io::stdout()), config)?;
            repository.remove(paths).await?
        }
        Commands::Save { message } => {
            let repository = Repository::new(&pwd, Box::new(std::io::stdout()), config)?;
            repository.save(message).await?;
        }
        Commands::Status => {
            let repository = Repository::new(&pwd, Box::new(std::io::stdout()), config)?;
            repository.status().await?;
        }
        Commands::Checkout { target } => {
            let repository = Repository::new(&pwd, Box::new(std::io::stdout()), config)?;
            repository.checkout(target).await?;
        }
        Commands::Log => {
            if should_page(config.pager()) {
                let pager = Pager::new();
                let repository =
                    Repository::new(&pwd, Box::new(PagerWriter::new(pager.clone())), config)?;
                repository.log()?;
                minus::page_all(pager)?;
            } else {
                let repository = Repository::new(&pwd, Box::new(std::io::stdout()), config)?;
                repository.log()?;
            }
        }
    }

    Ok(())
}
