use anyhow::Result;
use clap::Parser;
use grit_sync::areas::console::Console;
use grit_sync::areas::repository::Repository;
use grit_sync::domain::mode::SyncMode;

#[derive(Parser)]
#[command(
    name = "grit-sync",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Keep a working tree in sync with its remote",
    long_about = "This command drives the system git binary through a fixed \
    synchronization sequence: stash, rebase onto the remote, refresh submodules, \
    triage untracked files interactively, then commit and push. \
    Pass 'force' to mirror the local state onto the remote instead.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(
        index = 1,
        value_enum,
        help = "Omit for a safe sync; 'force' mirrors local state onto the remote"
    )]
    mode: Option<SyncMode>,
    #[arg(long, help = "Path to the working tree (defaults to the current directory)")]
    path: Option<String>,
    #[arg(long, help = "Set the 'origin' remote to this URL before syncing")]
    remote: Option<String>,
    #[arg(long, help = "Branch to sync (defaults to the currently checked out branch)")]
    branch: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut repository = match &cli.path {
        Some(path) => Repository::new(path, Box::new(std::io::stdout()), Console::stdin())?,
        None => {
            let pwd = std::env::current_dir()?;
            Repository::new(
                &pwd.to_string_lossy(),
                Box::new(std::io::stdout()),
                Console::stdin(),
            )?
        }
    };

    repository.setup(cli.remote.as_deref()).await?;
    let branch = repository.resolve_branch(cli.branch.as_deref()).await?;

    match cli.mode.unwrap_or_default() {
        SyncMode::Safe => repository.sync(&branch).await?,
        SyncMode::Force => repository.mirror(&branch).await?,
    }

    Ok(())
}
