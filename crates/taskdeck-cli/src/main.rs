use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "taskdeck-cli", version, about = "Taskdeck policy inspector")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Task action policy
    Task {
        #[command(subcommand)]
        action: commands::task::TaskAction,
    },
    /// Project progress display
    Project {
        #[command(subcommand)]
        action: commands::project::ProjectAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Task { action } => commands::task::run(action),
        Commands::Project { action } => commands::project::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
