use crate::demo::{run_demo, run_timeline_report, DemoArgs, TimelineReportArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use relocate::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Relocation Planner",
    about = "Run the relocation planning service or explore its progress tracking from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Print the standard relocation timeline grouped by category
    Timeline(TimelineReportArgs),
    /// Seed a checklist in memory, record some progress, and print the dashboard
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Seed the standard checklist for this user at startup
    #[arg(long)]
    pub(crate) seed_user: Option<String>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Timeline(args) => run_timeline_report(args),
        Command::Demo(args) => run_demo(args).await,
    }
}
