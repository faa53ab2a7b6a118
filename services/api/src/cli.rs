use crate::demo::{
    run_buckets, run_demo, run_evaluate, run_verse, BucketsArgs, DemoArgs, EvaluateArgs, VerseArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use decision_coach::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Kingdom Decision Coach",
    about = "Weigh a money decision: reserve giving and saving, then fund the best-scoring wants",
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
    /// Score options and recommend what to buy now versus later
    Evaluate(EvaluateArgs),
    /// Spread an amount across named buckets by relative percentage
    Buckets(BucketsArgs),
    /// Show a verse to keep the decision in perspective
    Verse(VerseArgs),
    /// Walk through evaluation, bucket planning, and the heart check with sample data
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
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Evaluate(args) => run_evaluate(args),
        Command::Buckets(args) => run_buckets(args),
        Command::Verse(args) => run_verse(args),
        Command::Demo(args) => run_demo(args),
    }
}
