use chat_relay::cli::{self, Cli, Command};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    match args.command.unwrap_or(Command::Serve(Default::default())) {
        Command::Serve(serve_args) => cli::serve::run(serve_args).await,
    }
}
