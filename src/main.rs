use anyhow::{Context, Result};
use citemap::cli::Args;
use citemap::RenderConfig;
use std::process::ExitCode;
use tracing::{error, Level};
use tracing_subscriber::FmtSubscriber;

fn main() -> ExitCode {
    let args = match Args::try_from_iter(std::env::args_os()) {
        Ok(args) => args,
        Err(e) => {
            println!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = RenderConfig::default();
    citemap::run(args, &config)
        .with_context(|| format!("cannot render {:?}", args.output))?;

    Ok(())
}
