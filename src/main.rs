use anyhow::Context;
use clap::Parser;
use smart_arrays::app::CommandRunner;
use smart_arrays::utils::{logger, validation::Validate};
use smart_arrays::{ArrayError, CliConfig};
use std::io::Write;

fn fail(e: ArrayError) -> ! {
    tracing::error!("Command failed: {}", e);
    eprintln!("❌ {}", e);
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(1);
}

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        fail(e);
    }

    let runner = CommandRunner::new(config.pretty);
    let input = runner
        .read_input(&config.command, std::io::stdin().lock())
        .unwrap_or_else(|e| fail(e));

    let rendered = runner
        .run(&config.command, input.as_deref())
        .unwrap_or_else(|e| fail(e));

    writeln!(std::io::stdout().lock(), "{}", rendered).context("failed to write result to stdout")?;
    Ok(())
}
