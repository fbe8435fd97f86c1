use anyhow::Result;
use clap::Parser;
use repo_corpus::{run, Cli};

#[tokio::main]
async fn main() -> Result<()> {
    // Argument errors exit 1 with clap's usage text; help and version exit 0.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    // Initialize tracing for the CLI.
    tracing_subscriber::fmt::init();
    tracing::info!("CLI application startup: tracing initialised, arguments parsed");

    match run(cli).await {
        Ok(report) => {
            tracing::info!(
                written = report.files_written,
                output = %report.output_path.display(),
                "CLI completed successfully"
            );
            Ok(())
        }
        Err(e) => {
            tracing::error!(error = %e, "CLI exited with error");
            eprintln!("[ERROR] Collection failed: {e:#}");
            std::process::exit(1);
        }
    }
}
