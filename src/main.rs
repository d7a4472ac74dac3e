//! `quadview` — render a solid model into four canonical preview images.
//!
//! Usage: `quadview <model-file> <request-name>`
//!
//! Loads the model definition, exports its solid to a temporary STL, then
//! drives `quadview-engine` headlessly to produce isometric, plan, front and
//! side renders under `renders/<request-name>/`.

use clap::Parser;
use quadview::errors::RequestError;
use quadview::orchestrator;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "quadview")]
#[command(about = "Render a solid model into isometric, plan, front and side previews")]
#[command(version)]
struct Args {
    /// Path to the model definition (TOML with a [solid] table)
    model: PathBuf,

    /// Name of this render request; images land in <renders-root>/<name>/
    name: String,

    /// Directory holding per-request render output
    #[arg(long, default_value = "renders")]
    renders_root: PathBuf,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            // clap exits 2 on usage errors by default; the CLI contract is 1.
            let _ = err.print();
            return if err.exit_code() == 0 {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1)
            };
        },
    };

    match orchestrator::render_request(&args.model, &args.name, &args.renders_root) {
        Ok(output_dir) => {
            println!("Renders written to: {}", output_dir.display());
            ExitCode::SUCCESS
        },
        Err(err) => {
            eprintln!("Error: {err}");
            exit_code(&err)
        },
    }
}

/// Engine failures mirror the engine's own exit status; everything else is 1.
fn exit_code(err: &RequestError) -> ExitCode {
    match err {
        RequestError::EngineFailed { status } => {
            let code = status.code().unwrap_or(1);
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        },
        _ => ExitCode::from(1),
    }
}
