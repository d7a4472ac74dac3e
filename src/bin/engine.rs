//! `quadview-engine` — the render engine half of the pipeline.
//!
//! Invoked by the `quadview` orchestrator as a subprocess:
//!
//! ```text
//! quadview-engine --background --routine views -- <mesh.stl> <output-dir>
//! ```
//!
//! On success the process exits 0 with four images written to the output
//! directory; on any failure it prints the cause to stderr and exits
//! non-zero.

use clap::Parser;
use quadview::session;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "quadview-engine")]
#[command(about = "Headless render engine producing the canonical view images")]
#[command(version)]
struct Args {
    /// Run without any interactive surface (the only supported mode)
    #[arg(long)]
    background: bool,

    /// Render routine to execute
    #[arg(long, value_parser = ["views"], default_value = "views")]
    routine: String,

    /// Mesh file path and output directory, after the `--` separator
    #[arg(last = true, value_names = ["MESH", "OUTPUT_DIR"])]
    targets: Vec<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            return if err.exit_code() == 0 {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1)
            };
        },
    };

    // The engine is headless either way; --background is the invocation
    // contract with the orchestrator, and "views" is the only routine.
    tracing::debug!(background = args.background, routine = %args.routine, "engine invoked");

    let [mesh_path, output_dir] = args.targets.as_slice() else {
        eprintln!("Error: expected <mesh> <output-dir> after '--'");
        return ExitCode::from(1);
    };

    match session::run(mesh_path, output_dir) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::from(1)
        },
    }
}
