//! varspec CLI — scaffold secure variable specification files.
//!
//! Provides two commands: `init`, which writes an example specification with
//! readable, wrapped comments, and `wrap`, which exposes the text layout
//! helpers from [`varspec_core::layout`] for use in scripts.

mod commands;
mod output;

use clap::{Parser, Subcommand};

use varspec_core::templates::{SpecFormat, COMMENT_WIDTH};

#[derive(Parser)]
#[command(
    name = "varspec",
    about = "Create example secure variable specification files",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an example secure variable specification file
    ///
    /// The file can be used as a starting point to customize further. If no
    /// filename is given, "spec.nsv.hcl" or "spec.nsv.json" is used.
    Init {
        /// Output file (default: spec.nsv.hcl, or spec.nsv.json with --json)
        filename: Option<String>,

        /// Create an example JSON secure variable specification
        #[arg(long)]
        json: bool,

        /// Suppress non-error output
        #[arg(short, long)]
        quiet: bool,
    },

    /// Word wrap text to a fixed column width
    Wrap {
        /// Text to wrap (read from stdin if omitted)
        text: Option<String>,

        /// Maximum line width in columns
        #[arg(long, short, default_value_t = COMMENT_WIDTH)]
        width: usize,

        /// Literal prefix for every output line (e.g. "# ")
        #[arg(long, short, conflicts_with = "hanging")]
        prefix: Option<String>,

        /// Indent every line after the first by this many spaces
        #[arg(long)]
        hanging: Option<usize>,

        /// Only collapse whitespace runs to single spaces and trim; no wrapping
        #[arg(long, conflicts_with_all = ["prefix", "hanging", "width"])]
        tidy: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Init {
            filename,
            json,
            quiet,
        } => {
            let format = if json { SpecFormat::Json } else { SpecFormat::Hcl };
            commands::init::run(filename.as_deref(), format, quiet).await?;
        }
        Commands::Wrap {
            text,
            width,
            prefix,
            hanging,
            tidy,
        } => {
            let layout = match (prefix, hanging) {
                _ if tidy => commands::wrap::Layout::Tidy,
                (_, Some(indent)) => commands::wrap::Layout::Hanging(indent),
                (Some(prefix), None) => commands::wrap::Layout::Prefixed(prefix),
                (None, None) => commands::wrap::Layout::Plain,
            };
            commands::wrap::run(text, width, layout).await?;
        }
    }

    Ok(())
}
