//! sqlmap command-line interface

use clap::{Parser, Subcommand};
use sqlmap::cli::{attributes, check, format, load::KindArg, output, render};
use std::path::PathBuf;

/// sqlmap query document tool
#[derive(Parser)]
#[command(name = "sqlmap")]
#[command(author, version, about = "Inspect serialized field expressions and orderings", long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output file (default: stdout)
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    color: String,

    /// Document kind (detected from the JSON by default)
    #[arg(short, long, value_enum, default_value_t = KindArg::Auto, global = true)]
    kind: KindArg,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the column paths a document references
    Attributes {
        /// JSON document
        file: PathBuf,

        /// Drop repeated paths, keeping first-seen order
        #[arg(short, long)]
        distinct: bool,
    },

    /// Print the SQL-like form of a document
    Render {
        /// JSON document
        file: PathBuf,
    },

    /// Decode and lint documents
    Check {
        /// JSON documents
        files: Vec<PathBuf>,

        /// Strict mode (warnings as errors)
        #[arg(short, long)]
        strict: bool,
    },

    /// Re-encode a document as canonical JSON
    Format {
        /// JSON document
        file: PathBuf,

        /// Pretty-print output
        #[arg(short, long)]
        pretty: bool,
    },
}

fn main() {
    human_panic::setup_panic!();

    let cli = Cli::parse();

    output::setup_colors(&cli.color);

    let result = match cli.command {
        Commands::Attributes { file, distinct } => attributes::attributes(attributes::AttributesConfig {
            file,
            kind: cli.kind,
            distinct,
            output_file: cli.output,
        }),

        Commands::Render { file } => render::render(render::RenderConfig {
            file,
            kind: cli.kind,
            output_file: cli.output,
        }),

        Commands::Check { files, strict } => check::check(check::CheckConfig {
            files,
            kind: cli.kind,
            strict,
            verbose: cli.verbose,
        }),

        Commands::Format { file, pretty } => format::format(format::FormatConfig {
            file,
            kind: cli.kind,
            pretty,
            output_file: cli.output,
        }),
    };

    if let Err(e) = result {
        eprintln!("{}", output::format_error(&e));
        std::process::exit(1);
    }
}
