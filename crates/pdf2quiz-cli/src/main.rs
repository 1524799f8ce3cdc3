mod commands;
mod logging;
mod output;

use clap::error::ErrorKind;
use clap::{Args, CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "pdf2quiz",
    version,
    about = "Convert exam question-bank PDFs into JSONL quiz data",
    args_conflicts_with_subcommands = true,
    arg_required_else_help = true
)]
struct Cli {
    /// Show extraction details and statistics
    #[arg(short, long, global = true)]
    verbose: bool,

    // `pdf2quiz <PDF_PATH>` is shorthand for `pdf2quiz parse <PDF_PATH>`.
    #[command(flatten)]
    parse: TopLevelParse,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args)]
struct TopLevelParse {
    /// Path to the PDF or text file
    pdf_path: Option<PathBuf>,

    /// Output JSONL file (default: input path with .jsonl extension)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Running-header regex to strip (empty string disables stripping)
    #[arg(long, value_name = "REGEX")]
    header_pattern: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse an exam PDF (or extracted .txt) into a JSONL question bank
    Parse {
        /// Path to the PDF or text file
        pdf_path: PathBuf,

        /// Output JSONL file (default: input path with .jsonl extension)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Running-header regex to strip (empty string disables stripping)
        #[arg(long, value_name = "REGEX")]
        header_pattern: Option<String>,
    },
    /// Rewrite explanations in a JSONL bank using a rule set
    Rewrite {
        /// Path to the JSONL bank
        jsonl_path: PathBuf,

        /// Output JSONL file (default: <stem>.rewritten.jsonl)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Predefined rule set
        #[arg(short, long, value_name = "NAME", default_value = "ceh-zh-tw")]
        preset: String,

        /// Custom JSON rule file (takes precedence over --preset)
        #[arg(short, long, value_name = "FILE")]
        rules: Option<PathBuf>,
    },
    /// Write a manifest listing the JSONL banks in a directory
    Index {
        /// Directory holding the banks
        dir: PathBuf,

        /// Manifest file (default: <dir>/banks.json)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Some(Commands::Parse {
            pdf_path,
            output,
            header_pattern,
        }) => commands::parse::run(pdf_path, output, header_pattern, cli.verbose),
        Some(Commands::Rewrite {
            jsonl_path,
            output,
            preset,
            rules,
        }) => commands::rewrite::run(jsonl_path, output, &preset, rules),
        Some(Commands::Index { dir, output }) => commands::index::run(dir, output),
        None => match cli.parse.pdf_path {
            Some(pdf_path) => commands::parse::run(
                pdf_path,
                cli.parse.output,
                cli.parse.header_pattern,
                cli.verbose,
            ),
            None => Cli::command()
                .error(
                    ErrorKind::MissingRequiredArgument,
                    "a PDF path or a subcommand is required",
                )
                .exit(),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
