use clap::Parser;
use clap_verbosity_flag::Verbosity;
use ilshim_bindings::{BindingTable, Group};
use std::env;
use std::io;
use std::path::PathBuf;

mod commands;
mod config;
mod error;

use config::ShimConfig;
use error::CliError;

#[derive(Parser, Debug)]
#[command(name = "ilshim")]
#[command(about = "Intrinsic bindings and C header export for the ilshim runtime", long_about = None)]
struct Args {
    #[command(flatten)]
    verbose: Verbosity,

    /// Config file (defaults to ./ilshim.toml when present)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[clap(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand, Debug)]
enum Command {
    /// Write the C header for generated code
    Header {
        /// Output file (defaults to stdout)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
        /// Declare every binding as an extern call, even those with a template
        #[arg(long)]
        no_inline: bool,
    },

    /// List bindings
    List {
        /// Only list bindings in this group
        #[arg(short, long, value_name = "GROUP")]
        group: Option<Group>,
    },

    /// Show one binding
    Show {
        /// Symbol name, e.g. System_Int128_op_Addition_i128i128
        #[arg(value_name = "SYMBOL")]
        symbol: String,
    },

    /// Verify every binding resolves to a runtime export
    Check,
}

fn main() -> miette::Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();
    run(args)?;
    Ok(())
}

fn run(args: Args) -> Result<(), CliError> {
    let table = BindingTable::standard()?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.command {
        Command::Header { output, no_inline } => {
            let cwd = env::current_dir().map_err(|source| CliError::IoError {
                path: PathBuf::from("."),
                operation: "getting current directory".to_string(),
                source,
            })?;
            let config = ShimConfig::load(args.config.as_deref(), &cwd)?;
            let mut options = config.header.to_options()?;
            if no_inline {
                options.prefer_inline = false;
            }
            let output = output.or(config.header.output);
            commands::header::handle_header(&table, &options, output.as_deref(), &mut out)
        }
        Command::List { group } => commands::list::handle_list(&table, group, &mut out),
        Command::Show { symbol } => commands::show::handle_show(&table, &symbol, &mut out),
        Command::Check => commands::check::handle_check(&table, &mut out),
    }
}
