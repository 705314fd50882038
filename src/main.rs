//! rstscan CLI - scan reStructuredText blocks to HTML or an event dump

use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use rstscan::{BlockEvent, BlockScanner, Error, Options};

#[derive(Parser, Debug)]
#[command(name = "rstscan", version, about)]
struct Cli {
    /// Input file; reads stdin when omitted or `-`
    file: Option<PathBuf>,

    /// Columns between tab stops
    #[arg(long, default_value_t = rstscan::limits::TAB_WIDTH)]
    tab_width: usize,

    /// Print the block event stream instead of HTML
    #[arg(long)]
    events: bool,
}

fn read_input(file: Option<&PathBuf>) -> Result<String, Error> {
    match file {
        Some(path) if path.as_os_str() != "-" => {
            std::fs::read_to_string(path).map_err(|source| Error::Read {
                path: path.clone(),
                source,
            })
        }
        _ => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn run(cli: &Cli) -> Result<(), Error> {
    let options = Options::with_tab_width(cli.tab_width)?;
    let input = read_input(cli.file.as_ref())?;
    log::debug!("read {} bytes", input.len());

    let stdout = io::stdout().lock();
    if cli.events {
        let mut events: Vec<BlockEvent> = Vec::new();
        let Ok(()) = BlockScanner::with_options(&input, options).scan(&mut events);

        let mut out = io::BufWriter::new(stdout);
        for event in &events {
            writeln!(out, "{event:?}")?;
        }
        out.flush()?;
    } else {
        rstscan::write_html(&input, &options, io::BufWriter::new(stdout))?;
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("rstscan: {err}");
            ExitCode::FAILURE
        }
    }
}
