use std::{fs::read_to_string, path::PathBuf, process::ExitCode, time::Instant};

use clap::Parser;
use lexscan::{display_error, init_logging, Scanner};
use log::{error, info, LevelFilter};

#[derive(Parser)]
#[command(name = "lexscan")]
#[command(about = "Scan a source file and list its tokens")]
struct Cli {
    /// Source file to scan
    file: PathBuf,

    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    if let Err(err) = init_logging(level) {
        eprintln!("failed to initialise logging: {}", err);
        return ExitCode::from(2);
    }

    let source = match read_to_string(&cli.file) {
        Ok(source) => source,
        Err(err) => {
            error!("failed to read source {:?}: {}", cli.file, err);
            return ExitCode::from(2);
        }
    };

    let file_name = cli.file.display().to_string();
    let start = Instant::now();
    let mut scanner = Scanner::new(source.as_str(), Some(file_name.clone()));
    let mut count = 0;

    loop {
        match scanner.next_token() {
            Ok(Some(token)) => {
                token.debug();
                count += 1;
            }
            Ok(None) => break,
            Err(err) => {
                display_error(&err, &source, &file_name);
                return ExitCode::FAILURE;
            }
        }
    }

    info!("scanned {} tokens in {:?}", count, start.elapsed());
    ExitCode::SUCCESS
}
