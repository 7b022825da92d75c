use clap::Parser;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

/// Draws an ASCII block diagram of the ports of VHDL entities.
#[derive(clap::Parser, Debug)]
#[clap(version, about)]
struct Args {
    /// VHDL source files.
    #[arg()]
    files: Vec<PathBuf>,

    /// Print parser diagnostics on stderr.
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    if verbose {
        clilog::init_stderr_color_debug();
        return
    }
    use simplelog::*;
    // fails only if a logger is already set.
    let _ = TermLogger::init(
        LevelFilter::Warn,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let stdout = io::stdout();
    match vhdlports::cli::process_files(&args.files, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
