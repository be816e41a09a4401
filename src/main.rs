//! flowdot CLI
//!
//! Usage:
//!   flowdot [OPTIONS] [FILE]
//!
//! Options:
//!   -f, --format <FORMAT>  Output format: png, svg, pdf or html
//!   -o, --output <PATH>    Output path; the extension is replaced by the format's
//!   -c, --config <FILE>    Configuration file (TOML format)
//!   --emit-dot             Print DOT source instead of rendering
//!   --check                Report skipped lines and dangling edges
//!   -h, --help             Print help

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use flowdot::{lint, to_dot, FlowchartConfig, OutputFormat, Session};

#[derive(Parser)]
#[command(name = "flowdot")]
#[command(about = "Render a flowchart DSL with Graphviz")]
struct Cli {
    /// Input file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Output format: png, svg, pdf or html
    #[arg(short, long, default_value = "png")]
    format: OutputFormat,

    /// Output path; its extension is replaced by the format's
    #[arg(short, long, default_value = "generated_flowchart")]
    output: PathBuf,

    /// Configuration file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print DOT source to stdout instead of rendering
    #[arg(long)]
    emit_dot: bool,

    /// Report skipped lines and dangling edge references, then exit
    #[arg(long)]
    check: bool,

    /// Keep the intermediate DOT source next to the output
    #[arg(long)]
    keep_source: bool,

    /// Log pipeline details to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // If no input file and stdin is a terminal (interactive), show intro help
    if cli.input.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    let mut config = match &cli.config {
        Some(path) => match FlowchartConfig::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => FlowchartConfig::default(),
    };
    if cli.keep_source {
        config.engine.cleanup = false;
    }

    let (source, filename) = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => (content, path.display().to_string()),
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => (buffer, "<stdin>".to_string()),
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    if cli.check {
        let warnings = lint::check(&source);
        for warning in &warnings {
            eprint!("{}", warning.format(&source, &filename));
        }
        if !warnings.is_empty() {
            std::process::exit(1);
        }
        return;
    }

    let mut session = Session::new(config);
    let graph = session.convert(&source);

    if cli.emit_dot {
        print!("{}", to_dot(graph));
        return;
    }

    match session.save(cli.format, &cli.output) {
        Ok(rendered) => {
            for path in &rendered.files {
                println!("{}", path.display());
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "flowdot=debug" } else { "warn" };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn print_intro() {
    println!(
        r#"flowdot - render a flowchart DSL with Graphviz

USAGE:
    flowdot [OPTIONS] [FILE]
    echo '<dsl>' | flowdot

OPTIONS:
    -f, --format       png, svg, pdf or html (default png)
    -o, --output       Output path (default generated_flowchart)
    -c, --config       Graph and engine settings (TOML file)
    --emit-dot         Print DOT source instead of rendering
    --check            Report lines that will be ignored and dangling edges
    --keep-source      Keep the intermediate .gv file
    -v, --verbose      Log pipeline details
    -h, --help         Print help

DSL:
    Node declarations, a blank line, then edge declarations.

    st=>start: Begin
    op=>operation: x = x + 1
    c=>condition: x > 10
    e=>end: Finish

    st->op
    op->c
    c(yes)->e
    c(no)->op

Node kinds: start, end, operation, condition, inputoutput, subroutine.
Requires the Graphviz `dot` executable on PATH for rendering."#
    );
}
