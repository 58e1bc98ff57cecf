use clap::Parser;
use console::style;
use std::io::{self, Read};
use tabula::config::{config_dir, TabulaConfig};
use tabula::error::Result;
use tabula::{render_table, Printer};

mod cli;
use cli::args::Cli;
use cli::input::{parse_rows, split_header};

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::new(format!(
            "tabula={}",
            log_level
        )))
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("{} {}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = match config_dir(cli.config_dir.as_deref()) {
        Some(dir) => TabulaConfig::load(dir)?,
        None => TabulaConfig::default(),
    };
    let options = cli.style_options(config.table)?;

    let input = match &cli.input {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let (rows, header) = split_header(parse_rows(&input, cli.delimiter), cli.header);
    let table = render_table(rows, header, &options)?;
    tracing::debug!(lines = table.line_count(), "rendering table");

    let stdout = io::stdout();
    let mut printer = Printer::with_indent_width(stdout.lock(), config.indent_width);
    for _ in 0..cli.indent {
        printer.indent();
    }
    printer.lines(&table)?;
    printer.flush()
}
