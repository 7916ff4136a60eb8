use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use unitconv::{BarChart, Engine, REGISTRY, Report, Session, Settings, format};

const CHART_WIDTH: usize = 40;

#[derive(Parser)]
#[command(name = "unitconv", version)]
#[command(about = "Convert between units and show how the result was derived", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the available categories
    Categories,

    /// List the units of a category
    Units {
        /// Category key (e.g. "length")
        category: String,
    },

    /// Convert a value between two units of a category
    Convert {
        /// Category key (e.g. "length")
        category: String,

        /// Value to convert
        #[arg(allow_negative_numbers = true)]
        value: f64,

        /// Source unit code (e.g. "km")
        from: String,

        /// Target unit code (e.g. "cm")
        to: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,

        /// Append a bar chart of input vs. result
        #[arg(long)]
        chart: bool,

        /// Write a text report to DIR (default: UNITCONV_EXPORT_DIR or ".")
        #[arg(long, value_name = "DIR", num_args = 0..=1)]
        export: Option<Option<PathBuf>>,
    },

    /// Interactive session: type values, switch categories and units
    Interactive {
        /// Initial category (default: UNITCONV_DEFAULT_CATEGORY or "length")
        #[arg(short, long)]
        category: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = Settings::from_env().context("invalid configuration")?;
    init_tracing(&settings.log_filter);

    match cli.command {
        Commands::Categories => list_categories(),
        Commands::Units { category } => list_units(&category)?,
        Commands::Convert { category, value, from, to, json, chart, export } => {
            let export = export.map(|dir| dir.unwrap_or_else(|| settings.export_dir.clone()));
            convert(&category, value, &from, &to, json, chart, export)?
        }
        Commands::Interactive { category } => interactive(&settings, category.as_deref())?,
    }
    Ok(())
}

fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn list_categories() {
    for def in REGISTRY.categories() {
        println!("{:<12} {:<24} {} units", def.key.as_str(), def.name, def.units.len());
    }
}

fn list_units(category: &str) -> Result<()> {
    let def = REGISTRY.get_category(category)?;
    for (i, unit) in def.units.iter().enumerate() {
        let mut tags = Vec::new();
        if def.base_unit == Some(unit.code) {
            tags.push("base");
        }
        match i {
            0 => tags.push("default from"),
            1 => tags.push("default to"),
            _ => {}
        }
        let factor = unit.factor.map(format::number).unwrap_or_else(|| "formula".to_string());
        println!("{:<6} {:<34} {:>20}  {}", unit.code, unit.label, factor, tags.join(", "));
    }
    Ok(())
}

fn convert(
    category: &str,
    value: f64,
    from: &str,
    to: &str,
    json: bool,
    chart: bool,
    export: Option<PathBuf>,
) -> Result<()> {
    let engine = Engine::builtin();
    let result = engine.convert(category, from, to, value)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{result}");
    }

    if chart {
        let chart = BarChart::from_result(&result, engine.registry())?;
        println!("\n{}", chart.render(CHART_WIDTH));
    }

    if let Some(dir) = export {
        let report = Report::new(&result, engine.registry())?;
        let path = report
            .export(&dir)
            .with_context(|| format!("exporting to {}", dir.display()))?;
        println!("\nReport written to {}", path.display());
    }
    Ok(())
}

// ── Interactive session ─────────────────────────────────────────────

const HELP: &str = "\
commands:
  type <category>   switch category (clears the input)
  from <code>       set the source unit
  to <code>         set the target unit
  swap              swap source and target units
  units             list the units of the current category
  help              show this help
  quit              leave
anything else is taken as the value to convert";

fn interactive(settings: &Settings, category: Option<&str>) -> Result<()> {
    let mut session = Session::new(Engine::builtin(), settings.default_category)?;
    if let Some(key) = category {
        session.select_category(key)?;
    }
    println!("{HELP}\n");
    print_selection(&session);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line = String::new();
    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;
        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim();
        let (cmd, arg) = match input.split_once(char::is_whitespace) {
            Some((cmd, arg)) => (cmd, arg.trim()),
            None => (input, ""),
        };

        match cmd {
            "quit" | "exit" => break,
            "help" => println!("{HELP}"),
            "units" => list_units(session.category().key.as_str())?,
            "type" => match session.select_category(arg) {
                Ok(()) => print_selection(&session),
                Err(e) => println!("{e}"),
            },
            "from" | "to" => {
                let changed = if cmd == "from" {
                    session.set_from_unit(arg)
                } else {
                    session.set_to_unit(arg)
                };
                match changed {
                    Ok(()) => refresh(&session),
                    Err(e) => println!("{e}"),
                }
            }
            "swap" => {
                session.swap_units();
                refresh(&session);
            }
            _ => match session.set_input(input) {
                Ok(()) => show(&session),
                Err(e) => println!("{e}"),
            },
        }
    }
    Ok(())
}

fn print_selection(session: &Session<'_>) {
    let def = session.category();
    println!("{}: {} → {}", def.name, session.from_unit(), session.to_unit());
}

/// Re-run the conversion after a unit change, if there is anything to
/// convert.
fn refresh(session: &Session<'_>) {
    print_selection(session);
    if !session.input().trim().is_empty() {
        show(session);
    }
}

fn show(session: &Session<'_>) {
    match session.evaluate() {
        Ok(result) => println!("{result}\n"),
        Err(e) => println!("{e}"),
    }
}
