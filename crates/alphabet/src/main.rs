use alphabet_core::{Config, ExemplarKind, Expr, Session};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::json;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "alphabet=info,alphabet_core=error";

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to a TOML config file (default: .alphabet.toml or alphabet.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory of locale YAML files to use instead of the built-in set
    #[arg(long, global = true)]
    locales_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the alphabet of a language name or locale identifier
    Lookup {
        /// Language name ("Spanish") or locale identifier ("es_MX");
        /// defaults to the configured language
        name: Option<String>,

        /// Which exemplar set to print
        #[arg(short, long, value_enum, default_value_t = Kind::Standard)]
        kind: Kind,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// List language names and the locale each resolves to
    Languages {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// List available locale identifiers
    Locales {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Evaluate one input line, e.g. 'Alphabet["German"]'
    Eval {
        expr: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Read input lines from stdin and evaluate them in one session
    Repl,
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
enum Kind {
    Standard,
    Auxiliary,
    Index,
    Punctuation,
}

impl From<Kind> for ExemplarKind {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Standard => ExemplarKind::Standard,
            Kind::Auxiliary => ExemplarKind::Auxiliary,
            Kind::Index => ExemplarKind::Index,
            Kind::Punctuation => ExemplarKind::Punctuation,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    debug!("using config {:?}", config);
    let mut session = Session::from_config(&config).context("failed to load locale data")?;

    match cli.command {
        Commands::Lookup { name, kind, json } => {
            let alphabet = session.alphabet_kind(name.as_deref(), kind.into());
            print_messages(&mut session);
            let Some(alphabet) = alphabet else {
                std::process::exit(1);
            };
            if json {
                println!("{}", serde_json::to_string_pretty(&alphabet)?);
            } else {
                println!("{}", Expr::string_list(alphabet.letters));
            }
        }
        Commands::Languages { json } => {
            let index = session.alphabets().index();
            if json {
                let entries: serde_json::Map<String, serde_json::Value> = index
                    .iter()
                    .map(|(name, id)| (name.to_string(), json!(id)))
                    .collect();
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else {
                let mut names: Vec<_> = index.iter().collect();
                names.sort();
                for (name, id) in names {
                    println!("{:<24} {}", name, id);
                }
            }
        }
        Commands::Locales { json } => {
            let provider = session.alphabets().provider();
            let ids: Vec<&str> = provider
                .available_locales()
                .keys()
                .map(String::as_str)
                .collect();
            if json {
                println!("{}", serde_json::to_string_pretty(&ids)?);
            } else {
                for (id, record) in provider.available_locales() {
                    println!("{:<10} {}", id, provider.display_language(record));
                }
            }
        }
        Commands::Eval { expr, json } => {
            let result = session.evaluate_str(&expr);
            if json {
                let messages = session.take_messages();
                let output = json!({
                    "input": expr,
                    "result": result.input_form(),
                    "messages": messages,
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else {
                print_messages(&mut session);
                if !result.is_null() {
                    println!("{}", result);
                }
            }
        }
        Commands::Repl => repl(&mut session)?,
    }

    Ok(())
}

/// Log filter from RUST_LOG, or [`DEFAULT_LOG_FILTER`] when it is unset.
fn log_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("failed to read config {}", path.display()))?,
        None => Config::load_from_project()?.unwrap_or_default(),
    };
    if let Some(dir) = &cli.locales_dir {
        config.locales_dir = Some(dir.clone());
    }
    Ok(config)
}

fn print_messages(session: &mut Session) {
    for msg in session.take_messages() {
        eprintln!("{}", msg);
    }
}

fn repl(session: &mut Session) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line_no = 1;

    write!(stdout, "In[{}]:= ", line_no)?;
    stdout.flush()?;
    for line in stdin.lock().lines() {
        let line = line?;
        if !line.trim().is_empty() {
            let result = session.evaluate_str(&line);
            print_messages(session);
            if !result.is_null() {
                writeln!(stdout, "Out[{}]= {}", line_no, result)?;
            }
            line_no += 1;
        }
        write!(stdout, "In[{}]:= ", line_no)?;
        stdout.flush()?;
    }
    writeln!(stdout)?;
    Ok(())
}
