// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{info, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::path::PathBuf;

use ddtss_wordlist::app_config::{self, Config};
use ddtss_wordlist::file_utils::FileManager;
use ddtss_wordlist::highlight::Description;
use ddtss_wordlist::{Controller, WordlistAction};

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Highlight wordlist terms in a package description
    Highlight(HighlightArgs),

    /// Export the wordlist as a CSV file
    Export {
        /// Local wordlist JSON file instead of the server
        #[arg(short, long)]
        wordlist: Option<PathBuf>,

        /// Directory receiving wordlist-<language>_<YYYYMMDD>.csv
        #[arg(short, long, default_value = ".")]
        output_dir: PathBuf,
    },

    /// Convert a tab-separated words file into wordlist JSON
    Import {
        /// File with one `word<TAB>translation` per line
        #[arg(value_name = "WORDS_FILE")]
        words_file: PathBuf,

        /// Write the JSON here instead of standard output
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Add a new entry to the server wordlist
    Add(EntryArgs),

    /// Change the translation of an existing entry
    Edit(EntryArgs),

    /// Delete an entry from the server wordlist
    Delete(EntryArgs),

    /// Generate shell completions for ddtss-wordlist
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args, Debug)]
struct HighlightArgs {
    /// Description file, `-` for standard input
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Local wordlist JSON file instead of the server
    #[arg(short, long)]
    wordlist: Option<PathBuf>,

    /// Treat the whole input as one text instead of short + long description
    #[arg(long)]
    whole: bool,

    /// Print JSON instead of HTML
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct EntryArgs {
    /// Source-language term
    word: String,

    /// Translation (at least 3 characters, also required by the server for delete)
    translation: String,
}

/// ddtss-wordlist - Wordlist tooling for the Debian Description Translation Server
#[derive(Parser, Debug)]
#[command(name = "ddtss-wordlist")]
#[command(version)]
#[command(about = "Highlight, export, import and edit DDTSS wordlists")]
#[command(long_about = "ddtss-wordlist works with the per-language wordlists of a DDTSS server.

EXAMPLES:
    ddtss-wordlist highlight description.txt              # Highlight using the server wordlist
    ddtss-wordlist highlight -w it.json - < descr.txt     # Highlight stdin with a local wordlist
    ddtss-wordlist export -o exports/                     # Save the wordlist as CSV
    ddtss-wordlist import words.tsv -o it.json            # Convert a words file to JSON
    ddtss-wordlist -l pt_BR add daemon \"serviço\"          # Add an entry (coordinators only)
    ddtss-wordlist completions bash > ddtss-wordlist.bash

CONFIGURATION:
    Configuration is stored in conf.json by default. If the file doesn't exist,
    a default one will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "conf.json")]
    config_path: String,

    /// DDTSS language code (e.g. 'it', 'pt_BR')
    #[arg(short, long, global = true)]
    language: Option<String>,

    /// Base URL of the DDTSS server
    #[arg(short, long, global = true)]
    server: Option<String>,

    /// Set logging level
    #[arg(long, global = true, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(CustomLogger { level: LevelFilter::Trace }))?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color and tag for a level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("1;31", "ERROR"),
            Level::Warn => ("1;33", "WARN "),
            Level::Info => ("1;32", "INFO "),
            Level::Debug => ("1;36", "DEBUG"),
            Level::Trace => ("1;35", "TRACE"),
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let (color, tag) = Self::style_for_level(record.level());
            let _ = writeln!(
                std::io::stderr(),
                "\x1B[{}m{} {} {}\x1B[0m",
                color, now, tag, record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Info until the config tells otherwise
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(*shell, &mut cmd, "ddtss-wordlist", &mut std::io::stdout());
        return Ok(());
    }

    if let Some(level) = &cli.log_level {
        let level: app_config::LogLevel = level.clone().into();
        log::set_max_level(level.to_level_filter());
    }

    let config = load_config(&cli)?;
    log::set_max_level(config.log_level.to_level_filter());

    let controller = Controller::with_config(config)?;
    run(&controller, cli.command).await
}

fn load_config(cli: &CommandLineOptions) -> Result<Config> {
    let mut config = Config::load_or_create(&cli.config_path)?;

    if let Some(language) = &cli.language {
        config.language = language.clone();
    }
    if let Some(server) = &cli.server {
        config.server.base_url = server.clone();
    }
    if let Some(log_level) = &cli.log_level {
        config.log_level = log_level.clone().into();
    }

    config.validate().context("Configuration validation failed")?;
    Ok(config)
}

async fn run(controller: &Controller, command: Commands) -> Result<()> {
    match command {
        Commands::Highlight(args) => {
            let text = FileManager::read_input(&args.input)?;
            let wordlist = controller.load_wordlist(args.wordlist.as_deref()).await?;

            if args.whole {
                let html = controller.highlight_text(&wordlist, &text);
                if args.json {
                    println!("{}", serde_json::to_string_pretty(&html)?);
                } else {
                    println!("{}", html);
                }
            } else {
                let highlighted =
                    controller.highlight_description(&wordlist, &Description::parse(&text));
                if args.json {
                    println!("{}", serde_json::to_string_pretty(&highlighted)?);
                } else {
                    println!("{}\n\n{}", highlighted.short, highlighted.long);
                }
            }
        }
        Commands::Export { wordlist, output_dir } => {
            let wordlist = controller.load_wordlist(wordlist.as_deref()).await?;
            let today = chrono::Local::now().date_naive();
            let path = controller.export_csv(&wordlist, &output_dir, today)?;
            println!("{}", path.display());
        }
        Commands::Import { words_file, output } => {
            let report = controller.import_words(&words_file)?;
            let json = report.wordlist.to_json()?;
            match output {
                Some(path) => {
                    FileManager::write_to_file(&path, &json)?;
                    info!("Wrote wordlist to {:?}", path);
                }
                None => println!("{}", json),
            }
        }
        Commands::Add(entry) => manage(controller, WordlistAction::Add, entry).await?,
        Commands::Edit(entry) => manage(controller, WordlistAction::Edit, entry).await?,
        Commands::Delete(entry) => manage(controller, WordlistAction::Delete, entry).await?,
        Commands::Completions { .. } => {}
    }

    Ok(())
}

async fn manage(controller: &Controller, action: WordlistAction, entry: EntryArgs) -> Result<()> {
    let outcome = controller
        .manage(action, &entry.word, &entry.translation)
        .await?;
    println!("'{}' {}", entry.word, outcome);
    Ok(())
}
