use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use verborum::search::{HighlightFragment, to_html, to_marked_text};
use verborum::{DictionaryBrowser, DictionaryConfig, SessionNumber};

#[derive(Parser)]
#[command(name = "verborum", about = "Search the lexicon of De verborum significatione")]
struct Cli {
    /// Text to find in headwords, definitions and examples
    #[arg(short, long, default_value = "")]
    query: String,
    /// Restrict results to one session
    #[arg(short, long)]
    session: Option<SessionNumber>,
    /// JSON configuration file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Directory of session<N>.json files (overrides the configuration)
    #[arg(long)]
    sessions_dir: Option<PathBuf>,
    /// Collation locale for sorting headwords (overrides the configuration)
    #[arg(long)]
    locale: Option<String>,
    /// List the sessions and their entry counts, then exit
    #[arg(long)]
    list_sessions: bool,
    /// Render matches as HTML <mark> elements instead of [brackets]
    #[arg(long)]
    html: bool,
}

fn render(fragments: &[HighlightFragment], html: bool) -> String {
    if html {
        to_html(fragments)
    } else {
        to_marked_text(fragments, "[", "]")
    }
}

fn run(cli: Cli) -> verborum::Result<()> {
    let mut config = match &cli.config {
        Some(path) => DictionaryConfig::from_file(path)?,
        None => DictionaryConfig::default(),
    };
    if let Some(dir) = cli.sessions_dir {
        config.sessions_dir = Some(dir);
    }
    if let Some(locale) = cli.locale {
        config.sorting_locale = locale;
    }

    let mut browser = DictionaryBrowser::new(config.open()?);

    if cli.list_sessions {
        for label in browser.session_labels() {
            println!("{}", label.label);
        }
        return Ok(());
    }

    browser.set_query(cli.query);
    if let Some(number) = cli.session {
        browser.toggle_session(number);
    }

    match browser.empty_message() {
        Some(message) => println!("{}", message),
        None => {
            println!("{}", browser.summary());
            for entry in browser.highlighted_results() {
                println!();
                println!("{}", render(&entry.word, cli.html));
                println!("  Definition: {}", render(&entry.definition, cli.html));
                if let Some(example) = &entry.example {
                    println!("  Example: {}", render(example, cli.html));
                }
            }
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
