use anyhow::Result;
use clap::{Parser, Subcommand};
use search_cli::links::DEFAULT_LINK_TEMPLATE;
use search_cli::present::DEFAULT_PREVIEW_LINES;
use search_cli::repl::Repl;
use search_cli::{load_corpus, LinkTable, Presenter};
use search_core::{Query, SearchEngine};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "corpus-search")]
#[command(about = "Boolean, phrase, proximity and Soundex search over a text corpus", long_about = None)]
struct Cli {
    /// Directory holding the corpus `.txt` files
    #[arg(long, env = "CORPUS_DIR", default_value = "./Corpus")]
    corpus: PathBuf,
    /// JSON file mapping document IDs to external file IDs
    #[arg(long, env = "CORPUS_LINKS")]
    links: Option<PathBuf>,
    /// Link template; `{id}` is replaced by the external file ID
    #[arg(long, default_value = DEFAULT_LINK_TEMPLATE)]
    link_template: String,
    /// Number of content lines shown per result
    #[arg(long, default_value_t = DEFAULT_PREVIEW_LINES)]
    preview_lines: usize,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive search menu (default)
    Repl,
    /// Terms joined by AND / OR / NOT, evaluated left to right
    Boolean { query: String },
    /// Documents where two words occur within a distance of each other
    Proximity { first: String, second: String, distance: u32 },
    /// Documents containing a word that sounds like NAME
    Phonetic { name: String },
    /// Soundex terms joined by lower-case and / or / not
    PhoneticBoolean { query: String },
    /// Exact phrase match
    Phrase { phrase: String },
}

impl Commands {
    fn into_query(self) -> Option<Query> {
        match self {
            Commands::Repl => None,
            Commands::Boolean { query } => Some(Query::Boolean { query }),
            Commands::Proximity { first, second, distance } => {
                Some(Query::Proximity { first, second, max_distance: distance })
            }
            Commands::Phonetic { name } => Some(Query::Phonetic { name }),
            Commands::PhoneticBoolean { query } => Some(Query::PhoneticBoolean { query }),
            Commands::Phrase { phrase } => Some(Query::Phrase { phrase }),
        }
    }
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(io::stderr).init();
    let cli = Cli::parse();

    let corpus = load_corpus(&cli.corpus)?;
    let links = match &cli.links {
        Some(path) => LinkTable::load(path, cli.link_template.as_str())?,
        None => LinkTable::new(Default::default(), cli.link_template.as_str()),
    };
    let engine = SearchEngine::build(corpus);
    let presenter = Presenter::new(engine.corpus(), &links, cli.preview_lines);

    match cli.command.and_then(Commands::into_query) {
        Some(query) => {
            let outcome = engine.execute(&query)?;
            let mut stdout = io::stdout().lock();
            write!(stdout, "{}", presenter.render(&outcome))?;
            stdout.flush()?;
        }
        None => {
            let stdin = io::stdin().lock();
            Repl::new(&engine, &presenter, stdin, io::stdout().lock()).run()?;
        }
    }
    Ok(())
}
