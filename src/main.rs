use clap::Parser;
use tracing_subscriber::EnvFilter;
use wordsim::cli::commands::{Cli, Commands};
use wordsim::domain::values::delimiter::Delimiter;
use wordsim::domain::values::options::SimilarityOptions;
use wordsim::Wordsim;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("wordsim=info")),
        )
        .init();

    let cli = Cli::parse();
    if let Err(e) = run_command(cli.command) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run_command(cmd: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        Commands::Word {
            word1,
            word2,
            string_distance_only,
        } => {
            let ws = open_engine(string_distance_only)?;
            let options = SimilarityOptions {
                string_distance_only,
            };
            let score = ws.word_similarity(&word1, &word2, options);
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({ "similarity": score })).unwrap()
            );
        }
        Commands::Text {
            text1,
            text2,
            string_distance_only,
        } => {
            let ws = open_engine(string_distance_only)?;
            let options = SimilarityOptions {
                string_distance_only,
            };
            let score = ws.text_similarity(&text1, &text2, options)?;
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({ "similarity": score })).unwrap()
            );
        }
        Commands::Distance { s1, s2 } => {
            let score = wordsim::string_distance(&s1, &s2);
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({ "distance": score })).unwrap()
            );
        }
        Commands::Tokenize { text, delimiters } => {
            let extra = delimiters
                .iter()
                .map(|s| parse_delimiter(s))
                .collect::<Result<Vec<_>, String>>()?;
            let sections = wordsim::tokenize(&text, &extra);
            println!("{}", serde_json::to_string_pretty(&sections).unwrap());
        }
        Commands::Stats => {
            let ws = open_engine(false)?;
            println!("{}", serde_json::to_string_pretty(&ws.stats()).unwrap());
        }
    }
    Ok(())
}

fn open_engine(string_distance_only: bool) -> Result<Wordsim, Box<dyn std::error::Error>> {
    if string_distance_only {
        // The store is never consulted in this mode.
        return Ok(Wordsim::without_embeddings());
    }
    let path = std::env::var("WORDSIM_EMBEDDINGS")
        .map_err(|_| "WORDSIM_EMBEDDINGS not set (path to a word-per-line embedding file)")?;
    Ok(Wordsim::open(&path)?)
}

fn parse_delimiter(s: &str) -> Result<Delimiter, String> {
    let (character, name) = s
        .split_once(':')
        .ok_or_else(|| format!("Invalid delimiter '{s}'. Use char:name, e.g. ;:semicolon"))?;
    let mut chars = character.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(Delimiter::new(c, name)),
        _ => Err(format!(
            "Delimiter must be a single character, got '{character}'"
        )),
    }
}
