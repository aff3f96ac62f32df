use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "wordsim", about = "Word and text similarity over precomputed embeddings")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Similarity between two words (cosine, falling back to string distance)
    Word {
        word1: String,
        word2: String,
        /// Score with Jaro-Winkler only; no embeddings needed
        #[arg(long)]
        string_distance_only: bool,
    },
    /// Similarity between two texts
    Text {
        text1: String,
        text2: String,
        /// Score with Jaro-Winkler only; no embeddings needed
        #[arg(long)]
        string_distance_only: bool,
    },
    /// Jaro-Winkler similarity between two strings
    Distance { s1: String, s2: String },
    /// Split text into sections of word tokens
    Tokenize {
        text: String,
        /// Extra delimiter as char:name (e.g. ";:semicolon"), repeatable
        #[arg(long = "delimiter")]
        delimiters: Vec<String>,
    },
    /// Embedding store statistics
    Stats,
}
