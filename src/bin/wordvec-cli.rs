//! WORDVEC CLI
//!
//! Query a packaged Word2Vec model from the command line.

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};
use wordvec::{LoaderConfig, ModelArchive, Word2VecLoader};

/// WORDVEC CLI - Word2Vec model queries
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Path to the model bundle (.zip)
    #[arg(short, long)]
    model: String,

    /// Substring identifying the payload entry inside the bundle
    #[arg(long, default_value = wordvec::config::DEFAULT_PAYLOAD_NAME)]
    payload_name: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Average the vectors of the given tokens
    Transform {
        #[arg(required = true)]
        tokens: Vec<String>,
    },

    /// Cosine similarity between two tokens
    Distance { first: String, second: String },

    /// Tokens closest to the given one
    Nearest {
        token: String,

        /// Number of neighbours to print
        #[arg(short, long, default_value_t = 10)]
        k: usize,
    },

    /// Vocabulary size and dimensionality
    Info {
        /// Also print every token, sorted
        #[arg(long)]
        tokens: bool,
    },

    /// List the entries of the bundle without loading the model
    Entries,
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("wordvec=info".parse()?))
        .init();

    let args = Args::parse();

    let config = LoaderConfig::default().with_payload_name(&args.payload_name);
    let loader = Word2VecLoader::new(config);

    match args.command {
        Command::Transform { tokens } => {
            let model = loader.load(&args.model)?;
            let vector = model.transform(&tokens)?;
            let formatted: Vec<String> = vector.iter().map(|x| format!("{:.6}", x)).collect();
            println!("[{}]", formatted.join(", "));
        }
        Command::Distance { first, second } => {
            let model = loader.load(&args.model)?;
            println!("{:.6}", model.distance(&first, &second)?);
        }
        Command::Nearest { token, k } => {
            let model = loader.load(&args.model)?;
            for (other, similarity) in model.most_similar(&token, k)? {
                println!("{:<24} {:.6}", other, similarity);
            }
        }
        Command::Info { tokens } => {
            let model = loader.load(&args.model)?;
            println!("tokens: {}", model.len());
            println!("dimensionality: {}", model.dimensionality());
            if tokens {
                let mut vocabulary: Vec<&str> = model.store().tokens().collect();
                vocabulary.sort_unstable();
                for token in vocabulary {
                    println!("  {}", token);
                }
            }
        }
        Command::Entries => {
            let mut archive = ModelArchive::open(&args.model)?;
            for name in archive.entry_names()? {
                println!("{}", name);
            }
        }
    }

    Ok(())
}
