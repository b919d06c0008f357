//! akh-realise CLI: realize phrase-tree descriptions as English text.

use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};

use akh_realiser::features::Category;
use akh_realiser::lexicon::{BasicLexicon, Lexicon, MorphRule};
use akh_realiser::realiser::{OutputMode, Realiser, RealiserConfig};
use akh_realiser::spec::SpecTree;
use akh_realiser::spec::desc::Node;

#[derive(Parser)]
#[command(
    name = "akh-realise",
    version,
    about = "Grammatical realization: phrase trees to English text"
)]
struct Cli {
    /// Extra lexicon entries (TOML). May be repeated.
    #[arg(long, global = true)]
    lexicon: Vec<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Realize a JSON phrase-tree description.
    Realise {
        /// JSON file to read. Reads stdin when omitted.
        file: Option<PathBuf>,

        /// Realize as a whole document (sentence and paragraph layout).
        #[arg(long)]
        document: bool,

        /// Emit HTML instead of plain text.
        #[arg(long)]
        html: bool,

        /// Paragraph pouring width; 0 disables pouring.
        #[arg(long)]
        line_length: Option<usize>,

        /// Realiser configuration file (TOML).
        #[arg(long)]
        config: Option<PathBuf>,

        /// Contract negated auxiliaries ("doesn't").
        #[arg(long)]
        contract: bool,
    },

    /// Apply one inflection rule to a word.
    Inflect {
        /// Rule name: plural, comparative, superlative, present3s, past,
        /// past_participle or present_participle.
        rule: String,

        /// Base form.
        word: String,
    },

    /// List the inflection rules.
    Rules,
}

fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(3)
                .build(),
        )
    }))
    .ok(); // Ignore error if hook already set (e.g., in tests)

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let lexicon = Arc::new(BasicLexicon::english());
    for path in &cli.lexicon {
        let added = lexicon.load_file(path)?;
        tracing::info!(path = %path.display(), entries = added, "loaded lexicon");
    }

    match cli.command {
        Commands::Realise {
            file,
            document,
            html,
            line_length,
            config,
            contract,
        } => {
            let source = match &file {
                Some(path) => std::fs::read_to_string(path).into_diagnostic()?,
                None => {
                    let mut buf = String::new();
                    std::io::stdin().read_to_string(&mut buf).into_diagnostic()?;
                    buf
                }
            };

            let mut settings = match &config {
                Some(path) => {
                    let loaded = RealiserConfig::load(path)?;
                    tracing::info!(path = %path.display(), "loaded realiser config");
                    loaded
                }
                None => RealiserConfig::default(),
            };
            if let Some(width) = line_length {
                settings.line_length = width;
            }
            if html {
                settings.output = OutputMode::Html;
            }
            if contract {
                settings.contract_negation = true;
            }

            let node = Node::from_json(&source)?;
            let mut tree = SpecTree::new(lexicon.clone());
            let root = node.build(&mut tree)?;
            tracing::debug!(nodes = tree.len(), "built phrase tree");

            let realiser = Realiser::for_tree(&tree).with_config(settings);
            let text = if document {
                realiser.realise_as_document(&tree, root)
            } else {
                realiser.realise(&tree, root)
            };
            println!("{text}");
        }

        Commands::Inflect { rule, word } => {
            let rule = MorphRule::from_name(&rule)
                .ok_or_else(|| miette::miette!("unknown rule \"{rule}\" (try `akh-realise rules`)"))?;
            let category = match rule {
                MorphRule::Plural => Category::Noun,
                MorphRule::Comparative | MorphRule::Superlative => Category::Adjective,
                _ => Category::Verb,
            };
            let entry = lexicon.get_or_create(category, &word);
            match lexicon.apply_rule(rule, &entry) {
                Some(form) => println!("{form}"),
                None => println!("{}", entry.base),
            }
        }

        Commands::Rules => {
            for rule in MorphRule::ALL {
                println!("{}", rule.name());
            }
        }
    }

    Ok(())
}
