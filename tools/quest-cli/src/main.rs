mod rules;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use quest_generator::QuestionGenerator;
use quest_graph::SentenceGraph;
use quest_morph::LexiconAnalyzer;
use quest_protocol::Lexicon;

#[derive(Parser)]
#[command(author, version, about = "Asks comprehension questions about parsed Russian sentences")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compile a JSON lexicon to an rkyv archive
    Compile {
        #[arg(value_name = "FILE")]
        input: PathBuf,

        #[arg(value_name = "FILE")]
        output: PathBuf,
    },
    /// Print questions for a parsed sentence
    Ask {
        #[arg(value_name = "FILE")]
        sentence: PathBuf,

        /// JSON lexicon or compiled `.rkyv` archive
        #[arg(short, long, value_name = "FILE")]
        lexicon: PathBuf,

        /// TOML file overriding the built-in word lists
        #[arg(short, long, value_name = "FILE")]
        rules: Option<PathBuf>,

        /// Emit JSON records instead of plain lines
        #[arg(long)]
        json: bool,
    },
}

fn compile(input: &Path, output: &Path) -> Result<()> {
    println!("📖 Reading JSON from {:?}...", input);
    let text = fs::read_to_string(input).with_context(|| format!("reading {}", input.display()))?;
    let lexicon: Lexicon = serde_json::from_str(&text)?;

    // Loading first rejects bad tags before they reach the archive.
    LexiconAnalyzer::new(&lexicon)?;
    println!(
        "⚙️  Compiling lexicon version {} with {} lexemes...",
        lexicon.version,
        lexicon.lexemes.len()
    );
    let bytes = quest_morph::archive(&lexicon)?;

    fs::write(output, bytes).with_context(|| format!("writing {}", output.display()))?;
    println!("✅ Success! Binary written to {:?}", output);
    Ok(())
}

fn ask(sentence: &Path, lexicon: &Path, rules: Option<&Path>, json: bool) -> Result<()> {
    let analyzer = LexiconAnalyzer::load(lexicon)
        .with_context(|| format!("loading lexicon {}", lexicon.display()))?;
    info!("Lexicon {} has {} lexemes", lexicon.display(), analyzer.len());
    let generator = QuestionGenerator::new(&analyzer, rules::load_rules(rules)?)?;

    let text =
        fs::read_to_string(sentence).with_context(|| format!("reading {}", sentence.display()))?;
    let graph = SentenceGraph::from_json(&text)?;
    let report = generator.generate(&graph);

    if json {
        println!("{}", serde_json::to_string_pretty(&report.questions)?);
    } else {
        for question in &report.questions {
            println!("{}", question.text);
        }
    }
    if !report.failures.is_empty() {
        info!("{} words or questions were skipped", report.failures.len());
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Compile { input, output } => compile(&input, &output),
        Command::Ask {
            sentence,
            lexicon,
            rules,
            json,
        } => ask(&sentence, &lexicon, rules.as_deref(), json),
    }
}
