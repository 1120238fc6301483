//! Preview binary - prints generated sentences without starting the server
//!
//! Usage:
//!   cargo run --bin preview                          # 5 English sentences of 12 words
//!   cargo run --bin preview -- --language id         # Indonesian pools
//!   cargo run --bin preview -- --count 3 --words 8   # 3 sentences of 8 words
//!
//! Optional environment variables:
//! - WORD_POOLS_DIR (directory with <code>.json overrides)

use anyhow::{bail, Context, Result};
use tracing::info;
use typing_content_api::config::Config;
use typing_content_api::generator::SentenceGenerator;
use typing_content_api::locale::Locale;
use typing_content_api::params::bounded_count;
use typing_content_api::words::WordCatalog;

/// Command line options for the preview
struct PreviewArgs {
    count: usize,
    words_per_sentence: usize,
    language: Option<String>,
}

impl PreviewArgs {
    fn parse(args: &[String]) -> Result<Self> {
        let mut count = None;
        let mut words = None;
        let mut language = None;

        let mut iter = args.iter().skip(1);
        while let Some(arg) = iter.next() {
            let mut value = || {
                iter.next()
                    .cloned()
                    .with_context(|| format!("{} requires a value", arg))
            };
            match arg.as_str() {
                "--count" => count = Some(value()?),
                "--words" => words = Some(value()?),
                "--language" => language = Some(value()?),
                other => bail!("Unknown argument: {}", other),
            }
        }

        Ok(Self {
            count: bounded_count(count.as_deref(), "count", 5, 1..=20)?,
            words_per_sentence: bounded_count(words.as_deref(), "words", 12, 5..=25)?,
            language,
        })
    }
}

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("typing_content_api=warn".parse()?)
                .add_directive("preview=info".parse()?),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    let preview = PreviewArgs::parse(&args)?;

    let config = Config::from_env()?;
    let catalog = WordCatalog::load(config.word_pools_dir.as_deref())
        .context("Failed to load word pools")?;

    let locale = Locale::resolve(preview.language.as_deref());
    info!(
        "Previewing {} sentences of {} words ({})",
        preview.count,
        preview.words_per_sentence,
        locale.name()
    );

    let generator = SentenceGenerator::new(catalog.get(locale).sentence_pool());
    let batch = generator.generate_batch(
        &mut rand::thread_rng(),
        preview.count,
        preview.words_per_sentence,
    );

    println!("\n{}", "=".repeat(60));
    for (i, content) in batch.generated_content.iter().enumerate() {
        let meta = &content.metadata;
        println!("{:>2}. {}", i + 1, content.sentence);
        println!(
            "    common: {}  names: {}  special: {}",
            meta.common_word_count, meta.name_count, meta.special_word_count
        );
    }
    println!("{}", "=".repeat(60));
    println!("Special words: {}", batch.special_words.join(", "));
    println!(
        "Average words per sentence: {:.1}",
        batch.statistics.average_words_per_sentence
    );

    Ok(())
}
