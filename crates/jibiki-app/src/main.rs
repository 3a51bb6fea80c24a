use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use jibiki_anki::{AnkiConnectClient, FieldMap};
use jibiki_config::Config;
use jibiki_fetch::WeblioClient;

mod preprocess;

use self::preprocess::{DefaultPreprocessor, Preprocessor};

/// Fetch Weblio definitions and format them for flashcard fields.
#[derive(Parser)]
#[command(name = "jibiki", version)]
struct Cli {
    /// Words to look up; several words are separated by 、
    words: String,

    /// Write the gloss into this Anki note instead of printing it
    #[arg(long)]
    note_id: Option<u64>,

    /// Definition field to fill (overrides the source-field mapping)
    #[arg(long)]
    field: Option<String>,

    /// Source field whose paired definition field receives the gloss
    #[arg(long)]
    src_field: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = Config::new();

    let words = DefaultPreprocessor.split_words(&cli.words);
    if words.is_empty() {
        anyhow::bail!("no words to look up");
    }

    let client = WeblioClient::with_options(
        config.network.base_url.clone(),
        Duration::from_secs(config.network.timeout_seconds),
    )?;

    // One fetch per word; results come back in word order, entries within a
    // word in document order.
    let mut gloss = String::new();
    for (word, result) in client.lookup_all(&words).await {
        match result {
            Ok(entries) => {
                for entry in &entries {
                    gloss.push_str(&entry.display());
                }
            }
            Err(e) => tracing::warn!("lookup failed for {}: {}", word, e),
        }
    }

    match cli.note_id {
        Some(note_id) => {
            if !config.anki.enabled {
                anyhow::bail!("Anki integration is disabled");
            }
            let field_map = FieldMap::new(
                config.fields.dic_src_fields.clone(),
                config.fields.def_fields.clone(),
            );
            let field = cli
                .field
                .or_else(|| {
                    cli.src_field
                        .as_deref()
                        .and_then(|src| field_map.dest_for(src).map(str::to_string))
                })
                .or_else(|| field_map.def_fields.first().cloned())
                .context("no definition field configured")?;

            let anki = AnkiConnectClient::new(config.anki.url.clone());
            let tag = (!config.anki.tag.is_empty()).then_some(config.anki.tag.as_str());
            let updated = jibiki_anki::fill_definition(&anki, note_id, &field, &gloss, tag).await?;
            if updated {
                tracing::info!("definition written to note {}", note_id);
            }
        }
        None => println!("{gloss}"),
    }

    Ok(())
}
