mod client;
mod fields;

pub use client::{AnkiConnectClient, NoteFieldValue, NoteInfo};
pub use fields::FieldMap;

use anyhow::{Context, Result};

/// Write a rendered gloss into a note's definition field.
///
/// A field that already has content is left alone, so a hand-written
/// definition never gets clobbered. An updated note is tagged with `tag`
/// when one is given. Returns whether the note was updated.
pub async fn fill_definition(
    client: &AnkiConnectClient,
    note_id: u64,
    field: &str,
    gloss: &str,
    tag: Option<&str>,
) -> Result<bool> {
    let notes = client.notes_info(&[note_id]).await?;
    let note = notes.into_iter().next().context("note not found")?;

    match note.fields.get(field) {
        None => anyhow::bail!("note has no field named {}", field),
        Some(existing) if !existing.value.is_empty() => {
            tracing::info!("field {} of note {} already filled, skipping", field, note_id);
            Ok(false)
        }
        Some(_) => {
            client.update_note_field(note_id, field, gloss).await?;
            if let Some(tag) = tag {
                client.add_tag(&[note_id], tag).await?;
            }
            Ok(true)
        }
    }
}
