use std::collections::HashMap;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Clone)]
pub struct AnkiConnectClient {
    base_url: String,
    client: reqwest::Client,
}

/// One note as returned by `notesInfo`.
#[derive(Debug, Deserialize)]
pub struct NoteInfo {
    #[serde(rename = "noteId")]
    pub note_id: u64,
    pub fields: HashMap<String, NoteFieldValue>,
}

#[derive(Debug, Deserialize)]
pub struct NoteFieldValue {
    pub value: String,
    pub order: u32,
}

impl AnkiConnectClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    /// Check if AnkiConnect is available
    pub async fn check_connection(&self) -> Result<u32> {
        let response: AnkiResponse<u32> = self.invoke("version", json!({})).await?;
        response.into_result()
    }

    /// Note ids matching an Anki search query
    pub async fn find_notes(&self, query: &str) -> Result<Vec<u64>> {
        let response: AnkiResponse<Vec<u64>> =
            self.invoke("findNotes", json!({ "query": query })).await?;
        response.into_result()
    }

    /// Field contents for the given notes
    pub async fn notes_info(&self, note_ids: &[u64]) -> Result<Vec<NoteInfo>> {
        let response: AnkiResponse<Vec<NoteInfo>> =
            self.invoke("notesInfo", json!({ "notes": note_ids })).await?;
        response.into_result()
    }

    /// Overwrite a single field of a note
    pub async fn update_note_field(&self, note_id: u64, field: &str, value: &str) -> Result<()> {
        let mut fields = serde_json::Map::new();
        fields.insert(field.to_string(), json!(value));
        let params = json!({
            "note": {
                "id": note_id,
                "fields": fields
            }
        });

        // updateNoteFields returns null on success, so only the error
        // channel matters here.
        let response: AnkiResponse<serde_json::Value> =
            self.invoke("updateNoteFields", params).await?;
        if let Some(error) = response.error {
            anyhow::bail!("AnkiConnect error: {}", error);
        }
        Ok(())
    }

    /// Add a tag to the given notes
    pub async fn add_tag(&self, note_ids: &[u64], tag: &str) -> Result<()> {
        let params = json!({ "notes": note_ids, "tags": tag });

        // addTags also returns null on success.
        let response: AnkiResponse<serde_json::Value> = self.invoke("addTags", params).await?;
        if let Some(error) = response.error {
            anyhow::bail!("AnkiConnect error: {}", error);
        }
        Ok(())
    }

    /// Invoke an AnkiConnect API action
    async fn invoke<T>(&self, action: &str, params: serde_json::Value) -> Result<AnkiResponse<T>>
    where
        T: for<'de> Deserialize<'de>,
    {
        let request = AnkiRequest {
            action: action.to_string(),
            version: 6,
            params,
        };

        let response = self
            .client
            .post(&self.base_url)
            .json(&request)
            .send()
            .await
            .context("Failed to send request to AnkiConnect")?;

        response
            .json::<AnkiResponse<T>>()
            .await
            .context("Failed to parse AnkiConnect response")
    }
}

#[derive(Serialize)]
struct AnkiRequest {
    action: String,
    version: u32,
    params: serde_json::Value,
}

#[derive(Deserialize)]
struct AnkiResponse<T> {
    result: Option<T>,
    error: Option<String>,
}

impl<T> AnkiResponse<T> {
    fn into_result(self) -> Result<T> {
        if let Some(error) = self.error {
            anyhow::bail!("AnkiConnect error: {}", error);
        }

        self.result.context("AnkiConnect returned null result")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_response_surfaces_the_message() {
        let response: AnkiResponse<Vec<u64>> =
            serde_json::from_str(r#"{"result": null, "error": "collection is not available"}"#)
                .unwrap();
        let err = response.into_result().unwrap_err();
        assert!(err.to_string().contains("collection is not available"));
    }

    #[test]
    fn null_result_without_error_is_still_an_error() {
        let response: AnkiResponse<u32> =
            serde_json::from_str(r#"{"result": null, "error": null}"#).unwrap();
        assert!(response.into_result().is_err());
    }

    #[test]
    fn notes_info_payload_deserializes() {
        let note: NoteInfo = serde_json::from_str(
            r#"{
                "noteId": 1502298033753,
                "fields": {
                    "Expression": {"value": "水", "order": 0},
                    "Meaning": {"value": "", "order": 1}
                }
            }"#,
        )
        .unwrap();
        assert_eq!(note.note_id, 1502298033753);
        assert_eq!(note.fields["Expression"].value, "水");
        assert!(note.fields["Meaning"].value.is_empty());
    }
}
