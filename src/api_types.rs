use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Wire mirror of the external joke source payload. The source emits either
/// a one-liner (`single`) or a setup/delivery pair (`twopart`), tagged by a
/// `type` field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum RawJoke {
    Single {
        joke: String,
        id: i64,
        category: String,
        #[serde(default)]
        safe: bool,
        #[serde(default)]
        lang: String,
    },
    Twopart {
        setup: String,
        delivery: String,
        id: i64,
        category: String,
        #[serde(default)]
        safe: bool,
        #[serde(default)]
        lang: String,
    },
}

impl RawJoke {
    pub fn id(&self) -> i64 {
        match self {
            RawJoke::Single { id, .. } | RawJoke::Twopart { id, .. } => *id,
        }
    }

    pub fn category(&self) -> &str {
        match self {
            RawJoke::Single { category, .. } | RawJoke::Twopart { category, .. } => category,
        }
    }
}

/// The source wraps multi-joke responses as `{"jokes": [...]}` but returns a
/// bare payload when a single joke was requested.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum JokeSourceDocument {
    Batch { jokes: Vec<RawJoke> },
    Single(RawJoke),
}

pub fn decode_joke_batch(body: &str) -> Result<Vec<RawJoke>> {
    let doc: JokeSourceDocument =
        serde_json::from_str(body).context("Decoding joke source payload")?;
    Ok(match doc {
        JokeSourceDocument::Batch { jokes } => jokes,
        JokeSourceDocument::Single(joke) => vec![joke],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_bare_single_payload() {
        let body = r#"{"type":"single","joke":"I told a joke.","id":9,"category":"Pun","safe":true,"lang":"en"}"#;
        let jokes = decode_joke_batch(body).unwrap();
        assert_eq!(jokes.len(), 1);
        assert_eq!(jokes[0].id(), 9);
        assert_eq!(jokes[0].category(), "Pun");
    }

    #[test]
    fn decodes_wrapped_batch() {
        let body = r#"{
            "error": false,
            "amount": 2,
            "jokes": [
                {"type":"twopart","setup":"Knock knock.","delivery":"Who is there?","id":1,"category":"Misc"},
                {"type":"single","joke":"Short one.","id":2,"category":"Pun"}
            ]
        }"#;
        let jokes = decode_joke_batch(body).unwrap();
        assert_eq!(jokes.len(), 2);
        assert_eq!(jokes[0].id(), 1);
        assert!(matches!(jokes[1], RawJoke::Single { .. }));
    }

    #[test]
    fn missing_fields_default() {
        let body = r#"{"type":"single","joke":"No flags.","id":3,"category":"Any"}"#;
        let jokes = decode_joke_batch(body).unwrap();
        match &jokes[0] {
            RawJoke::Single { safe, lang, .. } => {
                assert!(!*safe);
                assert!(lang.is_empty());
            }
            other => panic!("unexpected shape: {:?}", other),
        }
    }

    #[test]
    fn unknown_shape_fails() {
        let body = r#"{"type":"limerick","verse":"There once was...","id":4,"category":"Any"}"#;
        assert!(decode_joke_batch(body).is_err());
    }
}
