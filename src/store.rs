use crate::errors::StoreError;
use crate::models::{Quote, QuoteDocument};
use chrono::NaiveDate;
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::{fmt, path::Path};
use tokio::fs;
use tracing::{debug, error, warn};

/// Date-keyed quotes in the order their keys appear in the source file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuoteStore {
    entries: Vec<(String, Quote)>,
}

/// Result of a daily lookup. `is_fallback` is set when the requested day
/// had no entry and the first stored quote was picked instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyQuote<'a> {
    pub date: &'a str,
    pub quote: &'a Quote,
    pub is_fallback: bool,
}

impl QuoteStore {
    /// A repeated key keeps its original position and takes the newer quote.
    pub fn insert(&mut self, date: impl Into<String>, quote: Quote) {
        let date = date.into();
        match self.entries.iter_mut().find(|(key, _)| *key == date) {
            Some(entry) => entry.1 = quote,
            None => self.entries.push((date, quote)),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn dates(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(date, _)| date.as_str())
    }

    pub fn quote_for(&self, date: &str) -> Option<&Quote> {
        self.entries
            .iter()
            .find(|(key, _)| key == date)
            .map(|(_, quote)| quote)
    }

    pub fn daily_quote_at(&self, today: NaiveDate) -> Result<DailyQuote<'_>, StoreError> {
        let key = date_key(today);
        if let Some((date, quote)) = self.entries.iter().find(|(date, _)| *date == key) {
            return Ok(DailyQuote {
                date,
                quote,
                is_fallback: false,
            });
        }

        let (date, quote) = self.entries.first().ok_or(StoreError::NoQuotes)?;
        Ok(DailyQuote {
            date,
            quote,
            is_fallback: true,
        })
    }
}

impl<'de> Deserialize<'de> for QuoteStore {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = QuoteStore;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of date keys to quotes")
            }

            // A record that is not a valid quote is dropped on its own so
            // the rest of the file stays servable.
            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut store = QuoteStore::default();
                while let Some((date, raw)) = map.next_entry::<String, Value>()? {
                    match serde_json::from_value::<Quote>(raw) {
                        Ok(quote) => store.insert(date, quote),
                        Err(err) => warn!("skipping invalid quote for {date}: {err}"),
                    }
                }
                Ok(store)
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

impl Serialize for QuoteStore {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (date, quote) in &self.entries {
            map.serialize_entry(date, quote)?;
        }
        map.end()
    }
}

/// Reads and parses the quotes file. Called per request; nothing is cached.
pub async fn load_store(path: &Path) -> Result<QuoteStore, StoreError> {
    let bytes = fs::read(path).await.map_err(|err| {
        error!("failed to read quotes file {}: {err}", path.display());
        StoreError::unavailable(path, err)
    })?;

    let document: QuoteDocument = serde_json::from_slice(&bytes).map_err(|err| {
        error!("failed to parse quotes file {}: {err}", path.display());
        StoreError::unavailable(path, err)
    })?;

    let store = document.quotes.unwrap_or_default();
    debug!(dates = ?store.dates().collect::<Vec<_>>(), "quotes file loaded");
    Ok(store)
}

pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Accepts only the canonical zero-padded `YYYY-MM-DD` form.
pub fn parse_date_key(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .filter(|date| date_key(*date) == value)
}
