use crate::error::MenuError;
use crate::format::render_value;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::debug;

/// Wire marker for "this field is intentionally absent".
pub const EMPTY: &str = "EMPTY";

/// One size tier of an item, e.g. `{"size": "Large", "price": 4.5}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SizePrice {
    #[serde(
        default,
        deserialize_with = "optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub size: Option<String>,

    #[serde(
        default,
        deserialize_with = "optional_price",
        skip_serializing_if = "Option::is_none"
    )]
    pub price: Option<f64>,
}

impl SizePrice {
    pub fn new(size: impl Into<String>, price: f64) -> Self {
        Self {
            size: Some(size.into()),
            price: Some(price),
        }
    }
}

/// A single menu item as delivered by the data source.
///
/// Every text field decodes leniently: `null`, a missing key, an empty
/// string and the `"EMPTY"` sentinel all become `None`, and numbers are
/// accepted where text is expected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRecord {
    #[serde(
        default,
        deserialize_with = "optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<String>,

    #[serde(
        default,
        deserialize_with = "optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,

    #[serde(
        default,
        deserialize_with = "size_price_list",
        skip_serializing_if = "Option::is_none"
    )]
    pub size_price: Option<Vec<SizePrice>>,

    #[serde(
        rename = "menuLevel1",
        default,
        deserialize_with = "optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub group: Option<String>,

    #[serde(
        rename = "menuLevel2",
        default,
        deserialize_with = "optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub heading: Option<String>,

    #[serde(
        rename = "menuLevel3",
        default,
        deserialize_with = "optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub subheading: Option<String>,
}

impl ItemRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_size_price(mut self, entries: Vec<SizePrice>) -> Self {
        self.size_price = Some(entries);
        self
    }

    /// Files the record under up to three menu levels.
    #[must_use]
    pub fn filed_under(mut self, group: &str, heading: Option<&str>, subheading: Option<&str>) -> Self {
        self.group = Some(group.to_string());
        self.heading = heading.map(str::to_string);
        self.subheading = subheading.map(str::to_string);
        self
    }

    pub fn group_key(&self) -> Option<&str> {
        present(self.group.as_deref())
    }

    pub fn heading_key(&self) -> Option<&str> {
        present(self.heading.as_deref())
    }

    pub fn subheading_key(&self) -> Option<&str> {
        present(self.subheading.as_deref())
    }

    pub fn description_text(&self) -> Option<&str> {
        present(self.description.as_deref())
    }
}

/// Filters out empty text and the `"EMPTY"` sentinel.
pub(crate) fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|text| !text.is_empty() && *text != EMPTY)
}

/// Parses a JSON payload holding an array of item records.
pub fn parse_records(payload: &str) -> Result<Vec<ItemRecord>, MenuError> {
    let values: Vec<Value> = serde_json::from_str(payload)?;
    Ok(records_from_values(values))
}

/// Converts already-decoded JSON values into records, dropping anything
/// that is not an object.
pub fn records_from_values(values: Vec<Value>) -> Vec<ItemRecord> {
    let total = values.len();
    let records: Vec<ItemRecord> = values
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| {
            if !value.is_object() {
                debug!(index, value = %render_value(&value), "dropping non-object menu entry");
                return None;
            }
            match serde_json::from_value(value) {
                Ok(record) => Some(record),
                Err(error) => {
                    debug!(index, %error, "dropping undecodable menu entry");
                    None
                }
            }
        })
        .collect();

    if records.len() != total {
        debug!(kept = records.len(), total, "menu payload contained unusable entries");
    }
    records
}

fn text_from_value(value: Value) -> Option<String> {
    match value {
        Value::String(text) => present(Some(&text)).is_some().then_some(text),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn price_from_value(value: Value) -> Option<f64> {
    let price = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => present(Some(text.trim())).and_then(|text| text.parse().ok()),
        _ => None,
    };
    price.filter(|price: &f64| price.is_finite())
}

fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(deserializer)?.and_then(text_from_value))
}

fn optional_price<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(deserializer)?.and_then(price_from_value))
}

fn size_price_list<'de, D>(deserializer: D) -> Result<Option<Vec<SizePrice>>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(Value::Array(entries)) = Option::<Value>::deserialize(deserializer)? else {
        return Ok(None);
    };

    Ok(Some(
        entries
            .into_iter()
            .filter(Value::is_object)
            .filter_map(|entry| serde_json::from_value(entry).ok())
            .collect(),
    ))
}
