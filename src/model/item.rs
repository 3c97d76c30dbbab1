// src/model/item.rs
//! Normalized page/database records.

use super::ObjectKind;
use crate::types::{flatten_plain_text, ItemId, RichText, ValidationError};
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Fields every record must carry, checked before anything else is derived.
const REQUIRED_FIELDS: [&str; 4] = ["id", "object", "created_time", "last_edited_time"];

/// One typed field declared on an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// A page or database as returned by the API, with its title and
/// `Name` property flattened to plain strings.
///
/// Items never hold a reference to their parent; the owning
/// [`Items`](super::Items) collection resolves `parent_id` into the
/// parent item once both are present.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    id: ItemId,
    kind: ObjectKind,
    created_time: String,
    last_edited_time: String,
    properties: IndexMap<String, Property>,
    title: String,
    title_rich: Vec<RichText>,
    name: String,
    name_rich: Vec<RichText>,
    parent_id: Option<ItemId>,
    archived: Option<bool>,
}

#[derive(Deserialize)]
struct RawItem {
    id: String,
    object: String,
    created_time: String,
    last_edited_time: String,
    #[serde(default)]
    properties: Option<IndexMap<String, Value>>,
    #[serde(default)]
    title: Option<Vec<RichText>>,
    #[serde(default)]
    parent: Option<RawParent>,
    #[serde(default)]
    archived: Option<bool>,
}

#[derive(Deserialize)]
struct RawParent {
    #[serde(default)]
    database_id: Option<String>,
    #[serde(default)]
    page_id: Option<String>,
}

impl Item {
    /// Builds an item from one raw record of a search or retrieve response.
    ///
    /// The parent id comes from `parent.database_id`, else `parent.page_id`.
    /// `title` and `properties.Name.title` are optional and flatten to
    /// empty strings when absent.
    pub fn from_raw(raw: &Value) -> Result<Self, ValidationError> {
        let record = raw.as_object().ok_or_else(|| ValidationError::MalformedRecord {
            reason: "record is not a JSON object".to_string(),
        })?;

        for field in REQUIRED_FIELDS {
            if let None | Some(Value::Null) = record.get(field) {
                return Err(ValidationError::MissingField(field));
            }
        }

        let raw_item = RawItem::deserialize(raw).map_err(malformed)?;
        let kind: ObjectKind = raw_item.object.parse()?;

        let parent_id = raw_item
            .parent
            .and_then(|parent| parent.database_id.or(parent.page_id))
            .map(ItemId::new);

        let title_rich = raw_item.title.unwrap_or_default();
        let title = flatten_plain_text(&title_rich);

        let raw_properties = raw_item.properties.unwrap_or_default();
        let name_rich = extract_name(&raw_properties)?;
        let name = flatten_plain_text(&name_rich);

        let properties = raw_properties
            .into_iter()
            .map(|(key, value)| {
                Property::deserialize(&value)
                    .map(|property| (key, property))
                    .map_err(malformed)
            })
            .collect::<Result<IndexMap<_, _>, _>>()?;

        Ok(Self {
            id: ItemId::new(raw_item.id),
            kind,
            created_time: raw_item.created_time,
            last_edited_time: raw_item.last_edited_time,
            properties,
            title,
            title_rich,
            name,
            name_rich,
            parent_id,
            archived: raw_item.archived,
        })
    }

    pub fn id(&self) -> &ItemId {
        &self.id
    }

    pub fn kind(&self) -> ObjectKind {
        self.kind
    }

    pub fn created_time(&self) -> &str {
        &self.created_time
    }

    pub fn last_edited_time(&self) -> &str {
        &self.last_edited_time
    }

    /// `created_time` as a timestamp, if it is RFC 3339.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.created_time)
    }

    /// `last_edited_time` as a timestamp, if it is RFC 3339.
    pub fn last_edited_at(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.last_edited_time)
    }

    pub fn properties(&self) -> &IndexMap<String, Property> {
        &self.properties
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn title_rich(&self) -> &[RichText] {
        &self.title_rich
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn name_rich(&self) -> &[RichText] {
        &self.name_rich
    }

    pub fn parent_id(&self) -> Option<&ItemId> {
        self.parent_id.as_ref()
    }

    pub fn archived(&self) -> Option<bool> {
        self.archived
    }
}

/// Reads `properties.Name.title`, treating any missing level as empty.
fn extract_name(properties: &IndexMap<String, Value>) -> Result<Vec<RichText>, ValidationError> {
    match properties.get("Name").and_then(|name| name.get("title")) {
        None | Some(Value::Null) => Ok(Vec::new()),
        // Database schemas declare the title column as `"title": {}`
        Some(Value::Object(_)) => Ok(Vec::new()),
        Some(runs) => Vec::<RichText>::deserialize(runs).map_err(malformed),
    }
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|ts| ts.with_timezone(&Utc))
}

fn malformed(err: serde_json::Error) -> ValidationError {
    ValidationError::MalformedRecord {
        reason: err.to_string(),
    }
}
