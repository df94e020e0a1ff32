use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use super::keywords::{KeywordSet, generate_search_keywords_from_fields};

/// A document whose text fields are indexed for keyword search
pub trait SearchableDocument: Serialize + DeserializeOwned + Send + Sync {
    /// Stable document identifier in the store
    fn id(&self) -> &str;

    /// Current values of the indexed fields, in a fixed order
    fn search_fields(&self) -> Vec<Option<&str>>;

    /// Build the keyword set from the current field values
    fn keyword_set(&self) -> KeywordSet {
        KeywordSet::from_fields(&self.search_fields())
    }
}

/// A rental vehicle. Indexed on model, plate and color.
///
/// An indexed field holding anything but a string is absent for indexing
/// and kept with the unindexed attributes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct Car {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plate: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Attributes that are stored but not indexed
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SearchableDocument for Car {
    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![
            self.model.as_deref(),
            self.plate.as_deref(),
            self.color.as_deref(),
        ]
    }
}

/// A user account. Indexed on name and email.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct User {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SearchableDocument for User {
    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![self.name.as_deref(), self.email.as_deref()]
    }
}

impl TryFrom<Map<String, Value>> for Car {
    type Error = String;

    fn try_from(mut fields: Map<String, Value>) -> Result<Self, Self::Error> {
        Ok(Self {
            id: take_id(&mut fields)?,
            model: take_text(&mut fields, "model"),
            plate: take_text(&mut fields, "plate"),
            color: take_text(&mut fields, "color"),
            extra: fields,
        })
    }
}

impl TryFrom<Map<String, Value>> for User {
    type Error = String;

    fn try_from(mut fields: Map<String, Value>) -> Result<Self, Self::Error> {
        Ok(Self {
            id: take_id(&mut fields)?,
            name: take_text(&mut fields, "name"),
            email: take_text(&mut fields, "email"),
            extra: fields,
        })
    }
}

fn take_id(fields: &mut Map<String, Value>) -> Result<String, String> {
    match fields.remove("id") {
        Some(Value::String(id)) => Ok(id),
        Some(other) => Err(format!("document id must be a string, got {}", other)),
        None => Err("missing field `id`".to_string()),
    }
}

/// Take a string field out of the attribute map. Any other value is left in
/// place and the field counts as absent.
fn take_text(fields: &mut Map<String, Value>, name: &str) -> Option<String> {
    match fields.remove(name) {
        Some(Value::String(text)) => Some(text),
        Some(other) => {
            debug!(field = name, value = %other, "non-string field treated as absent");
            fields.insert(name.to_string(), other);
            None
        }
        None => None,
    }
}

/// Search keywords for a car (model, plate, color)
pub fn generate_car_search_keywords(car: &Car) -> Vec<String> {
    generate_search_keywords_from_fields(&car.search_fields())
}

/// Search keywords for a user (name, email)
pub fn generate_user_search_keywords(user: &User) -> Vec<String> {
    generate_search_keywords_from_fields(&user.search_fields())
}

/// A document as persisted: its attributes plus the keyword array.
///
/// The keyword array is only ever replaced as a whole, from the document's
/// current fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexedDocument<D> {
    #[serde(flatten)]
    document: D,
    #[serde(rename = "searchKeywords", default)]
    search_keywords: Vec<String>,
}

impl<D: SearchableDocument> IndexedDocument<D> {
    pub fn new(document: D) -> Self {
        let search_keywords = document.keyword_set().into_sorted_vec();
        Self {
            document,
            search_keywords,
        }
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn search_keywords(&self) -> &[String] {
        &self.search_keywords
    }

    /// Replace the document and regenerate its keywords
    pub fn set_document(&mut self, document: D) {
        *self = Self::new(document);
    }

    /// Regenerate keywords from the current fields.
    /// Returns true if the stored keywords changed.
    pub fn refresh(&mut self) -> bool {
        let fresh = self.document.keyword_set().into_sorted_vec();
        if fresh == self.search_keywords {
            return false;
        }
        self.search_keywords = fresh;
        true
    }

    pub fn into_document(self) -> D {
        self.document
    }
}
