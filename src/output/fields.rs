//! Output field descriptors

use crate::types::{JsonValue, Record};

/// One output column and how to extract it from a record
#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    /// Copied from the top-level key of the same name
    Direct {
        /// Column and key name
        name: String,
    },
    /// Read from a nested path, falling back to `default`
    Derived {
        /// Column name
        name: String,
        /// Keys walked from the record root
        path: Vec<String>,
        /// Value used when any step is missing or null
        default: Option<JsonValue>,
    },
}

impl Field {
    /// Create a direct field
    pub fn direct(name: impl Into<String>) -> Self {
        Self::Direct { name: name.into() }
    }

    /// Create a derived field from a list of keys
    pub fn derived<I, S>(name: impl Into<String>, path: I, default: Option<JsonValue>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Derived {
            name: name.into(),
            path: path.into_iter().map(Into::into).collect(),
            default,
        }
    }

    /// Create a derived field from a dotted path such as `metadata.pub_country.tag`
    pub fn derived_dotted(
        name: impl Into<String>,
        path: &str,
        default: Option<JsonValue>,
    ) -> Self {
        Self::derived(name, path.split('.').filter(|s| !s.is_empty()), default)
    }

    /// Column name
    pub fn name(&self) -> &str {
        match self {
            Self::Direct { name } | Self::Derived { name, .. } => name,
        }
    }

    /// Resolve the field against a record
    pub fn extract<'a>(&'a self, record: &'a Record) -> Option<&'a JsonValue> {
        match self {
            Self::Direct { name } => record.get(name),
            Self::Derived { path, default, .. } => {
                record.lookup(path.as_slice()).or(default.as_ref())
            }
        }
    }
}

/// Ordered list of output columns
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FieldSpec {
    fields: Vec<Field>,
}

impl FieldSpec {
    /// Create a spec from fields in column order
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    /// Append a field
    #[must_use]
    pub fn with(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Columns of a media source export.
    ///
    /// Geographic, language and type columns come from the tag attached
    /// under `metadata`, which is null for untagged sources.
    pub fn media() -> Self {
        let metadata_tag = |column: &str| Field::derived(column, ["metadata", column, "tag"], None);

        Self::new(vec![
            Field::direct("media_id"),
            Field::direct("url"),
            Field::direct("name"),
            metadata_tag("pub_country"),
            metadata_tag("pub_state"),
            metadata_tag("language"),
            metadata_tag("about_country"),
            metadata_tag("media_type"),
            Field::direct("num_stories_90"),
            Field::direct("num_sentences_90"),
            Field::direct("start_date"),
        ])
    }

    /// Columns of a feed export
    pub fn feeds() -> Self {
        Self::new(
            ["feeds_id", "active", "type", "media_id", "name", "url"]
                .into_iter()
                .map(Field::direct)
                .collect(),
        )
    }

    /// Columns of a tag export
    pub fn tags() -> Self {
        Self::new(
            [
                "tags_id",
                "tag_sets_id",
                "tag",
                "label",
                "description",
                "show_on_media",
                "show_on_stories",
            ]
            .into_iter()
            .map(Field::direct)
            .collect(),
        )
    }

    /// Column names in order
    pub fn header(&self) -> Vec<&str> {
        self.fields.iter().map(Field::name).collect()
    }

    /// Flatten a record into cells, one per field
    pub fn row(&self, record: &Record) -> Vec<String> {
        self.fields
            .iter()
            .map(|field| field.extract(record).map(render_value).unwrap_or_default())
            .collect()
    }

    /// Fields in order
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Number of columns
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether there are no columns
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Render a JSON value as a CSV cell.
///
/// Strings are written verbatim, null as an empty cell, and arrays or
/// objects as compact JSON.
pub fn render_value(value: &JsonValue) -> String {
    match value {
        JsonValue::Null => String::new(),
        JsonValue::String(s) => s.clone(),
        JsonValue::Bool(b) => b.to_string(),
        JsonValue::Number(n) => n.to_string(),
        JsonValue::Array(_) | JsonValue::Object(_) => value.to_string(),
    }
}
