use serde::Deserialize;

/// Select option of a column
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SelectOption {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SelectOptions {
    #[serde(default)]
    pub options: Vec<SelectOption>,
}

/// `select` column (Type, Origin, Difficulty)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SelectColumn {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub select: SelectOptions,
}

/// Any other column (Source, Date, Name)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SimpleColumn {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Columns {
    #[serde(rename = "Type")]
    pub dish_type: SelectColumn,
    #[serde(rename = "Origin")]
    pub origin: SelectColumn,
    #[serde(rename = "Difficulty")]
    pub difficulty: SelectColumn,
    #[serde(rename = "Source")]
    pub source: SimpleColumn,
    #[serde(rename = "Date")]
    pub date: SimpleColumn,
    #[serde(rename = "Name")]
    pub name: SimpleColumn,
}

/// Response of `GET /databases/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NotionDbMetadata {
    pub object: String,
    pub id: String,
    pub properties: Columns,
    pub url: String,
}

impl NotionDbMetadata {
    /// Option names of the `Type` column
    pub fn dish_types(&self) -> Vec<String> {
        self.properties
            .dish_type
            .select
            .options
            .iter()
            .map(|option| option.name.clone())
            .collect()
    }
}
