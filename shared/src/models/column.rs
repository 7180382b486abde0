//! Column descriptors consumed by the report grid

use serde::{Deserialize, Serialize};

/// Field type hint for the report grid
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum FieldType {
    Data,
    Link,
    Float,
}

/// One column of a report
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ColumnDef {
    pub label: String,
    pub fieldname: String,
    pub fieldtype: FieldType,
    /// Linked document type for `Link` columns
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<String>,
    pub width: u32,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub editable: bool,
}

impl ColumnDef {
    pub fn data(label: String, fieldname: &str, width: u32) -> Self {
        Self {
            label,
            fieldname: fieldname.to_string(),
            fieldtype: FieldType::Data,
            options: None,
            width,
            editable: false,
        }
    }

    pub fn link(label: String, fieldname: &str, doctype: &str, width: u32) -> Self {
        Self {
            label,
            fieldname: fieldname.to_string(),
            fieldtype: FieldType::Link,
            options: Some(doctype.to_string()),
            width,
            editable: false,
        }
    }

    pub fn float(label: String, fieldname: &str, width: u32) -> Self {
        Self {
            label,
            fieldname: fieldname.to_string(),
            fieldtype: FieldType::Float,
            options: None,
            width,
            editable: false,
        }
    }

    /// Mark the column as editable in the grid
    pub fn editable(mut self) -> Self {
        self.editable = true;
        self
    }
}
