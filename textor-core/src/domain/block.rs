//! Typed block model for analysis results
//!
//! The service represents every detected element of a document (pages,
//! lines, words, form key/value pairs, table cells, layout regions) as a
//! "block": a flat record with a type tag, optional geometry, and id-based
//! relationships to other blocks. These types give that record an explicit
//! shape instead of ad hoc field lookups; everything the service may omit
//! is an `Option`.

use serde::{Deserialize, Serialize};

/// Category of a result block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BlockType {
    Page,
    Line,
    Word,
    KeyValueSet,
    Table,
    TableTitle,
    TableFooter,
    Cell,
    MergedCell,
    SelectionElement,
    Signature,
    Query,
    QueryResult,
    LayoutTitle,
    LayoutHeader,
    LayoutFooter,
    LayoutSectionHeader,
    LayoutPageNumber,
    LayoutList,
    LayoutFigure,
    LayoutTable,
    LayoutKeyValue,
    LayoutText,
}

/// How one block relates to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RelationshipType {
    Child,
    Value,
    ComplexFeatures,
    MergedCell,
    Title,
    Answer,
    Table,
    TableTitle,
    TableFooter,
}

/// Role tags attached to key/value and table blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityType {
    Key,
    Value,
    ColumnHeader,
    TableTitle,
    TableFooter,
    TableSummary,
    TableSectionTitle,
    StructuredTable,
    SemiStructuredTable,
}

/// State of a checkbox / radio-button element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SelectionStatus {
    Selected,
    NotSelected,
}

/// Whether detected text was printed or handwritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TextType {
    Printed,
    Handwriting,
}

/// Axis-aligned bounding box, in page-relative ratios.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BoundingBox {
    pub width: f32,
    pub height: f32,
    pub left: f32,
    pub top: f32,
}

/// One vertex of a block's polygon outline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

/// Location of a block on its page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Geometry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounding_box: Option<BoundingBox>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub polygon: Option<Vec<Point>>,
}

/// Typed link from one block to a set of related block ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Relationship {
    #[serde(rename = "Type")]
    pub relationship_type: RelationshipType,
    pub ids: Vec<String>,
}

/// The question a QUERY block carries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Query {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pages: Option<Vec<String>>,
}

/// One detected element of an analyzed document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Block {
    pub id: String,
    pub block_type: BlockType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_type: Option<TextType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row_index: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column_index: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row_span: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column_span: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geometry: Option<Geometry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationships: Option<Vec<Relationship>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_types: Option<Vec<EntityType>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selection_status: Option<SelectionStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<Query>,
}

impl Block {
    /// Ids of related blocks linked with the given relationship type.
    pub fn related_ids(&self, relationship_type: RelationshipType) -> Vec<&str> {
        self.relationships
            .as_deref()
            .unwrap_or_default()
            .iter()
            .filter(|r| r.relationship_type == relationship_type)
            .flat_map(|r| r.ids.iter().map(String::as_str))
            .collect()
    }

    /// Ids of this block's CHILD blocks.
    pub fn child_ids(&self) -> Vec<&str> {
        self.related_ids(RelationshipType::Child)
    }

    /// Ids of the VALUE blocks paired with this key block.
    pub fn value_ids(&self) -> Vec<&str> {
        self.related_ids(RelationshipType::Value)
    }

    /// Whether this block carries the given entity tag.
    pub fn has_entity_type(&self, entity_type: EntityType) -> bool {
        self.entity_types
            .as_deref()
            .unwrap_or_default()
            .contains(&entity_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_block_json() -> serde_json::Value {
        serde_json::json!({
            "Id": "b1",
            "BlockType": "LINE",
            "Confidence": 99.2,
            "Text": "Hello World",
            "Geometry": {
                "BoundingBox": {"Width": 0.5, "Height": 0.05, "Left": 0.1, "Top": 0.2},
                "Polygon": [
                    {"X": 0.1, "Y": 0.2},
                    {"X": 0.6, "Y": 0.2},
                    {"X": 0.6, "Y": 0.25},
                    {"X": 0.1, "Y": 0.25}
                ]
            },
            "Page": 1
        })
    }

    #[test]
    fn test_line_block_deserializes() {
        let block: Block = serde_json::from_value(line_block_json()).unwrap();
        assert_eq!(block.block_type, BlockType::Line);
        assert_eq!(block.text.as_deref(), Some("Hello World"));
        assert_eq!(block.page, Some(1));
        let bbox = block.geometry.clone().unwrap().bounding_box.unwrap();
        assert!((bbox.width - 0.5).abs() < f32::EPSILON);
        assert!(block.child_ids().is_empty());
    }

    #[test]
    fn test_key_block_relationship_helpers() {
        let block: Block = serde_json::from_value(serde_json::json!({
            "Id": "k1",
            "BlockType": "KEY_VALUE_SET",
            "EntityTypes": ["KEY"],
            "Relationships": [
                {"Type": "VALUE", "Ids": ["v1"]},
                {"Type": "CHILD", "Ids": ["w1", "w2"]}
            ]
        }))
        .unwrap();

        assert!(block.has_entity_type(EntityType::Key));
        assert!(!block.has_entity_type(EntityType::Value));
        assert_eq!(block.value_ids(), vec!["v1"]);
        assert_eq!(block.child_ids(), vec!["w1", "w2"]);
    }

    #[test]
    fn test_absent_fields_not_serialized() {
        let block: Block = serde_json::from_value(serde_json::json!({
            "Id": "s1",
            "BlockType": "SELECTION_ELEMENT",
            "SelectionStatus": "SELECTED"
        }))
        .unwrap();

        let out = serde_json::to_value(&block).unwrap();
        assert_eq!(out["SelectionStatus"], "SELECTED");
        assert!(out.get("Text").is_none());
        assert!(out.get("Geometry").is_none());
    }

    #[test]
    fn test_layout_block_type_wire_names() {
        let block_type: BlockType = serde_json::from_str("\"LAYOUT_PAGE_NUMBER\"").unwrap();
        assert_eq!(block_type, BlockType::LayoutPageNumber);
    }
}
