use serde::{Deserialize, Serialize};

/// The complete declarative render specification: scales, exactly one
/// polygon mark, and one data source. Built fresh for every render
/// request; never shared across requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderSpec {
    pub scales: Vec<ScaleSpec>,
    pub marks: Vec<MarkSpec>,
    pub data: Vec<DataSpec>,
}

impl RenderSpec {
    /// Serialize to the backend's JSON wire shape.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// A named linear scale over a numeric domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaleSpec {
    pub name: String,
    #[serde(rename = "type")]
    pub scale_type: String,
    pub domain: [f64; 2],
    pub range: ScaleRange,
}

impl ScaleSpec {
    pub fn linear(name: &str, domain: [f64; 2], range: ScaleRange) -> Self {
        Self {
            name: name.to_string(),
            scale_type: "linear".to_string(),
            domain,
            range,
        }
    }
}

/// A scale's output range: either a backend keyword (`"width"`,
/// `"height"`) or an explicit pair of interpolation colors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScaleRange {
    Keyword(String),
    Colors([String; 2]),
}

impl ScaleRange {
    pub fn width() -> Self {
        Self::Keyword("width".to_string())
    }

    pub fn height() -> Self {
        Self::Keyword("height".to_string())
    }
}

/// The single polygon mark.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkSpec {
    #[serde(rename = "type")]
    pub mark_type: String,
    pub from: MarkSource,
    pub properties: MarkProperties,
}

/// Names the data source a mark draws from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkSource {
    pub data: String,
}

/// Field-to-scale bindings plus optional stroke styling.
///
/// The stroke keys are omitted from the wire shape entirely when unset;
/// the backend treats a present-but-zero stroke differently from an
/// absent one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkProperties {
    pub x: FieldBinding,
    pub y: FieldBinding,
    #[serde(rename = "fillColor")]
    pub fill_color: FieldBinding,
    #[serde(rename = "strokeColor", skip_serializing_if = "Option::is_none")]
    pub stroke_color: Option<String>,
    #[serde(rename = "strokeWidth", skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<f64>,
}

/// Binds a data column to a named scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldBinding {
    pub scale: String,
    pub field: String,
}

impl FieldBinding {
    pub fn new(scale: &str, field: &str) -> Self {
        Self {
            scale: scale.to_string(),
            field: field.to_string(),
        }
    }
}

/// The data source: a SQL query joined against a polygon geometry table
/// by key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSpec {
    pub name: String,
    pub format: String,
    pub sql: String,
    #[serde(rename = "dbTableName")]
    pub db_table_name: String,
    #[serde(rename = "polysKey")]
    pub polys_key: String,
    #[serde(rename = "shapeColGroup")]
    pub shape_col_group: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_type_serializes_as_type() {
        let scale = ScaleSpec::linear("x", [0.0, 1.0], ScaleRange::width());
        let json = serde_json::to_value(&scale).unwrap();
        assert_eq!(json["type"], "linear");
        assert_eq!(json["range"], "width");
    }

    #[test]
    fn test_color_range_serializes_as_array() {
        let scale = ScaleSpec::linear(
            "color",
            [0.0, 100.0],
            ScaleRange::Colors(["blue".to_string(), "red".to_string()]),
        );
        let json = serde_json::to_value(&scale).unwrap();
        assert_eq!(json["range"][0], "blue");
        assert_eq!(json["range"][1], "red");
    }

    #[test]
    fn test_unset_stroke_keys_are_absent() {
        let props = MarkProperties {
            x: FieldBinding::new("x", "x"),
            y: FieldBinding::new("y", "y"),
            fill_color: FieldBinding::new("color", "val"),
            stroke_color: None,
            stroke_width: None,
        };
        let json = serde_json::to_value(&props).unwrap();
        assert!(json.get("strokeColor").is_none());
        assert!(json.get("strokeWidth").is_none());
    }
}
