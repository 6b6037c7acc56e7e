use polyraster_core::{ColorScale, PolyJoin, ProjectedBounds};

use crate::spec::{
    DataSpec, FieldBinding, MarkProperties, MarkSource, MarkSpec, RenderSpec, ScaleRange, ScaleSpec,
};

/// Name of the single data source every mark draws from.
const DATA_SOURCE_NAME: &str = "table";

/// Backend format tag for key-joined polygon geometry.
const POLY_FORMAT: &str = "polys";

/// Fixed shape-group identifier the backend uses to resolve geometry.
const SHAPE_COL_GROUP: &str = "mapd";

/// Stroke styling input for the polygon mark.
///
/// Included in the built spec only when both the color is non-empty and
/// the width is non-zero; otherwise the mark carries no stroke keys at
/// all. All-or-nothing, no default substitution.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeStyle {
    pub color: String,
    pub width: f64,
}

impl StrokeStyle {
    fn is_visible(&self) -> bool {
        !self.color.is_empty() && self.width != 0.0
    }
}

/// Assemble the render spec for one polygon raster cycle.
///
/// Pure construction: the x and y scales span the projected viewport
/// (y-domain inverted, south first), the color scale carries the chart's
/// configured domain and range, and the data source binds `sql` to the
/// polygon join table.
pub fn build_poly_spec(
    sql: &str,
    bounds: &ProjectedBounds,
    colors: &ColorScale,
    join: &PolyJoin,
    stroke: &StrokeStyle,
) -> RenderSpec {
    let scales = vec![
        ScaleSpec::linear("x", bounds.x_domain(), ScaleRange::width()),
        ScaleSpec::linear("y", bounds.y_domain(), ScaleRange::height()),
        ScaleSpec::linear(
            "color",
            colors.domain(),
            ScaleRange::Colors(colors.range().clone()),
        ),
    ];

    let (stroke_color, stroke_width) = if stroke.is_visible() {
        (Some(stroke.color.clone()), Some(stroke.width))
    } else {
        (None, None)
    };

    let marks = vec![MarkSpec {
        mark_type: POLY_FORMAT.to_string(),
        from: MarkSource {
            data: DATA_SOURCE_NAME.to_string(),
        },
        properties: MarkProperties {
            x: FieldBinding::new("x", "x"),
            y: FieldBinding::new("y", "y"),
            fill_color: FieldBinding::new("color", "val"),
            stroke_color,
            stroke_width,
        },
    }];

    let data = vec![DataSpec {
        name: DATA_SOURCE_NAME.to_string(),
        format: POLY_FORMAT.to_string(),
        sql: sql.to_string(),
        db_table_name: join.table().to_string(),
        polys_key: join.keys_column().to_string(),
        shape_col_group: SHAPE_COL_GROUP.to_string(),
    }];

    RenderSpec {
        scales,
        marks,
        data,
    }
}
