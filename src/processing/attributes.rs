use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue, json};

use crate::processing::config::PipelineConfig;
use crate::utils::format::{NOT_AVAILABLE, format_number, format_percent};

/// One record as yielded by the record source.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub id: String,
    #[serde(default)]
    pub active: Option<bool>,
    /// Raw, user-authored GeoJSON text
    #[serde(default)]
    pub geojson: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub total_acres: Option<f64>,
    #[serde(default)]
    pub forage_per_acre: Option<f64>,
    /// Fraction of forage used, 0.0 - 1.0
    #[serde(default)]
    pub utilization: Option<f64>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub opacity: Option<f64>,
    #[serde(default)]
    pub stroke_width: Option<f64>,
}

impl Record {
    /// Returns `false` only when the active flag is configured and the record has it set to `false`.
    pub fn is_active(&self, config: &PipelineConfig) -> bool {
        !config.active_field_present || self.active.unwrap_or(true)
    }
}

/// Total forage is only known when both operands are.
pub fn total_forage(total_acres: Option<f64>, forage_per_acre: Option<f64>) -> Option<f64> {
    Some(total_acres? * forage_per_acre?)
}

/// Builds the display property bag merged into every feature of a record.
pub fn build_properties(record: &Record, config: &PipelineConfig) -> Map<String, JsonValue> {
    let mut properties = Map::with_capacity(9);

    properties.insert("id".to_string(), json!(record.id));
    properties.insert(
        "name".to_string(),
        json!(record.name.as_deref().unwrap_or(NOT_AVAILABLE)),
    );
    properties.insert(
        "fillColor".to_string(),
        json!(record.color.as_deref().unwrap_or(config.default_fill_color.as_str())),
    );
    properties.insert(
        "fillOpacity".to_string(),
        json!(record.opacity.unwrap_or(config.default_opacity)),
    );
    properties.insert(
        "strokeWidth".to_string(),
        json!(record.stroke_width.unwrap_or(config.default_stroke_width)),
    );
    properties.insert(
        "totalAcres".to_string(),
        json!(format_number(record.total_acres)),
    );
    properties.insert(
        "foragePerAcre".to_string(),
        json!(format_number(record.forage_per_acre)),
    );
    properties.insert(
        "totalForage".to_string(),
        json!(format_number(total_forage(
            record.total_acres,
            record.forage_per_acre
        ))),
    );
    properties.insert(
        "utilization".to_string(),
        json!(format_percent(record.utilization)),
    );

    properties
}
