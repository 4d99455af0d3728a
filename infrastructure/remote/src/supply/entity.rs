use serde::{Deserialize, Serialize};
use serde_json::Value;

use business::domain::shared::value_objects::{EntryDate, SupplyId};
use business::domain::supply::model::{DraftSupply, Supply};
use business::domain::supply::value_objects::{GrowthStage, SupplyCategory, UnitOfMeasure};

/// A supply record as the backend sends it. Quantity and price arrive as
/// numbers or as text depending on how the record was captured, so both
/// are taken as raw JSON values and coerced.
#[derive(Debug, Deserialize)]
pub struct SupplyEntity {
    pub id: i64,
    #[serde(rename = "suppliesName")]
    pub supplies_name: String,
    #[serde(default)]
    pub presentation: String,
    #[serde(rename = "suppliesQuantity", default)]
    pub supplies_quantity: Value,
    #[serde(rename = "suppliesPrice", default)]
    pub supplies_price: Value,
    #[serde(rename = "suppliesDate", default)]
    pub supplies_date: String,
    #[serde(rename = "type", default)]
    pub supply_type: String,
    #[serde(default)]
    pub stage: Option<String>,
}

/// Unparseable wire numbers coerce to zero instead of propagating into
/// stored state.
fn coerce_number(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    }
}

/// The backend also carries legacy sack-size presentations; only the
/// catalogued set is accepted, anything else falls back to units.
fn valid_presentation(presentation: &str) -> UnitOfMeasure {
    const VALID: [UnitOfMeasure; 7] = [
        UnitOfMeasure::Kilograms,
        UnitOfMeasure::Gram,
        UnitOfMeasure::Liter,
        UnitOfMeasure::Milliliter,
        UnitOfMeasure::Unit,
        UnitOfMeasure::Box,
        UnitOfMeasure::Package,
    ];

    presentation
        .parse::<UnitOfMeasure>()
        .ok()
        .filter(|unit| VALID.contains(unit))
        .unwrap_or(UnitOfMeasure::Unit)
}

impl SupplyEntity {
    pub fn into_domain(self) -> Supply {
        let entry_date = match EntryDate::parse(&self.supplies_date) {
            Ok(date) => date,
            Err(_) => {
                tracing::warn!(
                    "Unparseable supply date {:?}, falling back to today",
                    self.supplies_date
                );
                EntryDate::today()
            }
        };

        Supply::from_remote(
            SupplyId::from(self.id),
            self.supplies_name,
            coerce_number(&self.supplies_quantity),
            valid_presentation(&self.presentation),
            coerce_number(&self.supplies_price),
            entry_date,
            self.supply_type
                .parse::<SupplyCategory>()
                .unwrap_or(SupplyCategory::Other),
            self.stage
                .as_deref()
                .and_then(|s| s.parse::<GrowthStage>().ok()),
        )
    }
}

/// Outbound payload for create and update requests, spelled with the
/// backend's field names. The date is always already canonical.
#[derive(Debug, Serialize)]
pub struct SupplyRequest {
    #[serde(rename = "suppliesName")]
    pub supplies_name: String,
    pub presentation: String,
    #[serde(rename = "suppliesQuantity")]
    pub supplies_quantity: f64,
    #[serde(rename = "suppliesPrice")]
    pub supplies_price: f64,
    #[serde(rename = "suppliesDate")]
    pub supplies_date: String,
    #[serde(rename = "type")]
    pub supply_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage: Option<String>,
}

impl SupplyRequest {
    pub fn from_draft(draft: &DraftSupply) -> Self {
        Self {
            supplies_name: draft.name.clone(),
            presentation: draft.unit.to_string(),
            supplies_quantity: draft.quantity,
            supplies_price: draft.price,
            supplies_date: draft.entry_date.to_string(),
            supply_type: draft.category.to_string(),
            stage: draft.stage.map(|s| s.to_string()),
        }
    }
}
