use serde::{Deserialize, Serialize};

use business::domain::shared::value_objects::{EntryDate, SupplyId};
use business::domain::supply::model::Supply;
use business::domain::supply::value_objects::{GrowthStage, SupplyCategory, UnitOfMeasure};

/// On-disk shape of a mirrored supply. The client-side field names are
/// kept, not the backend's wire names: the snapshot mirrors committed
/// local state, it is not a protocol artifact.
#[derive(Debug, Serialize, Deserialize)]
pub struct SupplyRecord {
    pub id: String,
    pub name: String,
    pub quantity: f64,
    pub unit: UnitOfMeasure,
    pub price: f64,
    pub entry_date: EntryDate,
    pub category: SupplyCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stage: Option<GrowthStage>,
}

impl SupplyRecord {
    pub fn from_domain(supply: &Supply) -> Self {
        Self {
            id: supply.id.as_str().to_string(),
            name: supply.name.clone(),
            quantity: supply.quantity,
            unit: supply.unit,
            price: supply.price,
            entry_date: supply.entry_date,
            category: supply.category,
            stage: supply.stage,
        }
    }

    pub fn into_domain(self) -> Supply {
        Supply::from_remote(
            SupplyId::new(self.id),
            self.name,
            self.quantity,
            self.unit,
            self.price,
            self.entry_date,
            self.category,
            self.stage,
        )
    }
}
