use super::errors::SupplyError;
use super::value_objects::{GrowthStage, SupplyCategory, UnitOfMeasure};
use crate::domain::shared::value_objects::{EntryDate, SupplyId};

/// An inventory record as confirmed by the remote system. Instances only
/// come into existence from a successful remote call; the console never
/// fabricates an id.
#[derive(Debug, Clone, PartialEq)]
pub struct Supply {
    pub id: SupplyId,
    pub name: String,
    pub quantity: f64,
    pub unit: UnitOfMeasure,
    pub price: f64,
    pub entry_date: EntryDate,
    pub category: SupplyCategory,
    pub stage: Option<GrowthStage>,
}

impl Supply {
    /// Constructor for records returned by the remote system (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_remote(
        id: SupplyId,
        name: String,
        quantity: f64,
        unit: UnitOfMeasure,
        price: f64,
        entry_date: EntryDate,
        category: SupplyCategory,
        stage: Option<GrowthStage>,
    ) -> Self {
        Self {
            id,
            name,
            quantity,
            unit,
            price,
            entry_date,
            category,
            stage,
        }
    }

    /// The stage is only meaningful for feed supplies. A stale value left
    /// over on any other category is void, regardless of what is stored.
    pub fn applicable_stage(&self) -> Option<GrowthStage> {
        match self.category {
            SupplyCategory::Food => self.stage,
            _ => None,
        }
    }
}

pub struct DraftSupplyProps {
    pub name: String,
    pub quantity: f64,
    pub unit: UnitOfMeasure,
    pub price: f64,
    pub entry_date: EntryDate,
    pub category: SupplyCategory,
    pub stage: Option<GrowthStage>,
}

/// A supply payload without a server-assigned id, used for create and
/// update requests. Field validation happens here, before any operation
/// on the record store is reached.
#[derive(Debug, Clone, PartialEq)]
pub struct DraftSupply {
    pub name: String,
    pub quantity: f64,
    pub unit: UnitOfMeasure,
    pub price: f64,
    pub entry_date: EntryDate,
    pub category: SupplyCategory,
    pub stage: Option<GrowthStage>,
}

impl DraftSupply {
    pub fn new(props: DraftSupplyProps) -> Result<Self, SupplyError> {
        if props.name.trim().is_empty() {
            return Err(SupplyError::NameEmpty);
        }

        // `< 0.0` alone would let NaN through
        if !props.quantity.is_finite() || props.quantity < 0.0 {
            return Err(SupplyError::NegativeQuantity);
        }

        if !props.price.is_finite() || props.price < 0.0 {
            return Err(SupplyError::NegativePrice);
        }

        Ok(Self {
            name: props.name,
            quantity: props.quantity,
            unit: props.unit,
            price: props.price,
            entry_date: props.entry_date,
            category: props.category,
            stage: props.stage,
        })
    }
}
