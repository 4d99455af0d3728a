use serde::{Deserialize, Serialize};

/// Presentation of a supply as the backend spells it. The sack sizes
/// ("40kg"/"20kg") exist on the wire for legacy records but are not part
/// of the valid presentation set the inbound mapper accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitOfMeasure {
    #[serde(rename = "40kg")]
    Sack40Kg,
    #[serde(rename = "20kg")]
    Sack20Kg,
    #[serde(rename = "Kilogramos")]
    Kilograms,
    #[serde(rename = "Gramo")]
    Gram,
    #[serde(rename = "Litro")]
    Liter,
    #[serde(rename = "Mililitro")]
    Milliliter,
    #[serde(rename = "Unidad")]
    Unit,
    #[serde(rename = "Caja")]
    Box,
    #[serde(rename = "Paquete")]
    Package,
}

impl std::fmt::Display for UnitOfMeasure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnitOfMeasure::Sack40Kg => write!(f, "40kg"),
            UnitOfMeasure::Sack20Kg => write!(f, "20kg"),
            UnitOfMeasure::Kilograms => write!(f, "Kilogramos"),
            UnitOfMeasure::Gram => write!(f, "Gramo"),
            UnitOfMeasure::Liter => write!(f, "Litro"),
            UnitOfMeasure::Milliliter => write!(f, "Mililitro"),
            UnitOfMeasure::Unit => write!(f, "Unidad"),
            UnitOfMeasure::Box => write!(f, "Caja"),
            UnitOfMeasure::Package => write!(f, "Paquete"),
        }
    }
}

impl std::str::FromStr for UnitOfMeasure {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "40kg" => Ok(UnitOfMeasure::Sack40Kg),
            "20kg" => Ok(UnitOfMeasure::Sack20Kg),
            "Kilogramos" => Ok(UnitOfMeasure::Kilograms),
            "Gramo" => Ok(UnitOfMeasure::Gram),
            "Litro" => Ok(UnitOfMeasure::Liter),
            "Mililitro" => Ok(UnitOfMeasure::Milliliter),
            "Unidad" => Ok(UnitOfMeasure::Unit),
            "Caja" => Ok(UnitOfMeasure::Box),
            "Paquete" => Ok(UnitOfMeasure::Package),
            _ => Err(format!("Invalid unit of measure: {}", s)),
        }
    }
}

/// Classification of a supply. Wire values are upper-case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SupplyCategory {
    Food,
    Medicine,
    Equipment,
    Packaging,
    Disinfectant,
    Other,
}

impl std::fmt::Display for SupplyCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SupplyCategory::Food => write!(f, "FOOD"),
            SupplyCategory::Medicine => write!(f, "MEDICINE"),
            SupplyCategory::Equipment => write!(f, "EQUIPMENT"),
            SupplyCategory::Packaging => write!(f, "PACKAGING"),
            SupplyCategory::Disinfectant => write!(f, "DISINFECTANT"),
            SupplyCategory::Other => write!(f, "OTHER"),
        }
    }
}

impl std::str::FromStr for SupplyCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FOOD" => Ok(SupplyCategory::Food),
            "MEDICINE" => Ok(SupplyCategory::Medicine),
            "EQUIPMENT" => Ok(SupplyCategory::Equipment),
            "PACKAGING" => Ok(SupplyCategory::Packaging),
            "DISINFECTANT" => Ok(SupplyCategory::Disinfectant),
            "OTHER" => Ok(SupplyCategory::Other),
            _ => Err(format!("Invalid supply category: {}", s)),
        }
    }
}

/// Rearing stage a feed supply is destined for. Only meaningful for
/// `SupplyCategory::Food` records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GrowthStage {
    #[serde(rename = "cría")]
    Cria,
    #[serde(rename = "destete")]
    Destete,
    #[serde(rename = "levante")]
    Levante,
    #[serde(rename = "engorde")]
    Engorde,
}

impl std::fmt::Display for GrowthStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GrowthStage::Cria => write!(f, "cría"),
            GrowthStage::Destete => write!(f, "destete"),
            GrowthStage::Levante => write!(f, "levante"),
            GrowthStage::Engorde => write!(f, "engorde"),
        }
    }
}

impl std::str::FromStr for GrowthStage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cría" => Ok(GrowthStage::Cria),
            "destete" => Ok(GrowthStage::Destete),
            "levante" => Ok(GrowthStage::Levante),
            "engorde" => Ok(GrowthStage::Engorde),
            _ => Err(format!("Invalid growth stage: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_round_trip_unit_of_measure_wire_strings() {
        for unit in [
            UnitOfMeasure::Sack40Kg,
            UnitOfMeasure::Kilograms,
            UnitOfMeasure::Milliliter,
            UnitOfMeasure::Package,
        ] {
            assert_eq!(unit.to_string().parse::<UnitOfMeasure>(), Ok(unit));
        }
    }

    #[test]
    fn should_reject_unknown_unit_of_measure() {
        assert!("Tonelada".parse::<UnitOfMeasure>().is_err());
    }

    #[test]
    fn should_parse_upper_case_category() {
        assert_eq!("FOOD".parse::<SupplyCategory>(), Ok(SupplyCategory::Food));
        assert_eq!(
            "DISINFECTANT".parse::<SupplyCategory>(),
            Ok(SupplyCategory::Disinfectant)
        );
        assert!("food".parse::<SupplyCategory>().is_err());
    }

    #[test]
    fn should_parse_accented_growth_stage() {
        assert_eq!("cría".parse::<GrowthStage>(), Ok(GrowthStage::Cria));
        assert_eq!("engorde".parse::<GrowthStage>(), Ok(GrowthStage::Engorde));
        assert!("adulto".parse::<GrowthStage>().is_err());
    }
}
