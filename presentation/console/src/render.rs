use business::domain::supply::model::Supply;

/// Plain-text listing of the supply records. The stage column goes
/// through `applicable_stage`, so a stale stage on a non-food record
/// renders as not applicable.
pub fn supplies_table(supplies: &[Supply]) {
    if supplies.is_empty() {
        println!("No supplies registered.");
        return;
    }

    println!(
        "{:<6} {:<28} {:>10} {:<12} {:>12} {:<12} {:<14} {:<10}",
        "ID", "NAME", "QTY", "UNIT", "PRICE", "DATE", "CATEGORY", "STAGE"
    );
    for supply in supplies {
        // width specifiers only pad strings, not custom Display impls
        println!(
            "{:<6} {:<28} {:>10} {:<12} {:>12.2} {:<12} {:<14} {:<10}",
            supply.id.to_string(),
            supply.name,
            supply.quantity,
            supply.unit.to_string(),
            supply.price,
            supply.entry_date.to_string(),
            supply.category.to_string(),
            stage_cell(supply)
        );
    }
}

pub fn supply_details(supply: &Supply) {
    println!("Id:        {}", supply.id);
    println!("Name:      {}", supply.name);
    println!("Quantity:  {} {}", supply.quantity, supply.unit);
    println!("Price:     {:.2}", supply.price);
    println!("Date:      {}", supply.entry_date);
    println!("Category:  {}", supply.category);
    println!("Stage:     {}", stage_cell(supply));
}

fn stage_cell(supply: &Supply) -> String {
    supply
        .applicable_stage()
        .map(|stage| stage.to_string())
        .unwrap_or_else(|| "-".to_string())
}
