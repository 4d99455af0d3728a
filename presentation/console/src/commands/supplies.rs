use business::domain::errors::RemoteError;
use business::domain::shared::value_objects::{EntryDate, SupplyId};
use business::domain::supply::errors::SupplyError;
use business::domain::supply::model::{DraftSupply, DraftSupplyProps};
use business::domain::supply::use_cases::create::CreateSupplyParams;
use business::domain::supply::use_cases::delete::DeleteSupplyParams;
use business::domain::supply::use_cases::get_by_id::GetSupplyByIdParams;
use business::domain::supply::use_cases::update::UpdateSupplyParams;
use business::domain::supply::value_objects::{GrowthStage, SupplyCategory, UnitOfMeasure};

use crate::cli::{AddArgs, EditArgs};
use crate::commands::messages;
use crate::render;
use crate::setup::dependency_injection::DependencyContainer;

pub async fn list(container: &DependencyContainer, offline: bool) -> anyhow::Result<()> {
    if offline {
        render::supplies_table(&container.cache.supplies());
        return Ok(());
    }

    match container.fetch_supplies.execute().await {
        Ok(supplies) => {
            render::supplies_table(&supplies);
            Ok(())
        }
        Err(err) => {
            // a failed refresh is not fatal: show the committed local state
            if matches!(err, SupplyError::Remote(RemoteError::Unauthorized)) {
                container.discard_stale_session();
            }
            eprintln!(
                "{} Showing the last local snapshot.",
                messages::supply_message(&err)
            );
            render::supplies_table(&container.cache.supplies());
            Ok(())
        }
    }
}

fn supply_failure(container: &DependencyContainer, err: SupplyError) -> anyhow::Error {
    if matches!(err, SupplyError::Remote(RemoteError::Unauthorized)) {
        container.discard_stale_session();
    }
    anyhow::anyhow!(messages::supply_message(&err))
}

pub async fn show(container: &DependencyContainer, id: String) -> anyhow::Result<()> {
    match container
        .get_supply
        .execute(GetSupplyByIdParams {
            id: SupplyId::new(id),
        })
        .await
    {
        Ok(supply) => {
            render::supply_details(&supply);
            Ok(())
        }
        Err(err) => Err(supply_failure(container, err)),
    }
}

pub async fn add(container: &DependencyContainer, args: AddArgs) -> anyhow::Result<()> {
    let draft = DraftSupply::new(DraftSupplyProps {
        name: args.name,
        quantity: args.quantity,
        unit: parse_unit(&args.unit)?,
        price: args.price,
        entry_date: parse_date(args.date.as_deref())?,
        category: parse_category(&args.category)?,
        stage: parse_stage(args.stage.as_deref())?,
    })
    .map_err(|err| anyhow::anyhow!(messages::supply_message(&err)))?;

    container.cache.open_editor();

    match container
        .create_supply
        .execute(CreateSupplyParams { draft })
        .await
    {
        Ok(supply) => {
            container.cache.close_editor();
            println!("Supply created with id {}.", supply.id);
            Ok(())
        }
        Err(err) => Err(supply_failure(container, err)),
    }
}

pub async fn edit(container: &DependencyContainer, args: EditArgs) -> anyhow::Result<()> {
    let id = SupplyId::new(args.id.clone());

    // refresh once if the record is not mirrored locally yet
    if container.cache.find(&id).is_none() {
        let _ = container.fetch_supplies.execute().await;
    }

    container.cache.select_for_edit(id.clone());

    let Some(existing) = container.cache.find(&id) else {
        // unknown id: the editor falls back to create mode
        return add_fallback(container, args).await;
    };

    let draft = DraftSupply::new(DraftSupplyProps {
        name: args.name.unwrap_or(existing.name),
        quantity: args.quantity.unwrap_or(existing.quantity),
        unit: match args.unit.as_deref() {
            Some(raw) => parse_unit(raw)?,
            None => existing.unit,
        },
        price: args.price.unwrap_or(existing.price),
        entry_date: match args.date.as_deref() {
            Some(raw) => parse_date(Some(raw))?,
            None => existing.entry_date,
        },
        category: match args.category.as_deref() {
            Some(raw) => parse_category(raw)?,
            None => existing.category,
        },
        stage: match args.stage.as_deref() {
            Some(raw) => parse_stage(Some(raw))?,
            None => existing.stage,
        },
    })
    .map_err(|err| anyhow::anyhow!(messages::supply_message(&err)))?;

    match container
        .update_supply
        .execute(UpdateSupplyParams { draft })
        .await
    {
        Ok(supply) => {
            container.cache.close_editor();
            println!("Supply {} updated.", supply.id);
            Ok(())
        }
        Err(err) => Err(supply_failure(container, err)),
    }
}

/// Editing an id the remote does not know either becomes a create, the
/// same fallback the record grid's editor applies.
async fn add_fallback(container: &DependencyContainer, args: EditArgs) -> anyhow::Result<()> {
    let (Some(name), Some(quantity), Some(price)) = (args.name, args.quantity, args.price) else {
        container.cache.close_editor();
        anyhow::bail!(
            "Supply {} does not exist; pass --name, --quantity and --price to create it instead.",
            args.id
        );
    };

    let draft = DraftSupply::new(DraftSupplyProps {
        name,
        quantity,
        unit: match args.unit.as_deref() {
            Some(raw) => parse_unit(raw)?,
            None => UnitOfMeasure::Unit,
        },
        price,
        entry_date: parse_date(args.date.as_deref())?,
        category: match args.category.as_deref() {
            Some(raw) => parse_category(raw)?,
            None => SupplyCategory::Other,
        },
        stage: parse_stage(args.stage.as_deref())?,
    })
    .map_err(|err| anyhow::anyhow!(messages::supply_message(&err)))?;

    match container
        .create_supply
        .execute(CreateSupplyParams { draft })
        .await
    {
        Ok(supply) => {
            container.cache.close_editor();
            println!("Supply created with id {}.", supply.id);
            Ok(())
        }
        Err(err) => Err(supply_failure(container, err)),
    }
}

pub async fn remove(container: &DependencyContainer, id: String) -> anyhow::Result<()> {
    match container
        .delete_supply
        .execute(DeleteSupplyParams {
            id: SupplyId::new(id.clone()),
        })
        .await
    {
        Ok(()) => {
            println!("Supply {} deleted.", id);
            Ok(())
        }
        Err(err) => Err(supply_failure(container, err)),
    }
}

fn parse_unit(raw: &str) -> anyhow::Result<UnitOfMeasure> {
    raw.parse::<UnitOfMeasure>()
        .map_err(|err| anyhow::anyhow!(err))
}

fn parse_category(raw: &str) -> anyhow::Result<SupplyCategory> {
    raw.parse::<SupplyCategory>()
        .map_err(|err| anyhow::anyhow!(err))
}

fn parse_stage(raw: Option<&str>) -> anyhow::Result<Option<GrowthStage>> {
    raw.map(|s| s.parse::<GrowthStage>().map_err(|err| anyhow::anyhow!(err)))
        .transpose()
}

fn parse_date(raw: Option<&str>) -> anyhow::Result<EntryDate> {
    match raw {
        Some(input) => EntryDate::parse(input)
            .map_err(|_| anyhow::anyhow!("Unreadable date {input:?}; use YYYY-MM-DD.")),
        None => Ok(EntryDate::today()),
    }
}
