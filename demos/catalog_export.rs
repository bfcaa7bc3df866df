//! Catalog example: filter a dataset and export it as CSV
//!
//! This example demonstrates:
//! - Loading the pet catalog
//! - Filtering by series and catalog number
//! - Exporting computed stats to stdout
//!
//! Run with `RUST_LOG=petstat=debug` to see the catalog logs.

use petstat::*;
use tracing_subscriber::EnvFilter;

const DATASET: &str = include_str!("data/pets.json");

fn main() -> Result<(), StatError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let catalog = PetCatalog::from_json_str(DATASET)?;
    println!("Series: {}", catalog.unique_series().join(", "));

    let mut filter = FilterState::default();
    filter.toggle_series("Fire", true);
    filter.mark_no_range.max = "200".to_string();

    let mut columns = ColumnVisibility::default();
    columns.set(Column::Stat(StatKind::PhysicalAttack), true);

    let config = BuildConfig::default();
    let layout = ExportLayout::new(&columns, config.tier_selection());
    let rows = rows_to_export(&catalog, &filter, &RowSelection::default());

    export_rows(std::io::stdout().lock(), rows, &layout, &config)?;
    Ok(())
}
