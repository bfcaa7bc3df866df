//! Spreadsheet export.
//!
//! Rows are written as CSV. For each visible stat there is a raw column
//! (`Speed`), a computed column (`Speed (computed)`) and, when the enhanced
//! column is shown, one column per selected tier (`Speed +2`, `Speed 0`,
//! `Speed -1`). Every number is written as an integer so an export reads
//! back to exactly the values that were computed.

use crate::catalog::PetCatalog;
use crate::config::BuildConfig;
use crate::error::StatError;
use crate::filter::FilterState;
use crate::numeric::StatValue;
use crate::pet::Pet;
use crate::resolver::StatResolver;
use crate::source::StatSource;
use crate::stat_kind::StatKind;
use crate::tier::{TierLevel, TierSelection};
use crate::view::{ColumnVisibility, RowSelection};
use std::io::{Read, Write};

/// One column of an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportColumn {
    MarkNo,
    Name,
    Raw(StatKind),
    Computed(StatKind),
    Tier(StatKind, TierLevel),
    Total,
    Series,
}

impl ExportColumn {
    pub fn header(&self) -> String {
        match self {
            ExportColumn::MarkNo => String::from("Mark No"),
            ExportColumn::Name => String::from("Name"),
            ExportColumn::Raw(kind) => kind.label().to_string(),
            ExportColumn::Computed(kind) => format!("{} (computed)", kind.label()),
            ExportColumn::Tier(kind, level) => format!("{} {}", kind.label(), level),
            ExportColumn::Total => String::from("Total"),
            ExportColumn::Series => String::from("Series"),
        }
    }
}

/// The ordered columns an export will contain.
///
/// # Examples
///
/// ```rust
/// use petstat::{ColumnVisibility, ExportLayout, TierSelection};
///
/// let layout = ExportLayout::new(&ColumnVisibility::default(), &TierSelection::common());
/// assert_eq!(
///     layout.headers(),
///     vec!["Mark No", "Name", "Speed", "Speed (computed)",
///          "Speed -1", "Speed 0", "Speed +1", "Speed +2", "Series"]
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportLayout {
    columns: Vec<ExportColumn>,
}

impl ExportLayout {
    pub fn new(visibility: &ColumnVisibility, tiers: &TierSelection) -> Self {
        let mut columns = Vec::new();
        if visibility.mark_no {
            columns.push(ExportColumn::MarkNo);
        }
        if visibility.name {
            columns.push(ExportColumn::Name);
        }
        let with_tiers = visibility.shows_enhanced();
        for kind in visibility.visible_stats() {
            columns.push(ExportColumn::Raw(kind));
            columns.push(ExportColumn::Computed(kind));
            if with_tiers {
                columns.extend(tiers.iter().map(|level| ExportColumn::Tier(kind, level)));
            }
        }
        if visibility.total {
            columns.push(ExportColumn::Total);
        }
        if visibility.series {
            columns.push(ExportColumn::Series);
        }
        Self { columns }
    }

    pub fn columns(&self) -> &[ExportColumn] {
        &self.columns
    }

    pub fn headers(&self) -> Vec<String> {
        self.columns.iter().map(ExportColumn::header).collect()
    }

    fn row(&self, pet: &Pet, resolver: &mut StatResolver) -> Vec<String> {
        self.columns
            .iter()
            .map(|column| match *column {
                ExportColumn::MarkNo => pet.markno.clone(),
                ExportColumn::Name => pet.name.clone(),
                ExportColumn::Raw(kind) => pet.base_value(kind).to_string(),
                ExportColumn::Computed(kind) => {
                    resolver.resolve(pet.base_value(kind), kind).base.to_string()
                }
                ExportColumn::Tier(kind, level) => resolver
                    .resolve(pet.base_value(kind), kind)
                    .tier(level)
                    .to_string(),
                ExportColumn::Total => pet.total().to_string(),
                ExportColumn::Series => pet.series.clone(),
            })
            .collect()
    }
}

/// Write `rows` as CSV under `layout`, returning the number of rows written.
pub fn export_rows<'a, W: Write>(
    writer: W,
    rows: impl IntoIterator<Item = &'a Pet>,
    layout: &ExportLayout,
    config: &BuildConfig,
) -> Result<usize, StatError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    let mut resolver = StatResolver::new(config.clone());

    csv_writer.write_record(layout.headers())?;
    let mut written = 0;
    for pet in rows {
        csv_writer.write_record(layout.row(pet, &mut resolver))?;
        written += 1;
    }
    csv_writer
        .flush()
        .map_err(|e| StatError::Export(e.to_string()))?;

    tracing::info!(
        rows = written,
        columns = layout.columns().len(),
        "exported pet table"
    );
    Ok(written)
}

/// Rows an export should contain: the selected pets if any are selected,
/// otherwise every pet passing `filter`. Catalog order is kept.
pub fn rows_to_export<'a>(
    catalog: &'a PetCatalog,
    filter: &FilterState,
    selection: &RowSelection,
) -> Vec<&'a Pet> {
    if selection.is_empty() {
        catalog.filter(filter)
    } else {
        catalog.iter().filter(|pet| selection.contains(&pet.id)).collect()
    }
}

/// A CSV export read back into memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportedTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ExportedTable {
    pub fn column(&self, header: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == header)
    }

    /// The integer in `header` of row `row`.
    pub fn stat_value(&self, row: usize, header: &str) -> Result<StatValue, StatError> {
        let column = self
            .column(header)
            .ok_or_else(|| StatError::MalformedExport(format!("missing column {header:?}")))?;
        let cell = self
            .rows
            .get(row)
            .and_then(|r| r.get(column))
            .ok_or_else(|| StatError::MalformedExport(format!("missing row {row}")))?;
        cell.parse().map_err(|_| {
            StatError::MalformedExport(format!("{header:?} is not an integer: {cell:?}"))
        })
    }
}

/// Read a CSV export produced by [`export_rows`].
pub fn read_export(reader: impl Read) -> Result<ExportedTable, StatError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let headers = csv_reader
        .headers()?
        .iter()
        .map(str::to_string)
        .collect();
    let rows = csv_reader
        .records()
        .map(|record| record.map(|r| r.iter().map(str::to_string).collect()))
        .collect::<Result<Vec<Vec<String>>, _>>()?;
    Ok(ExportedTable { headers, rows })
}
