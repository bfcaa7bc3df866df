//! Tests for the table side: catalog, filters, paging and export.

use petstat::*;

const DATASET: &str = r#"{
    "101": {"id": "101", "markno": "001", "name": "Emberling", "name2": null,
            "jingli": 60, "gongji": 85, "fangyu": 55, "mougong": 90, "moufang": 60, "sudu": 100,
            "total": 450, "img": "ember.png", "series": "Fire"},
    "102": {"id": "102", "markno": "002", "name": "Tidecub",
            "jingli": 95, "gongji": 70, "fangyu": 90, "mougong": 65, "moufang": 85, "sudu": 55,
            "total": 460, "img": "tide.png", "series": "Water|Ice"},
    "103": {"id": "103", "markno": "150", "name": "Frostfang",
            "jingli": 80, "gongji": 120, "fangyu": 70, "mougong": 60, "moufang": 70, "sudu": 110,
            "total": 510, "img": "frost.png", "series": "Ice"},
    "104": {"id": 104, "markno": 151, "name": "Emberlord",
            "jingli": 100, "gongji": 130, "fangyu": 90, "mougong": 110, "moufang": 90, "sudu": 105,
            "total": 625, "img": "lord.png", "series": "Fire|Dragon"}
}"#;

fn catalog() -> PetCatalog {
    PetCatalog::from_json_str(DATASET).unwrap()
}

fn names<'a>(pets: &[&'a Pet]) -> Vec<&'a str> {
    pets.iter().map(|p| p.name.as_str()).collect()
}

/// Filters compose: name AND series AND range.
#[test]
fn test_filter_composition() {
    let catalog = catalog();
    assert_eq!(catalog.len(), 4);
    assert_eq!(catalog.unique_series(), vec!["Dragon", "Fire", "Ice", "Water"]);

    let mut filter = FilterState {
        name: "ember".to_string(),
        ..Default::default()
    };
    assert_eq!(names(&catalog.filter(&filter)), vec!["Emberling", "Emberlord"]);

    filter.mark_no_range.min = "100".to_string();
    assert_eq!(names(&catalog.filter(&filter)), vec!["Emberlord"]);

    filter.name.clear();
    filter.toggle_series("Ice", true);
    assert_eq!(names(&catalog.filter(&filter)), vec!["Frostfang"]);
}

/// Paging over filtered rows.
#[test]
fn test_paging_filtered_rows() {
    let catalog = catalog();
    let rows = catalog.filter(&FilterState::default());
    let mut pages = Pagination::default();
    pages.set_page_size(3);

    assert_eq!(pages.page_count(rows.len()), 2);
    pages.next_page(rows.len());
    let (start, end) = pages.page_bounds(rows.len());
    assert_eq!(names(&rows[start..end]), vec!["Emberlord"]);
    assert_eq!(
        page_range(pages.page_index, pages.page_count(rows.len())),
        vec![PageItem::Page(0), PageItem::Page(1)]
    );
}

/// Selected rows take precedence over the filter for export.
#[test]
fn test_rows_to_export() {
    let catalog = catalog();
    let filter = FilterState {
        name: "tide".to_string(),
        ..Default::default()
    };
    let mut selection = RowSelection::default();
    assert_eq!(names(&rows_to_export(&catalog, &filter, &selection)), vec!["Tidecub"]);

    selection.toggle("104", true);
    selection.toggle("101", true);
    assert_eq!(
        names(&rows_to_export(&catalog, &filter, &selection)),
        vec!["Emberling", "Emberlord"]
    );
}

/// Every exported integer reads back exactly as computed.
#[test]
fn test_export_round_trip() {
    let catalog = catalog();
    let config = BuildConfig::default()
        .with_effort(252)
        .with_nature(Nature::by_name("固执").unwrap());

    let mut visibility = ColumnVisibility::default();
    for kind in StatKind::ALL {
        visibility.set(Column::Stat(kind), true);
    }
    visibility.set(Column::Total, true);
    let layout = ExportLayout::new(&visibility, &TierSelection::all());

    let rows: Vec<&Pet> = catalog.iter().collect();
    let mut buffer = Vec::new();
    assert_eq!(export_rows(&mut buffer, rows.iter().copied(), &layout, &config).unwrap(), 4);

    let table = read_export(buffer.as_slice()).unwrap();
    assert_eq!(table.headers, layout.headers());
    assert_eq!(table.rows.len(), 4);

    for (i, pet) in rows.iter().enumerate() {
        let sheet = StatCalculator::compute_sheet(*pet, &config);
        for kind in StatKind::ALL {
            let result = sheet.get(kind);
            assert_eq!(table.stat_value(i, kind.label()).unwrap(), pet.stat(kind));
            assert_eq!(
                table.stat_value(i, &format!("{} (computed)", kind.label())).unwrap(),
                result.base
            );
            for (level, value) in result.tiers() {
                let header = format!("{} {}", kind.label(), level);
                assert_eq!(table.stat_value(i, &header).unwrap(), value);
            }
        }
        assert_eq!(table.stat_value(i, "Total").unwrap(), pet.total());
        assert_eq!(table.rows[i][table.column("Series").unwrap()], pet.series);
    }
}

/// Only selected tiers are exported, in ascending order.
#[test]
fn test_export_selected_tiers_only() {
    let catalog = catalog();
    let mut config = BuildConfig::default();
    config.set_tier_selection(TierSelection::empty());
    config.tier_selection_mut().toggle(TierLevel::MAX, true);
    config.tier_selection_mut().toggle(TierLevel::MIN, true);

    let layout = ExportLayout::new(&ColumnVisibility::default(), config.tier_selection());
    let mut buffer = Vec::new();
    export_rows(&mut buffer, catalog.iter(), &layout, &config).unwrap();

    let table = read_export(buffer.as_slice()).unwrap();
    let tier_headers: Vec<&str> = table
        .headers
        .iter()
        .map(String::as_str)
        .filter(|h| h.starts_with("Speed ") && !h.ends_with("(computed)"))
        .collect();
    assert_eq!(tier_headers, vec!["Speed -6", "Speed +6"]);
}
