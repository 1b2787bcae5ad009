//! TSV plant import integration tests: all-or-nothing semantics.

use app_lib::app::{import_plants_tsv, plant_list, TSV_HEADER};
use app_lib::domain::{PlantType, SunRequirements};
use app_lib::infra::db::init_test_db;

// ──────────────────────── Helper ────────────────────────

fn tsv(rows: &[&str]) -> String {
    let mut content = String::from(TSV_HEADER);
    for row in rows {
        content.push('\n');
        content.push_str(row);
    }
    content
}

// ══════════════════════════════════════════════════════════
//  happy path
// ══════════════════════════════════════════════════════════

#[test]
fn import_five_rows_returns_five() {
    let pool = init_test_db();
    let content = tsv(&[
        "Tomato\tvegetable_fruit\t1\t60\t96\tneeds staking",
        "Basil\therb\t3\t56\t112\t",
        "Sunflower\tflower\t1\t28\t48\t",
        "Carrot\tvegetable_fruit\t1\t254\t0\t",
        "Parsley\therb\t6\t60\t0\tslow to germinate",
    ]);

    let count = import_plants_tsv(&pool, &content).unwrap();
    assert_eq!(count, 5);

    let plants = plant_list(&pool).unwrap();
    assert_eq!(plants.len(), 5);

    let tomato = plants.iter().find(|p| p.name == "Tomato").unwrap();
    assert!(tomato.id.is_some());
    assert_eq!(tomato.plant_type, Some(PlantType::VegetableFruit));
    assert_eq!(tomato.sun_requirements, SunRequirements::FULL_SUN);
    assert_eq!(tomato.sow_periods, 60);
    assert_eq!(tomato.plant_periods, 96);
    assert_eq!(tomato.notes, Some("needs staking".to_string()));
}

#[test]
fn optional_columns_may_be_empty() {
    let pool = init_test_db();
    let content = tsv(&["Mystery\t\t\t\t\t"]);

    assert_eq!(import_plants_tsv(&pool, &content).unwrap(), 1);
    let plant = plant_list(&pool).unwrap().remove(0);
    assert_eq!(plant.plant_type, None);
    assert_eq!(plant.sun_requirements, SunRequirements::NONE);
    assert_eq!(plant.sow_periods, 0);
    assert_eq!(plant.plant_periods, 0);
    assert_eq!(plant.notes, None);
}

#[test]
fn blank_lines_are_skipped() {
    let pool = init_test_db();
    let content = tsv(&["", "Chervil\therb\t2\t12\t0\t", ""]);

    assert_eq!(import_plants_tsv(&pool, &content).unwrap(), 1);
}

#[test]
fn legacy_sun_label_is_accepted() {
    let pool = init_test_db();
    let content = tsv(&["Hosta\tflower\tfull_shade\t0\t56\t"]);

    assert_eq!(import_plants_tsv(&pool, &content).unwrap(), 1);
    let plant = plant_list(&pool).unwrap().remove(0);
    assert_eq!(plant.sun_requirements, SunRequirements::FULL_SHADE);
}

// ══════════════════════════════════════════════════════════
//  malformed input: whole import aborts
// ══════════════════════════════════════════════════════════

#[test]
fn missing_header_rejected() {
    let pool = init_test_db();
    let err = import_plants_tsv(&pool, "Tomato\tvegetable_fruit\t1\t60\t96\t");
    assert_eq!(err.unwrap_err().code(), "IMPORT_ERROR");
}

#[test]
fn malformed_row_imports_nothing() {
    let pool = init_test_db();
    let content = tsv(&[
        "Tomato\tvegetable_fruit\t1\t60\t96\t",
        "Basil\therb\t3\t56",
        "Carrot\tvegetable_fruit\t1\t254\t0\t",
    ]);

    let err = import_plants_tsv(&pool, &content).unwrap_err();
    assert_eq!(err.code(), "IMPORT_ERROR");
    assert!(err.to_string().contains("Row 3"));
    assert!(plant_list(&pool).unwrap().is_empty());
}

#[test]
fn unknown_plant_type_rejected_with_row_number() {
    let pool = init_test_db();
    let content = tsv(&["Oak\ttree\t1\t0\t0\t"]);

    let err = import_plants_tsv(&pool, &content).unwrap_err();
    assert_eq!(err.code(), "IMPORT_ERROR");
    assert!(err.to_string().contains("Row 2"));
    assert!(err.to_string().contains("tree"));
}

#[test]
fn empty_name_rejected() {
    let pool = init_test_db();
    let content = tsv(&["\therb\t1\t0\t0\t"]);

    let err = import_plants_tsv(&pool, &content).unwrap_err();
    assert_eq!(err.code(), "IMPORT_ERROR");
    assert!(plant_list(&pool).unwrap().is_empty());
}

#[test]
fn period_mask_out_of_range_rejected() {
    let pool = init_test_db();
    let content = tsv(&["Tomato\tvegetable_fruit\t1\t4096\t0\t"]);

    let err = import_plants_tsv(&pool, &content).unwrap_err();
    assert_eq!(err.code(), "IMPORT_ERROR");
    assert!(plant_list(&pool).unwrap().is_empty());
}

#[test]
fn non_numeric_mask_rejected() {
    let pool = init_test_db();
    let content = tsv(&["Tomato\tvegetable_fruit\t1\tMarch\t0\t"]);

    let err = import_plants_tsv(&pool, &content).unwrap_err();
    assert_eq!(err.code(), "IMPORT_ERROR");
}
