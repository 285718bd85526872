//! Golden file tests for the search pipeline.
//!
//! Each JSON file in `fixtures/search/` lists recipes (ids assigned in
//! order, starting at 1), a raw search form, and the expected report, or
//! `null` when the search should come back empty.

use glob::glob;
use recipebox_core::{
    run, MemoryStore, NewRecipe, RecipeStore, ReportOptions, SearchForm, SearchOutcome,
};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

/// A test case loaded from a JSON fixture file
#[derive(Debug, Deserialize)]
struct TestCase {
    recipes: Vec<NewRecipe>,
    form: SearchForm,
    expected: Option<ExpectedReport>,
}

#[derive(Debug, Deserialize)]
struct ExpectedReport {
    names: Vec<String>,
    hrefs: Vec<String>,
    difficulties: Vec<String>,
    /// (difficulty, count) slices
    pie: Vec<(String, f64)>,
}

/// Load all test cases from the fixtures directory
fn load_test_cases() -> Vec<(String, TestCase)> {
    let pattern = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/search/*.json");
    let pattern_str = pattern.to_string_lossy();

    let mut cases = Vec::new();
    for entry in glob(&pattern_str).expect("Failed to read glob pattern") {
        let path = entry.expect("Failed to read directory entry");
        let name = path.file_stem().unwrap().to_string_lossy().into_owned();
        let content = fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e));
        let case: TestCase = serde_json::from_str(&content)
            .unwrap_or_else(|e| panic!("Failed to parse {}: {}", path.display(), e));
        cases.push((name, case));
    }

    assert!(!cases.is_empty(), "No test fixtures found for {}", pattern_str);
    cases
}

#[test]
fn test_search_golden_files() {
    for (name, case) in load_test_cases() {
        println!("Testing: {}", name);

        let mut store = MemoryStore::new();
        for recipe in case.recipes {
            store
                .create(recipe)
                .unwrap_or_else(|e| panic!("Invalid recipe in {}: {}", name, e));
        }
        let recipes = store.all_recipes().unwrap();

        let criterion = case
            .form
            .into_criterion()
            .unwrap_or_else(|e| panic!("Invalid search form in {}: {}", name, e));

        let outcome = run(&recipes, &criterion, &ReportOptions::default());

        let Some(expected) = case.expected else {
            assert_eq!(outcome, SearchOutcome::Empty, "Expected no results for {}", name);
            continue;
        };
        let report = outcome
            .report()
            .unwrap_or_else(|| panic!("Expected a report for {}", name));

        let names: Vec<&str> = report.table.rows.iter().map(|r| r.name.label.as_str()).collect();
        assert_eq!(names, expected.names, "Name mismatch for {}", name);

        let hrefs: Vec<&str> = report.table.rows.iter().map(|r| r.name.href.as_str()).collect();
        assert_eq!(hrefs, expected.hrefs, "Link mismatch for {}", name);

        let difficulties: Vec<&str> = report
            .table
            .rows
            .iter()
            .map(|r| r.difficulty.as_str())
            .collect();
        assert_eq!(
            difficulties, expected.difficulties,
            "Difficulty mismatch for {}",
            name
        );

        let numbers: Vec<usize> = report.table.rows.iter().map(|r| r.number).collect();
        let expected_numbers: Vec<usize> = (1..=expected.names.len()).collect();
        assert_eq!(numbers, expected_numbers, "Row numbering mismatch for {}", name);

        let pie: Vec<(String, f64)> = report
            .pie_chart
            .points
            .iter()
            .map(|p| (p.label.clone(), p.value))
            .collect();
        assert_eq!(pie, expected.pie, "Pie chart mismatch for {}", name);

        assert_eq!(report.bar_chart.labels(), names, "Bar labels mismatch for {}", name);
        assert_eq!(report.line_chart.labels(), names, "Line labels mismatch for {}", name);
    }
}
