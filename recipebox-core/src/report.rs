//! Search & report pipeline.
//!
//! Filters recipes by a [`SearchCriterion`], enriches each match with its
//! difficulty and ingredient count, and projects the result into a
//! [`DisplayTable`] plus three [`ChartDataSet`]s for an external renderer.

use serde::Serialize;

use crate::difficulty::Difficulty;
use crate::search::SearchCriterion;
use crate::types::{detail_path, Recipe, RecipeId, DEFAULT_COLLECTION_PATH};

pub const BAR_CHART_ID: &str = "#1";
pub const PIE_CHART_ID: &str = "#2";
pub const LINE_CHART_ID: &str = "#3";

/// Column keys in display order. Headers capitalize the first letter.
const COLUMN_KEYS: [&str; 3] = ["name", "Cooking Time (in minutes)", "difficulty"];

#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Base path for recipe detail links
    pub collection_path: String,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            collection_path: DEFAULT_COLLECTION_PATH.to_string(),
        }
    }
}

/// Result of a search.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SearchOutcome {
    /// Nothing matched: show the search form only.
    Empty,
    Report(Report),
}

impl SearchOutcome {
    pub fn report(&self) -> Option<&Report> {
        match self {
            SearchOutcome::Empty => None,
            SearchOutcome::Report(report) => Some(report),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// Matching recipes with derived metrics, in filter order
    pub rows: Vec<ReportRow>,
    pub table: DisplayTable,
    pub bar_chart: ChartDataSet,
    pub pie_chart: ChartDataSet,
    pub line_chart: ChartDataSet,
}

impl Report {
    pub fn charts(&self) -> [&ChartDataSet; 3] {
        [&self.bar_chart, &self.pie_chart, &self.line_chart]
    }
}

/// A matching recipe with its computed metrics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    pub id: RecipeId,
    pub name: String,
    pub ingredients: String,
    pub cooking_time: u32,
    pub difficulty: Difficulty,
    pub ingredient_count: usize,
}

impl From<&Recipe> for ReportRow {
    fn from(recipe: &Recipe) -> Self {
        Self {
            id: recipe.id,
            name: recipe.name.clone(),
            ingredients: recipe.ingredients.clone(),
            cooking_time: recipe.cooking_time,
            difficulty: recipe.difficulty(),
            ingredient_count: recipe.ingredient_count(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayTable {
    pub headers: Vec<String>,
    pub rows: Vec<TableRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRow {
    /// 1-based
    pub number: usize,
    pub name: Link,
    pub cooking_time: u32,
    pub difficulty: Difficulty,
}

/// Hyperlink to a recipe's detail page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub label: String,
    pub href: String,
}

impl DisplayTable {
    fn build(rows: &[ReportRow], collection_path: &str) -> Self {
        let headers = COLUMN_KEYS.iter().map(|key| capitalize_first(key)).collect();
        let rows = rows
            .iter()
            .enumerate()
            .map(|(i, row)| TableRow {
                number: i + 1,
                name: Link {
                    label: row.name.clone(),
                    href: detail_path(collection_path, row.id),
                },
                cooking_time: row.cooking_time,
                difficulty: row.difficulty,
            })
            .collect();

        Self { headers, rows }
    }
}

fn capitalize_first(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Bar,
    Pie,
    Line,
}

/// How chart points relate to the result rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Labeling {
    /// One point per row, in row order
    PerRecord,
    /// One point per category, valued by the number of rows in it
    CountByCategory,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
}

/// Input for one chart: labels and values, plus how to read them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartDataSet {
    pub chart_id: String,
    pub kind: ChartKind,
    pub labeling: Labeling,
    /// Name of the value axis
    pub value_label: String,
    pub points: Vec<ChartPoint>,
}

impl ChartDataSet {
    /// One point per row.
    pub fn per_record<L, V>(
        chart_id: &str,
        kind: ChartKind,
        value_label: &str,
        rows: &[ReportRow],
        label: L,
        value: V,
    ) -> Self
    where
        L: Fn(&ReportRow) -> String,
        V: Fn(&ReportRow) -> f64,
    {
        Self {
            chart_id: chart_id.to_string(),
            kind,
            labeling: Labeling::PerRecord,
            value_label: value_label.to_string(),
            points: rows
                .iter()
                .map(|row| ChartPoint {
                    label: label(row),
                    value: value(row),
                })
                .collect(),
        }
    }

    /// One point per difficulty present in `rows`, easiest first.
    pub fn count_by_difficulty(chart_id: &str, kind: ChartKind, rows: &[ReportRow]) -> Self {
        let points = Difficulty::ALL
            .iter()
            .filter_map(|level| {
                let count = rows.iter().filter(|row| row.difficulty == *level).count();
                (count > 0).then(|| ChartPoint {
                    label: level.to_string(),
                    value: count as f64,
                })
            })
            .collect();

        Self {
            chart_id: chart_id.to_string(),
            kind,
            labeling: Labeling::CountByCategory,
            value_label: "Recipes".to_string(),
            points,
        }
    }

    pub fn labels(&self) -> Vec<&str> {
        self.points.iter().map(|p| p.label.as_str()).collect()
    }

    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }

    pub fn total(&self) -> f64 {
        self.points.iter().map(|p| p.value).sum()
    }
}

/// Turns a chart dataset into something displayable.
pub trait ChartRenderer {
    type Output;

    fn render(&self, chart: &ChartDataSet) -> Self::Output;
}

/// Run a search over `recipes` and build the report.
///
/// Returns [`SearchOutcome::Empty`] when nothing matches.
pub fn run(
    recipes: &[Recipe],
    criterion: &SearchCriterion,
    options: &ReportOptions,
) -> SearchOutcome {
    let matches = criterion.filter(recipes);
    tracing::debug!(
        search_by = criterion.search_by().as_str(),
        total = recipes.len(),
        matched = matches.len(),
        "filtered recipes"
    );

    if matches.is_empty() {
        return SearchOutcome::Empty;
    }

    let rows: Vec<ReportRow> = matches.into_iter().map(ReportRow::from).collect();
    SearchOutcome::Report(build_report(rows, options))
}

fn build_report(rows: Vec<ReportRow>, options: &ReportOptions) -> Report {
    let table = DisplayTable::build(&rows, &options.collection_path);

    let by_name = |row: &ReportRow| row.name.clone();
    let cooking_time = |row: &ReportRow| f64::from(row.cooking_time);
    let value_label = "Cooking Time (in minutes)";

    let bar_chart = ChartDataSet::per_record(
        BAR_CHART_ID,
        ChartKind::Bar,
        value_label,
        &rows,
        by_name,
        cooking_time,
    );
    let pie_chart = ChartDataSet::count_by_difficulty(PIE_CHART_ID, ChartKind::Pie, &rows);
    let line_chart = ChartDataSet::per_record(
        LINE_CHART_ID,
        ChartKind::Line,
        value_label,
        &rows,
        by_name,
        cooking_time,
    );

    Report {
        rows,
        table,
        bar_chart,
        pie_chart,
        line_chart,
    }
}
