pub mod difficulty;
pub mod error;
pub mod ingredients;
pub mod report;
pub mod search;
pub mod store;
pub mod types;

pub use difficulty::{classify, Difficulty};
pub use error::{ParseDifficultyError, StoreError, ValidationError};
pub use report::{
    run, ChartDataSet, ChartKind, ChartPoint, ChartRenderer, DisplayTable, Labeling, Link, Report,
    ReportOptions, ReportRow, SearchOutcome, TableRow,
};
pub use search::{SearchBy, SearchCriterion, SearchForm};
pub use store::{JsonFileStore, MemoryStore, RecipeStore};
pub use types::{NewRecipe, Recipe, RecipeId, DEFAULT_COLLECTION_PATH, DEFAULT_PICTURE};
