mod config;
mod render;
mod seed;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::builder::PossibleValue;
use clap::{Parser, Subcommand, ValueEnum};
use config::{CliConfig, DEFAULT_LOG_FILTER};
use recipebox_core::{
    run, JsonFileStore, NewRecipe, RecipeId, RecipeStore, ReportOptions, SearchBy, SearchForm,
};
use render::{render_outcome, OutputFormat};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "recipebox")]
#[command(about = "Store, list and search recipes", long_about = None)]
struct Cli {
    /// Recipe file (default: ~/.recipebox/recipes.json)
    #[arg(long, global = true, env = "RECIPEBOX_DATA_FILE")]
    data_file: Option<PathBuf>,

    /// Base path for recipe detail links (default: /collection)
    #[arg(long, global = true, env = "RECIPEBOX_COLLECTION_PATH")]
    collection_path: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a recipe
    Add {
        #[arg(long)]
        name: String,
        /// Comma-separated, e.g. "Flour, Sugar, Eggs"
        #[arg(long)]
        ingredients: String,
        /// Cooking time in minutes
        #[arg(long)]
        cooking_time: u32,
        /// Picture reference
        #[arg(long)]
        picture: Option<String>,
    },
    /// List all recipes
    List,
    /// Show a single recipe
    Show { id: u64 },
    /// Search recipes and show a table with charts
    Search {
        /// Field to search on
        #[arg(long = "by", value_enum)]
        search_by: SearchByArg,
        /// Part of the recipe name (case-insensitive)
        #[arg(long, default_value = "")]
        term: String,
        /// Exact ingredients text, e.g. "Bread, Butter"
        #[arg(long, default_value = "")]
        ingredients: String,
        /// Easy, Medium, Intermediate or Hard
        #[arg(long, default_value = "")]
        difficulty: String,
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Add a set of sample recipes
    Seed,
}

#[derive(Debug, Clone, Copy)]
enum SearchByArg {
    Name,
    Ingredients,
    Difficulty,
}

impl ValueEnum for SearchByArg {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Name, Self::Ingredients, Self::Difficulty]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        let mode = SearchBy::from(*self);
        Some(PossibleValue::new(mode.as_str()).help(mode.label()))
    }
}

impl From<SearchByArg> for SearchBy {
    fn from(arg: SearchByArg) -> Self {
        match arg {
            SearchByArg::Name => SearchBy::Name,
            SearchByArg::Ingredients => SearchBy::Ingredients,
            SearchByArg::Difficulty => SearchBy::Difficulty,
        }
    }
}

fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = CliConfig::from_env().with_overrides(cli.data_file, cli.collection_path);
    tracing::debug!(data_file = %config.data_file.display(), "using recipe file");

    let mut store = JsonFileStore::open(&config.data_file)
        .with_context(|| format!("Failed to open {}", config.data_file.display()))?;

    match cli.command {
        Commands::Add {
            name,
            ingredients,
            cooking_time,
            picture,
        } => {
            let mut recipe = NewRecipe::new(name, ingredients, cooking_time);
            recipe.picture = picture;
            let created = store.create(recipe).context("Failed to add recipe")?;
            println!("Recipe added successfully (id {}).", created.id);
        }
        Commands::List => list(&store, &config)?,
        Commands::Show { id } => show(&store, &config, RecipeId(id))?,
        Commands::Search {
            search_by,
            term,
            ingredients,
            difficulty,
            format,
        } => {
            let form = SearchForm {
                search_by: SearchBy::from(search_by).as_str().to_string(),
                search_term: term,
                ingredients,
                difficulty,
            };
            search(&store, &config, form, format)?;
        }
        Commands::Seed => {
            let added = seed::seed(&mut store)?;
            println!("Seeded {} recipes into {}", added, store.path().display());
        }
    }

    Ok(())
}

fn list(store: &impl RecipeStore, config: &CliConfig) -> Result<()> {
    let recipes = store.all_recipes()?;
    if recipes.is_empty() {
        println!("No recipes yet.");
        return Ok(());
    }

    for recipe in recipes {
        println!(
            "{:>4}  {:<50}  {:>4} min  {:<12}  {}",
            recipe.id,
            recipe.name,
            recipe.cooking_time,
            recipe.difficulty(),
            recipe.detail_path(&config.collection_path)
        );
    }
    Ok(())
}

fn show(store: &impl RecipeStore, config: &CliConfig, id: RecipeId) -> Result<()> {
    let recipe = store
        .get(id)?
        .with_context(|| format!("Recipe {} not found", id))?;

    println!("{}", recipe);
    println!("  Cooking time: {} minutes", recipe.cooking_time);
    println!("  Difficulty:   {}", recipe.difficulty());
    println!("  Picture:      {}", recipe.picture);
    println!("  Link:         {}", recipe.detail_path(&config.collection_path));
    println!("  Ingredients:");
    for item in recipe.ingredient_list() {
        println!("    - {}", item);
    }
    Ok(())
}

fn search(
    store: &impl RecipeStore,
    config: &CliConfig,
    form: SearchForm,
    format: OutputFormat,
) -> Result<()> {
    let criterion = form.into_criterion().context("Invalid search")?;
    let recipes = store.all_recipes()?;

    let options = ReportOptions {
        collection_path: config.collection_path.clone(),
    };
    let outcome = run(&recipes, &criterion, &options);

    print!("{}", render_outcome(&outcome, format)?);
    Ok(())
}
