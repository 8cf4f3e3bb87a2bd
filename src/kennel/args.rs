use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "kennel")]
#[command(about = "Browse, search and shortlist dogs up for adoption", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a dog to the catalog
    #[command(alias = "n")]
    Add {
        /// Name of the dog
        name: String,

        /// Sex: m or f
        #[arg(long)]
        sex: String,

        /// Breed name, as imported with `breeds import`
        #[arg(long)]
        breed: String,

        /// Age in years
        #[arg(long)]
        age: u32,

        /// Weight in pounds
        #[arg(long)]
        weight: f64,

        /// Adoption fee
        #[arg(long, default_value_t = 0.0)]
        price: f64,

        /// Mark as ready for adoption (requires a price)
        #[arg(long)]
        ready: bool,

        /// Use this id instead of a generated one
        #[arg(long)]
        id: Option<String>,

        /// Path to a photo of the dog
        #[arg(long)]
        image: Option<String>,
    },

    /// Remove one or more dogs
    #[command(alias = "rm")]
    Remove {
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Show a single dog
    #[command(alias = "v")]
    Show { id: String },

    /// List dogs ready for adoption
    #[command(alias = "ls")]
    List {
        /// Include dogs that are not ready yet
        #[arg(short, long)]
        all: bool,
    },

    /// Adoptable dogs, youngest first
    Home,

    /// Search adoptable dogs
    #[command(alias = "s")]
    Search {
        /// Name contains (case-sensitive)
        #[arg(long)]
        name: Option<String>,

        /// Sex: m, f, male or female
        #[arg(long)]
        sex: Option<String>,

        /// Breed name contains (case-sensitive)
        #[arg(long)]
        breed: Option<String>,

        /// Exact age
        #[arg(long)]
        age: Option<String>,

        /// Exact weight
        #[arg(long)]
        weight: Option<String>,

        /// Exact price
        #[arg(long)]
        price: Option<String>,

        /// Field to order by (defaults to the `sort` config key)
        #[arg(long)]
        sort: Option<String>,

        /// Order descending
        #[arg(long)]
        desc: bool,
    },

    /// Rename a dog
    Rename { id: String, name: String },

    /// Set a dog's age (it can only go up)
    SetAge { id: String, age: u32 },

    /// Set a dog's weight
    SetWeight { id: String, weight: f64 },

    /// Set a dog's adoption fee
    SetPrice {
        id: String,
        #[arg(allow_negative_numbers = true)]
        price: f64,
    },

    /// Mark a dog ready for adoption
    Ready {
        id: String,

        /// Take the dog off the adoption list instead
        #[arg(long)]
        no: bool,
    },

    /// Manage the wish list
    #[command(alias = "w")]
    Wish {
        #[command(subcommand)]
        action: WishCommands,
    },

    /// Export the wish list as JSON
    Export {
        /// Output file (".json" is appended when missing)
        path: Option<PathBuf>,
    },

    /// Manage breed reference data
    Breeds {
        #[command(subcommand)]
        action: BreedCommands,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (sort, order)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum WishCommands {
    /// Add a dog to the wish list
    Add { id: String },

    /// Remove a dog from the wish list
    #[command(alias = "rm")]
    Remove { id: String },

    /// Show the wish list
    #[command(alias = "ls")]
    List,
}

#[derive(Subcommand, Debug)]
pub enum BreedCommands {
    /// Import breeds from a dogapi.dog v2 JSON document
    Import { file: PathBuf },

    /// List known breeds
    #[command(alias = "ls")]
    List,
}
