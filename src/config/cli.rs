use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "book-catalog")]
#[command(about = "Interactive in-memory book catalog")]
pub struct CatalogArgs {
    /// Path to an optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Override the latest publication year accepted by the validator
    #[arg(long)]
    pub max_year: Option<i64>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
