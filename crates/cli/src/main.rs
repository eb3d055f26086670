use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use filmiq_core::FilterSpec;
use filmiq_storage::DatasetSources;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "filmiq")]
#[command(about = "Movie ratings and Oscar awards analytics", long_about = None)]
struct Cli {
    /// Movie table (CSV)
    #[arg(long, global = true, env = "FILMIQ_MOVIES_CSV", default_value = "imdb_final.csv")]
    movies: PathBuf,
    /// Award table (CSV)
    #[arg(long, global = true, env = "FILMIQ_AWARDS_CSV", default_value = "oscars_final.csv")]
    awards: PathBuf,
    #[command(subcommand)]
    command: Commands,
}

/// Filter flags shared by the page commands. Omitted flags take the
/// dashboard defaults.
#[derive(Args, Debug, Default)]
pub(crate) struct FilterArgs {
    #[arg(long)]
    year_min: Option<i32>,
    #[arg(long)]
    year_max: Option<i32>,
    #[arg(long)]
    min_rating: Option<f64>,
    /// Genre to match; repeat or comma-separate for several
    #[arg(long = "genre", value_delimiter = ',')]
    genres: Vec<String>,
    #[arg(long)]
    winners_only: bool,
}

impl FilterArgs {
    pub(crate) fn into_spec(self, defaults: FilterSpec) -> FilterSpec {
        let genres: Vec<String> = self
            .genres
            .into_iter()
            .map(|g| g.trim().to_owned())
            .filter(|g| !g.is_empty())
            .collect();
        FilterSpec {
            year_min: self.year_min.unwrap_or(defaults.year_min),
            year_max: self.year_max.unwrap_or(defaults.year_max),
            min_rating: self.min_rating.unwrap_or(defaults.min_rating),
            genres: if genres.is_empty() { defaults.genres } else { genres },
            winners_only: self.winners_only || defaults.winners_only,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the JSON API
    Serve {
        #[arg(short, long, default_value = "8501")]
        port: u16,
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,
    },
    /// Summary, rating distribution, wins per year and genre success
    Overview {
        #[command(flatten)]
        filter: FilterArgs,
    },
    /// Search movie titles
    Search {
        query: String,
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
    /// Show one movie and the Oscars it won
    Movie { id: String },
    /// Director stats, or one director's movies with --name
    Directors {
        #[command(flatten)]
        filter: FilterArgs,
        #[arg(short, long)]
        name: Option<String>,
    },
    /// Actor stats, or one actor's movies with --name
    Actors {
        #[command(flatten)]
        filter: FilterArgs,
        #[arg(short, long)]
        name: Option<String>,
    },
    /// Year bounds, genres and the default filter
    Filters,
}

#[tokio::main]
async fn main() -> Result<()> {
    // stdout carries the JSON output
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let cli = Cli::parse();
    let sources = DatasetSources::new(cli.movies, cli.awards);

    match cli.command {
        Commands::Serve { port, host } => commands::serve::run(sources, port, host).await?,
        Commands::Overview { filter } => commands::query::run_overview(&sources, filter)?,
        Commands::Search { query, limit } => commands::query::run_search(&sources, &query, limit)?,
        Commands::Movie { id } => commands::query::run_movie(&sources, &id)?,
        Commands::Directors { filter, name } => {
            commands::query::run_directors(&sources, filter, name.as_deref())?;
        },
        Commands::Actors { filter, name } => {
            commands::query::run_actors(&sources, filter, name.as_deref())?;
        },
        Commands::Filters => commands::query::run_filters(&sources)?,
    }

    Ok(())
}
