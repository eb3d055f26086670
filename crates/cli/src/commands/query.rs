use std::sync::Arc;

use anyhow::{Result, bail};
use filmiq_service::DashboardService;
use filmiq_storage::{Dataset, DatasetSources};
use serde::Serialize;

use crate::FilterArgs;

fn open(sources: &DatasetSources) -> Result<DashboardService> {
    let dataset = Dataset::load(sources)?;
    Ok(DashboardService::new(Arc::new(dataset)))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub(crate) fn run_overview(sources: &DatasetSources, filter: FilterArgs) -> Result<()> {
    let service = open(sources)?;
    let spec = filter.into_spec(service.default_filter()?);
    print_json(&service.overview(&spec)?)
}

pub(crate) fn run_search(sources: &DatasetSources, query: &str, limit: usize) -> Result<()> {
    let service = open(sources)?;
    print_json(&service.search(query, limit)?)
}

pub(crate) fn run_movie(sources: &DatasetSources, id: &str) -> Result<()> {
    let service = open(sources)?;
    match service.movie_detail(id)? {
        Some(detail) => print_json(&detail),
        None => bail!("movie not found: {id}"),
    }
}

pub(crate) fn run_directors(
    sources: &DatasetSources,
    filter: FilterArgs,
    name: Option<&str>,
) -> Result<()> {
    let service = open(sources)?;
    let spec = filter.into_spec(service.default_filter()?);
    match name {
        Some(director) => print_json(&service.movies_by_director(&spec, director)?),
        None => print_json(&service.directors(&spec)?),
    }
}

pub(crate) fn run_actors(
    sources: &DatasetSources,
    filter: FilterArgs,
    name: Option<&str>,
) -> Result<()> {
    let service = open(sources)?;
    let spec = filter.into_spec(service.default_filter()?);
    match name {
        Some(actor) => print_json(&service.movies_by_actor(&spec, actor)?),
        None => print_json(&service.actors(&spec)?),
    }
}

pub(crate) fn run_filters(sources: &DatasetSources) -> Result<()> {
    print_json(&open(sources)?.filter_options()?)
}
