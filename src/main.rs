mod cli;
mod errors;
mod state;
mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use kidsmap_core::*;
use std::process;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, ViewMode};
use crate::errors::{map_filter_error, map_load_error};
use crate::state::{AppState, UiState};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut state = AppState::load(cli.data.as_deref()).unwrap_or_else(|err| {
        let (title, message, details) = map_load_error(&err, cli.data.as_deref());
        eprintln!("{} {}\n\n{}", format!("{}:", title).red().bold(), message, details);
        process::exit(1);
    });
    debug!(
        source = %state.source_label(),
        hospitals = state.hospitals.len(),
        specialties = state.facets.specialties.len(),
        resources = state.facets.resources.len(),
        "Dataset ready"
    );

    report_data_quality(&state);

    if let Some(name) = &cli.share {
        let hospital = state
            .find_hospital(name)
            .with_context(|| format!("No single hospital matches '{}'", name))?;
        println!("{}", ui::format_share_text(hospital));
        return Ok(());
    }

    apply_cli_filters(&cli, &mut state);

    if cli.list_facets {
        println!("{}", ui::render_facets(&state.filters));
        return Ok(());
    }

    let result = state.query();
    let mut ui_state = UiState::new(cli.view);
    if cli.expand_all {
        ui_state.expand_all(get_sorted_group_names(&result.grouped_by_region));
    } else {
        ui_state.expand_all(cli.expand.iter().map(String::as_str));
    }

    match ui_state.view {
        ViewMode::List => {
            print!("{}", ui::render_active_filters(&state.filters));
            println!("{}", ui::render_list(&result, &ui_state));
        }
        ViewMode::Map => {
            let view = locate(&cli).await;
            print!("{}", ui::render_active_filters(&state.filters));
            println!("{}", ui::render_map(&result, &view));
        }
        ViewMode::Json => {
            let view = locate(&cli).await;
            println!("{}", ui::render_json(&result, &ui_state, &view)?);
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_directives = if verbose {
        "kidsmap=debug,kidsmap_core=debug"
    } else {
        "kidsmap=warn,kidsmap_core=warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Surface skipped records and dataset-level warnings without stopping
fn report_data_quality(state: &AppState) {
    let skipped = state.defects.iter().filter(|d| d.skipped()).count();
    if skipped > 0 {
        eprintln!(
            "{} {} record(s) in {} were skipped (run with --verbose for details)",
            "Warning:".yellow().bold(),
            skipped,
            state.source_label()
        );
    }

    if let Err(issues) = validate_dataset(&state.hospitals) {
        for issue in issues {
            warn!("{}", issue);
        }
    }
}

/// Copy search text and facet selections from the command line into state.
/// Unknown facet values are reported and ignored.
fn apply_cli_filters(cli: &Cli, state: &mut AppState) {
    state.set_search(cli.search.clone());
    state.sort_by = cli.sort_by;

    let mut selections: Vec<(FacetKind, String)> = Vec::new();
    selections.extend(
        cli.specialties
            .iter()
            .map(|v| (FacetKind::Specialty, v.clone())),
    );
    selections.extend(cli.resources.iter().map(|v| (FacetKind::Resource, v.clone())));

    match parse_facet_filters(&cli.facets) {
        Ok(parsed) => {
            for (kind, values) in parsed {
                selections.extend(values.into_iter().map(|v| (kind, v)));
            }
        }
        Err(err) => eprintln!("{} {}", "Warning:".yellow().bold(), map_filter_error(&err)),
    }

    for (kind, value) in selections {
        if let Err(err) = state.select_facet(kind, &value) {
            eprintln!("{} {}", "Warning:".yellow().bold(), map_filter_error(&err));
        }
    }
}

/// Resolve the map center from --lat/--lon, falling back to the default view
async fn locate(cli: &Cli) -> MapView {
    let provider: Box<dyn LocationProvider> = match (cli.lat, cli.lon) {
        (Some(lat), Some(lon)) => Box::new(FixedLocation(Position::new(lat, lon))),
        _ => Box::new(NoLocation),
    };
    resolve_map_view(provider.as_ref(), MapView::default()).await
}
