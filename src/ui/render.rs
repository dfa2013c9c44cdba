use colored::Colorize;
use kidsmap_core::{has_filters, CenterSource, FacetKind, FilterState, MapView, QueryResult};
use serde_json::Value;

use super::formatting::{format_hospital_card, format_marker};
use crate::state::UiState;

fn facet_heading(kind: FacetKind) -> &'static str {
    match kind {
        FacetKind::Specialty => "진료과목",
        FacetKind::Resource => "의료자원",
    }
}

/// Facet universes with their current selection marks
pub fn render_facets(filters: &FilterState) -> String {
    let mut out = Vec::new();

    for kind in [FacetKind::Specialty, FacetKind::Resource] {
        let selection = filters.selection(kind);
        out.push(format!("## {} ({})", facet_heading(kind), kind).bold().to_string());
        out.push(String::new());

        if selection.is_empty() {
            out.push("_(none)_".to_string());
        }
        for (value, selected) in selection.entries() {
            let mark = if selected { "[x]" } else { "[ ]" };
            out.push(format!("- {} {}", mark, value));
        }
        out.push(String::new());
    }

    out.join("\n")
}

/// Summary of active filters; empty when nothing is active
pub fn render_active_filters(filters: &FilterState) -> String {
    if !has_filters(filters) {
        return String::new();
    }

    let mut out = vec!["## Active Filters".bold().to_string(), String::new()];
    if !filters.search_term.is_empty() {
        out.push(format!("- **Name contains:** {}", filters.search_term));
    }
    for kind in [FacetKind::Specialty, FacetKind::Resource] {
        let selected: Vec<&str> = filters.selection(kind).selected().collect();
        if !selected.is_empty() {
            out.push(format!(
                "- **{}:** {}",
                facet_heading(kind),
                selected.join(" AND ")
            ));
        }
    }
    out.push(String::new());
    out.join("\n")
}

/// Region-grouped list; collapsed regions show only their header
pub fn render_list(result: &QueryResult, ui: &UiState) -> String {
    let mut out = vec![
        format!("# 검색 결과: {}곳", result.len()).bold().to_string(),
        String::new(),
    ];

    if result.is_empty() {
        out.push("_조건에 맞는 병원이 없습니다._".to_string());
        return out.join("\n");
    }

    for group in &result.grouped_by_region {
        let expanded = ui.is_expanded(&group.region);
        let marker = if expanded { "▼" } else { "▶" };
        out.push(format!(
            "## {} {} ({})",
            marker,
            group.region.cyan().bold(),
            group.hospitals.len()
        ));
        out.push(String::new());

        if expanded {
            for hospital in &group.hospitals {
                out.push(format_hospital_card(hospital));
                out.push(String::new());
            }
        }
    }

    out.join("\n")
}

/// Map center plus one marker per filtered hospital
pub fn render_map(result: &QueryResult, view: &MapView) -> String {
    let source = match view.source {
        CenterSource::CurrentLocation => "현재 위치",
        CenterSource::Default => "기본 위치",
    };

    let mut out = vec![
        "# 지도".bold().to_string(),
        String::new(),
        format!("- 중심: {} (zoom {}, {})", view.center, view.zoom, source),
    ];
    if let Some(notice) = &view.notice {
        out.push(format!("- {}", notice.yellow()));
    }
    out.push(String::new());
    out.push(format!("## 마커: {}", result.len()).bold().to_string());
    out.push(String::new());

    if result.is_empty() {
        out.push("_표시할 병원이 없습니다._".to_string());
    }
    for hospital in &result.filtered {
        out.push(format!("- {}", format_marker(hospital)));
    }

    out.join("\n")
}

/// `{filtered, groupedByRegion, map}` as pretty JSON; each group also
/// carries its `expanded` flag
pub fn render_json(result: &QueryResult, ui: &UiState, view: &MapView) -> serde_json::Result<String> {
    let mut value = serde_json::to_value(result)?;

    if let Some(groups) = value
        .get_mut("groupedByRegion")
        .and_then(Value::as_array_mut)
    {
        for group in groups {
            let expanded = group
                .get("region")
                .and_then(Value::as_str)
                .is_some_and(|region| ui.is_expanded(region));
            group["expanded"] = Value::Bool(expanded);
        }
    }
    value["map"] = serde_json::to_value(view)?;

    serde_json::to_string_pretty(&value)
}
