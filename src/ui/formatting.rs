use kidsmap_core::{Hospital, Hours};

/// Label shown instead of a schedule for always-open hospitals
pub const ALWAYS_OPEN_LABEL: &str = "24시간 운영";

/// Format operating hours into display lines
/// A schedule yields one line per declared day in display order; the
/// always-open variant is a single line and is never iterated by day
pub fn format_hours(hours: &Hours) -> Vec<String> {
    match hours {
        Hours::AlwaysOpen => vec![ALWAYS_OPEN_LABEL.to_string()],
        Hours::Scheduled(days) => days
            .iter()
            .map(|(day, interval)| {
                let mut line = format!(
                    "{}: {} - {}",
                    day.korean_label(),
                    interval.start,
                    interval.end
                );
                if let Some(note) = &interval.note {
                    line.push_str(&format!(" ({})", note));
                }
                line
            })
            .collect(),
    }
}

/// Join facet values for display, "-" when there are none
pub fn format_facet_values(values: &[String]) -> String {
    if values.is_empty() {
        "-".to_string()
    } else {
        values.join(", ")
    }
}

/// Format a hospital into a displayable card
pub fn format_hospital_card(hospital: &Hospital) -> String {
    let mut lines = vec![format!("### {}", hospital.name), String::new()];

    if !hospital.kind.is_empty() {
        lines.push(format!("- 종류: {}", hospital.kind));
    }
    if !hospital.address.is_empty() {
        lines.push(format!("- 주소: {}", hospital.address));
    }
    if !hospital.phone.is_empty() {
        lines.push(format!("- 전화: {}", hospital.phone));
    }
    if let Some(website) = &hospital.website {
        lines.push(format!("- 홈페이지: {}", website));
    }
    lines.push(format!(
        "- 진료과목: {}",
        format_facet_values(&hospital.specialties)
    ));
    lines.push(format!(
        "- 의료자원: {}",
        format_facet_values(&hospital.resources)
    ));

    let hours = format_hours(&hospital.hours);
    if hours.is_empty() {
        lines.push("- 운영 시간: 정보 없음".to_string());
    } else {
        lines.push("- 운영 시간:".to_string());
        lines.extend(hours.into_iter().map(|line| format!("  - {}", line)));
    }

    lines.join("\n")
}

/// One map marker line: name, coordinates, and phone
pub fn format_marker(hospital: &Hospital) -> String {
    if hospital.phone.is_empty() {
        format!("{} @ {}", hospital.name, hospital.position)
    } else {
        format!("{} @ {} ({})", hospital.name, hospital.position, hospital.phone)
    }
}
