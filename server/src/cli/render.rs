// server/src/cli/render.rs

// Plain-text tables for the terminal, plus the row filter behind `--search`.

use std::io::{self, Write};

use chrono::NaiveDate;
use crossterm::style::Stylize;
use models::{AppointmentStatus, Doctor, Patient};
use clinic_lib::AppointmentView;

pub type Row = Vec<String>;

/// `Jan 5, 2025`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

pub fn status_badge(status: AppointmentStatus, styled: bool) -> String {
    if !styled {
        return status.to_string();
    }
    match status {
        AppointmentStatus::Scheduled => status.as_str().yellow().to_string(),
        AppointmentStatus::Completed => status.as_str().green().to_string(),
    }
}

/// Stored ages that never parsed show as `N/A`.
pub fn format_age(age: Option<i64>) -> String {
    age.map_or_else(|| "N/A".to_string(), |age| age.to_string())
}

pub fn patient_row(patient: &Patient) -> Row {
    vec![
        patient.id.to_string(),
        patient.name.clone(),
        format_age(patient.age),
        patient.phone.clone(),
        patient.email.clone(),
    ]
}

pub fn doctor_row(doctor: &Doctor) -> Row {
    vec![
        doctor.id.to_string(),
        doctor.name.clone(),
        doctor.specialization.clone(),
        doctor.phone.clone(),
        doctor.email.clone(),
    ]
}

pub fn appointment_row(view: &AppointmentView<'_>) -> Row {
    vec![
        view.appointment.id.to_string(),
        view.patient_name().to_string(),
        view.doctor_name().to_string(),
        format_date(view.appointment.date),
        view.appointment.time.format("%H:%M").to_string(),
        view.appointment.status.to_string(),
    ]
}

/// Keeps rows whose text contains `term`, ignoring case. A blank term keeps everything.
pub fn filter_rows(rows: Vec<Row>, term: Option<&str>) -> Vec<Row> {
    let needle = match term.map(str::trim) {
        Some(t) if !t.is_empty() => t.to_lowercase(),
        _ => return rows,
    };
    rows.into_iter()
        .filter(|row| row.join(" ").to_lowercase().contains(&needle))
        .collect()
}

/// Writes an aligned table, or `empty_message` when there are no rows.
pub fn write_table(out: &mut dyn Write, headers: &[&str], rows: &[Row], empty_message: &str) -> io::Result<()> {
    write_styled_table(out, headers, rows, empty_message, |_, cell| cell.to_string())
}

/// Like `write_table`, but passes each body cell through `style(column, text)`.
/// Widths are measured on the plain text, so escape codes do not skew alignment.
pub fn write_styled_table<F>(
    out: &mut dyn Write,
    headers: &[&str],
    rows: &[Row],
    empty_message: &str,
    style: F,
) -> io::Result<()>
where
    F: Fn(usize, &str) -> String,
{
    if rows.is_empty() {
        return writeln!(out, "{}", empty_message);
    }

    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(width) = widths.get_mut(i) {
                *width = (*width).max(cell.chars().count());
            }
        }
    }

    let line = |cells: Vec<&str>, styled: bool| -> String {
        cells
            .iter()
            .zip(&widths)
            .enumerate()
            .map(|(column, (cell, width))| {
                let padding = " ".repeat(width.saturating_sub(cell.chars().count()));
                let text = if styled { style(column, cell) } else { cell.to_string() };
                format!("{}{}", text, padding)
            })
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    writeln!(out, "{}", line(headers.to_vec(), false))?;
    writeln!(out, "{}", line(rule.iter().map(String::as_str).collect(), false))?;
    for row in rows {
        writeln!(out, "{}", line(row.iter().map(String::as_str).collect(), true))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<Row> {
        vec![
            vec!["p1".to_string(), "John Doe".to_string(), "35".to_string()],
            vec!["p2".to_string(), "Jane Smith".to_string(), "28".to_string()],
        ]
    }

    #[test]
    fn should_filter_rows_case_insensitively() {
        let filtered = filter_rows(rows(), Some("JANE"));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0][1], "Jane Smith");

        assert_eq!(filter_rows(rows(), Some("35")).len(), 1);
        assert_eq!(filter_rows(rows(), Some("  ")).len(), 2);
        assert_eq!(filter_rows(rows(), None).len(), 2);
        assert!(filter_rows(rows(), Some("nobody")).is_empty());
    }

    #[test]
    fn should_format_dates_like_the_dashboard() {
        assert_eq!(format_date(NaiveDate::from_ymd_opt(2025, 1, 5).unwrap()), "Jan 5, 2025");
    }

    #[test]
    fn should_align_columns() {
        let mut out = Vec::new();
        write_table(&mut out, &["ID", "Name", "Age"], &rows(), "No patients found").unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "ID  Name        Age");
        assert_eq!(lines[2], "p1  John Doe    35");
    }

    #[test]
    fn should_align_styled_cells_by_visible_width() {
        let mut out = Vec::new();
        write_styled_table(&mut out, &["ID", "Name", "Age"], &rows(), "No patients found", |column, cell| {
            if column == 1 { cell.green().to_string() } else { cell.to_string() }
        })
        .unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "ID  Name        Age");
        assert_eq!(lines[2], format!("p1  {}    35", "John Doe".green()));
        assert_eq!(lines[3], format!("p2  {}  28", "Jane Smith".green()));
    }

    #[test]
    fn should_show_unparsed_age_as_not_available() {
        assert_eq!(format_age(Some(35)), "35");
        assert_eq!(format_age(Some(-4)), "-4");
        assert_eq!(format_age(None), "N/A");
    }

    #[test]
    fn should_print_empty_state() {
        let mut out = Vec::new();
        write_table(&mut out, &["ID"], &[], "No doctors found").unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "No doctors found\n");
    }
}
