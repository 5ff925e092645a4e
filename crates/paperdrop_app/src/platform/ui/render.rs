use chrono::{DateTime, Local};
use paperdrop_core::{AppViewModel, StatusViewModel, UploadViewModel};

pub fn help() -> String {
    [
        "Paperdrop - PDF upload client",
        "  select <path>   pick a PDF for submission",
        "  submit          upload the selected file",
        "  status          fetch and show the processing jobs",
        "  help            show this text",
        "  quit            exit",
    ]
    .join("\n")
}

pub fn render(view: &AppViewModel) -> String {
    format!("{}\n{}", render_upload(&view.upload), render_status(&view.status))
}

pub fn render_upload(view: &UploadViewModel) -> String {
    let mut out = String::from("-- Upload PDF --\n");
    match &view.selected_file {
        Some(name) => out.push_str(&format!("Selected: {name}\n")),
        None => out.push_str("Selected: (none)\n"),
    }
    if view.in_flight {
        out.push_str("Uploading...\n");
    } else if view.submit_enabled {
        out.push_str("Ready to submit.\n");
    }
    if let Some(message) = &view.message {
        out.push_str(&format!("{message}\n"));
    }
    out
}

pub fn render_status(view: &StatusViewModel) -> String {
    let mut out = String::from("-- Processing Status --\n");
    if view.loading {
        out.push_str("Loading...\n");
        return out;
    }

    const HEADERS: [&str; 4] = ["File Name", "Status", "Progress", "Created At"];
    let rows: Vec<[String; 4]> = view
        .rows
        .iter()
        .map(|row| {
            [
                row.filename.clone(),
                row.status.clone(),
                row.progress.clone(),
                format_created_at(&row.created_at),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.len());
        }
    }

    out.push_str(&format_row(&HEADERS.map(String::from), &widths));
    for row in &rows {
        out.push_str(&format_row(row, &widths));
    }
    out
}

fn format_row(cells: &[String; 4], widths: &[usize; 4]) -> String {
    let mut line = String::new();
    for (cell, &width) in cells.iter().zip(widths.iter()) {
        if !line.is_empty() {
            line.push_str("  ");
        }
        line.push_str(&format!("{cell:<width$}"));
    }
    line.truncate(line.trim_end().len());
    line.push('\n');
    line
}

/// Renders a backend timestamp in local time. Anything that is not RFC3339
/// is displayed verbatim.
pub fn format_created_at(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(instant) => instant
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string(),
        Err(_) => raw.to_string(),
    }
}
