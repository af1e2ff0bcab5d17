use std::fmt::Write as _;
use std::io::{BufRead, Write};

use animal_logging::animal_warn;
use animalbase_core::{AnimalRowView, AppViewModel, LoadStatus, Renderer, MAX_WINNERS};

use super::SharedTerminal;

pub struct TerminalRenderer<I, W> {
    terminal: SharedTerminal<I, W>,
}

impl<I, W> TerminalRenderer<I, W> {
    pub fn new(terminal: SharedTerminal<I, W>) -> Self {
        Self { terminal }
    }
}

impl<I: BufRead, W: Write> Renderer for TerminalRenderer<I, W> {
    fn render(&mut self, view: &AppViewModel) {
        let text = render_view(view);
        let mut terminal = self.terminal.borrow_mut();
        let out = terminal.output();
        if let Err(err) = out.write_all(text.as_bytes()).and_then(|()| out.flush()) {
            animal_warn!("Failed to draw table: {}", err);
        }
    }
}

pub fn render_view(view: &AppViewModel) -> String {
    let mut text = String::new();
    match &view.load {
        LoadStatus::Pending => {
            text.push_str("Loading animals...\n");
            return text;
        }
        LoadStatus::Failed(message) => {
            let _ = writeln!(text, "Could not load animals: {message}");
            return text;
        }
        LoadStatus::Loaded => {}
    }

    let _ = writeln!(
        text,
        "Filter: {} | Sort: {} {} | Winners: {}/{} | Showing {} of {}{}",
        view.settings.filter,
        view.settings.sort_key,
        view.settings.sort_direction,
        view.winner_count,
        MAX_WINNERS,
        view.rows.len(),
        view.total_records,
        if view.rejected_entries > 0 {
            format!(" ({} rejected)", view.rejected_entries)
        } else {
            String::new()
        }
    );
    if !view.available_types.is_empty() {
        let _ = writeln!(text, "Types: {}", view.available_types.join(", "));
    }

    let name_width = column_width(view, "Name", |row| row.name.chars().count());
    let desc_width = column_width(view, "Desc", |row| row.description.chars().count());
    let type_width = column_width(view, "Type", |row| row.animal_type.chars().count());

    let _ = writeln!(
        text,
        "{:<4} {:<name_width$} {:<desc_width$} {:<type_width$} {:>3}  Winner",
        "Star", "Name", "Desc", "Type", "Age"
    );
    for row in &view.rows {
        text.push_str(&format_row(row, name_width, desc_width, type_width));
        text.push('\n');
    }
    text
}

fn column_width(view: &AppViewModel, header: &str, len: impl Fn(&AnimalRowView) -> usize) -> usize {
    view.rows
        .iter()
        .map(len)
        .max()
        .unwrap_or(0)
        .max(header.len())
}

fn format_row(row: &AnimalRowView, name_width: usize, desc_width: usize, type_width: usize) -> String {
    let star = if row.is_starred { "⭐" } else { "☆" };
    let winner = if row.is_winner { "[W]" } else { "[ ]" };
    format!(
        "{star:<4} {:<name_width$} {:<desc_width$} {:<type_width$} {:>3}  {winner}",
        row.name, row.description, row.animal_type, row.age
    )
}
