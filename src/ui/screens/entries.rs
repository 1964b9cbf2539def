use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::ui::app::{App, FormField, InputMode};
use crate::ui::theme;
use crate::ui::util::truncate;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(36), Constraint::Min(40)])
        .split(area);

    render_form(f, chunks[0], app);
    render_table(f, chunks[1], app);
}

fn render_form(f: &mut Frame, area: Rect, app: &App) {
    let editing = app.input_mode == InputMode::Editing;

    let mut lines = vec![Line::from("")];
    for field in FormField::all() {
        let focused = editing && app.focus == *field;
        let value_style = if focused {
            theme::focused_field_style()
        } else {
            theme::normal_style()
        };
        let cursor = if focused { "▏" } else { "" };

        lines.push(Line::from(Span::styled(
            format!(" {}", field.label()),
            theme::dim_style(),
        )));
        lines.push(Line::from(vec![
            Span::raw(" "),
            Span::styled(
                format!(" {}{cursor} ", app.field_value(*field)),
                value_style,
            ),
        ]));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(""));
    let target = match app.selected_id {
        Some(id) => Line::from(Span::styled(
            format!(" Editing record #{id}"),
            Style::default().fg(theme::YELLOW),
        )),
        None => Line::from(Span::styled(" New entry", theme::dim_style())),
    };
    lines.push(target);

    let title = Span::styled(
        " Entry ",
        Style::default()
            .fg(theme::TEXT_DIM)
            .add_modifier(Modifier::BOLD),
    );
    let border = if editing {
        Style::default().fg(theme::YELLOW)
    } else {
        Style::default().fg(theme::OVERLAY)
    };
    let form = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(title),
    );
    f.render_widget(form, area);
}

fn render_table(f: &mut Frame, area: Rect, app: &App) {
    if app.records.is_empty() {
        let msg = vec![
            Line::from(""),
            Line::from(Span::styled("No expense records yet", theme::dim_style())),
            Line::from(""),
            Line::from(Span::styled(
                "Press e to edit the entry fields, then s to save",
                theme::dim_style(),
            )),
        ];
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY))
            .title(Span::styled(
                " Expenses (0) ",
                Style::default()
                    .fg(theme::TEXT_DIM)
                    .add_modifier(Modifier::BOLD),
            ));
        f.render_widget(Paragraph::new(msg).centered().block(block), area);
        return;
    }

    let header_cells = ["Serial no", "Item Name", "Item Price", "Purchase Date"]
        .iter()
        .map(|h| Cell::from(*h).style(theme::header_style()));
    let header = Row::new(header_cells).height(1);

    let rows: Vec<Row> = app
        .records
        .iter()
        .enumerate()
        .skip(app.record_scroll)
        .take(area.height.saturating_sub(3) as usize)
        .map(|(i, rec)| {
            let is_cursor = i == app.record_index;
            let is_selected = rec.id.is_some() && rec.id == app.selected_id;

            let serial_cell = if is_selected {
                format!("\u{2022} {}", rec.serial())
            } else {
                format!("  {}", rec.serial())
            };

            let style = if is_cursor {
                theme::selected_style()
            } else if is_selected {
                Style::default().fg(theme::YELLOW)
            } else if i % 2 == 1 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };

            Row::new(vec![
                Cell::from(serial_cell),
                Cell::from(truncate(&rec.item_name, 32)),
                Cell::from(format!("{:.2}", rec.item_price)),
                Cell::from(rec.purchase_date.clone()),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(11),
        Constraint::Min(20),
        Constraint::Length(12),
        Constraint::Length(18),
    ];

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY))
            .title(Span::styled(
                format!(" Expenses ({}) ", app.records.len()),
                Style::default()
                    .fg(theme::TEXT_DIM)
                    .add_modifier(Modifier::BOLD),
            )),
    );

    f.render_widget(table, area);
}
