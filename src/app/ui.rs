use ratatui::{
    Frame,
    layout::{Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{
        Block, Borders, Cell, Clear, List, ListItem, ListState, Paragraph, Row, Table, TableState,
        Wrap,
    },
};

use crate::{
    app::{DepreciationReport, app::ALL_CATEGORIES, utils::format_date},
    models::ReportFilter,
};

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let [area] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    area
}

#[allow(clippy::too_many_arguments)]
pub fn render(
    frame: &mut Frame,
    report: &DepreciationReport,
    filter: &ReportFilter,
    table_state: &mut TableState,
    error_popup: &Option<String>,
    show_category_popup: bool,
    categories: &[String],
    category_state: &mut ListState,
    selection_mode: bool,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(frame.area());

    let category = filter.category().as_deref().unwrap_or(ALL_CATEGORIES);
    let title = Paragraph::new(format!(
        "Depreciation Tracker | as of {} | category: {} | F4 reload  F5 now  F8 category  q quit",
        format_date(report.as_of()),
        category
    ))
    .style(Style::default().fg(Color::Cyan))
    .block(Block::default().borders(Borders::ALL));

    frame.render_widget(title, chunks[0]);

    let rows = report.rows();

    if rows.is_empty() {
        let empty_message =
            Paragraph::new("No assets to display. Import an asset register first (F4).")
                .style(Style::default().fg(Color::Yellow))
                .block(Block::default().borders(Borders::ALL));
        frame.render_widget(empty_message, chunks[1]);
    } else {
        let header_cells = [
            "Tag",
            "Name",
            "Category",
            "Method",
            "Cost",
            "Monthly",
            "Annual",
            "Accumulated",
            "Current",
            "Elapsed",
        ]
        .iter()
        .map(|h| Cell::from(*h).style(Style::default().fg(Color::Yellow)));
        let header = Row::new(header_cells).style(Style::default()).height(1);

        let table_rows = rows.iter().map(|row| {
            let asset = row.asset();
            let result = row.result();

            let method = asset
                .depreciation_method()
                .map(|method| method.to_string())
                .unwrap_or_default();
            let cost = asset
                .depreciable_cost()
                .map(|cost| format!("{:.2}", cost))
                .unwrap_or_default();

            // Assets without depreciation are dimmed
            let style = if result.is_zero() {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default()
            };

            let cells = [
                Cell::from(asset.asset_tag().to_string()),
                Cell::from(asset.name().to_string()),
                Cell::from(asset.category_or_default().to_string()),
                Cell::from(method),
                Cell::from(cost),
                Cell::from(format!("{:.2}", result.monthly_depreciation())),
                Cell::from(format!("{:.2}", result.annual_depreciation())),
                Cell::from(format!("{:.2}", result.accumulated_depreciation()))
                    .style(Style::default().fg(Color::Red)),
                Cell::from(format!("{:.2}", result.current_value()))
                    .style(Style::default().fg(Color::Green)),
                Cell::from(format!(
                    "{}y {}m",
                    result.depreciation_years(),
                    result.depreciation_months()
                )),
            ];

            Row::new(cells).style(style).height(1)
        });

        let widths = [
            Constraint::Length(12),
            Constraint::Length(30),
            Constraint::Length(18),
            Constraint::Length(18),
            Constraint::Length(14),
            Constraint::Length(12),
            Constraint::Length(12),
            Constraint::Length(14),
            Constraint::Length(14),
            Constraint::Length(8),
        ];

        let highlight_style = if selection_mode {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };

        let table = Table::new(table_rows, widths)
            .header(header)
            .block(Block::default().title("Assets").borders(Borders::ALL))
            .row_highlight_style(highlight_style);

        frame.render_stateful_widget(table, chunks[1], table_state);
    }

    let summary = report.summary();
    let totals = Paragraph::new(format!(
        "{} assets ({} depreciable) | cost {:.2} | annual {:.2} | \
         accumulated {:.2} | current {:.2}",
        summary.asset_count(),
        summary.depreciable_count(),
        summary.depreciable_cost(),
        summary.annual_depreciation(),
        summary.accumulated_depreciation(),
        summary.current_value(),
    ))
    .block(Block::default().title("Totals").borders(Borders::ALL));

    frame.render_widget(totals, chunks[2]);

    if show_category_popup {
        let height = u16::try_from(categories.len()).unwrap_or(u16::MAX).saturating_add(2);
        let area = centered_rect(40, height.min(frame.area().height), frame.area());
        let items: Vec<ListItem> = categories
            .iter()
            .map(|category| ListItem::new(category.as_str()))
            .collect();
        let list = List::new(items)
            .block(Block::default().title("Category").borders(Borders::ALL))
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

        frame.render_widget(Clear, area);
        frame.render_stateful_widget(list, area, category_state);
    }

    if let Some(message) = error_popup {
        let area = centered_rect(80, 7, frame.area());
        let popup = Paragraph::new(message.as_str())
            .style(Style::default().fg(Color::Red))
            .wrap(Wrap { trim: true })
            .block(Block::default().title("Error (Enter to dismiss)").borders(Borders::ALL));

        frame.render_widget(Clear, area);
        frame.render_widget(popup, area);
    }
}
