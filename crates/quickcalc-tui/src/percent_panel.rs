//! Percent panel: base and rate inputs, compute button, result sentence.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use quickcalc_core::{Display, Field, Focus};

use crate::styles::ColorTheme;

/// Areas of the percent panel controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PercentLayout {
    pub base: Rect,
    pub rate: Rect,
    pub compute: Rect,
    pub result: Rect,
}

/// Control under a terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PercentHit {
    Field(Field),
    Compute,
}

/// Lay out the percent panel.
#[must_use]
pub fn compute_percent_layout(area: Rect) -> PercentLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // base
            Constraint::Length(3), // rate
            Constraint::Length(3), // compute button
            Constraint::Min(3),    // result
        ])
        .split(area);
    let compute = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(14), Constraint::Min(0)])
        .split(chunks[2])[0];
    PercentLayout {
        base: chunks[0],
        rate: chunks[1],
        compute,
        result: chunks[3],
    }
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x && column < rect.x + rect.width && row >= rect.y && row < rect.y + rect.height
}

/// The control under a terminal cell, if any.
#[must_use]
pub fn hit_test(layout: &PercentLayout, column: u16, row: u16) -> Option<PercentHit> {
    if contains(layout.base, column, row) {
        Some(PercentHit::Field(Field::Base))
    } else if contains(layout.rate, column, row) {
        Some(PercentHit::Field(Field::Rate))
    } else if contains(layout.compute, column, row) {
        Some(PercentHit::Compute)
    } else {
        None
    }
}

fn render_input(
    frame: &mut Frame,
    area: Rect,
    field: Field,
    text: &str,
    focused: bool,
    theme: &ColorTheme,
) {
    let border = if focused {
        theme.focused_border()
    } else {
        theme.border_style()
    };
    let cursor = if focused { "▏" } else { "" };
    let input = Paragraph::new(Line::raw(format!("{text}{cursor}"))).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", field.label()))
            .border_style(border),
    );
    frame.render_widget(input, area);
}

/// Render the percent panel.
pub fn render_percent(frame: &mut Frame, area: Rect, display: &Display, theme: &ColorTheme) {
    let layout = compute_percent_layout(area);

    render_input(
        frame,
        layout.base,
        Field::Base,
        &display.base_input,
        display.focus == Focus::Base,
        theme,
    );
    render_input(
        frame,
        layout.rate,
        Field::Rate,
        &display.rate_input,
        display.focus == Focus::Rate,
        theme,
    );

    let button = Paragraph::new(Line::styled("Compute", theme.header_style(display.mode_tag)))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border_style()),
        );
    frame.render_widget(button, layout.compute);

    let result = Paragraph::new(Line::styled(
        display.percent_text.clone(),
        theme.success_style(),
    ))
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Percent ")
            .border_style(theme.root_style(display.mode_tag)),
    );
    frame.render_widget(result, layout.result);
}
