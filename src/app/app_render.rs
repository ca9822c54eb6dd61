use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app_state::App;
use crate::typeahead::Phase;
use crate::typeahead::typeahead_render::{render_dropdown, render_input};

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let layout = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(frame.area());

        let (title_area, input_area, selection_area, help_area) =
            (layout[0], layout[1], layout[2], layout[3]);

        self.render_title(frame, title_area);
        render_input(&self.typeahead, frame, input_area);
        self.render_selection(frame, selection_area);
        self.render_help_line(frame, help_area);

        // Dropdown last so it overlays the selection pane
        let dropdown = render_dropdown(&self.typeahead.state, frame, input_area);

        self.layout_regions.input = Some(input_area);
        self.layout_regions.dropdown = dropdown;
    }

    fn render_title(&self, frame: &mut Frame, area: Rect) {
        let title = Paragraph::new(Line::from(Span::styled(
            " typeahead ",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )));
        frame.render_widget(title, area);
    }

    fn render_selection(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Selected ")
            .border_style(Style::default().fg(Color::DarkGray));

        let content = match self.selection() {
            Some(selected) => Paragraph::new(vec![
                Line::from(vec![
                    Span::styled("value: ", Style::default().fg(Color::DarkGray)),
                    Span::styled(selected.value, Style::default().fg(Color::White)),
                ]),
                Line::from(vec![
                    Span::styled("id:    ", Style::default().fg(Color::DarkGray)),
                    Span::styled(selected.id, Style::default().fg(Color::Yellow)),
                ]),
            ]),
            None => Paragraph::new("Nothing selected yet").style(Style::default().fg(Color::Gray)),
        };

        frame.render_widget(content.block(block), area);
    }

    fn render_help_line(&self, frame: &mut Frame, area: Rect) {
        let status = match self.typeahead.state.phase() {
            Phase::Idle => "idle",
            Phase::Pending => "searching",
            Phase::Open => "open",
            Phase::Closed => "closed",
        };

        let help = if self.typeahead.state.is_focused() {
            " ↑↓ highlight  Enter select  Esc close  Tab leave  Ctrl+C quit"
        } else {
            " Tab or / search  q quit"
        };

        let line = Line::from(vec![
            Span::styled(format!(" [{}]", status), Style::default().fg(Color::Yellow)),
            Span::styled(help, Style::default().fg(Color::DarkGray)),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
