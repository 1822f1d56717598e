//! UI rendering for the workout screen.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::tui::app::App;

/// Colours for one theme.
struct Palette {
    background: Color,
    text: Color,
    accent: Color,
    muted: Color,
    warning: Color,
}

impl Palette {
    const fn for_theme(dark: bool) -> Self {
        if dark {
            Self {
                background: Color::Black,
                text: Color::White,
                accent: Color::Rgb(0x3F, 0x51, 0xB5),
                muted: Color::Gray,
                warning: Color::Red,
            }
        } else {
            Self {
                background: Color::White,
                text: Color::Black,
                accent: Color::Rgb(0x3F, 0x51, 0xB5),
                muted: Color::DarkGray,
                warning: Color::Red,
            }
        }
    }
}

/// Render the workout screen.
pub fn render(frame: &mut Frame<'_>, app: &App) {
    let palette = Palette::for_theme(app.dark_theme);

    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background)),
        frame.area(),
    );

    // Create layout: header, timer, gauge, status, key help
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(3),    // Timer
            Constraint::Length(3), // Gauge
            Constraint::Length(1), // Status
            Constraint::Length(1), // Key help
        ])
        .split(frame.area());

    render_header(frame, app, &palette, chunks[0]);
    render_timer(frame, app, &palette, chunks[1]);
    render_gauge(frame, app, &palette, chunks[2]);
    render_status(frame, app, &palette, chunks[3]);
    render_help(frame, &palette, chunks[4]);
}

fn render_header(frame: &mut Frame<'_>, app: &App, palette: &Palette, area: Rect) {
    let header = Paragraph::new(format!(" {} ", app.run.title()))
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.accent)),
        );

    frame.render_widget(header, area);
}

fn render_timer(frame: &mut Frame<'_>, app: &App, palette: &Palette, area: Rect) {
    let timer = app.run.timer();
    let color = if timer.is_final_stretch() {
        palette.warning
    } else {
        palette.text
    };

    // vertically centre the single line
    let pad = area.height.saturating_sub(1) / 2;
    let line_area = Rect {
        y: area.y + pad,
        height: area.height.min(1),
        ..area
    };

    let clock = Paragraph::new(timer.format_remaining())
        .alignment(Alignment::Center)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD));

    frame.render_widget(clock, line_area);
}

fn render_gauge(frame: &mut Frame<'_>, app: &App, palette: &Palette, area: Rect) {
    let timer = app.run.timer();
    let gauge_color = if timer.is_final_stretch() {
        palette.warning
    } else {
        palette.accent
    };

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(palette.muted)))
        .gauge_style(Style::default().fg(gauge_color).bg(palette.background))
        .ratio(timer.progress_fraction())
        .label(format!("{:.0}% left", timer.progress_fraction() * 100.0));

    frame.render_widget(gauge, area);
}

fn render_status(frame: &mut Frame<'_>, app: &App, palette: &Palette, area: Rect) {
    let status = Paragraph::new(app.status_text())
        .alignment(Alignment::Center)
        .style(Style::default().fg(palette.muted));

    frame.render_widget(status, area);
}

fn render_help(frame: &mut Frame<'_>, palette: &Palette, area: Rect) {
    let help = Paragraph::new("space:pause | f:finish | q:quit without saving")
        .style(Style::default().fg(palette.muted));

    frame.render_widget(help, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::session::WorkoutRun;
    use ratatui::{backend::TestBackend, Terminal};
    use std::time::Duration;

    fn screen_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 14)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn test_render_running() {
        let run = WorkoutRun::start("Core Training", "30 min", Duration::from_secs(60)).unwrap();
        let app = App::new(run, true);
        let text = screen_text(&app);

        assert!(text.contains("Core Training"));
        assert!(text.contains("30:00"));
        assert!(text.contains("Keep going!"));
        assert!(text.contains("100% left"));
    }

    #[test]
    fn test_render_paused_light() {
        let run = WorkoutRun::start("Plank", "2 min", Duration::from_secs(60)).unwrap();
        let mut app = App::new(run, false);
        app.toggle_pause().unwrap();

        let text = screen_text(&app);
        assert!(text.contains("02:00"));
        assert!(text.contains("Paused"));
    }
}
