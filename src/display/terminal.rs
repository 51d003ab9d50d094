use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use std::io::{self, stdout};
use tracing::debug;

use crate::chart::TorqueChart;
use crate::model::TorqueSweep;

/// Show the chart full-screen and block until the user quits.
pub fn run(sweep: &TorqueSweep, chart: &TorqueChart) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, sweep, chart);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    sweep: &TorqueSweep,
    chart: &TorqueChart,
) -> Result<()> {
    loop {
        terminal.draw(|frame| {
            let area = frame.area();
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(1), Constraint::Min(5)])
                .split(area);

            render_status(frame, chunks[0], sweep);
            chart.render(frame, chunks[1]);
        })?;

        // Nothing changes between frames, so block until input or resize
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press && is_quit(&key) => break,
            Event::Resize(width, height) => {
                debug!("Terminal resized to {}x{}", width, height);
            }
            _ => {}
        }
    }

    Ok(())
}

fn is_quit(key: &KeyEvent) -> bool {
    matches!(
        key,
        KeyEvent {
            code: KeyCode::Char('q') | KeyCode::Esc,
            ..
        } | KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        }
    )
}

fn render_status(frame: &mut Frame, area: Rect, sweep: &TorqueSweep) {
    let status = status_line(sweep);

    for (i, ch) in status.chars().enumerate() {
        if i < area.width as usize {
            let cell = frame.buffer_mut().cell_mut((area.x + i as u16, area.y));
            if let Some(cell) = cell {
                cell.set_char(ch);
                cell.set_fg(Color::DarkGray);
            }
        }
    }
}

fn status_line(sweep: &TorqueSweep) -> String {
    format!(
        " [q]uit | crater {} x {} m | arc radius {:.1} m | rim angle {:.1}° | cable {:.1} m ",
        sweep.geometry.depth,
        sweep.geometry.diameter,
        sweep.geometry.arc_radius,
        sweep.geometry.initial_angle.to_degrees(),
        sweep.geometry.cable_length
    )
}
