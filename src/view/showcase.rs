//! Showcase rendering (media list, playback gauge, stats)

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

use crate::model::{ShowcaseState, SHOWCASE_MEDIA, SHOWCASE_STATS};
use super::layout::GOLD;
use super::utils::format_duration;

pub fn render_showcase(frame: &mut Frame, area: Rect, showcase: &ShowcaseState) {
    let outer = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GOLD))
        .title(" L'Art du Luxe ")
        .title_style(Style::default().fg(GOLD).add_modifier(Modifier::BOLD))
        .title_bottom(Line::from(vec![
            Span::styled(" D ", Style::default().fg(GOLD).add_modifier(Modifier::BOLD)),
            Span::raw("Découvrir Notre Histoire "),
        ]));
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3 * SHOWCASE_MEDIA.len() as u16), // Media choices
            Constraint::Length(3),                               // Playback gauge
            Constraint::Min(0),                                  // Stats
        ])
        .split(inner);

    render_media_list(frame, chunks[0], showcase);
    render_playback(frame, chunks[1], showcase);
    render_stats(frame, chunks[2]);
}

fn render_media_list(frame: &mut Frame, area: Rect, showcase: &ShowcaseState) {
    let lines: Vec<Line> = SHOWCASE_MEDIA
        .iter()
        .enumerate()
        .flat_map(|(i, media)| {
            let selected = i == showcase.selected;
            let marker = if selected { "●" } else { "○" };
            let title_style = if selected {
                Style::default().fg(GOLD).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            [
                Line::from(vec![
                    Span::styled(format!("{} {} ", marker, i + 1), title_style),
                    Span::styled(media.title, title_style),
                ]),
                Line::from(Span::styled(
                    format!("    {}", media.description),
                    Style::default().fg(Color::Gray),
                )),
                Line::from(""),
            ]
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

fn render_playback(frame: &mut Frame, area: Rect, showcase: &ShowcaseState) {
    let media = showcase.current();
    let status = if showcase.playing {
        format!(" ▶ {} ", media.title)
    } else {
        format!(" ⏸ {} ", media.title)
    };
    let time_str = format!(
        "{} / {}",
        format_duration(showcase.position_ms),
        format_duration(media.duration_ms)
    );

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(status)
                .title_bottom(Line::from(format!(" youtu.be/{} ", media.id)).right_aligned()),
        )
        .gauge_style(Style::default().fg(GOLD))
        .ratio(showcase.progress_ratio())
        .label(time_str);
    frame.render_widget(gauge, area);
}

fn render_stats(frame: &mut Frame, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Length(4), Constraint::Min(0)])
        .split(area);

    for (row, pair) in SHOWCASE_STATS.chunks(2).enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[row]);

        for (col, stat) in pair.iter().enumerate() {
            let card = Paragraph::new(vec![
                Line::from(Span::styled(
                    stat.number,
                    Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(stat.label, Style::default().fg(Color::Gray))),
            ])
            .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(Color::DarkGray)));
            frame.render_widget(card, cols[col]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_showcase_shows_video_id_and_story_hint() {
        let mut showcase = ShowcaseState::default();
        assert!(showcase.select(1));
        let mut terminal = Terminal::new(TestBackend::new(70, 24)).unwrap();
        terminal
            .draw(|f| render_showcase(f, f.area(), &showcase))
            .unwrap();
        let text: String = terminal.backend().buffer().content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("youtu.be/aHNEZg35ok8"));
        assert!(text.contains("Découvrir Notre Histoire"));
    }
}
