//! Layout rendering (header bar, footer)

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use ratatui::widgets::Padding;

use crate::config::StoreConfig;
use crate::model::{Anchor, UiState};

pub const GOLD: Color = Color::Rgb(212, 175, 55);

pub fn render_header(frame: &mut Frame, area: Rect, store: &StoreConfig, ui_state: &UiState, cart_count: u64) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(38), // Logo + name
            Constraint::Min(0),     // Navigation
            Constraint::Length(44), // Actions + phone
        ])
        .split(area);

    let logo = Paragraph::new(Line::from(vec![
        Span::styled(" T&V ", Style::default().fg(Color::Black).bg(GOLD).add_modifier(Modifier::BOLD)),
        Span::raw(" "),
        Span::styled(store.name.clone(), Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
        Span::styled(format!(" · {}", store.tagline), Style::default().fg(GOLD)),
    ]))
    .block(Block::default().borders(Borders::ALL).padding(Padding::horizontal(1)));
    frame.render_widget(logo, chunks[0]);

    let mut nav = Vec::with_capacity(Anchor::ALL.len() * 2);
    for anchor in Anchor::ALL {
        let style = if anchor == ui_state.page.current {
            Style::default().fg(GOLD).add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::White)
        };
        nav.push(Span::styled(anchor.label(), style));
        nav.push(Span::raw("  "));
    }
    let navigation = Paragraph::new(Line::from(nav))
        .block(Block::default().borders(Borders::ALL).padding(Padding::horizontal(1)));
    frame.render_widget(navigation, chunks[1]);

    let badge = if cart_count > 0 {
        Span::styled(
            format!(" {} ", cart_count),
            Style::default().fg(Color::Black).bg(GOLD).add_modifier(Modifier::BOLD),
        )
    } else {
        Span::raw("")
    };
    let account = match ui_state.header.last_auth_provider {
        Some(provider) => Span::styled(format!("👤 {} ", provider), Style::default().fg(GOLD)),
        None => Span::styled("👤 ", Style::default().fg(Color::White)),
    };
    let actions = Paragraph::new(Line::from(vec![
        Span::styled("🔍 ", Style::default().fg(Color::White)),
        account,
        Span::styled("🛍", Style::default().fg(Color::White)),
        badge,
        Span::raw("  "),
        Span::styled(format!("☎ {}", store.phone), Style::default().fg(GOLD)),
    ]))
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(actions, chunks[2]);
}

pub fn render_footer(frame: &mut Frame, area: Rect) {
    let hints = Line::from(vec![
        Span::styled(" ←/→ ", Style::default().fg(GOLD)),
        Span::raw("Sections  "),
        Span::styled("/ ", Style::default().fg(GOLD)),
        Span::raw("Rechercher  "),
        Span::styled("C ", Style::default().fg(GOLD)),
        Span::raw("Panier  "),
        Span::styled("Espace ", Style::default().fg(GOLD)),
        Span::raw("Lecture  "),
        Span::styled("D ", Style::default().fg(GOLD)),
        Span::raw("Notre Histoire  "),
        Span::styled("H ", Style::default().fg(GOLD)),
        Span::raw("Aide  "),
        Span::styled("Q ", Style::default().fg(GOLD)),
        Span::raw("Quitter"),
    ]);
    frame.render_widget(Paragraph::new(hints).style(Style::default().fg(Color::Gray)), area);
}
