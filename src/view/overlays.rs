//! Overlay rendering (menu, search, login, cart sidebar, help, status)

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::config::StoreConfig;
use crate::model::{format_amount, Anchor, CartTotals, LoginOption, StorefrontView, UiState};
use super::layout::GOLD;
use super::utils::{centered_rect, truncate_string};

const SEARCH_PLACEHOLDER: &str = "Rechercher montres, lunettes...";
const SEARCH_SUGGESTIONS: &str = "Suggestions: Montre Royale, Lunettes Prestige, Montre Diamant";
const CART_WIDTH: u16 = 46;

fn modal_block(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GOLD))
        .title(title)
        .title_style(Style::default().fg(GOLD).add_modifier(Modifier::BOLD))
        .style(Style::default().bg(Color::Black))
}

pub fn render_menu(frame: &mut Frame, header_area: Rect, store: &StoreConfig, ui_state: &UiState) {
    let area = frame.area();
    let popup_area = Rect {
        x: area.x,
        y: header_area.bottom(),
        width: 32.min(area.width),
        height: (Anchor::ALL.len() as u16 + 4).min(area.height.saturating_sub(header_area.bottom())),
    };
    frame.render_widget(Clear, popup_area);

    let mut items: Vec<ListItem> = Anchor::ALL
        .iter()
        .enumerate()
        .map(|(i, anchor)| {
            let style = if i == ui_state.menu_selected {
                Style::default().fg(Color::Black).bg(GOLD).add_modifier(Modifier::BOLD)
            } else if *anchor == ui_state.page.current {
                Style::default().fg(GOLD)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(anchor.label()).style(style)
        })
        .collect();
    items.push(ListItem::new(""));
    items.push(ListItem::new(format!("☎ {}", store.phone)).style(Style::default().fg(GOLD)));

    let list = List::new(items).block(modal_block(" Menu (↑↓ Entrée Esc) "));
    let mut list_state = ListState::default();
    list_state.select(Some(ui_state.menu_selected));
    frame.render_stateful_widget(list, popup_area, &mut list_state);
}

pub fn render_search(frame: &mut Frame, ui_state: &UiState) {
    let popup_area = centered_rect(frame.area(), 56, 7);
    frame.render_widget(Clear, popup_area);

    let query = &ui_state.header.search_query;
    let input = if query.is_empty() {
        Span::styled(SEARCH_PLACEHOLDER, Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(format!("{}▏", query), Style::default().fg(Color::White))
    };

    let lines = vec![
        Line::from(vec![Span::styled("🔍 ", Style::default().fg(GOLD)), input]),
        Line::from(""),
        Line::from(Span::styled(SEARCH_SUGGESTIONS, Style::default().fg(Color::Gray))),
    ];
    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(modal_block(" Rechercher (Entrée Esc) "));
    frame.render_widget(paragraph, popup_area);
}

pub fn render_login(frame: &mut Frame, ui_state: &UiState) {
    let popup_area = centered_rect(frame.area(), 40, LoginOption::ALL.len() as u16 + 5);
    frame.render_widget(Clear, popup_area);

    let mut items = Vec::new();
    for (i, option) in LoginOption::ALL.iter().enumerate() {
        if *option == LoginOption::CreateAccount {
            items.push(ListItem::new(format!("{:^34}", "ou")).style(Style::default().fg(Color::DarkGray)));
        }
        let style = if i == ui_state.login_selected {
            Style::default().fg(Color::Black).bg(GOLD).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        items.push(ListItem::new(option.label()).style(style));
    }

    let list = List::new(items).block(modal_block(" Connexion (↑↓ Entrée Esc) "));
    frame.render_widget(list, popup_area);
}

pub fn render_cart_sidebar(frame: &mut Frame, ui_state: &UiState, storefront: &StorefrontView, totals: CartTotals) {
    let area = frame.area();
    let width = CART_WIDTH.min(area.width);
    let sidebar = Rect {
        x: area.right().saturating_sub(width),
        y: area.y,
        width,
        height: area.height,
    };
    frame.render_widget(Clear, sidebar);

    let block = modal_block(" Panier ");
    let inner = block.inner(sidebar);
    frame.render_widget(block, sidebar);

    let footer_height = if storefront.cart.is_empty() { 0 } else { 4 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),             // Item count
            Constraint::Min(0),                // Lines
            Constraint::Length(footer_height), // Total + checkout
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(Span::styled(format!("{} article(s)", totals.count), Style::default().fg(GOLD))),
        chunks[0],
    );

    if storefront.cart.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled("🛍", Style::default().fg(Color::DarkGray))),
            Line::from(Span::styled("Votre panier est vide", Style::default().fg(Color::Gray))),
        ])
        .alignment(ratatui::layout::Alignment::Center);
        frame.render_widget(empty, chunks[1]);
        return;
    }

    let name_width = (inner.width as usize).saturating_sub(14).max(8);
    let items: Vec<ListItem> = storefront
        .cart
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let selected = i == ui_state.cart_selected;
            let name_style = if selected {
                Style::default().fg(GOLD).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(truncate_string(&item.name, name_width), name_style),
                    Span::styled(format!(" − {:>2} + ", item.quantity), Style::default().fg(Color::White)),
                ]),
                Line::from(Span::styled(format!("  {}", item.price), Style::default().fg(GOLD))),
            ])
        })
        .collect();

    let list = List::new(items).highlight_symbol("› ").highlight_style(Style::default());
    let mut list_state = ListState::default();
    list_state.select(Some(ui_state.cart_selected));
    frame.render_stateful_widget(list, chunks[1], &mut list_state);

    let footer = Paragraph::new(vec![
        Line::from(vec![
            Span::styled("Total: ", Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
            Span::styled(
                format!("{} {}", format_amount(totals.amount), storefront.currency),
                Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            " Procéder au Paiement (Entrée) ",
            Style::default().fg(Color::Black).bg(GOLD).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled("+/- quantité · X retirer · Esc fermer", Style::default().fg(Color::DarkGray))),
    ]);
    frame.render_widget(footer, chunks[2]);
}

pub fn render_status_notification(frame: &mut Frame, ui_state: &UiState) {
    if let Some(ref message) = ui_state.status_message {
        let area = frame.area();

        let popup_width = 52.min(area.width.saturating_sub(4));
        let inner_width = popup_width.saturating_sub(4).max(1) as usize;
        let line_count = message.chars().count().div_ceil(inner_width) as u16;
        let popup_height = (2 + line_count.max(1)).min(area.height.saturating_sub(4));

        let popup_area = Rect {
            x: area.width.saturating_sub(popup_width) / 2,
            y: area.height.saturating_sub(popup_height + 2),
            width: popup_width,
            height: popup_height,
        };
        frame.render_widget(Clear, popup_area);

        let widget = Paragraph::new(message.to_string())
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: false })
            .block(modal_block(" Info (Esc pour fermer) "));
        frame.render_widget(widget, popup_area);
    }
}

pub fn render_help_popup(frame: &mut Frame) {
    let area = frame.area();

    let keybindings = vec![
        ("", "── Navigation ──"),
        ("← / →", "Section précédente / suivante"),
        ("↑ / ↓", "Choisir un article"),
        ("Entrée / A", "Ajouter au panier"),
        ("M", "Menu"),
        ("", ""),
        ("", "── En-tête ──"),
        ("/ ou S", "Rechercher"),
        ("L", "Connexion"),
        ("C", "Panier"),
        ("+ / -", "Quantité (panier)"),
        ("X / Suppr", "Retirer (panier)"),
        ("", ""),
        ("", "── Vidéo ──"),
        ("Espace", "Lecture / Pause"),
        ("1 / 2", "Choisir une vidéo"),
        ("[ / ]", "Vidéo précédente / suivante"),
        ("D", "Découvrir Notre Histoire"),
        ("", ""),
        ("", "── Général ──"),
        ("H", "Afficher cette aide"),
        ("Q", "Quitter"),
    ];

    let popup_height = (keybindings.len() as u16 + 2).min(area.height.saturating_sub(4));
    let popup_area = centered_rect(area, 62, popup_height);
    frame.render_widget(Clear, popup_area);

    let lines: Vec<Line> = keybindings
        .iter()
        .map(|(key, desc)| {
            if key.is_empty() {
                Line::from(Span::styled(
                    format!("{:^38}", desc),
                    Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(vec![
                    Span::styled(
                        format!("{:>18}", key),
                        Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
                    ),
                    Span::raw("  "),
                    Span::styled(desc.to_string(), Style::default().fg(Color::White)),
                ])
            }
        })
        .collect();

    let help_text = Paragraph::new(lines)
        .block(modal_block(" Aide (H ou Esc pour fermer) "))
        .style(Style::default().bg(Color::Black));
    frame.render_widget(help_text, popup_area);
}
