//! Page section rendering

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph, Wrap},
    Frame,
};

use crate::config::StoreConfig;
use crate::model::{Anchor, StorefrontView, UiState};
use super::layout::GOLD;
use super::utils::truncate_string;

pub fn render_page(frame: &mut Frame, area: Rect, store: &StoreConfig, ui_state: &UiState, storefront: &StorefrontView) {
    let anchor = ui_state.page.current;
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", anchor.label()))
        .title_style(Style::default().fg(GOLD).add_modifier(Modifier::BOLD))
        .padding(Padding::horizontal(1));

    if anchor.is_product_section() {
        render_products(frame, area, block, ui_state, storefront);
    } else {
        let text = Paragraph::new(section_text(anchor, store))
            .wrap(Wrap { trim: false })
            .block(block);
        frame.render_widget(text, area);
    }
}

fn render_products(frame: &mut Frame, area: Rect, block: Block, ui_state: &UiState, storefront: &StorefrontView) {
    if storefront.products.is_empty() {
        frame.render_widget(Paragraph::new("Aucun article pour le moment.").block(block), area);
        return;
    }

    let name_width = (area.width as usize).saturating_sub(24).max(10);
    let items: Vec<ListItem> = storefront
        .products
        .iter()
        .enumerate()
        .map(|(i, product)| {
            let style = if i == ui_state.page.product_selected {
                Style::default().fg(GOLD).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(Line::from(vec![
                Span::styled(truncate_string(&product.name, name_width), style),
                Span::styled(format!("{:>16}", product.price), Style::default().fg(GOLD)),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block.title_bottom(Line::from(" Entrée: Ajouter au panier ").right_aligned()))
        .highlight_symbol("› ")
        .highlight_style(Style::default());

    let mut list_state = ListState::default();
    list_state.select(Some(ui_state.page.product_selected));
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn section_text(anchor: Anchor, store: &StoreConfig) -> Vec<Line<'static>> {
    let heading = |s: &str| {
        Line::from(Span::styled(
            s.to_string(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ))
    };
    match anchor {
        Anchor::Accueil => vec![
            heading(&store.name),
            Line::from(Span::styled(store.tagline.clone(), Style::default().fg(GOLD))),
            Line::from(""),
            Line::from("Les plus belles pièces horlogères et optiques, sélectionnées pour vous."),
            Line::from("Parcourez nos Montres et Lunettes avec ←/→."),
        ],
        Anchor::Collections => vec![
            heading("Collections"),
            Line::from(""),
            Line::from("Royale · Diamant · Prestige · Aviateur"),
            Line::from("Chaque collection réunit des pièces d'exception en éditions limitées."),
        ],
        Anchor::APropos => vec![
            heading("Excellence Marocaine"),
            Line::from(""),
            Line::from(
                "Depuis notre atelier de Casablanca, nous sélectionnons avec soin les plus belles \
                 pièces horlogères et optiques du monde entier pour offrir à notre clientèle \
                 marocaine le summum du luxe et de l'élégance.",
            ),
        ],
        Anchor::Contact => vec![
            heading("Contact"),
            Line::from(""),
            Line::from(vec![
                Span::raw("Téléphone : "),
                Span::styled(store.phone.clone(), Style::default().fg(GOLD)),
            ]),
            Line::from("Atelier : Casablanca, Maroc"),
        ],
        Anchor::Montres | Anchor::Lunettes => Vec::new(),
    }
}
