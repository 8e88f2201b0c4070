//! Core type definitions for the application

use std::collections::BTreeMap;
use std::fmt;
use std::time::Instant;

use super::header::{HeaderState, Navigator};

/// Overlay panels toggled from the header
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Panel {
    Menu,
    Cart,
    Search,
    Login,
}

impl Panel {
    /// Stacking order, topmost first. The topmost open panel receives input.
    pub const STACK: [Panel; 4] = [Panel::Search, Panel::Login, Panel::Cart, Panel::Menu];
}

/// Open/closed flag per panel. Panels are independent of each other.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PanelSet {
    open: BTreeMap<Panel, bool>,
}

impl PanelSet {
    pub fn is_open(&self, panel: Panel) -> bool {
        self.open.get(&panel).copied().unwrap_or(false)
    }

    pub fn set(&mut self, panel: Panel, open: bool) {
        self.open.insert(panel, open);
    }

    /// The open panel that sits on top of the stack, if any
    pub fn topmost(&self) -> Option<Panel> {
        Panel::STACK.into_iter().find(|p| self.is_open(*p))
    }
}

/// Named sections of the storefront page
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Anchor {
    #[default]
    Accueil,
    Montres,
    Lunettes,
    Collections,
    APropos,
    Contact,
}

impl Anchor {
    pub const ALL: [Anchor; 6] = [
        Anchor::Accueil,
        Anchor::Montres,
        Anchor::Lunettes,
        Anchor::Collections,
        Anchor::APropos,
        Anchor::Contact,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Anchor::Accueil => "Accueil",
            Anchor::Montres => "Montres",
            Anchor::Lunettes => "Lunettes",
            Anchor::Collections => "Collections",
            Anchor::APropos => "À Propos",
            Anchor::Contact => "Contact",
        }
    }

    pub fn href(self) -> &'static str {
        match self {
            Anchor::Accueil => "#accueil",
            Anchor::Montres => "#montres",
            Anchor::Lunettes => "#lunettes",
            Anchor::Collections => "#collections",
            Anchor::APropos => "#apropos",
            Anchor::Contact => "#contact",
        }
    }

    /// Sections that list purchasable products
    pub fn is_product_section(self) -> bool {
        matches!(self, Anchor::Montres | Anchor::Lunettes)
    }
}

/// Sign-in providers offered by the login panel
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthProvider {
    Google,
    Facebook,
}

impl AuthProvider {
    pub fn id(self) -> &'static str {
        match self {
            AuthProvider::Google => "google",
            AuthProvider::Facebook => "facebook",
        }
    }
}

impl fmt::Display for AuthProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Entries of the login panel, in display order
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginOption {
    Provider(AuthProvider),
    CreateAccount,
}

impl LoginOption {
    pub const ALL: [LoginOption; 3] = [
        LoginOption::Provider(AuthProvider::Google),
        LoginOption::Provider(AuthProvider::Facebook),
        LoginOption::CreateAccount,
    ];

    pub fn label(self) -> &'static str {
        match self {
            LoginOption::Provider(AuthProvider::Google) => "Continuer avec Google",
            LoginOption::Provider(AuthProvider::Facebook) => "Continuer avec Facebook",
            LoginOption::CreateAccount => "Créer un Compte",
        }
    }
}

/// Which section of the page currently has scroll focus
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageState {
    pub current: Anchor,
    pub product_selected: usize,
}

impl Navigator for PageState {
    fn scroll_to(&mut self, anchor: Anchor) {
        tracing::debug!(href = anchor.href(), "Scrolling to section");
        self.current = anchor;
        self.product_selected = 0;
    }
}

/// UI state for the application
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub header: HeaderState,
    pub page: PageState,
    pub menu_selected: usize,
    pub login_selected: usize,
    pub cart_selected: usize,
    pub status_message: Option<String>,
    pub status_timestamp: Option<Instant>,
    pub show_help_popup: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panels_start_closed() {
        let panels = PanelSet::default();
        for panel in Panel::STACK {
            assert!(!panels.is_open(panel));
        }
        assert_eq!(panels.topmost(), None);
    }

    #[test]
    fn test_topmost_follows_stack_order() {
        let mut panels = PanelSet::default();
        panels.set(Panel::Menu, true);
        panels.set(Panel::Cart, true);
        assert_eq!(panels.topmost(), Some(Panel::Cart));
        panels.set(Panel::Search, true);
        assert_eq!(panels.topmost(), Some(Panel::Search));
        panels.set(Panel::Search, false);
        assert_eq!(panels.topmost(), Some(Panel::Cart));
    }

    #[test]
    fn test_scroll_to_resets_product_cursor() {
        let mut page = PageState {
            current: Anchor::Lunettes,
            product_selected: 3,
        };
        page.scroll_to(Anchor::Montres);
        assert_eq!(page.current, Anchor::Montres);
        assert_eq!(page.product_selected, 0);
    }
}
