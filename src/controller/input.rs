//! Key event handling

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::model::{Anchor, Panel};
use crate::player::PlayerCommand;
use super::AppController;

impl AppController {
    pub async fn handle_key_event(&self, key: KeyEvent) -> Result<()> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        if (key.code == KeyCode::Char('c') || key.code == KeyCode::Char('q'))
            && key.modifiers.contains(KeyModifiers::CONTROL)
        {
            self.quit().await;
            return Ok(());
        }

        let model = self.model.lock().await;

        // Esc only dismisses the notification; Enter dismisses it and still acts
        if model.has_status().await {
            match key.code {
                KeyCode::Esc => {
                    model.clear_status().await;
                    return Ok(());
                }
                KeyCode::Enter => model.clear_status().await,
                _ => {}
            }
        }

        if model.is_help_popup_open().await {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('h') | KeyCode::Char('H')) {
                model.hide_help_popup().await;
            }
            return Ok(());
        }

        // The topmost open panel gets first pick; search captures every key
        let topmost = model.topmost_panel().await;
        let handled = match topmost {
            Some(Panel::Search) => {
                match key.code {
                    KeyCode::Enter => {
                        drop(model);
                        self.submit_search().await;
                    }
                    KeyCode::Esc => model.set_panel(Panel::Search, false).await,
                    KeyCode::Backspace => model.backspace_search().await,
                    KeyCode::Char(c) => model.append_to_search(c).await,
                    _ => {}
                }
                return Ok(());
            }
            Some(Panel::Login) => match key.code {
                KeyCode::Up => {
                    model.login_move_up().await;
                    true
                }
                KeyCode::Down => {
                    model.login_move_down().await;
                    true
                }
                KeyCode::Enter => {
                    model.select_login_option().await;
                    true
                }
                KeyCode::Esc | KeyCode::Char('l') | KeyCode::Char('L') => {
                    model.set_panel(Panel::Login, false).await;
                    true
                }
                _ => false,
            },
            Some(Panel::Cart) => match key.code {
                KeyCode::Up => {
                    model.cart_move_up().await;
                    true
                }
                KeyCode::Down => {
                    model.cart_move_down().await;
                    true
                }
                KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Right => {
                    model.increment_selected_item().await;
                    true
                }
                KeyCode::Char('-') | KeyCode::Left => {
                    model.decrement_selected_item().await;
                    true
                }
                KeyCode::Delete | KeyCode::Char('x') | KeyCode::Char('X') => {
                    model.remove_selected_item().await;
                    true
                }
                KeyCode::Enter => {
                    model.checkout().await;
                    true
                }
                KeyCode::Esc | KeyCode::Char('c') | KeyCode::Char('C') => {
                    model.set_panel(Panel::Cart, false).await;
                    true
                }
                _ => false,
            },
            Some(Panel::Menu) => match key.code {
                KeyCode::Up => {
                    model.menu_move_up().await;
                    true
                }
                KeyCode::Down => {
                    model.menu_move_down().await;
                    true
                }
                KeyCode::Enter => {
                    model.select_menu_item().await;
                    true
                }
                KeyCode::Esc => {
                    model.set_panel(Panel::Menu, false).await;
                    true
                }
                _ => false,
            },
            None => false,
        };
        if handled {
            return Ok(());
        }

        // Global keybindings
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                drop(model);
                self.quit().await;
            }
            KeyCode::Char('h') | KeyCode::Char('H') => model.show_help_popup().await,
            KeyCode::Char('m') | KeyCode::Char('M') => model.toggle_panel(Panel::Menu).await,
            KeyCode::Char('c') | KeyCode::Char('C') => model.set_panel(Panel::Cart, true).await,
            KeyCode::Char('/') | KeyCode::Char('s') | KeyCode::Char('S') => {
                model.set_panel(Panel::Search, true).await
            }
            KeyCode::Char('l') | KeyCode::Char('L') => model.set_panel(Panel::Login, true).await,
            // Découvrir Notre Histoire
            KeyCode::Char('d') | KeyCode::Char('D') => model.navigate_to(Anchor::APropos).await,
            KeyCode::Left => {
                drop(model);
                self.step_section(false).await;
            }
            KeyCode::Right => {
                drop(model);
                self.step_section(true).await;
            }
            KeyCode::Up => model.product_move_up().await,
            KeyCode::Down => model.product_move_down().await,
            KeyCode::Enter | KeyCode::Char('a') | KeyCode::Char('A') => {
                model.add_selected_product().await;
            }
            // Play/Pause toggle
            KeyCode::Char(' ') => {
                drop(model);
                self.toggle_playback().await;
            }
            KeyCode::Char('[') => {
                drop(model);
                self.select_prev_media().await;
            }
            KeyCode::Char(']') => {
                drop(model);
                self.select_next_media().await;
            }
            KeyCode::Char(c @ '0'..='9') => {
                drop(model);
                let index = c.to_digit(10).map(|d| d as i64 - 1).unwrap_or(-1);
                self.select_media(index).await;
            }
            _ => {}
        }
        Ok(())
    }

    pub async fn quit(&self) {
        tracing::info!("Quit requested");
        self.model.lock().await.set_should_quit(true).await;
        if let Err(e) = self.player.send(PlayerCommand::Shutdown) {
            tracing::debug!(error = %e, "Player already stopped");
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyCode;

    use crate::config::PlayerConfig;
    use crate::controller::test_support::{controller_with, press, type_text};
    use crate::model::{Anchor, Panel};

    #[tokio::test]
    async fn test_search_flow_from_keyboard() {
        let (controller, _events) = controller_with(PlayerConfig::default());
        press(&controller, KeyCode::Char('/')).await;
        press(&controller, KeyCode::Enter).await;
        {
            let model = controller.model.lock().await;
            let ui = model.get_ui_state().await;
            assert!(ui.header.is_open(Panel::Search));
            assert_eq!(ui.page.current, Anchor::Accueil);
        }

        type_text(&controller, "Montre Royale").await;
        press(&controller, KeyCode::Enter).await;

        let model = controller.model.lock().await;
        let ui = model.get_ui_state().await;
        assert!(!ui.header.is_open(Panel::Search));
        assert!(ui.header.search_query.is_empty());
        assert_eq!(ui.page.current, Anchor::Montres);
    }

    #[tokio::test]
    async fn test_typing_in_search_does_not_trigger_globals() {
        let (controller, _events) = controller_with(PlayerConfig::default());
        press(&controller, KeyCode::Char('s')).await;
        type_text(&controller, "qmc").await;

        let model = controller.model.lock().await;
        assert!(!model.should_quit().await);
        let ui = model.get_ui_state().await;
        assert_eq!(ui.header.search_query, "qmc");
        assert!(!ui.header.is_open(Panel::Menu));
        assert!(!ui.header.is_open(Panel::Cart));
    }

    #[tokio::test]
    async fn test_cart_stays_open_under_search() {
        let (controller, _events) = controller_with(PlayerConfig::default());
        press(&controller, KeyCode::Char('c')).await;
        press(&controller, KeyCode::Char('/')).await;
        press(&controller, KeyCode::Esc).await;

        let model = controller.model.lock().await;
        let ui = model.get_ui_state().await;
        assert!(!ui.header.is_open(Panel::Search));
        assert!(ui.header.is_open(Panel::Cart));
    }

    #[tokio::test]
    async fn test_open_panels_do_not_block_other_panels() {
        let (controller, _events) = controller_with(PlayerConfig::default());
        press(&controller, KeyCode::Char('m')).await;
        press(&controller, KeyCode::Char('c')).await;
        press(&controller, KeyCode::Char('l')).await;
        press(&controller, KeyCode::Char('s')).await;

        let model = controller.model.lock().await;
        let ui = model.get_ui_state().await;
        for panel in Panel::STACK {
            assert!(ui.header.is_open(panel), "{panel:?} should be open");
        }
        assert!(ui.header.search_query.is_empty());
    }

    #[tokio::test]
    async fn test_enter_after_notification_still_submits_search() {
        let (controller, _events) = controller_with(PlayerConfig::default());
        press(&controller, KeyCode::Right).await;
        press(&controller, KeyCode::Right).await;
        press(&controller, KeyCode::Char('a')).await;
        assert!(controller.model.lock().await.has_status().await);

        press(&controller, KeyCode::Char('/')).await;
        type_text(&controller, "Montre").await;
        press(&controller, KeyCode::Enter).await;

        let model = controller.model.lock().await;
        let ui = model.get_ui_state().await;
        assert!(!ui.header.is_open(Panel::Search));
        assert!(ui.header.search_query.is_empty());
        assert_eq!(ui.page.current, Anchor::Montres);
    }

    #[tokio::test]
    async fn test_enter_after_notification_still_checks_out() {
        let (controller, _events) = controller_with(PlayerConfig::default());
        press(&controller, KeyCode::Right).await;
        press(&controller, KeyCode::Char('a')).await;
        press(&controller, KeyCode::Char('c')).await;
        press(&controller, KeyCode::Enter).await;

        let model = controller.model.lock().await;
        assert!(model.get_storefront_view().await.cart.is_empty());
        let status = model.get_ui_state().await.status_message.unwrap();
        assert!(status.starts_with("Commande TV-"));
    }

    #[tokio::test]
    async fn test_discover_story_scrolls_to_about() {
        let (controller, _events) = controller_with(PlayerConfig::default());
        press(&controller, KeyCode::Char('c')).await;
        press(&controller, KeyCode::Char('d')).await;

        let model = controller.model.lock().await;
        let ui = model.get_ui_state().await;
        assert_eq!(ui.page.current, Anchor::APropos);
        assert!(ui.header.is_open(Panel::Cart));
    }

    #[tokio::test]
    async fn test_cart_keys_adjust_quantities() {
        let (controller, _events) = controller_with(PlayerConfig::default());
        press(&controller, KeyCode::Right).await;
        press(&controller, KeyCode::Char('a')).await;
        press(&controller, KeyCode::Esc).await;
        press(&controller, KeyCode::Char('c')).await;
        press(&controller, KeyCode::Char('+')).await;
        press(&controller, KeyCode::Char('+')).await;
        press(&controller, KeyCode::Char('-')).await;

        let model = controller.model.lock().await;
        assert_eq!(model.cart_totals().await.count, 2);
    }

    #[tokio::test]
    async fn test_login_provider_closes_panel() {
        let (controller, _events) = controller_with(PlayerConfig::default());
        press(&controller, KeyCode::Char('l')).await;
        press(&controller, KeyCode::Down).await;
        press(&controller, KeyCode::Enter).await;

        let model = controller.model.lock().await;
        let ui = model.get_ui_state().await;
        assert!(!ui.header.is_open(Panel::Login));
        assert_eq!(ui.header.last_auth_provider.map(|p| p.id()), Some("facebook"));
    }

    #[tokio::test]
    async fn test_quit_key() {
        let (controller, _events) = controller_with(PlayerConfig::default());
        press(&controller, KeyCode::Char('q')).await;
        assert!(controller.model.lock().await.should_quit().await);
    }
}
