//! Navigation-related controller methods (search, sections)

use crate::model::Anchor;
use super::AppController;

impl AppController {
    pub async fn submit_search(&self) {
        let model = self.model.lock().await;
        if model.submit_search().await {
            let ui_state = model.get_ui_state().await;
            tracing::info!(section = ui_state.page.current.href(), "Search navigated to section");
        }
    }

    /// Move to the neighbouring page section, wrapping at both ends
    pub async fn step_section(&self, forward: bool) {
        let model = self.model.lock().await;
        let current = model.get_ui_state().await.page.current;
        let len = Anchor::ALL.len();
        let position = Anchor::ALL.iter().position(|a| *a == current).unwrap_or(0);
        let next = if forward {
            (position + 1) % len
        } else {
            (position + len - 1) % len
        };
        model.navigate_to(Anchor::ALL[next]).await;
    }
}
