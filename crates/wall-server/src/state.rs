use std::sync::Arc;
use wall_core::{AppConfig, MessageStore};
use wall_stats::palette::{self, Rgb};

/// Shared application state for the server.
///
/// Messages are immutable after load, so the store is shared without
/// locks; every request reads the same list.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub store: Arc<MessageStore>,
    /// Accent colors, sampled once at startup.
    pub palette: Vec<Rgb>,
}

impl AppState {
    pub fn new(config: AppConfig, store: Arc<MessageStore>) -> Self {
        let palette = load_palette(&config);
        Self {
            config,
            store,
            palette,
        }
    }
}

/// Sample accent colors from the configured RGBA dump, best-effort.
/// Missing or unreadable input falls back to the default palette.
fn load_palette(config: &AppConfig) -> Vec<Rgb> {
    match &config.data.accent_rgba {
        Some(path) => match std::fs::read(path) {
            Ok(bytes) => palette::dominant_colors_or_fallback(&bytes, 5),
            Err(e) => {
                tracing::warn!("Could not sample accents from {}: {}", path.display(), e);
                palette::FALLBACK_PALETTE.to_vec()
            }
        },
        None => palette::FALLBACK_PALETTE.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wall_core::Message;

    #[test]
    fn test_default_palette_without_accent_source() {
        let state = AppState::new(
            AppConfig::default(),
            Arc::new(MessageStore::from_messages(vec![Message::new(
                "hi", "Bob", "2024-01-01",
            )])),
        );
        assert_eq!(state.palette, palette::FALLBACK_PALETTE.to_vec());
    }

    #[test]
    fn test_unreadable_accent_source_falls_back() {
        let mut config = AppConfig::default();
        config.data.accent_rgba = Some("/nonexistent/accents.rgba".into());
        let state = AppState::new(config, Arc::new(MessageStore::from_messages(vec![])));
        assert_eq!(state.palette, palette::FALLBACK_PALETTE.to_vec());
    }
}
