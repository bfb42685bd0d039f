use super::utils::{self, DEFAULT_ARTICLE_ID};
use crate::config::{self, LandingSettings, LandingStyle};
use crate::state::viewport::{self, HorizontalPadding};
use leptos::*;

#[derive(Clone, Copy)]
pub struct LandingViewModel {
    pub style: LandingStyle,
    pub article_id: RwSignal<String>,
    pub view_href: Signal<String>,
    pub padding: Signal<HorizontalPadding>,
}

impl LandingViewModel {
    pub fn new(settings: LandingSettings) -> Self {
        let article_id = create_rw_signal(DEFAULT_ARTICLE_ID.to_string());

        let encoding = settings.article_id_encoding;
        let view_href = Signal::derive(move || {
            article_id.with(|id| utils::view_article_href(id, encoding))
        });

        let padding = match settings.style {
            LandingStyle::Card => {
                let width = viewport::use_viewport_width(settings.padding_mode);
                let breakpoint = settings.narrow_breakpoint_px;
                Signal::derive(move || HorizontalPadding::for_width(width.get(), breakpoint))
            }
            LandingStyle::Plain => Signal::derive(|| HorizontalPadding::Wide),
        };

        Self {
            style: settings.style,
            article_id,
            view_href,
            padding,
        }
    }

    /// Stores the raw input value as typed.
    pub fn set_article_id(&self, value: String) {
        self.article_id.set(value);
    }
}

pub fn use_landing_view_model() -> LandingViewModel {
    let settings = use_context::<LandingSettings>().unwrap_or_else(config::landing_settings);
    LandingViewModel::new(settings)
}
