//! What the server pre-renders into the page: the quote or error shown on
//! the card, its starting theme, and any image left for the page script in
//! [`crate::ui`] to load.

use crate::models::Quote;
use tracing::debug;

pub const LOADING_MESSAGE: &str = "Loading your daily inspiration...";
pub const LOAD_ERROR_MESSAGE: &str = "Failed to load today's wisdom. Please refresh the page.";

const DIRECT_IMAGE_HOST: &str = "i.ibb.co";
const SHARE_IMAGE_HOSTS: [&str; 2] = ["ibb.co", "www.ibb.co"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Sunset,
    Meditation,
    #[default]
    Cosmic,
    Divine,
    Action,
}

impl Theme {
    pub const ALL: [Theme; 5] = [
        Theme::Sunset,
        Theme::Meditation,
        Theme::Cosmic,
        Theme::Divine,
        Theme::Action,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Theme::Sunset => "sunset",
            Theme::Meditation => "meditation",
            Theme::Cosmic => "cosmic",
            Theme::Divine => "divine",
            Theme::Action => "action",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Theme::Sunset => "theme-sunset",
            Theme::Meditation => "theme-meditation",
            Theme::Cosmic => "theme-cosmic",
            Theme::Divine => "theme-divine",
            Theme::Action => "theme-action",
        }
    }
}

/// An image the page script still has to load before it may replace the
/// theme background.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageProbe {
    url: String,
}

impl ImageProbe {
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[derive(Debug, Default)]
pub struct DisplayState {
    quote: Option<Quote>,
    error: Option<String>,
    probe: Option<ImageProbe>,
}

impl DisplayState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows `quote` on the default theme. A quote with an image leaves a
    /// pending probe for the browser to resolve.
    pub fn show_quote(&mut self, quote: Quote) {
        self.error = None;
        self.probe = quote
            .image_url
            .as_deref()
            .map(normalize_image_url)
            .filter(|url| !url.is_empty())
            .map(|url| ImageProbe { url });
        if let Some(probe) = &self.probe {
            debug!("image {} left for the page to load", probe.url);
        }
        self.quote = Some(quote);
    }

    /// Replaces the quote text with `message`. The last good quote stays
    /// available to the modal.
    pub fn show_error(&mut self, message: impl Into<String>) {
        self.probe = None;
        self.error = Some(message.into());
    }

    pub fn quote(&self) -> Option<&Quote> {
        self.quote.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Background the card renders with. Images are only committed by the
    /// page script after they load, so the server always starts on a theme.
    pub fn background(&self) -> Theme {
        Theme::default()
    }

    pub fn pending_probe(&self) -> Option<&ImageProbe> {
        self.probe.as_ref()
    }

    /// Text shown in the card body.
    pub fn headline(&self) -> &str {
        match (&self.error, &self.quote) {
            (Some(error), _) => error.as_str(),
            (None, Some(quote)) => quote.text.as_str(),
            (None, None) => LOADING_MESSAGE,
        }
    }

    pub fn byline(&self) -> &str {
        if self.error.is_some() {
            return "";
        }
        self.quote
            .as_ref()
            .and_then(|quote| quote.author.as_deref())
            .unwrap_or("")
    }

    pub fn modal_tags(&self) -> Vec<String> {
        self.quote
            .as_ref()
            .and_then(|quote| quote.tags.as_ref())
            .map(|tags| tags.iter().map(|tag| format!("#{tag}")).collect())
            .unwrap_or_default()
    }
}

/// Rewrites an image share-page link (`https://ibb.co/<id>`) into its
/// direct-embed form (`https://i.ibb.co/<id>/image.png`). Direct links and
/// links on other hosts come back unchanged, so the rewrite is idempotent.
pub fn normalize_image_url(url: &str) -> String {
    let url = url.trim();
    let without_scheme = strip_scheme(url);
    let end_of_authority = without_scheme
        .find(['/', '?', '#'])
        .unwrap_or(without_scheme.len());
    let host = without_scheme[..end_of_authority].to_ascii_lowercase();

    if host == DIRECT_IMAGE_HOST || !SHARE_IMAGE_HOSTS.contains(&host.as_str()) {
        return url.to_string();
    }

    let rest = &without_scheme[end_of_authority..];
    let path = rest.split(['?', '#']).next().unwrap_or("");
    match path.split('/').filter(|segment| !segment.is_empty()).last() {
        Some(id) => format!("https://{DIRECT_IMAGE_HOST}/{id}/image.png"),
        None => url.to_string(),
    }
}

fn strip_scheme(url: &str) -> &str {
    for scheme in ["https://", "http://"] {
        if url
            .get(..scheme.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
        {
            return &url[scheme.len()..];
        }
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote_with_image(url: &str) -> Quote {
        let mut quote = Quote::new("Act without attachment.").with_author("Krishna");
        quote.image_url = Some(url.to_string());
        quote
    }

    #[test]
    fn share_urls_become_direct_urls() {
        assert_eq!(
            normalize_image_url("https://ibb.co/5x2wbTXY"),
            "https://i.ibb.co/5x2wbTXY/image.png"
        );
        assert_eq!(
            normalize_image_url("http://www.ibb.co/5x2wbTXY/?ref=share"),
            "https://i.ibb.co/5x2wbTXY/image.png"
        );
    }

    #[test]
    fn direct_and_foreign_urls_pass_through() {
        for url in [
            "https://i.ibb.co/5x2wbTXY/sunrise.jpg",
            "https://example.com/ibb.co/abc.png",
            "https://images.example.org/a.png",
            "https://ibb.co/",
            "",
        ] {
            assert_eq!(normalize_image_url(url), url);
        }
    }

    #[test]
    fn normalization_is_idempotent() {
        for url in [
            "https://ibb.co/5x2wbTXY",
            "ibb.co/abc",
            "https://i.ibb.co/abc/image.png",
            "https://example.com/a.png",
        ] {
            let once = normalize_image_url(url);
            assert_eq!(normalize_image_url(&once), once);
        }
    }

    #[test]
    fn quote_without_image_uses_default_theme() {
        let mut display = DisplayState::new();
        display.show_quote(Quote::new("Be still."));

        assert!(display.pending_probe().is_none());
        assert_eq!(display.background(), Theme::Cosmic);
        assert_eq!(display.headline(), "Be still.");
        assert_eq!(display.byline(), "");
    }

    #[test]
    fn image_quote_leaves_normalized_probe() {
        let mut display = DisplayState::new();
        display.show_quote(quote_with_image("https://ibb.co/5x2wbTXY"));

        assert_eq!(
            display.pending_probe().map(ImageProbe::url),
            Some("https://i.ibb.co/5x2wbTXY/image.png")
        );
        assert_eq!(display.background(), Theme::Cosmic);
        assert_eq!(display.headline(), "Act without attachment.");
        assert_eq!(display.byline(), "Krishna");
    }

    #[test]
    fn newer_quote_replaces_pending_probe() {
        let mut display = DisplayState::new();
        display.show_quote(quote_with_image("https://example.com/first.png"));
        display.show_quote(Quote::new("Plain."));
        assert!(display.pending_probe().is_none());
    }

    #[test]
    fn error_replaces_text_and_drops_probe() {
        let mut display = DisplayState::new();
        display.show_quote(quote_with_image("https://example.com/a.png"));

        display.show_error(LOAD_ERROR_MESSAGE);
        assert_eq!(display.headline(), LOAD_ERROR_MESSAGE);
        assert_eq!(display.byline(), "");
        assert!(display.pending_probe().is_none());
        assert_eq!(display.background(), Theme::Cosmic);
        assert!(display.quote().is_some());
    }

    #[test]
    fn empty_display_shows_loading_message() {
        let display = DisplayState::new();
        assert_eq!(display.headline(), LOADING_MESSAGE);
        assert!(display.modal_tags().is_empty());
    }

    #[test]
    fn modal_tags_are_prefixed() {
        let mut display = DisplayState::new();
        let mut quote = Quote::new("Let go.");
        quote.tags = Some(vec!["peace".into(), "focus".into()]);
        display.show_quote(quote);
        assert_eq!(display.modal_tags(), vec!["#peace", "#focus"]);
    }
}
