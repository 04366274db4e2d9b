use crate::countdown::Countdown;
use crate::display::{DisplayState, Theme};
use chrono::{DateTime, Utc};
use tracing::error;

pub fn render_index(display: &DisplayState, now: DateTime<Utc>) -> String {
    let countdown = Countdown::until_next_refresh(now);
    let date_label = if display.error().is_some() {
        String::new()
    } else {
        date_label(now)
    };

    let preload = display
        .pending_probe()
        .map(|probe| {
            format!(
                r#"<link rel="preload" as="image" href="{}" />"#,
                escape_html(probe.url())
            )
        })
        .unwrap_or_default();

    let quote = display.quote();
    let modal_tags = display
        .modal_tags()
        .iter()
        .map(|tag| format!(r#"<span class="tag">{}</span>"#, escape_html(tag)))
        .collect::<String>();

    INDEX_HTML
        .replace("{{PRELOAD}}", &preload)
        .replace("{{CARD_STATE}}", if display.error().is_some() { "error" } else { "" })
        .replace("{{THEME_CLASS}}", display.background().css_class())
        .replace("{{QUOTE_TEXT}}", &escape_html(display.headline()))
        .replace("{{QUOTE_AUTHOR}}", &escape_html(display.byline()))
        .replace("{{DATE_LABEL}}", &escape_html(&date_label))
        .replace("{{HOURS}}", &format!("{:02}", countdown.hours))
        .replace("{{MINUTES}}", &format!("{:02}", countdown.minutes))
        .replace("{{SECONDS}}", &format!("{:02}", countdown.seconds))
        .replace(
            "{{MODAL_TEXT}}",
            &escape_html(quote.map(|q| q.text.as_str()).unwrap_or("")),
        )
        .replace(
            "{{MODAL_AUTHOR}}",
            &escape_html(quote.and_then(|q| q.author.as_deref()).unwrap_or("")),
        )
        .replace(
            "{{MODAL_DESCRIPTION}}",
            &escape_html(quote.and_then(|q| q.description.as_deref()).unwrap_or("")),
        )
        .replace("{{MODAL_TAGS}}", &modal_tags)
        .replace("{{THEMES}}", &theme_names_json())
        .replace("{{INITIAL_QUOTE}}", &initial_quote_json(display))
}

/// `Sunday, August 10`
pub fn date_label(now: DateTime<Utc>) -> String {
    now.format("%A, %B %-d").to_string()
}

/// Escapes text for HTML bodies and attribute values. `{` is escaped too so
/// quote content can never form a template placeholder.
fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            '{' => escaped.push_str("&#123;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// JSON safe to embed inside a `<script>` element. Substituted last, so its
/// content is never scanned for placeholders.
fn initial_quote_json(display: &DisplayState) -> String {
    let json = match display.error().is_none().then(|| display.quote()).flatten() {
        Some(quote) => serde_json::to_string(quote).unwrap_or_else(|err| {
            error!("failed to encode initial quote: {err}");
            "null".to_string()
        }),
        None => "null".to_string(),
    };
    json.replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026")
}

fn theme_names_json() -> String {
    let names = Theme::ALL
        .iter()
        .map(|theme| format!("'{}'", theme.name()))
        .collect::<Vec<_>>();
    format!("[{}]", names.join(", "))
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Daily Quote</title>
  {{PRELOAD}}
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --ink: #f6f3ff;
      --muted: rgba(246, 243, 255, 0.72);
      --panel: rgba(14, 12, 32, 0.55);
      --accent: #f093fb;
      --shadow: 0 24px 60px rgba(10, 8, 30, 0.45);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: linear-gradient(160deg, #12102a, #231a4a 55%, #0d0b1f 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(820px, 100%);
      display: grid;
      gap: 24px;
      animation: rise 600ms ease;
    }

    header {
      display: flex;
      flex-direction: column;
      gap: 6px;
      text-align: center;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.8rem);
      margin: 0;
    }

    .subtitle {
      margin: 0;
      color: var(--muted);
    }

    .quote-card {
      position: relative;
      min-height: 340px;
      border-radius: 28px;
      overflow: hidden;
      box-shadow: var(--shadow);
      cursor: pointer;
      display: grid;
      align-items: end;
    }

    .quote-card:focus-visible {
      outline: 3px solid var(--accent);
      outline-offset: 4px;
    }

    .quote-background {
      position: absolute;
      inset: 0;
      background-size: cover;
      background-position: center;
      transition: background 400ms ease;
    }

    .quote-background::after {
      content: "";
      position: absolute;
      inset: 0;
      background: linear-gradient(180deg, transparent 20%, rgba(8, 6, 20, 0.78) 100%);
    }

    .theme-sunset { background: linear-gradient(135deg, #ff9a56, #ff6a88 55%, #6b2c70); }
    .theme-meditation { background: linear-gradient(135deg, #43cea2, #185a9d); }
    .theme-cosmic { background: linear-gradient(135deg, #667eea, #764ba2 50%, #f093fb); }
    .theme-divine { background: linear-gradient(135deg, #f6d365, #fda085 60%, #c471ed); }
    .theme-action { background: linear-gradient(135deg, #ed213a, #93291e); }

    .quote-body {
      position: relative;
      padding: 36px;
      display: grid;
      gap: 10px;
    }

    .quote-text {
      margin: 0;
      font-family: "Fraunces", "Georgia", serif;
      font-size: clamp(1.4rem, 3vw, 2rem);
      line-height: 1.35;
    }

    .quote-author {
      margin: 0;
      font-weight: 600;
      color: var(--accent);
    }

    .quote-source {
      margin: 0;
      color: var(--muted);
      font-size: 0.9rem;
    }

    .quote-card.loading .quote-text,
    .quote-card.error .quote-text {
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      font-size: 1.1rem;
    }

    .fade-in {
      animation: rise 500ms ease;
    }

    .countdown {
      background: var(--panel);
      backdrop-filter: blur(12px);
      border-radius: 20px;
      padding: 18px 24px;
      display: flex;
      align-items: center;
      justify-content: center;
      gap: 14px;
      flex-wrap: wrap;
    }

    .countdown .label {
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: var(--muted);
    }

    .countdown .clock {
      font-size: 1.6rem;
      font-weight: 600;
      font-variant-numeric: tabular-nums;
    }

    .modal {
      position: fixed;
      inset: 0;
      background: rgba(6, 4, 16, 0.72);
      display: flex;
      align-items: center;
      justify-content: center;
      padding: 24px;
    }

    .modal[hidden] {
      display: none;
    }

    .modal-dialog {
      position: relative;
      width: min(640px, 100%);
      background: #1b1638;
      border-radius: 24px;
      padding: 36px 32px 28px;
      box-shadow: var(--shadow);
      display: grid;
      gap: 14px;
    }

    .modal-close {
      position: absolute;
      top: 12px;
      right: 14px;
      appearance: none;
      border: none;
      background: transparent;
      color: var(--muted);
      font-size: 1.6rem;
      cursor: pointer;
    }

    .modal-quote {
      margin: 0;
      font-family: "Fraunces", "Georgia", serif;
      font-size: 1.4rem;
    }

    .modal-author {
      margin: 0;
      color: var(--accent);
      font-weight: 600;
    }

    .modal-description {
      margin: 0;
      color: var(--muted);
      line-height: 1.5;
    }

    .tags {
      display: flex;
      flex-wrap: wrap;
      gap: 8px;
    }

    .tag {
      background: rgba(240, 147, 251, 0.16);
      color: var(--accent);
      border-radius: 999px;
      padding: 4px 12px;
      font-size: 0.85rem;
    }

    .hint {
      text-align: center;
      color: var(--muted);
      font-size: 0.85rem;
      margin: 0;
    }

    @keyframes rise {
      from {
        opacity: 0;
        transform: translateY(12px);
      }
      to {
        opacity: 1;
        transform: translateY(0);
      }
    }
  </style>
</head>
<body>
  <main class="app" id="app">
    <header>
      <h1>Daily Quote</h1>
      <p class="subtitle">One quote a day. A new one arrives at 00:00 UTC.</p>
    </header>

    <section class="quote-card {{CARD_STATE}}" id="quote-card" tabindex="0" aria-label="Open quote details">
      <div class="quote-background {{THEME_CLASS}}" id="quote-background"></div>
      <div class="quote-body">
        <p class="quote-text" id="quote-text">{{QUOTE_TEXT}}</p>
        <p class="quote-author" id="quote-author">{{QUOTE_AUTHOR}}</p>
        <p class="quote-source" id="quote-source">{{DATE_LABEL}}</p>
      </div>
    </section>

    <section class="countdown" aria-live="off">
      <span class="label">Next quote in</span>
      <span class="clock"><span id="hours">{{HOURS}}</span>:<span id="minutes">{{MINUTES}}</span>:<span id="seconds">{{SECONDS}}</span></span>
    </section>

    <p class="hint">Click the card or press Space for details. Esc closes.</p>
  </main>

  <div class="modal" id="quote-modal" hidden>
    <div class="modal-dialog" role="dialog" aria-modal="true" aria-labelledby="modal-quote-text">
      <button class="modal-close" id="close-modal" type="button" aria-label="Close">&times;</button>
      <p class="modal-quote" id="modal-quote-text">{{MODAL_TEXT}}</p>
      <p class="modal-author" id="modal-author">{{MODAL_AUTHOR}}</p>
      <p class="modal-description" id="modal-description">{{MODAL_DESCRIPTION}}</p>
      <div class="tags" id="modal-tags">{{MODAL_TAGS}}</div>
    </div>
  </div>

  <script id="initial-quote" type="application/json">{{INITIAL_QUOTE}}</script>
  <script>
    const LOADING_MESSAGE = 'Loading your daily inspiration...';
    const LOAD_ERROR_MESSAGE = "Failed to load today's wisdom. Please refresh the page.";
    const THEMES = {{THEMES}};
    const DEFAULT_THEME = 'cosmic';
    const DIRECT_IMAGE_HOST = 'i.ibb.co';
    const SHARE_IMAGE_HOSTS = ['ibb.co', 'www.ibb.co'];
    const RELOAD_DELAY_MS = 1000;
    const LOOPBACK_HOSTS = ['localhost', '127.0.0.1', '[::1]'];

    const el = {
      card: document.getElementById('quote-card'),
      background: document.getElementById('quote-background'),
      text: document.getElementById('quote-text'),
      author: document.getElementById('quote-author'),
      source: document.getElementById('quote-source'),
      modal: document.getElementById('quote-modal'),
      modalText: document.getElementById('modal-quote-text'),
      modalAuthor: document.getElementById('modal-author'),
      modalDescription: document.getElementById('modal-description'),
      modalTags: document.getElementById('modal-tags'),
      closeModal: document.getElementById('close-modal'),
      hours: document.getElementById('hours'),
      minutes: document.getElementById('minutes'),
      seconds: document.getElementById('seconds')
    };

    const toDirectImageUrl = (raw) => {
      const url = (raw || '').trim();
      const withoutScheme = url.replace(/^https?:\/\//i, '');
      const authorityEnd = withoutScheme.search(/[\/?#]/);
      const end = authorityEnd === -1 ? withoutScheme.length : authorityEnd;
      const host = withoutScheme.slice(0, end).toLowerCase();

      if (host === DIRECT_IMAGE_HOST || !SHARE_IMAGE_HOSTS.includes(host)) {
        return url;
      }

      const path = withoutScheme.slice(end).split(/[?#]/)[0];
      const segments = path.split('/').filter(Boolean);
      const id = segments[segments.length - 1];
      return id ? `https://${DIRECT_IMAGE_HOST}/${id}/image.png` : url;
    };

    const formatDateLabel = (date) =>
      date.toLocaleDateString('en-US', {
        weekday: 'long',
        month: 'long',
        day: 'numeric',
        timeZone: 'UTC'
      });

    const createDisplay = () => {
      const state = {
        quote: null,
        generation: 0,
        mounted: true,
        loading: false
      };

      const clearThemes = () => {
        THEMES.forEach((name) => el.background.classList.remove(`theme-${name}`));
      };

      const setTheme = (name) => {
        const theme = THEMES.includes(name) ? name : DEFAULT_THEME;
        clearThemes();
        el.background.style.backgroundImage = '';
        el.background.classList.add(`theme-${theme}`);
      };

      const setImage = (url) => {
        clearThemes();
        el.background.style.backgroundImage = `url("${url.replace(/"/g, '%22')}")`;
      };

      const probeBackground = (rawUrl) => {
        const url = toDirectImageUrl(rawUrl);
        if (!url) {
          setTheme(DEFAULT_THEME);
          return;
        }

        const generation = state.generation;
        const isCurrent = () => state.mounted && generation === state.generation;
        const img = new Image();
        img.onload = () => {
          if (isCurrent()) {
            setImage(url);
          }
        };
        img.onerror = () => {
          if (isCurrent()) {
            console.warn(`image failed to load: ${url}, using fallback theme`);
            setTheme(DEFAULT_THEME);
          }
        };
        img.src = url;
      };

      const renderModal = () => {
        const quote = state.quote;
        el.modalText.textContent = quote.text;
        el.modalAuthor.textContent = quote.author || '';
        el.modalDescription.textContent = quote.description || '';
        el.modalTags.innerHTML = '';
        if (Array.isArray(quote.tags)) {
          quote.tags.forEach((tag) => {
            const span = document.createElement('span');
            span.className = 'tag';
            span.textContent = `#${tag}`;
            el.modalTags.appendChild(span);
          });
        }
      };

      const showQuote = (quote, label) => {
        state.generation += 1;
        state.quote = quote;
        el.card.classList.remove('error');
        el.text.textContent = quote.text;
        el.author.textContent = quote.author || '';
        el.source.textContent = label;
        probeBackground(quote.image_url);

        el.card.classList.remove('fade-in');
        window.requestAnimationFrame(() => el.card.classList.add('fade-in'));
      };

      const showError = (message) => {
        state.generation += 1;
        el.card.classList.add('error');
        el.text.textContent = message;
        el.author.textContent = '';
        el.source.textContent = '';
        setTheme(DEFAULT_THEME);
      };

      const setLoading = (loading) => {
        state.loading = loading;
        el.card.classList.toggle('loading', loading);
        if (loading && !state.quote) {
          el.text.textContent = LOADING_MESSAGE;
          el.author.textContent = '';
          el.source.textContent = '';
        }
      };

      const isModalOpen = () => !el.modal.hidden;

      const openModal = () => {
        if (!state.quote) {
          return;
        }
        renderModal();
        el.modal.hidden = false;
        document.body.style.overflow = 'hidden';
      };

      const closeModal = () => {
        el.modal.hidden = true;
        document.body.style.overflow = '';
      };

      const unmount = () => {
        state.mounted = false;
        closeModal();
      };

      return {
        showQuote,
        showError,
        setLoading,
        isLoading: () => state.loading,
        isModalOpen,
        openModal,
        closeModal,
        unmount
      };
    };

    const fetchJson = async (path) => {
      const res = await fetch(path);
      if (!res.ok) {
        throw new Error(`HTTP error ${res.status}`);
      }
      const body = await res.text();
      if (!body.trim()) {
        throw new Error('Empty response');
      }
      return JSON.parse(body);
    };

    const countdownParts = (nowMs) => {
      const now = new Date(nowMs);
      const nextRefresh = Date.UTC(now.getUTCFullYear(), now.getUTCMonth(), now.getUTCDate() + 1);
      const remaining = Math.max(0, nextRefresh - nowMs);
      return {
        hours: Math.floor(remaining / 3600000),
        minutes: Math.floor((remaining % 3600000) / 60000),
        seconds: Math.floor((remaining % 60000) / 1000)
      };
    };

    const pad = (value) => value.toString().padStart(2, '0');

    const startCountdown = () => {
      let reloadScheduled = false;

      const tick = () => {
        const { hours, minutes, seconds } = countdownParts(Date.now());
        el.hours.textContent = pad(hours);
        el.minutes.textContent = pad(minutes);
        el.seconds.textContent = pad(seconds);

        const due = hours === 0 && minutes === 0 && seconds === 0;
        if (!due) {
          reloadScheduled = false;
        } else if (!reloadScheduled) {
          reloadScheduled = true;
          setTimeout(() => window.location.reload(), RELOAD_DELAY_MS);
        }
      };

      tick();
      const handle = setInterval(tick, 1000);
      return () => clearInterval(handle);
    };

    const display = createDisplay();

    const loadDailyQuote = async () => {
      if (display.isLoading()) {
        return;
      }
      display.setLoading(true);
      try {
        const quote = await fetchJson('/api/quotes/daily');
        if (!quote || typeof quote.text !== 'string') {
          throw new Error('Malformed quote');
        }
        display.showQuote(quote, formatDateLabel(new Date()));
      } catch (err) {
        console.error('failed to load daily quote', err);
        display.showError(LOAD_ERROR_MESSAGE);
      } finally {
        display.setLoading(false);
      }
    };

    el.card.addEventListener('click', () => display.openModal());
    el.closeModal.addEventListener('click', () => display.closeModal());
    el.modal.addEventListener('click', (event) => {
      if (event.target === el.modal) {
        display.closeModal();
      }
    });

    document.addEventListener('keydown', (event) => {
      if (event.key === 'Escape') {
        display.closeModal();
        return;
      }
      const onButton = event.target instanceof Element && event.target.closest('button');
      if (event.key === ' ' && !display.isModalOpen() && !onButton) {
        event.preventDefault();
        display.openModal();
      }
    });

    const stopCountdown = startCountdown();
    window.addEventListener('pagehide', () => {
      stopCountdown();
      display.unmount();
    });

    if (LOOPBACK_HOSTS.includes(window.location.hostname)) {
      window.testDateQuote = async (date) => {
        try {
          const quote = await fetchJson(`/api/quotes/${encodeURIComponent(date)}`);
          display.showQuote(quote, formatDateLabel(new Date(`${date}T00:00:00Z`)));
          console.info(`showing quote for ${date}`, quote);
        } catch (err) {
          console.warn(`no quote for ${date}`, err);
        }
      };
      console.info('development mode: call testDateQuote("2025-08-13") to preview a date');
    }

    const initialQuote = JSON.parse(document.getElementById('initial-quote').textContent || 'null');
    if (initialQuote) {
      display.showQuote(initialQuote, el.source.textContent);
    }
    loadDailyQuote();
  </script>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::LOAD_ERROR_MESSAGE;
    use crate::models::Quote;
    use chrono::TimeZone;

    fn noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 8, 10, 12, 0, 0).unwrap()
    }

    #[test]
    fn index_renders_quote_countdown_and_date() {
        let mut display = DisplayState::new();
        let mut quote = Quote::new("Stay <calm>").with_author("Anon");
        quote.description = Some("On patience.".into());
        quote.tags = Some(vec!["calm".into()]);
        display.show_quote(quote);

        let html = render_index(&display, noon());
        assert!(html.contains("Stay &lt;calm&gt;"));
        assert!(html.contains(r#"<p class="quote-source" id="quote-source">Sunday, August 10</p>"#));
        assert!(html.contains(r#"<span id="hours">12</span>:<span id="minutes">00</span>:<span id="seconds">00</span>"#));
        assert!(html.contains("quote-background theme-cosmic"));
        assert!(html.contains(r#"<span class="tag">#calm</span>"#));
        assert!(html.contains("On patience."));
        assert!(html.contains(r#""text":"Stay \u003ccalm\u003e""#));
        assert!(!html.contains("Stay <calm>"));
        assert!(!html.contains("{{"));
    }

    #[test]
    fn index_preloads_normalized_image() {
        let mut display = DisplayState::new();
        let mut quote = Quote::new("Rise.");
        quote.image_url = Some("https://ibb.co/abc123".into());
        display.show_quote(quote);

        let html = render_index(&display, noon());
        assert!(html.contains(r#"<link rel="preload" as="image" href="https://i.ibb.co/abc123/image.png" />"#));
        assert!(html.contains("quote-background theme-cosmic"));
    }

    #[test]
    fn index_renders_error_state() {
        let mut display = DisplayState::new();
        display.show_error(LOAD_ERROR_MESSAGE);

        let html = render_index(&display, noon());
        assert!(html.contains("Failed to load today&#39;s wisdom. Please refresh the page."));
        assert!(html.contains(r#"class="quote-card error""#));
        assert!(html.contains(r#"<script id="initial-quote" type="application/json">null</script>"#));
    }

    #[test]
    fn quote_content_cannot_inject_placeholders() {
        let mut display = DisplayState::new();
        display.show_quote(Quote::new("{{HOURS}} and {{INITIAL_QUOTE}}"));

        let html = render_index(&display, noon());
        assert!(html.contains("&#123;&#123;HOURS}} and &#123;&#123;INITIAL_QUOTE}}"));
        assert!(html.contains(r#""text":"{{HOURS}} and {{INITIAL_QUOTE}}""#));
    }

    fn page_script(html: &str) -> &str {
        let start = html.find("const LOADING_MESSAGE").unwrap();
        let end = html.rfind("</script>").unwrap();
        &html[start..end]
    }

    #[test]
    fn failed_image_falls_back_to_default_theme_without_error() {
        let html = render_index(&DisplayState::new(), noon());
        let script = page_script(&html);

        assert!(script.contains("const DEFAULT_THEME = 'cosmic';"));
        let onerror = &script[script.find("img.onerror = () => {").unwrap()..];
        let onerror = &onerror[..onerror.find("};").unwrap()];
        assert!(onerror.contains("setTheme(DEFAULT_THEME);"));
        assert!(!onerror.contains("showError"));
        assert!(script.contains("const theme = THEMES.includes(name) ? name : DEFAULT_THEME;"));
        assert!(script.contains("const THEMES = ['sunset', 'meditation', 'cosmic', 'divine', 'action'];"));
    }

    #[test]
    fn image_results_are_ignored_once_superseded_or_unmounted() {
        let html = render_index(&DisplayState::new(), noon());
        let script = page_script(&html);

        assert!(script.contains("const isCurrent = () => state.mounted && generation === state.generation;"));
        assert!(script.contains("if (isCurrent()) {
            setImage(url);"));
        assert_eq!(script.matches("state.generation += 1;").count(), 2);
        assert!(script.contains("state.mounted = false;"));
    }

    #[test]
    fn countdown_reloads_once_and_stops_on_pagehide() {
        let html = render_index(&DisplayState::new(), noon());
        let script = page_script(&html);

        assert!(script.contains("} else if (!reloadScheduled) {
          reloadScheduled = true;"));
        assert!(script.contains("setTimeout(() => window.location.reload(), RELOAD_DELAY_MS);"));
        assert!(script.contains("return () => clearInterval(handle);"));
        let pagehide = &script[script.find("addEventListener('pagehide'").unwrap()..];
        assert!(pagehide.contains("stopCountdown();"));
        assert!(pagehide.contains("display.unmount();"));
    }

    #[test]
    fn space_opens_modal_only_when_closed_and_not_on_a_button() {
        let html = render_index(&DisplayState::new(), noon());
        let script = page_script(&html);

        assert!(script.contains(
            "if (event.key === ' ' && !display.isModalOpen() && !onButton) {\n        event.preventDefault();"
        ));
        assert_eq!(script.matches("preventDefault()").count(), 1);
        assert!(script.contains("if (event.target === el.modal) {"));
        assert!(html.contains(r#"<div class="modal" id="quote-modal" hidden>"#));
    }

    #[test]
    fn debug_hook_is_loopback_only() {
        let html = render_index(&DisplayState::new(), noon());
        let script = page_script(&html);

        let guard = script.find("if (LOOPBACK_HOSTS.includes(window.location.hostname)) {").unwrap();
        let hook = script.find("window.testDateQuote = ").unwrap();
        assert!(guard < hook);
        assert!(script.contains("fetchJson(`/api/quotes/${encodeURIComponent(date)}`)"));
    }

    #[test]
    fn date_label_uses_weekday_month_day() {
        let date = Utc.with_ymd_and_hms(2025, 8, 3, 23, 0, 0).unwrap();
        assert_eq!(date_label(date), "Sunday, August 3");
    }
}
