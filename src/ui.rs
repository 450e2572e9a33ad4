use crate::api::ApiClient;
use crate::constants::{INPUT_FOCUS_DELAY_MS, RESULTS_SCROLL_DELAY_MS};
use crate::dom;
use crate::search::{MovieCard, SearchPhase, SearchState};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

const CALENDAR_ICON: &str = concat!(
    r#"<svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">"#,
    r#"<rect x="3" y="4" width="18" height="18" rx="2" ry="2"/>"#,
    r#"<line x1="16" y1="2" x2="16" y2="6"/><line x1="8" y1="2" x2="8" y2="6"/>"#,
    r#"<line x1="3" y1="10" x2="21" y2="10"/></svg>"#,
);
const STAR_ICON: &str = concat!(
    r#"<svg viewBox="0 0 24 24">"#,
    r#"<path d="M12 2L9.5 9.5L2 12L9.5 14.5L12 22L14.5 14.5L22 12L14.5 9.5L12 2Z"/></svg>"#,
);

struct Elements {
    document: web::Document,
    form: web::Element,
    input: web::HtmlInputElement,
    results_section: web::Element,
    results_movie_name: web::Element,
    results_count: web::Element,
    movies_grid: web::Element,
    loading: web::Element,
    error: web::Element,
    error_message: web::Element,
    retry_btn: web::Element,
    logo: web::Element,
}

impl Elements {
    fn find(document: &web::Document) -> anyhow::Result<Self> {
        Ok(Self {
            document: document.clone(),
            form: dom::element_by_id(document, "search-form")?,
            input: dom::element_by_id(document, "movie-input")?,
            results_section: dom::element_by_id(document, "results-section")?,
            results_movie_name: dom::element_by_id(document, "results-movie-name")?,
            results_count: dom::element_by_id(document, "results-count")?,
            movies_grid: dom::element_by_id(document, "movies-grid")?,
            loading: dom::element_by_id(document, "loading")?,
            error: dom::element_by_id(document, "error")?,
            error_message: dom::element_by_id(document, "error-message")?,
            retry_btn: dom::element_by_id(document, "retry-btn")?,
            logo: dom::element_by_id(document, "logo")?,
        })
    }
}

/// Search form controller: submit, loading, result cards, error panel.
pub struct SearchApp {
    el: Elements,
    state: RefCell<SearchState>,
    api: ApiClient,
}

impl SearchApp {
    /// Bind to the page's search elements and wire their listeners.
    pub fn mount(document: &web::Document, api: ApiClient) -> anyhow::Result<Rc<Self>> {
        let app = Rc::new(Self {
            el: Elements::find(document)?,
            state: RefCell::new(SearchState::new()),
            api,
        });

        let app_submit = app.clone();
        let on_submit = Closure::wrap(Box::new(move |ev: web::Event| {
            ev.prevent_default();
            app_submit.handle_submit();
        }) as Box<dyn FnMut(web::Event)>);
        app.el
            .form
            .add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        on_submit.forget();

        let app_retry = app.clone();
        dom::add_click_listener(&app.el.retry_btn, move || app_retry.handle_retry());
        let app_logo = app.clone();
        dom::add_click_listener(&app.el.logo, move || app_logo.handle_logo());

        let input = app.el.input.clone();
        dom::set_timeout(INPUT_FOCUS_DELAY_MS, move || {
            _ = input.focus();
        });
        Ok(app)
    }

    fn handle_submit(self: &Rc<Self>) {
        let raw = self.el.input.value();
        let Some(ticket) = self.state.borrow_mut().submit(&raw) else {
            _ = self.el.input.focus();
            return;
        };
        self.render();

        let section = self.el.results_section.clone();
        dom::set_timeout(RESULTS_SCROLL_DELAY_MS, move || section.scroll_into_view());

        let query = raw.trim().to_owned();
        log::info!("[search] {:?}", query);
        let app = self.clone();
        spawn_local(async move {
            let outcome = app.api.recommendations(&query).await;
            if let Err(e) = &outcome {
                log::warn!("[search] {:?} failed: {}", query, e);
            }
            let applied = app.state.borrow_mut().resolve(ticket, outcome);
            if applied {
                app.render();
            } else {
                log::debug!("[search] dropped stale response for {:?}", query);
            }
        });
    }

    fn handle_retry(&self) {
        self.state.borrow_mut().dismiss_error();
        self.render();
        _ = self.el.input.focus();
        self.el.input.select();
    }

    fn handle_logo(&self) {
        self.state.borrow_mut().reset();
        if let Some(w) = web::window() {
            w.scroll_to_with_x_and_y(0.0, 0.0);
        }
        self.el.input.set_value("");
        self.render();
        _ = self.el.input.focus();
    }

    fn render(&self) {
        let state = self.state.borrow();
        dom::set_visible(&self.el.results_section, state.results_visible());
        match state.phase() {
            SearchPhase::Idle => {
                dom::set_visible(&self.el.loading, false);
                dom::set_visible(&self.el.error, false);
            }
            SearchPhase::Loading { .. } => {
                dom::set_visible(&self.el.loading, true);
                dom::set_visible(&self.el.error, false);
                self.el.movies_grid.set_inner_html("");
            }
            SearchPhase::Loaded {
                matched_movie,
                cards,
            } => {
                dom::set_visible(&self.el.loading, false);
                dom::set_visible(&self.el.error, false);
                self.el
                    .results_movie_name
                    .set_text_content(Some(matched_movie.as_str()));
                self.el
                    .results_count
                    .set_text_content(Some(cards.len().to_string().as_str()));
                self.el.movies_grid.set_inner_html("");
                for card in cards {
                    match build_card(&self.el.document, card) {
                        Ok(node) => {
                            _ = self.el.movies_grid.append_child(&node);
                        }
                        Err(e) => log::error!("card build error: {:?}", e),
                    }
                }
            }
            SearchPhase::Failed { message } => {
                dom::set_visible(&self.el.loading, false);
                self.el.error_message.set_text_content(Some(message.as_str()));
                dom::set_visible(&self.el.error, true);
                self.el.movies_grid.set_inner_html("");
            }
        }
    }
}

fn element(document: &web::Document, tag: &str, class: &str) -> Result<web::Element, JsValue> {
    let el = document.create_element(tag)?;
    el.set_class_name(class);
    Ok(el)
}

/// Server strings only ever reach the DOM as text or attribute values.
fn build_card(document: &web::Document, card: &MovieCard) -> Result<web::Element, JsValue> {
    let root = element(document, "div", "movie-card")?;
    root.set_attribute(
        "style",
        &format!("animation-delay: {}", card.animation_delay_css()),
    )?;

    let img = element(document, "img", "movie-poster")?;
    img.set_attribute("src", &card.poster_url)?;
    img.set_attribute("alt", &format!("{} poster", card.title))?;
    img.set_attribute("loading", "lazy")?;
    img.set_attribute(
        "onerror",
        &format!("this.onerror=null;this.src='{}'", card.fallback_poster_url),
    )?;
    root.append_child(&img)?;

    let badge = element(document, "div", "match-badge")?;
    badge.set_text_content(Some(card.match_badge.as_str()));
    root.append_child(&badge)?;

    let info = element(document, "div", "movie-info")?;
    let title = element(document, "h3", "movie-title")?;
    title.set_attribute("title", &card.title)?;
    title.set_text_content(Some(card.title.as_str()));
    info.append_child(&title)?;

    let meta = element(document, "div", "movie-meta")?;
    let year = element(document, "span", "movie-year")?;
    year.set_inner_html(CALENDAR_ICON);
    year.append_child(&document.create_text_node(&card.year))?;
    meta.append_child(&year)?;
    let rating = element(document, "span", "movie-rating")?;
    rating.set_inner_html(STAR_ICON);
    rating.append_child(&document.create_text_node(&card.rating))?;
    meta.append_child(&rating)?;
    info.append_child(&meta)?;

    root.append_child(&info)?;
    Ok(root)
}
