//! CineMatch browser front-end.
//!
//! The doodle model, shape geometry, frame-loop bookkeeping, API types and
//! search state are plain Rust and build on any target. DOM wiring
//! (`canvas`, `dom`, `frame`, `ui` and the fetch client) is wasm32-only.
pub mod animation;
pub mod api;
pub mod constants;
pub mod doodle;
pub mod error;
pub mod field;
pub mod poster;
pub mod search;
pub mod shapes;
pub mod surface;

#[cfg(target_arch = "wasm32")]
mod canvas;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod frame;
#[cfg(target_arch = "wasm32")]
mod ui;

pub use doodle::{Doodle, DoodleKind};
pub use error::{ApiError, SurfaceError};
pub use field::{DoodleField, FieldOptions};
pub use surface::DrawingSurface;

#[cfg(target_arch = "wasm32")]
pub use entry::*;

#[cfg(target_arch = "wasm32")]
mod entry {
    use crate::api::ApiClient;
    use crate::constants::DOODLE_CANVAS_ID;
    use crate::field::FieldOptions;
    use crate::{dom, frame, ui};
    use std::cell::RefCell;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen_futures::spawn_local;

    thread_local! {
        // The page-level doodle layer started by `start`.
        static PAGE_DOODLES: RefCell<Option<frame::DoodleLoop>> = const { RefCell::new(None) };
    }

    /// Doodle layer handle for pages that manage their own canvas.
    #[wasm_bindgen]
    pub struct DoodleAnimation {
        inner: frame::DoodleLoop,
    }

    #[wasm_bindgen]
    impl DoodleAnimation {
        #[wasm_bindgen(constructor)]
        pub fn new(
            canvas_id: &str,
            count: Option<u32>,
            seed: Option<u64>,
        ) -> Result<DoodleAnimation, JsValue> {
            let mut options = FieldOptions {
                seed,
                ..FieldOptions::default()
            };
            if let Some(count) = count {
                options.count = count as usize;
            }
            let inner = frame::DoodleLoop::start(canvas_id, &options)
                .map_err(|e| JsValue::from_str(&e.to_string()))?;
            Ok(DoodleAnimation { inner })
        }

        #[wasm_bindgen(getter, js_name = doodleCount)]
        pub fn doodle_count(&self) -> usize {
            self.inner.doodle_count()
        }

        #[wasm_bindgen(getter, js_name = isRunning)]
        pub fn is_running(&self) -> bool {
            self.inner.is_running()
        }

        pub fn destroy(&mut self) {
            self.inner.destroy();
        }
    }

    /// Stop the doodle layer started with the page.
    #[wasm_bindgen(js_name = destroyDoodles)]
    pub fn destroy_doodles() {
        PAGE_DOODLES.with(|d| {
            if let Some(mut l) = d.borrow_mut().take() {
                l.destroy();
            }
        });
    }

    /// Titles-only recommendations as a plain JS object.
    #[wasm_bindgen(js_name = basicRecommendations)]
    pub async fn basic_recommendations(movie: String) -> Result<JsValue, JsValue> {
        let response = ApiClient::from_location()
            .basic_recommendations(&movie)
            .await
            .map_err(|e| JsValue::from_str(&e.user_message()))?;
        let json = serde_json::to_string(&response)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        js_sys::JSON::parse(&json)
    }

    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();
        log::info!("cinematch-web starting");

        if let Err(e) = init() {
            log::error!("init error: {:?}", e);
        }
        Ok(())
    }

    fn init() -> anyhow::Result<()> {
        let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

        // The animation is decoration: a page without the canvas still gets search.
        match frame::DoodleLoop::start(DOODLE_CANVAS_ID, &FieldOptions::default()) {
            Ok(doodles) => PAGE_DOODLES.with(|d| *d.borrow_mut() = Some(doodles)),
            Err(e) => log::error!("doodle layer disabled: {:?}", e),
        }

        let api = ApiClient::from_location();
        let health_api = api.clone();
        spawn_local(async move {
            match health_api.health().await {
                Ok(h) => log::info!(
                    "[api] {} (movies={}, tmdb={})",
                    h.status,
                    h.movies_loaded,
                    h.tmdb_configured
                ),
                Err(e) => log::warn!("[api] health check failed: {}", e),
            }
        });

        ui::SearchApp::mount(&document, api)?;
        Ok(())
    }
}
