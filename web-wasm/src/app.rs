//! メインアプリケーションコンポーネント

use leptos::prelude::*;
use firstapp_common::views::ROOT_CLASS;
use firstapp_common::APP_TITLE;
use crate::components::{header::Header, nav::Nav};

/// ルートコンポーネント
#[component]
pub fn App() -> impl IntoView {
    view! {
        <div class=ROOT_CLASS>
            <Nav title=APP_TITLE />
            <Header />
        </div>
    }
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn document() -> web_sys::Document {
        web_sys::window()
            .and_then(|w| w.document())
            .expect("documentが取得できない")
    }

    fn text_of(selector: &str) -> String {
        document()
            .query_selector(selector)
            .ok()
            .flatten()
            .and_then(|el| el.text_content())
            .unwrap_or_default()
    }

    #[wasm_bindgen_test]
    fn wasm_app_mounts_nav_and_header() {
        leptos::mount::mount_to_body(App);

        assert_eq!(text_of("div.App > nav.main-nav > h1"), "My React App");
        assert_eq!(text_of("header.App-header > h1"), "Welcome to My React App");
        assert_eq!(text_of("header.App-header > p"), "This is a simple React application.");

        let links = document()
            .query_selector_all("nav.main-nav li > a")
            .expect("query失敗");
        assert_eq!(links.length(), 3);
    }
}
