//! ヘッダーコンポーネント

use leptos::prelude::*;
use firstapp_common::views::HEADER_CLASS;
use firstapp_common::{WELCOME_HEADING, WELCOME_TEXT};

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class=HEADER_CLASS>
            <h1>{WELCOME_HEADING}</h1>
            <p>{WELCOME_TEXT}</p>
        </header>
    }
}
