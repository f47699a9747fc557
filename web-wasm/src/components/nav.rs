//! ナビゲーションコンポーネント

use leptos::prelude::*;
use firstapp_common::views::NAV_CLASS;
use firstapp_common::NAV_LINKS;

/// タイトル見出し + 固定リンク
///
/// リンクはルーターを持たない通常のアンカー。
#[component]
pub fn Nav(#[prop(into)] title: String) -> impl IntoView {
    let items = NAV_LINKS
        .iter()
        .map(|link| {
            view! {
                <li>
                    <a href=link.href>{link.label}</a>
                </li>
            }
        })
        .collect_view();

    view! {
        <nav class=NAV_CLASS>
            <h1>{title}</h1>
            <ul>{items}</ul>
        </nav>
    }
}
