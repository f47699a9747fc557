//! ビュー定義
//!
//! - navigation_view: タイトル見出し + 固定リンク3件のナビゲーション
//! - root_view: ナビゲーション + ウェルカムヘッダー

use crate::node::{Element, Node, Tag};

/// ルートビューがナビゲーションに渡すタイトル
pub const APP_TITLE: &str = "My React App";
pub const WELCOME_HEADING: &str = "Welcome to My React App";
pub const WELCOME_TEXT: &str = "This is a simple React application.";

pub const NAV_CLASS: &str = "main-nav";
pub const ROOT_CLASS: &str = "App";
pub const HEADER_CLASS: &str = "App-header";

/// ナビゲーションリンク
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

/// 固定リンク（この順序で表示）
pub const NAV_LINKS: [NavLink; 3] = [
    NavLink { label: "Home", href: "/" },
    NavLink { label: "About", href: "/about" },
    NavLink { label: "Contact", href: "/contact" },
];

impl NavLink {
    pub fn to_element(&self) -> Element {
        Element::new(Tag::A).attr("href", self.href).text(self.label)
    }
}

/// ナビゲーションビュー
///
/// タイトルはエスケープや正規化をせずそのまま見出しに入る。
pub fn navigation_view(title: &str) -> Node {
    let items = NAV_LINKS
        .iter()
        .map(|link| Element::new(Tag::Li).child(link.to_element()));

    Element::new(Tag::Nav)
        .class(NAV_CLASS)
        .child(Element::new(Tag::H1).text(title))
        .child(Element::new(Tag::Ul).children(items))
        .into()
}

/// ルートビュー
pub fn root_view() -> Node {
    let header = Element::new(Tag::Header)
        .class(HEADER_CLASS)
        .child(Element::new(Tag::H1).text(WELCOME_HEADING))
        .child(Element::new(Tag::P).text(WELCOME_TEXT));

    Element::new(Tag::Div)
        .class(ROOT_CLASS)
        .child(navigation_view(APP_TITLE))
        .child(header)
        .into()
}
