//! ページ文書
//!
//! ビューを `<!DOCTYPE html>` 付きのページに包む。ページの外枠は askama
//! テンプレート (`templates/page.html`)、本文はノード木のHTMLをそのまま埋め込む。
//! スタイルシートは中身を持たない参照名としてのみ扱う。

use std::fmt;

use askama::Template;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::node::Node;
use crate::render::{render_html, render_pretty};
use crate::views::APP_TITLE;

pub const DEFAULT_STYLESHEET: &str = "App.css";

/// スタイルシート参照
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleSheet(pub String);

impl Default for StyleSheet {
    fn default() -> Self {
        Self(DEFAULT_STYLESHEET.to_string())
    }
}

impl StyleSheet {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StyleSheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// HTMLページ
#[derive(Debug, Clone, PartialEq, Eq, Template)]
#[template(path = "page.html")]
pub struct Document {
    pub title: String,
    pub stylesheet: StyleSheet,
    pub body: Node,
    /// 本文をインデント付きで出力
    pub pretty: bool,
}

impl Document {
    pub fn new(body: Node) -> Self {
        Self {
            title: APP_TITLE.to_string(),
            stylesheet: StyleSheet::default(),
            body,
            pretty: false,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_stylesheet(mut self, stylesheet: StyleSheet) -> Self {
        self.stylesheet = stylesheet;
        self
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// テンプレートから呼ばれる。エスケープ済みHTML。
    fn body_html(&self) -> String {
        if self.pretty {
            render_pretty(&self.body).trim_end().to_string()
        } else {
            render_html(&self.body)
        }
    }

    pub fn to_html(&self) -> Result<String> {
        Ok(self.render()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::{navigation_view, root_view};

    #[test]
    fn test_default_stylesheet() {
        let doc = Document::new(root_view());
        assert_eq!(doc.stylesheet.as_str(), "App.css");
        assert_eq!(doc.title, "My React App");
        assert!(!doc.pretty);
    }

    #[test]
    fn test_render_head() {
        let doc = Document::new(root_view()).with_stylesheet(StyleSheet::new("site.css"));
        let html = doc.to_html().unwrap();
        assert!(html.starts_with("<!DOCTYPE html>\n<html lang=\"en\">\n<head>"));
        assert!(html.contains(r#"<link rel="stylesheet" href="site.css">"#));
        assert!(html.contains("<title>My React App</title>"));
    }

    #[test]
    fn test_body_embedded_unescaped() {
        let doc = Document::new(root_view());
        let html = doc.to_html().unwrap();
        let body = format!("<body>\n{}\n</body>", render_html(&root_view()));
        assert!(html.contains(&body));
    }

    #[test]
    fn test_title_and_stylesheet_escaped() {
        let doc = Document::new(navigation_view("<i>"))
            .with_title("Tom & Jerry")
            .with_stylesheet(StyleSheet::new("a\"b.css"));
        let html = doc.to_html().unwrap();
        assert!(html.contains("<title>Tom &amp; Jerry</title>"));
        assert!(html.contains(r#"href="a&quot;b.css""#));
        assert!(html.contains("<h1>&lt;i&gt;</h1>"));
    }

    #[test]
    fn test_pretty_body() {
        let doc = Document::new(root_view()).with_pretty(true);
        let html = doc.to_html().unwrap();
        assert!(html.contains("<body>\n<div class=\"App\">\n  <nav class=\"main-nav\">\n"));
        assert!(html.contains("</div>\n</body>"));
    }

    #[test]
    fn test_stylesheet_serde_transparent() {
        let json = serde_json::to_string(&StyleSheet::new("a.css")).unwrap();
        assert_eq!(json, "\"a.css\"");
    }
}
