//! HTMLシリアライズ
//!
//! ノード木をHTML文字列へ変換する。テキストと属性値は askama の
//! HTMLエスケーパでエスケープする。属性はキー順で出力されるため出力は常に同一。

use std::fmt::{self, Write};

use askama::{Html, MarkupDisplay};

use crate::node::{Element, Node};

/// 1行HTMLとして出力
pub fn render_html(node: &Node) -> String {
    node.to_string()
}

/// インデント付きHTML（2スペース、1ノード1行）
pub fn render_pretty(node: &Node) -> String {
    let mut out = String::new();
    write_pretty(&mut out, node, 0);
    out
}

/// テキストノード用エスケープ（askama の HTML エスケーパ）
pub fn escape_text(text: &str) -> String {
    MarkupDisplay::new_unsafe(text, Html).to_string()
}

pub fn escape_attr(value: &str) -> String {
    escape_text(value)
}

fn write_open_tag(f: &mut impl Write, el: &Element) -> fmt::Result {
    write!(f, "<{}", el.tag.as_str())?;
    for (key, value) in &el.attrs {
        write!(f, " {}=\"{}\"", key, escape_attr(value))?;
    }
    f.write_char('>')
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_open_tag(f, self)?;
        for child in &self.children {
            write!(f, "{}", child)?;
        }
        write!(f, "</{}>", self.tag.as_str())
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Element(el) => write!(f, "{}", el),
            Node::Text(text) => f.write_str(&escape_text(text)),
        }
    }
}

fn write_pretty(out: &mut String, node: &Node, depth: usize) {
    let indent = "  ".repeat(depth);
    match node {
        Node::Text(text) => {
            // String への書き込みは失敗しない
            let _ = writeln!(out, "{}{}", indent, escape_text(text));
        }
        Node::Element(el) => {
            out.push_str(&indent);
            let _ = write_open_tag(out, el);
            // テキスト1つだけの要素は1行にまとめる
            match el.children.as_slice() {
                [] => {}
                [Node::Text(text)] => out.push_str(&escape_text(text)),
                children => {
                    out.push('\n');
                    for child in children {
                        write_pretty(out, child, depth + 1);
                    }
                    out.push_str(&indent);
                }
            }
            let _ = writeln!(out, "</{}>", el.tag.as_str());
        }
    }
}
