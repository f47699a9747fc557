//! 出力形式とファイル書き出し

use std::path::Path;
use std::str::FromStr;

use clap::ValueEnum;
use firstapp_common::{render_html, render_pretty, Document, Node, StyleSheet};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// HTML断片
    #[default]
    Html,
    /// ノード木のJSON
    Json,
    /// スタイルシート参照付きのHTMLページ
    Page,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Html => "html",
            OutputFormat::Json => "json",
            OutputFormat::Page => "page",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "html" => Ok(OutputFormat::Html),
            "json" => Ok(OutputFormat::Json),
            "page" => Ok(OutputFormat::Page),
            other => Err(AppError::UnknownFormat(other.to_string())),
        }
    }
}

/// ビューを指定形式の文字列にする
pub fn render(node: &Node, format: OutputFormat, pretty: bool, stylesheet: &StyleSheet) -> Result<String> {
    let out = match (format, pretty) {
        (OutputFormat::Html, false) => render_html(node),
        (OutputFormat::Html, true) => render_pretty(node),
        (OutputFormat::Json, false) => node.to_json()?,
        (OutputFormat::Json, true) => node.to_json_pretty()?,
        (OutputFormat::Page, pretty) => Document::new(node.clone())
            .with_stylesheet(stylesheet.clone())
            .with_pretty(pretty)
            .to_html()?,
    };
    Ok(out)
}

/// 出力先が無ければ標準出力
pub fn write_output(content: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            std::fs::write(path, content)?;
            log::debug!("{} bytes を書き込み: {}", content.len(), path.display());
        }
        None => {
            if content.ends_with('\n') {
                print!("{}", content);
            } else {
                println!("{}", content);
            }
        }
    }
    Ok(())
}
