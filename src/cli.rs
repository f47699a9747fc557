use clap::{Parser, Subcommand};
use crate::output::OutputFormat;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "firstapp")]
#[command(about = "ナビゲーションとウェルカムページをレンダリング", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// ルートビュー（ナビ + ウェルカム）を出力
    Render {
        /// 出力形式（省略時は設定値）
        #[arg(short, long)]
        format: Option<OutputFormat>,

        /// インデント付きで出力
        #[arg(short, long)]
        pretty: bool,

        /// 出力ファイル（省略時は標準出力）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// ナビゲーションビューのみ出力
    Nav {
        /// 見出しタイトル（空文字も可）
        #[arg(short, long, default_value = firstapp_common::APP_TITLE)]
        title: String,

        /// 出力形式（省略時は設定値）
        #[arg(short, long)]
        format: Option<OutputFormat>,

        /// インデント付きで出力
        #[arg(short, long)]
        pretty: bool,

        /// 出力ファイル（省略時は標準出力）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// ナビゲーションリンク一覧を表示
    Links,

    /// 設定を表示/編集
    Config {
        /// スタイルシート名を設定
        #[arg(long)]
        set_stylesheet: Option<String>,

        /// デフォルト出力形式を設定 (html/json/page)
        #[arg(long)]
        set_format: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_nav_default_title() {
        let cli = Cli::parse_from(["firstapp", "nav"]);
        match cli.command {
            Commands::Nav { title, format, .. } => {
                assert_eq!(title, "My React App");
                assert_eq!(format, None);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_nav_empty_title() {
        let cli = Cli::parse_from(["firstapp", "nav", "--title", ""]);
        assert!(matches!(cli.command, Commands::Nav { ref title, .. } if title.is_empty()));
    }

    #[test]
    fn test_render_args() {
        let cli = Cli::parse_from(["firstapp", "-v", "render", "-f", "page", "--pretty", "-o", "out/index.html"]);
        assert!(cli.verbose);
        match cli.command {
            Commands::Render { format, pretty, output } => {
                assert_eq!(format, Some(OutputFormat::Page));
                assert!(pretty);
                assert_eq!(output, Some(PathBuf::from("out/index.html")));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_unknown_format_rejected() {
        assert!(Cli::try_parse_from(["firstapp", "render", "--format", "pdf"]).is_err());
    }
}
