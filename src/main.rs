use clap::Parser;
use firstapp::{cli, config, error, output};
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use firstapp_common::{navigation_view, root_view, NAV_LINKS};

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    if let Err(e) = run(cli) {
        eprintln!("エラー: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Render { format, pretty, output: out_path } => {
            let config = Config::load_or_default();
            let format = format.unwrap_or(config.default_format);
            log::debug!("ルートビューを {} で出力", format.as_str());

            let content = output::render(&root_view(), format, pretty || config.pretty, &config.stylesheet())?;
            output::write_output(&content, out_path.as_deref())?;

            if let Some(path) = out_path {
                println!("✔ 出力しました: {}", path.display());
            }
        }

        Commands::Nav { title, format, pretty, output: out_path } => {
            let config = Config::load_or_default();
            let format = format.unwrap_or(config.default_format);
            if title.is_empty() {
                log::warn!("タイトルが空です。空の見出しを出力します");
            }
            log::debug!("ナビゲーションビュー (title={:?}) を {} で出力", title, format.as_str());

            let content = output::render(&navigation_view(&title), format, pretty || config.pretty, &config.stylesheet())?;
            output::write_output(&content, out_path.as_deref())?;

            if let Some(path) = out_path {
                println!("✔ 出力しました: {}", path.display());
            }
        }

        Commands::Links => {
            for link in NAV_LINKS.iter() {
                println!("{} -> {}", link.label, link.href);
            }
        }

        Commands::Config { set_stylesheet, set_format, show } => {
            // 壊れた設定ファイルもここで上書きして直せるようにする
            let mut config = Config::load_or_default();
            let mut changed = false;

            if let Some(name) = set_stylesheet {
                config.set_stylesheet(&name)?;
                changed = true;
            }

            if let Some(format) = set_format {
                config.set_format(&format)?;
                changed = true;
            }

            if changed {
                config.save()?;
                println!("✔ 設定を保存しました: {}", Config::config_path()?.display());
            }

            if show || !changed {
                println!("設定:");
                println!("  スタイルシート: {}", config.stylesheet().as_str());
                println!("  出力形式: {}", config.default_format.as_str());
                println!("  インデント: {}", if config.pretty { "有効" } else { "無効" });
            }
        }
    }

    Ok(())
}
