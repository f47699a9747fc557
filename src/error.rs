use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ホームディレクトリが見つかりません")]
    HomeNotFound,

    #[error("不明な出力形式: {0} (html/json/page)")]
    UnknownFormat(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("レンダリングエラー: {0}")]
    Render(#[from] firstapp_common::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
