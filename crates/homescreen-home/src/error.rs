use homescreen_ui::LayoutError;

#[derive(Debug, thiserror::Error)]
pub enum HomeError {
    #[error("invalid home config: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Layout(#[from] LayoutError),
}

pub type Result<T, E = HomeError> = std::result::Result<T, E>;
