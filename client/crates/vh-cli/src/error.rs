use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Config error: {0}")]
    Config(#[from] vh_config::ConfigError),

    #[error("{0}")]
    Client(#[from] vh_session::ClientError),

    #[error("{0}")]
    Session(#[from] vh_session::SessionError),

    #[error("{0}")]
    Editor(#[from] vh_session::EditorError),

    #[error("Logger error: {message}")]
    Logger { message: String },

    #[error("Error serializing response: {0}")]
    Output(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CliError>;
