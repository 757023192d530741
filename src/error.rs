use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("cannot list directory '{path}': {source}")]
    Enumeration {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("{0}")]
    General(String),
}

impl AppError {
    pub fn enumeration(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::Enumeration {
            path: path.to_string_lossy().to_string(),
            source,
        }
    }

    pub fn is_enumeration(&self) -> bool {
        matches!(self, Self::Enumeration { .. })
    }
}

impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
