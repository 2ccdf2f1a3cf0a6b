//! Input of the proof generation. Only the name of the picked file is kept,
//! its content is never read.

pub const NO_FILE_CHOSEN: &str = "No file chosen";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ChosenFile {
    #[default]
    None,
    Named(String),
}

impl ChosenFile {
    pub fn label(&self) -> &str {
        match self {
            Self::None => NO_FILE_CHOSEN,
            Self::Named(name) => name,
        }
    }
}

impl From<Option<String>> for ChosenFile {
    fn from(name: Option<String>) -> Self {
        match name {
            Some(name) => Self::Named(name),
            None => Self::None,
        }
    }
}

/// Opens the native dialog and returns the name of the picked file, if any.
pub async fn pick_proof_file() -> Option<String> {
    rfd::AsyncFileDialog::new()
        .set_title("Choose the secret information file...")
        .pick_file()
        .await
        .map(|fh| fh.file_name())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_is_file_name_or_sentinel() {
        assert_eq!(ChosenFile::default().label(), NO_FILE_CHOSEN);
        assert_eq!(
            ChosenFile::from(Some("secret.json".to_string())).label(),
            "secret.json"
        );
        assert_eq!(ChosenFile::from(None), ChosenFile::None);
    }
}
