use thiserror::Error;

/// Per-file extraction failure.
///
/// Both variants are fatal for the file they name, and only for that file:
/// the batch extractor records them and keeps going. A missing or unreadable
/// file is not an error at all, it simply yields no fragments.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The template region could not be parsed. Offsets are bytes into the
    /// whole file.
    #[error("{file}: failed to parse template region at byte {offset}: {detail}")]
    TemplateParse {
        file: String,
        offset: usize,
        detail: String,
    },

    /// The script parser gave up entirely. Script parsing is best-effort, so
    /// this only fires on unrecoverable input.
    #[error("{file}: failed to parse script: {detail}")]
    ScriptParse { file: String, detail: String },
}
