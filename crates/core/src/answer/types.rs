use serde::Serialize;

/// What a single line of a model reply signals to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    /// "Question N réponse X" with X in a–e.
    CanonicalAnswer,
    /// "Pas sûr": the model could not settle on an option.
    NotConfident,
    /// "Recommence": the image could not be read.
    Illegible,
    /// Any other prose.
    Unrecognized,
}

impl LineKind {
    /// Whether the line carries one of the terminal signals the model is asked to emit.
    pub fn is_signal(self) -> bool {
        !matches!(self, LineKind::Unrecognized)
    }
}

/// The line picked out of a model reply, together with the reason it was picked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractedAnswer {
    /// The trimmed line.
    pub answer: String,
    /// `Unrecognized` when no signal line was found and the last line was used.
    pub kind: LineKind,
}
