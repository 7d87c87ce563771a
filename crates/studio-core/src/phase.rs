use serde::Serialize;

/// One numbered step of the roadmap, built from a single milestone document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Phase {
    pub number: u32,
    pub name: String,
    /// The milestone objective, collapsed into one paragraph.
    pub focus: String,
    /// Action items in document order. Never empty.
    pub highlights: Vec<String>,
}

impl Phase {
    pub fn new(
        number: u32,
        name: impl Into<String>,
        focus: impl Into<String>,
        highlights: Vec<String>,
    ) -> Self {
        Self {
            number,
            name: name.into(),
            focus: focus.into(),
            highlights,
        }
    }

    /// Render as a Markdown section with the highlights as a nested list.
    pub fn to_markdown(&self) -> String {
        let bullets = self
            .highlights
            .iter()
            .map(|item| format!("  - {item}"))
            .collect::<Vec<_>>()
            .join("\n");
        format!(
            "### Phase {} – {}\n{}\n\n{}",
            self.number, self.name, self.focus, bullets
        )
    }
}
