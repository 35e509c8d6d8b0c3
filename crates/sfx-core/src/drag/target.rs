use serde::{Deserialize, Serialize};

/// Role of one element between the drag origin and the card root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementRole {
    Card,
    Button,
    Link,
    TextInput,
    Slider,
    Checkbox,
    /// Non-interactive content: labels, icons, waveform previews.
    Content,
}

impl ElementRole {
    pub fn is_interactive(&self) -> bool {
        matches!(
            self,
            ElementRole::Button
                | ElementRole::Link
                | ElementRole::TextInput
                | ElementRole::Slider
                | ElementRole::Checkbox
        )
    }
}

/// Where a drag gesture started, as the chain of roles from the origin
/// element up to (and including) the card root.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DragTarget {
    pub ancestry: Vec<ElementRole>,
}

impl DragTarget {
    pub fn new(ancestry: impl IntoIterator<Item = ElementRole>) -> Self {
        Self {
            ancestry: ancestry.into_iter().collect(),
        }
    }

    /// Drag started directly on the card surface.
    pub fn card() -> Self {
        Self::new([ElementRole::Card])
    }

    /// True when the origin is, or is nested inside, an interactive control.
    pub fn is_interactive(&self) -> bool {
        self.ancestry.iter().any(ElementRole::is_interactive)
    }
}
