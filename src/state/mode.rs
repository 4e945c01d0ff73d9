/// Interaction mode. Exactly one mode is active at a time; transitions go
/// through `AppState` so that the selection highlight is always cleared
/// when the mode changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Idle,
    Draw,
    Move,
    VertexEdit,
}

impl Mode {
    /// Text shown in the status bar for this mode.
    pub fn label(self) -> &'static str {
        match self {
            Mode::Idle => "",
            Mode::Draw => "Draw Mode",
            Mode::Move => "Move Mode",
            Mode::VertexEdit => "Vertex Edit Mode",
        }
    }

    pub fn is_drawing(self) -> bool {
        self == Mode::Draw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle() {
        assert_eq!(Mode::default(), Mode::Idle);
        assert_eq!(Mode::default().label(), "");
    }

    #[test]
    fn test_labels() {
        assert_eq!(Mode::Draw.label(), "Draw Mode");
        assert_eq!(Mode::Move.label(), "Move Mode");
        assert_eq!(Mode::VertexEdit.label(), "Vertex Edit Mode");
    }
}
