use crate::board::OptionError;

/// Tunable behavior of the game manager.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameOptions {
    /// Only offer moves that keep the mover's king out of check. When false,
    /// any pseudo-legal move is accepted, including one that walks into check.
    pub enforce_king_safety: bool,
    /// Refuse selections and moves once checkmate has been reported.
    pub freeze_on_checkmate: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        GameOptions {
            enforce_king_safety: false,
            freeze_on_checkmate: true,
        }
    }
}

impl GameOptions {
    /// Options that only accept king-safe moves.
    #[must_use]
    pub fn strict() -> Self {
        GameOptions {
            enforce_king_safety: true,
            ..Self::default()
        }
    }

    /// Set an option by name. Names are case-insensitive and may contain
    /// spaces (`"Enforce King Safety"`); values are `true/false/1/0/on/off`.
    pub fn apply(&mut self, name: &str, value: &str) -> Result<(), OptionError> {
        let normalized: String = name
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_')
            .collect::<String>()
            .to_ascii_lowercase();
        let target = match normalized.as_str() {
            "enforcekingsafety" => &mut self.enforce_king_safety,
            "freezeoncheckmate" => &mut self.freeze_on_checkmate,
            _ => {
                return Err(OptionError::UnknownOption {
                    name: name.to_string(),
                })
            }
        };
        *target = match value.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "on" => true,
            "false" | "0" | "off" => false,
            _ => {
                return Err(OptionError::InvalidValue {
                    name: name.to_string(),
                    value: value.to_string(),
                })
            }
        };
        Ok(())
    }
}
