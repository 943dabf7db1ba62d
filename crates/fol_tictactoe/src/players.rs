//! Player display names and their validation.

use super::types::Mark;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

/// Name validation failure at game start.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display,
    derive_more::Error,
)]
pub enum ValidationError {
    /// The name for this mark was empty or whitespace.
    #[display("Please enter names for both players!")]
    BlankName(#[error(not(source))] Mark),
}

/// Display names for both marks. Never blank once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlayerNames {
    /// Name of the X player.
    x: String,
    /// Name of the O player.
    o: String,
}

impl PlayerNames {
    /// Trims both names and rejects blanks, X first.
    #[instrument(skip(x, o))]
    pub fn new(x: &str, o: &str) -> Result<Self, ValidationError> {
        let x = x.trim();
        let o = o.trim();
        if x.is_empty() {
            warn!("Blank name for X");
            return Err(ValidationError::BlankName(Mark::X));
        }
        if o.is_empty() {
            warn!("Blank name for O");
            return Err(ValidationError::BlankName(Mark::O));
        }
        Ok(Self {
            x: x.to_string(),
            o: o.to_string(),
        })
    }

    /// Returns the display name for a mark.
    pub fn name(&self, mark: Mark) -> &str {
        match mark {
            Mark::X => &self.x,
            Mark::O => &self.o,
        }
    }
}
