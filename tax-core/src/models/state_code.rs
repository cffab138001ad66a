use serde::{Deserialize, Serialize};

/// States with a modelled income tax schedule.
///
/// Any other two-letter code is accepted by the estimators and treated as a
/// state without income tax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StateCode {
    Ca,
    Ny,
    Wa,
    Fl,
}

const SUPPORTED_STATES: &[(StateCode, &str)] = &[
    (StateCode::Ca, "California"),
    (StateCode::Ny, "New York"),
    (StateCode::Wa, "Washington (no income tax)"),
    (StateCode::Fl, "Florida (no income tax)"),
];

/// Supported state codes paired with their display names, in menu order.
pub fn supported_states() -> &'static [(StateCode, &'static str)] {
    SUPPORTED_STATES
}

impl StateCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ca => "CA",
            Self::Ny => "NY",
            Self::Wa => "WA",
            Self::Fl => "FL",
        }
    }

    pub fn display_name(&self) -> &'static str {
        SUPPORTED_STATES
            .iter()
            .find(|(code, _)| code == self)
            .map(|(_, name)| *name)
            .unwrap_or_else(|| self.as_str())
    }

    /// Case-insensitive lookup; `None` for codes without a schedule.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "CA" => Some(Self::Ca),
            "NY" => Some(Self::Ny),
            "WA" => Some(Self::Wa),
            "FL" => Some(Self::Fl),
            _ => None,
        }
    }
}

impl std::fmt::Display for StateCode {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_accepts_lowercase() {
        assert_eq!(StateCode::parse("ca"), Some(StateCode::Ca));
        assert_eq!(StateCode::parse(" ny"), Some(StateCode::Ny));
    }

    #[test]
    fn parse_returns_none_for_unmodelled_state() {
        assert_eq!(StateCode::parse("TX"), None);
    }

    #[test]
    fn supported_states_lists_every_code_once() {
        let codes: Vec<_> = supported_states().iter().map(|(c, _)| c.as_str()).collect();

        assert_eq!(codes, vec!["CA", "NY", "WA", "FL"]);
    }

    #[test]
    fn display_name_comes_from_supported_list() {
        assert_eq!(StateCode::Wa.display_name(), "Washington (no income tax)");
    }
}
