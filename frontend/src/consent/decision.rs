use serde::{Deserialize, Serialize};

/// One of the four cookie categories a visitor can be asked about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ConsentCategory {
    Essential,
    Analytics,
    Marketing,
    Preferences,
}

impl ConsentCategory {
    pub const ALL: [ConsentCategory; 4] = [
        ConsentCategory::Essential,
        ConsentCategory::Analytics,
        ConsentCategory::Marketing,
        ConsentCategory::Preferences,
    ];

    /// Essential cookies are strictly functional and cannot be switched off.
    pub fn is_toggleable(self) -> bool {
        !matches!(self, ConsentCategory::Essential)
    }

    pub fn label(self) -> &'static str {
        match self {
            ConsentCategory::Essential => "Essential",
            ConsentCategory::Analytics => "Analytics",
            ConsentCategory::Marketing => "Marketing",
            ConsentCategory::Preferences => "Preferences",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ConsentCategory::Essential => {
                "Required for the site to work, e.g. remembering this cookie choice. Always on."
            }
            ConsentCategory::Analytics => {
                "Anonymous statistics about which pages are visited so we can improve the site."
            }
            ConsentCategory::Marketing => {
                "Used to measure our advertising and show you relevant offers on other sites."
            }
            ConsentCategory::Preferences => {
                "Remember settings such as language and personalise the content you see."
            }
        }
    }
}

/// The visitor's cookie decision.
///
/// Deserialization is strict: a stored record must carry exactly these four
/// boolean fields, anything else is rejected and treated as no decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConsentDecision {
    pub essential: bool,
    pub analytics: bool,
    pub marketing: bool,
    pub preferences: bool,
}

impl ConsentDecision {
    pub fn essential_only() -> Self {
        Self {
            essential: true,
            analytics: false,
            marketing: false,
            preferences: false,
        }
    }

    pub fn all_granted() -> Self {
        Self {
            essential: true,
            analytics: true,
            marketing: true,
            preferences: true,
        }
    }

    /// Returns the same decision with `essential` forced on.
    pub fn normalized(self) -> Self {
        Self {
            essential: true,
            ..self
        }
    }

    pub fn get(&self, category: ConsentCategory) -> bool {
        match category {
            ConsentCategory::Essential => self.essential,
            ConsentCategory::Analytics => self.analytics,
            ConsentCategory::Marketing => self.marketing,
            ConsentCategory::Preferences => self.preferences,
        }
    }

    /// Sets a toggleable category. Returns false (and changes nothing) for essential.
    pub fn set(&mut self, category: ConsentCategory, value: bool) -> bool {
        match category {
            ConsentCategory::Essential => return false,
            ConsentCategory::Analytics => self.analytics = value,
            ConsentCategory::Marketing => self.marketing = value,
            ConsentCategory::Preferences => self.preferences = value,
        }
        true
    }
}

impl Default for ConsentDecision {
    fn default() -> Self {
        Self::essential_only()
    }
}
