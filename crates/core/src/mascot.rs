use serde::Serialize;

/// Kind of animal a registered mascot represents.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MascotKind {
    Cat,
    Dog,
    Bird,
    Pig,
    Other,
}

impl MascotKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cat => "cat",
            Self::Dog => "dog",
            Self::Bird => "bird",
            Self::Pig => "pig",
            Self::Other => "other",
        }
    }
}

impl std::fmt::Display for MascotKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A registered office mascot
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Mascot {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: MascotKind,
    pub description: &'static str,
    pub glyph: &'static str,
}

pub const MEOW_NORRIS: &str = "Meow Norris";
pub const WOOF_NORRIS: &str = "Woof Norris";

static MASCOTS: [Mascot; 4] = [
    Mascot {
        name: MEOW_NORRIS,
        kind: MascotKind::Cat,
        description: "Our office cat mascot - the original and most popular!",
        glyph: "🐱",
    },
    Mascot {
        name: WOOF_NORRIS,
        kind: MascotKind::Dog,
        description: "Our office dog mascot - loyal and funny!",
        glyph: "🐶",
    },
    Mascot {
        name: "Chirp Norris",
        kind: MascotKind::Bird,
        description: "Our office bird mascot - small but mighty!",
        glyph: "🐦",
    },
    Mascot {
        name: "Oink Norris",
        kind: MascotKind::Pig,
        description: "Our office pig mascot - smart and strong!",
        glyph: "🐷",
    },
];

/// Look up a registered mascot by exact, case-sensitive name.
pub fn get(name: &str) -> Option<&'static Mascot> {
    MASCOTS.iter().find(|mascot| mascot.name == name)
}

/// All registered mascots in registry order.
pub fn list() -> &'static [Mascot] {
    &MASCOTS
}

/// The mascot used when a caller does not ask for one.
pub fn default_mascot() -> &'static Mascot {
    &MASCOTS[0]
}

/// Resolve the display name for a request.
///
/// Surrounding whitespace is trimmed. Absent or blank names fall back to the
/// default mascot; any other name is returned as-is, registered or not.
pub fn resolve_name(name: Option<&str>) -> String {
    match name.map(str::trim) {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => default_mascot().name.to_string(),
    }
}
