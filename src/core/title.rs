use rand::Rng;

pub const TITLE_OWNER: &str = "Vignesh B";

pub const SECTIONS: [(&str, &str); 5] = [
    ("home", "Home"),
    ("about", "About"),
    ("projects", "Projects"),
    ("skills", "Skills"),
    ("contact", "Contact"),
];

pub const AWAY_MESSAGES: [&str; 6] = [
    "Signal lost... 📡",
    "Surface breach detected! ⚠️",
    "System idle...",
    "Awaiting command...",
    "Radar silent...",
    "Come back to the deep! 🌊",
];

/// Document title for a section id, if the id is one we track.
pub fn title_for_section(id: &str) -> Option<String> {
    SECTIONS
        .iter()
        .find(|(sid, _)| *sid == id)
        .map(|(_, label)| format!("{} | {}", TITLE_OWNER, label))
}

/// Holds the real title while an idle message is showing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TitleState {
    saved: Option<String>,
}

impl TitleState {
    /// Page hidden: remember `current` and return the idle message to show.
    pub fn on_hidden<R: Rng>(&mut self, current: &str, rng: &mut R) -> &'static str {
        // a second hidden event without a visible in between keeps the original
        if self.saved.is_none() {
            self.saved = Some(current.to_owned());
        }
        AWAY_MESSAGES[rng.gen_range(0..AWAY_MESSAGES.len())]
    }

    /// Page visible again: the title to restore, if one was saved.
    pub fn on_visible(&mut self) -> Option<String> {
        self.saved.take()
    }

    /// A section came into view while hidden; restore to it instead.
    pub fn on_section(&mut self, title: String) -> Option<String> {
        match &mut self.saved {
            Some(saved) => {
                *saved = title;
                None
            }
            None => Some(title),
        }
    }
}
