//! User-agent classification.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Browser {
    Firefox,
    SamsungInternet,
    Opera,
    InternetExplorer,
    Edge,
    Chrome,
    Safari,
    Unknown,
}

/// Ordered precedence table; the first row with any matching marker wins.
const MARKERS: &[(&[&str], Browser)] = &[
    (&["Firefox"], Browser::Firefox),
    (&["SamsungBrowser"], Browser::SamsungInternet),
    (&["Opera", "OPR"], Browser::Opera),
    (&["Trident"], Browser::InternetExplorer),
    (&["Edge"], Browser::Edge),
    (&["Chrome"], Browser::Chrome),
    (&["Safari"], Browser::Safari),
];

impl Browser {
    pub fn classify(user_agent: &str) -> Self {
        MARKERS
            .iter()
            .find(|(markers, _)| markers.iter().any(|m| user_agent.contains(m)))
            .map(|(_, browser)| *browser)
            .unwrap_or(Self::Unknown)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Firefox => "Firefox",
            Self::SamsungInternet => "Samsung Internet",
            Self::Opera => "Opera",
            Self::InternetExplorer => "Internet Explorer",
            Self::Edge => "Edge",
            Self::Chrome => "Chrome",
            Self::Safari => "Safari",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Browser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
