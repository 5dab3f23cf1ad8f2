use std::fmt;

/// Visual style of a badge, matching the shields.io style names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeStyle {
    Flat,
    FlatSquare,
    ForTheBadge,
    Social,
    #[default]
    Plastic,
}

impl BadgeStyle {
    /// Parse a wire name. Anything unrecognized falls back to `plastic`.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("flat") => BadgeStyle::Flat,
            Some("flat-square") => BadgeStyle::FlatSquare,
            Some("for-the-badge") => BadgeStyle::ForTheBadge,
            Some("social") => BadgeStyle::Social,
            Some("plastic") => BadgeStyle::Plastic,
            _ => BadgeStyle::default(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BadgeStyle::Flat => "flat",
            BadgeStyle::FlatSquare => "flat-square",
            BadgeStyle::ForTheBadge => "for-the-badge",
            BadgeStyle::Social => "social",
            BadgeStyle::Plastic => "plastic",
        }
    }
}

impl fmt::Display for BadgeStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_round_trip() {
        for style in [
            BadgeStyle::Flat,
            BadgeStyle::FlatSquare,
            BadgeStyle::ForTheBadge,
            BadgeStyle::Social,
            BadgeStyle::Plastic,
        ] {
            assert_eq!(BadgeStyle::parse(Some(style.as_str())), style);
        }
    }

    #[test]
    fn unknown_is_plastic() {
        assert_eq!(BadgeStyle::parse(Some("bogus")), BadgeStyle::Plastic);
        assert_eq!(BadgeStyle::parse(Some("FLAT")), BadgeStyle::Plastic);
        assert_eq!(BadgeStyle::parse(None), BadgeStyle::Plastic);
    }
}
