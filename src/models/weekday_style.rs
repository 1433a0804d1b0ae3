use serde::Serialize;

/// How the weekday is printed next to the date header.
///
/// Read from the `show_weekday` config value:
///   None   → no weekday
///   Short  → Mo, Tu, We, ...
///   Medium → Mon, Tue, Wed, ...
///   Long   → Monday, Tuesday, ...
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
pub enum WeekdayStyle {
    None,
    Short,
    Medium,
    #[default]
    Long,
}

impl WeekdayStyle {
    pub fn from_code(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "none" | "" => Some(Self::None),
            "short" | "s" => Some(Self::Short),
            "medium" | "m" => Some(Self::Medium),
            "long" | "l" => Some(Self::Long),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WeekdayStyle::None => "None",
            WeekdayStyle::Short => "Short",
            WeekdayStyle::Medium => "Medium",
            WeekdayStyle::Long => "Long",
        }
    }
}
