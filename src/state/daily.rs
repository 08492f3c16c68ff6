//! Daily Content
//!
//! The `daily_content/today` document carries up to three optional snippets
//! and a theme name. The snippets become the ordered item list the daily
//! toast cycles through: quote first, then tip, then achievement, skipping
//! whichever fields are absent or blank.

/// Singleton daily-content document as stored
#[derive(Clone, Debug, Default, serde::Deserialize)]
pub struct DailyContentDoc {
    #[serde(default)]
    pub theme: Option<String>,
    #[serde(default)]
    pub quote: Option<String>,
    #[serde(default)]
    pub tip: Option<String>,
    #[serde(default)]
    pub achievement: Option<String>,
}

/// Which daily-content field an item came from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Quote,
    Tip,
    Achievement,
}

impl ToastKind {
    pub fn label(self) -> &'static str {
        match self {
            ToastKind::Quote => "Quote",
            ToastKind::Tip => "Tip",
            ToastKind::Achievement => "Achievement",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            ToastKind::Quote => "❝",
            ToastKind::Tip => "💡",
            ToastKind::Achievement => "🏅",
        }
    }
}

/// One entry in the daily toast rotation
#[derive(Clone, Debug, PartialEq)]
pub struct DailyToastItem {
    pub kind: ToastKind,
    pub content: String,
}

/// Build the rotation list from a daily-content document.
///
/// Field priority is fixed: quote, tip, achievement. Absent and
/// whitespace-only fields produce no item.
pub fn build_toast_items(doc: &DailyContentDoc) -> Vec<DailyToastItem> {
    let fields = [
        (ToastKind::Quote, doc.quote.as_deref()),
        (ToastKind::Tip, doc.tip.as_deref()),
        (ToastKind::Achievement, doc.achievement.as_deref()),
    ];

    fields
        .into_iter()
        .filter_map(|(kind, value)| {
            let content = value?.trim();
            if content.is_empty() {
                return None;
            }
            Some(DailyToastItem {
                kind,
                content: content.to_string(),
            })
        })
        .collect()
}

/// Named cosmetic style applied to the daily toast banner
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastTheme {
    #[default]
    Default,
    Soft,
    Dark,
    Ocean,
    Sunset,
    Forest,
}

impl ToastTheme {
    /// Resolve a stored theme name; empty or unknown names fall back to the
    /// default style
    pub fn from_name(name: &str) -> Self {
        match name {
            "soft" => ToastTheme::Soft,
            "dark" => ToastTheme::Dark,
            "ocean" => ToastTheme::Ocean,
            "sunset" => ToastTheme::Sunset,
            "forest" => ToastTheme::Forest,
            _ => ToastTheme::Default,
        }
    }

    /// Inline style for the toast banner
    pub fn style(self) -> &'static str {
        match self {
            ToastTheme::Default => "background: rgba(25, 24, 24, 0.95); color: white;",
            ToastTheme::Soft => {
                "background: linear-gradient(135deg, #f5f7fa 0%, #e4edf5 100%); color: #2c3e50;"
            }
            ToastTheme::Dark => "background: #1a1a2e; color: white;",
            ToastTheme::Ocean => {
                "background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); color: white;"
            }
            ToastTheme::Sunset => {
                "background: linear-gradient(135deg, #ff9a9e 0%, #fecfef 100%); color: #2c3e50;"
            }
            ToastTheme::Forest => {
                "background: linear-gradient(135deg, #1d976c 0%, #93f9b9 100%); color: white;"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_skips_missing_fields_in_order() {
        let doc = DailyContentDoc {
            theme: None,
            quote: Some("Q".to_string()),
            tip: None,
            achievement: Some("A".to_string()),
        };

        let items = build_toast_items(&doc);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].kind, ToastKind::Quote);
        assert_eq!(items[0].content, "Q");
        assert_eq!(items[1].kind, ToastKind::Achievement);
        assert_eq!(items[1].content, "A");
    }

    #[test]
    fn test_build_ignores_blank_fields() {
        let doc = DailyContentDoc {
            theme: None,
            quote: Some("   ".to_string()),
            tip: Some("drink water".to_string()),
            achievement: None,
        };

        let items = build_toast_items(&doc);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].kind, ToastKind::Tip);
    }

    #[test]
    fn test_build_empty_doc() {
        assert!(build_toast_items(&DailyContentDoc::default()).is_empty());
    }

    #[test]
    fn test_theme_names() {
        assert_eq!(ToastTheme::from_name("soft"), ToastTheme::Soft);
        assert_eq!(ToastTheme::from_name("dark"), ToastTheme::Dark);
        assert_eq!(ToastTheme::from_name("ocean"), ToastTheme::Ocean);
        assert_eq!(ToastTheme::from_name("sunset"), ToastTheme::Sunset);
        assert_eq!(ToastTheme::from_name("forest"), ToastTheme::Forest);
        assert_eq!(ToastTheme::from_name(""), ToastTheme::Default);
        assert_eq!(ToastTheme::from_name("neon"), ToastTheme::Default);
    }

    #[test]
    fn test_theme_styles_distinct() {
        let themes = [
            ToastTheme::Default,
            ToastTheme::Soft,
            ToastTheme::Dark,
            ToastTheme::Ocean,
            ToastTheme::Sunset,
            ToastTheme::Forest,
        ];
        for (i, a) in themes.iter().enumerate() {
            for b in &themes[i + 1..] {
                assert_ne!(a.style(), b.style());
            }
        }
    }
}
