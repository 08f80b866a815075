//! Workflow categories for tool listings
//!
//! Categorisation is non-exclusive: every tool is tested against every
//! category's keywords, and lands in each one that matches. Tools that match
//! nothing fall into [`Category::Utilities`].

use std::collections::BTreeMap;
use std::fmt;

use crate::catalog::ToolDescriptor;

/// Workflow category, ordered as they are evaluated and displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Simulator,
    Device,
    MacOs,
    UiAutomation,
    SwiftPackages,
    ProjectManagement,
    LogCapture,
    Diagnostics,
    Utilities,
}

impl Category {
    /// Every keyword-driven category, in evaluation order
    pub const KEYWORD_CATEGORIES: [Category; 8] = [
        Category::Simulator,
        Category::Device,
        Category::MacOs,
        Category::UiAutomation,
        Category::SwiftPackages,
        Category::ProjectManagement,
        Category::LogCapture,
        Category::Diagnostics,
    ];

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Simulator => "Simulator Development",
            Self::Device => "Device Development",
            Self::MacOs => "macOS Development",
            Self::UiAutomation => "UI Automation",
            Self::SwiftPackages => "Swift Packages",
            Self::ProjectManagement => "Project Management",
            Self::LogCapture => "Log Capture",
            Self::Diagnostics => "System Diagnostics",
            Self::Utilities => "Utilities",
        }
    }

    /// Lowercase substrings that place a tool in this category
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Self::Simulator => &["sim", "simulator"],
            Self::Device => &["device", "dev"],
            Self::MacOs => &["mac", "macos"],
            Self::UiAutomation => &[
                "tap",
                "swipe",
                "screenshot",
                "describe_ui",
                "gesture",
                "button",
                "key_",
                "touch",
                "type_text",
            ],
            Self::SwiftPackages => &["swift_package"],
            Self::ProjectManagement => &[
                "discover_proj",
                "list_scheme",
                "show_build",
                "scaffold",
                "get_app_bundle",
                "get_mac_bundle",
            ],
            Self::LogCapture => &["log_cap"],
            Self::Diagnostics => &["doctor"],
            Self::Utilities => &[],
        }
    }

    /// Check whether a tool name falls in this category
    pub fn matches(&self, name: &str) -> bool {
        let name = name.to_lowercase();
        self.keywords().iter().any(|kw| name.contains(kw))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Categories a single tool name belongs to
pub fn categories_for(name: &str) -> Vec<Category> {
    let matched: Vec<Category> = Category::KEYWORD_CATEGORIES
        .into_iter()
        .filter(|c| c.matches(name))
        .collect();
    if matched.is_empty() {
        vec![Category::Utilities]
    } else {
        matched
    }
}

/// Group tools by category.
///
/// Empty categories are absent from the map; tools inside each category are
/// sorted by name.
pub fn categorize<'a, I>(tools: I) -> BTreeMap<Category, Vec<&'a ToolDescriptor>>
where
    I: IntoIterator<Item = &'a ToolDescriptor>,
{
    let mut groups: BTreeMap<Category, Vec<&'a ToolDescriptor>> = BTreeMap::new();
    for tool in tools {
        for category in categories_for(&tool.name) {
            groups.entry(category).or_default().push(tool);
        }
    }
    for members in groups.values_mut() {
        members.sort_by(|a, b| a.name.cmp(&b.name));
    }
    groups
}
