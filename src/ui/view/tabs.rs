//! Navigation sections and sidebar entries

use strum::IntoEnumIterator;

/// The section shown in the content area. Sidebar order is declaration order.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, strum::Display, strum::EnumIter)]
pub enum ActiveTab {
    #[default]
    Dashboard,
    Students,
    Courses,
    Reports,
    #[strum(to_string = "Import Data")]
    Upload,
}

impl ActiveTab {
    /// Zero-based position in the sidebar.
    pub fn index(self) -> usize {
        Self::iter().position(|tab| tab == self).unwrap_or(0)
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::iter().nth(index)
    }

    /// Number key selecting this tab ('1' for the first entry).
    pub fn hotkey(self) -> char {
        char::from_digit(self.index() as u32 + 1, 10).unwrap_or('?')
    }

    pub fn from_hotkey(key: char) -> Option<Self> {
        let digit = key.to_digit(10)? as usize;
        digit.checked_sub(1).and_then(Self::from_index)
    }

    /// The entry below this one, wrapping around.
    pub fn next(self) -> Self {
        let count = Self::iter().count();
        Self::from_index((self.index() + 1) % count).unwrap_or_default()
    }

    /// The entry above this one, wrapping around.
    pub fn previous(self) -> Self {
        let count = Self::iter().count();
        Self::from_index((self.index() + count - 1) % count).unwrap_or_default()
    }
}

/// Anything the user can click in the sidebar.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SidebarEntry {
    Tab(ActiveTab),
    Logout,
}

impl SidebarEntry {
    /// All entries, top to bottom.
    pub fn all() -> Vec<SidebarEntry> {
        ActiveTab::iter()
            .map(SidebarEntry::Tab)
            .chain(std::iter::once(SidebarEntry::Logout))
            .collect()
    }

    pub fn label(&self) -> String {
        match self {
            SidebarEntry::Tab(tab) => tab.to_string(),
            SidebarEntry::Logout => "Log out".to_string(),
        }
    }
}
