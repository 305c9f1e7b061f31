//! In-page navigation targets. Desktop links and the mobile panel both render from
//! [`Section::ALL`], and each section component uses [`Section::anchor`] as its id, so a
//! link can never point at a section that does not exist.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Makers,
    Products,
    Contact,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Makers, Section::Products, Section::Contact];

    /// Element id of the section.
    pub fn anchor(self) -> &'static str {
        match self {
            Self::Makers => "makers",
            Self::Products => "products",
            Self::Contact => "contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.anchor())
    }
}
