use crate::reports::Table;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PageKey {
    Splash,
    Performances,
    Shows,
    Songs,
    Albums,
    Artists,
    People,
    Originals,
}

impl PageKey {
    /// Navigation order.
    pub const ALL: [PageKey; 8] = [
        PageKey::Splash,
        PageKey::Performances,
        PageKey::Shows,
        PageKey::Songs,
        PageKey::Albums,
        PageKey::Artists,
        PageKey::People,
        PageKey::Originals,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PageKey::Splash => "splash",
            PageKey::Performances => "performances",
            PageKey::Shows => "shows",
            PageKey::Songs => "songs",
            PageKey::Albums => "albums",
            PageKey::Artists => "artists",
            PageKey::People => "people",
            PageKey::Originals => "originals",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PageKey::Splash => "Home",
            PageKey::Performances => "Performances",
            PageKey::Shows => "Shows",
            PageKey::Songs => "Songs",
            PageKey::Albums => "Albums",
            PageKey::Artists => "Artists",
            PageKey::People => "People",
            PageKey::Originals => "Originals",
        }
    }

    pub fn href(&self) -> &'static str {
        match self {
            PageKey::Splash => "/",
            PageKey::Performances => "/performances",
            PageKey::Shows => "/shows",
            PageKey::Songs => "/songs",
            PageKey::Albums => "/albums",
            PageKey::Artists => "/artists",
            PageKey::People => "/people",
            PageKey::Originals => "/originals",
        }
    }
}

impl fmt::Display for PageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct UnknownPageKey(pub String);

impl FromStr for PageKey {
    type Err = UnknownPageKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PageKey::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| UnknownPageKey(s.to_owned()))
    }
}

/// A block of page content. Charts carry data and axis hints only, drawing
/// them is left to the frontend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Section {
    Text {
        title: Option<String>,
        paragraphs: Vec<String>,
    },
    Table {
        title: String,
        table: Table,
    },
    Chart {
        title: String,
        x: String,
        y: String,
        color: Option<String>,
        data: Table,
    },
}

impl Section {
    pub fn table<S: Into<String>>(title: S, table: Table) -> Section {
        Section::Table {
            title: title.into(),
            table,
        }
    }

    pub fn bar_chart<S: Into<String>>(title: S, data: Table, x: &str, y: &str) -> Section {
        Section::Chart {
            title: title.into(),
            x: x.to_owned(),
            y: y.to_owned(),
            color: None,
            data,
        }
    }

    pub fn colored_by(self, column: &str) -> Section {
        match self {
            Section::Chart {
                title, x, y, data, ..
            } => Section::Chart {
                title,
                x,
                y,
                color: Some(column.to_owned()),
                data,
            },
            other => other,
        }
    }

    pub fn title(&self) -> Option<&str> {
        match self {
            Section::Text { title, .. } => title.as_deref(),
            Section::Table { title, .. } | Section::Chart { title, .. } => Some(title),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Page {
    pub key: PageKey,
    pub name: &'static str,
    pub href: &'static str,
    pub title: String,
    pub sections: Vec<Section>,
}

impl Page {
    pub fn new(key: PageKey, title: &str, sections: Vec<Section>) -> Page {
        Page {
            key,
            name: key.name(),
            href: key.href(),
            title: title.to_owned(),
            sections,
        }
    }
}

/// One entry of the navigation bar.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavEntry {
    pub key: PageKey,
    pub name: &'static str,
    pub href: &'static str,
}
