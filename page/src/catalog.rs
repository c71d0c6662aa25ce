//! Project catalog: the fixed list of project links, grouped by category.
//!
//! The catalog is read-only data. The built-in one is constructed once per
//! process and shared as `&'static Catalog`; a replacement can be injected
//! (for example from a config file) but is never mutated after that.
//!
//! # Example
//!
//! ```rust
//! use portfolio_page::catalog::{Catalog, Group};
//!
//! let catalog = Catalog::builtin();
//! assert_eq!(catalog.entries(Group::Games).len(), 6);
//! assert_eq!(catalog.group("games")[0].name(), "消消乐");
//! assert!(catalog.group("music").is_empty());
//! ```

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::components::{ICON_APP_WINDOW, ICON_GAME_CONTROLLER};

/// One project link tile.
///
/// Fields are private: an entry is fixed once built, and `url` doubles as
/// the entry's identity within its group.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectEntry {
    name: String,
    url: String,
    #[serde(default)]
    description: String,
}

impl ProjectEntry {
    /// Build an entry. Contents are not checked; see [`Catalog::validate`].
    pub fn new(
        name: impl Into<String>,
        url: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            description: description.into(),
        }
    }

    /// Display title.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Outbound link target, rendered verbatim.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Short text shown under the title.
    pub fn description(&self) -> &str {
        &self.description
    }
}

/// Catalog category. Each group renders as its own section.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Group {
    /// Browser games
    Games,
    /// Tools and visual experiments
    Apps,
}

impl Group {
    /// All groups in display order.
    pub const ALL: [Group; 2] = [Group::Games, Group::Apps];

    /// Stable lowercase key (`games` / `apps`).
    pub fn key(&self) -> &'static str {
        match self {
            Group::Games => "games",
            Group::Apps => "apps",
        }
    }

    /// Inverse of [`Group::key`]. Matching is exact and case-sensitive.
    pub fn from_key(key: &str) -> Option<Self> {
        Group::ALL.into_iter().find(|group| group.key() == key)
    }

    /// Section heading.
    pub fn title(&self) -> &'static str {
        match self {
            Group::Games => "我的AI游戏",
            Group::Apps => "我的AI应用",
        }
    }

    /// Line under the section heading.
    pub fn subtitle(&self) -> &'static str {
        match self {
            Group::Games => "探索充满创意的AI驱动游戏世界",
            Group::Apps => "高效实用的AI工具与可视化实验",
        }
    }

    /// SVG path data for the section icon.
    pub fn icon(&self) -> &'static str {
        match self {
            Group::Games => ICON_GAME_CONTROLLER,
            Group::Apps => ICON_APP_WINDOW,
        }
    }
}

/// Validation failures for catalogs that did not come from [`Catalog::builtin`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// Entry name is empty or whitespace.
    #[error("{group} entry #{position} has an empty name")]
    EmptyName {
        /// Group key
        group: &'static str,
        /// 1-based position within the group
        position: usize,
    },
    /// Url is not an `http`, `https` or `mailto` link.
    #[error("{group} entry '{name}' has an unsupported link '{url}' (expected http, https or mailto)")]
    InvalidUrl {
        /// Group key
        group: &'static str,
        /// Entry name
        name: String,
        /// Offending url
        url: String,
    },
}

/// Project entries grouped by category, in display order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Catalog {
    games: Vec<ProjectEntry>,
    apps: Vec<ProjectEntry>,
}

static BUILTIN: LazyLock<Catalog> = LazyLock::new(|| {
    let build = |rows: &[(&str, &str, &str)]| -> Vec<ProjectEntry> {
        rows.iter()
            .map(|(name, url, description)| ProjectEntry::new(*name, *url, *description))
            .collect()
    };
    Catalog::new(build(BUILTIN_GAMES), build(BUILTIN_APPS))
});

const BUILTIN_GAMES: &[(&str, &str, &str)] = &[
    ("消消乐", "https://match.tina-ai.xyz/", "经典三消益智游戏"),
    ("卡牌游戏", "https://card.tina-ai.xyz/", "策略卡牌对战"),
    ("数块消除", "https://sum.tina-ai.xyz/", "数学逻辑消除挑战"),
    ("新星防御", "https://tafang.tina-ai.xyz/", "科幻风格塔防游戏"),
    ("色彩敏感度", "https://color.tina-ai.xyz/", "视觉敏锐度测试"),
    ("MBTI人格测试", "https://gitd2p7yoixz4.ok.kimi.link/", "AI驱动的性格分析"),
];

const BUILTIN_APPS: &[(&str, &str, &str)] = &[
    ("在线抽奖", "https://www.doubao.com/share/code/201655d002efc315", "公平公正的随机抽奖工具"),
    ("一次函数可视化", "https://www.doubao.com/share/code/a0b1fb925ce2f00c", "数学函数动态演示"),
    ("方程3D可视化", "https://www.doubao.com/share/code/4f920f548a279f42", "三维空间方程渲染"),
    ("色彩敏感度测试", "https://www.doubao.com/share/code/cb6e6a8030739bad", "深度视觉测试工具"),
    ("单位换算工具", "https://www.doubao.com/share/code/172c2ec0a68789b7", "全能型单位转换助手"),
    ("单词听写助手", "https://www.doubao.com/share/code/1e2e90bb7283591e", "智能英语学习伴侣"),
];

impl Catalog {
    /// Catalog from ordered entry lists; order is display order.
    pub fn new(games: Vec<ProjectEntry>, apps: Vec<ProjectEntry>) -> Self {
        Self { games, apps }
    }

    /// Catalog with both groups empty.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The compiled-in catalog, built on first access.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// Entries of `group` in display order.
    pub fn entries(&self, group: Group) -> &[ProjectEntry] {
        match group {
            Group::Games => &self.games,
            Group::Apps => &self.apps,
        }
    }

    /// Entries for a group key. Unknown keys read as an empty group.
    pub fn group(&self, key: &str) -> &[ProjectEntry] {
        Group::from_key(key)
            .map(|group| self.entries(group))
            .unwrap_or(&[])
    }

    /// Every entry with its group, in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Group, &ProjectEntry)> {
        Group::ALL
            .into_iter()
            .flat_map(move |group| self.entries(group).iter().map(move |entry| (group, entry)))
    }

    /// Entry count across all groups.
    pub fn len(&self) -> usize {
        self.games.len() + self.apps.len()
    }

    /// True when every group is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Urls that occur more than once inside the same group.
    ///
    /// Both copies still render; this only feeds diagnostics.
    pub fn duplicate_urls(&self) -> Vec<(Group, String)> {
        let mut dups = Vec::new();
        for group in Group::ALL {
            let entries = self.entries(group);
            for (idx, entry) in entries.iter().enumerate() {
                let first_seen = entries[..idx].iter().all(|prev| prev.url != entry.url);
                let repeated = entries[idx + 1..].iter().any(|next| next.url == entry.url);
                if first_seen && repeated {
                    dups.push((group, entry.url.clone()));
                }
            }
        }
        dups
    }

    /// Check names are non-empty and urls are `http`, `https` or `mailto` links.
    pub fn validate(&self) -> Result<(), CatalogError> {
        for group in Group::ALL {
            for (position, entry) in self.entries(group).iter().enumerate() {
                if entry.name.trim().is_empty() {
                    return Err(CatalogError::EmptyName {
                        group: group.key(),
                        position: position + 1,
                    });
                }
                if !is_allowed_link(&entry.url) {
                    return Err(CatalogError::InvalidUrl {
                        group: group.key(),
                        name: entry.name.clone(),
                        url: entry.url.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

/// Link schemes a tile may point at.
const ALLOWED_SCHEMES: [&str; 3] = ["http", "https", "mailto"];

/// `scheme ":" rest` with an allowed scheme (case-insensitive) and a
/// non-empty rest. `http(s)` additionally needs `//` and a host.
fn is_allowed_link(url: &str) -> bool {
    let Some((scheme, rest)) = url.split_once(':') else {
        return false;
    };
    let scheme = scheme.to_ascii_lowercase();
    if !ALLOWED_SCHEMES.contains(&scheme.as_str()) || rest.is_empty() {
        return false;
    }
    match scheme.as_str() {
        "mailto" => true,
        _ => rest
            .strip_prefix("//")
            .is_some_and(|authority| !authority.is_empty() && !authority.starts_with('/')),
    }
}
