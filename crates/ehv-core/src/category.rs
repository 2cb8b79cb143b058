//! Gallery categories: bit-flag codes and their names.
//!
//! Names are matched case-insensitively against an ordered alias table; the
//! first alias of each row is the canonical short name used in URLs. Anything
//! unrecognized maps to [`Category::Unknown`] in both directions.

pub const MISC: u32 = 0x1;
pub const DOUJINSHI: u32 = 0x2;
pub const MANGA: u32 = 0x4;
pub const ARTIST_CG: u32 = 0x8;
pub const GAME_CG: u32 = 0x10;
pub const IMAGE_SET: u32 = 0x20;
pub const COSPLAY: u32 = 0x40;
pub const ASIAN_PORN: u32 = 0x80;
pub const NON_H: u32 = 0x100;
pub const WESTERN: u32 = 0x200;
pub const UNKNOWN: u32 = 0x400;

/// Every searchable category (everything except `UNKNOWN`).
pub const ALL_CATEGORY: u32 = 0x3ff;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Misc,
    Doujinshi,
    Manga,
    ArtistCg,
    GameCg,
    ImageSet,
    Cosplay,
    AsianPorn,
    NonH,
    Western,
    Unknown,
}

/// Ordered lookup table. `Unknown` must stay last: it is the fallback and is
/// never matched by alias.
const TABLE: &[(Category, u32, &[&str])] = &[
    (Category::Misc, MISC, &["misc"]),
    (Category::Doujinshi, DOUJINSHI, &["doujinshi"]),
    (Category::Manga, MANGA, &["manga"]),
    (Category::ArtistCg, ARTIST_CG, &["artistcg", "Artist CG Sets"]),
    (Category::GameCg, GAME_CG, &["gamecg", "Game CG Sets"]),
    (Category::ImageSet, IMAGE_SET, &["imageset", "Image Sets"]),
    (Category::Cosplay, COSPLAY, &["cosplay"]),
    (Category::AsianPorn, ASIAN_PORN, &["asianporn", "Asian Porn"]),
    (Category::NonH, NON_H, &["non-h"]),
    (Category::Western, WESTERN, &["western"]),
    (Category::Unknown, UNKNOWN, &["unknown"]),
];

impl Category {
    /// All categories in table order, `Unknown` last.
    pub fn all() -> impl Iterator<Item = Category> {
        TABLE.iter().map(|(c, _, _)| *c)
    }

    fn row(self) -> &'static (Category, u32, &'static [&'static str]) {
        // The table covers every variant.
        TABLE
            .iter()
            .find(|(c, _, _)| *c == self)
            .unwrap_or(&TABLE[TABLE.len() - 1])
    }

    pub fn code(self) -> u32 {
        self.row().1
    }

    /// Canonical short name, as used in URL paths.
    pub fn name(self) -> &'static str {
        self.row().2[0]
    }

    /// Human-readable name where the site uses one ("Artist CG Sets").
    pub fn long_name(self) -> Option<&'static str> {
        self.row().2.get(1).copied()
    }

    /// Every accepted spelling, canonical first.
    pub fn aliases(self) -> &'static [&'static str] {
        self.row().2
    }

    pub fn from_name(name: &str) -> Category {
        let (known, fallback) = TABLE.split_at(TABLE.len() - 1);
        known
            .iter()
            .find(|(_, _, aliases)| aliases.iter().any(|a| a.eq_ignore_ascii_case(name)))
            .unwrap_or(&fallback[0])
            .0
    }

    pub fn from_code(code: u32) -> Category {
        TABLE
            .iter()
            .find(|(_, c, _)| *c == code)
            .unwrap_or(&TABLE[TABLE.len() - 1])
            .0
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.long_name().unwrap_or(self.name()))
    }
}

/// Category code for a name or long name; `UNKNOWN` when nothing matches.
pub fn category_code_from_name(name: &str) -> u32 {
    Category::from_name(name).code()
}

/// Canonical short name for a code; `"unknown"` when nothing matches.
pub fn category_name_from_code(code: u32) -> &'static str {
    Category::from_code(code).name()
}
