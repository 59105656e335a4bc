/// Catalog listing the browser can show. Declaration order is tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    #[default]
    Popular,
    NowPlaying,
    TopRated,
    Upcoming,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Popular,
        Category::NowPlaying,
        Category::TopRated,
        Category::Upcoming,
    ];

    /// Path segment under `/movie/` on the catalog API.
    pub fn slug(self) -> &'static str {
        match self {
            Category::Popular => "popular",
            Category::NowPlaying => "now_playing",
            Category::TopRated => "top_rated",
            Category::Upcoming => "upcoming",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Popular => "Populer",
            Category::NowPlaying => "Sedang Tayang",
            Category::TopRated => "Rating Tertinggi",
            Category::Upcoming => "Akan Datang",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Category::Popular => "↗",
            Category::NowPlaying => "▶",
            Category::TopRated => "★",
            Category::Upcoming => "◷",
        }
    }

    pub fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|category| *category == self)
            .unwrap_or(0)
    }

    /// Category bound to the number key `n` (1-based).
    pub fn from_number(n: u32) -> Option<Category> {
        let index = usize::try_from(n).ok()?.checked_sub(1)?;
        Self::ALL.get(index).copied()
    }

    pub fn next(self) -> Category {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Category {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}
