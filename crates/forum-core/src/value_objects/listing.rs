//! Post listing - ordering, filters and paging for the front page

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::ids::{TagId, UserId};

/// Posts per page when the caller does not say
pub const DEFAULT_PER_PAGE: u32 = 10;
/// Largest page a caller may request
pub const MAX_PER_PAGE: u32 = 100;

/// Column a listing is ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    CreatedAt,
    Likes,
    Dislikes,
}

/// Ordering of a post listing
///
/// Count orderings read the stored counters, so they follow every committed
/// reaction without recomputing anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PostSort {
    #[default]
    DateDesc,
    DateAsc,
    LikesDesc,
    LikesAsc,
    DislikesDesc,
    DislikesAsc,
}

impl PostSort {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DateDesc => "date_desc",
            Self::DateAsc => "date_asc",
            Self::LikesDesc => "likes_desc",
            Self::LikesAsc => "likes_asc",
            Self::DislikesDesc => "dislikes_desc",
            Self::DislikesAsc => "dislikes_asc",
        }
    }

    pub const fn key(self) -> SortKey {
        match self {
            Self::DateDesc | Self::DateAsc => SortKey::CreatedAt,
            Self::LikesDesc | Self::LikesAsc => SortKey::Likes,
            Self::DislikesDesc | Self::DislikesAsc => SortKey::Dislikes,
        }
    }

    pub const fn is_descending(self) -> bool {
        matches!(self, Self::DateDesc | Self::LikesDesc | Self::DislikesDesc)
    }
}

impl fmt::Display for PostSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error when a sort parameter names no known ordering
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort order: {0}")]
pub struct UnknownPostSort(pub String);

impl FromStr for PostSort {
    type Err = UnknownPostSort;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "date" | "date_desc" => Ok(Self::DateDesc),
            "date_asc" => Ok(Self::DateAsc),
            "likes_desc" => Ok(Self::LikesDesc),
            "likes_asc" => Ok(Self::LikesAsc),
            "dislikes_desc" => Ok(Self::DislikesDesc),
            "dislikes_asc" => Ok(Self::DislikesAsc),
            other => Err(UnknownPostSort(other.to_string())),
        }
    }
}

/// Which published posts to list and in what order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostFilter {
    pub sort: PostSort,
    /// Case-insensitive substring of the title or content
    pub search: Option<String>,
    pub author_id: Option<UserId>,
    pub tag_id: Option<TagId>,
    /// 1-based
    pub page: u32,
    pub per_page: u32,
}

impl Default for PostFilter {
    fn default() -> Self {
        Self {
            sort: PostSort::default(),
            search: None,
            author_id: None,
            tag_id: None,
            page: 1,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl PostFilter {
    pub fn sorted(sort: PostSort) -> Self {
        Self {
            sort,
            ..Self::default()
        }
    }

    /// Search term with surrounding whitespace removed; blank terms match everything
    pub fn search_term(&self) -> Option<&str> {
        self.search.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }

    pub fn limit(&self) -> i64 {
        i64::from(self.per_page.clamp(1, MAX_PER_PAGE))
    }

    pub fn offset(&self) -> i64 {
        i64::from(self.page.max(1) - 1) * self.limit()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_parse() {
        assert_eq!("likes_desc".parse::<PostSort>(), Ok(PostSort::LikesDesc));
        assert_eq!("date".parse::<PostSort>(), Ok(PostSort::DateDesc));
        assert_eq!("dislikes_asc".parse::<PostSort>(), Ok(PostSort::DislikesAsc));
        assert_eq!(
            "title".parse::<PostSort>(),
            Err(UnknownPostSort("title".to_string()))
        );
    }

    #[test]
    fn test_sort_key_and_direction() {
        assert_eq!(PostSort::LikesAsc.key(), SortKey::Likes);
        assert!(!PostSort::LikesAsc.is_descending());
        assert_eq!(PostSort::default().key(), SortKey::CreatedAt);
        assert!(PostSort::default().is_descending());
    }

    #[test]
    fn test_paging() {
        let filter = PostFilter {
            page: 3,
            per_page: 20,
            ..PostFilter::default()
        };
        assert_eq!(filter.limit(), 20);
        assert_eq!(filter.offset(), 40);

        let clamped = PostFilter {
            page: 0,
            per_page: 1000,
            ..PostFilter::default()
        };
        assert_eq!(clamped.limit(), i64::from(MAX_PER_PAGE));
        assert_eq!(clamped.offset(), 0);
    }

    #[test]
    fn test_blank_search_is_ignored() {
        let filter = PostFilter {
            search: Some("   ".to_string()),
            ..PostFilter::default()
        };
        assert_eq!(filter.search_term(), None);

        let filter = PostFilter {
            search: Some(" rust ".to_string()),
            ..PostFilter::default()
        };
        assert_eq!(filter.search_term(), Some("rust"));
    }
}
