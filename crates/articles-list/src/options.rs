use std::num::NonZeroUsize;

/// Options of an [`ArticlesList`](crate::ArticlesList).
///
/// ## Example
/// ```rs
/// use blog_articles_list::ListOptions;
///
/// let options = ListOptions {
///     page_size: NonZeroUsize::new(10).unwrap(),
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListOptions {
    /// Number of articles shown per page. Defaults to `1`.
    pub page_size: NonZeroUsize,
}

impl ListOptions {
    /// Options read from the `data-page-size` attribute of the hosting element.
    ///
    /// Anything that isn't a positive integer keeps the default page size.
    pub fn from_page_size_attribute(raw: Option<&str>) -> Self {
        let page_size = raw
            .and_then(|raw| raw.trim().parse::<NonZeroUsize>().ok())
            .unwrap_or(NonZeroUsize::MIN);

        Self { page_size }
    }
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            page_size: NonZeroUsize::MIN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_size_attribute() {
        assert_eq!(
            ListOptions::from_page_size_attribute(Some("10")).page_size.get(),
            10
        );
        assert_eq!(
            ListOptions::from_page_size_attribute(Some(" 3 ")).page_size.get(),
            3
        );
    }

    #[test]
    fn test_invalid_page_size_attribute_keeps_default() {
        for raw in [None, Some(""), Some("0"), Some("-2"), Some("ten")] {
            assert_eq!(ListOptions::from_page_size_attribute(raw), ListOptions::default());
        }
    }
}
