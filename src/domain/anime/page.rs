use serde::{Deserialize, Serialize};

/// One page of catalog results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub media: Vec<T>,
    pub page_info: PageInfo,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub total: u32,
    pub current_page: u32,
    pub last_page: u32,
    pub has_next_page: bool,
    pub per_page: u32,
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.media.is_empty()
    }

    /// Page number to request next, if any
    pub fn next_page(&self) -> Option<u32> {
        self.page_info
            .has_next_page
            .then(|| self.page_info.current_page + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_page() {
        let mut page: Page<i64> = Page {
            media: vec![1, 2],
            page_info: PageInfo {
                total: 4,
                current_page: 1,
                last_page: 2,
                has_next_page: true,
                per_page: 2,
            },
        };
        assert_eq!(page.next_page(), Some(2));

        page.page_info.has_next_page = false;
        assert_eq!(page.next_page(), None);
    }
}
