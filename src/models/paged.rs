use serde::{Deserialize, Serialize};

/// One page of results plus the total number of matches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PagedData<T> {
    pub data: Vec<T>,
    pub count: u64,
}

impl<T> PagedData<T> {
    pub fn empty() -> Self {
        Self {
            data: Vec::new(),
            count: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl<T> Default for PagedData<T> {
    fn default() -> Self {
        Self::empty()
    }
}
