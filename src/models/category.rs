use serde::Serialize;

/// Care-event category recognised in the log text.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Feeding,
    Stool,
}

impl Category {
    pub fn is_feeding(&self) -> bool {
        matches!(self, Category::Feeding)
    }

    pub fn is_stool(&self) -> bool {
        matches!(self, Category::Stool)
    }
}
