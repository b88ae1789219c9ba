//! Closed classification tags for transactions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Categorises a transaction. The set is closed; declaration order doubles as
/// the tie-break ordinal for ranked breakdowns.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Food,
    Transport,
    Entertainment,
    Shopping,
    Bills,
    Salary,
    Gift,
    Other,
}

impl Category {
    /// Every variant, in declaration order.
    pub const ALL: [Category; 8] = [
        Category::Food,
        Category::Transport,
        Category::Entertainment,
        Category::Shopping,
        Category::Bills,
        Category::Salary,
        Category::Gift,
        Category::Other,
    ];

    /// Human-readable label, also used as the default transaction description.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Transport => "Transport",
            Category::Entertainment => "Entertainment",
            Category::Shopping => "Shopping",
            Category::Bills => "Bills",
            Category::Salary => "Salary",
            Category::Gift => "Gift",
            Category::Other => "Other",
        }
    }

    /// Position in declaration order.
    pub fn ordinal(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
