use std::fmt;

/// Anything the ordered tree can store.
///
/// The tree never compares whole values, only the keys they expose. Lookups
/// take a `&Key` directly, so there is no need to build a half-filled value
/// just to search for it.
pub trait Keyed {
    type Key: Ord + ?Sized;

    fn key(&self) -> &Self::Key;
}

macro_rules! keyed_by_self {
    ($($t:ty),*) => {
        $(
            impl Keyed for $t {
                type Key = $t;

                fn key(&self) -> &$t {
                    self
                }
            }
        )*
    };
}

keyed_by_self!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, char);

impl Keyed for String {
    type Key = str;

    fn key(&self) -> &str {
        self.as_str()
    }
}

/// A single recipe. Identified by `name`; the tree orders recipes by name only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    pub name: String,
    pub difficulty: i32,
    pub description: String,
    pub mastered: bool,
}

impl Recipe {
    pub fn new(
        name: impl Into<String>,
        difficulty: i32,
        description: impl Into<String>,
        mastered: bool,
    ) -> Self {
        Recipe {
            name: name.into(),
            difficulty,
            description: description.into(),
            mastered,
        }
    }
}

impl Keyed for Recipe {
    type Key = str;

    fn key(&self) -> &str {
        &self.name
    }
}

/// Four newline-terminated lines:
///
/// ```text
/// Name: <name>
/// Difficulty Level: <difficulty>
/// Description: <description>
/// Mastered: Yes|No
/// ```
impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Difficulty Level: {}", self.difficulty)?;
        writeln!(f, "Description: {}", self.description)?;
        writeln!(f, "Mastered: {}", if self.mastered { "Yes" } else { "No" })
    }
}
