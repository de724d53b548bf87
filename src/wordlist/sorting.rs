/*!
 * Length-based ordering of wordlist entries.
 *
 * The highlighter must see longer terms before shorter ones so that a phrase
 * like "lorem ipsum" is wrapped before "ipsum" gets a chance to match inside it.
 */

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::errors::WordlistError;
use crate::wordlist::WordlistEntry;

/// Direction of a length sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Ascending,
    #[default]
    Descending,
}

impl FromStr for SortOrder {
    type Err = WordlistError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(Self::Ascending),
            "desc" => Ok(Self::Descending),
            other => Err(WordlistError::UnknownSortOrder(other.to_string())),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ascending => write!(f, "asc"),
            Self::Descending => write!(f, "desc"),
        }
    }
}

/// Comparator ordering entries by term length in characters.
///
/// Equal lengths compare as `Equal`, so a stable sort keeps input order for ties.
pub fn by_length(order: SortOrder) -> impl Fn(&WordlistEntry, &WordlistEntry) -> Ordering {
    move |a, b| {
        let (la, lb) = (a.word.chars().count(), b.word.chars().count());
        match order {
            SortOrder::Ascending => la.cmp(&lb),
            SortOrder::Descending => lb.cmp(&la),
        }
    }
}
