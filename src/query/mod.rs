
use crate::models::Record;

/// A single search over loaded records, as offered by the history view.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Query {
    /// Timestamp text starts with the given prefix, e.g. a bare `YYYY-MM-DD`.
    DatePrefix(String),
    /// Category equals the given text exactly.
    Category(String),
    /// Description contains the given fragment.
    DescriptionContains(String)
}

impl Query {
    pub fn apply<'r>(&self, records: &'r [Record]) -> Vec<&'r Record> {
        match self {
            Query::DatePrefix(prefix) => by_date_prefix(prefix, records).collect(),
            Query::Category(category) => by_category(category, records).collect(),
            Query::DescriptionContains(fragment) => by_description_contains(fragment, records).collect()
        }
    }
}

// Every filter is lazy and keeps input order; cloning the iterator restarts the scan.

pub fn by_date_prefix<'q, 'r>(prefix: &'q str, records: &'r [Record]) -> impl Iterator<Item = &'r Record> + Clone {
    records.iter().filter(move |record| record.timestamp.to_string().starts_with(prefix))
}

pub fn by_category<'q, 'r>(category: &'q str, records: &'r [Record]) -> impl Iterator<Item = &'r Record> + Clone {
    records.iter().filter(move |record| record.category == category)
}

pub fn by_description_contains<'q, 'r>(fragment: &'q str, records: &'r [Record]) -> impl Iterator<Item = &'r Record> + Clone {
    records.iter().filter(move |record| record.description.contains(fragment))
}
