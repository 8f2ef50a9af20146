use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyEntry {
    pub item: String,
    pub count: usize,
}

/// Entries ordered by non-increasing count; equal counts keep first-seen order.
pub type FrequencyTable = Vec<FrequencyEntry>;

/// Counts occurrences and ranks them by descending count.
pub fn count_ranked<I>(items: I) -> FrequencyTable
where
    I: IntoIterator<Item = String>,
{
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut table: FrequencyTable = Vec::new();

    for item in items {
        match index.get(&item) {
            Some(&slot) => table[slot].count += 1,
            None => {
                index.insert(item.clone(), table.len());
                table.push(FrequencyEntry { item, count: 1 });
            }
        }
    }

    // `sort_by` is stable, so ties stay in first-seen order.
    table.sort_by(|a, b| b.count.cmp(&a.count));
    table
}

pub fn top_n(table: &[FrequencyEntry], n: usize) -> &[FrequencyEntry] {
    &table[..n.min(table.len())]
}
