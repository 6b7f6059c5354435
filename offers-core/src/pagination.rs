//! Offset/limit paging over in-memory sequences.

/// Drops `offset` items when given, then keeps at most `limit` items when given.
/// Either bound may be absent, in which case it does not restrict the page.
pub fn paginate<T>(items: Vec<T>, offset: Option<usize>, limit: Option<usize>) -> Vec<T> {
    let iter = items.into_iter().skip(offset.unwrap_or(0));
    match limit {
        Some(limit) => iter.take(limit).collect(),
        None => iter.collect(),
    }
}
