//! Splitting the domain list into fixed-size batches.

/// A contiguous slice of the domain list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Batch<'a> {
    /// Zero-based batch index
    pub index: usize,
    /// Offset of the first domain in the full list
    pub start: usize,
    pub domains: &'a [String],
}

impl Batch<'_> {
    /// Offset one past the last domain in the full list.
    pub fn end(&self) -> usize {
        self.start + self.domains.len()
    }
}

/// Splits `domains` into batches of `batch_size` in list order.
///
/// Every batch but the last is full. An empty list yields no batches.
/// `batch_size` must be non-zero; `Config::validate` guarantees it.
pub fn split_batches(domains: &[String], batch_size: usize) -> Vec<Batch<'_>> {
    let batch_size = batch_size.max(1);
    domains
        .chunks(batch_size)
        .enumerate()
        .map(|(index, chunk)| Batch {
            index,
            start: index * batch_size,
            domains: chunk,
        })
        .collect()
}
