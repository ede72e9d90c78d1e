use docfolio_types::documentary::Documentary;

/// Featured slot for a plain document listing.
///
/// The first documentary with status "featured" in list order; failing
/// that, the first documentary at all. `None` only for an empty list.
pub fn pick_featured(documentaries: &[Documentary]) -> Option<&Documentary> {
    documentaries
        .iter()
        .find(|d| d.is_featured())
        .or_else(|| documentaries.first())
}
