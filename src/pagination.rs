use crate::constants::QUESTIONS_PER_PAGE;
use crate::error::{AppError, Result};

/// Return the 1-based `page` window of `items`
///
/// Pages are 1-based: page 0 and negative pages are `NotFound` rather than
/// an empty window.
///
/// A page starting exactly at `items.len()` is accepted and yields an empty
/// slice; a start strictly past the end is `NotFound`.
pub fn paginate<T>(items: &[T], page: i64) -> Result<&[T]> {
    if page < 1 {
        return Err(AppError::NotFound);
    }

    let start = usize::try_from(page - 1)
        .ok()
        .and_then(|p| p.checked_mul(QUESTIONS_PER_PAGE))
        .ok_or(AppError::NotFound)?;

    if start > items.len() {
        tracing::debug!("Page {} out of range ({} items)", page, items.len());
        return Err(AppError::NotFound);
    }

    let end = (start + QUESTIONS_PER_PAGE).min(items.len());
    Ok(&items[start..end])
}
