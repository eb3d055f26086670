//! Flattening of comma-delimited multi-value fields (genres, cast).

use crate::constants::LIST_DELIMITER;

/// One derived row of an exploded field: the token plus a borrow of the
/// row it came from.
#[derive(Debug)]
pub struct Exploded<'a, T> {
    pub parent: &'a T,
    pub token: &'a str,
}

// Manual impls: derive would require `T: Clone`/`T: Copy`.
impl<T> Clone for Exploded<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Exploded<'_, T> {}

/// Splits a delimited field into trimmed, non-empty tokens.
pub fn split_list(field: &str) -> impl Iterator<Item = &str> {
    field.split(LIST_DELIMITER).map(str::trim).filter(|token| !token.is_empty())
}

/// Emits one [`Exploded`] per token of `field(row)` for every row.
///
/// Rows whose field is absent produce nothing.
pub fn explode<'a, T, I, F>(rows: I, field: F) -> impl Iterator<Item = Exploded<'a, T>>
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
    F: Fn(&'a T) -> Option<&'a str>,
{
    rows.into_iter().flat_map(move |row| {
        field(row)
            .into_iter()
            .flat_map(|value| split_list(value))
            .map(move |token| Exploded { parent: row, token })
    })
}
