/// Natural ordering of a value, taken from a single key field.
///
/// Collections compare values through `key()` only, so other fields never influence ordering or uniqueness.
/// The key type must be totally ordered: two distinct keys never compare equal.
pub trait Keyed {
    type Key: Ord;

    fn key(&self) -> &Self::Key;
}
