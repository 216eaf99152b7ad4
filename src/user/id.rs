use std::cmp::Ordering;
use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Formatter;
use std::hash::Hash;
use std::hash::Hasher;
use std::marker::PhantomData;

/// Surrogate identity, typed by the entity it names.
///
/// Matches the `SERIAL` key of the profile table, so the same value
/// addresses an account in either backend. The username is an attribute
/// of the identity, never the identity itself.
pub struct ID<T> {
    inner: i32,
    marker: PhantomData<T>,
}

impl<T> ID<T> {
    pub fn inner(&self) -> i32 {
        self.inner
    }
    /// Successor identity, used by allocators that hand out ids in sequence.
    /// `None` once `i32::MAX` has been handed out, matching the ceiling of a
    /// `SERIAL` column.
    pub fn next(&self) -> Option<Self> {
        self.inner.checked_add(1).map(Self::from)
    }
}

impl<T> From<i32> for ID<T> {
    fn from(inner: i32) -> Self {
        Self {
            inner,
            marker: PhantomData,
        }
    }
}

impl<T> Copy for ID<T> {}
impl<T> Clone for ID<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Eq for ID<T> {}
impl<T> PartialEq for ID<T> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<T> Ord for ID<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.inner.cmp(&other.inner)
    }
}
impl<T> PartialOrd for ID<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Hash for ID<T> {
    fn hash<H>(&self, state: &mut H)
    where
        H: Hasher,
    {
        self.inner.hash(state);
    }
}

impl<T> Debug for ID<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ID").field(&self.inner).finish()
    }
}
impl<T> Display for ID<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.inner, f)
    }
}
