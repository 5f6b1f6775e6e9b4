/// A two-slot record holding two independently-typed values.
///
/// When `A` or `B` is a reference, the pair only borrows the referent:
/// freeing the pair never touches the memory it points to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pair<A, B> {
    first: A,
    second: B,
}

impl<A, B> Pair<A, B> {
    /// Creates a new pair holding `first` and `second` verbatim.
    pub const fn new(first: A, second: B) -> Self {
        Self { first, second }
    }

    #[must_use]
    pub fn first(&self) -> &A {
        &self.first
    }

    #[must_use]
    pub fn second(&self) -> &B {
        &self.second
    }

    #[must_use]
    pub fn into_parts(self) -> (A, B) {
        (self.first, self.second)
    }

    /// Releases the pair record.
    pub fn free(self) {
        drop(self);
    }
}

impl<A, B> From<(A, B)> for Pair<A, B> {
    fn from((first, second): (A, B)) -> Self {
        Self::new(first, second)
    }
}
