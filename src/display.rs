use core::fmt;

use crate::core::PairArray;
use crate::pair::Pair;

impl<A: fmt::Pointer, B: fmt::Pointer> fmt::Display for Pair<A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        fmt::Pointer::fmt(self.first(), f)?;
        f.write_str(", ")?;
        fmt::Pointer::fmt(self.second(), f)?;
        f.write_str(")")
    }
}

/// Renders a `PairArray` as one `Pair <n>: (<first>, <second>)` line per
/// element, numbered from 1 in insertion order.
///
/// Only the identities of the stored pointers are shown, never the referents.
pub struct PairArrayDisplay<'a, A, B> {
    array: &'a PairArray<A, B>,
}

impl<'a, A, B> PairArrayDisplay<'a, A, B> {
    pub(crate) fn new(array: &'a PairArray<A, B>) -> Self {
        Self { array }
    }
}

impl<A: fmt::Pointer, B: fmt::Pointer> fmt::Display for PairArrayDisplay<'_, A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, pair) in self.array.pairs().iter().enumerate() {
            writeln!(f, "Pair {}: {pair}", i + 1)?;
        }
        Ok(())
    }
}

impl<A: fmt::Pointer, B: fmt::Pointer> PairArray<A, B> {
    /// Returns an adapter that formats the array the way `print` writes it.
    #[must_use]
    pub fn display(&self) -> PairArrayDisplay<'_, A, B> {
        PairArrayDisplay::new(self)
    }

    /// Writes one line per pair to standard output.
    #[cfg(feature = "std")]
    pub fn print(&self) {
        std::print!("{}", self.display());
    }
}
