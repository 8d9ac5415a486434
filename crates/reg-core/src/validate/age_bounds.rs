/// Age bounds differ between the two forms that collect an age.
///
/// Registration accepts 13-120 while the edit screen accepts 18-120.
/// The divergence is almost certainly an oversight rather than policy,
/// but both behaviors are load-bearing and are preserved as-is pending
/// product clarification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeBounds {
    Registration,
    Edit,
}

impl AgeBounds {
    pub fn min(self) -> i64 {
        match self {
            Self::Registration => 13,
            Self::Edit => 18,
        }
    }

    pub fn max(self) -> i64 {
        120
    }
}
