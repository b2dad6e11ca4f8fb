use derive_more::{Add, AddAssign, Deref, From, Into, Sub};

/// A length in points (1/72 of an inch), the native PDF page unit.
#[derive(
    Debug, Copy, Clone, PartialEq, PartialOrd, Default, Add, Sub, AddAssign, Deref, From, Into,
)]
pub struct Pt(pub f32);
