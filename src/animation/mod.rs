pub(crate) mod blend;
pub(crate) mod ease;
pub(crate) mod lerp;
