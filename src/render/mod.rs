pub(crate) mod composite;
pub(crate) mod scene;
pub(crate) mod surface;
