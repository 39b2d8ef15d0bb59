pub(crate) mod action;
pub(crate) mod run;
pub(crate) mod scheduler;
pub(crate) mod sequence;
