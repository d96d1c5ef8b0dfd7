pub(crate) mod caption;
pub(crate) mod compose;
pub(crate) mod engine;
