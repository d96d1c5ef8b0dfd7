pub(crate) mod cpu;
pub(crate) mod dots;
pub(crate) mod record;
pub(crate) mod surface;
