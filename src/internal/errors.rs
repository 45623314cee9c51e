use std::io::{Error, ErrorKind, Result};

pub fn zero_count<A>(who: &str, index: usize) -> Result<A> {
    log::trace!("{}: rejecting run {} with a count of zero", who, index);
    Err(Error::new(
        ErrorKind::InvalidData,
        format!("{}: run {} has a count of zero", who, index),
    ))
}

pub fn too_long<A>(who: &str) -> Result<A> {
    log::trace!("{}: rejecting runs whose decoded length overflows", who);
    Err(Error::new(
        ErrorKind::InvalidInput,
        format!("{}: decoded length does not fit in memory", who),
    ))
}
