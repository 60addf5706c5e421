pub(crate) type Error = anyhow::Error;
pub(crate) type Result<T, E = Error> = std::result::Result<T, E>;
