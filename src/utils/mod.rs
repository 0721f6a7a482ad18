mod errors;

pub use errors::Error;

pub type ScrapeResult<T> = Result<T, Error>;
