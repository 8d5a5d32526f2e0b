pub mod error;
pub mod sparql;

pub use error::{LinkedDataError, LinkedDataResult};
pub use sparql::{SparqlClient, abbr, extract_dbpedia_types, sanitize};
