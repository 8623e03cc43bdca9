mod dns;
mod extract;
mod outcome;
mod report;
mod whois;

pub use dns::*;
pub use extract::*;
pub use outcome::*;
pub use report::*;
pub use whois::*;
