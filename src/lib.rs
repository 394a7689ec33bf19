pub mod assessment;
pub mod cli;
pub mod client;
pub mod io;
pub mod request;
pub mod schema;
pub mod scores;
