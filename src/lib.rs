pub mod extremum;
pub mod samples;
