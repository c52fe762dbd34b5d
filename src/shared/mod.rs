pub mod geo;
pub mod types;
pub mod validation;

#[cfg(test)]
pub mod test_helpers;
