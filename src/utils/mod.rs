#[cfg(test)]
pub mod random;
