pub mod build;
pub mod open;

#[cfg(test)]
mod tests;
