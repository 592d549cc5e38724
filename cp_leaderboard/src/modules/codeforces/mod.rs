pub mod aggregator;
pub mod crawler;
pub mod generator;

#[cfg(test)]
pub mod fake;
