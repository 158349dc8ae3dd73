pub mod product;

#[cfg(test)]
pub mod mock;
