pub mod discount;
