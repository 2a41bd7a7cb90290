pub mod brands;
