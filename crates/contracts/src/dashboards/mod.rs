pub mod d400_global_sales;
pub mod d401_products;
pub mod d402_sales_channels;
