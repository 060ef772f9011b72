// Tabs and reactive callbacks
pub mod callbacks;
pub mod tabs;

// Dashboard charts (d400-d402)
pub mod d400_global_sales;
pub mod d401_products;
pub mod d402_sales_channels;
