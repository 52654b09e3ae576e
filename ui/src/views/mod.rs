mod product;

pub use product::ProductView;
