pub mod article_lookup;
pub mod navigation;
