pub mod anime;
pub mod favorite;
