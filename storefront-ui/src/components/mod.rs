pub mod icons;
pub mod product_card;
