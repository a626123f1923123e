pub mod budget;
pub mod category;
pub mod investment;
pub mod real_estate;
pub mod savings;
pub mod settings;
