pub mod budget_service;
pub mod categorization_service;
pub mod currency_service;
pub mod investment_service;
pub mod real_estate_service;
pub mod savings_service;
