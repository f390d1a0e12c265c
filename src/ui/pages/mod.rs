//! Site pages, one per route

mod about;
mod contact;
mod destinations;
mod home;
mod not_found;
mod promotions;
mod specialties;

pub use about::AboutPage;
pub use contact::ContactPage;
pub use destinations::{DestinationsPage, catalog};
pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use promotions::PromotionsPage;
pub use specialties::SpecialtiesPage;
