//! Page Controllers
//!
//! One component per page role. Each reads its parameters, fetches, and hands
//! the results to `render`.

mod home;
mod listing;
mod detail;

pub use home::HomePage;
pub use listing::{load_listing, sample_meals, ListingFilter, ListingPage};
pub use detail::{load_detail, DetailPage, DetailView};
