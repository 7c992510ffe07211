//! UI Components
//!
//! Reusable Leptos components.

mod activity_form_modal;
mod ai_trip_modal;
mod auth_modal;
mod category_icon;
mod destination_input;
mod error_modal;
mod field_hint;
mod loading_overlay;
mod nav_bar;
mod protected;
mod trip_card;
mod trip_form_modal;
mod trip_tabs;

pub use activity_form_modal::ActivityFormModal;
pub use ai_trip_modal::AiTripModal;
pub use auth_modal::AuthModal;
pub use category_icon::CategoryIcon;
pub use destination_input::DestinationInput;
pub use error_modal::ErrorModal;
pub use field_hint::FieldHint;
pub use loading_overlay::LoadingOverlay;
pub use nav_bar::NavBar;
pub use protected::Protected;
pub use trip_card::TripCard;
pub use trip_form_modal::TripFormModal;
pub use trip_tabs::TripTabs;
