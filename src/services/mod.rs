pub mod assistant_service;
pub mod chat_service;
pub mod expense_service;
pub mod image_service;
pub mod itinerary_service;
pub mod trip_stats_service;
