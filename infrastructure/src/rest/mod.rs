//! Booking REST client (sibling surface to the discussion client)

pub mod client;
pub mod types;

pub use client::{ApiError, BookingApi};
pub use types::{Booking, BookingDraft, Customer, DailyStats, Service, StaffMember};
