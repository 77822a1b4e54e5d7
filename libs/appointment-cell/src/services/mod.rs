pub mod booking;

pub use booking::AppointmentBookingService;
