pub mod datasets;
pub mod gst;
pub mod health;
