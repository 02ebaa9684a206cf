//! # Kiosk Feed Client
//!
//! HTTP implementation of the `FeedSource` seam defined in `kiosk-app`.
//! The client GETs the two list endpoints, decodes their JSON arrays into
//! board records, and maps transport, status, and decode failures into
//! the core error taxonomy. No retry logic lives here: failures are
//! classified and handed back for the UI to surface.

mod client;

pub use client::{FeedClient, DEFAULT_FEED_URL, DEFAULT_TIMEOUT};
