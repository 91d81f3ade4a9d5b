//! Fixed-capacity FIFO sample windows
//!
//! The [`SampleWindow`] is the shared building block of every engine: it owns
//! the eviction order and reports every evicted sample, so aggregate
//! structures stay synchronized with the true window contents.
//!
//! # Example
//!
//! ```
//! use windowstats::window::SampleWindow;
//!
//! let mut window = SampleWindow::new(2).unwrap();
//!
//! assert_eq!(window.push(1.0), None);
//! assert_eq!(window.push(2.0), None);
//! assert_eq!(window.push(3.0), Some(1.0)); // oldest evicted
//! ```

mod fifo;

pub use fifo::SampleWindow;
