//! # Core Event Types
//!
//! Common types used throughout the event system.

/// Which part of the screen receives keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Focus {
    /// The product table and pager
    Table,
    /// The edit modal
    EditModal,
}

/// Direction of a row or page movement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Forward,
    Backward,
}
