//! Reveal-on-scroll bookkeeping.
//!
//! Each revealable element is tagged with a numeric id when it starts being
//! observed. The gate admits an id once; later intersections of the same
//! element are ignored even if the observer reports them.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Attribute carrying the reveal id on each observed element.
pub const REVEAL_ID_ATTRIBUTE: &str = "data-reveal-id";

/// Options handed to the animation library (`from` tween).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealOptions {
    /// Starting vertical offset
    pub y: f64,
    /// Starting opacity
    pub opacity: f64,
    /// Seconds
    pub duration: f64,
    pub ease: String,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            y: 50.0,
            opacity: 0.0,
            duration: 1.0,
            ease: "power3.out".to_string(),
        }
    }
}

/// Set of reveal ids already animated.
#[derive(Debug, Default)]
pub struct RevealGate {
    revealed: HashSet<u32>,
}

impl RevealGate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` the first time `id` is seen and `false` afterwards.
    pub fn admit(&mut self, id: u32) -> bool {
        self.revealed.insert(id)
    }

    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.revealed.len()
    }
}

/// Parse the value of [`REVEAL_ID_ATTRIBUTE`].
#[must_use]
pub fn parse_reveal_id(value: &str) -> Option<u32> {
    value.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_admits_once() {
        let mut gate = RevealGate::new();
        assert!(gate.admit(3));
        assert!(!gate.admit(3));
        assert!(!gate.admit(3));
        assert_eq!(gate.revealed_count(), 1);
    }

    #[test]
    fn test_ids_independent() {
        let mut gate = RevealGate::new();
        assert!(gate.admit(0));
        assert!(gate.admit(1));
        assert!(gate.admit(2));
        assert_eq!(gate.revealed_count(), 3);
    }

    #[test]
    fn test_default_options() {
        let options = RevealOptions::default();
        assert!((options.y - 50.0).abs() < f64::EPSILON);
        assert!(options.opacity.abs() < f64::EPSILON);
        assert!((options.duration - 1.0).abs() < f64::EPSILON);
        assert_eq!(options.ease, "power3.out");
    }

    #[test]
    fn test_options_serialize_to_library_keys() {
        let json = serde_json::to_value(RevealOptions::default()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"y": 50.0, "opacity": 0.0, "duration": 1.0, "ease": "power3.out"})
        );
    }

    #[test]
    fn test_parse_reveal_id() {
        assert_eq!(parse_reveal_id("7"), Some(7));
        assert_eq!(parse_reveal_id(" 12 "), Some(12));
        assert_eq!(parse_reveal_id("x"), None);
        assert_eq!(parse_reveal_id("-1"), None);
    }
}
