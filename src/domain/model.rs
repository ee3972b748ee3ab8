use crate::utils::error::{KitError, Result};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Case-folded token to occurrence count.
pub type WordCounts = HashMap<String, usize>;

/// A `MM/DD/YYYY` date split into its numeric parts.
///
/// No calendar validation happens here: `02/30/1999` and `13/40/2020` parse
/// fine and compare by their numbers. Whitespace around a part is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateParts {
    pub month: i128,
    pub day: i128,
    pub year: i128,
}

impl DateParts {
    fn sort_key(&self) -> (i128, i128, i128) {
        (self.year, self.month, self.day)
    }
}

impl FromStr for DateParts {
    type Err = KitError;

    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split('/').collect();
        if parts.len() != 3 {
            return Err(KitError::format(
                s,
                format!("expected 3 '/'-separated parts, found {}", parts.len()),
            ));
        }

        let number = |name: &str, raw: &str| -> Result<i128> {
            raw.trim()
                .parse::<i128>()
                .map_err(|_| KitError::format(s, format!("{} '{}' is not a number", name, raw)))
        };

        Ok(Self {
            month: number("month", parts[0])?,
            day: number("day", parts[1])?,
            year: number("year", parts[2])?,
        })
    }
}

impl Ord for DateParts {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

impl PartialOrd for DateParts {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for DateParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}/{:04}", self.month, self.day, self.year)
    }
}

/// A circle described by its radius. Area and diameter are always derived
/// from the current radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn set_radius(&mut self, radius: f64) {
        self.radius = radius;
    }

    pub fn area(&self) -> f64 {
        std::f64::consts::PI * self.radius.powi(2)
    }

    pub fn diameter(&self) -> f64 {
        self.radius * 2.0
    }

    pub fn set_diameter(&mut self, diameter: f64) {
        self.radius = diameter / 2.0;
    }
}

impl Default for Circle {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Circle({})", self.radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_parts() {
        let date: DateParts = "02/29/1972".parse().unwrap();
        assert_eq!(
            date,
            DateParts {
                month: 2,
                day: 29,
                year: 1972
            }
        );
        assert_eq!(date.to_string(), "02/29/1972");
    }

    #[test]
    fn test_date_parts_accept_impossible_dates() {
        assert!("02/30/1999".parse::<DateParts>().is_ok());
        assert!("13/40/2020".parse::<DateParts>().is_ok());
    }

    #[test]
    fn test_date_parts_reject_malformed_input() {
        for bad in ["", "02/29", "02/29/1972/01", "aa/29/1972", "02/29/19x2", "02/ /1972"] {
            let err = bad.parse::<DateParts>().unwrap_err();
            assert!(
                matches!(err, KitError::FormatError { .. }),
                "expected FormatError for {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_date_parts_trim_whitespace() {
        let date: DateParts = " 02/29/1972\n".parse().unwrap();
        assert_eq!(date, "02/29/1972".parse::<DateParts>().unwrap());
        assert_eq!("1 / 2 / 3".parse::<DateParts>().unwrap().year, 3);
    }

    #[test]
    fn test_date_parts_large_year() {
        let far: DateParts = "01/01/99999999999999999999".parse().unwrap();
        let near: DateParts = "12/31/2000".parse().unwrap();
        assert_eq!(far.year, 99_999_999_999_999_999_999);
        assert!(near < far);
    }

    #[test]
    fn test_date_parts_order_year_month_day() {
        let a: DateParts = "12/31/1999".parse().unwrap();
        let b: DateParts = "01/01/2000".parse().unwrap();
        let c: DateParts = "02/01/2000".parse().unwrap();
        let d: DateParts = "02/02/2000".parse().unwrap();
        assert!(a < b && b < c && c < d);
    }

    #[test]
    fn test_circle_defaults_to_unit_radius() {
        let circle = Circle::default();
        assert_eq!(circle.radius(), 1.0);
        assert_eq!(circle.diameter(), 2.0);
        assert!((circle.area() - std::f64::consts::PI).abs() < 1e-12);
    }

    #[test]
    fn test_circle_area() {
        let circle = Circle::new(2.0);
        assert!((circle.area() - 12.566370614359172).abs() < 1e-9);
    }

    #[test]
    fn test_circle_set_diameter_updates_radius_and_area() {
        let mut circle = Circle::new(2.0);
        circle.set_diameter(10.0);
        assert_eq!(circle.radius(), 5.0);
        assert_eq!(circle.diameter(), 10.0);
        assert!((circle.area() - 78.53981633974483).abs() < 1e-9);
    }

    #[test]
    fn test_circle_set_radius_updates_diameter() {
        let mut circle = Circle::default();
        circle.set_radius(3.0);
        assert_eq!(circle.diameter(), 6.0);
    }

    #[test]
    fn test_circle_display() {
        assert_eq!(Circle::new(2.0).to_string(), "Circle(2)");
        assert_eq!(Circle::new(2.5).to_string(), "Circle(2.5)");
    }

    #[test]
    fn test_circle_allows_negative_radius() {
        let circle = Circle::new(-1.0);
        assert_eq!(circle.diameter(), -2.0);
        assert!(circle.area() > 0.0);
    }
}
