use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub year: i64,
}

impl Book {
    pub fn new(title: impl Into<String>, author: impl Into<String>, year: i64) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            year,
        }
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} by {} ({})", self.title, self.author, self.year)
    }
}

/// 車輛出廠的地區規格
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionSpec {
    Us,
    Eu,
}

impl RegionSpec {
    pub fn as_str(&self) -> &'static str {
        match self {
            RegionSpec::Us => "US Spec",
            RegionSpec::Eu => "EU Spec",
        }
    }
}

impl fmt::Display for RegionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VehicleInfo {
    pub make: String,
    pub model: String,
    pub spec: RegionSpec,
}

impl VehicleInfo {
    pub fn new(make: impl Into<String>, model: impl Into<String>, spec: RegionSpec) -> Self {
        Self {
            make: make.into(),
            model: model.into(),
            spec,
        }
    }
}
