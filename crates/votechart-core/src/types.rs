use serde::{Deserialize, Deserializer, Serialize};

/// One bar of the chart: the vote similarity between two members.
///
/// Values are expected in `[0, 1]` but are not clamped. A missing or `null`
/// similarity decodes to `NaN`, which later shows up as an undefined bar
/// position instead of an error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimilarityDatum {
    /// Fraction of votes cast identically.
    #[serde(default = "missing_similarity", deserialize_with = "nullable_similarity")]
    pub similarity: f64,
}

impl SimilarityDatum {
    /// Creates a datum from a raw similarity value.
    pub fn new(similarity: f64) -> Self {
        Self { similarity }
    }

    /// Returns `true` when the value lies in the closed unit interval.
    pub fn in_unit_range(&self) -> bool {
        (0.0..=1.0).contains(&self.similarity)
    }
}

impl From<f64> for SimilarityDatum {
    fn from(similarity: f64) -> Self {
        Self::new(similarity)
    }
}

fn missing_similarity() -> f64 {
    f64::NAN
}

fn nullable_similarity<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}

/// Pixel margins around the plot area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    /// Space above the plot area.
    pub top: f64,
    /// Space right of the plot area.
    pub right: f64,
    /// Space below the plot area.
    pub bottom: f64,
    /// Space left of the plot area, where the axis labels sit.
    pub left: f64,
}

impl Margins {
    /// Sum of the left and right margins.
    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    /// Sum of the top and bottom margins.
    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            top: 20.0,
            right: 20.0,
            bottom: 30.0,
            left: 60.0,
        }
    }
}

/// Drawing area derived from a measured container width and a fixed height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutRegion {
    /// Measured width of the container.
    pub width: f64,
    /// Total height allotted to the chart, margins included.
    pub height: f64,
    /// Margins subtracted from the region to obtain the plot area.
    pub margins: Margins,
}

impl LayoutRegion {
    /// Creates a region from its outer dimensions and margins.
    pub fn new(width: f64, height: f64, margins: Margins) -> Self {
        Self {
            width,
            height,
            margins,
        }
    }

    /// Width of the plot area. Non-positive when the container is narrower
    /// than the horizontal margins.
    pub fn inner_width(&self) -> f64 {
        self.width - self.margins.horizontal()
    }

    /// Height of the plot area.
    pub fn inner_height(&self) -> f64 {
        self.height - self.margins.vertical()
    }

    /// Returns `true` when the plot area has no positive width.
    pub fn is_degenerate(&self) -> bool {
        let inner = self.inner_width();
        inner.is_nan() || inner <= 0.0
    }
}
