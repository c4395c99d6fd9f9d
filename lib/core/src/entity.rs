use serde::{Deserialize, Deserializer, Serialize};

// Storefront exports write `null` for missing lists.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// A brand as listed on the storefront.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    pub slug: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty", skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl Brand {
    #[inline]
    #[must_use]
    pub fn new(slug: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            name: name.into(),
            tagline: None,
            tags: Vec::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn with_tagline(mut self, tagline: impl Into<String>) -> Self {
        self.tagline = Some(tagline.into());
        self
    }

    #[inline]
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }
}

/// A product belonging to one brand and one of that brand's collections.
///
/// Attribute lists (`tags`, `material`, `colors`, `occasions`, `styles`) are
/// matched as stored; an empty list never matches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub slug: String,
    pub brand_slug: String,
    pub collection_slug: String,
    pub name: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty", skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty", skip_serializing_if = "Vec::is_empty")]
    pub material: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty", skip_serializing_if = "Vec::is_empty")]
    pub colors: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty", skip_serializing_if = "Vec::is_empty")]
    pub occasions: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty", skip_serializing_if = "Vec::is_empty")]
    pub styles: Vec<String>,
}

fn owned<I, S>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    values.into_iter().map(Into::into).collect()
}

impl Product {
    #[inline]
    #[must_use]
    pub fn new(
        slug: impl Into<String>,
        brand_slug: impl Into<String>,
        collection_slug: impl Into<String>,
        name: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            slug: slug.into(),
            brand_slug: brand_slug.into(),
            collection_slug: collection_slug.into(),
            name: name.into(),
            price,
            cover: None,
            tags: Vec::new(),
            material: Vec::new(),
            colors: Vec::new(),
            occasions: Vec::new(),
            styles: Vec::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn with_cover(mut self, cover: impl Into<String>) -> Self {
        self.cover = Some(cover.into());
        self
    }

    #[must_use]
    pub fn with_tags<I: IntoIterator<Item = S>, S: Into<String>>(mut self, tags: I) -> Self {
        self.tags = owned(tags);
        self
    }

    #[must_use]
    pub fn with_material<I: IntoIterator<Item = S>, S: Into<String>>(mut self, material: I) -> Self {
        self.material = owned(material);
        self
    }

    #[must_use]
    pub fn with_colors<I: IntoIterator<Item = S>, S: Into<String>>(mut self, colors: I) -> Self {
        self.colors = owned(colors);
        self
    }

    #[must_use]
    pub fn with_occasions<I: IntoIterator<Item = S>, S: Into<String>>(mut self, occasions: I) -> Self {
        self.occasions = owned(occasions);
        self
    }

    #[must_use]
    pub fn with_styles<I: IntoIterator<Item = S>, S: Into<String>>(mut self, styles: I) -> Self {
        self.styles = owned(styles);
        self
    }
}
