//! Closed sets of named values.
//!
//! An [`Enumeration`] owns a fixed, non-empty set of variants keyed by name.
//! [`Variant`]s are handed out by name and remember which enumeration they
//! came from.

use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnumError {
    #[error("enumeration name cannot be empty")]
    EmptyName,
    #[error("enumeration {0} must have at least one variant")]
    NoVariants(String),
    #[error("variant name cannot be empty")]
    EmptyVariantName,
    #[error("enumeration {enumeration} does not have variant {variant}")]
    UnknownVariant {
        enumeration: String,
        variant: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enumeration<T> {
    name: String,
    variants: BTreeMap<String, T>,
}

impl<T> Enumeration<T> {
    /// Variants are copied in; later changes to the caller's collection do not
    /// affect the enumeration.
    pub fn new<N, I>(name: impl Into<String>, variants: I) -> Result<Self, EnumError>
    where
        N: Into<String>,
        I: IntoIterator<Item = (N, T)>,
    {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(EnumError::EmptyName);
        }

        let mut map = BTreeMap::new();
        for (variant, value) in variants {
            let variant = variant.into();
            if variant.trim().is_empty() {
                return Err(EnumError::EmptyVariantName);
            }
            map.insert(variant, value);
        }

        if map.is_empty() {
            return Err(EnumError::NoVariants(name));
        }

        Ok(Self {
            name,
            variants: map,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Variant names in sorted order.
    #[must_use]
    pub fn variant_names(&self) -> Vec<&str> {
        self.variants.keys().map(String::as_str).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.variants.len()
    }

    /// Always false; construction rejects empty variant sets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    #[must_use]
    pub fn contains(&self, variant: &str) -> bool {
        self.variants.contains_key(variant)
    }
}

impl<T: Clone> Enumeration<T> {
    pub fn instance(&self, variant: &str) -> Result<Variant<T>, EnumError> {
        if variant.trim().is_empty() {
            return Err(EnumError::EmptyVariantName);
        }
        let value = self
            .variants
            .get(variant)
            .ok_or_else(|| EnumError::UnknownVariant {
                enumeration: self.name.clone(),
                variant: variant.to_string(),
            })?;
        Ok(Variant {
            enumeration: self.name.clone(),
            name: variant.to_string(),
            value: value.clone(),
        })
    }
}

impl<T: fmt::Debug> fmt::Display for Enumeration<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Enum{{name: {}, variant count: {}, variants: {:?}}}",
            self.name,
            self.variants.len(),
            self.variants
        )
    }
}

/// One named value drawn from an [`Enumeration`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Variant<T> {
    enumeration: String,
    name: String,
    value: T,
}

impl<T> Variant<T> {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn enumeration(&self) -> &str {
        &self.enumeration
    }

    #[must_use]
    pub fn value(&self) -> &T {
        &self.value
    }

    #[must_use]
    pub fn into_value(self) -> T {
        self.value
    }

    #[must_use]
    pub fn is_instance_of(&self, enumeration: &Enumeration<T>) -> bool {
        self.enumeration == enumeration.name && enumeration.contains(&self.name)
    }
}

impl<T> fmt::Display for Variant<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Variant{{enum: {}, name: {}}}", self.enumeration, self.name)
    }
}
